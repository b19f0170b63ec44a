//! Reply formatting for the terminal and for JSON consumers.

use colored::Colorize;
use formic::prelude::*;
use serde_json::json;

use super::parse::USAGE;
use super::shell::Reply;

/// Human-readable rendering of a reply.
pub fn text(reply: &Reply, registry: &Registry) -> String {
    match reply {
        Reply::Created { id, kind, position } => format!(
            "{} Colony of type {} created at {} with id {}.",
            "✓".green(),
            kind.cyan(),
            position,
            id.to_string().cyan()
        ),
        Reply::Allocated {
            id,
            kind,
            amount,
            intake,
        } => match intake {
            ResourceIntake::Stored { total } => format!(
                "Allocated {} {} to colony {}. Food stock: {}",
                amount,
                kind,
                id,
                total.to_string().cyan()
            ),
            ResourceIntake::Wasted => format!(
                "{} Colony {} has collapsed; {} {} went to waste.",
                "!".yellow(),
                id,
                amount,
                kind
            ),
        },
        Reply::Ticked { report } => ticked(report, registry),
        Reply::Summary { id, snapshot } => summary(*id, snapshot),
        Reply::Spawned {
            id,
            insect,
            population,
        } => format!(
            "Colony {} raised a {} insect. Insects: {}",
            id,
            insect.join(" + ").cyan(),
            population
        ),
        Reply::RoomAdded { id, name, rooms } => {
            format!("Colony {} dug room '{}'. Rooms: {}", id, name, rooms)
        }
        Reply::Help => help(),
        Reply::Farewell => "Goodbye.".dimmed().to_string(),
    }
}

fn ticked(report: &TickReport, registry: &Registry) -> String {
    let mut lines = vec![format!(
        "Simulating {} tick{}.",
        report.rounds,
        if report.rounds == 1 { "" } else { "s" }
    )];
    for event in &report.events {
        match event {
            RegistryEvent::QueenPerished { tick, colony } => {
                let kind = registry.get(*colony).map(Colony::kind).unwrap_or("?");
                lines.push(format!(
                    "  {} Tick {}: the queen of colony {} ({}) has perished due to starvation.",
                    "✗".red(),
                    tick,
                    colony,
                    kind
                ));
            }
        }
    }
    lines.join("\n")
}

fn summary(id: ColonyId, snapshot: &ColonySnapshot) -> String {
    let queen = if snapshot.queen_alive {
        "Yes".green()
    } else {
        "No".red()
    };

    let mut lines = vec![
        format!("{}", format!("Colony {}", id).white().bold()),
        format!("  Type:        {}", snapshot.kind),
        format!("  Location:    {}", snapshot.position),
        format!("  Food Stock:  {}", snapshot.food_stock),
        format!("  Queen Alive: {}", queen),
        format!("  Rooms:       {}", snapshot.room_count),
    ];
    for room in &snapshot.rooms {
        lines.push(format!("    - {}", room.dimmed()));
    }
    lines.push(format!("  Insects:     {}", snapshot.insect_count));
    for labels in &snapshot.insects {
        lines.push(format!("    - {}", labels.join(" + ").dimmed()));
    }
    lines.join("\n")
}

fn help() -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut lines = vec![format!("{}", "Commands".blue().bold())];
    for (usage, about) in USAGE {
        lines.push(format!("  {:width$}  {}", usage, about.dimmed(), width = width));
    }
    lines.join("\n")
}

/// JSON rendering of a reply, one line.
pub fn json(reply: &Reply) -> serde_json::Result<String> {
    serde_json::to_string(reply)
}

pub fn error_text(err: &dyn std::error::Error) -> String {
    format!("{} {}", "error:".red().bold(), err)
}

pub fn error_json(err: &dyn std::error::Error) -> String {
    json!({ "error": err.to_string() }).to_string()
}
