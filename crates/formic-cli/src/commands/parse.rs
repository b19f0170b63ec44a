//! Line parsing: one text line into one [`Command`].
//!
//! Verbs are case-insensitive and each has a one-letter alias. Numbers are
//! parsed here; names (colony kinds, resources, insect categories) are passed
//! through untouched and validated by the engine.

use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateColony { kind: String, x: i32, y: i32 },
    AllocateResource { id: i64, kind: String, amount: i64 },
    AdvanceTicks { count: u64 },
    ShowSummary { id: i64 },
    SpawnInsect { id: i64, category: String },
    AddRoom { id: i64, name: String, capacity: Option<u32> },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("malformed {verb} command: {reason}")]
    Malformed { verb: &'static str, reason: String },
}

impl CommandError {
    fn malformed(verb: &'static str, reason: impl Into<String>) -> Self {
        CommandError::Malformed {
            verb,
            reason: reason.into(),
        }
    }
}

/// Usage lines shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("create <x> <y> <type>", "create a colony of <type> at (x, y)"),
    ("resource <id> <kind> <amount>", "deliver resources to a colony (alias: give)"),
    ("tick [count]", "advance all colonies by count ticks (default 1)"),
    ("summary <id>", "show a colony's details"),
    ("spawn <id> <worker|fighter>", "raise an insect in a colony"),
    ("spawn <x> <y> <type>", "same as create"),
    ("room <id> <name> [capacity]", "dig a new room in a colony"),
    ("help", "show this list"),
    ("quit", "leave the simulation"),
];

pub fn parse_command_line(input: &str) -> Result<Command, CommandError> {
    let mut parts = input.split_whitespace();
    let verb = parts
        .next()
        .map(|v| v.to_ascii_lowercase())
        .ok_or(CommandError::Empty)?;

    let command = match verb.as_str() {
        "create" | "c" => create_colony(Args::new("create", parts))?,
        "resource" | "allocate" | "give" | "r" => {
            let mut args = Args::new("resource", parts);
            let id = args.number("id")?;
            let kind = args.word("kind")?.to_string();
            let amount = args.number("amount")?;
            args.finish()?;
            Command::AllocateResource { id, kind, amount }
        }
        "tick" | "t" => {
            let mut args = Args::new("tick", parts);
            let requested: Option<i64> = args.optional_number("count")?;
            args.finish()?;
            Command::AdvanceTicks {
                count: normalize_tick_count(requested),
            }
        }
        "summary" | "s" => {
            let mut args = Args::new("summary", parts);
            let id = args.number("id")?;
            args.finish()?;
            Command::ShowSummary { id }
        }
        // `spawn <x> <y> <type>` is the older spelling of `create`.
        "spawn" if parts.clone().count() == 3 => create_colony(Args::new("spawn", parts))?,
        "spawn" => {
            let mut args = Args::new("spawn", parts);
            let id = args.number("id")?;
            let category = args.word("category")?.to_string();
            args.finish()?;
            Command::SpawnInsect { id, category }
        }
        "room" => {
            let mut args = Args::new("room", parts);
            let id = args.number("id")?;
            let name = args.word("name")?.to_string();
            let capacity = args.optional_number("capacity")?;
            args.finish()?;
            Command::AddRoom { id, name, capacity }
        }
        "help" | "?" => {
            Args::new("help", parts).finish()?;
            Command::Help
        }
        "quit" | "exit" | "q" => {
            Args::new("quit", parts).finish()?;
            Command::Quit
        }
        _ => return Err(CommandError::Unknown(verb)),
    };

    Ok(command)
}

fn create_colony(mut args: Args<'_>) -> Result<Command, CommandError> {
    let x = args.number("x")?;
    let y = args.number("y")?;
    let kind = args.word("type")?.to_string();
    args.finish()?;
    Ok(Command::CreateColony { kind, x, y })
}

/// Missing, zero, or negative tick counts advance a single tick.
fn normalize_tick_count(requested: Option<i64>) -> u64 {
    match requested {
        Some(n) if n > 0 => n as u64,
        _ => 1,
    }
}

/// Positional argument reader for one verb.
struct Args<'a> {
    verb: &'static str,
    parts: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(verb: &'static str, parts: SplitWhitespace<'a>) -> Self {
        Self { verb, parts }
    }

    fn word(&mut self, name: &str) -> Result<&'a str, CommandError> {
        self.parts
            .next()
            .ok_or_else(|| CommandError::malformed(self.verb, format!("missing {name}")))
    }

    fn number<T: FromStr>(&mut self, name: &str) -> Result<T, CommandError> {
        let value = self.word(name)?;
        self.parse(value, name)
    }

    fn optional_number<T: FromStr>(&mut self, name: &str) -> Result<Option<T>, CommandError> {
        match self.parts.next() {
            Some(value) => self.parse(value, name).map(Some),
            None => Ok(None),
        }
    }

    fn parse<T: FromStr>(&self, value: &str, name: &str) -> Result<T, CommandError> {
        value.parse::<T>().map_err(|_| {
            CommandError::malformed(self.verb, format!("invalid {name} '{value}'"))
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.parts.next() {
            Some(extra) => Err(CommandError::malformed(
                self.verb,
                format!("unexpected argument '{extra}'"),
            )),
            None => Ok(()),
        }
    }
}
