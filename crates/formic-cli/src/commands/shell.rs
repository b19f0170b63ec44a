//! The command loop: read a line, run it against the registry, print the reply.
//!
//! Nothing that goes wrong inside a command ends the loop. Only `quit` or the
//! end of input does.

use std::io::{self, BufRead, Write};

use formic::formic_core::error::Result as SimResult;
use formic::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::parse::{parse_command_line, Command, CommandError};
use super::render;

/// How replies are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per reply.
    Json,
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    Created {
        id: ColonyId,
        kind: String,
        position: Position,
    },
    Allocated {
        id: ColonyId,
        kind: String,
        amount: i64,
        intake: ResourceIntake,
    },
    Ticked {
        report: TickReport,
    },
    Summary {
        id: ColonyId,
        snapshot: ColonySnapshot,
    },
    Spawned {
        id: ColonyId,
        insect: Vec<String>,
        population: usize,
    },
    RoomAdded {
        id: ColonyId,
        name: String,
        rooms: usize,
    },
    Help,
    Farewell,
}

pub struct Shell<'a> {
    registry: &'a mut Registry,
    format: OutputFormat,
    prompt: Option<String>,
}

impl<'a> Shell<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            format: OutputFormat::Text,
            prompt: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Print `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn registry(&self) -> &Registry {
        &*self.registry
    }

    /// Run one parsed command against the registry.
    pub fn execute(&mut self, command: Command) -> SimResult<Reply> {
        debug!(?command, "dispatching");
        let registry = &mut *self.registry;

        let reply = match command {
            Command::CreateColony { kind, x, y } => {
                let id = registry.create_colony(kind.clone(), x, y);
                Reply::Created {
                    id,
                    kind,
                    position: Position::new(x, y),
                }
            }
            Command::AllocateResource { id, kind, amount } => {
                let id = registry.resolve(id)?;
                let intake = registry.allocate_resources(id, &kind, amount)?;
                Reply::Allocated {
                    id,
                    kind,
                    amount,
                    intake,
                }
            }
            Command::AdvanceTicks { count } => Reply::Ticked {
                report: registry.execute_ticks(count),
            },
            Command::ShowSummary { id } => {
                let id = registry.resolve(id)?;
                Reply::Summary {
                    id,
                    snapshot: registry.display_summary(id)?,
                }
            }
            Command::SpawnInsect { id, category } => {
                let id = registry.resolve(id)?;
                let category: InsectCategory = category.parse()?;
                let population = registry.spawn_insect(id, category)?;
                let insect = registry
                    .get(id)
                    .and_then(|colony| colony.insects().last())
                    .map(Insect::describe)
                    .unwrap_or_default();
                Reply::Spawned {
                    id,
                    insect,
                    population,
                }
            }
            Command::AddRoom { id, name, capacity } => {
                let id = registry.resolve(id)?;
                let rooms = registry.add_room(id, name.clone(), capacity)?;
                Reply::RoomAdded { id, name, rooms }
            }
            Command::Help => Reply::Help,
            Command::Quit => Reply::Farewell,
        };

        Ok(reply)
    }

    /// Parse and run one line, writing the reply or error to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match parse_command_line(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(err) => {
                self.write_error(&err, out)?;
                return Ok(Flow::Continue);
            }
        };

        let flow = if command == Command::Quit {
            Flow::Quit
        } else {
            Flow::Continue
        };

        match self.execute(command) {
            Ok(reply) => self.write_reply(&reply, out)?,
            Err(err) => self.write_error(&err, out)?,
        }

        Ok(flow)
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            if self.handle_line(&line, &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    fn write_reply<W: Write>(&self, reply: &Reply, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", render::text(reply, self.registry())),
            OutputFormat::Json => writeln!(out, "{}", render::json(reply)?),
        }
    }

    fn write_error<W: Write>(&self, err: &dyn std::error::Error, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", render::error_text(err)),
            OutputFormat::Json => writeln!(out, "{}", render::error_json(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(registry: &mut Registry, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Shell::new(registry).run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn create_returns_sequential_ids() {
        let mut registry = Registry::new();
        let mut shell = Shell::new(&mut registry);
        for expected in 0..3 {
            let reply = shell
                .execute(Command::CreateColony { kind: "Nomad".into(), x: 1, y: 2 })
                .unwrap();
            assert_eq!(
                reply,
                Reply::Created {
                    id: ColonyId(expected),
                    kind: "Nomad".into(),
                    position: Position::new(1, 2),
                }
            );
        }
    }

    #[test]
    fn engine_errors_surface_unchanged() {
        let mut registry = Registry::new();
        let mut shell = Shell::new(&mut registry);
        shell
            .execute(Command::CreateColony { kind: "Nomad".into(), x: 0, y: 0 })
            .unwrap();

        assert_eq!(
            shell.execute(Command::ShowSummary { id: 99 }),
            Err(SimError::InvalidColonyId(99))
        );
        assert_eq!(
            shell.execute(Command::AllocateResource { id: 0, kind: "sand".into(), amount: 1 }),
            Err(SimError::UnknownResourceKind("sand".into()))
        );
        assert_eq!(
            shell.execute(Command::SpawnInsect { id: 0, category: "drone".into() }),
            Err(SimError::InvalidCategory("drone".into()))
        );
        assert_eq!(shell.registry().colonies()[0].insects().len(), 0);
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let mut registry = Registry::new();
        let output = run_script(
            &mut registry,
            "bogus\nsummary 5\ncreate x y z\n\ncreate 1 1 Nomad\nsummary 0\n",
        );
        assert!(output.contains("unknown command: bogus"), "{output}");
        assert!(output.contains("invalid colony id: 5"), "{output}");
        assert!(output.contains("malformed create command"), "{output}");
        assert!(output.contains("Type:        Nomad"), "{output}");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn oversized_delivery_keeps_the_loop_running() {
        let mut registry = Registry::new();
        let output = run_script(
            &mut registry,
            "create 0 0 A\nresource 0 food 9223372036854775807\nsummary 0\n",
        );
        assert!(output.contains("cannot absorb 9223372036854775807"), "{output}");
        assert!(output.contains("Food Stock:  100"), "{output}");
        assert_eq!(registry.colonies()[0].food_stock(), 100);
    }

    #[test]
    fn spawn_reply_matches_stored_insect() {
        let mut registry = Registry::new();
        let mut shell = Shell::new(&mut registry);
        shell
            .execute(Command::CreateColony { kind: "Nomad".into(), x: 0, y: 0 })
            .unwrap();
        shell
            .execute(Command::SpawnInsect { id: 0, category: "worker".into() })
            .unwrap();
        let reply = shell
            .execute(Command::SpawnInsect { id: 0, category: "Fighter".into() })
            .unwrap();

        let stored = shell.registry().colonies()[0].insects()[1].describe();
        assert_eq!(
            reply,
            Reply::Spawned { id: ColonyId(0), insect: stored, population: 2 }
        );
    }

    #[test]
    fn quit_stops_reading() {
        let mut registry = Registry::new();
        run_script(&mut registry, "create 0 0 A\nquit\ncreate 0 0 B\n");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn prompt_is_printed_per_line() {
        colored::control::set_override(false);
        let mut registry = Registry::new();
        let mut out = Vec::new();
        Shell::new(&mut registry)
            .with_prompt("> ")
            .run("tick\nquit\n".as_bytes(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("> ").count(), 2);
    }

    #[test]
    fn json_replies_are_one_object_per_line() {
        let mut registry = Registry::new();
        let mut out = Vec::new();
        Shell::new(&mut registry)
            .with_format(OutputFormat::Json)
            .run("create 3 4 Nomad\nsummary 9\n".as_bytes(), &mut out)
            .unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["reply"], "created");
        assert_eq!(lines[0]["position"]["y"], 4);
        assert_eq!(lines[1]["error"], "invalid colony id: 9");
    }
}
