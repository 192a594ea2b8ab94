
use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::error::{Result, WorldError};
use crate::level::Level;

pub const PROMPT: &str = "> ";

/// Runs a level as a console game. Commands are read line by line from `input`, everything the
/// player sees is written to `output`.
pub struct Game<R, W> {
    level: Level,
    input: R,
    output: W,
}

enum Outcome {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(level: Level, input: R, output: W) -> Game<R, W> {
        Game { level, input, output }
    }

    pub fn level(&self) -> &Level { &self.level }

    /// Plays until the level is complete, the player quits or the input runs out.
    pub fn run(&mut self) -> Result<()> {
        debug!("Game started");
        let start = self.level.start()?;
        writeln!(self.output, "{}", self.level.describe_room(start))?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            trace!("Command {:?}", command);

            if let Outcome::Quit = self.command(command)? {
                break;
            }

            self.level.record_action();
            if self.level.is_complete() {
                self.level.finish();
                writeln!(self.output, "You have completed {}.", self.level.name())?;
                break;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        debug!("Game exited");
        Ok(())
    }

    fn command(&mut self, command: &str) -> Result<Outcome> {
        let current = self.level.current_room().ok_or(WorldError::NotStarted)?;

        if self.level.room(current).exit(command).is_some() {
            let room = self.level.go(command)?;
            writeln!(self.output, "{}", self.level.describe_room(room))?;
        } else if command.starts_with('q') {
            return Ok(Outcome::Quit);
        } else {
            let exits = self.level.room(current).exit_names();
            if exits.is_empty() {
                writeln!(self.output, "There is no way out of here. Type \"quit\" to give up.")?;
            } else {
                writeln!(self.output, "Try one of the exits ({}) or \"quit\".", exits.join(", "))?;
            }
        }

        Ok(Outcome::Continue)
    }
}
