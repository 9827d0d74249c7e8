//! The interactive prompt loop. A [Session] repeatedly asks for an XYZ file,
//! reports its P_sigma or the reason it could not be computed, and asks whether
//! to go again. A file whose geometry has no usable central atom sends the user
//! straight back to the path prompt. Failures never end the session; only
//! answering "no" or closing the input does.

use std::io::{self, BufRead, Write};

use log::info;

use crate::{Calculator, Error};

/// the suffix every input path must end with. This is case-sensitive
pub const SUFFIX: &str = ".xyz";

const PATH_PROMPT: &str =
    "Please enter the full path for the .xyz file, including the .xyz suffix: ";

const AGAIN_PROMPT: &str =
    "Would you like to go again with another .xyz file? (yes/no): ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    AwaitingPath,
    AskAgain,
    Finished,
    Closed,
}

pub struct Session<'a, R, W> {
    calc: &'a Calculator,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(calc: &'a Calculator, input: R, output: W) -> Self {
        Self {
            calc,
            input,
            output,
        }
    }

    /// run the prompt loop until the user declines to continue or the input
    /// is exhausted
    pub fn run(mut self) -> io::Result<()> {
        let mut state = State::AwaitingPath;
        loop {
            state = match state {
                State::AwaitingPath => self.awaiting_path()?,
                State::AskAgain => self.ask_again()?,
                State::Finished => {
                    self.finish()?;
                    return Ok(());
                }
                State::Closed => {
                    info!("input closed, ending session");
                    return Ok(());
                }
            };
        }
    }

    /// write `prompt` and read one trimmed line, returning None at the end of
    /// the input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_owned()))
    }

    fn awaiting_path(&mut self) -> io::Result<State> {
        let Some(path) = self.prompt(PATH_PROMPT)? else {
            return Ok(State::Closed);
        };
        if !path.ends_with(SUFFIX) {
            writeln!(
                self.output,
                "The file must have '{SUFFIX}' at the end. Ensure all of the \
                 letters in the suffix are lowercase and that you have not \
                 added any spaces after the suffix, then try again."
            )?;
            return Ok(State::AwaitingPath);
        }
        match self.calc.process(&path) {
            Ok(report) => {
                writeln!(self.output, "\n{report}")?;
                Ok(State::AskAgain)
            }
            Err(e) => {
                writeln!(self.output, "{}", describe(&e, &path))?;
                Ok(next_after(&e))
            }
        }
    }

    fn ask_again(&mut self) -> io::Result<State> {
        let Some(answer) = self.prompt(AGAIN_PROMPT)? else {
            return Ok(State::Closed);
        };
        match answer.to_lowercase().as_str() {
            "yes" => Ok(State::AwaitingPath),
            "no" => Ok(State::Finished),
            _ => {
                writeln!(self.output, "Please answer with 'yes' or 'no'.")?;
                Ok(State::AskAgain)
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.output, "Thank you for using psigma.")?;
        // wait for a final keypress so a console window doesn't vanish, but an
        // already-closed input is fine too
        let _ = self.prompt("\nPress enter now to exit the program.")?;
        writeln!(self.output)?;
        Ok(())
    }
}

/// where the session goes after a failed file. Geometries without a
/// trivalent central atom ask for another path right away, everything else
/// asks whether to go again
fn next_after(e: &Error) -> State {
    match e {
        Error::CentralNotFound(_)
        | Error::InsufficientNeighbors { .. }
        | Error::InsufficientAngles(_) => State::AwaitingPath,
        _ => State::AskAgain,
    }
}

/// the message shown to the user when processing `path` fails with `e`
pub fn describe(e: &Error, path: &str) -> String {
    match e {
        Error::NotFound(_) => format!(
            "The file {path} cannot be located or perhaps does not exist. \
             Make sure you have provided the full path, in a format like \
             this: /home/username/Downloads/ethylamine.xyz"
        ),
        Error::CentralNotFound(sym) => {
            format!("No {sym} atom found in the .xyz file.")
        }
        Error::InsufficientNeighbors { symbol, .. } => format!(
            "Not enough atoms bonded to {symbol} to calculate three bond \
             angles."
        ),
        Error::InsufficientAngles(_) => {
            String::from("Could not calculate three bond angles.")
        }
        e => format!("An error occurred: {e}."),
    }
}
