//! Line-based interactive prompts.

use std::io::{BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

/// Wording and acceptance rule for one [`Prompter::confirm`] dialogue.
#[derive(Clone, Copy)]
pub struct Confirmation<'a> {
    /// Shown before the candidate, e.g. `Sanitized folder name`.
    pub label: &'a str,
    /// The yes/no question; ` (y/n)` is appended.
    pub question: &'a str,
    /// Asked after a rejection to read a replacement value.
    pub replacement: &'a str,
    /// Returns a reason when a candidate must not be offered for acceptance.
    pub check: fn(&str) -> Option<&'static str>,
}

/// Reads answers from a line source and writes prompts to a sink.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// Print one line of dialogue.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Print `prompt` and read one answer line, without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(line)
    }

    /// Offer `transform(initial)` until the user accepts it.
    ///
    /// Every rejection reads a replacement line which goes through `transform`
    /// again. There is no retry limit; the loop ends on acceptance or when the
    /// input is exhausted.
    pub fn confirm<F>(&mut self, initial: &str, text: &Confirmation<'_>, transform: F) -> Result<String>
    where
        F: Fn(&str) -> String,
    {
        let mut candidate = transform(initial);
        loop {
            match (text.check)(&candidate) {
                Some(reason) => {
                    tracing::debug!("Rejected candidate {:?}: {}", candidate, reason);
                    self.say(&format!("Cannot use \"{}\": {}", candidate, reason))?;
                }
                None => {
                    self.say(&format!("{}: \"{}\"", text.label, candidate))?;
                    let response = self.ask(&format!("{} (y/n)", text.question))?;
                    if is_affirmative(&response) {
                        return Ok(candidate);
                    }
                }
            }

            let replacement = self.ask(text.replacement)?;
            candidate = transform(&replacement);
        }
    }
}

/// A response is a yes when its first character is `y` or `Y`.
pub fn is_affirmative(response: &str) -> bool {
    response
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
