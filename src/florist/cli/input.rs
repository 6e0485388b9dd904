use florist::error::{Result, ShopError};
use florist::validate;
use std::io::{BufRead, Write};

/// Where operator answers come from, one line at a time.
/// `None` means the input is exhausted.
pub trait InputSource {
    fn read_line(&mut self) -> Option<String>;
}

pub struct StdinSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinSource<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("failed to read input: {}", e);
                None
            }
        }
    }
}

/// Canned answers, for tests.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Asks questions and keeps asking until the answer parses.
pub struct Prompter<I: InputSource, W: Write> {
    input: I,
    out: W,
}

impl<I: InputSource, W: Write> Prompter<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        if text.ends_with('\n') {
            write!(self.out, "{}", text)?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Prints `prompt` and returns the raw answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.input.read_line().ok_or(ShopError::InputClosed)
    }

    /// Re-prompts until `parse` accepts the answer. Validation failures are
    /// shown to the operator; any other error is returned.
    pub fn ask_with<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(ShopError::Invalid { reason, .. }) => self.say(&format!("Wrong format! {}", reason))?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.ask_with(prompt, validate::yes_no)
    }

    pub fn choose(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        self.ask_with(prompt, |s| validate::choice(s, min, max))
    }

    pub fn pause(&mut self) -> Result<()> {
        self.ask("Press \"ENTER\" to continue...")?;
        Ok(())
    }
}
