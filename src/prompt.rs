use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Decides whether to continue when the target directory already has content.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self(message)
    }
}

/// Answers every question with yes (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        tracing::info!("assuming yes: {}", message);
        Ok(true)
    }
}

/// Blocks on a `[y/N]` answer. End of input counts as no.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Terminal<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        write!(self.output, "{} [y/N] ", message)
            .and_then(|_| self.output.flush())
            .with_context(|| format!("writing prompt `{message}`"))?;
        let mut buf = String::new();
        self.input
            .read_line(&mut buf)
            .with_context(|| format!("reading input for `{message}`"))?;
        let answer = buf.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}
