//! Console report in a fixed, line-oriented layout.

use std::{
    io::{self, Write},
    time::Duration,
};

use crate::{error::HarnessError, suite::Tally};

pub const LINE_WIDTH: usize = 80;

const GREEN: &str = "\u{1b}[0;32m";
const RED: &str = "\u{1b}[0;31m";
const RESET: &str = "\u{1b}[0m";

#[derive(Copy, Clone, Debug)]
enum Status {
    Passed,
    Failed,
}

pub struct Reporter<W> {
    out: W,
    colorize: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self { out, colorize }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(LINE_WIDTH))
    }

    fn status(&self, status: Status) -> String {
        let (label, color) = match status {
            Status::Passed => ("PASSED", GREEN),
            Status::Failed => ("FAILED", RED),
        };
        if self.colorize {
            format!("{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    /// Title framed by rules above and below.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "{title}")?;
        self.rule()
    }

    pub fn outcome(&mut self, name: &str, result: &Result<(), HarnessError>) -> io::Result<()> {
        let left = format!("running test: {name:>56}");
        match result {
            Ok(()) => writeln!(self.out, "{left} ...{}", self.status(Status::Passed)),
            Err(err) => {
                writeln!(self.out, "{left} ...{}", self.status(Status::Failed))?;
                writeln!(self.out, "  ERROR: {err}")
            }
        }
    }

    pub fn timing(&mut self, label: &str, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "{label} execution time: {}", format_time(elapsed))
    }

    pub fn perf_failure(&mut self, err: &HarnessError) -> io::Result<()> {
        writeln!(self.out, "Performance test failed: {err}")
    }

    pub fn summary(&mut self, tally: Tally) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "tests run: {}", tally.run)?;
        writeln!(self.out, "tests passed: {}", tally.passed)?;
        self.rule()?;
        if tally.all_passed() {
            writeln!(self.out, "all tests {}", self.status(Status::Passed))
        } else {
            writeln!(self.out, "some tests {}", self.status(Status::Failed))
        }
    }
}

/// `hh:mm:ss.mmm`, milliseconds truncated.
pub fn format_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let millis = elapsed.subsec_millis();
    let (mins, secs) = (secs / 60, secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    format!("{hours:02}:{mins:02}:{secs:02}.{millis:03}")
}
