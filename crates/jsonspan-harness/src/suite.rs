//! The fixture checks and the timed parse loop.
//!
//! Every test returns its own [`Tally`]; [`Suite::run`] adds them up. There
//! are no process-wide counters.

use std::{
    fs,
    io::{self, Write},
    ops::AddAssign,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use jsonspan::{ParserOptions, Value};
use tracing::{debug, info, warn};

use crate::{error::HarnessError, report::Reporter};

const SIMPLE_FIXTURE: &str = "test-simple.json";
const FIXTURE: &str = "test.json";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub run: u32,
    pub passed: u32,
}

impl Tally {
    fn single(passed: bool) -> Self {
        Self {
            run: 1,
            passed: u32::from(passed),
        }
    }

    pub fn all_passed(self) -> bool {
        self.run == self.passed
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.run += other.run;
        self.passed += other.passed;
    }
}

pub struct Suite {
    pub fixtures: PathBuf,
    pub iterations: u64,
    pub options: ParserOptions,
}

impl Suite {
    /// Runs every test, writing the report as it goes.
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> io::Result<Tally> {
        let mut tally = Tally::default();

        reporter.banner("running unit tests")?;
        tally += check("test_simple_json_parsing", reporter, || {
            self.parse_fixture(SIMPLE_FIXTURE).map(drop)
        })?;
        tally += check("test_json_parsing", reporter, || {
            self.parse_fixture(FIXTURE).map(drop)
        })?;

        reporter.banner("running performance tests")?;
        let perf = self.perf(FIXTURE);
        match &perf {
            Ok(elapsed) => reporter.timing("test_json_parsing", *elapsed)?,
            Err(err) => reporter.perf_failure(err)?,
        }
        tally += check("test_json_perf_test", reporter, || perf.map(drop))?;

        reporter.summary(tally)?;
        Ok(tally)
    }

    fn read_fixture(&self, name: &str) -> Result<(PathBuf, Vec<u8>), HarnessError> {
        let path = self.fixtures.join(name);
        let bytes = fs::read(&path).map_err(|source| HarnessError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded fixture");
        Ok((path, bytes))
    }

    fn parse_fixture(&self, name: &str) -> Result<Value, HarnessError> {
        let (path, bytes) = self.read_fixture(name)?;
        parse_bytes(&path, &bytes, &self.options)
    }

    /// Parses the fixture `iterations` times. Every result must equal the
    /// first one.
    fn perf(&self, name: &str) -> Result<Duration, HarnessError> {
        let (path, bytes) = self.read_fixture(name)?;
        info!(path = %path.display(), iterations = self.iterations, "starting timed parse loop");

        let start = Instant::now();
        if self.iterations == 0 {
            return Ok(start.elapsed());
        }
        let first = parse_bytes(&path, &bytes, &self.options)?;
        for iteration in 1..self.iterations {
            if parse_bytes(&path, &bytes, &self.options)? != first {
                return Err(HarnessError::Diverged { path, iteration });
            }
        }
        Ok(start.elapsed())
    }
}

fn check<W: Write>(
    name: &str,
    reporter: &mut Reporter<W>,
    test: impl FnOnce() -> Result<(), HarnessError>,
) -> io::Result<Tally> {
    let result = test();
    if let Err(err) = &result {
        warn!(test = name, error = %err, "test failed");
    }
    reporter.outcome(name, &result)?;
    Ok(Tally::single(result.is_ok()))
}

fn parse_bytes(path: &Path, bytes: &[u8], options: &ParserOptions) -> Result<Value, HarnessError> {
    jsonspan::parse_with_options(bytes, options).map_err(|source| HarnessError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
