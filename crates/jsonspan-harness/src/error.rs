use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a harness test failed.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: jsonspan::ParseError,
    },
    #[error("iteration {iteration} of {} produced a different value", path.display())]
    Diverged { path: PathBuf, iteration: u64 },
}
