use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use jsonspan::ParserOptions;

/// Fixture checks and a timed parse loop for the jsonspan decoder.
#[derive(Debug, Parser)]
#[command(name = "jsonspan-harness", version, about)]
pub struct Cli {
    /// Directory holding `test-simple.json` and `test.json`.
    #[arg(
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"),
        value_hint = ValueHint::DirPath
    )]
    pub fixtures: PathBuf,

    /// How many times the performance test parses `test.json`.
    #[arg(long, default_value_t = 100_000)]
    pub iterations: u64,

    /// Nesting limit handed to the decoder.
    #[arg(long, default_value_t = ParserOptions::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Colorize PASSED/FAILED markers: auto|always|never
    #[arg(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}

impl Cli {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.max_depth,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
