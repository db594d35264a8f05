use crate::error::{Result, SequenceError};
use std::path::PathBuf;

pub const DEFAULT_COUNT: u32 = 20;
pub const OUTPUT_PATH: &str = "random_sequence.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: u32,
    pub output: PathBuf,
    /// Fixed RNG seed for reproducible runs. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_COUNT,
            output: PathBuf::from(OUTPUT_PATH),
            seed: None,
        }
    }
}

/// Resolves the requested count from the positional arguments, program name
/// excluded. No argument means [`DEFAULT_COUNT`]; more than one is rejected.
pub fn resolve_count<S: AsRef<str>>(args: &[S]) -> Result<u32> {
    match args {
        [] => Ok(DEFAULT_COUNT),
        [single] => parse_count(single.as_ref()),
        [_, extra, ..] => Err(SequenceError::invalid_argument(
            extra.as_ref(),
            format!("expected at most one count argument, got {}", args.len()),
        )),
    }
}

fn parse_count(raw: &str) -> Result<u32> {
    let value = raw.parse::<i64>().map_err(|err| {
        SequenceError::invalid_argument(raw, format!("not a base-10 integer ({err})"))
    })?;
    if value < 0 {
        return Err(SequenceError::invalid_argument(raw, "count must not be negative"));
    }
    u32::try_from(value).map_err(|_| {
        SequenceError::invalid_argument(raw, format!("count must not exceed {}", u32::MAX))
    })
}
