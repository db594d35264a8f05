pub mod config;
pub mod error;
pub mod utils;

pub use config::{resolve_count, GeneratorConfig, DEFAULT_COUNT, OUTPUT_PATH};
pub use error::{Result, SequenceError};
pub use utils::{
	generate_permutation,
	parse_sequence,
	read_sequence,
	write_sequence,
	Permutation,
};

/// Shuffles `config.count` values and writes them to `config.output`,
/// returning what was written.
pub fn generate_sequence_file(config: &GeneratorConfig) -> Result<Permutation> {
	log::debug!("generator config: {config:?}");
	let permutation = generate_permutation(config.count, config.seed);
	write_sequence(&permutation, &config.output)?;
	Ok(permutation)
}
