pub mod permutation;
pub mod serialization;

pub use permutation::{generate_permutation, Permutation};
pub use serialization::{parse_sequence, read_sequence, write_sequence};
