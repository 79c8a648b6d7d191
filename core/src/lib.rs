pub mod chain;
pub mod error;
pub mod hash;
pub mod reduce;
pub mod table;

pub use {
    chain::{generate_password, walk_chain},
    error::{ChainrackError, ChainrackResult},
    hash::{hash, Digest},
    reduce::reduce,
    table::{CrackOutcome, Table, TableStats},
};

/// The alphabet candidate words are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// The length of a digest, in hex characters.
pub const DIGEST_LENGTH: usize = 32;

/// The width of a reduced word.
/// The reduction function always produces words of this length,
/// whatever the seed length of the table.
pub const REDUCED_WORD_LENGTH: usize = 5;

/// The default number of chains in a table.
pub const DEFAULT_CHAIN_COUNT: u64 = 10_000;

/// The default chain length.
pub const DEFAULT_CHAIN_LENGTH: u64 = 100;

/// The default seed word length.
pub const DEFAULT_WORD_LENGTH: u64 = 5;
