use std::io;

use thiserror::Error;

use crate::DIGEST_LENGTH;

pub type ChainrackResult<T> = std::result::Result<T, ChainrackError>;

#[derive(Error, Debug)]
pub enum ChainrackError {
    #[error("A chain must be at least one column long")]
    ChainLength,

    #[error("Seed words must be at least one character long")]
    WordLength,

    #[error("`{0}` is not a {DIGEST_LENGTH}-character lowercase hex digest")]
    InvalidDigest(String),

    #[error(
        "Unable to access the table file. Make sure the right permissions are available"
    )]
    Io(#[from] io::Error),

    #[error("Line {0} of the table file does not hold exactly two whitespace-separated fields")]
    MalformedLine(usize),
}
