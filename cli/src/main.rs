mod crack;
mod generate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{value_parser, Args, Parser, Subcommand};
use chainrack_core::{
    Digest, DEFAULT_CHAIN_COUNT, DEFAULT_CHAIN_LENGTH, DEFAULT_WORD_LENGTH,
};

use crack::crack;
use generate::generate;

/// Rainbow table generation and password recovery for MD5 digests.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Generate(Generate),
    Crack(Crack),
}

/// Generate a rainbow table.
#[derive(Args)]
pub struct Generate {
    /// The file where the generated table should be stored.
    path: PathBuf,

    /// The number of chains to store in the table.
    #[arg(short = 'm', long, default_value_t = DEFAULT_CHAIN_COUNT)]
    chains: u64,

    /// The chain length.
    /// Increasing the chain length will reduce the memory used
    /// to store the table but increase the time taken to crack.
    #[arg(short = 't', long, value_parser = value_parser!(u64).range(1..), default_value_t = DEFAULT_CHAIN_LENGTH)]
    chain_length: u64,

    /// The length of the seed words.
    #[arg(short = 'l', long, value_parser = value_parser!(u64).range(1..), default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: u64,

    /// The seed of the random source, for reproducible tables.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,
}

/// Recover the password producing a certain hash digest.
#[derive(Args)]
pub struct Crack {
    /// The digest to attack, in hexadecimal.
    #[arg(value_parser = check_digest)]
    digest: Digest,

    /// The rainbow table file to search.
    path: PathBuf,

    /// The chain length the table was generated with.
    #[arg(short = 't', long, value_parser = value_parser!(u64).range(1..), default_value_t = DEFAULT_CHAIN_LENGTH)]
    chain_length: u64,
}

/// Checks that the digest is 32 lowercase hex characters.
fn check_digest(digest: &str) -> Result<Digest> {
    Ok(digest.parse()?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Generate(gen) => generate(gen)?,
        Commands::Crack(atk) => crack(atk)?,
    }

    Ok(())
}
