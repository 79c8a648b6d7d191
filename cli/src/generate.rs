use anyhow::{Context, Result};
use chainrack_core::Table;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::Generate;

pub fn generate(gen: Generate) -> Result<()> {
    let mut table = Table::new(gen.chains, gen.chain_length, gen.word_length as usize)?;
    let mut rng = ChaCha20Rng::seed_from_u64(gen.seed);

    info!(
        "generating {} chains of length {}",
        gen.chains, gen.chain_length
    );
    let stats = table.generate(&mut rng);
    info!("{stats}");

    table
        .store(&gen.path)
        .context("Unable to store the rainbow table")?;
    info!("table stored at {}", gen.path.display());

    Ok(())
}
