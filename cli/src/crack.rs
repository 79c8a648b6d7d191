use anyhow::{Context, Result};
use chainrack_core::{CrackOutcome, Table};

use crate::Crack;

pub fn crack(atk: Crack) -> Result<()> {
    let table = Table::load(&atk.path, atk.chain_length)
        .context("Unable to load the rainbow table")?;

    match table.crack(&atk.digest) {
        outcome @ CrackOutcome::Found(_) => println!("{outcome}"),
        miss => eprintln!("{miss}"),
    }

    Ok(())
}
