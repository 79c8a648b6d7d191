use std::{
    collections::HashSet,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    chain::{generate_password, walk_chain},
    error::{ChainrackError, ChainrackResult},
    hash::{hash, Digest},
    reduce::reduce,
    ALPHABET,
};

/// A rainbow table mapping chain endpoint digests to chain seeds.
///
/// A table is either populated in memory by [`Table::generate`] or loaded
/// back from disk by [`Table::load`]; the two instances are equivalent as
/// far as [`Table::crack`] is concerned.
pub struct Table {
    /// The number of chains to store.
    m: u64,
    /// The length of a chain.
    chain_length: u64,
    /// The length of the seed words.
    word_length: usize,
    /// The chains, keyed by endpoint digest, in insertion order.
    chains: IndexMap<Digest, String>,
    /// Every distinct word seen while generating, for the statistics only.
    unique: HashSet<String>,
}

/// Coverage statistics of a generated table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStats {
    /// The number of distinct words seen across all chains.
    pub unique_words: usize,
    /// The number of words the chains would hold if they never merged.
    pub theoretical_max: u64,
    /// The fraction of chain slots holding a distinct word.
    pub purity: f64,
    /// The fraction of chain slots wasted on merges, `1 - purity`.
    pub collision_rate: f64,
    /// The fraction of the full keyspace the table touches.
    pub coverage: f64,
}

impl Display for TableStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Size: {}/{} \tPure: {:.2}% \tCollisions: {:.2}% \tCoverage: {:.2}%",
            self.unique_words,
            self.theoretical_max,
            self.purity * 100.,
            self.collision_rate * 100.,
            self.coverage * 100.,
        )
    }
}

/// The result of a crack attempt.
///
/// The two misses are distinct outcomes: [`CrackOutcome::NotInTable`] means
/// no chain claims the digest, while [`CrackOutcome::NotRecovered`] means a
/// chain was located but replaying it never produced the digest, which
/// happens when unrelated chains merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrackOutcome {
    /// The plaintext hashing to the target digest.
    Found(String),
    /// The digest was not located in any chain.
    NotInTable,
    /// A candidate chain was located but did not contain the plaintext.
    NotRecovered,
}

impl Display for CrackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrackOutcome::Found(password) => write!(f, "The password is: {password}"),
            CrackOutcome::NotInTable => write!(f, "No such hash in table"),
            CrackOutcome::NotRecovered => write!(f, "No such password found"),
        }
    }
}

impl Table {
    /// Creates an empty table.
    ///
    /// `m` is the number of chains [`Table::generate`] will store,
    /// `chain_length` the number of words in a chain and `word_length` the
    /// length of the seed words.
    pub fn new(m: u64, chain_length: u64, word_length: usize) -> ChainrackResult<Self> {
        if chain_length < 1 {
            return Err(ChainrackError::ChainLength);
        }

        if word_length < 1 {
            return Err(ChainrackError::WordLength);
        }

        Ok(Self {
            m,
            chain_length,
            word_length,
            chains: IndexMap::new(),
            unique: HashSet::new(),
        })
    }

    /// Returns the number of chains stored in the table.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Returns the length of the chains.
    pub fn chain_length(&self) -> u64 {
        self.chain_length
    }

    /// Returns an iterator over the (endpoint digest, seed) entries of the
    /// table, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Digest, &str)> {
        self.chains.iter().map(|(digest, seed)| (digest, seed.as_str()))
    }

    /// Populates the table with `m` chains and reports coverage statistics.
    ///
    /// Each chain starts from a random seed drawn from `rng`. An attempt
    /// whose endpoint digest is already stored is discarded and retried
    /// with a fresh seed, so the table ends up with exactly `m` distinct
    /// keys.
    pub fn generate(&mut self, rng: &mut impl Rng) -> TableStats {
        while (self.chains.len() as u64) < self.m {
            let seed = generate_password(rng, self.word_length);
            let (endpoint, visited) = walk_chain(&seed, self.chain_length);
            let endpoint_digest = hash(&endpoint);

            if self.chains.contains_key(&endpoint_digest) {
                debug!("endpoint collision on {endpoint_digest}, retrying");
                continue;
            }

            self.unique.extend(visited);
            self.chains.insert(endpoint_digest, seed);
        }

        self.stats()
    }

    /// Returns the coverage statistics of the table.
    pub fn stats(&self) -> TableStats {
        let theoretical_max = self.m * self.chain_length;
        let purity = if theoretical_max == 0 {
            0.
        } else {
            self.unique.len() as f64 / theoretical_max as f64
        };
        let keyspace = (ALPHABET.len() as f64).powi(self.word_length as i32);

        TableStats {
            unique_words: self.unique.len(),
            theoretical_max,
            purity,
            collision_rate: 1. - purity,
            coverage: self.unique.len() as f64 / keyspace,
        }
    }

    /// Stores the table to the given path.
    pub fn store(&self, path: &Path) -> ChainrackResult<()> {
        let file = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        self.write_to(BufWriter::new(file))
    }

    /// Writes the table, one `<seed> <endpoint digest>` line per chain.
    ///
    /// Entries are written in insertion order, so a table generated from a
    /// fixed random seed always serializes to the same bytes.
    pub fn write_to<W: Write>(&self, mut writer: W) -> ChainrackResult<()> {
        for (digest, seed) in &self.chains {
            writeln!(writer, "{seed} {digest}")?;
        }

        Ok(())
    }

    /// Loads a previously stored table from the given path.
    ///
    /// `chain_length` must match the value the table was generated with;
    /// the file format does not carry it.
    pub fn load(path: &Path, chain_length: u64) -> ChainrackResult<Self> {
        Self::read_from(BufReader::new(File::open(path)?), chain_length)
    }

    /// Reads a table from `<seed> <endpoint digest>` lines.
    ///
    /// A line that does not hold exactly two fields, or whose second field
    /// is not a valid digest, fails the whole load.
    pub fn read_from<R: BufRead>(reader: R, chain_length: u64) -> ChainrackResult<Self> {
        if chain_length < 1 {
            return Err(ChainrackError::ChainLength);
        }

        let mut chains = IndexMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();

            let (Some(seed), Some(digest), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(ChainrackError::MalformedLine(index + 1));
            };

            chains.insert(digest.parse::<Digest>()?, seed.to_owned());
        }

        info!("loaded {} chains", chains.len());

        let word_length = chains.first().map_or(0, |(_, seed)| seed.len());

        Ok(Self {
            m: chains.len() as u64,
            chain_length,
            word_length,
            chains,
            unique: HashSet::new(),
        })
    }

    /// Searches the table for a plaintext hashing to `target`.
    ///
    /// Phase one locates the chain supposedly holding the digest, phase two
    /// replays that chain from its seed to extract the exact plaintext.
    pub fn crack(&self, target: &Digest) -> CrackOutcome {
        let Some(seed) = self.locate_seed(target) else {
            return CrackOutcome::NotInTable;
        };

        match self.recover_plaintext(seed, target) {
            Some(password) => CrackOutcome::Found(password),
            None => CrackOutcome::NotRecovered,
        }
    }

    /// Finds the seed of the chain holding `target`, if any.
    ///
    /// Each candidate position is checked by replaying the chain forward
    /// from the target digest and probing the endpoints. Positions are
    /// scanned from the last column down to the first, so when several
    /// match the highest one wins.
    fn locate_seed(&self, target: &Digest) -> Option<&str> {
        if let Some(seed) = self.chains.get(target) {
            debug!("{target} is an endpoint digest");
            return Some(seed.as_str());
        }

        for candidate in (1..=self.chain_length).rev() {
            let mut digest = *target;

            for position in candidate..self.chain_length {
                digest = hash(&reduce(&digest, position));
            }

            if let Some(seed) = self.chains.get(&digest) {
                debug!("{target} found at position {candidate}, seed {seed}");
                return Some(seed.as_str());
            }
        }

        None
    }

    /// Replays the chain from `seed` and returns the word hashing to
    /// `target`, or `None` if the chain never reaches the digest.
    fn recover_plaintext(&self, seed: &str, target: &Digest) -> Option<String> {
        let mut word = seed.to_owned();

        for position in 1..=self.chain_length {
            let digest = hash(&word);
            if digest == *target {
                return Some(word);
            }

            word = reduce(&digest, position);
        }

        None
    }
}
