use crate::{hash::Digest, ALPHABET, DIGEST_LENGTH, REDUCED_WORD_LENGTH};

/// The offsets at which the digest is sampled, one per output character.
const OFFSETS: [usize; REDUCED_WORD_LENGTH] = [131, 232, 333, 434, 535];

/// Reduces a digest into a candidate word.
///
/// The output is always [`REDUCED_WORD_LENGTH`] characters long, whatever
/// the seed length of the table. The offsets and the two moduli below are
/// load-bearing: tables generated with different constants cannot be
/// searched interchangeably.
pub fn reduce(digest: &Digest, position: u64) -> String {
    let hex = digest.as_bytes();

    OFFSETS
        .into_iter()
        .map(|offset| {
            // indices up to 52 and 70 point into the digest repeated four
            // times, hence the second modulus
            let hi = hex_value(hex[(position as usize + offset) % 53 % DIGEST_LENGTH]);
            let lo = hex_value(hex[(position as usize + offset) % 71 % DIGEST_LENGTH]);

            ALPHABET[((hi << 4 | lo) % 26) as usize] as char
        })
        .collect()
}

#[inline]
fn hex_value(c: u8) -> u8 {
    (c as char).to_digit(16).unwrap() as u8
}
