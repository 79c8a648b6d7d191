use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use md5::{Digest as _, Md5};

use crate::{error::ChainrackError, DIGEST_LENGTH};

/// An MD5 digest stored as 32 lowercase hex characters.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Returns the digest as a hex string.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the hex characters of the digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = ChainrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_lower_hex = s
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if s.len() != DIGEST_LENGTH || !is_lower_hex {
            return Err(ChainrackError::InvalidDigest(s.to_owned()));
        }

        Ok(Digest(s.as_bytes().try_into().unwrap()))
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Digest as Display>::fmt(self, f)
    }
}

/// Hashes a word into a digest.
#[inline]
pub fn hash(word: &str) -> Digest {
    let mut hex = [0; DIGEST_LENGTH];
    hex::encode_to_slice(Md5::digest(word.as_bytes()), &mut hex).unwrap();

    Digest(hex)
}

#[cfg(test)]
mod tests {
    use super::{hash, Digest};
    use crate::DIGEST_LENGTH;

    #[test]
    fn test_known_digest() {
        assert_eq!("0cc175b9c0f1b6a831c399e269772661", hash("a").as_str());
    }

    #[test]
    fn test_digest_shape() {
        for word in ["", "a", "vjuqw", "correcthorsebatterystaple"] {
            let digest = hash(word);
            assert_eq!(DIGEST_LENGTH, digest.as_str().len());
            assert!(digest
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let digest: Digest = "0cc175b9c0f1b6a831c399e269772661".parse().unwrap();
        assert_eq!(hash("a"), digest);
        assert_eq!("0cc175b9c0f1b6a831c399e269772661", digest.to_string());
    }

    #[test]
    fn test_parse_rejects_bad_digests() {
        assert!("0CC175B9C0F1B6A831C399E269772661".parse::<Digest>().is_err());
        assert!("0cc175".parse::<Digest>().is_err());
        assert!("zz".repeat(16).parse::<Digest>().is_err());
    }
}
