//! Digest orchestration: pad the message, then expand and compress each
//! block in order against the running state.

use crate::core::compress::compress;
use crate::core::constants::CONSTANTS;
use crate::core::error::HashError;
use crate::core::padding;
use crate::core::schedule;

/// A finished 256-bit digest.
pub type Digest = [u8; 32];

/// Compute the SHA-256 digest of `message`.
///
/// The state starts at the initial hash words; every block folds into it
/// sequentially (block i+1 depends on block i's output). The only failure
/// is a message whose bit length overflows the 64-bit length field.
pub fn hash(message: &[u8]) -> Result<Digest, HashError> {
    let mut state = CONSTANTS.initial;

    for block in padding::pad(message)? {
        let schedule = schedule::expand(&block);
        state = compress(&state, &schedule, &CONSTANTS);
    }

    let mut digest: Digest = [0; 32];
    for (i, word) in state.iter().enumerate() {
        digest[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_calls_are_identical() {
        let message = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(hash(message).unwrap(), hash(message).unwrap());
    }

    #[test]
    fn empty_message_digest() {
        assert_eq!(
            hex::encode(hash(b"").unwrap()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_serializes_the_state_big_endian() {
        // First digest word of "abc" is 0xba7816bf; byte 0 must be 0xba.
        let digest = hash(b"abc").unwrap();
        assert_eq!(&digest[..4], &[0xba, 0x78, 0x16, 0xbf]);
    }
}
