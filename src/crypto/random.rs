//! Random string generation for keys, salts, and IVs
//!
//! Every generator takes its bytes from a cryptographically secure source.
//! The plain functions use the process CSPRNG; the `*_with` variants accept
//! any `RngCore + CryptoRng` so tests can supply a seeded generator.

use rand::{CryptoRng, RngCore};

use crate::error::{DomainCryptError, Result};

/// The 62 alphanumeric characters
pub const ALPHANUMERIC_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Alphanumerics plus punctuation, the default alphabet for secrets
pub const ALPHANUMERIC_SYMBOL_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%^&*-_+=?,.`~|(){}[]'\"\\/<>";

/// Default length for generated passwords and salts
pub const DEFAULT_PASSWORD_LENGTH: usize = 32;

/// Generate a random string by filling `length` bytes from the process
/// CSPRNG and mapping each byte into `alphabet` via `byte % alphabet.len()`.
///
/// The modulo mapping carries a slight bias toward the front of the
/// alphabet when its length is not a power of two (92 and 62 both qualify).
/// This matches the original implementation and is documented as a known
/// property, not silently corrected.
///
/// The alphabet must be non-empty ASCII.
pub fn random_string(length: usize, alphabet: &str) -> Result<String> {
    random_string_with(&mut rand::rng(), length, alphabet)
}

/// Same as [`random_string`], with an injected random source.
pub fn random_string_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> Result<String> {
    if alphabet.is_empty() {
        return Err(DomainCryptError::InvalidArgument(
            "alphabet must not be empty".to_string(),
        ));
    }
    if !alphabet.is_ascii() {
        return Err(DomainCryptError::InvalidArgument(
            "alphabet must be ASCII".to_string(),
        ));
    }

    let mut data = vec![0u8; length];
    rng.fill_bytes(&mut data);

    let table = alphabet.as_bytes();
    Ok(data
        .iter()
        .map(|b| table[*b as usize % table.len()] as char)
        .collect())
}

/// Generate a random password from the symbol alphabet.
pub fn random_password(length: usize) -> Result<String> {
    random_string(length, ALPHANUMERIC_SYMBOL_CHARS)
}

/// Generate a random alphanumeric string.
pub fn random_alphanumeric(length: usize) -> Result<String> {
    random_string(length, ALPHANUMERIC_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_string_length() {
        assert_eq!(random_password(16).unwrap().len(), 16);
        assert_eq!(random_password(0).unwrap().len(), 0);
        assert_eq!(random_alphanumeric(64).unwrap().len(), 64);
    }

    #[test]
    fn test_random_string_uses_alphabet() {
        let s = random_string(200, "abc").unwrap();
        assert!(s.chars().all(|c| "abc".contains(c)));

        let s = random_alphanumeric(200).unwrap();
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_string_empty_alphabet() {
        let result = random_string(8, "");
        assert!(matches!(
            result,
            Err(crate::error::DomainCryptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_random_string_non_ascii_alphabet() {
        let result = random_string(8, "абв");
        assert!(matches!(
            result,
            Err(crate::error::DomainCryptError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = random_string_with(&mut rng1, 32, ALPHANUMERIC_SYMBOL_CHARS).unwrap();
        let b = random_string_with(&mut rng2, 32, ALPHANUMERIC_SYMBOL_CHARS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_byte_to_char_mapping() {
        // 256 sequential bytes must map to alphabet[b % len], in order
        struct CountingRng(u32);
        impl RngCore for CountingRng {
            fn next_u32(&mut self) -> u32 {
                let v = self.0;
                self.0 += 1;
                v
            }
            fn next_u64(&mut self) -> u64 {
                self.next_u32() as u64
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for b in dest.iter_mut() {
                    *b = self.next_u32() as u8;
                }
            }
        }
        impl CryptoRng for CountingRng {}

        let mut rng = CountingRng(0);
        let s = random_string_with(&mut rng, 5, "abcd").unwrap();
        assert_eq!(s, "abcda");
    }

    #[test]
    fn test_uniqueness() {
        let p1 = random_password(DEFAULT_PASSWORD_LENGTH).unwrap();
        let p2 = random_password(DEFAULT_PASSWORD_LENGTH).unwrap();
        // Equal outputs are astronomically unlikely
        assert_ne!(p1, p2);
    }
}
