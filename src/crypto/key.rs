//! Password-based key derivation
//!
//! Replicates the original implementation's key derivation exactly:
//! PBKDF2 with HMAC-SHA1 and the platform-default 1000 iterations.
//! Same (password, salt) pair always yields the same key bytes,
//! run-to-run and platform-to-platform.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// Key length for AES-256 (32 bytes = 256 bits)
pub const KEY_LENGTH: usize = 32;

/// Iteration count of the original platform's default PBKDF2 configuration.
/// Changing this breaks compatibility with existing ciphertext.
pub const PBKDF2_ITERATIONS: u32 = 1000;

/// Derive `key_length_bits / 8` key bytes from a password and salt.
pub fn derive_key(password: &str, salt: &str, key_length_bits: usize) -> Vec<u8> {
    let mut key = vec![0u8; key_length_bits / 8];
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );
    key
}

/// Derive the 256-bit key the string cipher uses.
pub fn derive_cipher_key(password: &str, salt: &str) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );
    key
}
