//! Cryptographic operations for domaincrypt
//!
//! PBKDF2 key derivation, the AES-256-CBC string cipher, and secure
//! random string generation. The cipher reproduces the original
//! implementation's scheme exactly, including its zero-pad / NUL-trim
//! padding asymmetry, for compatibility with existing ciphertext.

mod aes;
mod key;
pub mod random;

pub use aes::{BLOCK_SIZE, Cipher};
pub use key::{KEY_LENGTH, PBKDF2_ITERATIONS, derive_cipher_key, derive_key};
pub use random::{
    ALPHANUMERIC_CHARS, ALPHANUMERIC_SYMBOL_CHARS, DEFAULT_PASSWORD_LENGTH, random_alphanumeric,
    random_password, random_string, random_string_with,
};
