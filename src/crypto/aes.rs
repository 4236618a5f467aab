//! AES-256-CBC string encryption
//!
//! Implements the exact scheme of the original implementation:
//! - key: PBKDF2(password, salt), 256 bits
//! - mode: CBC with a caller-supplied 16-byte IV
//! - padding: zero bytes on encrypt, *no* unpadding on decrypt; the
//!   decrypted text is trimmed of trailing NUL characters instead
//! - transport encoding: standard base64
//!
//! **IMPORTANT**: the zero-pad / NUL-trim asymmetry means plaintext with
//! literal trailing NULs does not survive a round trip. This is an
//! inherited compatibility quirk, kept behind [`pad_with_zeros`] and
//! [`trim_trailing_nuls`] so a real padding mode could replace it in one
//! place if compatibility is ever broken deliberately.

use std::fmt;

use aes::Aes256;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use block_padding::NoPadding;
use cbc::cipher::{BlockModeDecrypt, BlockModeEncrypt, KeyIvInit};
use cbc::{Decryptor, Encryptor};
use rand::{CryptoRng, RngCore};

use super::key::derive_cipher_key;
use super::random::{
    ALPHANUMERIC_SYMBOL_CHARS, DEFAULT_PASSWORD_LENGTH, random_string_with,
};
use crate::error::{DomainCryptError, Result};

/// AES block size (16 bytes = 128 bits), also the required IV length
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// Symmetric string cipher driven by three secrets: password, salt, IV.
///
/// Immutable after construction; one instance can serve any number of
/// [`encrypt`](Cipher::encrypt) / [`decrypt`](Cipher::decrypt) calls and is
/// safe to share read-only across threads. Ciphertext produced with one
/// triple can only be decrypted by a cipher holding the identical triple.
#[derive(Clone)]
pub struct Cipher {
    password: String,
    salt: String,
    iv: String,
}

impl Cipher {
    /// Create a cipher from its three secrets.
    ///
    /// Fails with a crypto-configuration error unless `iv` is exactly
    /// [`BLOCK_SIZE`] bytes. The password and salt are never stored in
    /// derived form; the key is re-derived for every operation.
    pub fn new(
        password: impl Into<String>,
        salt: impl Into<String>,
        iv: impl Into<String>,
    ) -> Result<Self> {
        let cipher = Self {
            password: password.into(),
            salt: salt.into(),
            iv: iv.into(),
        };
        cipher.iv_bytes()?;
        Ok(cipher)
    }

    /// Create a cipher with randomized secrets: 32-character password and
    /// salt, 16-character IV, all from the symbol alphabet.
    pub fn random() -> Result<Self> {
        Self::random_with(&mut rand::rng())
    }

    /// Same as [`Cipher::random`], with an injected random source.
    pub fn random_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let password = random_string_with(rng, DEFAULT_PASSWORD_LENGTH, ALPHANUMERIC_SYMBOL_CHARS)?;
        let salt = random_string_with(rng, DEFAULT_PASSWORD_LENGTH, ALPHANUMERIC_SYMBOL_CHARS)?;
        let iv = random_string_with(rng, BLOCK_SIZE, ALPHANUMERIC_SYMBOL_CHARS)?;
        Self::new(password, salt, iv)
    }

    /// Encrypt a string, returning standard base64 ciphertext.
    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        let key = derive_cipher_key(&self.password, &self.salt);
        let iv = self.iv_bytes()?;

        let mut buffer = pad_with_zeros(plain_text.as_bytes());
        let msg_len = buffer.len();

        let encryptor = Aes256CbcEnc::new(&key.into(), &iv.into());
        let encrypted = encryptor
            .encrypt_padded::<NoPadding>(&mut buffer, msg_len)
            .map_err(|e| {
                DomainCryptError::CryptoConfiguration(format!("encryption failed: {:?}", e))
            })?;

        Ok(BASE64.encode(encrypted))
    }

    /// Decrypt base64 ciphertext produced by [`Cipher::encrypt`].
    ///
    /// Malformed base64, a ciphertext length that is not a multiple of the
    /// block size, and non-UTF-8 decrypted bytes all fail with a format
    /// error. No unpadding is performed; trailing NULs are trimmed from
    /// the decoded text instead.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String> {
        let mut buffer = BASE64.decode(cipher_text)?;
        if buffer.len() % BLOCK_SIZE != 0 {
            return Err(DomainCryptError::Format(format!(
                "ciphertext length {} is not a multiple of the {}-byte block size",
                buffer.len(),
                BLOCK_SIZE
            )));
        }

        let key = derive_cipher_key(&self.password, &self.salt);
        let iv = self.iv_bytes()?;

        let decryptor = Aes256CbcDec::new(&key.into(), &iv.into());
        let decrypted = decryptor
            .decrypt_padded::<NoPadding>(&mut buffer)
            .map_err(|e| DomainCryptError::Format(format!("decryption failed: {:?}", e)))?;

        let text = String::from_utf8(decrypted.to_vec())?;
        Ok(trim_trailing_nuls(&text).to_string())
    }

    fn iv_bytes(&self) -> Result<[u8; BLOCK_SIZE]> {
        self.iv.as_bytes().try_into().map_err(|_| {
            DomainCryptError::CryptoConfiguration(format!(
                "IV must be exactly {} bytes, got {}",
                BLOCK_SIZE,
                self.iv.len()
            ))
        })
    }
}

// Never print the secrets
impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("password", &"<redacted>")
            .field("salt", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

/// Pad data to the next block boundary with zero bytes.
///
/// Block-aligned input (including empty input) gets no extra block. This
/// is the original scheme's irreversible padding; its counterpart on the
/// decrypt side is [`trim_trailing_nuls`], not an unpad step.
fn pad_with_zeros(data: &[u8]) -> Vec<u8> {
    let rem = data.len() % BLOCK_SIZE;
    let padded_len = if rem == 0 {
        data.len()
    } else {
        data.len() + BLOCK_SIZE - rem
    };
    let mut buffer = vec![0u8; padded_len];
    buffer[..data.len()].copy_from_slice(data);
    buffer
}

/// Strip the trailing NULs left behind by [`pad_with_zeros`].
fn trim_trailing_nuls(text: &str) -> &str {
    text.trim_end_matches('\0')
}
