//! # domaincrypt
//!
//! Reversible, password-derived encryption of short strings, plus an
//! immutable container of domain-matching patterns whose entries may be
//! stored encrypted and tested against live hostnames with wildcard
//! semantics.
//!
//! ## Features
//!
//! - AES-256-CBC string cipher with PBKDF2 key derivation
//! - Zero-padding on encrypt, NUL-trim on decrypt (compatible with the
//!   original scheme's asymmetric padding)
//! - Anchored, case-insensitive wildcard matching (`*` and `?`)
//! - Read-only domain lists, encrypted at construction time
//! - JSON bundles of named domain list assets
//!
//! ## Example
//!
//! ```
//! use domaincrypt::{Cipher, DomainList};
//!
//! let cipher = Cipher::new("my password", "my salt", "16 byte iv......").unwrap();
//! let list = DomainList::generate(
//!     "accepted-domains",
//!     &["*.example.com", "?.itch.io"],
//!     Some(&cipher),
//! )
//! .unwrap();
//!
//! let patterns = list.decrypt_to_patterns(Some(&cipher)).unwrap();
//! assert!(patterns[0].matches("play.example.com"));
//! assert!(!patterns[0].matches("play.example.com.evil.net"));
//! ```

pub mod crypto;
pub mod domain;
pub mod error;

// Re-export main types
pub use crypto::{BLOCK_SIZE, Cipher, DEFAULT_PASSWORD_LENGTH, KEY_LENGTH, derive_key, random_string};
pub use domain::{Bundle, DomainList, Pattern};
pub use error::{DomainCryptError, Result};
