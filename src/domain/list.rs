//! Ordered, read-only list of (possibly encrypted) domain patterns

use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;
use crate::crypto::Cipher;
use crate::error::{DomainCryptError, Result};

/// An ordered collection of domain pattern strings, fixed at construction.
///
/// Entries are opaque to the list itself: it never knows whether they are
/// plaintext or ciphertext. That knowledge lives with the caller holding
/// (or not holding) a [`Cipher`] with the matching secret triple. The
/// backing storage is a boxed slice, so the read-only contract is
/// structural rather than enforced by runtime checks alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainList {
    name: String,
    domains: Box<[String]>,
}

impl DomainList {
    /// Build a list from a name and ordered entries.
    ///
    /// Fails with an argument error when `name` is empty or whitespace.
    /// An empty entry slice is valid content. When `encrypter` is given,
    /// every entry is encrypted individually before storage; otherwise
    /// entries are stored verbatim. Order is preserved either way.
    pub fn generate<S: AsRef<str>>(
        name: &str,
        entries: &[S],
        encrypter: Option<&Cipher>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(DomainCryptError::InvalidArgument(
                "name must not be empty or whitespace".to_string(),
            ));
        }

        let domains = match encrypter {
            Some(cipher) => entries
                .iter()
                .map(|entry| cipher.encrypt(entry.as_ref()))
                .collect::<Result<Vec<String>>>()?,
            None => entries
                .iter()
                .map(|entry| entry.as_ref().to_string())
                .collect(),
        };

        Ok(Self {
            name: name.to_string(),
            domains: domains.into_boxed_slice(),
        })
    }

    /// Name of this list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the list stores no entries.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The stored entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.domains.get(index).map(String::as_str)
    }

    /// Iterate over the stored entries in order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.domains.iter()
    }

    /// Literal membership test against the *stored* entries.
    ///
    /// No decryption happens here: on an encrypted list this compares
    /// against ciphertext. Decrypt first for semantic containment.
    pub fn contains(&self, item: &str) -> bool {
        self.domains.iter().any(|domain| domain == item)
    }

    /// Not supported: the list is read-only after construction.
    pub fn add(&mut self, _item: &str) -> Result<()> {
        Err(DomainCryptError::UnsupportedOperation(
            "cannot add to a read-only domain list".to_string(),
        ))
    }

    /// Not supported: the list is read-only after construction.
    pub fn clear(&mut self) -> Result<()> {
        Err(DomainCryptError::UnsupportedOperation(
            "cannot clear a read-only domain list".to_string(),
        ))
    }

    /// Not supported: the list is read-only after construction.
    pub fn remove(&mut self, _item: &str) -> Result<()> {
        Err(DomainCryptError::UnsupportedOperation(
            "cannot remove from a read-only domain list".to_string(),
        ))
    }

    /// Decrypt every entry into a plain string, in order.
    ///
    /// With no decrypter the stored entries are copied verbatim. Length
    /// and order always match the stored list.
    pub fn decrypt_all(&self, decrypter: Option<&Cipher>) -> Result<Vec<String>> {
        match decrypter {
            Some(cipher) => self
                .domains
                .iter()
                .map(|domain| cipher.decrypt(domain))
                .collect(),
            None => Ok(self.domains.to_vec()),
        }
    }

    /// Decrypt every entry and compile it into a [`Pattern`], in order.
    ///
    /// With no decrypter the stored entries are compiled directly. One
    /// scratch buffer is reused across compilations; the returned
    /// patterns are fully independent of it and of each other.
    pub fn decrypt_to_patterns(&self, decrypter: Option<&Cipher>) -> Result<Vec<Pattern>> {
        let mut buf = String::new();
        let mut patterns = Vec::with_capacity(self.domains.len());

        for stored in self.domains.iter() {
            let pattern = match decrypter {
                Some(cipher) => Pattern::compile_with(&cipher.decrypt(stored)?, &mut buf)?,
                None => Pattern::compile_with(stored, &mut buf)?,
            };
            patterns.push(pattern);
        }
        Ok(patterns)
    }
}

impl Index<usize> for DomainList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.domains[index]
    }
}

impl<'a> IntoIterator for &'a DomainList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
