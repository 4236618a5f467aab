//! Wildcard domain pattern compilation
//!
//! A pattern string is a single-line literal where `*` matches any run of
//! characters (including none) and `?` matches exactly one character.
//! Everything else is matched literally, case-insensitively, and the
//! compiled matcher is anchored at both ends: `*.example.com` matches
//! `a.example.com` but not `a.example.com.evil.com`.

use regex::{Regex, RegexBuilder};

use crate::error::{DomainCryptError, Result};

/// Compiled, anchored, case-insensitive wildcard matcher.
///
/// Stateless after compilation and reusable across any number of
/// candidates; cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a wildcard pattern string into a matcher.
    pub fn compile(domain_pattern: &str) -> Result<Self> {
        let mut buf = String::with_capacity(domain_pattern.len() + 2);
        Self::compile_with(domain_pattern, &mut buf)
    }

    /// Compile using a caller-provided scratch buffer, for batch
    /// conversion. The buffer's previous content is discarded and the
    /// returned pattern keeps no reference to it.
    pub(crate) fn compile_with(domain_pattern: &str, buf: &mut String) -> Result<Self> {
        buf.clear();
        buf.push('^');
        // Escape everything, then restore the two supported wildcards
        buf.push_str(
            &regex::escape(domain_pattern)
                .replace(r"\?", ".")
                .replace(r"\*", ".*"),
        );
        buf.push('$');

        let regex = RegexBuilder::new(buf)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| {
                DomainCryptError::InvalidArgument(format!(
                    "cannot compile domain pattern {:?}: {}",
                    domain_pattern, e
                ))
            })?;
        Ok(Self { regex })
    }

    /// Whether the whole candidate string matches this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The underlying anchored regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
