use core::fmt;

use crate::{RawSnippetId, Result};

/// The obfuscated, externally-exposed form of a [`RawSnippetId`].
///
/// Produced by [`RawSnippetId::encode`]; hand it to clients instead of the
/// raw identifier. Two encodings of the same raw id are usually *different*
/// strings, so a public id must not be used as a cache or deduplication key —
/// decode first and key on the raw id.
///
/// Public ids are never persisted server-side; the raw id is recovered by
/// decoding whatever the client sends back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicSnippetId {
    inner: String,
}

impl PublicSnippetId {
    pub(crate) fn new(inner: String) -> Self {
        Self { inner }
    }

    /// Returns the identifier as a letter string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the identifier, returning the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Decodes back into the raw identifier this public id encodes.
    ///
    /// # Errors
    ///
    /// Propagates the codec's validation errors; see
    /// [`RawSnippetId::decode`].
    pub fn decode(&self) -> Result<RawSnippetId> {
        RawSnippetId::decode(&self.inner)
    }
}

impl fmt::Display for PublicSnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for PublicSnippetId {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<&str> for PublicSnippetId {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_back_to_its_raw_id() {
        let raw = RawSnippetId::from_digits("2021020540572059").unwrap();
        let public = raw.encode();
        assert_eq!(public.decode().unwrap(), raw);
        assert!(public.as_str().bytes().all(|b| b.is_ascii_alphabetic()));
        assert_eq!(public.as_str().len(), RawSnippetId::LEN);
    }
}
