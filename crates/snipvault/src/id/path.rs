use core::fmt;

use crate::RawSnippetId;

/// A hierarchical blob storage key derived from a [`RawSnippetId`].
///
/// The path shards snippets chronologically:
/// `{yyyy}/{MM}/{dd}/{HHMMSSFFF}`, e.g. `2021/02/05/40572059`. Derivation is
/// pure — the same identifier always yields the same path — which makes blob
/// addressing idempotent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlobPath {
    inner: String,
}

impl BlobPath {
    pub(crate) fn from_raw(raw: &RawSnippetId) -> Self {
        let digits = raw.as_str();
        Self {
            inner: format!(
                "{}/{}/{}/{}",
                &digits[0..4],
                &digits[4..6],
                &digits[6..8],
                &digits[8..16]
            ),
        }
    }

    /// Returns the path as a `/`-delimited string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the path, returning the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Iterates over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/')
    }
}

impl fmt::Display for BlobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for BlobPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<&str> for BlobPath {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_into_calendar_folders() {
        let raw = RawSnippetId::from_digits("2021020540572059").unwrap();
        let path = raw.blob_path();
        assert_eq!(path, "2021/02/05/40572059");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            ["2021", "02", "05", "40572059"]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let raw = RawSnippetId::from_digits("2024061545296789").unwrap();
        assert_eq!(raw.blob_path(), raw.blob_path());
    }

    #[test]
    fn segment_widths_are_fixed() {
        let raw = RawSnippetId::from_digits("0001010100000000").unwrap();
        let widths: Vec<usize> = raw.blob_path().segments().map(str::len).collect();
        assert_eq!(widths, [4, 2, 2, 8]);
    }
}
