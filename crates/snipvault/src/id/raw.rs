use chrono::{DateTime, Datelike, Timelike, Utc};
use core::fmt;

use crate::{
    BlobPath, Error, PublicSnippetId, RandSource, Result, SystemClock, ThreadRandom, TimeSource,
    codec,
};

/// A chronological, 16-digit snippet identifier.
///
/// The digit layout is `YYYYMMDDHHMMSSFFF`-shaped:
///
/// ```text
///  Index:   0       4   6   8              15
///           +-------+---+---+---------------+
///  Field:   | year  | M | d | ms of day (8) |
///           +-------+---+---+---------------+
/// ```
///
/// - 4-digit year, 2-digit month, 2-digit day
/// - 8-digit zero-padded milliseconds since midnight
///
/// The derived ordering compares the digit bytes lexicographically, which is
/// exactly creation-time order. That property is what makes the id usable as
/// a hierarchical storage key — see [`RawSnippetId::blob_path`].
///
/// # ⚠️ Note
///
/// Construction from a timestamp carries **no uniqueness guarantee**: two ids
/// generated within the same millisecond are identical. Deduplication, if
/// needed, belongs to the storage layer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawSnippetId {
    digits: [u8; 16],
}

impl RawSnippetId {
    /// Fixed width of a raw identifier, in ASCII digits.
    pub const LEN: usize = 16;

    /// Builds an identifier from the given UTC instant.
    ///
    /// Pure formatting: no randomness, no I/O. Calling this twice with the
    /// same millisecond yields the same identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use snipvault::RawSnippetId;
    ///
    /// let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 34, 56).unwrap()
    ///     + TimeDelta::milliseconds(789);
    /// let id = RawSnippetId::from_datetime(dt);
    /// assert_eq!(id.as_str(), "2024061545296789");
    /// ```
    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let year = datetime.year();
        debug_assert!((0..=9999).contains(&year), "year out of digit range");

        let millis_of_day =
            datetime.num_seconds_from_midnight() * 1_000 + datetime.timestamp_subsec_millis();

        let mut digits = [0u8; Self::LEN];
        write_padded(&mut digits[0..4], year as u32);
        write_padded(&mut digits[4..6], datetime.month());
        write_padded(&mut digits[6..8], datetime.day());
        write_padded(&mut digits[8..16], millis_of_day);
        Self { digits }
    }

    /// Builds an identifier from the current system time.
    ///
    /// Convenience over [`RawSnippetId::from_datetime`] with [`SystemClock`];
    /// use a custom [`TimeSource`] when you need a mockable clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(SystemClock.now())
    }

    /// Parses an identifier from its 16-digit string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly [`RawSnippetId::LEN`]
    /// bytes, or if any byte is not an ASCII digit. Numeric plausibility
    /// (month ranges and the like) is intentionally not checked.
    pub fn from_digits(s: &str) -> Result<Self> {
        if s.len() != Self::LEN {
            return Err(Error::InvalidLength {
                len: s.len(),
                expected: Self::LEN,
            });
        }
        let mut digits = [0u8; Self::LEN];
        for (index, byte) in s.bytes().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(Error::InvalidDigit { byte, index });
            }
            digits[index] = byte;
        }
        Ok(Self { digits })
    }

    /// Returns the identifier as a digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `digits` holds only ASCII digit bytes by construction.
        unsafe { core::str::from_utf8_unchecked(&self.digits) }
    }

    /// Derives the hierarchical storage path for this identifier.
    ///
    /// Pure and deterministic: `{yyyy}/{MM}/{dd}/{HHMMSSFFF}`.
    ///
    /// # Example
    ///
    /// ```
    /// use snipvault::RawSnippetId;
    ///
    /// let id = RawSnippetId::from_digits("2021020540572059")?;
    /// assert_eq!(id.blob_path(), "2021/02/05/40572059");
    /// # Ok::<(), snipvault::Error>(())
    /// ```
    #[must_use]
    pub fn blob_path(&self) -> BlobPath {
        BlobPath::from_raw(self)
    }

    /// Obfuscates this identifier into a [`PublicSnippetId`] using the
    /// thread-local RNG.
    ///
    /// Non-deterministic by design: repeated calls may return different
    /// strings, and every one of them decodes back to this identifier. Do not
    /// use the result as a cache or deduplication key.
    #[must_use]
    pub fn encode(&self) -> PublicSnippetId {
        self.encode_with(&ThreadRandom)
    }

    /// Obfuscates this identifier with a caller-supplied [`RandSource`].
    #[must_use]
    pub fn encode_with<R: RandSource>(&self, rng: &R) -> PublicSnippetId {
        PublicSnippetId::new(codec::encode_digits_unchecked(&self.digits, rng))
    }

    /// Decodes a public identifier back into the raw identifier it encodes.
    ///
    /// # Errors
    ///
    /// Returns an error if any byte is outside the letter alphabet (the
    /// codec's own validation), or if the decoded digit string is not exactly
    /// [`RawSnippetId::LEN`] digits.
    ///
    /// # Example
    ///
    /// ```
    /// use snipvault::RawSnippetId;
    ///
    /// let id = RawSnippetId::from_digits("2021020540572059")?;
    /// let public = id.encode();
    /// assert_eq!(RawSnippetId::decode(public.as_str())?, id);
    ///
    /// // Raw digit strings are not valid public identifiers.
    /// assert!(RawSnippetId::decode("2021020540572059").is_err());
    /// # Ok::<(), snipvault::Error>(())
    /// ```
    pub fn decode(s: &str) -> Result<Self> {
        let digits = codec::decode_digits(s)?;
        Self::from_digits(&digits)
    }
}

/// Writes `value` into `buf` as zero-padded ASCII decimal digits.
fn write_padded(buf: &mut [u8], mut value: u32) {
    for slot in buf.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
    debug_assert!(value == 0, "value wider than the field");
}

impl fmt::Display for RawSnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RawSnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSnippetId")
            .field("digits", &self.as_str())
            .finish()
    }
}

impl AsRef<str> for RawSnippetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for RawSnippetId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl core::convert::TryFrom<&str> for RawSnippetId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_digits(s)
    }
}

impl core::str::FromStr for RawSnippetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_digits(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap() + TimeDelta::milliseconds(ms)
    }

    #[test]
    fn formats_calendar_components() {
        let id = RawSnippetId::from_datetime(at(2021, 2, 5, 11, 16, 12, 59));
        // 11:16:12.059 -> (11*3600 + 16*60 + 12) * 1000 + 59 = 40572059
        assert_eq!(id.as_str(), "2021020540572059");
    }

    #[test]
    fn zero_pads_every_field() {
        let id = RawSnippetId::from_datetime(at(800, 1, 9, 0, 0, 0, 7));
        assert_eq!(id.as_str(), "0800010900000007");
    }

    #[test]
    fn end_to_end_generation_addressing_and_codec() {
        let id = RawSnippetId::from_datetime(at(2024, 6, 15, 12, 34, 56, 789));

        assert_eq!(id.as_str().len(), RawSnippetId::LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(id.as_str(), "2024061545296789");

        let path = id.blob_path();
        assert_eq!(path, "2024/06/15/45296789");

        let public = id.encode();
        assert_eq!(RawSnippetId::decode(public.as_str()).unwrap(), id);
    }

    #[test]
    fn same_millisecond_collides() {
        // Known limitation: generation is pure formatting, so two saves in
        // the same millisecond produce the same id and the same path.
        let dt = at(2024, 6, 15, 12, 34, 56, 789);
        let a = RawSnippetId::from_datetime(dt);
        let b = RawSnippetId::from_datetime(dt);
        assert_eq!(a, b);
        assert_eq!(a.blob_path(), b.blob_path());
    }

    #[test]
    fn ordering_follows_creation_time() {
        let earlier = RawSnippetId::from_datetime(at(2024, 6, 15, 12, 34, 56, 788));
        let later = RawSnippetId::from_datetime(at(2024, 6, 15, 12, 34, 56, 789));
        let next_day = RawSnippetId::from_datetime(at(2024, 6, 16, 0, 0, 0, 0));
        assert!(earlier < later);
        assert!(later < next_day);
        assert!(earlier.as_str() < later.as_str());
    }

    #[test]
    fn from_digits_validates_shape() {
        assert_eq!(
            RawSnippetId::from_digits("123").unwrap_err(),
            Error::InvalidLength { len: 3, expected: 16 }
        );
        assert_eq!(
            RawSnippetId::from_digits("20210205405720xx").unwrap_err(),
            Error::InvalidDigit { byte: b'x', index: 14 }
        );
        // Implausible but well-formed values are accepted; range checking is
        // not this type's job.
        assert!(RawSnippetId::from_digits("2021130599999999").is_ok());
    }

    #[test]
    fn decode_requires_full_width() {
        let id = RawSnippetId::from_digits("2021020540572059").unwrap();
        let public = id.encode();
        let truncated = &public.as_str()[..RawSnippetId::LEN - 1];
        assert_eq!(
            RawSnippetId::decode(truncated).unwrap_err(),
            Error::InvalidLength { len: 15, expected: 16 }
        );
    }

    #[test]
    fn repeated_encodes_all_roundtrip() {
        let id = RawSnippetId::from_digits("2021020540572059").unwrap();
        for _ in 0..20 {
            let public = id.encode();
            assert_eq!(RawSnippetId::decode(public.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn now_produces_a_well_formed_id() {
        let id = RawSnippetId::now();
        assert_eq!(id.as_str().len(), RawSnippetId::LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
    }
}
