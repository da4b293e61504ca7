//! Serde support for the identifier types.
//!
//! Raw identifiers serialize as their 16-digit string; public identifiers as
//! their letter string. Deserialization validates: a raw id must parse via
//! [`RawSnippetId::from_digits`], a public id must decode to a well-formed
//! raw id (which leaves the original letter string intact).

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{PublicSnippetId, RawSnippetId};

impl Serialize for RawSnippetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RawSnippetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_digits(&s).map_err(de::Error::custom)
    }
}

impl Serialize for PublicSnippetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PublicSnippetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RawSnippetId::decode(&s).map_err(de::Error::custom)?;
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use crate::{PublicSnippetId, RawSnippetId};

    #[test]
    fn raw_id_roundtrips_as_digit_string() {
        let id = RawSnippetId::from_digits("2021020540572059").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2021020540572059\"");
        let back: RawSnippetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn raw_id_rejects_malformed_input() {
        assert!(serde_json::from_str::<RawSnippetId>("\"123\"").is_err());
        assert!(serde_json::from_str::<RawSnippetId>("\"20210205405720xx\"").is_err());
    }

    #[test]
    fn public_id_preserves_its_letter_string() {
        let id = RawSnippetId::from_digits("2021020540572059").unwrap();
        let public = id.encode();
        let json = serde_json::to_string(&public).unwrap();
        let back: PublicSnippetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, public);
        assert_eq!(back.decode().unwrap(), id);
    }

    #[test]
    fn public_id_rejects_raw_digits() {
        assert!(serde_json::from_str::<PublicSnippetId>("\"2021020540572059\"").is_err());
    }
}
