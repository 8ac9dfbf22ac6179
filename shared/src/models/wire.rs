//! Serde helpers for the legacy wire format

use serde::{Deserialize, Deserializer, Serializer};

/// Optional id that may arrive as a number, a numeric string, `""`, `0`,
/// `null` or be absent entirely. All of the "no value" spellings
/// collapse to `None`.
pub mod opt_id {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Num(0)) | None => None,
            Some(Raw::Num(n)) => Some(n),
            Some(Raw::Str(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    match s.parse::<i64>() {
                        Ok(0) => None,
                        Ok(n) => Some(n),
                        Err(_) => None,
                    }
                }
            }
        })
    }

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_i64(*n),
            // The backend expects the empty string, not null.
            None => serializer.serialize_str(""),
        }
    }
}

/// Comma-joined id list (`"3,7,12"`). The backend stores category
/// membership as a delimited string; it is parsed exactly once, here.
pub mod comma_ids {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw
            .split(',')
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect())
    }

    pub fn serialize<S>(value: &[i64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let joined = value
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&joined)
    }
}
