// Wire types: one mapping table per (response shape, format) pair.
//
// PRTG is loose about scalar types: the same column arrives as a number on
// one server build and as a display string on another, and unrequested
// columns come back as "". The helpers here absorb that on the JSON side.
// XML scalars are always text and are parsed by `prtg-core`.

pub mod json;
pub mod xml;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Accept a string, number, bool or null and keep it as a string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => String::new(),
    })
}

/// Accept an integer, a numeric string, `""` or null. Empty means zero.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n),
        Scalar::Null => Ok(0),
        Scalar::Text(s) if s.trim().is_empty() => Ok(0),
        Scalar::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {s:?}"))),
        Scalar::Float(f) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {f}"
        ))),
        Scalar::Bool(b) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {b}"
        ))),
    }
}

/// Like [`lenient_i64`], but rejects negative values.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_i64(deserializer)?;
    u64::try_from(n)
        .map_err(|_| serde::de::Error::custom(format!("expected a non-negative count, got {n}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_string")]
        s: String,
        #[serde(deserialize_with = "super::lenient_u64")]
        n: u64,
    }

    fn probe(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn strings_accept_numbers_and_null() {
        assert_eq!(probe(r#"{"s": 60, "n": 1}"#).unwrap().s, "60");
        assert_eq!(probe(r#"{"s": null, "n": 1}"#).unwrap().s, "");
        assert_eq!(probe(r#"{"s": "Ping", "n": 1}"#).unwrap().s, "Ping");
    }

    #[test]
    fn counts_accept_numeric_strings_and_blanks() {
        assert_eq!(probe(r#"{"s": "", "n": "7"}"#).unwrap().n, 7);
        assert_eq!(probe(r#"{"s": "", "n": ""}"#).unwrap().n, 0);
        assert_eq!(probe(r#"{"s": "", "n": 12}"#).unwrap().n, 12);
    }

    #[test]
    fn counts_reject_garbage() {
        assert!(probe(r#"{"s": "", "n": "many"}"#).is_err());
        assert!(probe(r#"{"s": "", "n": -3}"#).is_err());
        assert!(probe(r#"{"s": "", "n": 1.5}"#).is_err());
    }
}
