// ── Historic data domain types ──

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::timestamp::PrtgDate;

/// One cell of a historic data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HistoricValue {
    /// Display text, e.g. `"13 msec"` or a formatted date range.
    Text(String),
    /// A raw channel or coverage value.
    Number(f64),
    /// A raw fractional-day timestamp (`datetime_raw`).
    Timestamp(PrtgDate),
}

impl HistoricValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<PrtgDate> {
        match self {
            Self::Timestamp(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for HistoricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Timestamp(d) => write!(f, "{}", d.days()),
        }
    }
}

/// One time bucket: column name to value, in the order the server sent
/// them. The set of columns depends on the sensor's channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoricPoint(IndexMap<String, HistoricValue>);

impl HistoricPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: HistoricValue) {
        self.0.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&HistoricValue> {
        self.0.get(column)
    }

    /// Formatted bucket label (`datetime`).
    pub fn datetime(&self) -> Option<&str> {
        self.get("datetime").and_then(HistoricValue::as_text)
    }

    /// Raw bucket start (`datetime_raw`).
    pub fn timestamp(&self) -> Option<PrtgDate> {
        self.get("datetime_raw").and_then(HistoricValue::as_timestamp)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HistoricValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, HistoricValue)> for HistoricPoint {
    fn from_iter<I: IntoIterator<Item = (String, HistoricValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decoded `historicdata` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricDataResponse {
    pub prtg_version: String,
    pub points: Vec<HistoricPoint>,
}
