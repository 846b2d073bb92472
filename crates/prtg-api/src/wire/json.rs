// JSON wire types
//
// Field names follow the server's flat lowercase keys exactly. Every field
// is defaulted so that columns left out of a `columns=` selection decode to
// empty values instead of failing the whole response.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{lenient_i64, lenient_string, lenient_u64};

// ── Sensor details ──────────────────────────────────────────────────

/// `getsensordetails.json` body.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorDetailsResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub prtgversion: String,
    #[serde(default)]
    pub sensordata: SensorData,
}

/// The `sensordata` object. PRTG sends display strings for every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SensorData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sensortype: String,
    #[serde(deserialize_with = "lenient_string")]
    pub interval: String,
    #[serde(deserialize_with = "lenient_string")]
    pub probename: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parentgroupname: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parentdevicename: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parentdeviceid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastvalue: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastmessage: String,
    #[serde(deserialize_with = "lenient_string")]
    pub favorite: String,
    #[serde(deserialize_with = "lenient_string")]
    pub statustext: String,
    #[serde(deserialize_with = "lenient_string")]
    pub statusid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastup: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastdown: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastcheck: String,
    #[serde(deserialize_with = "lenient_string")]
    pub uptime: String,
    #[serde(deserialize_with = "lenient_string")]
    pub uptimetime: String,
    #[serde(deserialize_with = "lenient_string")]
    pub downtime: String,
    #[serde(deserialize_with = "lenient_string")]
    pub downtimetime: String,
    #[serde(deserialize_with = "lenient_string")]
    pub updowntotal: String,
    #[serde(deserialize_with = "lenient_string")]
    pub updownsince: String,
    #[serde(deserialize_with = "lenient_string")]
    pub info: String,
}

// ── Table lists ─────────────────────────────────────────────────────

/// `table.json` body for `content=sensors|devices|groups`.
///
/// Only the array matching the requested content is present.
#[derive(Debug, Clone, Deserialize)]
pub struct TableListResponse {
    #[serde(rename = "prtg-version", default, deserialize_with = "lenient_string")]
    pub prtg_version: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub treesize: u64,
    #[serde(default)]
    pub sensors: Vec<TableRow>,
    #[serde(default)]
    pub devices: Vec<TableRow>,
    #[serde(default)]
    pub groups: Vec<TableRow>,
}

/// One row of a table list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableRow {
    #[serde(deserialize_with = "lenient_i64")]
    pub objid: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub probe: String,
    #[serde(deserialize_with = "lenient_string")]
    pub group: String,
    #[serde(deserialize_with = "lenient_string")]
    pub device: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sensor: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lastvalue: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub downsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub partialdownsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub downacksens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub upsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub warnsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub pausedsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub unusualsens_raw: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub undefinedsens_raw: u64,
}

// ── Historic data ───────────────────────────────────────────────────

/// `historicdata.json` body.
///
/// Each `histdata` entry is an open map whose keys depend on the sensor's
/// channels; key order is kept as sent.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricDataResponse {
    #[serde(rename = "prtg-version", default, deserialize_with = "lenient_string")]
    pub prtg_version: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub treesize: u64,
    #[serde(default)]
    pub histdata: Vec<IndexMap<String, serde_json::Value>>,
}
