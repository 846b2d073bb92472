// ── Sensor tree domain types ──
//
// The object hierarchy as served by `table.xml?content=sensortree`. Each
// node kind owns exactly the child collections PRTG allows below it:
// probes never hold probes, devices hold only sensors, sensors are leaves.
// Trees are built once per response and never mutated.

use serde::{Deserialize, Serialize};

use super::timestamp::PrtgDate;

/// Root of a decoded sensor tree.
///
/// The server may root the tree anywhere, so the top level can hold any
/// mix of node kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorTree {
    pub prtg_version: String,
    pub groups: Vec<Group>,
    pub probe_nodes: Vec<ProbeNode>,
    pub devices: Vec<Device>,
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub tags: String,
    pub active: bool,
    pub groups: Vec<Group>,
    pub probe_nodes: Vec<ProbeNode>,
    pub devices: Vec<Device>,
    pub sensors: Vec<Sensor>,
}

/// A probe's namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeNode {
    pub id: i64,
    pub name: String,
    /// The requesting account may not open this probe.
    pub no_access: bool,
    pub groups: Vec<Group>,
    pub devices: Vec<Device>,
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub tags: String,
    pub host: String,
    pub active: bool,
    pub sensors: Vec<Sensor>,
}

/// A monitored metric. Always a leaf.
///
/// Raw numeric fields that the server left empty are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: i64,
    pub name: String,
    pub tags: String,
    pub sensor_type: String,
    pub sensor_kind: String,
    /// Scanning interval in seconds.
    pub interval: Option<u64>,
    pub status: String,
    pub active: bool,
    pub status_message: String,
    pub last_value: Option<f64>,
    pub status_since: Option<PrtgDate>,
    pub last_time: Option<PrtgDate>,
    pub last_ok: Option<PrtgDate>,
    pub last_error: Option<PrtgDate>,
    pub last_up: Option<PrtgDate>,
    pub last_down: Option<PrtgDate>,
    /// Durations, also in fractional days.
    pub cumulated_down_time: Option<PrtgDate>,
    pub cumulated_up_time: Option<PrtgDate>,
    pub cumulated_since: Option<PrtgDate>,
}

impl Sensor {
    /// Space-separated tags as individual strings.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }
}

impl Device {
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }
}

impl Group {
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }
}
