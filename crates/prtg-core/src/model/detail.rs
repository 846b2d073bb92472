// ── Sensor detail domain types ──

use serde::{Deserialize, Serialize};

/// One sensor's detail record as shown on its PRTG overview page.
///
/// Values are the server's display strings (`"60 s"`, `"99.9844%"`,
/// `"13 msec"`), kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDetail {
    pub name: String,
    pub sensor_type: String,
    pub interval: String,
    pub probe_name: String,
    pub parent_group_name: String,
    pub parent_device_name: String,
    pub parent_device_id: String,
    pub last_value: String,
    pub last_message: String,
    pub favorite: String,
    pub status_text: String,
    pub status_id: String,
    pub last_up: String,
    pub last_down: String,
    pub last_check: String,
    pub uptime: String,
    pub uptime_time: String,
    pub downtime: String,
    pub downtime_time: String,
    pub up_down_total: String,
    pub up_down_since: String,
    pub info: String,
}

/// Decoded `getsensordetails` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDetailResponse {
    pub prtg_version: String,
    pub sensor: SensorDetail,
}
