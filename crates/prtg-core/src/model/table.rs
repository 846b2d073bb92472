// ── Table list domain types ──

use serde::{Deserialize, Serialize};

/// Which list a `table` query asks for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableContent {
    Sensors,
    Devices,
    Groups,
}

impl TableContent {
    /// Columns requested when the caller doesn't choose any.
    pub fn default_columns(self) -> &'static [&'static str] {
        match self {
            Self::Sensors => &[
                "objid", "probe", "group", "device", "sensor", "status", "message", "lastvalue",
                "priority", "favorite",
            ],
            Self::Devices => &[
                "objid",
                "probe",
                "group",
                "device",
                "host",
                "downsens",
                "partialdownsens",
                "downacksens",
                "upsens",
                "warnsens",
                "pausedsens",
                "unusualsens",
                "undefinedsens",
            ],
            Self::Groups => &[
                "objid",
                "probe",
                "group",
                "name",
                "downsens",
                "partialdownsens",
                "downacksens",
                "upsens",
                "warnsens",
                "pausedsens",
                "unusualsens",
                "undefinedsens",
            ],
        }
    }

    /// The `columns=` value to send.
    ///
    /// No selection, or a selection longer than the default set, falls back
    /// to the default set.
    pub fn columns_param(self, columns: Option<&[&str]>) -> String {
        let defaults = self.default_columns();
        match columns {
            Some(cols) if !cols.is_empty() && cols.len() <= defaults.len() => cols.join(","),
            _ => defaults.join(","),
        }
    }
}

/// Child-sensor state counters carried by device and group rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorCounts {
    pub down: u64,
    pub partial_down: u64,
    pub down_acknowledged: u64,
    pub up: u64,
    pub warning: u64,
    pub paused: u64,
    pub unusual: u64,
    pub undefined: u64,
}

impl SensorCounts {
    /// Sum of all states, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.down,
            self.partial_down,
            self.down_acknowledged,
            self.up,
            self.warning,
            self.paused,
            self.unusual,
            self.undefined,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// One row of a sensor, device or group list.
///
/// The same shape serves all three lists; which fields carry data depends
/// on the list kind and the selected columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub object_id: i64,
    pub probe: String,
    pub group: String,
    pub device: String,
    pub sensor: String,
    pub name: String,
    pub host: String,
    pub status: String,
    pub message: String,
    pub last_value: String,
    pub counts: SensorCounts,
}

/// Decoded `table` list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableListResponse {
    pub prtg_version: String,
    pub content: TableContent,
    pub rows: Vec<TableRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_use_defaults() {
        assert_eq!(
            TableContent::Sensors.columns_param(None),
            "objid,probe,group,device,sensor,status,message,lastvalue,priority,favorite"
        );
        assert_eq!(
            TableContent::Groups.columns_param(Some(&[][..])),
            TableContent::Groups.default_columns().join(",")
        );
    }

    #[test]
    fn explicit_columns_are_joined() {
        assert_eq!(
            TableContent::Devices.columns_param(Some(&["objid", "host"][..])),
            "objid,host"
        );
    }

    #[test]
    fn oversized_selection_falls_back_to_defaults() {
        let many = ["objid"; 11];
        assert_eq!(
            TableContent::Sensors.columns_param(Some(&many[..])),
            TableContent::Sensors.default_columns().join(",")
        );
    }

    #[test]
    fn total_sums_every_state() {
        let counts = SensorCounts {
            down: 1,
            partial_down: 2,
            up: 10,
            paused: 3,
            ..SensorCounts::default()
        };
        assert_eq!(counts.total(), 16);
    }

    #[test]
    fn total_saturates_on_huge_counters() {
        let counts = SensorCounts {
            up: u64::MAX,
            warning: 5,
            ..SensorCounts::default()
        };
        assert_eq!(counts.total(), u64::MAX);
    }

    #[test]
    fn content_param_is_lowercase() {
        assert_eq!(TableContent::Devices.to_string(), "devices");
    }
}
