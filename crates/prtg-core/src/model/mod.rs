// ── PRTG domain model ──
//
// Every type here is built fresh from one decoded response and is immutable
// afterwards. Wire-level quirks (string-typed numbers, `-1` flags, blank
// columns) are resolved in `convert` before these types are constructed.

pub mod detail;
pub mod historic;
pub mod table;
pub mod timestamp;
pub mod tree;

// ── Re-exports ──────────────────────────────────────────────────────

pub use detail::{SensorDetail, SensorDetailResponse};
pub use historic::{HistoricDataResponse, HistoricPoint, HistoricValue};
pub use table::{SensorCounts, TableContent, TableListResponse, TableRow};
pub use timestamp::PrtgDate;
pub use tree::{Device, Group, ProbeNode, Sensor, SensorTree};
