// ── Wire-to-domain conversions ──
//
// One mapping table per (shape, format) pair. JSON wire types already carry
// typed scalars, so their conversions are infallible `From` impls. XML wire
// types hold raw element text, so their conversions are `TryFrom` and fail
// with the name of the offending field. A failed conversion yields no value
// at all; nothing is partially populated.

use indexmap::IndexMap;
use serde_json::Value;

use prtg_api::wire::{json, xml};

use crate::error::DecodeError;
use crate::model::{
    Device, Group, HistoricPoint, HistoricValue, PrtgDate, ProbeNode, Sensor, SensorCounts,
    SensorDetail, SensorDetailResponse, SensorTree, TableRow,
};

// ── Scalar helpers ─────────────────────────────────────────────────

fn parse_id(field: &'static str, raw: &str) -> Result<i64, DecodeError> {
    raw.trim()
        .parse()
        .map_err(|e| DecodeError::field(field, raw, e))
}

/// Unrequested columns come back blank; blank counts as zero.
fn parse_count(field: &'static str, raw: &str) -> Result<u64, DecodeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|e| DecodeError::field(field, raw, e))
}

/// PRTG writes booleans as `-1` (true) and `0` (false); some builds use
/// `1`/`true`/`false`. A missing flag reads as false.
fn parse_flag(field: &'static str, raw: &str) -> Result<bool, DecodeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "-1" | "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        _ => Err(DecodeError::field(field, raw, "expected -1, 0, true or false")),
    }
}

fn parse_opt_f64(field: &'static str, raw: &str) -> Result<Option<f64>, DecodeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| DecodeError::field(field, raw, e))
}

fn parse_opt_u64(field: &'static str, raw: &str) -> Result<Option<u64>, DecodeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| DecodeError::field(field, raw, e))
}

fn parse_opt_date(field: &'static str, raw: &str) -> Result<Option<PrtgDate>, DecodeError> {
    parse_opt_f64(field, raw).map(|days| days.map(PrtgDate::from_days))
}

// ── Sensor details ─────────────────────────────────────────────────

impl From<json::SensorData> for SensorDetail {
    fn from(d: json::SensorData) -> Self {
        Self {
            name: d.name,
            sensor_type: d.sensortype,
            interval: d.interval,
            probe_name: d.probename,
            parent_group_name: d.parentgroupname,
            parent_device_name: d.parentdevicename,
            parent_device_id: d.parentdeviceid,
            last_value: d.lastvalue,
            last_message: d.lastmessage,
            favorite: d.favorite,
            status_text: d.statustext,
            status_id: d.statusid,
            last_up: d.lastup,
            last_down: d.lastdown,
            last_check: d.lastcheck,
            uptime: d.uptime,
            uptime_time: d.uptimetime,
            downtime: d.downtime,
            downtime_time: d.downtimetime,
            up_down_total: d.updowntotal,
            up_down_since: d.updownsince,
            info: d.info,
        }
    }
}

impl From<json::SensorDetailsResponse> for SensorDetailResponse {
    fn from(r: json::SensorDetailsResponse) -> Self {
        Self {
            prtg_version: r.prtgversion,
            sensor: r.sensordata.into(),
        }
    }
}

impl From<xml::SensorDetailsDocument> for SensorDetailResponse {
    fn from(d: xml::SensorDetailsDocument) -> Self {
        Self {
            prtg_version: d.prtg_version,
            sensor: SensorDetail {
                name: d.name,
                sensor_type: d.sensortype,
                interval: d.interval,
                probe_name: d.probename,
                parent_group_name: d.parentgroupname,
                parent_device_name: d.parentdevicename,
                parent_device_id: d.parentdeviceid,
                last_value: d.lastvalue,
                last_message: d.lastmessage,
                favorite: d.favorite,
                status_text: d.statustext,
                status_id: d.statusid,
                last_up: d.lastup,
                last_down: d.lastdown,
                last_check: d.lastcheck,
                uptime: d.uptime,
                uptime_time: d.uptimetime,
                downtime: d.downtime,
                downtime_time: d.downtimetime,
                up_down_total: d.updowntotal,
                up_down_since: d.updownsince,
                info: d.info,
            },
        }
    }
}

// ── Table lists ────────────────────────────────────────────────────

impl From<json::TableRow> for TableRow {
    fn from(r: json::TableRow) -> Self {
        Self {
            object_id: r.objid,
            probe: r.probe,
            group: r.group,
            device: r.device,
            sensor: r.sensor,
            name: r.name,
            host: r.host,
            status: r.status,
            message: r.message,
            last_value: r.lastvalue,
            counts: SensorCounts {
                down: r.downsens_raw,
                partial_down: r.partialdownsens_raw,
                down_acknowledged: r.downacksens_raw,
                up: r.upsens_raw,
                warning: r.warnsens_raw,
                paused: r.pausedsens_raw,
                unusual: r.unusualsens_raw,
                undefined: r.undefinedsens_raw,
            },
        }
    }
}

impl TryFrom<xml::TableItem> for TableRow {
    type Error = DecodeError;

    fn try_from(i: xml::TableItem) -> Result<Self, Self::Error> {
        let counts = SensorCounts {
            down: parse_count("downsens_raw", &i.downsens_raw)?,
            partial_down: parse_count("partialdownsens_raw", &i.partialdownsens_raw)?,
            down_acknowledged: parse_count("downacksens_raw", &i.downacksens_raw)?,
            up: parse_count("upsens_raw", &i.upsens_raw)?,
            warning: parse_count("warnsens_raw", &i.warnsens_raw)?,
            paused: parse_count("pausedsens_raw", &i.pausedsens_raw)?,
            unusual: parse_count("unusualsens_raw", &i.unusualsens_raw)?,
            undefined: parse_count("undefinedsens_raw", &i.undefinedsens_raw)?,
        };
        Ok(Self {
            object_id: parse_id("objid", &i.objid)?,
            probe: i.probe,
            group: i.group,
            device: i.device,
            sensor: i.sensor,
            name: i.name,
            host: i.host,
            status: i.status,
            message: i.message,
            last_value: i.lastvalue,
            counts,
        })
    }
}

// ── Historic data ──────────────────────────────────────────────────

/// Map one JSON `histdata` entry. Keys ending in `datetime_raw` hold
/// fractional-day timestamps; every other number is a plain value.
pub(crate) fn historic_point_from_json(
    entry: IndexMap<String, Value>,
) -> Result<HistoricPoint, DecodeError> {
    entry
        .into_iter()
        .map(|(key, value)| {
            let mapped = match value {
                Value::String(s) => HistoricValue::Text(s),
                Value::Null => HistoricValue::Text(String::new()),
                Value::Bool(b) => HistoricValue::Text(b.to_string()),
                Value::Number(n) => {
                    let n = n
                        .as_f64()
                        .ok_or_else(|| DecodeError::field("histdata", &key, "number out of range"))?;
                    if key.ends_with("datetime_raw") {
                        HistoricValue::Timestamp(PrtgDate::from_days(n))
                    } else {
                        HistoricValue::Number(n)
                    }
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(DecodeError::field(
                        "histdata",
                        &key,
                        "nested values are not supported",
                    ));
                }
            };
            Ok((key, mapped))
        })
        .collect()
}

/// A raw XML cell: blank means "no data in this bucket" and stays blank
/// text, matching what the JSON endpoint sends.
fn raw_cell(field: &'static str, raw: &str) -> Result<HistoricValue, DecodeError> {
    Ok(match parse_opt_f64(field, raw)? {
        Some(n) => HistoricValue::Number(n),
        None => HistoricValue::Text(String::new()),
    })
}

impl TryFrom<xml::HistoricItem> for HistoricPoint {
    type Error = DecodeError;

    fn try_from(item: xml::HistoricItem) -> Result<Self, Self::Error> {
        let mut point = HistoricPoint::new();

        if let Some(datetime) = item.datetime {
            point.insert("datetime", HistoricValue::Text(datetime));
        }
        if let Some(raw) = item.datetime_raw {
            let value = match parse_opt_date("datetime_raw", &raw)? {
                Some(date) => HistoricValue::Timestamp(date),
                None => HistoricValue::Text(String::new()),
            };
            point.insert("datetime_raw", value);
        }
        for v in item.value {
            point.insert(v.channel, HistoricValue::Text(v.text));
        }
        for v in item.value_raw {
            point.insert(format!("{}(RAW)", v.channel), raw_cell("value_raw", &v.text)?);
        }
        if let Some(coverage) = item.coverage {
            point.insert("coverage", HistoricValue::Text(coverage));
        }
        if let Some(raw) = item.coverage_raw {
            point.insert("coverage_raw", raw_cell("coverage_raw", &raw)?);
        }

        Ok(point)
    }
}

// ── Sensor tree ────────────────────────────────────────────────────

fn convert_all<W, T>(items: Vec<W>) -> Result<Vec<T>, DecodeError>
where
    T: TryFrom<W, Error = DecodeError>,
{
    items.into_iter().map(T::try_from).collect()
}

impl TryFrom<xml::SensorNode> for Sensor {
    type Error = DecodeError;

    fn try_from(s: xml::SensorNode) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id("sensor@id", &s.id)?,
            interval: parse_opt_u64("interval", &s.interval)?,
            active: parse_flag("active", &s.active)?,
            last_value: parse_opt_f64("lastvalue_raw", &s.lastvalue_raw)?,
            status_since: parse_opt_date("statussince_raw_utc", &s.statussince_raw_utc)?,
            last_time: parse_opt_date("lasttime_raw_utc", &s.lasttime_raw_utc)?,
            last_ok: parse_opt_date("lastok_raw_utc", &s.lastok_raw_utc)?,
            last_error: parse_opt_date("lasterror_raw_utc", &s.lasterror_raw_utc)?,
            last_up: parse_opt_date("lastup_raw_utc", &s.lastup_raw_utc)?,
            last_down: parse_opt_date("lastdown_raw_utc", &s.lastdown_raw_utc)?,
            cumulated_down_time: parse_opt_date("cumulateddowntime_raw", &s.cumulateddowntime_raw)?,
            cumulated_up_time: parse_opt_date("cumulateduptime_raw", &s.cumulateduptime_raw)?,
            cumulated_since: parse_opt_date("cumulatedsince_raw", &s.cumulatedsince_raw)?,
            name: s.name,
            tags: s.tags,
            sensor_type: s.sensortype,
            sensor_kind: s.sensorkind,
            status: s.status,
            status_message: s.statusmessage,
        })
    }
}

impl TryFrom<xml::DeviceNode> for Device {
    type Error = DecodeError;

    fn try_from(d: xml::DeviceNode) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id("device@id", &d.id)?,
            active: parse_flag("active", &d.active)?,
            sensors: convert_all(d.sensor)?,
            name: d.name,
            tags: d.tags,
            host: d.host,
        })
    }
}

impl TryFrom<xml::ProbeNodeElement> for ProbeNode {
    type Error = DecodeError;

    fn try_from(p: xml::ProbeNodeElement) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id("probenode@id", &p.id)?,
            no_access: parse_flag("probenode@noaccess", &p.noaccess)?,
            groups: convert_all(p.group)?,
            devices: convert_all(p.device)?,
            sensors: convert_all(p.sensor)?,
            name: p.name,
        })
    }
}

impl TryFrom<xml::GroupNode> for Group {
    type Error = DecodeError;

    fn try_from(g: xml::GroupNode) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id("group@id", &g.id)?,
            active: parse_flag("active", &g.active)?,
            groups: convert_all(g.group)?,
            probe_nodes: convert_all(g.probenode)?,
            devices: convert_all(g.device)?,
            sensors: convert_all(g.sensor)?,
            name: g.name,
            tags: g.tags,
        })
    }
}

impl TryFrom<xml::SensorTreeDocument> for SensorTree {
    type Error = DecodeError;

    fn try_from(doc: xml::SensorTreeDocument) -> Result<Self, Self::Error> {
        let nodes = doc.sensortree.nodes;
        Ok(Self {
            prtg_version: doc.prtg_version,
            groups: convert_all(nodes.group)?,
            probe_nodes: convert_all(nodes.probenode)?,
            devices: convert_all(nodes.device)?,
            sensors: convert_all(nodes.sensor)?,
        })
    }
}
