#![allow(clippy::unwrap_used)]
// Decoding of captured PRTG bodies in both wire formats.

use pretty_assertions::assert_eq;

use prtg_core::decode::{decode_historic_data, decode_sensor_detail, decode_table_list};
use prtg_core::{
    ContentKind, DecodeError, HistoricValue, PrtgDate, Shape, ShapeKind, TableContent, decode,
};

const DETAIL_JSON: &str = include_str!("fixtures/sensor_detail.json");
const DETAIL_XML: &str = include_str!("fixtures/sensor_detail.xml");
const HISTORIC_JSON: &str = include_str!("fixtures/historic.json");
const HISTORIC_XML: &str = include_str!("fixtures/historic.xml");
const SENSOR_LIST_JSON: &str = include_str!("fixtures/sensor_list.json");
const DEVICE_LIST_XML: &str = include_str!("fixtures/device_list.xml");

// ── Sensor details ──────────────────────────────────────────────────

#[test]
fn sensor_detail_json_maps_every_field() {
    let resp = decode_sensor_detail(ContentKind::Json, DETAIL_JSON.as_bytes()).unwrap();
    assert_eq!(resp.prtg_version, "18.2.41.1636");

    let s = resp.sensor;
    assert_eq!(s.name, "PING 1");
    assert_eq!(s.sensor_type, "ping");
    assert_eq!(s.probe_name, "Local Probe");
    assert_eq!(s.parent_device_id, "2921");
    assert_eq!(s.status_text, "Up");
    assert_eq!(s.status_id, "3");
    assert_eq!(s.up_down_total, "35 d 21 h [=100% coverage]");
    assert!(s.favorite.is_empty());
}

#[test]
fn sensor_detail_formats_agree() {
    let json = decode_sensor_detail(ContentKind::Json, DETAIL_JSON.as_bytes()).unwrap();
    let xml = decode_sensor_detail(ContentKind::Xml, DETAIL_XML.as_bytes()).unwrap();
    assert_eq!(json, xml);
}

#[test]
fn sensor_detail_xml_with_bom_decodes() {
    let mut body = "\u{feff}".as_bytes().to_vec();
    body.extend_from_slice(DETAIL_XML.as_bytes());
    let resp = decode_sensor_detail(ContentKind::Xml, &body).unwrap();
    assert_eq!(resp.sensor.name, "PING 1");
}

// ── Table lists ─────────────────────────────────────────────────────

#[test]
fn sensor_list_json_rows() {
    let resp =
        decode_table_list(TableContent::Sensors, ContentKind::Json, SENSOR_LIST_JSON.as_bytes())
            .unwrap();
    assert_eq!(resp.content, TableContent::Sensors);
    assert_eq!(resp.rows.len(), 2);

    let second = &resp.rows[1];
    assert_eq!(second.object_id, 2926);
    assert_eq!(second.sensor, "SNMP Uptime");
    assert_eq!(second.status, "Warning");
    // Columns not selected default to empty.
    assert!(second.host.is_empty());
    assert_eq!(second.counts.total(), 0);
}

#[test]
fn sensor_list_json_asked_for_devices_is_empty() {
    let resp =
        decode_table_list(TableContent::Devices, ContentKind::Json, SENSOR_LIST_JSON.as_bytes())
            .unwrap();
    assert!(resp.rows.is_empty());
}

#[test]
fn device_list_xml_reads_counters() {
    let resp =
        decode_table_list(TableContent::Devices, ContentKind::Xml, DEVICE_LIST_XML.as_bytes())
            .unwrap();
    assert_eq!(resp.prtg_version, "18.2.41.1636");
    assert_eq!(resp.rows.len(), 2);

    let router = &resp.rows[0];
    assert_eq!(router.object_id, 2921);
    assert_eq!(router.host, "10.0.0.1");
    assert_eq!(router.counts.up, 1);
    assert_eq!(router.counts.warning, 1);
    assert_eq!(router.counts.partial_down, 0);
    assert_eq!(router.counts.total(), 2);
}

#[test]
fn table_xml_bad_counter_names_the_field() {
    let body = r"<devices><item><objid>1</objid><upsens_raw>many</upsens_raw></item></devices>";
    let err = decode_table_list(TableContent::Devices, ContentKind::Xml, body.as_bytes())
        .unwrap_err();
    assert!(
        matches!(err, DecodeError::Field { field: "upsens_raw", .. }),
        "unexpected error: {err:?}"
    );
}

// ── Historic data ───────────────────────────────────────────────────

#[test]
fn historic_json_types_values_by_key() {
    let resp = decode_historic_data(ContentKind::Json, HISTORIC_JSON.as_bytes()).unwrap();
    assert_eq!(resp.points.len(), 2);

    let first = &resp.points[0];
    assert_eq!(
        first.get("datetime_raw"),
        Some(&HistoricValue::Timestamp(PrtgDate::from_days(43221.0)))
    );
    assert_eq!(first.get("Ping Time(RAW)"), Some(&HistoricValue::Number(13.0)));
    assert_eq!(
        first.get("Ping Time"),
        Some(&HistoricValue::Text("13 msec".into()))
    );
    assert_eq!(
        first.timestamp().and_then(|d| d.to_datetime()).unwrap().to_rfc3339(),
        "2018-05-01T00:00:00+00:00"
    );
}

#[test]
fn historic_xml_projects_channels() {
    let resp = decode_historic_data(ContentKind::Xml, HISTORIC_XML.as_bytes()).unwrap();
    let first = &resp.points[0];
    let keys: Vec<&str> = first.columns().collect();
    assert_eq!(
        keys,
        [
            "datetime",
            "datetime_raw",
            "Ping Time",
            "Minimum",
            "Ping Time(RAW)",
            "Minimum(RAW)",
            "coverage",
            "coverage_raw",
        ]
    );
    assert_eq!(first.get("coverage_raw"), Some(&HistoricValue::Number(10000.0)));

    let gap = &resp.points[1];
    assert_eq!(gap.get("Ping Time(RAW)"), Some(&HistoricValue::Text(String::new())));
}

#[test]
fn historic_formats_agree() {
    let json = decode_historic_data(ContentKind::Json, HISTORIC_JSON.as_bytes()).unwrap();
    let xml = decode_historic_data(ContentKind::Xml, HISTORIC_XML.as_bytes()).unwrap();
    assert_eq!(json.points, xml.points);
}

// ── Dispatch ────────────────────────────────────────────────────────

#[test]
fn decode_dispatches_on_shape() {
    let shape = decode(
        ShapeKind::HistoricData,
        ContentKind::Xml,
        HISTORIC_XML.as_bytes(),
    )
    .unwrap();
    let Shape::HistoricData(resp) = shape else {
        panic!("expected historic data");
    };
    assert_eq!(resp.prtg_version, "18.2.41.1636");
}
