// ── Response decoder ──
//
// Turns a raw body plus its declared content kind into one of the typed
// response shapes. The kind comes from the fetch layer; nothing here sniffs
// the body. Each (shape, kind) pair goes through its own wire type and
// mapping table in `convert`.

use prtg_api::ContentKind;
use prtg_api::wire::{json, xml};
use serde::de::DeserializeOwned;

use crate::convert::historic_point_from_json;
use crate::error::DecodeError;
use crate::model::{
    HistoricDataResponse, HistoricPoint, SensorDetailResponse, SensorTree, TableContent,
    TableListResponse, TableRow,
};

/// Which response shape to decode a body as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    SensorDetail,
    TableList(TableContent),
    HistoricData,
    SensorTree,
}

/// A decoded response.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    SensorDetail(SensorDetailResponse),
    TableList(TableListResponse),
    HistoricData(HistoricDataResponse),
    SensorTree(SensorTree),
}

/// Decode `raw` as `shape`, written in `kind`.
pub fn decode(shape: ShapeKind, kind: ContentKind, raw: &[u8]) -> Result<Shape, DecodeError> {
    Ok(match shape {
        ShapeKind::SensorDetail => Shape::SensorDetail(decode_sensor_detail(kind, raw)?),
        ShapeKind::TableList(content) => Shape::TableList(decode_table_list(content, kind, raw)?),
        ShapeKind::HistoricData => Shape::HistoricData(decode_historic_data(kind, raw)?),
        ShapeKind::SensorTree => Shape::SensorTree(decode_sensor_tree(kind, raw)?),
    })
}

pub fn decode_sensor_detail(
    kind: ContentKind,
    raw: &[u8],
) -> Result<SensorDetailResponse, DecodeError> {
    match kind {
        ContentKind::Json => from_json::<json::SensorDetailsResponse>(raw).map(Into::into),
        ContentKind::Xml => from_xml::<xml::SensorDetailsDocument>(raw).map(Into::into),
    }
}

/// Decode a `table` list. `content` selects which list of a JSON body to
/// read; XML bodies hold only the requested list.
pub fn decode_table_list(
    content: TableContent,
    kind: ContentKind,
    raw: &[u8],
) -> Result<TableListResponse, DecodeError> {
    let (prtg_version, rows) = match kind {
        ContentKind::Json => {
            let resp = from_json::<json::TableListResponse>(raw)?;
            let rows = match content {
                TableContent::Sensors => resp.sensors,
                TableContent::Devices => resp.devices,
                TableContent::Groups => resp.groups,
            };
            (
                resp.prtg_version,
                rows.into_iter().map(TableRow::from).collect(),
            )
        }
        ContentKind::Xml => {
            let doc = from_xml::<xml::TableDocument>(raw)?;
            let rows = doc
                .item
                .into_iter()
                .map(TableRow::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            (doc.prtg_version, rows)
        }
    };
    Ok(TableListResponse {
        prtg_version,
        content,
        rows,
    })
}

/// Both formats produce the same open-map point sequence.
pub fn decode_historic_data(
    kind: ContentKind,
    raw: &[u8],
) -> Result<HistoricDataResponse, DecodeError> {
    let (prtg_version, points) = match kind {
        ContentKind::Json => {
            let resp = from_json::<json::HistoricDataResponse>(raw)?;
            let points = resp
                .histdata
                .into_iter()
                .map(historic_point_from_json)
                .collect::<Result<Vec<_>, _>>()?;
            (resp.prtg_version, points)
        }
        ContentKind::Xml => {
            let doc = from_xml::<xml::HistoricDocument>(raw)?;
            let points = doc
                .item
                .into_iter()
                .map(HistoricPoint::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            (doc.prtg_version, points)
        }
    };
    Ok(HistoricDataResponse {
        prtg_version,
        points,
    })
}

/// The sensor tree is only ever served as XML.
pub fn decode_sensor_tree(kind: ContentKind, raw: &[u8]) -> Result<SensorTree, DecodeError> {
    match kind {
        ContentKind::Xml => SensorTree::try_from(from_xml::<xml::SensorTreeDocument>(raw)?),
        ContentKind::Json => Err(DecodeError::UnsupportedFormat {
            shape: "sensor tree",
            kind,
        }),
    }
}

// ── Format entry points ────────────────────────────────────────────

fn from_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(raw)?)
}

fn from_xml<T: DeserializeOwned>(raw: &[u8]) -> Result<T, DecodeError> {
    let text = std::str::from_utf8(raw)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(quick_xml::de::from_str(text)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_keeps_parser_error() {
        let err = decode_sensor_detail(ContentKind::Json, b"{\"prtgversion\": ").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn malformed_xml_keeps_parser_error() {
        let err = decode_table_list(
            TableContent::Sensors,
            ContentKind::Xml,
            b"<sensors><item><objid>1</item></sensors>",
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Xml(_)));
    }

    #[test]
    fn non_utf8_xml_is_rejected() {
        let err = decode_sensor_tree(ContentKind::Xml, &[0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8(_)));
    }

    #[test]
    fn sensor_tree_json_is_unsupported() {
        let err = decode(ShapeKind::SensorTree, ContentKind::Json, b"{}").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn table_json_reads_requested_list_only() {
        let body = br#"{"prtg-version": "18.2.41.1636", "treesize": 1,
            "groups": [{"objid": 2920, "name": "Servers"}]}"#;

        let groups = decode_table_list(TableContent::Groups, ContentKind::Json, body).unwrap();
        assert_eq!(groups.rows.len(), 1);
        assert_eq!(groups.rows[0].name, "Servers");

        let sensors = decode_table_list(TableContent::Sensors, ContentKind::Json, body).unwrap();
        assert!(sensors.rows.is_empty());
    }

    #[test]
    fn dispatch_routes_to_matching_shape() {
        let shape = decode(
            ShapeKind::SensorDetail,
            ContentKind::Json,
            br#"{"prtgversion": "18.2.41.1636", "sensordata": {"name": "Ping"}}"#,
        )
        .unwrap();
        let Shape::SensorDetail(detail) = shape else {
            panic!("expected a sensor detail shape");
        };
        assert_eq!(detail.prtg_version, "18.2.41.1636");
        assert_eq!(detail.sensor.name, "Ping");
    }
}
