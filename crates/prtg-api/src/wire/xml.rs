// XML wire types
//
// PRTG's XML documents nest by path (`prtg>sensortree>nodes>group`) and
// put ids in attributes. Scalars are kept as the raw element text; numeric
// and flag parsing happens when `prtg-core` maps these into its model, so
// a bad value can be reported with the field it came from.
//
// Attributes are addressed with an `@` prefix and element text with `$text`,
// per quick-xml's serde conventions. Repeated elements that may interleave
// with siblings (`value`/`value_raw`, mixed tree nodes) rely on quick-xml's
// `overlapped-lists` feature.

use serde::Deserialize;

// ── Sensor details ──────────────────────────────────────────────────

/// `getsensordetails.xml`: a flat `<sensordata>` document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SensorDetailsDocument {
    #[serde(rename = "prtg-version", alias = "prtgversion")]
    pub prtg_version: String,
    pub name: String,
    pub sensortype: String,
    pub interval: String,
    pub probename: String,
    pub parentgroupname: String,
    pub parentdevicename: String,
    pub parentdeviceid: String,
    pub lastvalue: String,
    pub lastmessage: String,
    pub favorite: String,
    pub statustext: String,
    pub statusid: String,
    pub lastup: String,
    pub lastdown: String,
    pub lastcheck: String,
    pub uptime: String,
    pub uptimetime: String,
    pub downtime: String,
    pub downtimetime: String,
    pub updowntotal: String,
    pub updownsince: String,
    pub info: String,
}

// ── Table lists ─────────────────────────────────────────────────────

/// `table.xml` for `content=sensors|devices|groups`.
///
/// The root element is named after the content; quick-xml does not check
/// it, so one type serves all three.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableDocument {
    #[serde(rename = "prtg-version")]
    pub prtg_version: String,
    #[serde(rename = "@totalcount")]
    pub totalcount: Option<String>,
    pub item: Vec<TableItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableItem {
    pub objid: String,
    pub probe: String,
    pub group: String,
    pub device: String,
    pub sensor: String,
    pub name: String,
    pub host: String,
    pub status: String,
    pub message: String,
    pub lastvalue: String,
    pub downsens_raw: String,
    pub partialdownsens_raw: String,
    pub downacksens_raw: String,
    pub upsens_raw: String,
    pub warnsens_raw: String,
    pub pausedsens_raw: String,
    pub unusualsens_raw: String,
    pub undefinedsens_raw: String,
}

// ── Historic data ───────────────────────────────────────────────────

/// `historicdata.xml`: a `<histdata>` document of `<item>` buckets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoricDocument {
    #[serde(rename = "prtg-version")]
    pub prtg_version: String,
    pub item: Vec<HistoricItem>,
}

/// One time bucket. `value` and `value_raw` repeat once per channel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoricItem {
    pub datetime: Option<String>,
    pub datetime_raw: Option<String>,
    pub value: Vec<ChannelValue>,
    pub value_raw: Vec<ChannelValue>,
    pub coverage: Option<String>,
    pub coverage_raw: Option<String>,
}

/// `<value channel="Ping Time">13 msec</value>`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelValue {
    #[serde(rename = "@channel")]
    pub channel: String,
    #[serde(rename = "$text")]
    pub text: String,
}

// ── Sensor tree ─────────────────────────────────────────────────────

/// `table.xml?content=sensortree`: `<prtg><sensortree><nodes>…`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SensorTreeDocument {
    #[serde(rename = "prtg-version", alias = "version")]
    pub prtg_version: String,
    pub sensortree: SensorTreeElement,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SensorTreeElement {
    pub nodes: Nodes,
}

/// The children of `<nodes>`; the server may root the tree at any level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Nodes {
    pub group: Vec<GroupNode>,
    pub probenode: Vec<ProbeNodeElement>,
    pub device: Vec<DeviceNode>,
    pub sensor: Vec<SensorNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub tags: String,
    pub active: String,
    pub group: Vec<GroupNode>,
    pub probenode: Vec<ProbeNodeElement>,
    pub device: Vec<DeviceNode>,
    pub sensor: Vec<SensorNode>,
}

/// Probes never nest, so there is no `probenode` list here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProbeNodeElement {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@noaccess")]
    pub noaccess: String,
    pub name: String,
    pub group: Vec<GroupNode>,
    pub device: Vec<DeviceNode>,
    pub sensor: Vec<SensorNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub tags: String,
    pub host: String,
    pub active: String,
    pub sensor: Vec<SensorNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SensorNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub tags: String,
    pub sensortype: String,
    pub sensorkind: String,
    pub interval: String,
    pub status: String,
    pub active: String,
    pub statusmessage: String,
    pub lastvalue_raw: String,
    pub statussince_raw_utc: String,
    pub lasttime_raw_utc: String,
    pub lastok_raw_utc: String,
    pub lasterror_raw_utc: String,
    pub lastup_raw_utc: String,
    pub lastdown_raw_utc: String,
    pub cumulateddowntime_raw: String,
    pub cumulateduptime_raw: String,
    pub cumulatedsince_raw: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sensor_details_accept_either_version_tag() {
        let dashed: SensorDetailsDocument = quick_xml::de::from_str(
            "<sensordata><prtg-version>18.2.41.1636</prtg-version><name>PING 1</name></sensordata>",
        )
        .unwrap();
        let plain: SensorDetailsDocument = quick_xml::de::from_str(
            "<sensordata><prtgversion>18.2.41.1636</prtgversion><name>PING 1</name></sensordata>",
        )
        .unwrap();
        assert_eq!(dashed.prtg_version, "18.2.41.1636");
        assert_eq!(plain.prtg_version, "18.2.41.1636");
        assert_eq!(plain.name, "PING 1");
    }

    #[test]
    fn historic_item_collects_interleaved_channels() {
        let doc = r#"<histdata totalcount="1" listend="1">
            <prtg-version>18.2.41.1636</prtg-version>
            <item>
                <datetime>5/1/2018 12:00:00 AM</datetime>
                <datetime_raw>43221.0000000000</datetime_raw>
                <value channel="Ping Time">13 msec</value>
                <value_raw channel="Ping Time">13.0000</value_raw>
                <value channel="Minimum">12 msec</value>
                <value_raw channel="Minimum">12.0000</value_raw>
                <coverage>100 %</coverage>
                <coverage_raw>0000010000</coverage_raw>
            </item>
        </histdata>"#;
        let parsed: HistoricDocument = quick_xml::de::from_str(doc).unwrap();
        let item = &parsed.item[0];
        assert_eq!(parsed.prtg_version, "18.2.41.1636");
        assert_eq!(item.value.len(), 2);
        assert_eq!(item.value_raw.len(), 2);
        assert_eq!(item.value[1].channel, "Minimum");
        assert_eq!(item.value_raw[1].text, "12.0000");
        assert_eq!(item.coverage_raw.as_deref(), Some("0000010000"));
    }

    #[test]
    fn tree_nodes_read_id_attributes() {
        let doc = r#"<prtg>
            <version>18.2.41.1636</version>
            <sensortree><nodes>
                <probenode id="1" noaccess="0">
                    <id>1</id>
                    <name>Local Probe</name>
                    <device id="40">
                        <id>40</id>
                        <name>Probe Device</name>
                        <host>127.0.0.1</host>
                        <sensor id="1001"><id>1001</id><name>Ping</name></sensor>
                    </device>
                    <group id="50"><id>50</id><name>Servers</name></group>
                </probenode>
            </nodes></sensortree>
        </prtg>"#;
        let parsed: SensorTreeDocument = quick_xml::de::from_str(doc).unwrap();
        assert_eq!(parsed.prtg_version, "18.2.41.1636");
        let probe = &parsed.sensortree.nodes.probenode[0];
        assert_eq!(probe.id, "1");
        assert_eq!(probe.noaccess, "0");
        assert_eq!(probe.group[0].id, "50");
        assert_eq!(probe.device[0].host, "127.0.0.1");
        assert_eq!(probe.device[0].sensor[0].id, "1001");
    }
}
