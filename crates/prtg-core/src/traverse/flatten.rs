// ── Tree flattening ──

use serde::Serialize;

use super::{NodeRef, Visitor, walk};

/// One sensor with the path that leads to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatSensor {
    /// Group and probe labels, root first.
    pub group_ladder: Vec<String>,
    /// Label of the owning device, if the sensor sits under one.
    pub device: Option<String>,
    pub sensor: String,
}

struct Flattener;

impl<'a> Visitor<'a> for Flattener {
    type Output = Vec<FlatSensor>;

    fn leave(
        &mut self,
        node: NodeRef<'a>,
        _depth: usize,
        children: Vec<Vec<FlatSensor>>,
    ) -> Vec<FlatSensor> {
        let mut records: Vec<FlatSensor> = children.into_iter().flatten().collect();
        match node {
            NodeRef::Sensor(_) => {
                records.push(FlatSensor {
                    sensor: node.label(),
                    ..FlatSensor::default()
                });
            }
            NodeRef::Device(_) => {
                let label = node.label();
                for r in &mut records {
                    r.device = Some(label.clone());
                }
            }
            NodeRef::Group(_) | NodeRef::ProbeNode(_) => {
                let label = node.label();
                for r in &mut records {
                    r.group_ladder.insert(0, label.clone());
                }
            }
            NodeRef::Root(_) => {}
        }
        records
    }
}

/// Flatten everything below `node` into one record per sensor.
///
/// Records come out in traversal order: nested groups, probes and devices
/// first, then the node's own sensors. Ladders are built as the recursion
/// unwinds, each group or probe prepending its label to the records of its
/// subtree; devices set `device` instead. A bare sensor has no container to
/// describe and yields nothing.
pub fn flatten<'a>(node: impl Into<NodeRef<'a>>) -> Vec<FlatSensor> {
    match node.into() {
        NodeRef::Sensor(_) => Vec::new(),
        node => walk(node, 0, &mut Flattener),
    }
}
