// ── Borrowed view over one tree node ──

use crate::model::{Device, Group, ProbeNode, Sensor, SensorTree};

/// Which kind of node a [`NodeRef`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum NodeKind {
    Root,
    Group,
    #[strum(serialize = "Probe")]
    ProbeNode,
    Device,
    Sensor,
}

/// A borrowed node of a [`SensorTree`], tagged with its kind.
///
/// Each variant exposes only the children its node kind can own.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a SensorTree),
    Group(&'a Group),
    ProbeNode(&'a ProbeNode),
    Device(&'a Device),
    Sensor(&'a Sensor),
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            Self::Root(_) => NodeKind::Root,
            Self::Group(_) => NodeKind::Group,
            Self::ProbeNode(_) => NodeKind::ProbeNode,
            Self::Device(_) => NodeKind::Device,
            Self::Sensor(_) => NodeKind::Sensor,
        }
    }

    /// Object id. The root has none.
    pub fn id(self) -> Option<i64> {
        match self {
            Self::Root(_) => None,
            Self::Group(g) => Some(g.id),
            Self::ProbeNode(p) => Some(p.id),
            Self::Device(d) => Some(d.id),
            Self::Sensor(s) => Some(s.id),
        }
    }

    pub fn name(self) -> &'a str {
        match self {
            Self::Root(_) => "",
            Self::Group(g) => &g.name,
            Self::ProbeNode(p) => &p.name,
            Self::Device(d) => &d.name,
            Self::Sensor(s) => &s.name,
        }
    }

    /// `"<name> (<id>)"`, the form used in group ladders and flat records.
    pub fn label(self) -> String {
        match self.id() {
            Some(id) => format!("{} ({id})", self.name()),
            None => String::new(),
        }
    }

    /// Direct children: groups, then probe nodes, then devices, then sensors.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            Self::Root(t) => ordered(&t.groups, &t.probe_nodes, &t.devices, &t.sensors),
            Self::Group(g) => ordered(&g.groups, &g.probe_nodes, &g.devices, &g.sensors),
            Self::ProbeNode(p) => ordered(&p.groups, &[], &p.devices, &p.sensors),
            Self::Device(d) => ordered(&[], &[], &[], &d.sensors),
            Self::Sensor(_) => Vec::new(),
        }
    }
}

fn ordered<'a>(
    groups: &'a [Group],
    probe_nodes: &'a [ProbeNode],
    devices: &'a [Device],
    sensors: &'a [Sensor],
) -> Vec<NodeRef<'a>> {
    groups
        .iter()
        .map(NodeRef::Group)
        .chain(probe_nodes.iter().map(NodeRef::ProbeNode))
        .chain(devices.iter().map(NodeRef::Device))
        .chain(sensors.iter().map(NodeRef::Sensor))
        .collect()
}

impl<'a> From<&'a SensorTree> for NodeRef<'a> {
    fn from(tree: &'a SensorTree) -> Self {
        Self::Root(tree)
    }
}

impl<'a> From<&'a Group> for NodeRef<'a> {
    fn from(group: &'a Group) -> Self {
        Self::Group(group)
    }
}

impl<'a> From<&'a ProbeNode> for NodeRef<'a> {
    fn from(probe: &'a ProbeNode) -> Self {
        Self::ProbeNode(probe)
    }
}

impl<'a> From<&'a Device> for NodeRef<'a> {
    fn from(device: &'a Device) -> Self {
        Self::Device(device)
    }
}

impl<'a> From<&'a Sensor> for NodeRef<'a> {
    fn from(sensor: &'a Sensor) -> Self {
        Self::Sensor(sensor)
    }
}
