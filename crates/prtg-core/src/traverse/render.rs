// ── Tree pretty printer ──

use std::fmt;

use super::{NodeRef, Visitor, walk};
use crate::model::SensorTree;

struct Renderer {
    lines: Vec<String>,
}

impl<'a> Visitor<'a> for Renderer {
    type Output = ();

    fn enter(&mut self, node: NodeRef<'a>, depth: usize) {
        let Some(id) = node.id() else {
            return;
        };
        let marker = if depth == 0 { "" } else { "|" };
        let extra = match node {
            NodeRef::Device(d) if !d.host.is_empty() => format!(" (host: {})", d.host),
            NodeRef::Sensor(s) if !s.status.is_empty() => format!(" [{}]", s.status),
            _ => String::new(),
        };
        self.lines.push(format!(
            "{marker}{dashes}{kind}: {name} ({id}){extra}",
            dashes = "--".repeat(depth),
            kind = node.kind(),
            name = node.name(),
        ));
    }

    fn leave(&mut self, _node: NodeRef<'a>, _depth: usize, _children: Vec<()>) {}
}

/// One line per node below (and including) `node`, indented two dashes per
/// level starting from `depth`. The tree root itself prints nothing.
pub fn render<'a>(node: impl Into<NodeRef<'a>>, depth: usize) -> Vec<String> {
    let mut renderer = Renderer { lines: Vec::new() };
    walk(node.into(), depth, &mut renderer);
    renderer.lines
}

impl fmt::Display for SensorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render(self, 0) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
