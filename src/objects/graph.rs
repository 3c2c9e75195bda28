use crate::{
    action::{directive::Directive, pair::ActionPair},
    foundation::{
        core::{ObjectId, Point, Rgba8},
        error::{SceneError, SceneResult},
    },
    metadata::tree::{DomainValue, Metadata},
    objects::{Colorable, Linkable, Showable, record::VisualRecord},
    scene::recorder::Recorder,
};

#[derive(Clone, Debug)]
struct GraphNode {
    record: VisualRecord,
    label: String,
}

/// Labelled nodes connected by undirected edges.
#[derive(Clone, Debug, Default)]
pub struct GraphView {
    nodes: Vec<GraphNode>,
    edges: Vec<(usize, usize)>,
    edge_color: Option<Rgba8>,
}

impl GraphView {
    /// Graph with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke color for edges (white by default).
    pub fn with_edge_color(mut self, color: Rgba8) -> Self {
        self.edge_color = Some(color);
        self
    }

    /// Add a node at `at`. Nothing is recorded until `show`.
    pub fn add_node(
        &mut self,
        rec: &mut Recorder<'_>,
        label: impl Into<String>,
        at: Point,
    ) -> usize {
        self.nodes.push(GraphNode {
            record: VisualRecord::new(rec.new_object(), at, Rgba8::BLUE),
            label: label.into(),
        });
        self.nodes.len() - 1
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for a graph with no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges currently drawn, as node index pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Scene object drawing `node`.
    pub fn object(&self, node: usize) -> SceneResult<ObjectId> {
        self.check(node).map(|_| self.nodes[node].record.id())
    }

    fn check(&self, node: usize) -> SceneResult<()> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::validation(format!(
                "graph node {node} out of range for {} nodes",
                self.nodes.len()
            )))
        }
    }

    fn edge_index(&self, a: usize, b: usize) -> Option<usize> {
        self.edges
            .iter()
            .position(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
    }

    fn edge_values(&self, a: usize, b: usize) -> [DomainValue; 2] {
        [
            DomainValue::Text(self.nodes[a].label.clone()),
            DomainValue::Text(self.nodes[b].label.clone()),
        ]
    }

    /// Mark `node` as visited by recoloring it (tag `"visit"`).
    pub fn visit(
        &mut self,
        rec: &mut Recorder<'_>,
        node: usize,
        color: Rgba8,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(node)?;
        rec.operation("visit", parent, |rec, meta| {
            let n = &mut self.nodes[node];
            let pair = n.record.recolor_pair(color, false);
            rec.record(meta, pair, [DomainValue::Text(n.label.clone())]);
        });
        Ok(())
    }

    fn connect_pair(&self, from: usize, to: usize, merged: bool) -> ActionPair {
        let directive = Directive::Connect {
            from: self.nodes[from].record.id(),
            to: self.nodes[to].record.id(),
            color: self.edge_color.unwrap_or(Rgba8::WHITE),
        };
        if merged {
            ActionPair::animate_merged(directive)
        } else {
            ActionPair::animate(directive)
        }
    }
}

impl Showable for GraphView {
    /// Nodes appear together, then edges appear together.
    fn show(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("show", parent, |rec, meta| {
            for (n, node) in self.nodes.iter_mut().enumerate() {
                let pair = node.record.show_pair(n > 0);
                rec.record(meta, pair, [DomainValue::Text(node.label.clone())]);
            }
            for (n, &(a, b)) in self.edges.iter().enumerate() {
                let pair = self.connect_pair(a, b, n > 0);
                rec.record_labeled(meta, "edge", pair, self.edge_values(a, b));
            }
        });
    }

    fn hide(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("hide", parent, |rec, meta| {
            for (n, node) in self.nodes.iter_mut().enumerate() {
                let pair = node.record.hide_pair(n > 0);
                rec.record(meta, pair, [DomainValue::Text(node.label.clone())]);
            }
        });
    }
}

impl Colorable for GraphView {
    fn highlight(&mut self, rec: &mut Recorder<'_>, color: Rgba8, parent: Option<&mut Metadata>) {
        rec.operation("highlight", parent, |rec, meta| {
            for (n, node) in self.nodes.iter_mut().enumerate() {
                let pair = node.record.recolor_pair(color, n > 0);
                rec.record(meta, pair, [DomainValue::Text(node.label.clone())]);
            }
        });
    }

    fn unhighlight(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("unhighlight", parent, |rec, meta| {
            for (n, node) in self.nodes.iter_mut().enumerate() {
                let pair = node.record.restore_pair(n > 0);
                rec.record(meta, pair, [DomainValue::Text(node.label.clone())]);
            }
        });
    }
}

impl Linkable for GraphView {
    fn link(
        &mut self,
        rec: &mut Recorder<'_>,
        from: usize,
        to: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(from)?;
        self.check(to)?;
        if self.edge_index(from, to).is_some() {
            return Ok(());
        }
        rec.operation("link", parent, |rec, meta| {
            let pair = self.connect_pair(from, to, false);
            rec.record(meta, pair, self.edge_values(from, to));
        });
        self.edges.push((from, to));
        Ok(())
    }

    fn unlink(
        &mut self,
        rec: &mut Recorder<'_>,
        from: usize,
        to: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(from)?;
        self.check(to)?;
        let Some(edge) = self.edge_index(from, to) else {
            return Ok(());
        };
        rec.operation("unlink", parent, |rec, meta| {
            let pair = ActionPair::animate(Directive::Disconnect {
                from: self.nodes[from].record.id(),
                to: self.nodes[to].record.id(),
            });
            rec.record(meta, pair, self.edge_values(from, to));
        });
        self.edges.remove(edge);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/objects/graph.rs"]
mod tests;
