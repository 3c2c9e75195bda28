use std::collections::HashMap;

use crate::foundation::core::PairId;

/// A domain value touched by an operation, used for value-based lookups.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl From<i64> for DomainValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for DomainValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for DomainValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for DomainValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for DomainValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Leaf entry: one action pair produced inside a tagged operation.
#[derive(Clone, Debug, PartialEq)]
pub struct LowerMetadata {
    label: String,
    pair: PairId,
    values: Vec<DomainValue>,
}

impl LowerMetadata {
    /// Leaf label; defaults to the operation name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tagged pair.
    pub fn pair(&self) -> PairId {
        self.pair
    }

    /// Domain values the operation touched.
    pub fn values(&self) -> &[DomainValue] {
        &self.values
    }

    /// Whether `value` is among the touched values.
    pub fn touches(&self, value: &DomainValue) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Tag for one run of a high-level operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    name: String,
    sequence_id: u32,
    children: Vec<LowerMetadata>,
}

impl Metadata {
    pub(crate) fn new(name: impl Into<String>, sequence_id: u32) -> Self {
        Self {
            name: name.into(),
            sequence_id,
            children: Vec::new(),
        }
    }

    /// Operation name, e.g. `"swap"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Occurrence number of this operation name within the scene (1-based).
    pub fn sequence_id(&self) -> u32 {
        self.sequence_id
    }

    /// Leaves in recording order.
    pub fn children(&self) -> &[LowerMetadata] {
        &self.children
    }

    /// Ids of every pair recorded under this tag, in recording order.
    pub fn pair_ids(&self) -> Vec<PairId> {
        self.children.iter().map(LowerMetadata::pair).collect()
    }

    /// The first pair recorded under this tag.
    pub fn first_pair(&self) -> Option<PairId> {
        self.children.first().map(LowerMetadata::pair)
    }

    pub(crate) fn push_child(
        &mut self,
        label: Option<String>,
        pair: PairId,
        values: Vec<DomainValue>,
    ) {
        let label = label.unwrap_or_else(|| self.name.clone());
        self.children.push(LowerMetadata {
            label,
            pair,
            values,
        });
    }

    /// `"swap #3"`, or `"swap #3 (move)"` when the leaf label differs from the name.
    pub fn describe(&self, leaf: Option<&LowerMetadata>) -> String {
        match leaf {
            Some(l) if l.label != self.name => {
                format!("{} #{} ({})", self.name, self.sequence_id, l.label)
            }
            _ => format!("{} #{}", self.name, self.sequence_id),
        }
    }
}

/// All finished tags of a scene, in registration order.
#[derive(Clone, Debug, Default)]
pub struct MetadataForest {
    nodes: Vec<Metadata>,
}

impl MetadataForest {
    /// Empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, node: Metadata) {
        self.nodes.push(node);
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing was tagged.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Metadata> {
        self.nodes.iter()
    }

    /// Every node named `name`, ordered by occurrence. Empty for unknown names.
    pub fn find_by_name(&self, name: &str) -> Vec<&Metadata> {
        let mut out: Vec<&Metadata> = self.nodes.iter().filter(|m| m.name == name).collect();
        out.sort_by_key(|m| m.sequence_id);
        out
    }

    /// The `k`-th run (1-based) of the operation `name`.
    pub fn find_by_name_and_occurrence(&self, name: &str, k: u32) -> Option<&Metadata> {
        self.nodes
            .iter()
            .find(|m| m.name == name && m.sequence_id == k)
    }

    /// Pairs recorded under `name` whose leaves touched `value`, in occurrence order.
    pub fn find_action_pairs_by_value(&self, name: &str, value: &DomainValue) -> Vec<PairId> {
        self.find_by_name(name)
            .into_iter()
            .flat_map(|m| m.children.iter())
            .filter(|leaf| leaf.touches(value))
            .map(LowerMetadata::pair)
            .collect()
    }

    /// Drop every leaf pointing at `pair`. Returns how many were removed.
    pub(crate) fn detach(&mut self, pair: PairId) -> usize {
        let mut removed = 0;
        for node in &mut self.nodes {
            let before = node.children.len();
            node.children.retain(|leaf| leaf.pair != pair);
            removed += before - node.children.len();
        }
        removed
    }

    /// Map each tagged pair to a description of its tag.
    pub(crate) fn descriptions(&self) -> HashMap<PairId, String> {
        let mut out = HashMap::new();
        for node in &self.nodes {
            for leaf in &node.children {
                out.entry(leaf.pair)
                    .or_insert_with(|| node.describe(Some(leaf)));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/tree.rs"]
mod tests;
