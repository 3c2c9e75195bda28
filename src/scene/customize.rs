use std::collections::HashSet;

use crate::{
    action::pair::ActionPair,
    foundation::{config::SceneConfig, core::PairId, error::SceneResult},
    metadata::tree::{DomainValue, Metadata, MetadataForest},
    scene::state::SceneState,
    timeline::block::{AnimationBlock, build_blocks},
};

/// Customization-phase handle.
///
/// Pairs are addressed either by sequence index or through the tags recorded during
/// construction. Tag lookups return empty results for unknown names; index accesses out of
/// range are errors.
pub struct Customizer<'a> {
    state: &'a mut SceneState,
    config: &'a SceneConfig,
}

impl<'a> Customizer<'a> {
    pub(crate) fn new(state: &'a mut SceneState, config: &'a SceneConfig) -> Self {
        Self { state, config }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.state.pairs.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.state.pairs.is_empty()
    }

    /// Pairs in execution order.
    pub fn pairs(&self) -> &[ActionPair] {
        &self.state.pairs
    }

    /// Pair at `index`.
    pub fn pair(&self, index: usize) -> SceneResult<&ActionPair> {
        self.state.get(index)
    }

    /// Mutable pair at `index`.
    pub fn pair_mut(&mut self, index: usize) -> SceneResult<&mut ActionPair> {
        self.state.get_mut(index)
    }

    /// Pair by stable id; `None` if it was removed.
    pub fn pair_by_id_mut(&mut self, id: PairId) -> Option<&mut ActionPair> {
        self.state.by_id_mut(id)
    }

    /// Current sequence index of a pair.
    pub fn index_of(&self, id: PairId) -> Option<usize> {
        self.state.index_of(id)
    }

    /// Tags recorded during construction.
    pub fn forest(&self) -> &MetadataForest {
        &self.state.forest
    }

    /// Every run of the operation `name`, by occurrence.
    pub fn find_by_name(&self, name: &str) -> Vec<&Metadata> {
        self.state.forest.find_by_name(name)
    }

    /// The `k`-th run (1-based) of the operation `name`.
    pub fn find_by_name_and_occurrence(&self, name: &str, k: u32) -> Option<&Metadata> {
        self.state.forest.find_by_name_and_occurrence(name, k)
    }

    /// Pairs of `name` whose tag touched `value`.
    pub fn find_action_pairs_by_value(&self, name: &str, value: &DomainValue) -> Vec<PairId> {
        self.state.forest.find_action_pairs_by_value(name, value)
    }

    /// Mutable access to every pair tagged by the `k`-th run of `name`.
    pub fn tagged_pairs_mut(&mut self, name: &str, k: u32) -> Vec<&mut ActionPair> {
        let ids = self
            .state
            .forest
            .find_by_name_and_occurrence(name, k)
            .map(Metadata::pair_ids)
            .unwrap_or_default();
        self.select_mut(&ids)
    }

    /// Mutable access to every pair of `name` whose tag touched `value`.
    pub fn pairs_by_value_mut(&mut self, name: &str, value: &DomainValue) -> Vec<&mut ActionPair> {
        let ids = self.state.forest.find_action_pairs_by_value(name, value);
        self.select_mut(&ids)
    }

    /// Mutable access to every pair tagged by any run of `name`.
    pub fn pairs_named_mut(&mut self, name: &str) -> Vec<&mut ActionPair> {
        let ids: Vec<PairId> = self
            .state
            .forest
            .find_by_name(name)
            .into_iter()
            .flat_map(Metadata::pair_ids)
            .collect();
        self.select_mut(&ids)
    }

    fn select_mut(&mut self, ids: &[PairId]) -> Vec<&mut ActionPair> {
        let wanted: HashSet<PairId> = ids.iter().copied().collect();
        self.state
            .pairs
            .iter_mut()
            .filter(|p| wanted.contains(&p.id))
            .collect()
    }

    /// Insert `pair` so that it ends up at `index`; later pairs shift up by one.
    pub fn insert_action_pair(&mut self, index: usize, pair: ActionPair) -> SceneResult<PairId> {
        let id = self.state.insert(index, pair)?;
        tracing::debug!(index, ?id, "action pair inserted");
        Ok(id)
    }

    /// Insert `pair` right after the pair `anchor` (e.g. a pin).
    pub fn insert_after(&mut self, anchor: PairId, pair: ActionPair) -> Option<PairId> {
        let index = self.state.index_of(anchor)? + 1;
        self.state.insert(index, pair).ok()
    }

    /// Remove the pair at `index`; later pairs shift down and its tags are dropped.
    pub fn remove_action_pair(&mut self, index: usize) -> SceneResult<ActionPair> {
        let pair = self.state.remove(index)?;
        tracing::debug!(index, id = ?pair.id, "action pair removed");
        Ok(pair)
    }

    /// Blocks `execute` would produce from the current list, trailing wait included,
    /// without committing anything.
    pub fn preview_blocks(&self) -> Vec<AnimationBlock> {
        let descriptions = self.state.forest.descriptions();
        let runtime = self.config.default_runtime;
        if !self.config.trailing_wait {
            return build_blocks(&self.state.pairs, &descriptions, runtime);
        }
        let mut wait = ActionPair::wait(Some(self.config.effective_trailing_wait()));
        wait.id = self.state.next_id();
        wait.sequence_index = self.state.pairs.len();
        let mut pairs = self.state.pairs.clone();
        pairs.push(wait);
        build_blocks(&pairs, &descriptions, runtime)
    }
}
