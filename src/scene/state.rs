use std::collections::HashMap;

use crate::{
    action::pair::ActionPair,
    foundation::{
        core::{ObjectId, PairId},
        error::{SceneError, SceneResult},
    },
    metadata::{counter::NameCounterRegistry, tree::MetadataForest},
};

/// The ordered pair list and its tag forest, owned by one scene.
///
/// Invariant: `pairs[i].sequence_index == i` and `positions[pairs[i].id] == i`.
#[derive(Debug, Default)]
pub(crate) struct SceneState {
    pub(crate) pairs: Vec<ActionPair>,
    pub(crate) forest: MetadataForest,
    pub(crate) counters: NameCounterRegistry,
    positions: HashMap<PairId, usize>,
    next_pair: u64,
    next_object: u32,
}

impl SceneState {
    fn assign_id(&mut self, pair: &mut ActionPair) -> PairId {
        let id = PairId(self.next_pair);
        self.next_pair += 1;
        pair.id = id;
        pair.block = None;
        id
    }

    pub(crate) fn push(&mut self, mut pair: ActionPair) -> PairId {
        let id = self.assign_id(&mut pair);
        let index = self.pairs.len();
        pair.sequence_index = index;
        self.positions.insert(id, index);
        self.pairs.push(pair);
        id
    }

    pub(crate) fn insert(&mut self, index: usize, mut pair: ActionPair) -> SceneResult<PairId> {
        if index > self.pairs.len() {
            return Err(SceneError::out_of_bounds(index, self.pairs.len()));
        }
        let id = self.assign_id(&mut pair);
        self.pairs.insert(index, pair);
        self.reindex_from(index);
        Ok(id)
    }

    pub(crate) fn remove(&mut self, index: usize) -> SceneResult<ActionPair> {
        if index >= self.pairs.len() {
            return Err(SceneError::out_of_bounds(index, self.pairs.len()));
        }
        let pair = self.pairs.remove(index);
        self.positions.remove(&pair.id);
        self.forest.detach(pair.id);
        self.reindex_from(index);
        Ok(pair)
    }

    fn reindex_from(&mut self, from: usize) {
        for (i, pair) in self.pairs.iter_mut().enumerate().skip(from) {
            pair.sequence_index = i;
            self.positions.insert(pair.id, i);
        }
    }

    /// Id the next pushed or inserted pair will receive.
    pub(crate) fn next_id(&self) -> PairId {
        PairId(self.next_pair)
    }

    pub(crate) fn index_of(&self, id: PairId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn get(&self, index: usize) -> SceneResult<&ActionPair> {
        let len = self.pairs.len();
        self.pairs
            .get(index)
            .ok_or(SceneError::out_of_bounds(index, len))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> SceneResult<&mut ActionPair> {
        let len = self.pairs.len();
        self.pairs
            .get_mut(index)
            .ok_or(SceneError::out_of_bounds(index, len))
    }

    pub(crate) fn by_id_mut(&mut self, id: PairId) -> Option<&mut ActionPair> {
        let index = self.index_of(id)?;
        self.pairs.get_mut(index)
    }

    pub(crate) fn alloc_object(&mut self) -> ObjectId {
        let id = ObjectId(self.next_object);
        self.next_object += 1;
        id
    }
}
