use crate::{
    action::{pair::ActionPair, scene_action::SceneAction, transform::Transform},
    foundation::core::{ObjectId, PairId},
    metadata::tree::{DomainValue, Metadata},
    scene::state::SceneState,
};

/// Construction-phase handle: scene objects record their visual effects through it.
///
/// Recording operations follow one pattern: take an optional parent [`Metadata`], run
/// inside [`Recorder::operation`], and record each pair with [`Recorder::record`].
pub struct Recorder<'a> {
    state: &'a mut SceneState,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(state: &'a mut SceneState) -> Self {
        Self { state }
    }

    /// Run a tagged operation.
    ///
    /// With a `parent`, the body records into the caller's tag. Otherwise a fresh tag named
    /// `name` is created with the next occurrence number and registered once the body returns.
    pub fn operation<R>(
        &mut self,
        name: &str,
        parent: Option<&mut Metadata>,
        body: impl FnOnce(&mut Self, &mut Metadata) -> R,
    ) -> R {
        match parent {
            Some(meta) => body(self, meta),
            None => {
                let seq = self.state.counters.next(name);
                let mut meta = Metadata::new(name, seq);
                let out = body(self, &mut meta);
                tracing::trace!(name, seq, pairs = meta.children().len(), "tag registered");
                self.state.forest.register(meta);
                out
            }
        }
    }

    /// Append `pair` and tag it under `meta` with the operation's own label.
    pub fn record(
        &mut self,
        meta: &mut Metadata,
        pair: ActionPair,
        values: impl IntoIterator<Item = DomainValue>,
    ) -> PairId {
        let id = self.state.push(pair);
        meta.push_child(None, id, values.into_iter().collect());
        id
    }

    /// Like [`Recorder::record`], with an explicit leaf label.
    pub fn record_labeled(
        &mut self,
        meta: &mut Metadata,
        label: impl Into<String>,
        pair: ActionPair,
        values: impl IntoIterator<Item = DomainValue>,
    ) -> PairId {
        let id = self.state.push(pair);
        meta.push_child(Some(label.into()), id, values.into_iter().collect());
        id
    }

    /// Record a zero-effect bookmark tagged `name`.
    pub fn pin(&mut self, name: &str) -> PairId {
        self.operation(name, None, |rec, meta| {
            let pair = ActionPair::new(SceneAction::apply(Transform::noop(name)));
            rec.record(meta, pair, [])
        })
    }

    /// Hold the frame for `runtime` seconds, tagged `"wait"`.
    pub fn wait(&mut self, runtime: Option<f64>, parent: Option<&mut Metadata>) -> PairId {
        self.operation("wait", parent, |rec, meta| {
            rec.record(meta, ActionPair::wait(runtime), [])
        })
    }

    /// Allocate an id for a new scene object.
    pub fn new_object(&mut self) -> ObjectId {
        self.state.alloc_object()
    }

    /// Number of pairs recorded so far.
    pub fn len(&self) -> usize {
        self.state.pairs.len()
    }

    /// True before the first pair is recorded.
    pub fn is_empty(&self) -> bool {
        self.state.pairs.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/recorder.rs"]
mod tests;
