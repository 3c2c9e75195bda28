use crate::{
    action::{
        directive::Directive,
        scene_action::{EntryPoint, SceneAction},
        transform::Transform,
    },
    foundation::core::{DEFAULT_RUNTIME, PairId, Rgba8},
};

/// Position of a pair inside the block list computed by the last grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRef {
    /// Index into the scene's block list.
    pub block: usize,
    /// Whether this pair is the first member (anchor) of its block.
    pub is_anchor: bool,
}

/// Editable properties a pair (or block) exposes to an editing UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Customizations {
    /// A color slot exists.
    pub color: bool,
    /// The runtime can be changed and affects timing.
    pub runtime: bool,
}

/// The recording unit: an animated action, its instant fallback, and a runtime selector.
///
/// Runtime semantics:
/// - `None`: the animated action plays for the default duration.
/// - `Some(0.0)`: the static fallback runs instead (instant).
/// - `Some(r)`: the animated action plays for `r` seconds.
#[derive(Clone, Debug)]
pub struct ActionPair {
    pub(crate) id: PairId,
    pub(crate) sequence_index: usize,
    pub(crate) block: Option<BlockRef>,
    animated: SceneAction,
    fallback: Option<SceneAction>,
    runtime: Option<f64>,
}

impl ActionPair {
    /// A pair without a distinct static form. It can never be skipped.
    pub fn new(animated: SceneAction) -> Self {
        Self {
            id: PairId(0),
            sequence_index: 0,
            block: None,
            animated,
            fallback: None,
            runtime: None,
        }
    }

    /// A pair whose effect can be skipped by running `fallback` instantly.
    pub fn with_static(animated: SceneAction, fallback: SceneAction) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::new(animated)
        }
    }

    /// The common shape: play `directive` animated, or apply it instantly when skipped.
    pub fn animate(directive: Directive) -> Self {
        Self::with_static(
            SceneAction::play(Transform::emit(directive.clone())),
            SceneAction::apply(Transform::emit(directive)),
        )
    }

    /// Like [`ActionPair::animate`], but joins the block of the previous pair.
    pub fn animate_merged(directive: Directive) -> Self {
        Self::with_static(
            SceneAction::play(Transform::emit(directive.clone())).merged(),
            SceneAction::apply(Transform::emit(directive)).merged(),
        )
    }

    /// Hold the current frame for `runtime` seconds. `None` or a non-positive value means
    /// the default duration; a wait has no static form and cannot be skipped.
    pub fn wait(runtime: Option<f64>) -> Self {
        let mut pair = Self::new(SceneAction::play(Transform::emit(Directive::Wait)));
        pair.runtime = runtime.filter(|r| r.is_finite() && *r > 0.0);
        pair
    }

    /// A caption that fades in, or appears instantly when skipped.
    pub fn caption(text: impl Into<String>, color: Rgba8) -> Self {
        Self::animate(Directive::Caption {
            text: text.into(),
            color,
        })
    }

    /// Identity assigned when the pair was recorded or inserted.
    pub fn id(&self) -> PairId {
        self.id
    }

    /// Position in the scene's ordered list.
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// Block membership from the last grouping, if grouping ran.
    pub fn block(&self) -> Option<BlockRef> {
        self.block
    }

    /// The animated action.
    pub fn animated(&self) -> &SceneAction {
        &self.animated
    }

    /// The static form; the animated form when no distinct one exists.
    pub fn static_action(&self) -> &SceneAction {
        self.fallback.as_ref().unwrap_or(&self.animated)
    }

    /// Whether a distinct static form exists.
    pub fn has_static_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Runtime override, if any.
    pub fn runtime(&self) -> Option<f64> {
        self.runtime
    }

    /// Name of the current action.
    pub fn name(&self) -> &str {
        self.animated.name()
    }

    /// What actually runs: the static form when skipped, the animated form otherwise.
    pub fn current_action(&self) -> &SceneAction {
        match (self.runtime, &self.fallback) {
            (Some(r), Some(fallback)) if r == 0.0 => fallback,
            _ => &self.animated,
        }
    }

    /// Entry point of the current action.
    pub fn entry(&self) -> EntryPoint {
        self.current_action().entry()
    }

    /// Set an explicit runtime in seconds.
    ///
    /// Returns `false` (after logging a warning) when the request is not applicable:
    /// a nonzero runtime on a non-tunable action, a zero runtime without a static fallback,
    /// or a negative/non-finite value.
    pub fn set_runtime(&mut self, runtime: f64) -> bool {
        if !runtime.is_finite() || runtime < 0.0 {
            tracing::warn!(
                index = self.sequence_index,
                action = %self.name(),
                runtime,
                "set_runtime ignored: runtime must be finite and >= 0"
            );
            return false;
        }
        if runtime == 0.0 {
            if self.fallback.is_none() {
                tracing::warn!(
                    index = self.sequence_index,
                    action = %self.name(),
                    "set_runtime ignored: no static fallback, the effect cannot be skipped"
                );
                return false;
            }
        } else if !self.animated.runtime_tunable() {
            tracing::warn!(
                index = self.sequence_index,
                action = %self.name(),
                runtime,
                "set_runtime ignored: runtime is not tunable"
            );
            return false;
        }
        self.runtime = Some(runtime);
        true
    }

    /// Run the static form instead of the animation.
    pub fn skip(&mut self) -> bool {
        self.set_runtime(0.0)
    }

    /// Divide the runtime by `factor`; an unset runtime counts as the unit duration.
    pub fn fast_forward(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::warn!(
                index = self.sequence_index,
                action = %self.name(),
                factor,
                "fast_forward ignored: factor must be finite and > 0"
            );
            return false;
        }
        let base = self.runtime.unwrap_or(DEFAULT_RUNTIME);
        self.set_runtime(base / factor)
    }

    /// Clear any explicit runtime.
    pub fn reset_runtime(&mut self) {
        self.runtime = None;
    }

    /// Whether either form carries a color slot.
    pub fn can_set_color(&self) -> bool {
        self.animated.can_set_color() || self.fallback.as_ref().is_some_and(|s| s.can_set_color())
    }

    /// Color of the animated form, else of the static form.
    pub fn color(&self) -> Option<Rgba8> {
        self.animated
            .color()
            .or_else(|| self.fallback.as_ref().and_then(SceneAction::color))
    }

    /// Recolor every form that has a color slot, so skipped and animated renders agree.
    pub fn set_color(&mut self, c: Rgba8) -> bool {
        if !self.can_set_color() {
            tracing::warn!(
                index = self.sequence_index,
                action = %self.name(),
                "set_color ignored: neither form has a color slot"
            );
            return false;
        }
        if self.animated.can_set_color() {
            self.animated.set_color(c);
        }
        if let Some(fallback) = self.fallback.as_mut().filter(|s| s.can_set_color()) {
            fallback.set_color(c);
        }
        true
    }

    /// Properties an editor may change. Runtime only counts on a block anchor,
    /// since later members follow the anchor's timing.
    pub fn customizations(&self) -> Customizations {
        let runtime_editable = self.animated.runtime_tunable() || self.fallback.is_some();
        let anchor = self.block.is_none_or(|b| b.is_anchor);
        Customizations {
            color: self.can_set_color(),
            runtime: runtime_editable && anchor,
        }
    }

    /// Seconds this pair's block lasts when this pair is its anchor.
    pub fn resolve_runtime(&self, default_runtime: f64) -> f64 {
        if !self.current_action().runtime_tunable() {
            return 0.0;
        }
        self.runtime.unwrap_or(default_runtime)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/action/pair.rs"]
mod tests;
