use crate::action::{directive::Directive, scene_action::EntryPoint};

/// The external rendering engine the scene drives block by block.
///
/// Implementations draw (or record) directives; the scene never inspects them.
pub trait RenderEngine {
    /// Animate `directives` together. `duration` is `Some` only for tunable blocks.
    fn play(&mut self, directives: Vec<Directive>, duration: Option<f64>) -> anyhow::Result<()>;

    /// Apply `directives` immediately.
    fn apply(&mut self, directives: Vec<Directive>) -> anyhow::Result<()>;
}

/// One call observed by [`TraceEngine`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EngineCall {
    /// Entry point that was invoked.
    pub entry: EntryPoint,
    /// Directives passed in the call.
    pub directives: Vec<Directive>,
    /// Explicit duration, if one was passed.
    pub duration: Option<f64>,
}

/// Engine that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct TraceEngine {
    calls: Vec<EngineCall>,
}

impl TraceEngine {
    /// Engine with an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Consume the engine, returning its trace.
    pub fn into_calls(self) -> Vec<EngineCall> {
        self.calls
    }
}

impl RenderEngine for TraceEngine {
    fn play(&mut self, directives: Vec<Directive>, duration: Option<f64>) -> anyhow::Result<()> {
        tracing::trace!(count = directives.len(), ?duration, "play");
        self.calls.push(EngineCall {
            entry: EntryPoint::Play,
            directives,
            duration,
        });
        Ok(())
    }

    fn apply(&mut self, directives: Vec<Directive>) -> anyhow::Result<()> {
        tracing::trace!(count = directives.len(), "apply");
        self.calls.push(EngineCall {
            entry: EntryPoint::Apply,
            directives,
            duration: None,
        });
        Ok(())
    }
}
