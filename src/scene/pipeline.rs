use crate::{
    action::{pair::ActionPair, scene_action::EntryPoint},
    foundation::{
        config::SceneConfig,
        error::{SceneError, SceneResult},
    },
    metadata::tree::MetadataForest,
    scene::{customize::Customizer, recorder::Recorder, state::SceneState},
    timeline::{
        block::{AnimationBlock, BlockSummary, block_at_ms, build_blocks, link_pairs},
        engine::RenderEngine,
    },
};

/// Where a scene is in its construct -> customize -> execute lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing recorded yet.
    Empty,
    /// Construction finished.
    Constructed,
    /// Customization finished.
    Customized,
    /// Execution finished.
    Executed,
    /// A phase failed; the scene cannot continue.
    Failed,
}

/// Outcome of [`Scene::execute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExecutionReport {
    /// Number of blocks submitted to the engine.
    pub blocks: usize,
    /// Number of action pairs covered, including the trailing wait.
    pub pairs: usize,
    /// Final clock value in seconds.
    pub duration: f64,
}

/// Record, customize, then execute a sequence of visual operations.
///
/// Each phase runs exactly once and in order; customization may be skipped.
///
/// ```
/// use sceneplay::{ArrayView, Scene, SceneConfig, Showable, TraceEngine};
///
/// let mut scene = Scene::new(SceneConfig::default())?;
/// scene.construct(|rec| {
///     let mut arr = ArrayView::new(rec, &[3, 1]);
///     arr.show(rec, None);
///     if arr.compare(rec, 0, 1, None)?.is_gt() {
///         arr.swap(rec, 0, 1, None)?;
///     }
///     Ok(())
/// })?;
/// scene.customize(|c| {
///     for pair in c.tagged_pairs_mut("compare", 1) {
///         pair.skip();
///     }
///     Ok(())
/// })?;
/// let mut engine = TraceEngine::new();
/// let report = scene.execute(&mut engine)?;
/// assert_eq!(report.blocks, scene.blocks().len());
/// # Ok::<(), sceneplay::SceneError>(())
/// ```
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    phase: Phase,
    state: SceneState,
    blocks: Vec<AnimationBlock>,
}

impl Scene {
    /// New scene in [`Phase::Empty`]; fails if `config` is invalid.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Empty,
            state: SceneState::default(),
            blocks: Vec::new(),
        })
    }

    /// Settings this scene executes with.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Recorded pairs in execution order.
    pub fn action_pairs(&self) -> &[ActionPair] {
        &self.state.pairs
    }

    /// Tags recorded during construction.
    pub fn forest(&self) -> &MetadataForest {
        &self.state.forest
    }

    /// Blocks from the last execution; empty before that.
    pub fn blocks(&self) -> &[AnimationBlock] {
        &self.blocks
    }

    /// Final clock value of the last execution.
    pub fn total_duration(&self) -> f64 {
        crate::timeline::block::total_duration(&self.blocks)
    }

    /// Block displayed at a scrub-bar position.
    pub fn block_at_ms(&self, ms: u64) -> Option<&AnimationBlock> {
        block_at_ms(&self.blocks, ms)
    }

    /// Serializable view of the executed blocks.
    pub fn timeline_summary(&self) -> Vec<BlockSummary> {
        self.blocks.iter().map(BlockSummary::from).collect()
    }

    fn enter(&mut self, allowed: &[Phase], name: &str) -> SceneResult<()> {
        if allowed.contains(&self.phase) {
            return Ok(());
        }
        Err(SceneError::phase(format!(
            "cannot {name} a scene in phase {:?}",
            self.phase
        )))
    }

    fn finish<T>(&mut self, result: SceneResult<T>, next: Phase) -> SceneResult<T> {
        self.phase = if result.is_ok() { next } else { Phase::Failed };
        result
    }

    /// Run the caller's algorithm, recording every visual effect in call order.
    #[tracing::instrument(skip_all)]
    pub fn construct(
        &mut self,
        build: impl FnOnce(&mut Recorder<'_>) -> SceneResult<()>,
    ) -> SceneResult<()> {
        self.enter(&[Phase::Empty], "construct")?;
        self.state.counters.reset();
        let result = build(&mut Recorder::new(&mut self.state));
        tracing::debug!(
            pairs = self.state.pairs.len(),
            tags = self.state.forest.len(),
            "construction finished"
        );
        self.finish(result, Phase::Constructed)
    }

    /// Edit the recorded pairs before execution.
    #[tracing::instrument(skip_all)]
    pub fn customize(
        &mut self,
        edit: impl FnOnce(&mut Customizer<'_>) -> SceneResult<()>,
    ) -> SceneResult<()> {
        self.enter(&[Phase::Constructed], "customize")?;
        let result = edit(&mut Customizer::new(&mut self.state, &self.config));
        self.finish(result, Phase::Customized)
    }

    /// Group pairs into blocks, assign timings, and drive `engine` block by block.
    ///
    /// An engine failure stops execution at the failing block; earlier blocks stay executed.
    #[tracing::instrument(skip_all)]
    pub fn execute(&mut self, engine: &mut dyn RenderEngine) -> SceneResult<ExecutionReport> {
        self.enter(&[Phase::Constructed, Phase::Customized], "execute")?;
        let result = self.run_blocks(engine);
        self.finish(result, Phase::Executed)
    }

    fn run_blocks(&mut self, engine: &mut dyn RenderEngine) -> SceneResult<ExecutionReport> {
        if self.config.trailing_wait {
            let runtime = self.config.effective_trailing_wait();
            self.state.push(ActionPair::wait(Some(runtime)));
        }

        let descriptions = self.state.forest.descriptions();
        self.blocks = build_blocks(
            &self.state.pairs,
            &descriptions,
            self.config.default_runtime,
        );
        link_pairs(&mut self.state.pairs, &self.blocks);

        for block in &self.blocks {
            let anchor = &self.state.pairs[block.start_index()];
            let directives = self.state.pairs[block.pair_range()]
                .iter()
                .flat_map(|p| p.current_action().run())
                .collect();
            tracing::trace!(
                block = block.index(),
                start = block.start_time(),
                duration = block.duration(),
                description = block.description(),
                "executing block"
            );
            let outcome = match block.entry() {
                EntryPoint::Play => {
                    let duration = anchor
                        .current_action()
                        .runtime_tunable()
                        .then_some(block.duration());
                    engine.play(directives, duration)
                }
                EntryPoint::Apply => engine.apply(directives),
            };
            outcome.map_err(|source| SceneError::Render {
                block: block.index(),
                source,
            })?;
        }

        Ok(ExecutionReport {
            blocks: self.blocks.len(),
            pairs: self.state.pairs.len(),
            duration: self.total_duration(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/pipeline.rs"]
mod tests;
