use crate::{
    action::{directive::Directive, transform::Transform},
    foundation::core::Rgba8,
};

/// Rendering-engine entry point a scene action is submitted through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    /// Play the directives as an animation.
    Play,
    /// Apply the directives immediately, without animation.
    Apply,
}

/// One schedulable call into the rendering engine.
#[derive(Clone, Debug)]
pub struct SceneAction {
    entry: EntryPoint,
    transform: Transform,
    merge_with_previous: bool,
    runtime_tunable: bool,
}

impl SceneAction {
    /// An animated action with a tunable runtime.
    pub fn play(transform: Transform) -> Self {
        Self {
            entry: EntryPoint::Play,
            transform,
            merge_with_previous: false,
            runtime_tunable: true,
        }
    }

    /// An instant action. Its runtime is never tunable.
    pub fn apply(transform: Transform) -> Self {
        Self {
            entry: EntryPoint::Apply,
            transform,
            merge_with_previous: false,
            runtime_tunable: false,
        }
    }

    /// Allow this action to join the block of the action recorded right before it.
    pub fn merged(mut self) -> Self {
        self.merge_with_previous = true;
        self
    }

    /// Pin an animated action to the engine's own duration.
    pub fn fixed_runtime(mut self) -> Self {
        self.runtime_tunable = false;
        self
    }

    /// How the engine runs this action.
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// Whether this action joins the previous pair's block.
    pub fn merges_with_previous(&self) -> bool {
        self.merge_with_previous
    }

    /// Whether a runtime can be set.
    pub fn runtime_tunable(&self) -> bool {
        self.runtime_tunable
    }

    /// Transform label.
    pub fn name(&self) -> &str {
        self.transform.label()
    }

    /// The wrapped transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Directives this action submits.
    pub fn run(&self) -> Vec<Directive> {
        self.transform.run()
    }

    /// Whether a color slot exists.
    pub fn can_set_color(&self) -> bool {
        self.transform.can_set_color()
    }

    /// Current color slot value.
    pub fn color(&self) -> Option<Rgba8> {
        self.transform.color()
    }

    /// Rewrite the color slot; returns false if there is none.
    pub fn set_color(&mut self, c: Rgba8) -> bool {
        self.transform.set_color(c)
    }
}
