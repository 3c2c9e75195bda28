use std::{fmt, rc::Rc};

use crate::{action::directive::Directive, foundation::core::Rgba8};

type BuildFn = dyn Fn(Option<Rgba8>) -> Vec<Directive>;

/// A deferred invocation that produces rendering directives when run.
///
/// The color slot is typed: for fixed directives it is the `color` field of every colored
/// directive; for deferred builders it is the explicit color argument passed to the builder.
#[derive(Clone)]
pub struct Transform {
    label: String,
    target: Target,
}

#[derive(Clone)]
enum Target {
    Fixed(Vec<Directive>),
    Deferred {
        color: Option<Rgba8>,
        build: Rc<BuildFn>,
    },
}

impl Transform {
    /// A transform that yields exactly `directive`, labelled after its kind.
    pub fn emit(directive: Directive) -> Self {
        Self {
            label: directive.kind_name().to_string(),
            target: Target::Fixed(vec![directive]),
        }
    }

    /// A transform that yields several directives in order.
    pub fn batch(label: impl Into<String>, directives: Vec<Directive>) -> Self {
        Self {
            label: label.into(),
            target: Target::Fixed(directives),
        }
    }

    /// A transform whose directives are built at run time.
    ///
    /// `color` is `Some` when the builder takes a color; only then can the color be customized.
    pub fn deferred(
        label: impl Into<String>,
        color: Option<Rgba8>,
        build: impl Fn(Option<Rgba8>) -> Vec<Directive> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            target: Target::Deferred {
                color,
                build: Rc::new(build),
            },
        }
    }

    /// A transform with no visual effect.
    pub fn noop(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Target::Fixed(Vec::new()),
        }
    }

    /// Human-readable label used in logs and block descriptions.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invoke the target and return its directives.
    pub fn run(&self) -> Vec<Directive> {
        match &self.target {
            Target::Fixed(directives) => directives.clone(),
            Target::Deferred { color, build } => build(*color),
        }
    }

    /// Whether a color slot is configured.
    pub fn can_set_color(&self) -> bool {
        match &self.target {
            Target::Fixed(directives) => directives.iter().any(|d| d.color().is_some()),
            Target::Deferred { color, .. } => color.is_some(),
        }
    }

    /// Current value of the color slot.
    pub fn color(&self) -> Option<Rgba8> {
        match &self.target {
            Target::Fixed(directives) => directives.iter().find_map(Directive::color),
            Target::Deferred { color, .. } => *color,
        }
    }

    /// Overwrite the color slot. Without a slot this logs a warning and does nothing.
    pub fn set_color(&mut self, c: Rgba8) -> bool {
        if !self.can_set_color() {
            tracing::warn!(action = %self.label, "set_color ignored: no color slot");
            return false;
        }
        match &mut self.target {
            Target::Fixed(directives) => {
                for slot in directives.iter_mut().filter_map(Directive::color_mut) {
                    *slot = c;
                }
            }
            Target::Deferred { color, .. } => *color = Some(c),
        }
        true
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Transform");
        s.field("label", &self.label);
        match &self.target {
            Target::Fixed(directives) => s.field("directives", directives),
            Target::Deferred { color, .. } => s.field("deferred_color", color),
        };
        s.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/action/transform.rs"]
mod tests;
