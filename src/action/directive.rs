use crate::foundation::core::{ObjectId, Point, Rgba8};

/// One rendering instruction handed to the rendering engine.
///
/// The pipeline never interprets directives; it only reads and rewrites the `color` field
/// of the variants that carry one.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Make an object visible at `at`.
    Show {
        /// Target object.
        object: ObjectId,
        /// Fill color.
        color: Rgba8,
        /// Position.
        at: Point,
    },
    /// Remove an object from view.
    Hide {
        /// Target object.
        object: ObjectId,
    },
    /// Change an object's fill color.
    Recolor {
        /// Target object.
        object: ObjectId,
        /// New fill color.
        color: Rgba8,
    },
    /// Move an object.
    MoveTo {
        /// Target object.
        object: ObjectId,
        /// Destination.
        to: Point,
    },
    /// Replace the text shown inside an object.
    SetLabel {
        /// Target object.
        object: ObjectId,
        /// New text.
        text: String,
    },
    /// Draw an edge between two objects.
    Connect {
        /// Edge source.
        from: ObjectId,
        /// Edge target.
        to: ObjectId,
        /// Stroke color.
        color: Rgba8,
    },
    /// Remove the edge between two objects.
    Disconnect {
        /// Edge source.
        from: ObjectId,
        /// Edge target.
        to: ObjectId,
    },
    /// Free-standing caption text.
    Caption {
        /// Caption text.
        text: String,
        /// Text color.
        color: Rgba8,
    },
    /// Move the camera.
    Camera {
        /// New frame center.
        center: Point,
        /// Zoom factor (1 = unscaled).
        zoom: f64,
    },
    /// Hold the current frame.
    Wait,
}

impl Directive {
    /// Stable snake_case name of the variant, used as a default action label.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::Hide { .. } => "hide",
            Self::Recolor { .. } => "recolor",
            Self::MoveTo { .. } => "move_to",
            Self::SetLabel { .. } => "set_label",
            Self::Connect { .. } => "connect",
            Self::Disconnect { .. } => "disconnect",
            Self::Caption { .. } => "caption",
            Self::Camera { .. } => "camera",
            Self::Wait => "wait",
        }
    }

    /// The color slot, if this variant has one.
    pub fn color(&self) -> Option<Rgba8> {
        match self {
            Self::Show { color, .. }
            | Self::Recolor { color, .. }
            | Self::Connect { color, .. }
            | Self::Caption { color, .. } => Some(*color),
            _ => None,
        }
    }

    pub(crate) fn color_mut(&mut self) -> Option<&mut Rgba8> {
        match self {
            Self::Show { color, .. }
            | Self::Recolor { color, .. }
            | Self::Connect { color, .. }
            | Self::Caption { color, .. } => Some(color),
            _ => None,
        }
    }
}
