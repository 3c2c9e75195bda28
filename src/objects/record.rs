use crate::{
    action::{directive::Directive, pair::ActionPair},
    foundation::core::{ObjectId, Point, Rgba8},
};

/// Visual state shared by every scene object, plus builders for the pairs that change it.
///
/// Builders update the tracked state eagerly so later recordings start from the
/// post-effect state.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualRecord {
    id: ObjectId,
    position: Point,
    base_color: Rgba8,
    color: Rgba8,
    visible: bool,
}

fn pair(directive: Directive, merged: bool) -> ActionPair {
    if merged {
        ActionPair::animate_merged(directive)
    } else {
        ActionPair::animate(directive)
    }
}

impl VisualRecord {
    /// Hidden record at `position` with base color `color`.
    pub fn new(id: ObjectId, position: Point, color: Rgba8) -> Self {
        Self {
            id,
            position,
            base_color: color,
            color,
            visible: false,
        }
    }

    /// Object this record draws.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Position after every recorded move.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Color after every recorded recolor.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Color the record was created with.
    pub fn base_color(&self) -> Rgba8 {
        self.base_color
    }

    /// Whether the last recorded effect left the object visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the object at its tracked position and color.
    pub fn show_pair(&mut self, merged: bool) -> ActionPair {
        self.visible = true;
        pair(
            Directive::Show {
                object: self.id,
                color: self.color,
                at: self.position,
            },
            merged,
        )
    }

    /// Hide the object.
    pub fn hide_pair(&mut self, merged: bool) -> ActionPair {
        self.visible = false;
        pair(Directive::Hide { object: self.id }, merged)
    }

    /// Recolor the object.
    pub fn recolor_pair(&mut self, color: Rgba8, merged: bool) -> ActionPair {
        self.color = color;
        pair(
            Directive::Recolor {
                object: self.id,
                color,
            },
            merged,
        )
    }

    /// Back to the color the object was created with.
    pub fn restore_pair(&mut self, merged: bool) -> ActionPair {
        self.recolor_pair(self.base_color, merged)
    }

    /// Move the object to `to`.
    pub fn move_pair(&mut self, to: Point, merged: bool) -> ActionPair {
        self.position = to;
        pair(
            Directive::MoveTo {
                object: self.id,
                to,
            },
            merged,
        )
    }

    /// Replace the object's label text.
    pub fn label_pair(&self, text: impl Into<String>, merged: bool) -> ActionPair {
        pair(
            Directive::SetLabel {
                object: self.id,
                text: text.into(),
            },
            merged,
        )
    }
}
