//! Scene objects: callers of the pipeline that turn domain operations into recordings.
//!
//! Objects compose a [`VisualRecord`] per drawable element and expose capabilities through
//! small traits instead of a class hierarchy.

pub(crate) mod array;
pub(crate) mod graph;
pub(crate) mod record;

use crate::{
    foundation::{core::Rgba8, error::SceneResult},
    metadata::tree::Metadata,
    scene::recorder::Recorder,
};

pub use record::VisualRecord;

/// Objects that can appear and disappear.
pub trait Showable {
    /// Record the object appearing (tag `"show"`).
    fn show(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>);
    /// Record the object disappearing (tag `"hide"`).
    fn hide(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>);
}

/// Objects whose fill color can be changed.
pub trait Colorable {
    /// Record every element turning `color` (tag `"highlight"`).
    fn highlight(&mut self, rec: &mut Recorder<'_>, color: Rgba8, parent: Option<&mut Metadata>);
    /// Record every element returning to its base color (tag `"unhighlight"`).
    fn unhighlight(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>);
}

/// Objects whose elements can be connected by edges.
pub trait Linkable {
    /// Record an edge appearing between elements `from` and `to` (tag `"link"`).
    fn link(
        &mut self,
        rec: &mut Recorder<'_>,
        from: usize,
        to: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()>;
    /// Record the edge between `from` and `to` disappearing (tag `"unlink"`).
    fn unlink(
        &mut self,
        rec: &mut Recorder<'_>,
        from: usize,
        to: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()>;
}
