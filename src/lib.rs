//! sceneplay records visual operations as editable commands and replays them in timed blocks.
//!
//! Caller code (loops, recursion, conditionals) drives scene objects; every visual effect is
//! captured as an [`ActionPair`] instead of being drawn. The recording can then be edited by
//! index or by semantic tag, and finally grouped into [`AnimationBlock`]s that are handed to a
//! [`RenderEngine`] in order.
//!
//! # Pipeline overview
//!
//! 1. **Construct**: [`Scene::construct`] runs caller code against a [`Recorder`], producing the
//!    ordered pair list and a [`MetadataForest`] of tags.
//! 2. **Customize**: [`Scene::customize`] hands out a [`Customizer`] that rewrites colors and
//!    runtimes, and inserts or removes pairs.
//! 3. **Execute**: [`Scene::execute`] merges consecutive compatible pairs into blocks, assigns
//!    start times, and drives the engine block by block.
//!
//! Each phase runs exactly once, in that order.
//!
//! For a longer walkthrough, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod foundation;
mod metadata;
mod objects;
mod scene;
mod timeline;

/// Standalone documentation of sceneplay's concepts.
pub mod guide;

pub use action::directive::Directive;
pub use action::pair::{ActionPair, BlockRef, Customizations};
pub use action::scene_action::{EntryPoint, SceneAction};
pub use action::transform::Transform;
pub use foundation::config::SceneConfig;
pub use foundation::core::{DEFAULT_RUNTIME, ObjectId, PairId, Point, Rgba8, Vec2, secs_to_ms};
pub use foundation::error::{SceneError, SceneResult};
pub use metadata::counter::NameCounterRegistry;
pub use metadata::tree::{DomainValue, LowerMetadata, Metadata, MetadataForest};
pub use objects::array::ArrayView;
pub use objects::graph::GraphView;
pub use objects::{Colorable, Linkable, Showable, VisualRecord};
pub use scene::customize::Customizer;
pub use scene::pipeline::{ExecutionReport, Phase, Scene};
pub use scene::recorder::Recorder;
pub use timeline::block::{
    AnimationBlock, BlockSummary, block_at_ms, build_blocks, group_ranges, total_duration,
};
pub use timeline::engine::{EngineCall, RenderEngine, TraceEngine};
