//! # sceneplay guide
//!
//! This module is a standalone walkthrough of sceneplay's model and public API.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Directive`](crate::Directive): one rendering instruction (show, move, recolor, ...).
//!   The pipeline never interprets directives; the rendering engine does.
//! - [`Transform`](crate::Transform): a deferred call producing directives, with a typed color
//!   slot that customization may overwrite.
//! - [`SceneAction`](crate::SceneAction): a transform bound to an [`EntryPoint`](crate::EntryPoint)
//!   (`Play` or `Apply`), plus two flags: *merges with previous* and *runtime tunable*.
//! - [`ActionPair`](crate::ActionPair): what every recording operation emits. An animated action,
//!   an optional static (instant) fallback, and a runtime selector.
//! - [`Metadata`](crate::Metadata) / [`LowerMetadata`](crate::LowerMetadata): the tag tree. One
//!   `Metadata` per run of a named operation, one leaf per pair it produced, with the domain
//!   values involved.
//! - [`AnimationBlock`](crate::AnimationBlock): a contiguous, co-timed run of pairs.
//! - [`Scene`](crate::Scene): owns all of the above and runs the three phases.
//!
//! ---
//!
//! ## Runtime semantics
//!
//! | `runtime`  | what runs          | block duration (as anchor) |
//! |------------|--------------------|----------------------------|
//! | `None`     | animated action    | `SceneConfig::default_runtime` |
//! | `Some(0)`  | static fallback    | `0` (instant)              |
//! | `Some(r)`  | animated action    | `r`                        |
//!
//! Non-tunable actions always last `0` and are submitted without a duration.
//! [`ActionPair::skip`](crate::ActionPair::skip) is `set_runtime(0)`;
//! [`ActionPair::fast_forward`](crate::ActionPair::fast_forward) divides the runtime, treating an
//! unset runtime as `1`.
//!
//! Requests that do not apply (coloring a pair without a color slot, skipping a pair without a
//! fallback, retiming a non-tunable action) log a `tracing` warning and return `false`.
//! Customization scripts can therefore probe capabilities without checking first.
//!
//! ---
//!
//! ## Tagging
//!
//! Recording operations take an optional parent tag:
//!
//! ```
//! use sceneplay::{ActionPair, Directive, Metadata, ObjectId, Recorder};
//!
//! fn blink(rec: &mut Recorder<'_>, object: ObjectId, parent: Option<&mut Metadata>) {
//!     rec.operation("blink", parent, |rec, meta| {
//!         rec.record(meta, ActionPair::animate(Directive::Hide { object }), []);
//!         rec.record(meta, ActionPair::animate(Directive::Recolor {
//!             object,
//!             color: sceneplay::Rgba8::WHITE,
//!         }), []);
//!     });
//! }
//! ```
//!
//! Called on its own, `blink` creates `blink #n` and registers it when done. Called from inside
//! another operation with that operation's tag, its pairs land in the caller's tag instead.
//! Occurrence numbers come from a per-scene [`NameCounterRegistry`](crate::NameCounterRegistry),
//! so two scenes never share counters.
//!
//! [`Recorder::pin`](crate::Recorder::pin) records an instant no-op under a name. Customization
//! can find it with `find_by_name_and_occurrence` and insert new pairs right after it.
//!
//! ---
//!
//! ## Grouping and timing
//!
//! Execution scans the final list left to right. A pair joins the open block when its current
//! action merges with the previous one *and* uses the anchor's entry point; otherwise it opens
//! a new block. Only the anchor's runtime counts. Start times are a running sum of durations,
//! so instant blocks share a timestamp with their successor.
//!
//! Before grouping, a trailing wait is appended (see [`SceneConfig`](crate::SceneConfig)) so the
//! final frame holds on screen.
//!
//! For each block, the directives of every member are collected in order and submitted in one
//! call: [`RenderEngine::play`](crate::RenderEngine::play) with the block duration for tunable
//! anchors, or [`RenderEngine::apply`](crate::RenderEngine::apply). An engine error stops the run
//! at that block.
