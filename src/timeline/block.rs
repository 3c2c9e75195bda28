use std::{collections::HashMap, ops::Range};

use crate::{
    action::{
        pair::{ActionPair, BlockRef, Customizations},
        scene_action::EntryPoint,
    },
    foundation::core::{PairId, secs_to_ms},
};

/// A contiguous run of action pairs submitted to the rendering engine as one call.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationBlock {
    index: usize,
    start_index: usize,
    end_index: usize,
    start_time: f64,
    duration: f64,
    entry: EntryPoint,
    description: String,
    customizable: Customizations,
}

impl AnimationBlock {
    /// Position in the block list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sequence index of the anchor (first member).
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Sequence index of the last member (inclusive).
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Sequence indices of all members.
    pub fn pair_range(&self) -> Range<usize> {
        self.start_index..self.end_index + 1
    }

    /// Number of member pairs.
    pub fn len(&self) -> usize {
        self.end_index + 1 - self.start_index
    }

    /// Always `false`: blocks have at least one member.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Seconds from the start of the scene.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Seconds; taken from the anchor's runtime.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Start time plus duration.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Start time in milliseconds.
    pub fn start_time_ms(&self) -> u64 {
        secs_to_ms(self.start_time)
    }

    /// End time in milliseconds.
    pub fn end_time_ms(&self) -> u64 {
        secs_to_ms(self.end_time())
    }

    /// Instant blocks do not advance the clock.
    pub fn is_instant(&self) -> bool {
        self.duration == 0.0
    }

    /// Entry point shared by every member.
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// Label of the operation that produced the anchor, or the anchor's action name.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Color if any member has a color slot; runtime if the anchor's runtime is editable.
    pub fn customizable_properties(&self) -> Customizations {
        self.customizable
    }
}

/// Split `pairs` into contiguous merge groups.
///
/// A pair joins the open group only if its current action merges with the previous one
/// and uses the anchor's entry point.
pub fn group_ranges(pairs: &[ActionPair]) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < pairs.len() {
        let anchor_entry = pairs[start].current_action().entry();
        let mut end = start + 1;
        while let Some(next) = pairs.get(end) {
            let action = next.current_action();
            if !(action.merges_with_previous() && action.entry() == anchor_entry) {
                break;
            }
            end += 1;
        }
        out.push(start..end);
        start = end;
    }
    out
}

/// Group pairs into blocks with start times and durations.
///
/// Pure: does not touch the pairs' block references.
pub fn build_blocks(
    pairs: &[ActionPair],
    descriptions: &HashMap<PairId, String>,
    default_runtime: f64,
) -> Vec<AnimationBlock> {
    let mut clock = 0.0;
    group_ranges(pairs)
        .into_iter()
        .enumerate()
        .map(|(index, range)| {
            let members = &pairs[range.clone()];
            let anchor = &members[0];
            let duration = anchor.resolve_runtime(default_runtime);
            let start_time = clock;
            clock += duration;

            let description = descriptions
                .get(&anchor.id())
                .cloned()
                .unwrap_or_else(|| anchor.current_action().name().to_string());
            let customizable = Customizations {
                color: members.iter().any(ActionPair::can_set_color),
                runtime: anchor.animated().runtime_tunable() || anchor.has_static_fallback(),
            };

            AnimationBlock {
                index,
                start_index: range.start,
                end_index: range.end - 1,
                start_time,
                duration,
                entry: anchor.current_action().entry(),
                description,
                customizable,
            }
        })
        .collect()
}

/// Record each pair's block membership.
pub(crate) fn link_pairs(pairs: &mut [ActionPair], blocks: &[AnimationBlock]) {
    for block in blocks {
        for idx in block.pair_range() {
            pairs[idx].block = Some(BlockRef {
                block: block.index,
                is_anchor: idx == block.start_index,
            });
        }
    }
}

/// Sum of block durations.
pub fn total_duration(blocks: &[AnimationBlock]) -> f64 {
    blocks.last().map_or(0.0, AnimationBlock::end_time)
}

/// The block on screen at `ms`. Instant blocks never match.
pub fn block_at_ms(blocks: &[AnimationBlock], ms: u64) -> Option<&AnimationBlock> {
    blocks
        .iter()
        .filter(|b| !b.is_instant())
        .find(|b| b.start_time_ms() <= ms && ms < b.end_time_ms())
}

/// Serializable row for a scrubber or timeline dump.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockSummary {
    /// Block index.
    pub index: usize,
    /// Start timestamp in milliseconds.
    pub start_ms: u64,
    /// End timestamp in milliseconds.
    pub end_ms: u64,
    /// Entry point of the anchor.
    pub entry: EntryPoint,
    /// Description of the anchor's operation.
    pub description: String,
    /// Sequence indices of the member pairs.
    pub pairs: Vec<usize>,
    /// Editable properties.
    pub customizable: Customizations,
}

impl From<&AnimationBlock> for BlockSummary {
    fn from(b: &AnimationBlock) -> Self {
        Self {
            index: b.index,
            start_ms: b.start_time_ms(),
            end_ms: b.end_time_ms(),
            entry: b.entry,
            description: b.description.clone(),
            pairs: b.pair_range().collect(),
            customizable: b.customizable,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/block.rs"]
mod tests;
