use super::*;
use crate::{
    action::{directive::Directive, scene_action::SceneAction, transform::Transform},
    foundation::core::{ObjectId, Rgba8},
};

fn recolor(id: u32) -> Directive {
    Directive::Recolor {
        object: ObjectId(id),
        color: Rgba8::YELLOW,
    }
}

fn numbered(mut pairs: Vec<ActionPair>) -> Vec<ActionPair> {
    for (i, p) in pairs.iter_mut().enumerate() {
        p.id = PairId(i as u64);
        p.sequence_index = i;
    }
    pairs
}

#[test]
fn mergeable_pair_joins_its_predecessor() {
    let pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
        ActionPair::animate(recolor(2)),
    ]);
    assert_eq!(group_ranges(&pairs), vec![0..2, 2..3]);
}

#[test]
fn merge_requires_matching_entry_point() {
    let pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::new(SceneAction::apply(Transform::emit(recolor(1))).merged()),
        ActionPair::new(SceneAction::apply(Transform::emit(recolor(2))).merged()),
    ]);
    assert_eq!(group_ranges(&pairs), vec![0..1, 1..3]);
}

#[test]
fn skipping_the_anchor_breaks_an_animated_merge() {
    let mut pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
    ]);
    pairs[0].skip();
    // Anchor now applies instantly, the follower still plays: different entry points.
    assert_eq!(group_ranges(&pairs), vec![0..1, 1..2]);

    pairs[1].skip();
    assert_eq!(group_ranges(&pairs), vec![0..2]);
}

#[test]
fn leading_mergeable_pair_still_opens_a_block() {
    let pairs = numbered(vec![
        ActionPair::animate_merged(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
    ]);
    assert_eq!(group_ranges(&pairs), vec![0..2]);
    assert!(group_ranges(&[]).is_empty());
}

#[test]
fn timing_accumulates_anchor_runtimes() {
    let mut pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
        ActionPair::animate(recolor(2)),
        ActionPair::animate(recolor(3)),
        ActionPair::wait(Some(0.5)),
    ]);
    pairs[2].skip();
    // A runtime on a non-anchor member is ignored by timing.
    pairs[1].set_runtime(9.0);

    let blocks = build_blocks(&pairs, &HashMap::new(), 1.0);
    let spans: Vec<(f64, f64)> = blocks
        .iter()
        .map(|b| (b.start_time(), b.duration()))
        .collect();
    assert_eq!(spans, vec![(0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.5)]);
    assert_eq!(total_duration(&blocks), 2.5);
    assert!(blocks[1].is_instant());
    assert_eq!(blocks[1].entry(), EntryPoint::Apply);
    assert_eq!(blocks[3].end_time_ms(), 2500);
}

#[test]
fn durations_sum_to_the_clock_without_gaps() {
    let mut pairs = numbered(
        (0..8)
            .map(|i| {
                if i % 3 == 1 {
                    ActionPair::animate_merged(recolor(i))
                } else {
                    ActionPair::animate(recolor(i))
                }
            })
            .collect(),
    );
    pairs[3].skip();
    pairs[6].fast_forward(4.0);

    let blocks = build_blocks(&pairs, &HashMap::new(), 1.0);
    let sum: f64 = blocks.iter().map(AnimationBlock::duration).sum();
    assert_eq!(sum, total_duration(&blocks));
    for w in blocks.windows(2) {
        assert_eq!(w[0].end_time(), w[1].start_time());
        assert_eq!(w[0].end_index() + 1, w[1].start_index());
    }
    assert_eq!(blocks.first().unwrap().start_index(), 0);
    assert_eq!(blocks.last().unwrap().end_index(), pairs.len() - 1);
}

#[test]
fn grouping_is_idempotent() {
    let pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
        ActionPair::wait(None),
    ]);
    let a = build_blocks(&pairs, &HashMap::new(), 1.0);
    let b = build_blocks(&pairs, &HashMap::new(), 1.0);
    assert_eq!(a, b);
}

#[test]
fn descriptions_prefer_tags_over_action_names() {
    let pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::caption("done", Rgba8::WHITE),
    ]);
    let mut descriptions = HashMap::new();
    descriptions.insert(PairId(0), "compare #1".to_string());
    let blocks = build_blocks(&pairs, &descriptions, 1.0);
    assert_eq!(blocks[0].description(), "compare #1");
    assert_eq!(blocks[1].description(), "caption");
}

#[test]
fn link_pairs_marks_anchors() {
    let mut pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate_merged(recolor(1)),
        ActionPair::animate(recolor(2)),
    ]);
    let blocks = build_blocks(&pairs, &HashMap::new(), 1.0);
    link_pairs(&mut pairs, &blocks);
    assert_eq!(
        pairs[1].block(),
        Some(BlockRef {
            block: 0,
            is_anchor: false
        })
    );
    assert!(pairs[2].block().unwrap().is_anchor);
    assert!(!pairs[1].customizations().runtime);
}

#[test]
fn block_lookup_by_timestamp_skips_instant_blocks() {
    let mut pairs = numbered(vec![
        ActionPair::animate(recolor(0)),
        ActionPair::animate(recolor(1)),
        ActionPair::animate(recolor(2)),
    ]);
    pairs[1].skip();
    let blocks = build_blocks(&pairs, &HashMap::new(), 1.0);
    assert_eq!(block_at_ms(&blocks, 0).map(AnimationBlock::index), Some(0));
    assert_eq!(block_at_ms(&blocks, 1000).map(AnimationBlock::index), Some(2));
    assert_eq!(block_at_ms(&blocks, 2000), None);

    let summary = BlockSummary::from(&blocks[2]);
    assert_eq!((summary.start_ms, summary.end_ms), (1000, 2000));
    assert_eq!(summary.pairs, vec![2]);
}
