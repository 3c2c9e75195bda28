use super::*;
use crate::{
    action::{directive::Directive, scene_action::EntryPoint},
    foundation::config::SceneConfig,
    scene::pipeline::Scene,
    timeline::engine::TraceEngine,
};

fn constructed(values: &[i64], body: impl FnOnce(&mut Recorder<'_>, &mut ArrayView)) -> Scene {
    let mut scene = Scene::new(SceneConfig {
        trailing_wait: false,
        ..SceneConfig::default()
    })
    .unwrap();
    scene
        .construct(|rec| {
            let mut arr = ArrayView::new(rec, values);
            body(rec, &mut arr);
            Ok(())
        })
        .unwrap();
    scene
}

#[test]
fn show_records_one_merged_pair_per_cell() {
    let mut scene = constructed(&[4, 2, 9], |rec, arr| arr.show(rec, None));
    let pairs = scene.action_pairs();
    assert_eq!(pairs.len(), 3);
    assert!(!pairs[0].animated().merges_with_previous());
    assert!(pairs[1].animated().merges_with_previous());
    assert_eq!(scene.forest().find_by_name("show").len(), 1);

    scene.execute(&mut TraceEngine::new()).unwrap();
    assert_eq!(scene.blocks().len(), 1);
}

#[test]
fn compare_returns_ordering_and_tags_both_values() {
    let mut ordering = None;
    let scene = constructed(&[5, 3], |rec, arr| {
        ordering = Some(arr.compare(rec, 0, 1, None).unwrap());
    });
    assert_eq!(ordering, Some(Ordering::Greater));

    let meta = scene
        .forest()
        .find_by_name_and_occurrence("compare", 1)
        .unwrap();
    assert_eq!(meta.children().len(), 4);
    assert_eq!(meta.children()[0].label(), "highlight");
    assert_eq!(meta.children()[2].label(), "restore");
    assert_eq!(
        meta.children()[0].values(),
        &[DomainValue::Int(5), DomainValue::Int(3)]
    );
}

#[test]
fn swap_moves_cells_in_one_block_and_updates_values() {
    let mut values = Vec::new();
    let mut scene = constructed(&[5, 3, 8], |rec, arr| {
        arr.swap(rec, 0, 1, None).unwrap();
        values = arr.values();
    });
    assert_eq!(values, vec![3, 5, 8]);

    let mut engine = TraceEngine::new();
    scene.execute(&mut engine).unwrap();
    assert_eq!(scene.blocks().len(), 1);
    assert_eq!(scene.blocks()[0].len(), 2);

    let call = &engine.calls()[0];
    assert_eq!(call.entry, EntryPoint::Play);
    assert_eq!(call.duration, Some(1.0));
    assert_eq!(
        call.directives,
        vec![
            Directive::MoveTo {
                object: ObjectId(0),
                to: Point::new(60.0, 0.0)
            },
            Directive::MoveTo {
                object: ObjectId(1),
                to: Point::new(0.0, 0.0)
            },
        ]
    );
}

#[test]
fn swapping_a_cell_with_itself_records_nothing() {
    let scene = constructed(&[1, 2], |rec, arr| arr.swap(rec, 1, 1, None).unwrap());
    assert!(scene.action_pairs().is_empty());
    assert!(scene.forest().is_empty());
}

#[test]
fn out_of_range_cells_are_rejected() {
    let scene = constructed(&[1, 2], |rec, arr| {
        assert!(arr.compare(rec, 0, 2, None).is_err());
        assert!(arr.swap(rec, 5, 0, None).is_err());
        assert!(arr.set_value(rec, 2, 0, None).is_err());
        assert!(arr.value(9).is_err());
    });
    assert!(scene.action_pairs().is_empty());
}

#[test]
fn nested_operations_share_the_parent_tag() {
    let scene = constructed(&[2, 1], |rec, arr| {
        rec.operation("sort_step", None, |rec, meta| {
            if arr.compare(rec, 0, 1, Some(&mut *meta)).unwrap().is_gt() {
                arr.swap(rec, 0, 1, Some(meta)).unwrap();
            }
        });
    });
    let forest = scene.forest();
    assert_eq!(forest.len(), 1);
    assert!(forest.find_by_name("compare").is_empty());
    let step = forest.find_by_name_and_occurrence("sort_step", 1).unwrap();
    assert_eq!(step.children().len(), 6);
    assert_eq!(step.children()[4].label(), "sort_step");
}

#[test]
fn colorable_highlight_and_set_value() {
    let scene = constructed(&[7, 8], |rec, arr| {
        arr.highlight(rec, Rgba8::RED, None);
        arr.unhighlight(rec, None);
        arr.set_value(rec, 1, 42, None).unwrap();
        assert_eq!(arr.value(1).unwrap(), 42);
    });
    let pairs = scene.action_pairs();
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0].color(), Some(Rgba8::RED));
    assert_eq!(pairs[2].color(), Some(Rgba8::BLUE));
    assert_eq!(
        scene.forest().find_action_pairs_by_value("set_value", &DomainValue::Int(42)),
        vec![pairs[4].id()]
    );
}
