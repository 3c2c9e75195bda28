use super::*;
use crate::action::directive::Directive;

#[test]
fn fresh_tags_get_per_name_occurrence_numbers() {
    let mut state = SceneState::default();
    let mut rec = Recorder::new(&mut state);
    for _ in 0..2 {
        rec.operation("swap", None, |rec, meta| {
            rec.record(meta, ActionPair::animate(Directive::Wait), []);
        });
    }
    rec.operation("compare", None, |rec, meta| {
        rec.record(meta, ActionPair::animate(Directive::Wait), []);
    });
    assert_eq!(rec.len(), 3);

    let seqs: Vec<(String, u32)> = state
        .forest
        .iter()
        .map(|m| (m.name().to_string(), m.sequence_id()))
        .collect();
    assert_eq!(
        seqs,
        vec![
            ("swap".to_string(), 1),
            ("swap".to_string(), 2),
            ("compare".to_string(), 1)
        ]
    );
}

#[test]
fn inherited_tags_are_not_registered_twice() {
    let mut state = SceneState::default();
    let mut rec = Recorder::new(&mut state);
    rec.operation("outer", None, |rec, outer| {
        rec.operation("inner", Some(outer), |rec, meta| {
            rec.record(meta, ActionPair::wait(None), []);
        });
    });
    assert_eq!(state.forest.len(), 1);
    assert_eq!(state.counters.current("inner"), 0);
    let outer = state.forest.find_by_name_and_occurrence("outer", 1).unwrap();
    assert_eq!(outer.children().len(), 1);
}

#[test]
fn nested_fresh_tags_register_on_exit() {
    let mut state = SceneState::default();
    let mut rec = Recorder::new(&mut state);
    rec.operation("outer", None, |rec, outer| {
        rec.record(outer, ActionPair::wait(None), []);
        rec.operation("inner", None, |rec, meta| {
            rec.record(meta, ActionPair::wait(None), []);
        });
    });
    let names: Vec<&str> = state.forest.iter().map(Metadata::name).collect();
    assert_eq!(names, vec!["inner", "outer"]);
}

#[test]
fn pin_and_wait_helpers() {
    let mut state = SceneState::default();
    let mut rec = Recorder::new(&mut state);
    let pin = rec.pin("mark");
    let wait = rec.wait(Some(2.0), None);
    let a = rec.new_object();
    let b = rec.new_object();
    assert_ne!(a, b);

    assert_eq!(state.index_of(pin), Some(0));
    assert_eq!(state.index_of(wait), Some(1));
    assert!(state.pairs[0].current_action().run().is_empty());
    assert_eq!(state.pairs[0].resolve_runtime(1.0), 0.0);
    assert_eq!(state.pairs[1].runtime(), Some(2.0));
    assert_eq!(
        state.forest.find_by_name_and_occurrence("mark", 1).unwrap().first_pair(),
        Some(pin)
    );
}
