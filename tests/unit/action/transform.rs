use super::*;
use crate::foundation::core::{ObjectId, Point};

fn show(id: u32) -> Directive {
    Directive::Show {
        object: ObjectId(id),
        color: Rgba8::WHITE,
        at: Point::new(0.0, 0.0),
    }
}

#[test]
fn emit_runs_to_the_fixed_directive() {
    let t = Transform::emit(show(1));
    assert_eq!(t.label(), "show");
    assert_eq!(t.run(), vec![show(1)]);
}

#[test]
fn color_slot_rewrites_every_colored_directive() {
    let mut t = Transform::batch(
        "pair",
        vec![
            show(1),
            Directive::Hide {
                object: ObjectId(2),
            },
            show(3),
        ],
    );
    assert!(t.can_set_color());
    assert_eq!(t.color(), Some(Rgba8::WHITE));

    assert!(t.set_color(Rgba8::RED));
    let out = t.run();
    assert_eq!(out[0].color(), Some(Rgba8::RED));
    assert_eq!(out[1].color(), None);
    assert_eq!(out[2].color(), Some(Rgba8::RED));
}

#[test]
fn set_color_without_slot_is_a_noop() {
    let mut t = Transform::emit(Directive::Wait);
    assert!(!t.can_set_color());
    assert!(!t.set_color(Rgba8::RED));
    assert_eq!(t.color(), None);
    assert_eq!(t.run(), vec![Directive::Wait]);

    let mut t = Transform::noop("pin");
    assert!(!t.set_color(Rgba8::RED));
    assert!(t.run().is_empty());
}

#[test]
fn deferred_builder_receives_the_customized_color() {
    let mut t = Transform::deferred("caption", Some(Rgba8::WHITE), |c| {
        vec![Directive::Caption {
            text: "hi".to_string(),
            color: c.unwrap_or(Rgba8::BLACK),
        }]
    });
    assert!(t.set_color(Rgba8::YELLOW));
    assert_eq!(t.run()[0].color(), Some(Rgba8::YELLOW));

    let mut colorless = Transform::deferred("flash", None, |_| vec![Directive::Wait]);
    assert!(!colorless.can_set_color());
    assert!(!colorless.set_color(Rgba8::YELLOW));
}
