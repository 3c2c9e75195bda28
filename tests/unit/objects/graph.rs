use super::*;
use crate::{foundation::config::SceneConfig, scene::pipeline::Scene};

fn scene() -> Scene {
    Scene::new(SceneConfig {
        trailing_wait: false,
        ..SceneConfig::default()
    })
    .unwrap()
}

#[test]
fn link_records_once_per_edge() {
    let mut s = scene();
    s.construct(|rec| {
        let mut g = GraphView::new();
        let a = g.add_node(rec, "a", Point::new(0.0, 0.0));
        let b = g.add_node(rec, "b", Point::new(100.0, 0.0));
        g.link(rec, a, b, None)?;
        g.link(rec, b, a, None)?;
        assert_eq!(g.edges(), &[(a, b)]);
        assert!(g.link(rec, a, 7, None).is_err());
        Ok(())
    })
    .unwrap();
    assert_eq!(s.action_pairs().len(), 1);
    assert_eq!(
        s.forest()
            .find_action_pairs_by_value("link", &DomainValue::from("b"))
            .len(),
        1
    );
}

#[test]
fn unlink_and_visit() {
    let mut s = scene();
    s.construct(|rec| {
        let mut g = GraphView::new().with_edge_color(Rgba8::GREEN);
        let a = g.add_node(rec, "a", Point::new(0.0, 0.0));
        let b = g.add_node(rec, "b", Point::new(50.0, 50.0));
        g.link(rec, a, b, None)?;
        g.visit(rec, a, Rgba8::RED, None)?;
        g.unlink(rec, a, b, None)?;
        g.unlink(rec, a, b, None)?;
        assert!(g.edges().is_empty());
        Ok(())
    })
    .unwrap();

    let pairs = s.action_pairs();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].color(), Some(Rgba8::GREEN));
    assert_eq!(pairs[1].color(), Some(Rgba8::RED));
    assert_eq!(pairs[2].name(), "disconnect");
}

#[test]
fn show_brings_in_nodes_then_edges() {
    let mut s = scene();
    s.construct(|rec| {
        let mut g = GraphView::new();
        let a = g.add_node(rec, "a", Point::new(0.0, 0.0));
        let b = g.add_node(rec, "b", Point::new(1.0, 0.0));
        let c = g.add_node(rec, "c", Point::new(2.0, 0.0));
        g.link(rec, a, b, None)?;
        g.link(rec, b, c, None)?;
        g.show(rec, None);
        g.highlight(rec, Rgba8::YELLOW, None);
        g.unhighlight(rec, None);
        g.hide(rec, None);
        Ok(())
    })
    .unwrap();

    let show = s.forest().find_by_name_and_occurrence("show", 1).unwrap();
    let labels: Vec<&str> = show.children().iter().map(|l| l.label()).collect();
    assert_eq!(labels, vec!["show", "show", "show", "edge", "edge"]);

    s.execute(&mut crate::timeline::engine::TraceEngine::new())
        .unwrap();
    // links(2), nodes, edges, highlight, unhighlight, hide
    assert_eq!(s.blocks().len(), 7);
    assert_eq!(s.blocks()[3].description(), "show #1 (edge)");
}
