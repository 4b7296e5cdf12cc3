use crate::net::{Cost, NodeId, RoutingEntry, RoutingTable};
use crate::topo::build_example;
use crate::viz::{VizEventKind, VizLogger, render_table, render_tables};

#[test]
fn render_table_matches_console_layout() {
    let mut rt = RoutingTable::new();
    rt.insert("B".into(), RoutingEntry::new(Cost::Finite(1.0), Some("B".into())));
    rt.insert("A".into(), RoutingEntry::new(Cost::ZERO, Some("A".into())));
    rt.insert("C".into(), RoutingEntry::unreached());

    let out = render_table(&NodeId::from("A"), &rt);
    assert_eq!(
        out,
        "Routing table for Node A:\n\
         Destination\tCost\tNext Hop\n\
         A\t\t0\tA\n\
         B\t\t1\tB\n\
         C\t\t∞\t-\n"
    );
}

#[test]
fn render_tables_separates_nodes_with_blank_line() {
    let net = build_example().unwrap();
    let out = render_tables(&net.routing_tables());
    assert_eq!(out.matches("Routing table for Node").count(), 4);
    assert!(out.contains("\n\nRouting table for Node B:"));
    assert!(out.ends_with("\n\n"));
}

#[test]
fn viz_logger_records_meta_rounds_and_convergence() {
    let mut net = build_example().unwrap();
    let mut viz = VizLogger::default();
    viz.emit_meta(&net);
    let report = net.run_convergence_with(&mut viz).unwrap();

    assert_eq!(viz.events.len(), report.rounds + 2);
    match &viz.events[0].kind {
        VizEventKind::Meta { nodes, links } => {
            assert_eq!(nodes.len(), 4);
            assert_eq!(links.len(), 5);
        }
        other => panic!("expected Meta event, got {other:?}"),
    }
    assert!(viz.events[0].round.is_none());

    for (i, ev) in viz.events[1..=report.rounds].iter().enumerate() {
        assert_eq!(ev.round, Some(i));
        match &ev.kind {
            // 只有最后一轮没有变化
            VizEventKind::Round { changed, .. } => assert_eq!(*changed, i + 1 < report.rounds),
            other => panic!("expected Round event, got {other:?}"),
        }
    }
    let last = viz.events.last().unwrap();
    assert!(matches!(last.kind, VizEventKind::Converged { rounds } if rounds == report.rounds));

    let json = serde_json::to_value(&viz.events).expect("serialize viz");
    assert_eq!(json[0]["kind"], "meta");
    assert_eq!(json[1]["kind"], "round");
    assert_eq!(json[1]["tables"]["A"]["A"]["cost"], 0.0);
    for i in 1..=report.rounds {
        assert_eq!(json[i]["changed"], i < report.rounds, "round event {i}");
    }
}
