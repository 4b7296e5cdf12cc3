use crate::net::{ConvergenceState, Cost, DvrError, Network, NodeId};

#[test]
fn add_link_creates_nodes_and_symmetric_neighbors() {
    let mut net = Network::new();
    net.add_link("A", "B", 3.0).unwrap();

    assert_eq!(net.len(), 2);
    let a = net.node(&"A".into()).expect("A exists");
    let b = net.node(&"B".into()).expect("B exists");
    assert_eq!(a.link_cost(&"B".into()), Some(3.0));
    assert_eq!(b.link_cost(&"A".into()), Some(3.0));
}

#[test]
fn nodes_keep_creation_order() {
    let mut net = Network::new();
    net.add_link("C", "A", 1.0).unwrap();
    net.add_link("A", "B", 1.0).unwrap();
    net.add_node("C").unwrap();

    let order: Vec<&str> = net.node_ids().map(NodeId::as_str).collect();
    assert_eq!(order, ["C", "A", "B"]);
}

#[test]
fn links_lists_each_undirected_link_once() {
    let mut net = Network::new();
    net.add_link("A", "B", 1.0).unwrap();
    net.add_link("B", "C", 2.0).unwrap();
    net.add_link("C", "A", 3.0).unwrap();

    let mut links: Vec<(String, String, f64)> = net
        .links()
        .into_iter()
        .map(|(a, b, c)| (a.0, b.0, c))
        .collect();
    links.sort_by(|x, y| (&x.0, &x.1).cmp(&(&y.0, &y.1)));
    assert_eq!(
        links,
        vec![
            ("A".to_string(), "B".to_string(), 1.0),
            ("A".to_string(), "C".to_string(), 3.0),
            ("B".to_string(), "C".to_string(), 2.0),
        ]
    );
}

#[test]
fn relinking_overwrites_cost_on_both_ends() {
    let mut net = Network::new();
    net.add_link("A", "B", 3.0).unwrap();
    net.add_link("B", "A", 8.0).unwrap();

    assert_eq!(net.node(&"A".into()).unwrap().link_cost(&"B".into()), Some(8.0));
    assert_eq!(net.node(&"B".into()).unwrap().link_cost(&"A".into()), Some(8.0));
    assert_eq!(net.links().len(), 1);
}

#[test]
fn invalid_links_are_rejected_without_side_effects() {
    let mut net = Network::new();
    assert!(matches!(
        net.add_link("A", "B", 0.0),
        Err(DvrError::InvalidLink { reason: "link cost must be positive", .. })
    ));
    assert!(matches!(
        net.add_link("A", "A", 1.0),
        Err(DvrError::InvalidLink { .. })
    ));
    assert!(net.is_empty());
}

#[test]
fn topology_is_frozen_after_initialization() {
    let mut net = Network::new();
    net.add_link("A", "B", 1.0).unwrap();
    net.initialize_routing_tables();

    assert!(matches!(
        net.add_link("B", "C", 1.0),
        Err(DvrError::InvalidLink { .. })
    ));
    assert!(matches!(net.add_node("C"), Err(DvrError::InvalidLink { .. })));
    // 已存在的节点仍然是幂等的
    net.add_node("A").unwrap();
    assert_eq!(net.len(), 2);
}

#[test]
fn initialization_runs_once() {
    let mut net = Network::new();
    net.add_link("A", "B", 2.0).unwrap();
    net.add_node("C").unwrap();
    net.initialize_routing_tables();
    net.initialize_routing_tables();

    let a = net.node(&"A".into()).unwrap().table();
    assert_eq!(a.len(), 3);
    assert_eq!(a.cost_to(&"A".into()), Cost::ZERO);
    assert_eq!(a.cost_to(&"B".into()), Cost::Finite(2.0));
    assert_eq!(a.cost_to(&"C".into()), Cost::Infinite);
}

#[test]
fn state_moves_to_converged() {
    let mut net = Network::new();
    net.add_link("A", "B", 1.0).unwrap();
    assert_eq!(net.state(), ConvergenceState::Converging);

    let report = net.run_convergence().expect("converges");
    assert_eq!(report.state, ConvergenceState::Converged);
    assert_eq!(net.state(), ConvergenceState::Converged);
    // 两个节点初始化后即为最终状态，第一轮就无变化
    assert_eq!(report.rounds, 1);
}

#[test]
fn empty_network_converges_immediately() {
    let mut net = Network::new();
    let report = net.run_convergence().expect("converges");
    assert_eq!(report.rounds, 1);
    assert!(net.routing_tables().is_empty());
}
