use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::net::{ConvergenceReport, Network, NodeId, RoundObserver, RoutingTable};

/// 可视化事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VizEventKind {
    /// 拓扑元信息（第一条事件）
    Meta {
        nodes: Vec<NodeId>,
        links: Vec<VizLinkInfo>,
    },
    /// 一轮结束后所有节点的路由表快照
    Round {
        /// 本轮是否有路由表发生变化
        changed: bool,
        tables: BTreeMap<NodeId, RoutingTable>,
    },
    /// 收敛完成
    Converged { rounds: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizLinkInfo {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: f64,
}

/// 一个可回放的事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizEvent {
    /// 轮次（从 0 开始）；元信息事件没有轮次
    pub round: Option<usize>,
    #[serde(flatten)]
    pub kind: VizEventKind,
}

/// 一个简单的事件收集器（存内存，运行结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct VizLogger {
    pub events: Vec<VizEvent>,
}

impl VizLogger {
    pub fn push(&mut self, ev: VizEvent) {
        self.events.push(ev);
    }

    /// 记录拓扑元信息
    pub fn emit_meta(&mut self, net: &Network) {
        let nodes = net.node_ids().cloned().collect();
        let links = net
            .links()
            .into_iter()
            .map(|(a, b, cost)| VizLinkInfo { a, b, cost })
            .collect();
        self.push(VizEvent {
            round: None,
            kind: VizEventKind::Meta { nodes, links },
        });
    }
}

impl RoundObserver for VizLogger {
    fn on_round(&mut self, round: usize, changed: bool, tables: &BTreeMap<NodeId, RoutingTable>) {
        self.push(VizEvent {
            round: Some(round),
            kind: VizEventKind::Round {
                changed,
                tables: tables.clone(),
            },
        });
    }

    fn on_converged(&mut self, report: &ConvergenceReport) {
        self.push(VizEvent {
            round: report.rounds.checked_sub(1),
            kind: VizEventKind::Converged {
                rounds: report.rounds,
            },
        });
    }
}
