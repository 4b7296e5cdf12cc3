//! 网络拓扑与收敛过程
//!
//! `Network` 持有全部节点与对称链路，按同步轮次驱动距离向量交换：
//! 1. 导出阶段：所有节点先各自导出一份路由表快照；
//! 2. 松弛阶段：每个节点用邻居的快照做松弛，汇总“是否有变化”；
//! 3. 观察阶段：把本轮结果交给观察者（不影响状态）。
//!
//! 导出全部完成后才开始松弛，因此任何节点都看不到其他节点的轮内中间状态。

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::cost::link_cost_error;
use super::error::DvrError;
use super::id::NodeId;
use super::node::Node;
use super::observer::RoundObserver;
use super::routing::RoutingTable;
use tracing::{debug, info, trace, warn};

/// 收敛状态机
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceState {
    #[default]
    Converging,
    Converged,
}

/// 一次收敛运行的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// 实际执行的轮数（包含最后一轮“无变化”）
    pub rounds: usize,
    pub state: ConvergenceState,
}

/// 距离向量路由网络
#[derive(Debug, Default)]
pub struct Network {
    /// 按创建顺序保存
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    /// 路由表初始化之后拓扑即冻结
    initialized: bool,
    state: ConvergenceState,
    max_rounds: Option<NonZeroUsize>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置安全轮数上限，执行满 `cap` 轮仍有变化即返回 `NonConvergence`。
    ///
    /// 上限至少为 1：即使空网络也要跑一轮才能确认收敛。
    pub fn with_max_rounds(mut self, cap: Option<NonZeroUsize>) -> Self {
        self.max_rounds = cap;
        self
    }

    pub fn set_max_rounds(&mut self, cap: Option<NonZeroUsize>) {
        self.max_rounds = cap;
    }

    pub fn state(&self) -> ConvergenceState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(Node::id)
    }

    /// 所有无向链路，每条只出现一次（按节点创建顺序）
    pub fn links(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut out = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            for n in node.neighbors() {
                if self.index.get(&n.id).is_some_and(|&j| j > i) {
                    out.push((node.id().clone(), n.id.clone(), n.cost));
                }
            }
        }
        out
    }

    /// 添加节点（已存在则忽略）
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<(), DvrError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Ok(());
        }
        if self.initialized {
            return Err(DvrError::InvalidLink {
                a: id.clone(),
                b: id,
                cost: 0.0,
                reason: "topology is frozen after initialization",
            });
        }
        trace!(node = %id, "添加节点");
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node::new(id));
        Ok(())
    }

    /// 添加双向链路，两端不存在时自动创建节点。
    pub fn add_link(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        cost: f64,
    ) -> Result<(), DvrError> {
        let (a, b) = (a.into(), b.into());

        let reason = if self.initialized {
            Some("topology is frozen after initialization")
        } else if a == b {
            Some("self-loop")
        } else {
            link_cost_error(cost)
        };
        if let Some(reason) = reason {
            warn!(%a, %b, cost, reason, "拒绝链路");
            return Err(DvrError::InvalidLink { a, b, cost, reason });
        }

        self.add_node(a.clone())?;
        self.add_node(b.clone())?;
        let ia = self.index[&a];
        let ib = self.index[&b];
        self.nodes[ia].add_neighbor(b.clone(), cost)?;
        self.nodes[ib].add_neighbor(a.clone(), cost)?;
        debug!(%a, %b, cost, "链路已建立");
        Ok(())
    }

    /// 用全网节点集合初始化每个节点的路由表（只执行一次）。
    pub fn initialize_routing_tables(&mut self) {
        if self.initialized {
            return;
        }
        let ids: Vec<NodeId> = self.nodes.iter().map(|n| n.id().clone()).collect();
        for node in &mut self.nodes {
            node.initialize_routing_table(&ids);
        }
        self.initialized = true;
        info!(nodes = ids.len(), "路由表初始化完成");
    }

    /// 执行一轮同步交换，返回是否有任何节点的路由表发生变化。
    pub fn run_round(&mut self) -> Result<bool, DvrError> {
        self.initialize_routing_tables();

        // 导出阶段：先收齐所有快照
        let sent: Vec<RoutingTable> = self.nodes.iter().map(Node::export_table).collect();

        // 松弛阶段：每个节点各自返回是否变化，最后再汇总
        let index = &self.index;
        let mut updated = false;
        for node in &mut self.nodes {
            let neighbors: Vec<NodeId> =
                node.neighbors().iter().map(|n| n.id.clone()).collect();
            for neighbor in neighbors {
                let Some(&j) = index.get(&neighbor) else {
                    return Err(DvrError::UnknownNeighbor {
                        node: node.id().clone(),
                        neighbor,
                    });
                };
                if node.relax(&neighbor, &sent[j])? {
                    updated = true;
                }
            }
        }
        Ok(updated)
    }

    /// 运行直到收敛（不观察中间过程）。
    pub fn run_convergence(&mut self) -> Result<ConvergenceReport, DvrError> {
        self.run_convergence_with(
            &mut |_: usize, _: bool, _: &BTreeMap<NodeId, RoutingTable>| {},
        )
    }

    /// 运行直到某一轮所有节点都没有变化，每轮结束后通知 `observer`。
    #[tracing::instrument(skip(self, observer), fields(nodes = self.nodes.len(), max_rounds = ?self.max_rounds))]
    pub fn run_convergence_with(
        &mut self,
        observer: &mut dyn RoundObserver,
    ) -> Result<ConvergenceReport, DvrError> {
        info!("▶️  开始距离向量收敛");
        self.initialize_routing_tables();
        self.state = ConvergenceState::Converging;

        let mut round = 0;
        loop {
            if let Some(cap) = self.max_rounds.map(NonZeroUsize::get) {
                if round >= cap {
                    warn!(rounds = round, cap, "超过轮数上限仍未收敛");
                    return Err(DvrError::NonConvergence { rounds: round, cap });
                }
            }

            let updated = self.run_round()?;
            debug!(round, updated, "本轮结束");
            observer.on_round(round, updated, &self.routing_tables());

            if !updated {
                self.state = ConvergenceState::Converged;
                let report = ConvergenceReport {
                    rounds: round + 1,
                    state: self.state,
                };
                info!(rounds = report.rounds, "✅ 已收敛");
                observer.on_converged(&report);
                return Ok(report);
            }
            round += 1;
        }
    }

    /// 各节点当前路由表的副本
    pub fn routing_tables(&self) -> BTreeMap<NodeId, RoutingTable> {
        self.nodes
            .iter()
            .map(|n| (n.id().clone(), n.export_table()))
            .collect()
    }
}
