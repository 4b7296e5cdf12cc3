//! 路由节点
//!
//! 节点持有自己的邻居链路与路由表；路由表只由本节点修改，
//! 其他节点只能看到 `export_table` 导出的副本。

use super::cost::{Cost, link_cost_error};
use super::error::DvrError;
use super::id::NodeId;
use super::routing::{RoutingEntry, RoutingTable};
use tracing::{debug, trace};

/// 一条直连链路（从本节点看）
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    pub cost: f64,
}

/// 距离向量路由节点
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    /// 按加入顺序保存，决定同一轮内松弛的先后（影响等价路径的下一跳）
    neighbors: Vec<Neighbor>,
    table: RoutingTable,
}

impl Node {
    /// 创建新节点（无邻居、空路由表）
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            neighbors: Vec::new(),
            table: RoutingTable::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn link_cost(&self, neighbor: &NodeId) -> Option<f64> {
        self.neighbors
            .iter()
            .find(|n| &n.id == neighbor)
            .map(|n| n.cost)
    }

    /// 当前路由表（只读）
    pub fn table(&self) -> &RoutingTable {
        &self.table
    }

    /// 注册直连链路，并直接写入 `(cost, neighbor)`。
    ///
    /// 只在拓扑构建阶段调用，因此覆盖已有表项而不做比较；
    /// 重复添加同一邻居会更新其链路代价。
    pub fn add_neighbor(&mut self, neighbor: NodeId, cost: f64) -> Result<(), DvrError> {
        if let Some(reason) = link_cost_error(cost) {
            return Err(DvrError::InvalidLink {
                a: self.id.clone(),
                b: neighbor,
                cost,
                reason,
            });
        }
        if neighbor == self.id {
            return Err(DvrError::InvalidLink {
                a: self.id.clone(),
                b: neighbor,
                cost,
                reason: "self-loop",
            });
        }

        match self.neighbors.iter_mut().find(|n| n.id == neighbor) {
            Some(existing) => existing.cost = cost,
            None => self.neighbors.push(Neighbor {
                id: neighbor.clone(),
                cost,
            }),
        }
        trace!(node = %self.id, %neighbor, cost, "添加邻居");
        self.table.insert(
            neighbor.clone(),
            RoutingEntry::new(Cost::from(cost), Some(neighbor)),
        );
        Ok(())
    }

    /// 用全网节点集合初始化路由表。
    ///
    /// 非直连的节点记为 `(∞, none)`，自身强制为 `(0, self)`。
    /// 必须在所有邻居加入之后调用。
    pub fn initialize_routing_table<'a>(
        &mut self,
        all_nodes: impl IntoIterator<Item = &'a NodeId>,
    ) {
        for id in all_nodes {
            if id != &self.id && !self.table.contains(id) {
                self.table.insert(id.clone(), RoutingEntry::unreached());
            }
        }
        self.table.insert(
            self.id.clone(),
            RoutingEntry::new(Cost::ZERO, Some(self.id.clone())),
        );
        debug!(node = %self.id, entries = self.table.len(), "路由表已初始化");
    }

    /// 导出路由表的独立副本，之后对本表的修改不会影响它。
    pub fn export_table(&self) -> RoutingTable {
        self.table.clone()
    }

    /// Bellman-Ford 松弛：用邻居导出的表更新本节点路由表。
    ///
    /// 只有严格更小的代价才会替换表项；代价相等时保留原下一跳。
    /// 返回本次调用是否修改了任何表项。
    #[tracing::instrument(skip(self, neighbor, neighbor_table), fields(node = %self.id, neighbor = %neighbor))]
    pub fn relax(
        &mut self,
        neighbor: &NodeId,
        neighbor_table: &RoutingTable,
    ) -> Result<bool, DvrError> {
        let link = self
            .link_cost(neighbor)
            .ok_or_else(|| DvrError::UnknownNeighbor {
                node: self.id.clone(),
                neighbor: neighbor.clone(),
            })?;
        let link = Cost::from(link);

        let mut changed = false;
        for (dst, advertised) in neighbor_table {
            if dst == &self.id {
                continue;
            }
            let candidate = link.saturating_add(advertised.cost);
            let current = self.table.cost_to(dst);
            if candidate < current {
                trace!(%dst, old = %current, new = %candidate, "路由更新");
                self.table.insert(
                    dst.clone(),
                    RoutingEntry::new(candidate, Some(neighbor.clone())),
                );
                changed = true;
            }
        }

        if changed {
            debug!("路由表已更新");
        }
        Ok(changed)
    }
}
