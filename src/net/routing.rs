//! 距离向量路由表
//!
//! 每个节点独占一张 `RoutingTable`：目的节点 -> (代价, 下一跳)。
//! 节点之间只交换表的副本（`Clone` 即深拷贝），从不共享可变结构。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::id::NodeId;

/// 到某个目的节点的最佳已知代价与第一跳
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    pub cost: Cost,
    pub next_hop: Option<NodeId>,
}

impl RoutingEntry {
    pub fn new(cost: Cost, next_hop: Option<NodeId>) -> Self {
        Self { cost, next_hop }
    }

    /// 尚未到达：`(∞, none)`
    pub fn unreached() -> Self {
        Self {
            cost: Cost::Infinite,
            next_hop: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// 目的节点 -> 路由项（按目的节点排序）
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingTable {
    entries: BTreeMap<NodeId, RoutingEntry>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dst: &NodeId) -> Option<&RoutingEntry> {
        self.entries.get(dst)
    }

    /// 缺失的目的节点视为 `∞`
    pub fn cost_to(&self, dst: &NodeId) -> Cost {
        self.entries.get(dst).map_or(Cost::Infinite, |e| e.cost)
    }

    pub fn next_hop(&self, dst: &NodeId) -> Option<&NodeId> {
        self.entries.get(dst).and_then(|e| e.next_hop.as_ref())
    }

    pub fn contains(&self, dst: &NodeId) -> bool {
        self.entries.contains_key(dst)
    }

    /// 覆盖写入，返回旧值
    pub fn insert(&mut self, dst: NodeId, entry: RoutingEntry) -> Option<RoutingEntry> {
        self.entries.insert(dst, entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &RoutingEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = (&'a NodeId, &'a RoutingEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, NodeId, RoutingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
