//! 每轮观察回调
//!
//! 观察阶段只读：回调拿到的是本轮结束后各节点路由表的快照。

use std::collections::BTreeMap;

use super::id::NodeId;
use super::network::ConvergenceReport;
use super::routing::RoutingTable;

/// 收敛过程的观察者（展示、记录等）
pub trait RoundObserver {
    /// 每轮松弛结束后调用一次，`round` 从 0 开始；
    /// `changed` 为本轮是否有任何节点的路由表发生变化（最后一轮为 `false`）
    fn on_round(&mut self, round: usize, changed: bool, tables: &BTreeMap<NodeId, RoutingTable>);

    /// 收敛后调用一次
    fn on_converged(&mut self, _report: &ConvergenceReport) {}
}

impl<F> RoundObserver for F
where
    F: FnMut(usize, bool, &BTreeMap<NodeId, RoutingTable>),
{
    fn on_round(&mut self, round: usize, changed: bool, tables: &BTreeMap<NodeId, RoutingTable>) {
        self(round, changed, tables)
    }
}
