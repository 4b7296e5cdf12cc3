//! 错误类型
//!
//! 三类错误都是本地不变量被破坏，不做重试，直接返回给调用方。

use super::id::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum DvrError {
    /// 链路代价非法、自环，或拓扑已冻结后仍尝试修改
    #[error("invalid link {a} <-> {b} (cost {cost}): {reason}")]
    InvalidLink {
        a: NodeId,
        b: NodeId,
        cost: f64,
        reason: &'static str,
    },
    /// 用非邻居的表做松弛（集成错误）
    #[error("node {node} has no neighbor {neighbor}")]
    UnknownNeighbor { node: NodeId, neighbor: NodeId },
    /// 超过安全轮数上限仍未收敛
    #[error("no convergence after {rounds} rounds (cap {cap})")]
    NonConvergence { rounds: usize, cap: usize },
}
