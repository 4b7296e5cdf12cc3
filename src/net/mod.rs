//! 距离向量路由核心
//!
//! 此模块包含路由表、节点、网络拓扑与收敛算法。

// 子模块声明
mod cost;
mod error;
mod id;
mod network;
mod node;
mod observer;
mod routing;

// 重新导出公共接口
pub use cost::Cost;
pub use error::DvrError;
pub use id::NodeId;
pub use network::{ConvergenceReport, ConvergenceState, Network};
pub use node::{Neighbor, Node};
pub use observer::RoundObserver;
pub use routing::{RoutingEntry, RoutingTable};
