//! 拓扑构建
//!
//! 从链路列表（JSON）或内置生成器构建 `Network`。

pub mod example;
pub mod links;
pub mod ring;

pub use example::build_example;
pub use links::{LinkSpec, TopologySpec, build_network};
pub use ring::{RingOpts, build_ring};
