//! 环形拓扑构建

use crate::net::{DvrError, Network};

/// 环形拓扑配置选项
#[derive(Debug, Clone)]
pub struct RingOpts {
    pub nodes: usize,
    pub link_cost: f64,
    /// 节点名前缀，节点依次命名为 `{prefix}0`, `{prefix}1`, ...
    pub prefix: String,
}

impl Default for RingOpts {
    fn default() -> Self {
        Self {
            nodes: 6,
            link_cost: 1.0,
            prefix: "n".to_string(),
        }
    }
}

/// 构建环形拓扑：n0 <-> n1 <-> ... <-> n{k-1} <-> n0
///
/// 少于 3 个节点时退化为一条链（不添加重复链路）。
pub fn build_ring(opts: &RingOpts) -> Result<Network, DvrError> {
    let mut net = Network::new();
    let name = |i: usize| format!("{}{}", opts.prefix, i);

    if opts.nodes == 1 {
        net.add_node(name(0))?;
        return Ok(net);
    }
    for i in 0..opts.nodes.saturating_sub(1) {
        net.add_link(name(i), name(i + 1), opts.link_cost)?;
    }
    if opts.nodes >= 3 {
        net.add_link(name(opts.nodes - 1), name(0), opts.link_cost)?;
    }
    Ok(net)
}
