//! 链路列表拓扑（topology.json）

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::net::{DvrError, Network, NodeId};

/// 一条无向链路
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: NodeId,
    pub b: NodeId,
    /// 正数，可以是小数
    pub cost: f64,
}

/// 拓扑描述文件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologySpec {
    /// 额外的孤立节点（不出现在任何链路中）
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    pub links: Vec<LinkSpec>,
    /// 安全轮数上限（至少为 1）
    #[serde(default)]
    pub max_rounds: Option<NonZeroUsize>,
}

impl TopologySpec {
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<NodeId>,
    {
        Self {
            nodes: Vec::new(),
            links: links
                .into_iter()
                .map(|(a, b, cost)| LinkSpec {
                    a: a.into(),
                    b: b.into(),
                    cost,
                })
                .collect(),
            max_rounds: None,
        }
    }
}

/// 按链路顺序构建网络（节点按首次出现的顺序创建）
pub fn build_network(spec: &TopologySpec) -> Result<Network, DvrError> {
    let mut net = Network::new().with_max_rounds(spec.max_rounds);
    for link in &spec.links {
        net.add_link(link.a.clone(), link.b.clone(), link.cost)?;
    }
    for id in &spec.nodes {
        net.add_node(id.clone())?;
    }
    Ok(net)
}
