//! 路由表文本输出

use std::fmt::Write;

use crate::net::{NodeId, RoutingTable};

/// 渲染单个节点的路由表（目的节点按名字排序，`∞` 表示不可达，`-` 表示无下一跳）
pub fn render_table(id: &NodeId, table: &RoutingTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Routing table for Node {id}:");
    let _ = writeln!(out, "Destination\tCost\tNext Hop");
    for (dst, entry) in table {
        let next_hop = entry
            .next_hop
            .as_ref()
            .map_or_else(|| "-".to_string(), NodeId::to_string);
        let _ = writeln!(out, "{dst}\t\t{}\t{next_hop}", entry.cost);
    }
    out
}

/// 依次渲染多个节点的路由表，表与表之间空一行
pub fn render_tables<'a>(
    tables: impl IntoIterator<Item = (&'a NodeId, &'a RoutingTable)>,
) -> String {
    let mut out = String::new();
    for (id, table) in tables {
        out.push_str(&render_table(id, table));
        out.push('\n');
    }
    out
}
