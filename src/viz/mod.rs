//! 路由表展示与事件记录
//!
//! - **文本**：按原样打印每个节点的路由表
//! - **JSON**：每轮一条事件，便于离线回放收敛过程

mod render;
mod types;

pub use render::{render_table, render_tables};
pub use types::{VizEvent, VizEventKind, VizLinkInfo, VizLogger};
