//! 四节点示例拓扑
//!
//! ```text
//!     A --1-- B
//!     |     / |
//!     4   2   5
//!     | /     |
//!     C --1-- D
//! ```

use crate::net::{DvrError, Network};

/// 示例链路：`A-B:1, A-C:4, B-C:2, B-D:5, C-D:1`
pub const EXAMPLE_LINKS: [(&str, &str, f64); 5] = [
    ("A", "B", 1.0),
    ("A", "C", 4.0),
    ("B", "C", 2.0),
    ("B", "D", 5.0),
    ("C", "D", 1.0),
];

/// 构建示例拓扑
pub fn build_example() -> Result<Network, DvrError> {
    let mut net = Network::new();
    for (a, b, cost) in EXAMPLE_LINKS {
        net.add_link(a, b, cost)?;
    }
    Ok(net)
}
