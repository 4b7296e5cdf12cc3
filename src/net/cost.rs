//! 路径代价
//!
//! 代价要么是有限的非负实数，要么是无穷大（不可达）。
//! 有限值在进入路由表之前已校验（非 NaN、非负），
//! 因此可以给出全序：任意有限值都小于 `Infinite`。

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// 路由表中记录的代价
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum Cost {
    Finite(f64),
    #[default]
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0.0);

    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// 有限值返回 `Some`，无穷大返回 `None`
    pub fn value(self) -> Option<f64> {
        match self {
            Cost::Finite(v) => Some(v),
            Cost::Infinite => None,
        }
    }

    /// `∞ + x = ∞`；有限值相加溢出同样视为无穷大。
    pub fn saturating_add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => {
                let sum = a + b;
                if sum.is_finite() {
                    Cost::Finite(sum)
                } else {
                    Cost::Infinite
                }
            }
            _ => Cost::Infinite,
        }
    }
}

/// 链路代价必须是有限正数；不合法时返回原因
pub(crate) fn link_cost_error(cost: f64) -> Option<&'static str> {
    if cost.is_nan() || cost <= 0.0 {
        Some("link cost must be positive")
    } else if cost.is_infinite() {
        Some("link cost must be finite")
    } else {
        None
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.total_cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Ordering::Less,
            (Cost::Infinite, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Infinite, Cost::Infinite) => Ordering::Equal,
        }
    }
}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().map(f64::to_bits).hash(state);
    }
}

impl From<f64> for Cost {
    fn from(v: f64) -> Self {
        if v.is_infinite() {
            Cost::Infinite
        } else {
            // -0.0 归一为 0.0
            Cost::Finite(v + 0.0)
        }
    }
}

impl TryFrom<Option<f64>> for Cost {
    type Error = String;

    fn try_from(v: Option<f64>) -> Result<Self, Self::Error> {
        match v {
            None => Ok(Cost::Infinite),
            Some(c) if c.is_nan() || c < 0.0 => Err(format!("invalid cost: {c}")),
            Some(c) => Ok(Cost::from(c)),
        }
    }
}

impl From<Cost> for Option<f64> {
    fn from(c: Cost) -> Self {
        c.value()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Infinite => f.write_str("∞"),
        }
    }
}
