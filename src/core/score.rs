use std::fmt::{Display, Formatter};
use std::ops::{Mul, Neg};

/// The value of a position as seen by the searching (maximizing) player.
///
/// Evaluations and backed-up values share this type, so weights can be applied
/// to either. Higher is better for the maximizer.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Utility(pub f64);

impl Utility {
    pub const NEG_INFINITY: Utility = Utility(f64::NEG_INFINITY);
    pub const INFINITY: Utility = Utility(f64::INFINITY);

    pub fn new(val: f64) -> Utility {
        Utility(val)
    }

    /// The larger of the two; `self` wins ties.
    pub fn max(self, other: Utility) -> Utility {
        if other > self { other } else { self }
    }

    /// The smaller of the two; `self` wins ties.
    pub fn min(self, other: Utility) -> Utility {
        if other < self { other } else { self }
    }
}

impl From<usize> for Utility {
    fn from(count: usize) -> Self {
        Utility(count as f64)
    }
}

impl Neg for Utility {
    type Output = Utility;

    fn neg(self) -> Self::Output {
        Utility(-self.0)
    }
}

// Scaling by a move weight
impl Mul<f64> for Utility {
    type Output = Utility;

    fn mul(self, rhs: f64) -> Self::Output {
        Utility(self.0 * rhs)
    }
}

impl Display for Utility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            x if x == f64::INFINITY => write!(f, "+inf"),
            x if x == f64::NEG_INFINITY => write!(f, "-inf"),
            x if x > 0.0 => write!(f, "+{}", x),
            x => write!(f, "{}", x),
        }
    }
}
