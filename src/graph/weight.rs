//! Numeric edge weights.

use core::fmt::{Debug, Display};

use num_traits::Num;

/// Numeric type usable as an edge weight.
///
/// Any ordered integer or floating point type qualifies through the blanket
/// implementation; `Weight::one()` (from [`Num`]) is the unit weight used when
/// a format carries no weights of its own.
pub trait Weight: Num + PartialOrd + Copy + Display + Debug {}

impl<W> Weight for W where W: Num + PartialOrd + Copy + Display + Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit<W: Weight>() -> W {
        W::one()
    }

    #[test]
    fn integers_and_floats_are_weights() {
        assert_eq!(unit::<i32>(), 1);
        assert_eq!(unit::<u8>(), 1);
        assert!((unit::<f64>() - 1.0).abs() < f64::EPSILON);
    }
}
