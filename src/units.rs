//! Length units used throughout layout. Everything is stored in PDF points
//! (1/72 of an inch); [`In`] and [`Mm`] exist to make configuration readable.

use derive_more::{Add, AddAssign, Deref, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// A length in PDF points
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Deref,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

impl In {
    pub const fn to_pt(self) -> Pt {
        Pt(self.0 * 72.0)
    }
}

impl Mm {
    pub const fn to_pt(self) -> Pt {
        Pt(self.0 * 72.0 / 25.4)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        value.to_pt()
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        value.to_pt()
    }
}

impl Pt {
    /// Half of this length, used for gaps that are split around a rule
    pub fn half(self) -> Pt {
        Pt(self.0 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_inches_and_millimetres() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        let a4_width: Pt = Mm(210.0).into();
        assert!((a4_width.0 - 595.28).abs() < 0.01);
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let mut y = Pt(842.0) - Pt(50.0);
        y -= Pt(16.0) * 2.0;
        assert_eq!(y, Pt(760.0));
        assert_eq!(Pt(20.0).half(), Pt(10.0));
        let total: Pt = [Pt(1.0), Pt(2.5)].into_iter().sum();
        assert_eq!(total, Pt(3.5));
    }
}
