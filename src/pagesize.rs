//! Paper sizes a résumé can be laid out on.
//!
//! Sizes are portrait (width, height) in points. [`A4`] follows the common
//! 595 × 842 rounding used by most PDF producers rather than the exact
//! millimetre conversion, so documents line up with other A4 output.

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const A4: PageSize = (Pt(595.0), Pt(842.0));
pub const A5: PageSize = (Mm(148.0).to_pt(), Mm(210.0).to_pt());
pub const LETTER: PageSize = (In(8.5).to_pt(), In(11.0).to_pt());
pub const LEGAL: PageSize = (In(8.5).to_pt(), In(14.0).to_pt());

/// Paper choice as it appears in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paper {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    /// Any other portrait size, in points
    Custom { width: Pt, height: Pt },
}

impl Paper {
    pub fn size(&self) -> PageSize {
        match *self {
            Paper::A4 => A4,
            Paper::A5 => A5,
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
            Paper::Custom { width, height } => (width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_names_deserialize() {
        let paper: Paper = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(paper.size(), LETTER);

        let paper: Paper =
            serde_json::from_str(r#"{"custom": {"width": 300, "height": 200}}"#).unwrap();
        assert_eq!(paper.size(), (Pt(300.0), Pt(200.0)));
    }

    #[test]
    fn imperial_and_metric_sizes() {
        assert_eq!(LETTER, (Pt(612.0), Pt(792.0)));
        assert_eq!(LEGAL.1, Pt(1008.0));
        assert!((A5.0 .0 - 419.53).abs() < 0.01);
        assert!((A5.1 .0 - 595.28).abs() < 0.01);
    }
}
