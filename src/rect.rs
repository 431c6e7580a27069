use crate::units::*;

/// A rectangle, specified by its lower-left (`x1`, `y1`) and upper-right
/// (`x2`, `y2`) corners in page space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect::new(*r.x1, *r.y1, *r.x2, *r.y2)
    }
}
