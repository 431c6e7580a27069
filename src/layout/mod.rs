//! Text layout and pagination.
//!
//! A layout pass owns a [`LayoutContext`]: a cursor on the current page of a
//! [`Surface`](crate::surface::Surface). Drawing primitives wrap their text
//! with [`wrap_text`], check that each unit fits above the bottom margin,
//! start a new page when it doesn't, and move the cursor down.
//!
//! # Example
//!
//! ```
//! use cv_gen::layout::{draw_bullet, draw_divider, draw_title, LayoutContext, Style};
//! use cv_gen::surface::{HelveticaMetrics, Recorder, Weight};
//! use cv_gen::{colours, FontPair, Pt};
//!
//! let style = Style::default();
//! let fonts = FontPair { regular: Weight::Regular, bold: Weight::Bold };
//! let mut recorder = Recorder::new(HelveticaMetrics);
//!
//! let mut ctx = LayoutContext::new(&mut recorder, fonts, &style);
//! draw_title(&mut ctx, "SKILLS", Pt(14.0), colours::BLACK);
//! draw_bullet(&mut ctx, "Rust", style.bullet_indent, Pt(11.0));
//! draw_divider(&mut ctx);
//! assert_eq!(ctx.page_count(), 1);
//! drop(ctx);
//!
//! assert_eq!(recorder.texts(), vec!["SKILLS", "•", "Rust"]);
//! ```

mod context;
mod margins;
mod primitives;
mod style;
mod wrap;

pub use context::*;
pub use margins::*;
pub use primitives::*;
pub use style::*;
pub use wrap::*;
