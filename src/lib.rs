//! Lays résumé data out into paginated, ATS-friendly PDF documents.
//!
//! [`generate_pdf`] is the one-call entry point. Underneath it, a
//! [`Composer`] draws the résumé sections with the [`layout`] primitives
//! onto any [`surface::Surface`]; [`Document`] is the PDF one.

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

mod labels;
pub use labels::*;

/// Word wrapping, the page cursor and the drawing primitives
pub mod layout;

mod page;
pub use page::*;

/// Standard paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// The résumé data model and its text formatting rules
pub mod resume;
pub use resume::ResumeData;

pub mod surface;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
