use crate::refs::RefType;
use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a TrueType font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// A résumé or configuration file could not be decoded
    Json(#[from] serde_json::Error),

    #[error("page {0} is listed in the page order but missing from the document")]
    PageMissing(usize),

    #[error("no PDF object was allocated for {0:?}")]
    UnresolvedReference(RefType),

    #[error("margins leave {width}pt for text; the content area must be wider than 0")]
    NoContentWidth { width: Pt },
}
