//! Error types for the menagerie lab.
//!
//! Almost nothing here can fail: there is no parsing, no file I/O, no
//! allocation the library checks. The two fallible edges are writing the
//! demonstration text to a caller-provided sink and encoding the layout
//! report as JSON.

use miette::Diagnostic;
use thiserror::Error;

pub type MenagerieResult<T> = Result<T, MenagerieError>;

#[derive(Debug, Error, Diagnostic)]
pub enum MenagerieError {
    #[error("failed to write demonstration output")]
    #[diagnostic(code(menagerie::io))]
    Io(#[from] std::io::Error),

    #[error("failed to encode layout report as JSON")]
    #[diagnostic(code(menagerie::json))]
    Json(#[from] serde_json::Error),
}
