//! Streaming decoders for the provider's XML payloads.
//!
//! [`decode_weather`] and [`decode_search`] read a document in a single pass
//! and return either the decoded payload or the provider's own error as a
//! [`Report`](crate::model::Report). Elements the decoders don't know about
//! are skipped and listed in [`Decoded::skipped`].

mod conditions;
mod cursor;
mod error;
mod forecast;
mod location;
mod search;
pub mod time;
mod weather;

#[cfg(test)]
pub(crate) mod fixtures;

use std::io::BufRead;

use serde::Serialize;

use crate::model::ErrorInfo;

pub use cursor::XmlCursor;
pub use error::{DecodeError, Position};
pub use search::decode_search;
pub use weather::decode_weather;

/// Kind given to errors that don't name one themselves.
pub const DEFAULT_ERROR_KIND: &str = "APIError";

/// A decoded report plus the paths of every element that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoded<T> {
    pub report: T,
    pub skipped: Vec<String>,
}

/// Decode an `error` element, either the document root or a child of `data`.
fn decode_error<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<ErrorInfo, DecodeError> {
    let mut error = ErrorInfo {
        kind: DEFAULT_ERROR_KIND.to_string(),
        message: String::new(),
    };

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "msg" | "message" => error.message = cursor.read_text(&tag)?.trim().to_string(),
            "type" => error.kind = cursor.read_text(&tag)?.trim().to_string(),
            _ => cursor.skip()?,
        }
    }

    Ok(error)
}
