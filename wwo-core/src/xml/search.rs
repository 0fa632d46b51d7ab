use std::io::BufRead;

use super::cursor::XmlCursor;
use super::error::DecodeError;
use super::location::decode_location;
use super::{Decoded, decode_error};
use crate::model::{Report, SearchReport, SearchResults};

/// Decode a location search payload: one [`Location`](crate::model::Location)
/// per `result` element.
pub fn decode_search<R: BufRead>(source: R) -> Result<Decoded<SearchReport>, DecodeError> {
    let mut cursor = XmlCursor::new(source);
    let root = cursor.root()?;

    let report = if root == "error" {
        Report::Failure(decode_error(&mut cursor)?)
    } else {
        decode_results(&mut cursor)?
    };

    Ok(Decoded {
        report,
        skipped: cursor.into_skipped(),
    })
}

fn decode_results<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<SearchReport, DecodeError> {
    let mut results = SearchResults::default();

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "error" => return Ok(Report::Failure(decode_error(cursor)?)),
            "result" => results.locations.push(decode_location(cursor)?),
            _ => cursor.skip()?,
        }
    }

    Ok(Report::Success(results))
}
