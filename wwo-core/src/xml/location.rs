use std::io::BufRead;

use chrono::FixedOffset;

use super::conditions::read_trimmed;
use super::cursor::XmlCursor;
use super::error::DecodeError;
use super::time::offset_from_hours;
use crate::model::Location;

/// Decode a `nearest_area` (weather endpoint) or `result` (search endpoint)
/// element.
pub(super) fn decode_location<R: BufRead>(
    cursor: &mut XmlCursor<R>,
) -> Result<Location, DecodeError> {
    let mut location = Location::default();

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "areaName" => location.name = read_trimmed(cursor, &tag)?,
            "region" => location.region = read_trimmed(cursor, &tag)?,
            "country" => location.country = read_trimmed(cursor, &tag)?,
            "population" => {
                location.population = cursor.read_number(&tag, "unsigned integer")?;
            }
            "latitude" => location.latitude = cursor.read_float(&tag)?,
            "longitude" => location.longitude = cursor.read_float(&tag)?,
            "timezone" => location.timezone_offset = decode_timezone(cursor)?,
            _ => cursor.skip()?,
        }
    }

    Ok(location)
}

fn decode_timezone<R: BufRead>(
    cursor: &mut XmlCursor<R>,
) -> Result<Option<FixedOffset>, DecodeError> {
    let mut offset = None;

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "offset" => offset = Some(read_offset(cursor, &tag)?),
            _ => cursor.skip()?,
        }
    }

    Ok(offset)
}

/// Read an offset given in decimal hours (`1.0`, `-0.5`, `5.75`).
pub(super) fn read_offset<R: BufRead>(
    cursor: &mut XmlCursor<R>,
    tag: &str,
) -> Result<FixedOffset, DecodeError> {
    let position = cursor.open_position();
    let hours: f64 = cursor.read_number(tag, "decimal hours")?;
    offset_from_hours(hours)
        .map_err(|err| DecodeError::malformed_time(tag, &hours.to_string(), err, position))
}
