use std::io::BufRead;

use chrono::{DateTime, FixedOffset};

use super::conditions::{localized_language, read_condition, read_trimmed};
use super::cursor::XmlCursor;
use super::error::{DecodeError, Position};
use super::forecast::decode_daily;
use super::location::{decode_location, read_offset};
use super::time::{parse_clock_time, parse_local_time};
use super::{Decoded, decode_error};
use crate::model::{Current, Query, Report, WeatherData, WeatherReport};

/// Decode a weather endpoint payload.
///
/// Both document shapes are handled: a `data` root holding the report (or an
/// in-document `error` child), and the bare `error` root the provider sends
/// with non-200 statuses. Either way a provider error is `Ok(Report::Failure)`.
/// Any other root element is a [`DecodeError::StructuralMismatch`].
pub fn decode_weather<R: BufRead>(source: R) -> Result<Decoded<WeatherReport>, DecodeError> {
    let mut cursor = XmlCursor::new(source);
    let root = cursor.root()?;

    let report = match root.as_str() {
        "error" => Report::Failure(decode_error(&mut cursor)?),
        "data" => decode_data(&mut cursor)?,
        _ => {
            return Err(DecodeError::StructuralMismatch {
                expected: "<data> or <error>".to_string(),
                found: format!("<{root}>"),
                position: cursor.open_position(),
            });
        }
    };

    Ok(Decoded {
        report,
        skipped: cursor.into_skipped(),
    })
}

fn decode_data<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<WeatherReport, DecodeError> {
    let mut data = WeatherData::default();
    let mut offset: Option<FixedOffset> = None;

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "error" => return Ok(Report::Failure(decode_error(cursor)?)),
            "request" => data.query = Some(decode_query(cursor)?),
            "nearest_area" => data.location = Some(decode_location(cursor)?),
            "time_zone" => {
                let (local_time, utc_offset) = decode_time_zone(cursor)?;
                data.local_time = local_time;
                offset = utc_offset;
            }
            "current_condition" => {
                let (current, language) = decode_current(cursor)?;
                data.current = Some(current);
                if let Some(language) = language {
                    data.language = language;
                }
            }
            "weather" => {
                let day = decode_daily(
                    cursor,
                    data.local_time.as_ref(),
                    &mut data.hourly_forecasts,
                )?;
                data.daily_forecasts.push(day);
            }
            _ => cursor.skip()?,
        }
    }

    if let (Some(location), Some(offset)) = (data.location.as_mut(), offset) {
        location.timezone_offset.get_or_insert(offset);
    }

    Ok(Report::Success(data))
}

fn decode_query<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<Query, DecodeError> {
    let mut query = Query::default();

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "type" => query.kind = read_trimmed(cursor, &tag)?,
            "query" => query.text = read_trimmed(cursor, &tag)?,
            _ => cursor.skip()?,
        }
    }

    Ok(query)
}

/// Returns the local "now" and the offset it was given in.
///
/// `localtime` can only be placed once `utcOffset` is known, so the raw text
/// is held until the element ends.
fn decode_time_zone<R: BufRead>(
    cursor: &mut XmlCursor<R>,
) -> Result<(Option<DateTime<FixedOffset>>, Option<FixedOffset>), DecodeError> {
    let mut local: Option<(String, Position)> = None;
    let mut offset = None;

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "localtime" => {
                let position = cursor.open_position();
                local = Some((cursor.read_text(&tag)?, position));
            }
            "utcOffset" => offset = Some(read_offset(cursor, &tag)?),
            _ => cursor.skip()?,
        }
    }

    let local_time = match (local, offset) {
        (Some((raw, position)), Some(offset)) => Some(
            parse_local_time(&raw, offset)
                .map_err(|err| DecodeError::malformed_time("localtime", &raw, err, position))?,
        ),
        _ => None,
    };

    Ok((local_time, offset))
}

fn decode_current<R: BufRead>(
    cursor: &mut XmlCursor<R>,
) -> Result<(Current, Option<String>), DecodeError> {
    let mut current = Current::default();
    let mut localized: Option<(String, String)> = None;

    while let Some(tag) = cursor.next_child()? {
        if read_condition(cursor, &tag, &mut current.conditions)? {
            continue;
        }
        match tag.as_str() {
            "observation_time" => {
                current.observation_time = Some(cursor.read_time(&tag, parse_clock_time)?);
            }
            other => match localized_language(other) {
                Some(language) => {
                    let language = language.to_string();
                    localized = Some((language, read_trimmed(cursor, &tag)?));
                }
                None => cursor.skip()?,
            },
        }
    }

    let language = localized.map(|(language, description)| {
        current.conditions.weather_desc = description;
        language
    });

    Ok((current, language))
}
