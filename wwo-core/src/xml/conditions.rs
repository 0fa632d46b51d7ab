use std::io::BufRead;

use super::cursor::XmlCursor;
use super::error::DecodeError;
use crate::model::Conditions;

const LANGUAGE_PREFIX: &str = "lang_";

/// Read `tag` into `conditions` if it is one of the readings shared by
/// `current_condition` and `hourly`. Returns `false`, without touching the
/// cursor, for any other tag.
///
/// Current conditions spell temperature `temp_C` while hourly forecasts use
/// `tempC`; both land in the same field.
pub(super) fn read_condition<R: BufRead>(
    cursor: &mut XmlCursor<R>,
    tag: &str,
    conditions: &mut Conditions,
) -> Result<bool, DecodeError> {
    match tag {
        "temp_C" | "tempC" => conditions.temp_c = cursor.read_int(tag)?,
        "temp_F" | "tempF" => conditions.temp_f = cursor.read_int(tag)?,
        "FeelsLikeC" => conditions.feels_like_c = cursor.read_int(tag)?,
        "FeelsLikeF" => conditions.feels_like_f = cursor.read_int(tag)?,
        "weatherCode" => conditions.weather_code = cursor.read_int(tag)?,
        "weatherIconUrl" => conditions.weather_icon_url = read_trimmed(cursor, tag)?,
        "weatherDesc" => conditions.weather_desc = read_trimmed(cursor, tag)?,
        "windspeedMiles" => conditions.windspeed_miles = cursor.read_int(tag)?,
        "windspeedKmph" => conditions.windspeed_kmph = cursor.read_int(tag)?,
        "windspeedKnots" => conditions.windspeed_knots = cursor.read_int(tag)?,
        "windspeedMeterSec" => conditions.windspeed_meter_sec = cursor.read_int(tag)?,
        "winddirDegree" => conditions.winddir_degree = cursor.read_int(tag)?,
        "winddir16Point" => conditions.winddir_16point = read_trimmed(cursor, tag)?,
        "precipMM" => conditions.precip_mm = cursor.read_float(tag)?,
        "precipInches" => conditions.precip_inches = cursor.read_float(tag)?,
        "humidity" => conditions.humidity = cursor.read_int(tag)?,
        "visibility" => conditions.visibility = cursor.read_int(tag)?,
        "visibilityMiles" => conditions.visibility_miles = cursor.read_int(tag)?,
        "pressure" => conditions.pressure = cursor.read_int(tag)?,
        "pressureInches" => conditions.pressure_inches = cursor.read_int(tag)?,
        "cloudcover" => conditions.cloudcover = cursor.read_int(tag)?,
        "uvIndex" => conditions.uv_index = cursor.read_int(tag)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Language code of a localized description tag such as `lang_fr`.
///
/// Only consult this after every fixed tag name has failed to match.
pub(super) fn localized_language(tag: &str) -> Option<&str> {
    tag.strip_prefix(LANGUAGE_PREFIX)
        .filter(|code| !code.is_empty())
}

pub(super) fn read_trimmed<R: BufRead>(
    cursor: &mut XmlCursor<R>,
    tag: &str,
) -> Result<String, DecodeError> {
    Ok(cursor.read_text(tag)?.trim().to_string())
}
