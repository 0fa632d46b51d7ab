use std::io::BufRead;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use super::conditions::{localized_language, read_condition, read_trimmed};
use super::cursor::XmlCursor;
use super::error::DecodeError;
use super::time::{
    at_offset, parse_compact_time, parse_date, parse_optional_clock_time, utc_instant,
};
use crate::model::{AstroTime, Astronomy, DailyForecast, HourlyForecast};

/// Decode one `weather` element. Its `hourly` children are appended to
/// `hourly` rather than kept on the day.
///
/// `anchor` is the report's local "now"; only its offset is used, to turn the
/// day's astronomy times into instants.
pub(super) fn decode_daily<R: BufRead>(
    cursor: &mut XmlCursor<R>,
    anchor: Option<&DateTime<FixedOffset>>,
    hourly: &mut Vec<HourlyForecast>,
) -> Result<DailyForecast, DecodeError> {
    let mut day = DailyForecast::default();

    while let Some(tag) = cursor.next_child()? {
        match tag.as_str() {
            "date" => day.date = Some(cursor.read_time(&tag, parse_date)?),
            "astronomy" => day.astronomy = decode_astronomy(cursor)?,
            "maxtempC" => day.max_temp_c = cursor.read_int(&tag)?,
            "maxtempF" => day.max_temp_f = cursor.read_int(&tag)?,
            "mintempC" => day.min_temp_c = cursor.read_int(&tag)?,
            "mintempF" => day.min_temp_f = cursor.read_int(&tag)?,
            "uvIndex" => day.uv_index = cursor.read_int(&tag)?,
            "hourly" => {
                hourly.push(decode_hourly(cursor)?);
                day.hourly_count += 1;
            }
            _ => cursor.skip()?,
        }
    }

    if let (Some(date), Some(anchor)) = (day.date, anchor) {
        promote(&mut day.astronomy, date, *anchor.offset());
    }

    Ok(day)
}

fn decode_astronomy<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<Astronomy, DecodeError> {
    let mut astronomy = Astronomy::default();

    while let Some(tag) = cursor.next_child()? {
        let slot = match tag.as_str() {
            "sunrise" => &mut astronomy.sunrise,
            "sunset" => &mut astronomy.sunset,
            "moonrise" => &mut astronomy.moonrise,
            "moonset" => &mut astronomy.moonset,
            _ => {
                cursor.skip()?;
                continue;
            }
        };
        *slot = read_astro_time(cursor, &tag)?;
    }

    Ok(astronomy)
}

fn read_astro_time<R: BufRead>(
    cursor: &mut XmlCursor<R>,
    tag: &str,
) -> Result<Option<AstroTime>, DecodeError> {
    // "No sunrise", "No moonset", ...
    let sentinel = match tag {
        "sunrise" => "No sunrise",
        "sunset" => "No sunset",
        "moonrise" => "No moonrise",
        _ => "No moonset",
    };
    let time = cursor.read_time(tag, |raw| parse_optional_clock_time(raw, sentinel))?;
    Ok(time.map(AstroTime::TimeOfDay))
}

fn promote(astronomy: &mut Astronomy, date: NaiveDate, offset: FixedOffset) {
    for slot in [
        &mut astronomy.sunrise,
        &mut astronomy.sunset,
        &mut astronomy.moonrise,
        &mut astronomy.moonset,
    ] {
        if let Some(AstroTime::TimeOfDay(time)) = *slot {
            if let Some(when) = at_offset(date, time, offset) {
                *slot = Some(AstroTime::At(when));
            }
        }
    }
}

fn decode_hourly<R: BufRead>(cursor: &mut XmlCursor<R>) -> Result<HourlyForecast, DecodeError> {
    let mut hour = HourlyForecast::default();
    let mut utc_date: Option<NaiveDate> = None;
    let mut utc_time: Option<NaiveTime> = None;
    let mut localized: Option<String> = None;

    while let Some(tag) = cursor.next_child()? {
        if read_condition(cursor, &tag, &mut hour.conditions)? {
            continue;
        }
        match tag.as_str() {
            "time" => hour.local_time = Some(cursor.read_time(&tag, parse_compact_time)?),
            "UTCdate" => utc_date = Some(cursor.read_time(&tag, parse_date)?),
            "UTCtime" => utc_time = Some(cursor.read_time(&tag, parse_compact_time)?),
            "HeatIndexC" => hour.heat_index_c = cursor.read_int(&tag)?,
            "HeatIndexF" => hour.heat_index_f = cursor.read_int(&tag)?,
            "DewPointC" => hour.dew_point_c = cursor.read_int(&tag)?,
            "DewPointF" => hour.dew_point_f = cursor.read_int(&tag)?,
            "WindChillC" => hour.wind_chill_c = cursor.read_int(&tag)?,
            "WindChillF" => hour.wind_chill_f = cursor.read_int(&tag)?,
            "WindGustMiles" => hour.wind_gust_miles = cursor.read_int(&tag)?,
            "WindGustKmph" => hour.wind_gust_kmph = cursor.read_int(&tag)?,
            "chanceofrain" => hour.chance_of_rain = cursor.read_int(&tag)?,
            "chanceofremdry" => hour.chance_of_remdry = cursor.read_int(&tag)?,
            "chanceofwindy" => hour.chance_of_windy = cursor.read_int(&tag)?,
            "chanceofovercast" => hour.chance_of_overcast = cursor.read_int(&tag)?,
            "chanceofsunshine" => hour.chance_of_sunshine = cursor.read_int(&tag)?,
            "chanceoffrost" => hour.chance_of_frost = cursor.read_int(&tag)?,
            "chanceofhightemp" => hour.chance_of_hightemp = cursor.read_int(&tag)?,
            "chanceoffog" => hour.chance_of_fog = cursor.read_int(&tag)?,
            "chanceofsnow" => hour.chance_of_snow = cursor.read_int(&tag)?,
            "chanceofthunder" => hour.chance_of_thunder = cursor.read_int(&tag)?,
            other if localized_language(other).is_some() => {
                localized = Some(read_trimmed(cursor, &tag)?);
            }
            _ => cursor.skip()?,
        }
    }

    if let Some(description) = localized {
        hour.conditions.weather_desc = description;
    }
    if let (Some(date), Some(time)) = (utc_date, utc_time) {
        hour.time = Some(utc_instant(date, time));
    }

    Ok(hour)
}
