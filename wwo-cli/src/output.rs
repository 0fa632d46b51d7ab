use wwo_core::{
    RateLimit,
    model::{AstroTime, Conditions, HourlyForecast, Location, SearchResults, WeatherData},
};

pub fn print_weather(data: &WeatherData) {
    if let Some(location) = &data.location {
        println!("{}", describe_location(location));
    } else if let Some(query) = &data.query {
        println!("{} ({})", query.text, query.kind);
    }
    if let Some(local_time) = data.local_time {
        println!("Local time: {}", local_time.format("%Y-%m-%d %H:%M %:z"));
    }

    if let Some(current) = &data.current {
        let observed = current
            .observation_time
            .map(|t| format!(" (observed {})", t.format("%H:%M")))
            .unwrap_or_default();
        println!();
        println!("Now{observed}");
        println!("  {}", describe_conditions(&current.conditions));
    }

    for (index, (day, hours)) in data.days().enumerate() {
        println!();
        match day.date {
            Some(date) => println!("{}", date.format("%A %e %B %Y")),
            None => println!("Day {}", index + 1),
        }
        println!(
            "  High {}°C / {}°F, low {}°C / {}°F, UV index {}",
            day.max_temp_c, day.max_temp_f, day.min_temp_c, day.min_temp_f, day.uv_index
        );
        println!(
            "  Sunrise {}, sunset {}, moonrise {}, moonset {}",
            astro(day.astronomy.sunrise),
            astro(day.astronomy.sunset),
            astro(day.astronomy.moonrise),
            astro(day.astronomy.moonset),
        );
        for hour in hours {
            println!("  {}", describe_hour(hour));
        }
    }
}

pub fn print_search(results: &SearchResults) {
    if results.locations.is_empty() {
        println!("No matching locations.");
    }
    for location in &results.locations {
        println!("{}", describe_location(location));
    }
}

pub fn print_rate_limit(rate_limit: &RateLimit) {
    if let Some(per_day) = rate_limit.per_day {
        eprintln!("{per_day} requests left today");
    }
}

pub fn print_skipped(skipped: &[String]) {
    if !skipped.is_empty() {
        eprintln!("Skipped {} unrecognised element(s): {}", skipped.len(), skipped.join(", "));
    }
}

fn describe_location(location: &Location) -> String {
    let mut out = location.name.clone();
    for part in [&location.region, &location.country] {
        if !part.is_empty() {
            out.push_str(", ");
            out.push_str(part);
        }
    }
    out.push_str(&format!(" [{:.3}, {:.3}]", location.latitude, location.longitude));
    if let Some(offset) = location.timezone_offset {
        out.push_str(&format!(" UTC{offset}"));
    }
    out
}

fn describe_conditions(conditions: &Conditions) -> String {
    format!(
        "{}, {}°C / {}°F, wind {} mph {}, humidity {}%, pressure {} mb",
        conditions.weather_desc,
        conditions.temp_c,
        conditions.temp_f,
        conditions.windspeed_miles,
        conditions.winddir_16point,
        conditions.humidity,
        conditions.pressure,
    )
}

fn describe_hour(hour: &HourlyForecast) -> String {
    let time = hour
        .local_time
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());
    format!(
        "{time}  {}, rain {}%",
        describe_conditions(&hour.conditions),
        hour.chance_of_rain
    )
}

fn astro(time: Option<AstroTime>) -> String {
    match time {
        Some(time) => time.time().format("%H:%M").to_string(),
        None => "none".to_string(),
    }
}
