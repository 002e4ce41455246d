//! Field extraction from raw provider payloads.
//!
//! The provider's JSON is loosely typed: numbers arrive as numbers or as
//! strings, optional fields are sometimes missing and sometimes `null`,
//! and a few values carry sentinel encodings. Each normalizer turns one
//! section of a raw tree into a typed model, failing only when a field
//! essential to the section's meaning is absent.

use serde_json::Value;

use crate::{
    endpoint::Feature,
    error::ReportError,
    locale::{self, PressureTrend, UNKNOWN},
    model::{AstronomyModel, ConditionsModel, ForecastDayModel, TxtForecastPeriod},
};

/// Walk `path` from `root`. A missing key or an explicit `null` both
/// count as absent.
fn walk<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = root;
    for key in path {
        node = node.get(key)?;
    }
    if node.is_null() { None } else { Some(node) }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn essential_text(
    root: &Value,
    section: Feature,
    path: &[&str],
) -> Result<String, ReportError> {
    walk(root, path)
        .and_then(as_text)
        .ok_or_else(|| ReportError::missing(section, path.join(".")))
}

fn essential_number(
    root: &Value,
    section: Feature,
    path: &[&str],
) -> Result<f64, ReportError> {
    walk(root, path)
        .and_then(as_number)
        .ok_or_else(|| ReportError::missing(section, path.join(".")))
}

fn opt_text(root: &Value, path: &[&str]) -> String {
    walk(root, path).and_then(as_text).unwrap_or_else(|| UNKNOWN.to_string())
}

fn opt_number(root: &Value, path: &[&str], default: f64) -> f64 {
    walk(root, path).and_then(as_number).unwrap_or(default)
}

/// Normalize the `current_observation` section of a raw payload.
///
/// Essential: temperature, weather text, pressure and its trend sentinel.
/// Everything else degrades to a documented default or an unknown marker.
pub fn normalize_conditions(raw: &Value) -> Result<ConditionsModel, ReportError> {
    let section = Feature::Conditions;

    let temp_c = essential_number(raw, section, &["current_observation", "temp_c"])?;
    let weather = essential_text(raw, section, &["current_observation", "weather"])?;

    let raw_pressure =
        essential_text(raw, section, &["current_observation", "pressure_mb"])?;
    let pressure_mb = locale::strip_leading_minus(&raw_pressure).to_string();

    let trend_sentinel =
        essential_text(raw, section, &["current_observation", "pressure_trend"])?;
    let pressure_trend = PressureTrend::from_sentinel(&trend_sentinel);

    let feelslike_c =
        opt_number(raw, &["current_observation", "feelslike_c"], temp_c);

    Ok(ConditionsModel {
        city: opt_text(raw, &["current_observation", "display_location", "city"]),
        temp_c,
        feelslike_c,
        weather,
        relative_humidity: opt_text(raw, &["current_observation", "relative_humidity"]),
        wind_dir: opt_text(raw, &["current_observation", "wind_dir"]),
        wind_kph: opt_number(raw, &["current_observation", "wind_kph"], 0.0),
        wind_gust_kph: opt_number(raw, &["current_observation", "wind_gust_kph"], 0.0),
        pressure_mb,
        pressure_trend,
        observation_time: opt_text(raw, &["current_observation", "observation_time"]),
        observation_location: opt_text(
            raw,
            &["current_observation", "observation_location", "full"],
        ),
        station_id: opt_text(raw, &["current_observation", "station_id"]),
        forecast_url: opt_text(raw, &["current_observation", "forecast_url"]),
    })
}

/// Normalize the simple multi-day forecast.
///
/// The first period is relabeled "today" in the report locale; later
/// periods keep their capitalized weekday.
pub fn normalize_forecast(raw: &Value) -> Result<Vec<ForecastDayModel>, ReportError> {
    let section = Feature::Forecast;

    let days = walk(raw, &["forecast", "simpleforecast", "forecastday"])
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ReportError::missing(section, "forecast.simpleforecast.forecastday")
        })?;

    days.iter()
        .enumerate()
        .map(|(index, day)| normalize_forecast_day(day, index))
        .collect()
}

fn normalize_forecast_day(
    day: &Value,
    index: usize,
) -> Result<ForecastDayModel, ReportError> {
    let section = Feature::Forecast;

    let period = opt_number(day, &["period"], (index + 1) as f64) as i64;
    let weekday = essential_text(day, section, &["date", "weekday"])?;

    let day_label = if period == 1 {
        "Aujourd'hui".to_string()
    } else {
        locale::capitalize_first(&weekday)
    };

    Ok(ForecastDayModel {
        period,
        day_label,
        day: essential_number(day, section, &["date", "day"])? as i64,
        monthname: essential_text(day, section, &["date", "monthname"])?,
        year: essential_number(day, section, &["date", "year"])? as i64,
        avehumidity: opt_number(day, &["avehumidity"], 0.0) as i64,
        avewind_dir: opt_text(day, &["avewind", "dir"]),
        avewind_kph: opt_number(day, &["avewind", "kph"], 0.0),
        conditions: essential_text(day, section, &["conditions"])?,
        high_c: essential_text(day, section, &["high", "celsius"])?,
        low_c: essential_text(day, section, &["low", "celsius"])?,
        pop: opt_number(day, &["pop"], 0.0) as i64,
        rain_mm: opt_number(day, &["qpf_allday", "mm"], 0.0),
        snow_cm: opt_number(day, &["snow_allday", "cm"], 0.0),
    })
}

/// Normalize the one-line-per-period text forecast.
pub fn normalize_txt_forecast(raw: &Value) -> Result<Vec<TxtForecastPeriod>, ReportError> {
    let section = Feature::Forecast;

    let periods = walk(raw, &["forecast", "txt_forecast", "forecastday"])
        .and_then(Value::as_array)
        .ok_or_else(|| ReportError::missing(section, "forecast.txt_forecast.forecastday"))?;

    periods
        .iter()
        .map(|period| {
            Ok(TxtForecastPeriod {
                title: locale::capitalize_first(&essential_text(
                    period,
                    section,
                    &["title"],
                )?),
                text: essential_text(period, section, &["fcttext_metric"])?,
            })
        })
        .collect()
}

/// Normalize sunrise/sunset/moon-phase. All three are essential.
pub fn normalize_astronomy(raw: &Value) -> Result<AstronomyModel, ReportError> {
    let section = Feature::Astronomy;

    let sunrise = format!(
        "{}:{}",
        essential_text(raw, section, &["sun_phase", "sunrise", "hour"])?,
        essential_text(raw, section, &["sun_phase", "sunrise", "minute"])?,
    );
    let sunset = format!(
        "{}:{}",
        essential_text(raw, section, &["sun_phase", "sunset", "hour"])?,
        essential_text(raw, section, &["sun_phase", "sunset", "minute"])?,
    );

    Ok(AstronomyModel {
        sunrise,
        sunset,
        moon_phase: essential_text(raw, section, &["moon_phase", "phaseofMoon"])?,
    })
}
