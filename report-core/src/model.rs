use serde::{Deserialize, Serialize};

use crate::{endpoint::Feature, error::ReportError, locale::PressureTrend};

/// Current observations, normalized from the `current_observation` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsModel {
    pub city: String,
    pub temp_c: f64,
    /// Heat index or wind chill; equals `temp_c` when the provider omits it.
    pub feelslike_c: f64,
    pub weather: String,
    pub relative_humidity: String,
    pub wind_dir: String,
    pub wind_kph: f64,
    pub wind_gust_kph: f64,
    /// Display magnitude, leading sign-noise already stripped.
    pub pressure_mb: String,
    pub pressure_trend: PressureTrend,
    pub observation_time: String,
    pub observation_location: String,
    pub station_id: String,
    pub forecast_url: String,
}

/// One day of the simple forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDayModel {
    pub period: i64,
    /// "Aujourd'hui" for period 1, capitalized weekday otherwise.
    pub day_label: String,
    pub day: i64,
    pub monthname: String,
    pub year: i64,
    pub avehumidity: i64,
    pub avewind_dir: String,
    pub avewind_kph: f64,
    pub conditions: String,
    pub high_c: String,
    pub low_c: String,
    /// Probability of precipitation, 0–100.
    pub pop: i64,
    pub rain_mm: f64,
    pub snow_cm: f64,
}

/// Sunrise, sunset and moon phase. All three fields are required for the
/// section to mean anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstronomyModel {
    /// "H:MM" as joined from the provider's hour/minute parts.
    pub sunrise: String,
    pub sunset: String,
    pub moon_phase: String,
}

/// One half-day period of the one-line text forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxtForecastPeriod {
    pub title: String,
    pub text: String,
}

/// Rendered output of one requested section.
#[derive(Debug)]
pub enum SectionBody {
    Rendered(Vec<String>),
    Unavailable(ReportError),
}

#[derive(Debug)]
pub struct SectionReport {
    pub section: Feature,
    pub body: SectionBody,
}

impl SectionReport {
    pub fn is_available(&self) -> bool {
        matches!(self.body, SectionBody::Rendered(_))
    }
}

/// Rendered sections in the caller-requested order.
#[derive(Debug)]
pub struct Report {
    pub sections: Vec<SectionReport>,
}

impl Report {
    /// True when at least one section failed and was replaced by a marker.
    pub fn is_partial(&self) -> bool {
        self.sections.iter().any(|s| !s.is_available())
    }

    /// Join sections with a blank line; failed sections become a short
    /// "unavailable" notice instead of aborting the whole report.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|section| match &section.body {
                SectionBody::Rendered(lines) => lines.join("\n"),
                SectionBody::Unavailable(_) => {
                    format!("(section indisponible: {})", section.section.label())
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
