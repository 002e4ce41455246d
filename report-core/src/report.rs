//! Report orchestration: fetch, normalize and format the requested
//! sections, isolating per-section failures.

use serde_json::Value;

use crate::{
    endpoint::{EndpointSpec, Feature},
    error::ReportError,
    fetch::{Transport, fetch},
    format,
    model::{Report, SectionBody, SectionReport},
    normalize,
};

/// Which rendering the forecast section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastStyle {
    /// Multi-line block per day.
    #[default]
    Detailed,
    /// One line per half-day period.
    Brief,
}

/// Build a report for the sections named in `spec.features`, in that
/// order.
///
/// All requested features go out as one combined fetch; a section whose
/// normalization fails is recorded and replaced by an "unavailable"
/// marker rather than aborting the report. When no section survives —
/// including when the fetch itself fails — the whole report fails with
/// [`ReportError::ReportUnavailable`].
///
/// `local_time` is the caller-supplied "HH:MM" shown in the conditions
/// header; the core never reads the clock.
pub async fn build_report(
    transport: &dyn Transport,
    spec: &EndpointSpec,
    local_time: &str,
    style: ForecastStyle,
) -> Result<Report, ReportError> {
    let Ok(payload) = fetch(transport, spec).await else {
        return Err(ReportError::ReportUnavailable);
    };

    let sections = spec
        .features
        .iter()
        .map(|&section| {
            let body = match render_section(section, &payload, local_time, style) {
                Ok(lines) => SectionBody::Rendered(lines),
                Err(err) => SectionBody::Unavailable(err),
            };
            SectionReport { section, body }
        })
        .collect::<Vec<_>>();

    if sections.iter().all(|s| !s.is_available()) {
        return Err(ReportError::ReportUnavailable);
    }

    Ok(Report { sections })
}

fn render_section(
    section: Feature,
    payload: &Value,
    local_time: &str,
    style: ForecastStyle,
) -> Result<Vec<String>, ReportError> {
    match section {
        Feature::Conditions => {
            let model = normalize::normalize_conditions(payload)?;
            Ok(format::format_conditions(&model, local_time))
        }
        Feature::Forecast => match style {
            ForecastStyle::Detailed => {
                let days = normalize::normalize_forecast(payload)?;
                Ok(format::format_forecast(&days))
            }
            ForecastStyle::Brief => {
                let periods = normalize::normalize_txt_forecast(payload)?;
                Ok(format::format_txt_forecast(&periods))
            }
        },
        Feature::Astronomy => {
            let model = normalize::normalize_astronomy(payload)?;
            Ok(format::format_astronomy(&model))
        }
    }
}
