use std::{fmt, str::FromStr};

/// Provider API root. The key and feature path are appended per request.
pub const BASE_URL: &str = "http://api.wunderground.com/api/";

/// One report section, matching the provider's feature names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Conditions,
    Forecast,
    Astronomy,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Conditions => "conditions",
            Feature::Forecast => "forecast",
            Feature::Astronomy => "astronomy",
        }
    }

    /// Section name as shown in the report, in the report's locale.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Conditions => "conditions actuelles",
            Feature::Forecast => "prévisions",
            Feature::Astronomy => "astronomie",
        }
    }

    pub const fn all() -> &'static [Feature] {
        &[Feature::Conditions, Feature::Forecast, Feature::Astronomy]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "conditions" => Ok(Feature::Conditions),
            "forecast" => Ok(Feature::Forecast),
            "astronomy" => Ok(Feature::Astronomy),
            _ => Err(format!(
                "Unknown section '{value}'. Supported sections: conditions, forecast, astronomy."
            )),
        }
    }
}

/// Everything needed to address one provider request.
///
/// Constructed once per invocation by the caller and never mutated; the
/// only consumer is [`EndpointSpec::request_url`].
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    pub api_key: String,
    /// City path ("Australia/Sydney"), airport code ("KJFK") or pws id.
    pub location: String,
    /// Two-letter provider language code, e.g. "FR".
    pub language: String,
    /// When false, personal weather stations are excluded (`pws:0`).
    pub personal_station: bool,
    /// Requested sections, in report order.
    pub features: Vec<Feature>,
}

impl EndpointSpec {
    pub fn new(
        api_key: impl Into<String>,
        location: impl Into<String>,
        features: Vec<Feature>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            location: location.into(),
            language: "FR".to_string(),
            personal_station: false,
            features,
        }
    }

    /// Build the request URL:
    /// `{base}{key}/{feature[/feature...]}/{settings}/q/{location}.json`.
    ///
    /// Multiple features are slash-joined into a single combined request.
    pub fn request_url(&self) -> String {
        let features =
            self.features.iter().map(Feature::as_str).collect::<Vec<_>>().join("/");

        let mut settings = format!("lang:{}", self.language);
        if !self.personal_station {
            settings.push_str("/pws:0");
        }

        format!(
            "{BASE_URL}{key}/{features}/{settings}/q/{location}.json",
            key = self.api_key,
            location = self.location,
        )
    }
}
