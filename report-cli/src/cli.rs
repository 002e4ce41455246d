use anyhow::Context;
use clap::Parser;
use report_core::{EndpointSpec, Feature, ForecastStyle, HttpTransport, build_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-report", version, about = "Personal weather report")]
pub struct Cli {
    /// Sections to include, in report order (comma-separated).
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [Feature::Conditions, Feature::Forecast, Feature::Astronomy]
    )]
    pub sections: Vec<Feature>,

    /// One line per half-day period instead of the detailed forecast.
    #[arg(long)]
    pub brief: bool,

    /// Location query: city path ("Australia/Sydney"), airport code
    /// ("KJFK") or personal station id. Overrides $LOCATION.
    #[arg(long)]
    pub location: Option<String>,

    /// Provider language code for localized condition texts.
    #[arg(long, default_value = "FR")]
    pub lang: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let api_key = std::env::var("WUNDERGROUND_KEY")
            .context("WUNDERGROUND_KEY environment variable is not set")?;

        let location = match self.location {
            Some(location) => location,
            None => std::env::var("LOCATION").context(
                "No location given. Pass --location or set the LOCATION environment variable.",
            )?,
        };

        let spec = EndpointSpec {
            api_key,
            location,
            language: self.lang,
            personal_station: false,
            features: self.sections,
        };

        let style = if self.brief { ForecastStyle::Brief } else { ForecastStyle::Detailed };

        // The formatter never reads the clock; the conditions header time
        // is supplied here.
        let local_time = chrono::Local::now().format("%H:%M").to_string();

        let transport = HttpTransport::new();
        let report = build_report(&transport, &spec, &local_time, style)
            .await
            .context("Failed to build the weather report")?;

        println!("{}", report.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sections_default_to_the_full_report() {
        let cli = Cli::parse_from(["weather-report"]);
        assert_eq!(
            cli.sections,
            vec![Feature::Conditions, Feature::Forecast, Feature::Astronomy]
        );
        assert!(!cli.brief);
    }

    #[test]
    fn sections_accept_a_comma_separated_subset() {
        let cli = Cli::parse_from(["weather-report", "--sections", "astronomy,conditions"]);
        assert_eq!(cli.sections, vec![Feature::Astronomy, Feature::Conditions]);
    }
}
