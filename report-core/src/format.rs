//! Pure renderers from normalized models to display lines.
//!
//! Formatters never touch raw JSON and never read the clock; the current
//! local time shown in the conditions header is supplied by the caller.
//! Output is a line sequence, not printed text.

use crate::model::{AstronomyModel, ConditionsModel, ForecastDayModel, TxtForecastPeriod};

/// Render current conditions. `local_time` is the caller's "HH:MM".
pub fn format_conditions(model: &ConditionsModel, local_time: &str) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{} {}", model.city, local_time));

    // The feels-like parenthetical is noise when it rounds to the same
    // integer as the measured temperature.
    if model.feelslike_c.round() as i64 == model.temp_c.round() as i64 {
        lines.push(format!("{} C", model.temp_c));
    } else {
        lines.push(format!("{} C ({} C)", model.temp_c, model.feelslike_c));
    }

    lines.push(model.weather.clone());
    lines.push(String::new());
    lines.push(format!("Humidité: {}", model.relative_humidity));
    lines.push(format!(
        "Pression: {} mb {}",
        model.pressure_mb,
        model.pressure_trend.label()
    ));
    lines.push(format!(
        "Vents: {} {} km/h avec rafales {} km/h",
        model.wind_dir, model.wind_kph, model.wind_gust_kph
    ));
    lines.push(String::new());
    lines.push(model.observation_time.clone());
    lines.push(format!("{} ({})", model.observation_location, model.station_id));
    lines.push(model.forecast_url.clone());

    lines
}

/// Render the detailed multi-day forecast, one block per day.
pub fn format_forecast(days: &[ForecastDayModel]) -> Vec<String> {
    let mut lines = vec![
        "Prévisions pour aujourd'hui et les 3 prochains jours:".to_string(),
        String::new(),
    ];

    for (index, day) in days.iter().enumerate() {
        lines.push(format!("{} {} {} {}", day.day_label, day.day, day.monthname, day.year));
        lines.push(format!("{} / {} celsius", day.high_c, day.low_c));
        lines.push(day.conditions.clone());
        lines.push(format!("Humidité: {} %", day.avehumidity));
        lines.push(format!("Vent: {} {} km/h", day.avewind_dir, day.avewind_kph));

        // Amount sub-lines are gated on pop: payloads sometimes carry
        // stale non-zero amounts alongside pop = 0.
        if day.pop > 0 {
            lines.push(format!("Précipitation: {} %", day.pop));
            if day.rain_mm > 0.0 {
                lines.push(format!("{} mm de pluie", day.rain_mm));
            }
            if day.snow_cm > 0.0 {
                lines.push(format!("{} cm de neige", day.snow_cm));
            }
        }

        if index + 1 < days.len() {
            lines.push(String::new());
        }
    }

    lines
}

/// Render the one-line-per-period text forecast.
pub fn format_txt_forecast(periods: &[TxtForecastPeriod]) -> Vec<String> {
    periods
        .iter()
        .map(|period| format!("{}: {}", period.title, period.text))
        .collect()
}

/// Render astronomy: exactly three lines.
pub fn format_astronomy(model: &AstronomyModel) -> Vec<String> {
    vec![
        format!("Lever du soleil: {}", model.sunrise),
        format!("Coucher du soleil: {}", model.sunset),
        format!("Phase de la lune: {}", model.moon_phase),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::PressureTrend;

    fn conditions_model() -> ConditionsModel {
        ConditionsModel {
            city: "Sydney".into(),
            temp_c: 12.3,
            feelslike_c: 9.0,
            weather: "Pluie légère".into(),
            relative_humidity: "83%".into(),
            wind_dir: "SSO".into(),
            wind_kph: 24.1,
            wind_gust_kph: 37.0,
            pressure_mb: "9987".into(),
            pressure_trend: PressureTrend::Falling,
            observation_time: "Last Updated on June 18, 9:00 PM AEST".into(),
            observation_location: "Sydney, New South Wales".into(),
            station_id: "INEWSOUT166".into(),
            forecast_url: "http://example.invalid/forecast".into(),
        }
    }

    fn forecast_day(pop: i64, rain_mm: f64, snow_cm: f64) -> ForecastDayModel {
        ForecastDayModel {
            period: 2,
            day_label: "Mardi".into(),
            day: 19,
            monthname: "juin".into(),
            year: 2018,
            avehumidity: 60,
            avewind_dir: "O".into(),
            avewind_kph: 14.0,
            conditions: "Ensoleillé".into(),
            high_c: "23".into(),
            low_c: "13".into(),
            pop,
            rain_mm,
            snow_cm,
        }
    }

    #[test]
    fn feels_like_shown_when_it_rounds_differently() {
        let lines = format_conditions(&conditions_model(), "21:00");

        assert_eq!(lines[0], "Sydney 21:00");
        assert_eq!(lines[1], "12.3 C (9 C)");
        assert_eq!(lines[5], "Pression: 9987 mb en baisse");
    }

    #[test]
    fn feels_like_omitted_when_it_rounds_to_the_same_integer() {
        let mut model = conditions_model();
        model.feelslike_c = 12.4;

        let lines = format_conditions(&model, "21:00");
        assert_eq!(lines[1], "12.3 C");
    }

    #[test]
    fn zero_pop_suppresses_amount_lines_even_with_stale_amounts() {
        let lines = format_forecast(&[forecast_day(0, 5.0, 2.0)]);

        assert!(!lines.iter().any(|l| l.contains("Précipitation")));
        assert!(!lines.iter().any(|l| l.contains("pluie")));
        assert!(!lines.iter().any(|l| l.contains("neige")));
    }

    #[test]
    fn pop_with_snow_only_emits_snow_line_but_no_rain_line() {
        let lines = format_forecast(&[forecast_day(40, 0.0, 2.0)]);

        assert!(lines.contains(&"Précipitation: 40 %".to_string()));
        assert!(lines.contains(&"2 cm de neige".to_string()));
        assert!(!lines.iter().any(|l| l.contains("pluie")));
    }

    #[test]
    fn forecast_day_line_order_is_fixed() {
        let lines = format_forecast(&[forecast_day(40, 3.2, 0.0)]);

        assert_eq!(
            lines,
            vec![
                "Prévisions pour aujourd'hui et les 3 prochains jours:".to_string(),
                String::new(),
                "Mardi 19 juin 2018".to_string(),
                "23 / 13 celsius".to_string(),
                "Ensoleillé".to_string(),
                "Humidité: 60 %".to_string(),
                "Vent: O 14 km/h".to_string(),
                "Précipitation: 40 %".to_string(),
                "3.2 mm de pluie".to_string(),
            ]
        );
    }

    #[test]
    fn astronomy_is_exactly_three_lines() {
        let model = AstronomyModel {
            sunrise: "6:45".into(),
            sunset: "17:03".into(),
            moon_phase: "Premier croissant".into(),
        };

        assert_eq!(
            format_astronomy(&model),
            vec![
                "Lever du soleil: 6:45",
                "Coucher du soleil: 17:03",
                "Phase de la lune: Premier croissant",
            ]
        );
    }

    #[test]
    fn txt_forecast_is_one_line_per_period() {
        let periods = vec![
            TxtForecastPeriod { title: "Lundi".into(), text: "Pluie.".into() },
            TxtForecastPeriod { title: "Lundi soir".into(), text: "Dégagé.".into() },
        ];

        assert_eq!(
            format_txt_forecast(&periods),
            vec!["Lundi: Pluie.", "Lundi soir: Dégagé."]
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let model = conditions_model();
        assert_eq!(format_conditions(&model, "21:00"), format_conditions(&model, "21:00"));
    }
}
