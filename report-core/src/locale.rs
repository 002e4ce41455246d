//! Display helpers for the report's fixed target locale (French) and for
//! the provider's odd raw encodings.

use serde::{Deserialize, Serialize};

/// Marker substituted for absent non-essential display strings.
pub const UNKNOWN: &str = "n/d";

/// Barometric pressure direction, decoded from the provider's
/// single-character sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureTrend {
    Rising,
    Falling,
    Steady,
}

impl PressureTrend {
    /// `"-"` is falling, `"+"` is rising, everything else is steady.
    pub fn from_sentinel(raw: &str) -> Self {
        match raw {
            "-" => PressureTrend::Falling,
            "+" => PressureTrend::Rising,
            _ => PressureTrend::Steady,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PressureTrend::Rising => "à la hausse",
            PressureTrend::Falling => "en baisse",
            PressureTrend::Steady => "stable",
        }
    }
}

/// Some stations prefix pressure with a spurious `-` (e.g. "-9987");
/// the magnitude is what gets displayed.
pub fn strip_leading_minus(raw: &str) -> &str {
    raw.trim_start_matches('-')
}

/// Uppercase the first character, leaving the rest untouched. Provider
/// weekday names arrive lowercased.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
