use std::str::FromStr;
use thiserror::Error;

/// Colouring policy applied to escape counts. Never affects the counts
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourScheme {
    #[default]
    Default,
    BlueGradient,
    WarmTones,
    Grayscale,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour scheme `{0}` (expected default, blue-gradient, warm-tones or grayscale)")]
pub struct ColourSchemeParseError(pub String);

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Default,
        Self::BlueGradient,
        Self::WarmTones,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::BlueGradient => "Blue Gradient",
            Self::WarmTones => "Warm Tones",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Identifier used on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::BlueGradient => "blue-gradient",
            Self::WarmTones => "warm-tones",
            Self::Grayscale => "grayscale",
        }
    }
}

impl std::fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourScheme {
    type Err = ColourSchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|scheme| {
                scheme.cli_name().eq_ignore_ascii_case(wanted)
                    || scheme.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ColourSchemeParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourScheme::ALL.first(), Some(&ColourScheme::default()));
    }

    #[test]
    fn parses_cli_and_display_names() {
        for &scheme in ColourScheme::ALL {
            assert_eq!(scheme.cli_name().parse::<ColourScheme>(), Ok(scheme));
            assert_eq!(scheme.display_name().parse::<ColourScheme>(), Ok(scheme));
        }
        assert_eq!(
            "GRAYSCALE".parse::<ColourScheme>(),
            Ok(ColourScheme::Grayscale)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "sepia".parse::<ColourScheme>(),
            Err(ColourSchemeParseError("sepia".to_owned()))
        );
    }
}
