use std::str::FromStr;
use thiserror::Error;

/// Where the zoomed rectangle ends up relative to the cursor.
///
/// Classic explorers recentre on the cursor. The default keeps the cursor
/// point fixed instead, because only then does zooming out at the same
/// pixel return to the view zoomed in from, wherever the cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// The complex point under the cursor stays under the same pixel.
    #[default]
    KeepCursorFixed,
    /// The new rectangle is centred on the complex point under the cursor.
    CentreOnCursor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zoom mode `{0}` (expected keep-cursor-fixed or centre-on-cursor)")]
pub struct ZoomModeParseError(pub String);

impl ZoomMode {
    pub const ALL: &'static [Self] = &[Self::KeepCursorFixed, Self::CentreOnCursor];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::KeepCursorFixed => "keep-cursor-fixed",
            Self::CentreOnCursor => "centre-on-cursor",
        }
    }
}

impl std::fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ZoomMode {
    type Err = ZoomModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ZoomModeParseError(s.to_owned()))
    }
}
