use std::str::FromStr;

use thiserror::Error;

use crate::controllers::interactive::render_slot::SubmitPolicy;
use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourScheme, ColourSchemeParseError,
};

/// A user action as the windowing layer reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Wheel turned up or forward: zoom in around the cursor.
    WheelUp(Point),
    /// Wheel turned down or back: zoom out around the cursor.
    WheelDown(Point),
    DragStart(Point),
    DragTo(Point),
    DragEnd,
    Resize(PixelSize),
    Reset,
    Hover(Point),
    SelectScheme(ColourScheme),
}

impl Gesture {
    /// How the resulting render is submitted, or `None` if the gesture
    /// never triggers one.
    #[must_use]
    pub fn submit_policy(&self) -> Option<SubmitPolicy> {
        match self {
            Self::WheelUp(_) | Self::WheelDown(_) => Some(SubmitPolicy::Drop),
            Self::DragTo(_) | Self::Resize(_) | Self::Reset | Self::SelectScheme(_) => {
                Some(SubmitPolicy::Queue)
            }
            Self::DragStart(_) | Self::DragEnd | Self::Hover(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureParseError {
    #[error("unknown gesture `{0}`")]
    UnknownGesture(String),
    #[error("gesture `{0}` needs an argument")]
    MissingArgument(String),
    #[error("gesture `{0}` takes no argument")]
    UnexpectedArgument(String),
    #[error("expected two integers separated by a comma, got `{0}`")]
    InvalidPair(String),
    #[error(transparent)]
    InvalidSize(#[from] PixelSizeError),
    #[error(transparent)]
    UnknownScheme(#[from] ColourSchemeParseError),
}

fn parse_pair<T: FromStr>(value: &str) -> Result<(T, T), GestureParseError> {
    let invalid = || GestureParseError::InvalidPair(value.to_owned());
    let (first, second) = value.split_once(',').ok_or_else(invalid)?;

    Ok((
        first.trim().parse().map_err(|_| invalid())?,
        second.trim().parse().map_err(|_| invalid())?,
    ))
}

fn parse_point(value: &str) -> Result<Point, GestureParseError> {
    parse_pair(value).map(|(x, y)| Point { x, y })
}

/// Parses the textual form used for scripted sessions:
/// `zoom-in:X,Y`, `zoom-out:X,Y`, `press:X,Y`, `drag:X,Y`, `release`,
/// `resize:W,H`, `reset`, `hover:X,Y`, `scheme:NAME`.
impl FromStr for Gesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.trim().split_once(':') {
            Some((name, argument)) => (name.trim(), Some(argument.trim())),
            None => (s.trim(), None),
        };
        let lowered = name.to_ascii_lowercase();

        let missing = || GestureParseError::MissingArgument(name.to_owned());
        let required = || argument.ok_or_else(missing);
        let none = |gesture: Gesture| match argument {
            Some(_) => Err(GestureParseError::UnexpectedArgument(name.to_owned())),
            None => Ok(gesture),
        };

        match lowered.as_str() {
            "zoom-in" => Ok(Self::WheelUp(parse_point(required()?)?)),
            "zoom-out" => Ok(Self::WheelDown(parse_point(required()?)?)),
            "press" => Ok(Self::DragStart(parse_point(required()?)?)),
            "drag" => Ok(Self::DragTo(parse_point(required()?)?)),
            "hover" => Ok(Self::Hover(parse_point(required()?)?)),
            "resize" => {
                let (width, height) = parse_pair(required()?)?;
                Ok(Self::Resize(PixelSize::new(width, height)?))
            }
            "scheme" => Ok(Self::SelectScheme(required()?.parse()?)),
            "release" => none(Self::DragEnd),
            "reset" => none(Self::Reset),
            _ => Err(GestureParseError::UnknownGesture(name.to_owned())),
        }
    }
}
