// pixie-params/src/core/mod.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod processor;

pub use processor::{ProcessConfig, RequestProcessor, Resolved};

pub const PARAM_WIDTH: &str = "w";
pub const PARAM_HEIGHT: &str = "h";
pub const PARAM_CROPPING: &str = "c";
pub const PARAM_GRAVITY: &str = "g";
pub const PARAM_FILTER: &str = "f";
pub const PARAM_SCALE: &str = "s";

pub const DEFAULT_SCALE: u32 = 1;

/// A closed set of values addressed by a short lower-case code in a
/// parameter string.
pub trait ParamCode: Sized + Copy + 'static {
    /// Parameter key the code is given under (`c`, `g`, `f`).
    const KEY: &'static str;
    /// Longest code accepted before the value is rejected on length alone.
    const MAX_LEN: Option<usize>;
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

/// How the source image is fitted into the requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CroppingMode {
    /// Crop exactly to the given dimensions.
    #[default]
    Exact,
    /// Show all of the image inside a frame of at most the given dimensions.
    All,
    /// Fill the frame, cropping the part that does not fit.
    Part,
    /// Fill the frame, keeping the source scale.
    KeepScale,
}

impl ParamCode for CroppingMode {
    const KEY: &'static str = PARAM_CROPPING;
    const MAX_LEN: Option<usize> = Some(1);
    const ALL: &'static [Self] = &[Self::Exact, Self::All, Self::Part, Self::KeepScale];

    fn code(self) -> &'static str {
        match self {
            Self::Exact => "e",
            Self::All => "a",
            Self::Part => "p",
            Self::KeepScale => "k",
        }
    }
}

/// Anchor of the region kept when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gravity {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    #[default]
    NorthWest,
    Center,
}

impl ParamCode for Gravity {
    const KEY: &'static str = PARAM_GRAVITY;
    const MAX_LEN: Option<usize> = Some(2);
    const ALL: &'static [Self] = &[
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::Center,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
            Self::Center => "c",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    None,
    Grayscale,
}

impl ParamCode for Filter {
    const KEY: &'static str = PARAM_FILTER;
    const MAX_LEN: Option<usize> = None;
    const ALL: &'static [Self] = &[Self::None, Self::Grayscale];

    fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
        }
    }
}

macro_rules! impl_code_traits {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = ParamError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_code(s).ok_or_else(|| ParamError::InvalidEnum {
                    key: <$ty as ParamCode>::KEY,
                    value: s.to_string(),
                })
            }
        }
    )*};
}

impl_code_traits!(CroppingMode, Gravity, Filter);

/// Validated description of an image transformation.
///
/// Only produced by parsing or by [`ParameterSet::with_scale`]; unset
/// dimensions are zero. `Display` renders the canonical cache-key encoding,
/// always listing every field in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    pub(crate) width: u64,
    pub(crate) height: u64,
    pub(crate) scale: u32,
    pub(crate) cropping: CroppingMode,
    pub(crate) gravity: Gravity,
    pub(crate) filter: Filter,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            scale: DEFAULT_SCALE,
            cropping: CroppingMode::default(),
            gravity: Gravity::default(),
            filter: Filter::default(),
        }
    }
}

impl ParameterSet {
    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn cropping(&self) -> CroppingMode {
        self.cropping
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Copy of these parameters with the scale replaced.
    pub fn with_scale(self, scale: u32) -> Self {
        Self { scale, ..self }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{},{}_{},{}_{},{}_{},{}_{},{}_{}",
            PARAM_CROPPING,
            self.cropping,
            PARAM_GRAVITY,
            self.gravity,
            PARAM_HEIGHT,
            self.height,
            PARAM_WIDTH,
            self.width,
            PARAM_FILTER,
            self.filter,
            PARAM_SCALE,
            self.scale
        )
    }
}

impl FromStr for ParameterSet {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self> {
        crate::processors::parse_parameters(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("could not parse value for parameter {key:?}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("value for parameter {key:?} is out of range: {value}")]
    OutOfRange { key: &'static str, value: String },

    #[error("value for parameter {key:?} must have at most {max} character(s): {value:?}")]
    InvalidLength {
        key: &'static str,
        value: String,
        max: usize,
    },

    #[error("invalid value for parameter {key:?}: {value:?}")]
    InvalidEnum { key: &'static str, value: String },

    #[error("malformed parameter {token:?}, expected key_value")]
    MalformedToken { token: String },

    #[error("image path has no extension: {path:?}")]
    MissingExtension { path: String },
}

pub type Result<T> = std::result::Result<T, ParamError>;
