//! Scalar style values that may depend on the size of the containing box.

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::error::ParseError;

/// A length as written in a style: unset, automatic, absolute, or a
/// percentage of the containing box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Not specified at all.
    #[default]
    Undefined,
    /// Sized by the layout algorithm.
    Auto,
    /// An absolute length in layout units.
    Fixed(f32),
    /// A percentage of the parent size along the same axis.
    Percent(f32),
}

impl Dimension {
    /// Shorthand for `Dimension::Percent`.
    pub fn percent(v: f32) -> Self {
        Self::Percent(v)
    }

    /// Resolve against the parent size along the same axis. `Auto` and
    /// `Undefined` have no numeric value.
    pub fn resolve(&self, parent: f32) -> Option<f32> {
        match *self {
            Self::Fixed(v) => Some(v),
            Self::Percent(v) => Some(parent * v / 100.0),
            Self::Auto | Self::Undefined => None,
        }
    }

    /// Resolve against the parent size, using `fallback` for `Auto` and
    /// `Undefined`.
    pub fn resolve_or(&self, parent: f32, fallback: f32) -> f32 {
        self.resolve(parent).unwrap_or(fallback)
    }

    /// True for `Auto`.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True for anything but `Undefined`. Note that `Auto` counts as defined.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// True for values with a numeric resolution.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Fixed(_) | Self::Percent(_))
    }
}

impl From<f32> for Dimension {
    fn from(v: f32) -> Self {
        Self::Fixed(v)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Auto => write!(f, "auto"),
            Self::Fixed(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "auto" => return Ok(Self::Auto),
            "undefined" | "" => return Ok(Self::Undefined),
            _ => {}
        }
        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(n) => (n.trim_end(), true),
            None => (trimmed, false),
        };
        let v: f32 = number
            .parse()
            .map_err(|_| ParseError::with_input("invalid dimension", s))?;
        Ok(if percent {
            Self::Percent(v)
        } else {
            Self::Fixed(v)
        })
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts the text form or a bare number.
struct DimensionVisitor;

impl Visitor<'_> for DimensionVisitor {
    type Value = Dimension;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number, \"auto\", \"undefined\" or a percentage like \"50%\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
        Ok(Dimension::Fixed(v as f32))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
        Ok(Dimension::Fixed(v as f32))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
        Ok(Dimension::Fixed(v as f32))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Dimension, E> {
        Ok(Dimension::Undefined)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DimensionVisitor)
    }
}
