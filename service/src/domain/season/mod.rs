//! [`Season`] definitions.

pub mod assignment;
pub mod multiplier;

use std::sync::LazyLock;

use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use self::{assignment::Assignment, multiplier::Multiplier};

/// Named pricing period applied to calendar months.
#[derive(Clone, Debug, From)]
pub struct Season {
    /// ID of this [`Season`].
    pub id: Id,

    /// [`Name`] of this [`Season`].
    pub name: Name,

    /// [`Description`] of this [`Season`].
    pub description: Option<Description>,

    /// Display [`Color`] of this [`Season`].
    pub color: Option<Color>,
}

/// ID of a [`Season`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Name of a [`Season`].
///
/// Unique across the whole [`Season`] catalog.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 100
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Description of a [`Season`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        !description.is_empty() && description.len() <= 1000
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Display color of a [`Season`] as a `#RRGGBB` hex string.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Color(String);

impl Color {
    /// Creates a new [`Color`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `color` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    /// Creates a new [`Color`] if the given `color` is valid.
    #[must_use]
    pub fn new(color: impl Into<String>) -> Option<Self> {
        let color = color.into();
        Self::check(&color).then_some(Self(color))
    }

    /// Checks whether the given `color` is a valid [`Color`].
    fn check(color: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Color`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new("^#[0-9a-fA-F]{6}$").expect("valid regex")
        });

        REGEX.is_match(color.as_ref())
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Color`")
    }
}

#[cfg(test)]
mod spec {
    use super::Color;

    #[test]
    fn color_format() {
        assert!(Color::new("#FF8800").is_some());
        assert!(Color::new("#ff8800").is_some());

        assert!(Color::new("FF8800").is_none());
        assert!(Color::new("#FF880").is_none());
        assert!(Color::new("#FF88001").is_none());
        assert!(Color::new("#GG8800").is_none());
    }
}
