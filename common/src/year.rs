//! [`Year`]-related definitions.

use std::{fmt, str::FromStr};

#[cfg(feature = "postgres")]
use std::error::Error as StdError;

#[cfg(feature = "postgres")]
use postgres_types::{
    accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type,
};

/// Calendar year, bounded to the `2000..=2100` range the system operates on.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Year(i32);

impl Year {
    /// Minimum supported [`Year`].
    pub const MIN: Self = Self(2000);

    /// Maximum supported [`Year`].
    pub const MAX: Self = Self(2100);

    /// Creates a new [`Year`] by checking the provided number is in the
    /// supported range.
    #[must_use]
    pub fn new(number: i32) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Self(number))
    }

    /// Returns the number of this [`Year`].
    #[must_use]
    pub const fn number(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid year")
    }
}

#[cfg(feature = "postgres")]
impl FromSql<'_> for Year {
    accepts!(INT4);

    fn from_sql(
        ty: &Type,
        raw: &[u8],
    ) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        let number = i32::from_sql(ty, raw)?;
        Self::new(number)
            .ok_or_else(|| format!("invalid `Year` value: {number}").into())
    }
}

#[cfg(feature = "postgres")]
impl ToSql for Year {
    accepts!(INT4);
    to_sql_checked!();

    fn to_sql(
        &self,
        ty: &Type,
        w: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        self.0.to_sql(ty, w)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Year;

    impl Serialize for Year {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_i32(self.number())
        }
    }

    impl<'de> Deserialize<'de> for Year {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let number = i32::deserialize(deserializer)?;
            Self::new(number).ok_or_else(|| {
                D::Error::custom(format!("year out of range: {number}"))
            })
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Year;

    #[test]
    fn bounds() {
        assert!(Year::new(1999).is_none());
        assert!(Year::new(2101).is_none());
        assert_eq!(Year::new(2000), Some(Year::MIN));
        assert_eq!(Year::new(2100), Some(Year::MAX));
        assert_eq!(Year::new(2025).unwrap().number(), 2025);
    }
}
