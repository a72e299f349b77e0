//! [`Month`]-related definitions.

use std::{fmt, str::FromStr};

#[cfg(feature = "postgres")]
use std::error::Error as StdError;

#[cfg(feature = "postgres")]
use postgres_types::{
    accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type,
};

/// Calendar month number, bounded to `1..=12`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month(u8);

impl Month {
    /// All the 12 [`Month`]s in calendar order.
    pub const ALL: [Self; 12] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
    ];

    /// Fixed table of localized [`Month`] names.
    const NAMES: [&'static str; 12] = [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ];

    /// Creates a new [`Month`] by checking the provided number is in the
    /// `1..=12` range.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Returns the number of this [`Month`] (`1..=12`).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns the localized display name of this [`Month`].
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES[usize::from(self.0 - 1)]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid month number")
    }
}

#[cfg(feature = "postgres")]
impl FromSql<'_> for Month {
    accepts!(INT2);

    fn from_sql(
        ty: &Type,
        raw: &[u8],
    ) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        let number = u8::try_from(i16::from_sql(ty, raw)?)?;
        Self::new(number)
            .ok_or_else(|| format!("invalid `Month` value: {number}").into())
    }
}

#[cfg(feature = "postgres")]
impl ToSql for Month {
    accepts!(INT2);
    to_sql_checked!();

    fn to_sql(
        &self,
        ty: &Type,
        w: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        i16::from(self.0).to_sql(ty, w)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Month;

    impl Serialize for Month {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_u8(self.number())
        }
    }

    impl<'de> Deserialize<'de> for Month {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let number = u8::deserialize(deserializer)?;
            Self::new(number).ok_or_else(|| {
                D::Error::custom(format!("invalid month number: {number}"))
            })
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Month;

    #[test]
    fn bounds() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        assert_eq!(Month::new(1).unwrap().number(), 1);
        assert_eq!(Month::new(12).unwrap().number(), 12);
    }

    #[test]
    fn all_is_ascending_and_complete() {
        assert_eq!(Month::ALL.len(), 12);
        for (i, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(month.number()), i + 1);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Month::new(1).unwrap().name(), "Enero");
        assert_eq!(Month::new(9).unwrap().name(), "Septiembre");
        assert_eq!(Month::new(12).unwrap().name(), "Diciembre");
    }
}
