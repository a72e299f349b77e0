//! [`Factor`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Price multiplier applied to a base price.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Factor(Decimal);

impl Factor {
    /// Neutral [`Factor`] leaving a base price unchanged.
    pub const NEUTRAL: Self = Self(Decimal::ONE);

    /// Creates a new [`Factor`] by checking the provided value is positive.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val > Decimal::ZERO).then_some(Self(val))
    }

    /// Returns the underlying [`Decimal`] value of this [`Factor`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Default for Factor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl FromStr for Factor {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid factor value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::{prelude::ToPrimitive as _, Decimal};
    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Factor;

    impl Serialize for Factor {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(
                self.value().to_f64().expect("`Factor` fits into an `f64`"),
            )
        }
    }

    impl<'de> Deserialize<'de> for Factor {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Self::new(<Decimal as Deserialize>::deserialize(deserializer)?)
                .ok_or_else(|| D::Error::custom("`Factor` must be positive"))
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Factor;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Factor::from_str("1.15").unwrap().value(),
            decimal("1.15"),
        );
        assert_eq!(Factor::from_str("1").unwrap(), Factor::NEUTRAL);

        assert!(Factor::from_str("0").is_err());
        assert!(Factor::from_str("-0.5").is_err());
        assert!(Factor::from_str("high").is_err());
    }

    #[test]
    fn rejects_non_positive() {
        assert!(Factor::new(decimal("0")).is_none());
        assert!(Factor::new(decimal("-1.10")).is_none());
        assert!(Factor::new(decimal("0.001")).is_some());
    }

    #[test]
    fn neutral_is_one() {
        assert_eq!(Factor::NEUTRAL.value(), Decimal::ONE);
        assert_eq!(Factor::default(), Factor::NEUTRAL);
    }
}
