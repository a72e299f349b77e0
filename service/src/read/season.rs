//! [`Season`] read model definitions.
//!
//! [`Season`]: crate::domain::Season

use common::{DateTime, Factor};

use crate::domain::{season::multiplier, Season};

/// Effective rental/sale [`Factor`]s of a [`Season`].
///
/// [`Season`]: crate::domain::Season
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Factors {
    /// [`Factor`] applied to rental prices.
    pub rental: Factor,

    /// [`Factor`] applied to sale prices.
    pub sale: Factor,
}

impl Factors {
    /// Neutral [`Factors`] leaving base prices unchanged.
    pub const NEUTRAL: Self = Self {
        rental: Factor::NEUTRAL,
        sale: Factor::NEUTRAL,
    };

    /// Resolves the effective [`Factors`] from the provided [`Multiplier`]s
    /// at the given moment.
    ///
    /// Each operation kind is resolved independently, falling back to the
    /// neutral [`Factor`] when no effective [`Multiplier`] of that kind
    /// exists.
    ///
    /// [`Multiplier`]: multiplier::Multiplier
    #[must_use]
    pub fn resolve(
        multipliers: &[multiplier::Multiplier],
        at: DateTime,
    ) -> Self {
        Self {
            rental: effective(multipliers, multiplier::Kind::Rental, at),
            sale: effective(multipliers, multiplier::Kind::Sale, at),
        }
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Picks the effective [`Factor`] of the provided operation [`Kind`] from the
/// given [`Multiplier`]s at the given moment.
///
/// The storage layer doesn't enforce a single effective [`Multiplier`] per
/// `(season, kind)` pair, so when several exist, the one with the highest ID
/// (the most recently created one) wins.
///
/// [`Kind`]: multiplier::Kind
/// [`Multiplier`]: multiplier::Multiplier
#[must_use]
pub fn effective(
    multipliers: &[multiplier::Multiplier],
    kind: multiplier::Kind,
    at: DateTime,
) -> Factor {
    multipliers
        .iter()
        .filter(|m| m.kind == kind && m.is_effective(at))
        .max_by_key(|m| m.id)
        .map_or(Factor::NEUTRAL, |m| m.factor)
}

/// [`Season`] along with its effective [`Factors`].
#[derive(Clone, Debug)]
pub struct WithFactors {
    /// [`Season`] itself.
    pub season: Season,

    /// Effective [`Factors`] of the [`Season`].
    pub factors: Factors,
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Factor};

    use crate::domain::season::multiplier::{Kind, Multiplier};

    use super::{effective, Factors};

    fn factor(s: &str) -> Factor {
        s.parse().unwrap()
    }

    fn multiplier(id: i32, kind: Kind, factor_str: &str) -> Multiplier {
        Multiplier {
            id: id.into(),
            season_id: 1.into(),
            kind,
            factor: factor(factor_str),
            is_active: true,
            ends_at: None,
        }
    }

    #[test]
    fn neutral_when_no_multipliers() {
        assert_eq!(Factors::resolve(&[], DateTime::now()), Factors::NEUTRAL);
    }

    #[test]
    fn kinds_resolve_independently() {
        let resolved = Factors::resolve(
            &[multiplier(1, Kind::Rental, "1.15")],
            DateTime::now(),
        );

        assert_eq!(resolved.rental, factor("1.15"));
        assert_eq!(resolved.sale, Factor::NEUTRAL);
    }

    #[test]
    fn inactive_multiplier_is_not_effective() {
        let mut m = multiplier(1, Kind::Sale, "1.20");
        m.is_active = false;

        assert_eq!(
            effective(&[m], Kind::Sale, DateTime::now()),
            Factor::NEUTRAL,
        );
    }

    #[test]
    fn expired_multiplier_is_not_effective() {
        let mut m = multiplier(1, Kind::Sale, "1.20");
        m.ends_at = Some(DateTime::UNIX_EPOCH.coerce());

        assert_eq!(
            effective(&[m], Kind::Sale, DateTime::now()),
            Factor::NEUTRAL,
        );
    }

    #[test]
    fn open_ended_multiplier_is_effective() {
        assert_eq!(
            effective(
                &[multiplier(1, Kind::Rental, "1.10")],
                Kind::Rental,
                DateTime::now(),
            ),
            factor("1.10"),
        );
    }

    #[test]
    fn highest_id_wins_the_tie_break() {
        let resolved = effective(
            &[
                multiplier(3, Kind::Rental, "1.30"),
                multiplier(7, Kind::Rental, "1.70"),
                multiplier(5, Kind::Rental, "1.50"),
            ],
            Kind::Rental,
            DateTime::now(),
        );

        assert_eq!(resolved, factor("1.70"));
    }
}
