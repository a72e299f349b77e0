//! [`Multiplier`] definitions.

use common::{define_kind, unit, DateTime, DateTimeOf, Factor};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Season;
use crate::domain::season;

/// Price multiplier record of a [`Season`].
///
/// Applies to a single operation [`Kind`] and is optionally time-bounded.
#[derive(Clone, Copy, Debug)]
pub struct Multiplier {
    /// ID of this [`Multiplier`].
    pub id: Id,

    /// ID of the [`Season`] owning this [`Multiplier`].
    pub season_id: season::Id,

    /// Operation [`Kind`] this [`Multiplier`] applies to.
    pub kind: Kind,

    /// [`Factor`] applied to base prices.
    pub factor: Factor,

    /// Indicator whether this [`Multiplier`] is active.
    pub is_active: bool,

    /// [`DateTime`] after which this [`Multiplier`] is not applied anymore.
    ///
    /// [`None`] means an open-ended validity window.
    pub ends_at: Option<ExpirationDateTime>,
}

impl Multiplier {
    /// Indicates whether this [`Multiplier`] is effective at the provided
    /// moment.
    ///
    /// A [`Multiplier`] is effective while it's active and its validity
    /// window hasn't ended yet.
    #[must_use]
    pub fn is_effective(&self, at: DateTime) -> bool {
        self.is_active && self.ends_at.map_or(true, |ends| ends.coerce() >= at)
    }
}

/// ID of a [`Multiplier`].
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

define_kind! {
    #[doc = "Kind of a priced operation a [`Multiplier`] applies to."]
    enum Kind {
        #[doc = "Rental of an asset."]
        Rental = 1,

        #[doc = "Sale of an asset."]
        Sale = 2,
    }
}

/// [`DateTime`] when a [`Multiplier`] validity window ends.
pub type ExpirationDateTime = DateTimeOf<(Multiplier, unit::Expiration)>;
