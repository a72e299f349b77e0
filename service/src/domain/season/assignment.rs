//! [`Assignment`] definitions.

use common::{Month, Year};

#[cfg(doc)]
use crate::domain::Season;
use crate::domain::season;

/// Binding of a single calendar month of a specific [`Year`] to a [`Season`].
///
/// At most one [`Assignment`] exists per `(year, month)` pair, enforced by a
/// storage-level uniqueness constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    /// [`Year`] the assigned month belongs to.
    pub year: Year,

    /// Assigned calendar [`Month`].
    pub month: Month,

    /// ID of the assigned [`Season`].
    pub season_id: season::Id,

    /// Indicator whether this [`Assignment`] is active.
    pub is_active: bool,
}

impl Assignment {
    /// Creates a new active [`Assignment`] of the provided [`Season`] to the
    /// given `(year, month)` pair.
    #[must_use]
    pub const fn new(year: Year, month: Month, season_id: season::Id) -> Self {
        Self {
            year,
            month,
            season_id,
            is_active: true,
        }
    }
}
