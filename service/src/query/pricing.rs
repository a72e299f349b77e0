//! [`Query`] resolving the effective price [`Factor`] at a moment in time.

use common::{
    operations::{By, Select},
    DateTime, Factor, Month, Year,
};
use tracerr::Traced;

use crate::{
    domain::season::multiplier,
    infra::{database, Database},
    read,
    Service,
};

use super::Query;

/// [`Query`] resolving the effective price [`Factor`] applied to the
/// provided operation [`Kind`] at the given moment.
///
/// Line-item creation of sales and rentals relies on this contract: when the
/// moment's `(year, month)` pair has no season assigned, or the assigned
/// season has no effective [`Multiplier`] of the [`Kind`], the neutral
/// [`Factor`] is resolved.
///
/// [`Kind`]: multiplier::Kind
/// [`Multiplier`]: multiplier::Multiplier
#[derive(Clone, Copy, Debug)]
pub struct EffectiveFactor {
    /// Moment in time to resolve the [`Factor`] at.
    pub at: DateTime,

    /// Operation [`Kind`] to resolve the [`Factor`] for.
    pub kind: multiplier::Kind,
}

impl<Db> Query<EffectiveFactor> for Service<Db>
where
    Db: Database<
        Select<
            By<Vec<multiplier::Multiplier>, (Year, Month, multiplier::Kind)>,
        >,
        Ok = Vec<multiplier::Multiplier>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Factor;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: EffectiveFactor,
    ) -> Result<Self::Ok, Self::Err> {
        let EffectiveFactor { at, kind } = query;

        // Moments outside of the supported calendar range cannot have any
        // season assigned.
        let (Some(year), Some(month)) =
            (Year::new(at.year()), Month::new(at.month()))
        else {
            return Ok(Factor::NEUTRAL);
        };

        let multipliers = self
            .database()
            .execute(Select(By::new((year, month, kind))))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::season::effective(&multipliers, kind, at))
    }
}
