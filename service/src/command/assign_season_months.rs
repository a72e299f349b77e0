//! [`Command`] for assigning [`Season`]s to multiple calendar months at once.

use std::collections::{HashMap, HashSet};

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Upsert},
    Month, Year,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{season, season::Assignment, Season},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for assigning [`Season`]s to multiple months of a single
/// [`Year`] as one atomic unit.
///
/// Either every listed `(month, season)` pair is applied, or none is.
#[derive(Clone, Debug)]
pub struct AssignSeasonMonths {
    /// [`Year`] the assigned months belong to.
    pub year: Year,

    /// [`MonthUpdate`]s to apply.
    pub updates: Vec<MonthUpdate>,
}

/// Single month update of an [`AssignSeasonMonths`] [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthUpdate {
    /// Calendar [`Month`] to assign the [`Season`] to.
    pub month: Month,

    /// ID of the [`Season`] to assign.
    pub season_id: season::Id,
}

/// Result of an [`AssignSeasonMonths`] [`Command`] execution.
///
/// Echoes the applied updates back without re-resolving the multipliers of
/// the touched months: callers re-query the calendar for a resolved view.
#[derive(Clone, Debug)]
pub struct Applied {
    /// Number of the applied [`MonthUpdate`]s.
    pub updated_count: usize,

    /// [`MonthUpdate`]s as they were applied.
    pub months: Vec<MonthUpdate>,
}

impl<Db> Command<AssignSeasonMonths> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<HashMap<season::Id, Season>, Vec<season::Id>>>,
            Ok = HashMap<season::Id, Season>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Upsert<Assignment>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Applied;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AssignSeasonMonths,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AssignSeasonMonths { year, updates } = cmd;

        if updates.is_empty() {
            return Err(tracerr::new!(E::NoUpdates));
        }

        let season_ids = distinct_season_ids(&updates);
        let seasons = self
            .database()
            .execute(Select(By::new(season_ids.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if seasons.len() != season_ids.len() {
            return Err(tracerr::new!(E::SeasonsNotExist));
        }

        if let Some(month) = duplicated_month(&updates) {
            return Err(tracerr::new!(E::DuplicatedMonth(month)));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        for MonthUpdate { month, season_id } in &updates {
            tx.execute(Upsert(Assignment::new(year, *month, *season_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(Applied {
            updated_count: updates.len(),
            months: updates,
        })
    }
}

/// Collects the distinct [`season::Id`]s referenced by the provided
/// [`MonthUpdate`]s, preserving their order of appearance.
fn distinct_season_ids(updates: &[MonthUpdate]) -> Vec<season::Id> {
    let mut seen = HashSet::new();
    updates
        .iter()
        .map(|u| u.season_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Returns the first [`Month`] occurring more than once in the provided
/// [`MonthUpdate`]s, if any.
///
/// This check is request-level: it doesn't depend on the stored state.
fn duplicated_month(updates: &[MonthUpdate]) -> Option<Month> {
    let mut seen = HashSet::new();
    updates.iter().map(|u| u.month).find(|m| !seen.insert(*m))
}

/// Error of [`AssignSeasonMonths`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// No [`MonthUpdate`]s were provided.
    #[display("No month updates provided")]
    NoUpdates,

    /// One or more of the referenced [`Season`]s do not exist.
    #[display("One or more `Season`s do not exist")]
    SeasonsNotExist,

    /// The same [`Month`] is listed more than once.
    #[display("`Month({_0})` is listed more than once")]
    DuplicatedMonth(#[error(not(source))] Month),
}

#[cfg(test)]
mod spec {
    use common::Month;

    use super::{distinct_season_ids, duplicated_month, MonthUpdate};

    fn update(month: u8, season_id: i32) -> MonthUpdate {
        MonthUpdate {
            month: Month::new(month).unwrap(),
            season_id: season_id.into(),
        }
    }

    #[test]
    fn detects_duplicated_month() {
        assert_eq!(
            duplicated_month(&[update(3, 1), update(3, 2)]),
            Month::new(3),
        );
        assert_eq!(
            duplicated_month(&[update(1, 1), update(2, 1), update(1, 2)]),
            Month::new(1),
        );
    }

    #[test]
    fn accepts_distinct_months() {
        assert_eq!(duplicated_month(&[]), None);
        assert_eq!(
            duplicated_month(&[update(12, 1), update(1, 1), update(2, 1)]),
            None,
        );
    }

    #[test]
    fn season_ids_are_deduplicated() {
        assert_eq!(
            distinct_season_ids(&[
                update(1, 2),
                update(2, 1),
                update(3, 2),
                update(4, 1),
            ]),
            vec![2.into(), 1.into()],
        );
    }
}
