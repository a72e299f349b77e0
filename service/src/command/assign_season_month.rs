//! [`Command`] for assigning a [`Season`] to a single calendar month.

use common::{
    operations::{By, Select, Upsert},
    Month, Year,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Season;
use crate::{
    domain::{season, season::Assignment},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for assigning a [`Season`] to a single `(year, month)` pair.
///
/// Creates the assignment if the month is not configured yet, or rebinds an
/// existing one to the provided [`Season`], reactivating it.
#[derive(Clone, Copy, Debug)]
pub struct AssignSeasonMonth {
    /// [`Year`] the assigned month belongs to.
    pub year: Year,

    /// Calendar [`Month`] to assign the [`Season`] to.
    pub month: Month,

    /// ID of the [`Season`] to assign.
    pub season_id: season::Id,
}

impl<Db> Command<AssignSeasonMonth> for Service<Db>
where
    Db: Database<
            Select<By<Option<read::season::WithFactors>, season::Id>>,
            Ok = Option<read::season::WithFactors>,
            Err = Traced<database::Error>,
        > + Database<
            Upsert<Assignment>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::calendar::MonthEntry;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AssignSeasonMonth,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AssignSeasonMonth {
            year,
            month,
            season_id,
        } = cmd;

        let season = self
            .database()
            .execute(Select(By::<Option<read::season::WithFactors>, _>::new(
                season_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::SeasonNotExists(season_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Upsert(Assignment::new(year, month, season_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(read::calendar::MonthEntry {
            month,
            season: Some(season.season.into()),
            factors: season.factors,
        })
    }
}

/// Error of [`AssignSeasonMonth`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Season`] with the provided ID does not exist.
    #[display("`Season(id: {_0})` does not exist")]
    SeasonNotExists(#[error(not(source))] season::Id),
}
