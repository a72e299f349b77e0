//! [`Query`] of the full seasonal calendar of a [`Year`].

use common::{
    operations::{By, Select},
    DateTime, Year,
};
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    read,
    Service,
};

use super::Query;

/// [`Query`] of the resolved 12-month seasonal calendar of a single [`Year`].
///
/// Produces exactly one [`MonthEntry`] per calendar month in ascending
/// order, no matter how sparse the underlying configuration is. Pure read:
/// no mutation, idempotent for identical inputs and database state.
///
/// [`MonthEntry`]: read::calendar::MonthEntry
#[derive(Clone, Copy, Debug)]
pub struct CalendarOfYear {
    /// [`Year`] to build the calendar of.
    pub year: Year,
}

impl<Db> Query<CalendarOfYear> for Service<Db>
where
    Db: Database<
        Select<By<Vec<read::calendar::ConfiguredMonth>, Year>>,
        Ok = Vec<read::calendar::ConfiguredMonth>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<read::calendar::MonthEntry>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: CalendarOfYear,
    ) -> Result<Self::Ok, Self::Err> {
        let configured = self
            .database()
            .execute(Select(By::new(query.year)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::calendar::of_year(configured, DateTime::now()))
    }
}
