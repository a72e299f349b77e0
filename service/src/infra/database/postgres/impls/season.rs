//! [`Season`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    DateTime,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{season, Season},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// `SELECT` clause of [`Season`] rows `LEFT JOIN`ed with their currently
/// effective [`Multiplier`] rows.
///
/// [`Multiplier`]: season::Multiplier
const SELECT_WITH_MULTIPLIERS: &str = "\
    SELECT s.id, s.name, s.description, s.color_hex, \
           m.id AS multiplier_id, m.kind, m.factor, \
           m.is_active, m.ends_at \
    FROM seasons AS s \
    LEFT JOIN season_multipliers AS m \
           ON m.season_id = s.id \
          AND m.is_active \
          AND (m.ends_at IS NULL OR m.ends_at >= NOW())";

/// Collects the provided [`SELECT_WITH_MULTIPLIERS`] rows into
/// [`read::season::WithFactors`], resolving the effective factors at the
/// current moment.
///
/// The rows are expected to keep every [`Season`]'s rows adjacent.
fn collect_seasons(rows: Vec<Row>) -> Vec<read::season::WithFactors> {
    let mut seasons: Vec<(Season, Vec<season::Multiplier>)> = Vec::new();
    for row in rows {
        let id: season::Id = row.get("id");
        if seasons.last().map_or(true, |(s, _)| s.id != id) {
            seasons.push((
                Season {
                    id,
                    name: row.get("name"),
                    description: row.get("description"),
                    color: row.get("color_hex"),
                },
                Vec::new(),
            ));
        }
        if let Some(multiplier_id) =
            row.get::<_, Option<season::multiplier::Id>>("multiplier_id")
        {
            let (_, multipliers) =
                seasons.last_mut().expect("pushed right above");
            multipliers.push(season::Multiplier {
                id: multiplier_id,
                season_id: id,
                kind: row.get("kind"),
                factor: row.get("factor"),
                is_active: row.get("is_active"),
                ends_at: row.get("ends_at"),
            });
        }
    }

    let at = DateTime::now();
    seasons
        .into_iter()
        .map(|(season, multipliers)| read::season::WithFactors {
            factors: read::season::Factors::resolve(&multipliers, at),
            season,
        })
        .collect()
}

impl<C> Database<Select<By<Vec<read::season::WithFactors>, ()>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::season::WithFactors>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<read::season::WithFactors>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "{SELECT_WITH_MULTIPLIERS} \
             ORDER BY s.name ASC, s.id ASC, m.id ASC",
        );
        self.query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())
            .map(collect_seasons)
    }
}

impl<C> Database<Select<By<Option<read::season::WithFactors>, season::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<read::season::WithFactors>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<read::season::WithFactors>, season::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let sql = format!(
            "{SELECT_WITH_MULTIPLIERS} \
             WHERE s.id = $1::INT4 \
             ORDER BY m.id ASC",
        );
        self.query(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(|rows| collect_seasons(rows).into_iter().next())
    }
}

impl<C, IDs> Database<Select<By<HashMap<season::Id, Season>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[season::Id]>,
{
    type Ok = HashMap<season::Id, Season>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<season::Id, Season>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[season::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let limit = i32::try_from(ids.len()).unwrap();

        const SQL: &str = "\
            SELECT id, name, description, color_hex \
            FROM seasons \
            WHERE id IN (SELECT unnest($1::INT4[]) LIMIT $2::INT4) \
            LIMIT $2::INT4";
        Ok(self
            .query(SQL, &[&ids, &limit])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                let id = row.get("id");
                (
                    id,
                    Season {
                        id,
                        name: row.get("name"),
                        description: row.get("description"),
                        color: row.get("color_hex"),
                    },
                )
            })
            .collect())
    }
}
