//! [`Assignment`]-related [`Database`] implementations.

use common::{
    operations::{By, Select, Upsert},
    Month, Year,
};
use tracerr::Traced;

use crate::{
    domain::{
        season::{self, multiplier, Assignment},
        Season,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

impl<C> Database<Upsert<Assignment>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Upsert(assignment): Upsert<Assignment>,
    ) -> Result<Self::Ok, Self::Err> {
        let Assignment {
            year,
            month,
            season_id,
            is_active,
        } = assignment;

        const SQL: &str = "\
            INSERT INTO season_assignments (\
                year, month, season_id, is_active\
            ) \
            VALUES (\
                $1::INT4, $2::INT2, \
                $3::INT4, $4::BOOL\
            ) \
            ON CONFLICT (year, month) DO UPDATE \
            SET season_id = EXCLUDED.season_id, \
                is_active = EXCLUDED.is_active";
        self.exec(SQL, &[&year, &month, &season_id, &is_active])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<Vec<read::calendar::ConfiguredMonth>, Year>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::calendar::ConfiguredMonth>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::calendar::ConfiguredMonth>, Year>>,
    ) -> Result<Self::Ok, Self::Err> {
        let year = by.into_inner();

        const SQL: &str = "\
            SELECT a.month, \
                   s.id AS season_id, s.name, s.description, s.color_hex, \
                   m.id AS multiplier_id, m.kind, m.factor, \
                   m.is_active, m.ends_at \
            FROM season_assignments AS a \
            JOIN seasons AS s \
              ON s.id = a.season_id \
            LEFT JOIN season_multipliers AS m \
                   ON m.season_id = s.id \
                  AND m.is_active \
                  AND (m.ends_at IS NULL OR m.ends_at >= NOW()) \
            WHERE a.year = $1::INT4 \
            ORDER BY a.month ASC, m.id ASC";
        let rows = self.query(SQL, &[&year]).await.map_err(tracerr::wrap!())?;

        let mut configured: Vec<read::calendar::ConfiguredMonth> = Vec::new();
        for row in rows {
            let month: Month = row.get("month");
            if configured.last().map_or(true, |c| c.month != month) {
                configured.push(read::calendar::ConfiguredMonth {
                    month,
                    season: Season {
                        id: row.get("season_id"),
                        name: row.get("name"),
                        description: row.get("description"),
                        color: row.get("color_hex"),
                    },
                    multipliers: Vec::new(),
                });
            }
            if let Some(multiplier_id) =
                row.get::<_, Option<multiplier::Id>>("multiplier_id")
            {
                let last = configured.last_mut().expect("pushed right above");
                last.multipliers.push(season::Multiplier {
                    id: multiplier_id,
                    season_id: last.season.id,
                    kind: row.get("kind"),
                    factor: row.get("factor"),
                    is_active: row.get("is_active"),
                    ends_at: row.get("ends_at"),
                });
            }
        }

        Ok(configured)
    }
}

impl<C>
    Database<
        Select<
            By<Vec<multiplier::Multiplier>, (Year, Month, multiplier::Kind)>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<multiplier::Multiplier>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<multiplier::Multiplier>, (Year, Month, multiplier::Kind)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (year, month, kind) = by.into_inner();

        const SQL: &str = "\
            SELECT m.id, m.season_id, m.kind, m.factor, \
                   m.is_active, m.ends_at \
            FROM season_assignments AS a \
            JOIN season_multipliers AS m \
              ON m.season_id = a.season_id \
            WHERE a.year = $1::INT4 \
              AND a.month = $2::INT2 \
              AND m.kind = $3::INT2";
        Ok(self
            .query(SQL, &[&year, &month, &kind])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| season::Multiplier {
                id: row.get("id"),
                season_id: row.get("season_id"),
                kind: row.get("kind"),
                factor: row.get("factor"),
                is_active: row.get("is_active"),
                ends_at: row.get("ends_at"),
            })
            .collect())
    }
}
