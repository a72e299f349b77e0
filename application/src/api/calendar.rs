//! Seasonal calendar related definitions.

use axum::{extract::Query, Json};
use common::{DateTime, Factor, Handler as _, Month, Year};
use serde::{Deserialize, Serialize};
use service::{query, read};

use crate::{api, AsError, Context, Error};

/// Effective price multipliers of a calendar month or a season.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Multipliers {
    /// Multiplier applied to rental prices.
    pub rental: Factor,

    /// Multiplier applied to sale prices.
    pub sale: Factor,
}

impl From<read::season::Factors> for Multipliers {
    fn from(factors: read::season::Factors) -> Self {
        Self {
            rental: factors.rental,
            sale: factors.sale,
        }
    }
}

/// Single resolved month entry of the seasonal calendar.
#[derive(Debug, Serialize)]
pub struct MonthEntry {
    /// Number of the month (`1..=12`).
    pub month: Month,

    /// Localized display name of the month.
    pub name: &'static str,

    /// ID of the assigned season, if any.
    pub season_id: Option<i32>,

    /// Name of the assigned season, if any.
    pub season_name: Option<String>,

    /// Display color of the assigned season, if any.
    pub color: Option<String>,

    /// Effective price [`Multipliers`] of the month.
    pub multipliers: Multipliers,
}

impl From<read::calendar::MonthEntry> for MonthEntry {
    fn from(entry: read::calendar::MonthEntry) -> Self {
        let (season_id, season_name, color) =
            entry.season.map_or((None, None, None), |season| {
                (
                    Some(season.id.into()),
                    Some(season.name.to_string()),
                    season.color.map(|color| color.to_string()),
                )
            });

        Self {
            month: entry.month,
            name: entry.month.name(),
            season_id,
            season_name,
            color,
            multipliers: entry.factors.into(),
        }
    }
}

/// Payload of a successful [`get_calendar()`] response.
#[derive(Debug, Serialize)]
pub struct Calendar {
    /// Year the calendar is built for.
    pub year: Year,

    /// The 12 resolved [`MonthEntry`]s of the year, month-ascending.
    pub months: Vec<MonthEntry>,
}

/// Query parameters of the [`get_calendar()`] handler.
#[derive(Debug, Deserialize)]
pub struct Params {
    /// Year to build the calendar for.
    ///
    /// Defaults to the current year.
    pub year: Option<String>,
}

/// Handler of the `GET /season-calendar` endpoint.
///
/// # Errors
///
/// Errors if the request is not authenticated, or the provided year is
/// invalid.
#[tracing::instrument(skip_all, fields(http.route = "/season-calendar"))]
pub async fn get_calendar(
    ctx: Context,
    Query(params): Query<Params>,
) -> Result<Json<api::Envelope<Calendar>>, Error> {
    drop(ctx.current_session().await?);

    let year = match params.year {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::from(api::ValidationError::Year))?,
        None => Year::new(DateTime::now().year())
            .ok_or_else(|| Error::from(api::ValidationError::Year))?,
    };

    let months = ctx
        .service()
        .execute(query::CalendarOfYear { year })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(api::Envelope::ok(Calendar {
        year,
        months: months.into_iter().map(Into::into).collect(),
    })))
}

#[cfg(test)]
mod spec {
    use common::Month;
    use service::read;

    use super::MonthEntry;

    #[test]
    fn unassigned_entry_serializes_with_nulls() {
        let entry = MonthEntry::from(read::calendar::MonthEntry::unassigned(
            Month::new(1).unwrap(),
        ));

        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            serde_json::json!({
                "month": 1,
                "name": "Enero",
                "season_id": null,
                "season_name": null,
                "color": null,
                "multipliers": {"rental": 1.0, "sale": 1.0},
            }),
        );
    }
}
