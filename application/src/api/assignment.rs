//! Season assignment related definitions.

use axum::Json;
use common::{Handler as _, Month, Year};
use serde::{Deserialize, Serialize};
use service::command::{
    self,
    assign_season_months::{self, MonthUpdate},
};

use crate::{api, define_error, AsError, Context, Error};

use super::calendar;

/// Body of an [`assign_month()`] request.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AssignMonthRequest {
    /// Year the assigned month belongs to.
    pub year: i32,

    /// Number of the month (`1..=12`) to assign the season to.
    pub month: u8,

    /// ID of the season to assign.
    pub season_id: i32,
}

/// Payload of a successful [`assign_month()`] response.
#[derive(Debug, Serialize)]
pub struct AssignedMonth {
    /// Year the assigned month belongs to.
    pub year: Year,

    /// Resolved entry of the assigned month.
    #[serde(flatten)]
    pub entry: calendar::MonthEntry,
}

/// Handler of the `PUT /season-month` endpoint.
///
/// # Errors
///
/// Errors if:
/// - the request is not authenticated;
/// - the provided year or month is invalid;
/// - the referenced season does not exist.
#[tracing::instrument(skip_all, fields(http.route = "/season-month"))]
pub async fn assign_month(
    ctx: Context,
    Json(body): Json<AssignMonthRequest>,
) -> Result<Json<api::Envelope<AssignedMonth>>, Error> {
    drop(ctx.current_session().await?);

    let year = Year::new(body.year)
        .ok_or_else(|| Error::from(api::ValidationError::Year))?;
    let month = Month::new(body.month)
        .ok_or_else(|| Error::from(api::ValidationError::Month))?;

    let entry = ctx
        .service()
        .execute(command::AssignSeasonMonth {
            year,
            month,
            season_id: body.season_id.into(),
        })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(api::Envelope::ok_with_message(
        AssignedMonth {
            year,
            entry: entry.into(),
        },
        "Season updated successfully",
    )))
}

/// Body of an [`assign_months()`] request.
#[derive(Clone, Debug, Deserialize)]
pub struct AssignMonthsRequest {
    /// Year the assigned months belong to.
    pub year: i32,

    /// Month updates to apply atomically.
    pub updates: Vec<MonthUpdateRequest>,
}

/// Single month update of an [`AssignMonthsRequest`].
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MonthUpdateRequest {
    /// Number of the month (`1..=12`) to assign the season to.
    pub month: u8,

    /// ID of the season to assign.
    pub season_id: i32,
}

/// Payload of a successful [`assign_months()`] response.
///
/// Echoes the applied updates back without re-resolving the multipliers of
/// the touched months: the calendar endpoint serves the resolved view.
#[derive(Debug, Serialize)]
pub struct AssignedMonths {
    /// Number of the applied month updates.
    pub updated_count: usize,

    /// The applied `(month, season)` pairs, as requested.
    pub months: Vec<AppliedUpdate>,
}

/// Echoed `(month, season)` pair applied by a batch assignment.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AppliedUpdate {
    /// Number of the assigned month.
    pub month: Month,

    /// ID of the assigned season.
    pub season_id: i32,
}

impl From<MonthUpdate> for AppliedUpdate {
    fn from(update: MonthUpdate) -> Self {
        Self {
            month: update.month,
            season_id: update.season_id.into(),
        }
    }
}

/// Handler of the `PUT /season-months/batch` endpoint.
///
/// Applies all the provided month updates as one atomic unit: either every
/// listed month is updated, or none is.
///
/// # Errors
///
/// Errors if:
/// - the request is not authenticated;
/// - the provided year or any month is invalid;
/// - the same month is listed more than once;
/// - one or more of the referenced seasons do not exist.
#[tracing::instrument(skip_all, fields(http.route = "/season-months/batch"))]
pub async fn assign_months(
    ctx: Context,
    Json(body): Json<AssignMonthsRequest>,
) -> Result<Json<api::Envelope<AssignedMonths>>, Error> {
    drop(ctx.current_session().await?);

    let year = Year::new(body.year)
        .ok_or_else(|| Error::from(api::ValidationError::Year))?;
    let updates = body
        .updates
        .into_iter()
        .map(|update| {
            Month::new(update.month)
                .map(|month| MonthUpdate {
                    month,
                    season_id: update.season_id.into(),
                })
                .ok_or_else(|| Error::from(api::ValidationError::Month))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let applied = ctx
        .service()
        .execute(command::AssignSeasonMonths { year, updates })
        .await
        .map_err(AsError::into_error)?;

    let message =
        format!("{} months updated successfully", applied.updated_count);
    Ok(Json(api::Envelope::ok_with_message(
        AssignedMonths {
            updated_count: applied.updated_count,
            months: applied.months.into_iter().map(Into::into).collect(),
        },
        message,
    )))
}

impl AsError for command::assign_season_month::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::SeasonNotExists(_) => {
                Some(AssignError::SeasonNotFound.into())
            }
        }
    }
}

impl AsError for assign_season_months::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NoUpdates => Some(AssignError::NoUpdates.into()),
            Self::SeasonsNotExist => Some(AssignError::SeasonsNotFound.into()),
            Self::DuplicatedMonth(_) => {
                Some(AssignError::DuplicatedMonths.into())
            }
        }
    }
}

define_error! {
    enum AssignError {
        #[code = "SEASON_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Season not found"]
        SeasonNotFound,

        #[code = "SEASONS_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "One or more seasons do not exist"]
        SeasonsNotFound,

        #[code = "DUPLICATED_MONTHS"]
        #[status = BAD_REQUEST]
        #[message = "Cannot update the same month multiple times \
                     in one request"]
        DuplicatedMonths,

        #[code = "NO_UPDATES"]
        #[status = BAD_REQUEST]
        #[message = "No month updates provided"]
        NoUpdates,
    }
}
