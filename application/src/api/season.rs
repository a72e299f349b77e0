//! Season catalog related definitions.

use axum::Json;
use common::Handler as _;
use serde::Serialize;
use service::{query, read};

use crate::{api, AsError, Context, Error};

/// Season type with its effective price [`Multipliers`].
///
/// [`Multipliers`]: api::Multipliers
#[derive(Debug, Serialize)]
pub struct SeasonType {
    /// ID of the season.
    pub id: i32,

    /// Unique name of the season.
    pub name: String,

    /// Description of the season, if any.
    pub description: Option<String>,

    /// Display color of the season, if any.
    pub color: Option<String>,

    /// Effective price [`Multipliers`] of the season.
    ///
    /// [`Multipliers`]: api::Multipliers
    pub multipliers: api::Multipliers,
}

impl From<read::season::WithFactors> for SeasonType {
    fn from(season: read::season::WithFactors) -> Self {
        Self {
            id: season.season.id.into(),
            name: season.season.name.to_string(),
            description: season
                .season
                .description
                .map(|description| description.to_string()),
            color: season.season.color.map(|color| color.to_string()),
            multipliers: season.factors.into(),
        }
    }
}

/// Payload of a successful [`list_season_types()`] response.
#[derive(Debug, Serialize)]
pub struct SeasonTypes {
    /// All the [`SeasonType`]s, ordered by name ascending.
    pub seasons: Vec<SeasonType>,
}

/// Handler of the `GET /season-types` endpoint.
///
/// # Errors
///
/// Errors if the request is not authenticated.
#[tracing::instrument(skip_all, fields(http.route = "/season-types"))]
pub async fn list_season_types(
    ctx: Context,
) -> Result<Json<api::Envelope<SeasonTypes>>, Error> {
    drop(ctx.current_session().await?);

    let seasons = ctx
        .service()
        .execute(query::season::List::by(()))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(api::Envelope::ok(SeasonTypes {
        seasons: seasons.into_iter().map(Into::into).collect(),
    })))
}
