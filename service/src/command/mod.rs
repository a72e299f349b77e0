//! [`Command`] definition.

pub mod assign_season_month;
pub mod assign_season_months;
pub mod authorize_user_session;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    assign_season_month::AssignSeasonMonth,
    assign_season_months::AssignSeasonMonths,
    authorize_user_session::AuthorizeUserSession,
};
