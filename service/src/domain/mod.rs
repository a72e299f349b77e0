//! Domain definitions.

pub mod season;
pub mod user;

pub use self::{season::Season, user::User};
