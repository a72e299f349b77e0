//! [`Query`] collection related to [`Season`]s.
//!
//! [`Season`]: crate::domain::Season

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::season, read};

use super::DatabaseQuery;

/// Queries all the [`Season`]s with their effective [`Factors`], ordered by
/// [`season::Name`] ascending.
///
/// The catalog is small and bounded by the business taxonomy, so no
/// pagination is applied.
///
/// [`Factors`]: read::season::Factors
/// [`Season`]: crate::domain::Season
pub type List = DatabaseQuery<By<Vec<read::season::WithFactors>, ()>>;

/// Queries a single [`Season`] with its effective [`Factors`] by its
/// [`season::Id`].
///
/// [`Factors`]: read::season::Factors
/// [`Season`]: crate::domain::Season
pub type ById =
    DatabaseQuery<By<Option<read::season::WithFactors>, season::Id>>;
