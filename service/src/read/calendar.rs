//! Calendar read model definitions.

use std::collections::HashMap;

use common::{DateTime, Month};

use crate::domain::{season, Season};

use super::season::Factors;

/// [`Season`] data of an assigned calendar month.
#[derive(Clone, Debug)]
pub struct AssignedSeason {
    /// ID of the assigned [`Season`].
    pub id: season::Id,

    /// [`season::Name`] of the assigned [`Season`].
    pub name: season::Name,

    /// Display [`season::Color`] of the assigned [`Season`].
    pub color: Option<season::Color>,
}

impl From<Season> for AssignedSeason {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            name: season.name,
            color: season.color,
        }
    }
}

/// Resolved calendar cell of a single [`Month`].
#[derive(Clone, Debug)]
pub struct MonthEntry {
    /// [`Month`] this entry is about.
    pub month: Month,

    /// [`Season`] assigned to the [`Month`], if any.
    pub season: Option<AssignedSeason>,

    /// Effective [`Factors`] of the [`Month`].
    pub factors: Factors,
}

impl MonthEntry {
    /// Creates a new default [`MonthEntry`] of a [`Month`] no [`Season`] is
    /// assigned to: no season data and neutral [`Factors`].
    #[must_use]
    pub const fn unassigned(month: Month) -> Self {
        Self {
            month,
            season: None,
            factors: Factors::NEUTRAL,
        }
    }
}

/// [`Month`] of a [`Year`] configured with a [`Season`], along with the
/// [`Season`]'s [`Multiplier`]s, as stored.
///
/// [`Multiplier`]: season::Multiplier
/// [`Year`]: common::Year
#[derive(Clone, Debug)]
pub struct ConfiguredMonth {
    /// Configured [`Month`].
    pub month: Month,

    /// [`Season`] the [`Month`] is configured with.
    pub season: Season,

    /// [`Multiplier`]s of the [`Season`].
    ///
    /// [`Multiplier`]: season::Multiplier
    pub multipliers: Vec<season::Multiplier>,
}

/// Builds the full 12-entry calendar view from the provided sparsely
/// [`ConfiguredMonth`]s.
///
/// Emits exactly one [`MonthEntry`] per calendar [`Month`] in ascending
/// order, filling months missing from the configuration with the default
/// [`MonthEntry::unassigned()`] entry.
#[must_use]
pub fn of_year(
    configured: Vec<ConfiguredMonth>,
    at: DateTime,
) -> Vec<MonthEntry> {
    let mut by_month: HashMap<_, _> =
        configured.into_iter().map(|c| (c.month, c)).collect();

    Month::ALL
        .into_iter()
        .map(|month| {
            by_month.remove(&month).map_or_else(
                || MonthEntry::unassigned(month),
                |configured| MonthEntry {
                    month,
                    factors: Factors::resolve(&configured.multipliers, at),
                    season: Some(configured.season.into()),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Factor, Month};

    use crate::domain::season::{
        multiplier::{Kind, Multiplier},
        Season,
    };
    use crate::read::season::Factors;

    use super::{of_year, ConfiguredMonth, MonthEntry};

    fn month(number: u8) -> Month {
        Month::new(number).unwrap()
    }

    fn season(id: i32, name: &str) -> Season {
        Season {
            id: id.into(),
            name: name.parse().unwrap(),
            description: None,
            color: Some("#AA5500".parse().unwrap()),
        }
    }

    fn multiplier(id: i32, kind: Kind, factor: &str) -> Multiplier {
        Multiplier {
            id: id.into(),
            season_id: 1.into(),
            kind,
            factor: factor.parse().unwrap(),
            is_active: true,
            ends_at: None,
        }
    }

    #[test]
    fn unassigned_entry_is_neutral() {
        let entry = MonthEntry::unassigned(month(3));

        assert_eq!(entry.month, month(3));
        assert!(entry.season.is_none());
        assert_eq!(entry.factors, Factors::NEUTRAL);
    }

    #[test]
    fn empty_configuration_yields_12_default_entries() {
        let entries = of_year(vec![], DateTime::now());

        assert_eq!(entries.len(), 12);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(usize::from(entry.month.number()), i + 1);
            assert!(entry.season.is_none());
            assert_eq!(entry.factors, Factors::NEUTRAL);
        }
    }

    #[test]
    fn configured_months_are_resolved_in_place() {
        let entries = of_year(
            vec![
                ConfiguredMonth {
                    month: month(12),
                    season: season(1, "Alta"),
                    multipliers: vec![
                        multiplier(1, Kind::Rental, "1.15"),
                        multiplier(2, Kind::Sale, "1.05"),
                    ],
                },
                ConfiguredMonth {
                    month: month(2),
                    season: season(1, "Alta"),
                    multipliers: vec![],
                },
            ],
            DateTime::now(),
        );

        assert_eq!(entries.len(), 12);

        let december = &entries[11];
        let assigned = december.season.as_ref().unwrap();
        assert_eq!(i32::from(assigned.id), 1);
        assert_eq!(AsRef::<str>::as_ref(&assigned.name), "Alta");
        assert_eq!(december.factors.rental, "1.15".parse().unwrap());
        assert_eq!(december.factors.sale, "1.05".parse().unwrap());

        let february = &entries[1];
        assert!(february.season.is_some());
        assert_eq!(february.factors, Factors::NEUTRAL);

        for i in [0, 2, 3, 4, 5, 6, 7, 8, 9, 10] {
            assert!(entries[i].season.is_none());
            assert_eq!(entries[i].factors, Factors::NEUTRAL);
        }
    }

    #[test]
    fn missing_kind_falls_back_independently() {
        let entries = of_year(
            vec![ConfiguredMonth {
                month: month(6),
                season: season(2, "Media"),
                multipliers: vec![multiplier(1, Kind::Sale, "1.08")],
            }],
            DateTime::now(),
        );

        let june = &entries[5];
        assert_eq!(june.factors.rental, Factor::NEUTRAL);
        assert_eq!(june.factors.sale, "1.08".parse().unwrap());
    }
}
