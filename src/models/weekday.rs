// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday names and their stable day indices.
//!
//! The schedule uses a Sunday-first week: Domingo=1 through Sábado=7.
//! Two flavors of lookup are provided:
//! - [`Weekday::from_index`] / [`Weekday::from_name`] are strict and return `None`
//!   for anything outside the fixed set.
//! - [`day_name_to_id`] / [`day_id_to_name`] never fail and fall back to Domingo,
//!   so a malformed persisted row still renders in the schedule.

use serde::{Deserialize, Serialize};

/// Day index used when a name cannot be resolved.
pub const FALLBACK_DAY_ID: u8 = 1;

/// Day name used when an index cannot be resolved.
pub const FALLBACK_DAY_NAME: &str = "Domingo";

/// One of the seven schedule days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Domingo,
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
}

impl Weekday {
    /// All days in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Domingo,
        Weekday::Lunes,
        Weekday::Martes,
        Weekday::Miercoles,
        Weekday::Jueves,
        Weekday::Viernes,
        Weekday::Sabado,
    ];

    /// Day index in `1..=7`.
    pub fn index(self) -> u8 {
        match self {
            Weekday::Domingo => 1,
            Weekday::Lunes => 2,
            Weekday::Martes => 3,
            Weekday::Miercoles => 4,
            Weekday::Jueves => 5,
            Weekday::Viernes => 6,
            Weekday::Sabado => 7,
        }
    }

    /// Display name as stored alongside slots and sessions.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Domingo => "Domingo",
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miércoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sábado",
        }
    }

    pub fn from_index(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|day| i64::from(day.index()) == id)
    }

    /// Exact match against the display names (accents included).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == name)
    }
}

/// Map a day name to its index, defaulting to 1 for unknown names.
pub fn day_name_to_id(name: &str) -> u8 {
    match Weekday::from_name(name) {
        Some(day) => day.index(),
        None => {
            tracing::warn!(name, "Unrecognized weekday name, defaulting to Domingo");
            FALLBACK_DAY_ID
        }
    }
}

/// Map a day index to its name, defaulting to "Domingo" for unknown indices.
pub fn day_id_to_name(id: i64) -> &'static str {
    match Weekday::from_index(id) {
        Some(day) => day.name(),
        None => {
            tracing::warn!(id, "Unrecognized weekday index, defaulting to Domingo");
            FALLBACK_DAY_NAME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_days() {
        for id in 1..=7 {
            assert_eq!(i64::from(day_name_to_id(day_id_to_name(id))), id);
        }
    }

    #[test]
    fn test_name_order_is_sunday_first() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado"]
        );
    }

    #[test]
    fn test_unknown_name_defaults_to_one() {
        assert_eq!(day_name_to_id("Xyz"), 1);
        assert_eq!(day_name_to_id(""), 1);
        // Accent-less spelling is not part of the fixed set
        assert_eq!(day_name_to_id("Miercoles"), 1);
    }

    #[test]
    fn test_unknown_id_defaults_to_domingo() {
        assert_eq!(day_id_to_name(99), "Domingo");
        assert_eq!(day_id_to_name(0), "Domingo");
        assert_eq!(day_id_to_name(-3), "Domingo");
    }

    #[test]
    fn test_strict_lookup_rejects_unknown() {
        assert_eq!(Weekday::from_index(8), None);
        assert_eq!(Weekday::from_name("Xyz"), None);
        assert_eq!(Weekday::from_name("Sábado"), Some(Weekday::Sabado));
        assert_eq!(Weekday::from_index(4), Some(Weekday::Miercoles));
    }
}
