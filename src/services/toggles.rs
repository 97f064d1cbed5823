// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Technique toggle state ("is rest-pause on for set 2 of exercise 1?").
//!
//! Toggles are reconstructed from saved data on load and then driven by the
//! user while editing. Coordinates missing from the map read as disabled.

use std::collections::HashMap;

use crate::models::{ExerciseConfigItem, SetConfig};

/// Optional set-extension technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    RestPause,
    DropSet,
    Partials,
}

impl Technique {
    pub const ALL: [Technique; 3] = [Technique::RestPause, Technique::DropSet, Technique::Partials];

    /// Short tag shown on the toggle buttons.
    pub fn tag(self) -> &'static str {
        match self {
            Technique::RestPause => "RP",
            Technique::DropSet => "DS",
            Technique::Partials => "P",
        }
    }

    /// Whether the set carries data for this technique.
    ///
    /// Lists count only when non-empty; partials count when present at all.
    pub fn has_data(self, set: &SetConfig) -> bool {
        match self {
            Technique::RestPause => set.rp.as_ref().is_some_and(|rp| !rp.is_empty()),
            Technique::DropSet => set.ds.as_ref().is_some_and(|ds| !ds.is_empty()),
            Technique::Partials => set.partials.is_some(),
        }
    }
}

/// Position of one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleKey {
    pub exercise: usize,
    pub set: usize,
    pub technique: Technique,
}

impl ToggleKey {
    pub fn new(exercise: usize, set: usize, technique: Technique) -> Self {
        Self {
            exercise,
            set,
            technique,
        }
    }
}

/// Sparse toggle map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechniqueToggles {
    flags: HashMap<ToggleKey, bool>,
}

impl TechniqueToggles {
    /// Reconstruct toggles from a saved configuration.
    pub fn derive(exercises: &[ExerciseConfigItem]) -> Self {
        let flags = exercises
            .iter()
            .enumerate()
            .flat_map(|(exercise, item)| {
                item.sets_config
                    .iter()
                    .enumerate()
                    .flat_map(move |(set, config)| {
                        Technique::ALL.into_iter().map(move |technique| {
                            (
                                ToggleKey::new(exercise, set, technique),
                                technique.has_data(config),
                            )
                        })
                    })
            })
            .collect();

        Self { flags }
    }

    pub fn is_enabled(&self, key: ToggleKey) -> bool {
        self.flags.get(&key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: ToggleKey, enabled: bool) {
        self.flags.insert(key, enabled);
    }

    pub fn enabled_keys(&self) -> impl Iterator<Item = ToggleKey> + '_ {
        self.flags
            .iter()
            .filter_map(|(key, &enabled)| enabled.then_some(*key))
    }

    pub fn any_enabled(&self) -> bool {
        self.flags.values().any(|&enabled| enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DsDetail, Measure, PartialDetail, RpDetail};

    fn item(sets: Vec<SetConfig>) -> ExerciseConfigItem {
        ExerciseConfigItem {
            exercise_id: 1,
            exercise_name: "Curl".to_string(),
            exercise_image: None,
            order_index: 0,
            sets_config: sets,
            notes: String::new(),
        }
    }

    fn with_techniques() -> SetConfig {
        SetConfig {
            reps: "10".to_string(),
            weight: "20".to_string(),
            rir: "1".to_string(),
            rp: Some(vec![RpDetail {
                value: Some(Measure::from("4")),
                time: Some(Measure::from(15)),
            }]),
            ds: Some(vec![DsDetail::default()]),
            partials: Some(PartialDetail::default()),
        }
    }

    #[test]
    fn test_derive_flags_by_data() {
        let exercises = vec![
            item(vec![SetConfig::template_default(), with_techniques()]),
            item(vec![SetConfig::default()]),
        ];
        let toggles = TechniqueToggles::derive(&exercises);

        for technique in Technique::ALL {
            assert!(!toggles.is_enabled(ToggleKey::new(0, 0, technique)));
            assert!(toggles.is_enabled(ToggleKey::new(0, 1, technique)));
            assert!(!toggles.is_enabled(ToggleKey::new(1, 0, technique)));
        }
        assert_eq!(toggles.enabled_keys().count(), 3);
    }

    #[test]
    fn test_empty_partials_object_counts_as_enabled() {
        let set = SetConfig {
            partials: Some(PartialDetail { reps: None }),
            ..SetConfig::default()
        };
        let toggles = TechniqueToggles::derive(&[item(vec![set])]);
        assert!(toggles.is_enabled(ToggleKey::new(0, 0, Technique::Partials)));
        assert!(!toggles.is_enabled(ToggleKey::new(0, 0, Technique::RestPause)));
    }

    #[test]
    fn test_derive_clear_derive_is_all_false() {
        let mut exercises = vec![item(vec![with_techniques(), with_techniques()])];
        let toggles = TechniqueToggles::derive(&exercises);

        for key in toggles.enabled_keys() {
            let set = &mut exercises[key.exercise].sets_config[key.set];
            match key.technique {
                Technique::RestPause => set.rp = Some(vec![]),
                Technique::DropSet => set.ds = None,
                Technique::Partials => set.partials = None,
            }
        }

        assert!(!TechniqueToggles::derive(&exercises).any_enabled());
    }

    #[test]
    fn test_unknown_coordinate_is_disabled() {
        let mut toggles = TechniqueToggles::default();
        let key = ToggleKey::new(3, 4, Technique::DropSet);
        assert!(!toggles.is_enabled(key));
        toggles.set(key, true);
        assert!(toggles.is_enabled(key));
    }

    #[test]
    fn test_tags() {
        let tags: Vec<&str> = Technique::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(tags, vec!["RP", "DS", "P"]);
    }
}
