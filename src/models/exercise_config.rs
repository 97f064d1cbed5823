// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-exercise set prescriptions stored on a week slot.
//!
//! The three optional techniques keep the distinction between a field that is
//! absent (technique not used) and one that is present but empty (toggled on,
//! not yet filled in). Both `rp` and `ds` are `Option<Vec<_>>` for that reason.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Free-form value entered by the user for a technique detail.
///
/// Clients send either a number (`60`) or text (`"8"`); both are kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(serde_json::Number),
    Text(String),
}

impl Measure {
    /// Whether the user actually entered something.
    pub fn is_filled(&self) -> bool {
        match self {
            Measure::Number(_) => true,
            Measure::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl From<&str> for Measure {
    fn from(text: &str) -> Self {
        Measure::Text(text.to_string())
    }
}

impl From<u32> for Measure {
    fn from(n: u32) -> Self {
        Measure::Number(n.into())
    }
}

pub(crate) fn measure_filled(measure: &Option<Measure>) -> bool {
    measure.as_ref().is_some_and(Measure::is_filled)
}

/// Rest-pause extension: one entry per mini-set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RpDetail {
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub value: Option<Measure>,
    /// Rest before the mini-set, in seconds
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub time: Option<Measure>,
}

/// Drop-set extension: reps performed at a reduced weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DsDetail {
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub reps: Option<Measure>,
    #[serde(default, rename = "peso")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub weight: Option<Measure>,
}

/// Partial-reps extension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PartialDetail {
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub reps: Option<Measure>,
}

/// Prescription for a single set.
///
/// `reps`, `weight` and `rir` are textual; an empty string means unset, not zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SetConfig {
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub weight: String,
    /// Reps in reserve
    #[serde(default)]
    pub rir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rp: Option<Vec<RpDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds: Option<Vec<DsDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partials: Option<PartialDetail>,
}

impl SetConfig {
    /// Default prescription seeded from a training-day template.
    pub fn template_default() -> Self {
        Self {
            reps: "0".to_string(),
            weight: "0".to_string(),
            rir: "0".to_string(),
            rp: Some(Vec::new()),
            ds: Some(Vec::new()),
            partials: None,
        }
    }
}

/// One exercise in a week slot's configuration.
///
/// Always replaced wholesale on update, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseConfigItem {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub exercise_id: u64,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_image: Option<String>,
    /// Display and submission order within the slot
    pub order_index: u32,
    #[serde(default)]
    pub sets_config: Vec<SetConfig>,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_techniques_survive_serde() {
        let json = r#"{"reps":"10","weight":"50","rir":"2","rp":[]}"#;
        let set: SetConfig = serde_json::from_str(json).unwrap();

        assert_eq!(set.rp, Some(vec![]));
        assert_eq!(set.ds, None);
        assert_eq!(set.partials, None);

        let back = serde_json::to_value(&set).unwrap();
        assert_eq!(back["rp"], serde_json::json!([]));
        assert!(back.get("ds").is_none());
        assert!(back.get("partials").is_none());
    }

    #[test]
    fn test_measure_accepts_numbers_and_text() {
        let detail: RpDetail = serde_json::from_str(r#"{"value":"8","time":60}"#).unwrap();
        assert_eq!(detail.value, Some(Measure::from("8")));
        assert_eq!(detail.time, Some(Measure::from(60)));
        assert_eq!(
            serde_json::to_string(&detail).unwrap(),
            r#"{"value":"8","time":60}"#
        );
    }

    #[test]
    fn test_drop_set_weight_uses_peso_on_the_wire() {
        let detail: DsDetail = serde_json::from_str(r#"{"reps":"6","peso":"40"}"#).unwrap();
        assert_eq!(detail.weight, Some(Measure::from("40")));
    }

    #[test]
    fn test_measure_is_filled() {
        assert!(Measure::from("8").is_filled());
        assert!(Measure::from(0).is_filled());
        assert!(!Measure::from("").is_filled());
        assert!(!Measure::from("   ").is_filled());
        assert!(!measure_filled(&None));
    }
}
