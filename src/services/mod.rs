// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod configuration;
pub mod session;
pub mod template;
pub mod toggles;
pub mod validation;

pub use configuration::{
    ConfigurationService, ExerciseConfigInput, SlotConfiguration, UpdateConfigurationRequest,
};
pub use session::SessionService;
pub use template::build_default_configuration;
pub use toggles::{Technique, TechniqueToggles, ToggleKey};
pub use validation::{find_incomplete, is_ready_to_submit, IncompleteReason, IncompleteSet};
