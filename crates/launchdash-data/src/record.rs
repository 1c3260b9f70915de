//! One row of the launch records table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary launch outcome as stored in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.as_u8()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A single launch. Field names on the wire match the CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    #[serde(rename = "class")]
    pub class: OutcomeClass,

    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version_category: booster_version_category.into(),
        }
    }

    /// Row-level checks serde can't express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.launch_site.trim().is_empty() {
            return Err("empty launch site".to_string());
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(format!("invalid payload mass {}", self.payload_mass_kg));
        }
        Ok(())
    }
}
