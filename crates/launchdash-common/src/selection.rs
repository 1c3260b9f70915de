//! Typed dashboard inputs: the site dropdown value and the payload slider range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Dropdown label shown for [`ALL_SITES`].
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The value of the site dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// True when `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// The raw dropdown value.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl FromStr for SiteSelection {
    type Err = DashError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DashError::InvalidInput("site selection is empty".to_string()));
        }
        if value == ALL_SITES {
            Ok(SiteSelection::All)
        } else {
            Ok(SiteSelection::Site(value.to_string()))
        }
    }
}

impl TryFrom<String> for SiteSelection {
    type Error = DashError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

/// Closed payload interval `[lo, hi]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(DashError::InvalidInput(format!(
                "payload range bounds must be finite, got [{}, {}]",
                lo, hi
            )));
        }
        if lo > hi {
            return Err(DashError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.lo <= payload_kg && payload_kg <= self.hi
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = DashError;

    fn try_from([lo, hi]: [f64; 2]) -> Result<Self> {
        Self::new(lo, hi)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lo, range.hi]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
