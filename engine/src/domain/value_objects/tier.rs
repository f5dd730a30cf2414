//! Tier value object
//! Clinical status derived from a single vital reading

use crate::constants::vitals::{
    HEART_RATE_CRITICAL_HIGH, HEART_RATE_CRITICAL_LOW, HEART_RATE_WARNING_HIGH,
    OXYGEN_CRITICAL_LOW, OXYGEN_WARNING_LOW,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// No reading to classify
    #[default]
    Unknown,
    Normal,
    Warning,
    Critical,
}

impl Tier {
    /// Classify a heart rate / oxygen saturation pair.
    ///
    /// Critical bounds are checked before warning bounds, so a reading that is
    /// both tachycardic and mildly desaturated is Critical.
    pub fn from_vitals(heart_rate: i32, oxygen_percentage: i32) -> Self {
        if heart_rate > HEART_RATE_CRITICAL_HIGH
            || heart_rate < HEART_RATE_CRITICAL_LOW
            || oxygen_percentage < OXYGEN_CRITICAL_LOW
        {
            Tier::Critical
        } else if heart_rate > HEART_RATE_WARNING_HIGH || oxygen_percentage < OXYGEN_WARNING_LOW {
            Tier::Warning
        } else {
            Tier::Normal
        }
    }

    pub fn is_critical(&self) -> bool {
        *self == Tier::Critical
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Unknown => write!(f, "unknown"),
            Tier::Normal => write!(f, "normal"),
            Tier::Warning => write!(f, "warning"),
            Tier::Critical => write!(f, "critical"),
        }
    }
}
