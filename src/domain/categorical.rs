//! Two-token categorical fields.
//!
//! Each type recognizes exactly one positive token, case-insensitively.
//! Every other input (typos, empty strings, unexpected words) deserializes
//! to the negative variant rather than rejecting the request, matching what
//! the deployed form clients already rely on.

use serde::{Deserialize, Deserializer};

fn matches_token(raw: &str, token: &str) -> bool {
    raw.eq_ignore_ascii_case(token)
}

/// Microscopy finding; positive token "normal"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCondition {
    Normal,
    Abnormal,
}

impl CellCondition {
    pub fn as_feature(self) -> f64 {
        match self {
            CellCondition::Normal => 1.0,
            CellCondition::Abnormal => 0.0,
        }
    }
}

impl<'de> Deserialize<'de> for CellCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if matches_token(&raw, "normal") {
            CellCondition::Normal
        } else {
            CellCondition::Abnormal
        })
    }
}

/// Presence flag; positive token "present"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    NotPresent,
}

impl Presence {
    pub fn as_feature(self) -> f64 {
        match self {
            Presence::Present => 1.0,
            Presence::NotPresent => 0.0,
        }
    }
}

impl<'de> Deserialize<'de> for Presence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if matches_token(&raw, "present") {
            Presence::Present
        } else {
            Presence::NotPresent
        })
    }
}

/// Yes/no history flag; positive token "yes"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_feature(self) -> f64 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }
}

impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if matches_token(&raw, "yes") {
            YesNo::Yes
        } else {
            YesNo::No
        })
    }
}

/// Appetite assessment; positive token "good"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appetite {
    Good,
    Poor,
}

impl Appetite {
    pub fn as_feature(self) -> f64 {
        match self {
            Appetite::Good => 1.0,
            Appetite::Poor => 0.0,
        }
    }
}

impl<'de> Deserialize<'de> for Appetite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if matches_token(&raw, "good") {
            Appetite::Good
        } else {
            Appetite::Poor
        })
    }
}
