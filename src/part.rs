//! Part locations - the closed set of glass positions on a vehicle
//!
//! Codes follow the convention of the stored data:
//! `L`/`R` = left/right, `F`/`B` = front/back.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a glass part sits on the vehicle.
///
/// Stored as the uppercase TEXT codes below; parsing is case-insensitive.
/// This is a closed set - free-form location strings never reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartLocation {
    #[serde(rename = "LFDOOR")]
    FrontLeftDoor,
    #[serde(rename = "RFDOOR")]
    FrontRightDoor,
    #[serde(rename = "LBDOOR")]
    RearLeftDoor,
    #[serde(rename = "RBDOOR")]
    RearRightDoor,
    #[serde(rename = "WINDSHIELD")]
    Windshield,
    #[serde(rename = "LFVENT")]
    FrontLeftVent,
    #[serde(rename = "RFVENT")]
    FrontRightVent,
    #[serde(rename = "LBVENT")]
    RearLeftVent,
    #[serde(rename = "RBVENT")]
    RearRightVent,
    #[serde(rename = "LBQUARTER")]
    RearLeftQuarter,
    #[serde(rename = "RBQUARTER")]
    RearRightQuarter,
    #[serde(rename = "BACK")]
    Back,
}

impl PartLocation {
    /// The code persisted in the windshield table
    pub fn as_str(&self) -> &'static str {
        match self {
            PartLocation::FrontLeftDoor => "LFDOOR",
            PartLocation::FrontRightDoor => "RFDOOR",
            PartLocation::RearLeftDoor => "LBDOOR",
            PartLocation::RearRightDoor => "RBDOOR",
            PartLocation::Windshield => "WINDSHIELD",
            PartLocation::FrontLeftVent => "LFVENT",
            PartLocation::FrontRightVent => "RFVENT",
            PartLocation::RearLeftVent => "LBVENT",
            PartLocation::RearRightVent => "RBVENT",
            PartLocation::RearLeftQuarter => "LBQUARTER",
            PartLocation::RearRightQuarter => "RBQUARTER",
            PartLocation::Back => "BACK",
        }
    }

    /// Every location, in display order
    pub fn all() -> &'static [PartLocation] {
        &[
            PartLocation::Windshield,
            PartLocation::FrontLeftDoor,
            PartLocation::FrontRightDoor,
            PartLocation::RearLeftDoor,
            PartLocation::RearRightDoor,
            PartLocation::FrontLeftVent,
            PartLocation::FrontRightVent,
            PartLocation::RearLeftVent,
            PartLocation::RearRightVent,
            PartLocation::RearLeftQuarter,
            PartLocation::RearRightQuarter,
            PartLocation::Back,
        ]
    }
}

impl FromStr for PartLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "LFDOOR" => Ok(PartLocation::FrontLeftDoor),
            "RFDOOR" => Ok(PartLocation::FrontRightDoor),
            "LBDOOR" => Ok(PartLocation::RearLeftDoor),
            "RBDOOR" => Ok(PartLocation::RearRightDoor),
            "WINDSHIELD" | "FRONT" => Ok(PartLocation::Windshield),
            "LFVENT" => Ok(PartLocation::FrontLeftVent),
            "RFVENT" => Ok(PartLocation::FrontRightVent),
            "LBVENT" => Ok(PartLocation::RearLeftVent),
            "RBVENT" => Ok(PartLocation::RearRightVent),
            "LBQUARTER" => Ok(PartLocation::RearLeftQuarter),
            "RBQUARTER" => Ok(PartLocation::RearRightQuarter),
            "BACK" | "REAR" => Ok(PartLocation::Back),
            _ => Err(Error::UnknownPartLocation(s.to_string())),
        }
    }
}

impl std::fmt::Display for PartLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for loc in PartLocation::all() {
            let parsed: PartLocation = loc.as_str().parse().unwrap();
            assert_eq!(parsed, *loc);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let loc: PartLocation = "lfdoor".parse().unwrap();
        assert_eq!(loc, PartLocation::FrontLeftDoor);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = "SUNROOF".parse::<PartLocation>().unwrap_err();
        assert!(matches!(err, Error::UnknownPartLocation(_)));
    }
}
