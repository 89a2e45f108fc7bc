//! Locations and sample sites
//!
//! A location supplies the latitude used to derive Ra. The three sample sites
//! cover tropical, temperate and boreal conditions.

use serde::{Deserialize, Serialize};

use crate::evapotranspiration::SolarRadiation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name (e.g., "London, UK")
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Location {
    pub fn new(name: &str, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude_deg,
            longitude_deg,
        }
    }

    /// Ra derived from this site's latitude
    pub fn radiation(&self, day_of_year: u32) -> SolarRadiation {
        SolarRadiation::Derived {
            latitude_deg: self.latitude_deg,
            day_of_year,
        }
    }

    /// Lowercase key used for lookups (e.g. "london")
    pub fn code(&self) -> String {
        self.name
            .split(|c: char| c == ',' || c == '(')
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase()
    }
}

pub fn singapore() -> Location {
    Location::new("Singapore", 1.35, 103.82)
}

pub fn london() -> Location {
    Location::new("London, UK", 51.51, -0.13)
}

pub fn helsinki() -> Location {
    Location::new("Helsinki, Finland", 60.17, 24.94)
}

pub fn sample_locations() -> Vec<Location> {
    vec![singapore(), london(), helsinki()]
}

/// Look a sample location up by code, case-insensitively
pub fn find_location(code: &str) -> Option<Location> {
    let code = code.trim().to_lowercase();
    sample_locations().into_iter().find(|l| l.code() == code)
}
