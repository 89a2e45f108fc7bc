//! Weather Collaborator Boundary
//!
//! Models the provider payload, converts it to Celsius extremes, and wires a
//! provider into the calculators. No network code lives here.
//!
//! - `report.rs` - WeatherReport + Kelvin/Fahrenheit → Celsius
//! - `locations.rs` - Location + sample sites (Singapore, London, Helsinki)
//! - `provider.rs` - WeatherProvider trait, FixedWeather, weather-driven pipelines

pub mod report;
pub mod locations;
pub mod provider;

pub use report::{fahrenheit_to_celsius, kelvin_to_celsius, TemperatureUnit, WeatherReport};
pub use locations::{find_location, sample_locations, Location};
pub use provider::{estimate_bed_from_weather, estimate_pot_from_weather, FixedWeather, WeatherProvider};
