//! Display and unit helpers shared by the calculators and the API
//!
//! - Units: fl oz / inch conversions, display rounding
//! - Frequency: watering interval labels

pub mod units;
pub mod frequency;

pub use units::{
    cm_to_inches, fl_oz_to_ml, inches_to_cm, ml_to_fl_oz, round_liters, round_ml, LengthUnit,
    CM_PER_INCH, ML_PER_FL_OZ,
};
pub use frequency::frequency_label;
