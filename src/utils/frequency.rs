//! Watering frequency labels

/// Plain-English label for a watering interval in days
pub fn frequency_label(days: u32) -> String {
    match days {
        1 => "every day".to_string(),
        7 => "once a week".to_string(),
        14 => "every 2 weeks".to_string(),
        30 => "once a month".to_string(),
        365 => "once a year".to_string(),
        n => format!("every {} days", n),
    }
}
