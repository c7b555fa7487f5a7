use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use velocity_limits::models::Load;
use velocity_limits::validator::{ValidationReport, VelocityValidator};

/// Helper to build a UTC timestamp
pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid test timestamp")
}

/// Helper to create a load with all fields
pub fn make_load(id: &str, customer_id: &str, amount: Decimal, time: DateTime<Utc>) -> Load {
    Load {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        amount,
        time,
    }
}

/// Helper to build one input line
pub fn load_line(id: &str, customer_id: &str, amount: &str, time: &str) -> String {
    format!(
        r#"{{"id":"{}","customer_id":"{}","load_amount":"{}","time":"{}"}}"#,
        id, customer_id, amount, time
    )
}

/// Helper to build the expected output line for a decision
pub fn decision_line(id: &str, customer_id: &str, accepted: bool) -> String {
    format!(
        r#"{{"id":"{}","customer_id":"{}","accepted":{}}}"#,
        id, customer_id, accepted
    )
}

/// Run lines through a fresh validator
pub fn process_lines(lines: &[String]) -> ValidationReport {
    VelocityValidator::new().process(lines)
}
