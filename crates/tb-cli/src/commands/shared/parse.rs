use chrono::NaiveDate;
use tb_core::enums::TaskStatus;
use tb_core::validate::INVALID_STATUS;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| format!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse one of the three wire status strings.
pub fn parse_status(raw: &str) -> Result<TaskStatus, String> {
    raw.parse::<TaskStatus>()
        .map_err(|_| format!("invalid status '{raw}': {INVALID_STATUS}"))
}
