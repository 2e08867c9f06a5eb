//! Calendar-date formatting for the intraday chart request window.

use time::{Date, OffsetDateTime};

/// Zero-padded `YYYY-MM-DD`, the only date shape the chart provider accepts.
pub fn format_calendar_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Inclusive from/to bounds for the short-interval chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub from: String,
    pub to: String,
}

impl DateWindow {
    /// Window covering the previous calendar day through `today`.
    pub fn trailing_day(today: Date) -> Self {
        let yesterday = today.previous_day().unwrap_or(today);
        Self {
            from: format_calendar_date(yesterday),
            to: format_calendar_date(today),
        }
    }

    /// Window ending on the caller's local calendar date, falling back to the
    /// UTC date when the local offset cannot be determined.
    pub fn ending_today() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::trailing_day(now.date())
    }
}
