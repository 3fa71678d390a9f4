use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTickFormat {
    MonthDay,  // 01-31
    YearMonth, // 2024-01
}

/// Formats a calendar-axis tick label.
pub fn format_day_tick(date: NaiveDate, format: DayTickFormat) -> String {
    match format {
        DayTickFormat::MonthDay => date.format("%m-%d").to_string(),
        DayTickFormat::YearMonth => date.format("%Y-%m").to_string(),
    }
}

/// Formats a UTC millisecond timestamp in the display zone, for tooltips.
pub fn format_timestamp(ms: i64, tz: Tz) -> String {
    match time::to_local(tz, ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

/// Label of an hour tick on the time-of-day axis.
pub fn format_hour(hour: u32) -> String {
    format!("{}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_day_tick(d, DayTickFormat::MonthDay), "03-09");
        assert_eq!(format_day_tick(d, DayTickFormat::YearMonth), "2024-03");
        assert_eq!(format_hour(6), "6:00");
        // 2024-01-01T00:00:00Z in Berlin
        assert_eq!(
            format_timestamp(1_704_067_200_000, Tz::Europe__Berlin),
            "2024-01-01 01:00:00"
        );
    }
}
