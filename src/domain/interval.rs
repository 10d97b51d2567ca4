use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monday, 1970-01-05: the fixed anchor for bi-weekly windows. Every
/// even-numbered week since this date starts a new two-week period.
fn bi_weekly_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 5).expect("anchor date is valid")
}

/// The recurring time window against which spend-to-date is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetInterval {
    Day,
    Week,
    #[serde(rename = "Bi-Weekly")]
    BiWeekly,
    Month,
    Year,
}

impl BudgetInterval {
    pub const ALL: [BudgetInterval; 5] = [
        BudgetInterval::Day,
        BudgetInterval::Week,
        BudgetInterval::BiWeekly,
        BudgetInterval::Month,
        BudgetInterval::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetInterval::Day => "Day",
            BudgetInterval::Week => "Week",
            BudgetInterval::BiWeekly => "Bi-Weekly",
            BudgetInterval::Month => "Month",
            BudgetInterval::Year => "Year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Some(BudgetInterval::Day),
            "week" => Some(BudgetInterval::Week),
            "bi-weekly" => Some(BudgetInterval::BiWeekly),
            "month" => Some(BudgetInterval::Month),
            "year" => Some(BudgetInterval::Year),
            _ => None,
        }
    }

    /// First day of the window containing `today`. Spend-to-date sums all
    /// expenses with date in [window_start, today], both ends inclusive.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            BudgetInterval::Day => today,
            BudgetInterval::Week => {
                let back = today.weekday().num_days_from_monday() as u64;
                today - Days::new(back)
            }
            BudgetInterval::BiWeekly => {
                let weeks_since_anchor = (today - bi_weekly_anchor()).num_days().div_euclid(7);
                let mut back = today.weekday().num_days_from_monday() as u64;
                if weeks_since_anchor.rem_euclid(2) != 0 {
                    back += 7;
                }
                today - Days::new(back)
            }
            BudgetInterval::Month => today.with_day(1).unwrap_or(today),
            BudgetInterval::Year => {
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
            }
        }
    }
}

impl std::fmt::Display for BudgetInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_roundtrip() {
        for interval in BudgetInterval::ALL {
            let parsed = BudgetInterval::from_str(interval.as_str()).unwrap();
            assert_eq!(interval, parsed);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(BudgetInterval::from_str("month"), Some(BudgetInterval::Month));
        assert_eq!(
            BudgetInterval::from_str("BI-WEEKLY"),
            Some(BudgetInterval::BiWeekly)
        );
        assert_eq!(BudgetInterval::from_str("fortnight"), None);
    }

    #[test]
    fn test_day_window() {
        assert_eq!(
            BudgetInterval::Day.window_start(date(2024, 1, 15)),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn test_week_window_starts_monday() {
        // 2024-01-15 is a Monday, 2024-01-18 a Thursday
        assert_eq!(
            BudgetInterval::Week.window_start(date(2024, 1, 18)),
            date(2024, 1, 15)
        );
        assert_eq!(
            BudgetInterval::Week.window_start(date(2024, 1, 15)),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn test_month_window() {
        assert_eq!(
            BudgetInterval::Month.window_start(date(2024, 2, 29)),
            date(2024, 2, 1)
        );
    }

    #[test]
    fn test_year_window() {
        assert_eq!(
            BudgetInterval::Year.window_start(date(2024, 6, 15)),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn test_bi_weekly_window_anchored() {
        // 1970-01-05 opens an even week, so its whole first fortnight
        // starts there.
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(1970, 1, 5)),
            date(1970, 1, 5)
        );
        // Second week of the fortnight reaches back to the same Monday.
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(1970, 1, 14)),
            date(1970, 1, 5)
        );
        // Third week starts a new fortnight.
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(1970, 1, 19)),
            date(1970, 1, 19)
        );
    }

    #[test]
    fn test_bi_weekly_window_modern_date() {
        // 2024-01-08 is a Monday an even number of weeks after the anchor,
        // so it opens a fortnight; the Monday before it does not.
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(2024, 1, 1)),
            date(2023, 12, 25)
        );
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(2024, 1, 8)),
            date(2024, 1, 8)
        );
        // Sunday of that week and the whole following week reach back to it.
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(2024, 1, 14)),
            date(2024, 1, 8)
        );
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(2024, 1, 15)),
            date(2024, 1, 8)
        );
        assert_eq!(
            BudgetInterval::BiWeekly.window_start(date(2024, 1, 22)),
            date(2024, 1, 22)
        );
    }
}
