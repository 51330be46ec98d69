//! Month-grid generation for the catering calendar view.

use chrono::{Datelike, Duration, NaiveDate};

#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Monday-first weeks; `None` cells belong to neighbouring months.
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

/// Build the Monday-first calendar grid for a month.
pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_day_of_month(year, month)?;

    let mut weeks = Vec::new();
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    let mut day = first;

    loop {
        let slot = day.weekday().num_days_from_monday() as usize;
        week[slot] = Some(day);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
        if day == last {
            if slot != 6 {
                weeks.push(week);
            }
            break;
        }
        day += Duration::days(1);
    }

    Some(MonthGrid { year, month, weeks })
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next - Duration::days(1))
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    let name = NAMES.get((month as usize).saturating_sub(1)).unwrap_or(&"?");
    format!("{} {}", name, year)
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_whole_month_in_order() {
        let grid = month_grid(2026, 9).unwrap();
        let days: Vec<NaiveDate> = grid.weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], "2026-09-01".parse().unwrap());
        assert_eq!(*days.last().unwrap(), "2026-09-30".parse().unwrap());
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_first_week_padding() {
        // 1 September 2026 is a Tuesday: Monday slot of week one is empty.
        let grid = month_grid(2026, 9).unwrap();
        assert_eq!(grid.weeks[0][0], None);
        assert_eq!(grid.weeks[0][1], Some("2026-09-01".parse().unwrap()));
        // 1 June 2026 is a Monday: no padding at all.
        let june = month_grid(2026, 6).unwrap();
        assert_eq!(june.weeks[0][0], Some("2026-06-01".parse().unwrap()));
    }

    #[test]
    fn test_leap_february() {
        let grid = month_grid(2028, 2).unwrap();
        let days: Vec<NaiveDate> = grid.weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn test_month_stepping() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 5), (2026, 6));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2026, 9), "September 2026");
    }
}
