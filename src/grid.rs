//! Week-grid layout for calendar heatmaps.
//!
//! Folds a flat chronological day sequence into columns of 7-cell weeks,
//! Sunday first, padded at both ends so every cell sits at its true weekday
//! slot. Pure and total: no I/O, no failure modes.

use chrono::{Datelike, NaiveDate};

use crate::models::ContributionDay;

/// Ordered weeks of exactly 7 day slots each (real or padding), Sunday first.
pub type WeekGrid = Vec<Vec<ContributionDay>>;

/// Build a week grid from a gap-free chronological day sequence for `year`.
///
/// The first week opens with padding cells up to the weekday of January 1;
/// the last week is padded out to 7 cells if the sequence ends mid-week.
/// Every week in the output has exactly 7 cells, and slot `i` within a week
/// is always weekday `i` (0 = Sunday). An empty input yields an empty grid.
///
/// Leap years and year boundaries need no special handling here: the input
/// is already one entry per real calendar day, so the only date arithmetic
/// is finding the opening weekday.
pub fn build_week_grid(days: &[ContributionDay], year: i32) -> WeekGrid {
    if days.is_empty() {
        return Vec::new();
    }

    let offset = jan_first_weekday(year);
    let mut weeks = Vec::with_capacity((offset + days.len()).div_ceil(7));
    let mut week: Vec<ContributionDay> = Vec::with_capacity(7);

    for _ in 0..offset {
        week.push(ContributionDay::padding());
    }

    for day in days {
        week.push(day.clone());
        if week.len() == 7 {
            weeks.push(std::mem::replace(&mut week, Vec::with_capacity(7)));
        }
    }

    if !week.is_empty() {
        while week.len() < 7 {
            week.push(ContributionDay::padding());
        }
        weeks.push(week);
    }

    weeks
}

/// Weekday index of January 1 for `year`, 0 = Sunday .. 6 = Saturday.
fn jan_first_weekday(year: i32) -> usize {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|date| date.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One entry per real calendar day of `year`, in order.
    fn full_year(year: i32) -> Vec<ContributionDay> {
        let mut days = Vec::new();
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while date.year() == year {
            days.push(ContributionDay {
                date: date.format("%Y-%m-%d").to_string(),
                count: (date.ordinal() % 5) as u32,
                level: (date.ordinal() % 5) as u8,
            });
            date = date.succ_opt().unwrap();
        }
        days
    }

    #[test]
    fn test_empty_input_yields_empty_grid() {
        assert!(build_week_grid(&[], 2024).is_empty());
    }

    #[test]
    fn test_every_week_has_seven_cells() {
        for year in [2019, 2020, 2022, 2024] {
            let grid = build_week_grid(&full_year(year), year);
            assert!(grid.iter().all(|week| week.len() == 7), "year {}", year);
        }
    }

    #[test]
    fn test_leading_padding_matches_opening_weekday() {
        // January 1 2024 was a Monday (weekday index 1).
        let days = full_year(2024);
        let grid = build_week_grid(&days, 2024);

        assert!(grid[0][0].is_padding());
        assert_eq!(grid[0][1].date, "2024-01-01");
    }

    #[test]
    fn test_leap_year_starting_wednesday() {
        // 2020: leap year, January 1 on a Wednesday (weekday index 3).
        let days = full_year(2020);
        assert_eq!(days.len(), 366);

        let grid = build_week_grid(&days, 2020);

        // First week: 3 padding cells, then 4 real days.
        assert!(grid[0][..3].iter().all(|cell| cell.is_padding()));
        assert_eq!(grid[0][3].date, "2020-01-01");
        assert_eq!(grid[0][6].date, "2020-01-04");

        // ceil((3 + 366) / 7) = 53 weeks, 2 trailing padding cells.
        assert_eq!(grid.len(), 53);
        let last = grid.last().unwrap();
        assert_eq!(last[4].date, "2020-12-31");
        assert!(last[5].is_padding());
        assert!(last[6].is_padding());
    }

    #[test]
    fn test_no_trailing_padding_when_year_ends_on_saturday() {
        // 2022: non-leap, January 1 on a Saturday, so 6 + 365 = 371 = 53 * 7.
        let days = full_year(2022);
        let grid = build_week_grid(&days, 2022);

        assert_eq!(grid.len(), 53);
        let last = grid.last().unwrap();
        assert_eq!(last[6].date, "2022-12-31");
        assert!(!last[6].is_padding());
    }

    #[test]
    fn test_weekday_slots_match_dates() {
        let days = full_year(2020);
        let grid = build_week_grid(&days, 2020);

        for week in &grid {
            for (slot, cell) in week.iter().enumerate() {
                if cell.is_padding() {
                    continue;
                }
                let date = NaiveDate::parse_from_str(&cell.date, "%Y-%m-%d").unwrap();
                assert_eq!(date.weekday().num_days_from_sunday() as usize, slot);
            }
        }
    }

    #[test]
    fn test_building_is_deterministic() {
        let days = full_year(2024);
        assert_eq!(build_week_grid(&days, 2024), build_week_grid(&days, 2024));
    }

    #[test]
    fn test_padding_cells_carry_no_data() {
        let grid = build_week_grid(&full_year(2020), 2020);
        for week in &grid {
            for cell in week {
                if cell.is_padding() {
                    assert_eq!(cell.count, 0);
                    assert_eq!(cell.level, 0);
                }
            }
        }
    }
}
