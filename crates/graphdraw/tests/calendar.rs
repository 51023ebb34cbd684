use chrono::{Datelike, NaiveDate};
use graphdraw::{
    calendar::{first_weekday, is_leap_year, YearWalk},
    days_in_year, initialize_grid, CellKind, GraphError, DAYS, WEEKS,
};
use pretty_assertions::assert_eq;

/// Dated cells in week-major order (down each column, then the next column).
fn dated_cells(year: i32) -> Vec<(usize, usize, String)> {
    let grid = initialize_grid(year).unwrap();
    let mut out = Vec::new();
    for x in 0..WEEKS {
        for y in 0..DAYS {
            let cell = grid.cell(x, y).unwrap();
            if cell.kind() != CellKind::Nil {
                out.push((x, y, cell.date().unwrap().to_string()));
            }
        }
    }
    out
}

#[test]
fn days_in_year_simplified_leap_rule() {
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(2023), 365);
    assert_eq!(days_in_year(1900), 365);
    assert_eq!(days_in_year(2100), 365);
    // divisible by 400 still counts as a common year here
    assert_eq!(days_in_year(2000), 365);
    assert!(is_leap_year(1996));
    assert!(!is_leap_year(1999));
}

#[test]
fn first_weekday_counts_from_sunday() {
    assert_eq!(first_weekday(2023).unwrap(), 0);
    assert_eq!(first_weekday(2024).unwrap(), 1);
    assert_eq!(first_weekday(2022).unwrap(), 6);
}

#[test]
fn non_nil_cells_match_days_in_year() {
    for year in [1900, 1999, 2000, 2021, 2022, 2023, 2024, 2025, 2026] {
        let cells = dated_cells(year);
        assert_eq!(cells.len(), days_in_year(year) as usize, "year {year}");
    }
}

#[test]
fn dates_are_unique_in_year_and_chronological() {
    for year in [2023, 2024, 2025] {
        let grid = initialize_grid(year).unwrap();
        let mut dates = Vec::new();
        for x in 0..WEEKS {
            for y in 0..DAYS {
                let cell = grid.cell(x, y).unwrap();
                if cell.kind() != CellKind::Nil {
                    dates.push(cell.date().unwrap());
                }
            }
        }
        assert!(dates.iter().all(|d| d.date().year() == year));
        assert!(dates.windows(2).all(|w| w[0] < w[1]), "year {year}");
    }
}

#[test]
fn leading_cells_before_january_first_are_nil() {
    let grid = initialize_grid(2024).unwrap();
    let first = grid.cell(0, 0).unwrap();
    assert_eq!(first.kind(), CellKind::Nil);
    assert_eq!(first.date(), None);

    let jan1 = grid.cell(0, 1).unwrap();
    assert_eq!(jan1.kind(), CellKind::Empty);
    assert_eq!(jan1.date().unwrap().to_string(), "2024-01-01T00:00:00");
}

#[test]
fn each_day_advances_one_day_and_one_second() {
    let cells = dated_cells(2023);
    assert_eq!(cells[0], (0, 0, "2023-01-01T00:00:00".to_string()));
    assert_eq!(cells[1], (0, 1, "2023-01-02T00:00:01".to_string()));
    assert_eq!(cells[7], (1, 0, "2023-01-08T00:00:07".to_string()));
    let last = cells.last().unwrap();
    assert_eq!(last, &(52, 0, "2023-12-31T00:06:04".to_string()));
}

#[test]
fn trailing_cells_after_december_are_nil() {
    let grid = initialize_grid(2023).unwrap();
    for y in 1..DAYS {
        let cell = grid.cell(WEEKS - 1, y).unwrap();
        assert_eq!(cell.kind(), CellKind::Nil);
        assert_eq!(cell.date(), None);
    }
}

#[test]
fn walk_positions_follow_weekdays() {
    let jan1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for (i, day) in YearWalk::new(2025).unwrap().enumerate().take(40) {
        let expected = jan1 + chrono::Duration::days(i as i64);
        assert_eq!(day.date.date(), expected);
        assert_eq!(day.y, expected.weekday().num_days_from_sunday() as usize);
    }
}

#[test]
fn leap_year_starting_saturday_drops_the_overflowing_day() {
    // 2028-01-01 is a Saturday: 6 leading cells + 366 days > 371 cells
    let cells = dated_cells(2028);
    assert_eq!(cells.len(), 365);
    assert_eq!(cells.last().unwrap().2, "2028-12-30T00:06:04");
}

#[test]
fn unrepresentable_year_is_rejected() {
    assert!(matches!(
        initialize_grid(i32::MAX),
        Err(GraphError::InvalidYear(y)) if y == i32::MAX
    ));
}
