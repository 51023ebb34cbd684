//! Mapping of a calendar year onto the 7 x 53 week grid.
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::{
    error::{GraphError, Result},
    grid::{Grid, DAYS},
};

/// Format accepted by `git commit --date`.
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Timestamp attached to a grid cell.
///
/// Consecutive days are one day and one second apart, so day `n` of the year
/// carries `n` seconds past midnight and every timestamp in a year is distinct.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GitDate(NaiveDateTime);

impl GitDate {
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl fmt::Display for GitDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(GIT_DATE_FORMAT))
    }
}

/// Leap rule used for the grid walk: divisible by 4 and not by 100.
///
/// Years divisible by 400 are treated as common years, so e.g. 2000 gets 365 days
/// and its December 31 never reaches the grid.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Weekday of January 1, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32) -> Result<usize> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(GraphError::InvalidYear(year))?;
    Ok(jan1.weekday().num_days_from_sunday() as usize)
}

/// One day of the walk: grid position plus its timestamp.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub x: usize,
    pub y: usize,
    pub date: GitDate,
}

/// Walks the days of a year in grid order: down a week column, then on to the next.
#[derive(Clone, Debug)]
pub struct YearWalk {
    next: Option<NaiveDateTime>,
    x: usize,
    y: usize,
    remaining: u32,
}

impl YearWalk {
    pub fn new(year: i32) -> Result<Self> {
        let y = first_weekday(year)?;
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(GraphError::InvalidYear(year))?;
        Ok(Self {
            next: Some(start),
            x: 0,
            y,
            remaining: days_in_year(year),
        })
    }
}

impl Iterator for YearWalk {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<CalendarDay> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        let day = CalendarDay {
            x: self.x,
            y: self.y,
            date: GitDate(current),
        };
        self.remaining -= 1;
        self.next = current.checked_add_signed(Duration::days(1) + Duration::seconds(1));
        self.y = (self.y + 1) % DAYS;
        if self.y == 0 {
            self.x += 1;
        }
        Some(day)
    }
}

/// Build a grid for `year` with every in-year cell EMPTY and dated.
pub fn initialize_grid(year: i32) -> Result<Grid> {
    Grid::new(year)
}
