//! Calendar-aligned date ranges for the day, week and month schedule views.
//!
//! Weeks start on Sunday. Month views are padded out to whole weeks.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    Previous,
    Next,
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(6 - date.weekday().num_days_from_sunday());
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    dates_between(start_of_week(date), end_of_week(date))
}

pub fn month_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    let last = last_of_month(date);
    dates_between(start_of_week(first), end_of_week(last))
}

/// Moves `date` one view-sized step. Month steps clamp to the last day of the
/// target month, so Jan 31 + 1 month is Feb 28/29.
pub fn navigate(date: NaiveDate, mode: ViewMode, direction: NavigationDirection) -> NaiveDate {
    let moved = match (mode, direction) {
        (ViewMode::Day, NavigationDirection::Next) => date.checked_add_days(Days::new(1)),
        (ViewMode::Day, NavigationDirection::Previous) => date.checked_sub_days(Days::new(1)),
        (ViewMode::Week, NavigationDirection::Next) => date.checked_add_days(Days::new(7)),
        (ViewMode::Week, NavigationDirection::Previous) => date.checked_sub_days(Days::new(7)),
        (ViewMode::Month, NavigationDirection::Next) => date.checked_add_months(Months::new(1)),
        (ViewMode::Month, NavigationDirection::Previous) => date.checked_sub_months(Months::new(1)),
    };
    moved.unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(date)
}

fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}
