//! Month grid layout for calendar events

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::CalendarEvent;

/// Parse an event timestamp: RFC 3339 (shown in the local zone), naive
/// `YYYY-MM-DDTHH:MM[:SS]` (T or space separated) or a bare date at midnight.
pub fn parse_event_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 { (year + 1, 1) } else { (year, month + 1) }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (ny, nm) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()?;
    Some((first, last))
}

/// Weeks of the month, Sunday first. Days outside the month are `None`.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut day = first;
    while day <= last {
        let col = day.weekday().num_days_from_sunday() as usize;
        week[col] = Some(day);
        if col == 6 {
            weeks.push(week);
            week = [None; 7];
        }
        day += Duration::days(1);
    }
    if week.iter().any(|d| d.is_some()) {
        weeks.push(week);
    }
    weeks
}

/// Last day an event is drawn on. The end is exclusive, so an end at
/// midnight (or a date-only end) stops on the previous day.
fn last_event_day(start: NaiveDateTime, end: Option<NaiveDateTime>) -> NaiveDate {
    match end {
        Some(end) if end > start && end.time() == NaiveTime::MIN => end.date() - Duration::days(1),
        Some(end) if end >= start => end.date(),
        _ => start.date(),
    }
}

/// Events on each day of the month. Multi-day events appear on every day
/// they span; events without a parseable start are skipped.
pub fn events_by_day(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
) -> BTreeMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<&CalendarEvent>> = BTreeMap::new();
    let Some((first, last)) = month_bounds(year, month) else {
        return days;
    };
    for event in events {
        let Some(start) = event.start_time.as_deref().and_then(parse_event_time) else {
            continue;
        };
        let end = last_event_day(start, event.end_time.as_deref().and_then(parse_event_time));
        let start = start.date();

        let mut day = start.max(first);
        let until = end.min(last);
        while day <= until {
            days.entry(day).or_default().push(event);
            day += Duration::days(1);
        }
    }
    days
}
