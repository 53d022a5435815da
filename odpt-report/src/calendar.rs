//! Schedule-category classification.
//!
//! Timetable entries are tagged with an `odpt:Calendar` identifier naming
//! the days they apply on. [`day_classes`] computes, for one date, every
//! category that matches: the day of the week, the weekday/holiday split,
//! and any ad-hoc calendars listing the date explicitly. Callers filter
//! timetables by testing membership in the returned set.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holiday::HolidayCalendar;
use crate::odpt::{CalendarId, CalendarRecord};

/// Classify a date into the set of applicable schedule categories.
///
/// The result always contains exactly one day-of-week category. Sundays and
/// public holidays are classified as both `Holiday` and `SaturdayHoliday` —
/// `SaturdayHoliday` covers every non-weekday, so the two go together.
/// Non-holiday Saturdays get `SaturdayHoliday` alone, and the remaining
/// days `Weekday`. Ad-hoc calendars contribute their identifier whenever
/// their explicit date list contains the date; records without a date list
/// never match and are skipped.
///
/// No priority is implied between the categories, and no input makes this
/// function fail.
pub fn day_classes(
    date: NaiveDate,
    holidays: &HolidayCalendar,
    calendars: Option<&HashMap<CalendarId, CalendarRecord>>,
) -> HashSet<CalendarId> {
    let weekday = date.weekday();

    let mut classes = HashSet::new();
    classes.insert(CalendarId::day_of_week(weekday));

    if weekday == Weekday::Sun || holidays.is_holiday(date) {
        classes.insert(CalendarId::holiday());
        classes.insert(CalendarId::saturday_holiday());
    } else if weekday == Weekday::Sat {
        classes.insert(CalendarId::saturday_holiday());
    } else {
        classes.insert(CalendarId::weekday());
    }

    if let Some(calendars) = calendars {
        for (id, calendar) in calendars {
            let Some(days) = &calendar.day else { continue };
            if days.contains(&date) {
                classes.insert(id.clone());
            }
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_year_holidays() -> HolidayCalendar {
        [(date(2019, 1, 1), "元日".to_string())].into_iter().collect()
    }

    fn ad_hoc(id: &str, days: Option<Vec<NaiveDate>>) -> (CalendarId, CalendarRecord) {
        (
            CalendarId::new(id),
            CalendarRecord {
                same_as: CalendarId::new(id),
                title: None,
                day: days,
            },
        )
    }

    #[test]
    fn holiday_on_a_tuesday() {
        // 2019-01-01 is a Tuesday and New Year's Day.
        let classes = day_classes(date(2019, 1, 1), &new_year_holidays(), None);

        assert!(classes.contains(&CalendarId::day_of_week(Weekday::Tue)));
        assert!(classes.contains(&CalendarId::holiday()));
        assert!(classes.contains(&CalendarId::saturday_holiday()));
        assert!(!classes.contains(&CalendarId::weekday()));
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn plain_saturday() {
        // 2019-01-05 is a Saturday and not a holiday.
        let classes = day_classes(date(2019, 1, 5), &new_year_holidays(), None);

        assert!(classes.contains(&CalendarId::day_of_week(Weekday::Sat)));
        assert!(classes.contains(&CalendarId::saturday_holiday()));
        assert!(!classes.contains(&CalendarId::holiday()));
        assert!(!classes.contains(&CalendarId::weekday()));
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn sunday_counts_as_holiday() {
        let classes = day_classes(date(2019, 1, 6), &HolidayCalendar::default(), None);

        assert!(classes.contains(&CalendarId::day_of_week(Weekday::Sun)));
        assert!(classes.contains(&CalendarId::holiday()));
        assert!(classes.contains(&CalendarId::saturday_holiday()));
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn plain_weekday() {
        // 2019-01-04 is a Friday.
        let classes = day_classes(date(2019, 1, 4), &new_year_holidays(), None);

        assert!(classes.contains(&CalendarId::day_of_week(Weekday::Fri)));
        assert!(classes.contains(&CalendarId::weekday()));
        assert!(!classes.contains(&CalendarId::holiday()));
        assert!(!classes.contains(&CalendarId::saturday_holiday()));
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn holiday_on_a_saturday_gets_both_labels() {
        // 2019-05-04 (みどりの日) fell on a Saturday.
        let holidays: HolidayCalendar = [(date(2019, 5, 4), "みどりの日".to_string())]
            .into_iter()
            .collect();
        let classes = day_classes(date(2019, 5, 4), &holidays, None);

        assert!(classes.contains(&CalendarId::day_of_week(Weekday::Sat)));
        assert!(classes.contains(&CalendarId::holiday()));
        assert!(classes.contains(&CalendarId::saturday_holiday()));
        assert!(!classes.contains(&CalendarId::weekday()));
    }

    #[test]
    fn ad_hoc_calendar_matches_listed_dates_only() {
        let calendars: HashMap<_, _> = [ad_hoc(
            "odpt.Calendar:Specific.Demo.Festival",
            Some(vec![date(2019, 3, 15)]),
        )]
        .into_iter()
        .collect();
        let holidays = HolidayCalendar::default();

        let on = day_classes(date(2019, 3, 15), &holidays, Some(&calendars));
        assert!(on.contains(&CalendarId::new("odpt.Calendar:Specific.Demo.Festival")));

        let before = day_classes(date(2019, 3, 14), &holidays, Some(&calendars));
        assert!(!before.contains(&CalendarId::new("odpt.Calendar:Specific.Demo.Festival")));

        let after = day_classes(date(2019, 3, 16), &holidays, Some(&calendars));
        assert!(!after.contains(&CalendarId::new("odpt.Calendar:Specific.Demo.Festival")));
    }

    #[test]
    fn calendar_without_date_list_never_matches() {
        // Built-in records carry no odpt:day and must not leak into the
        // result through the explicit-date step.
        let calendars: HashMap<_, _> = [ad_hoc("odpt.Calendar:SaturdayHoliday", None)]
            .into_iter()
            .collect();

        let classes = day_classes(date(2019, 1, 4), &HolidayCalendar::default(), Some(&calendars));
        assert!(!classes.contains(&CalendarId::saturday_holiday()));
    }

    #[test]
    fn ad_hoc_labels_are_additive() {
        let calendars: HashMap<_, _> = [ad_hoc(
            "odpt.Calendar:Specific.Demo.NewYear",
            Some(vec![date(2019, 1, 1)]),
        )]
        .into_iter()
        .collect();

        let classes = day_classes(date(2019, 1, 1), &new_year_holidays(), Some(&calendars));

        assert!(classes.contains(&CalendarId::holiday()));
        assert!(classes.contains(&CalendarId::new("odpt.Calendar:Specific.Demo.NewYear")));
        assert_eq!(classes.len(), 4);
    }
}
