//! Console report formatting.
//!
//! Shared helpers for the report binaries. Output follows the conventions
//! of Japanese timetable listings: multiple origins or destinations joined
//! with "・", connecting services in full-width parentheses, delays rounded
//! to minutes.

use std::collections::HashMap;

use crate::odpt::{Railway, RailwayId, Station, StationId, TrainTimetableId};

/// Separator for lists of station or train names.
const LIST_SEPARATOR: &str = "・";

/// Label a connecting timetable relative to the railway being displayed.
///
/// Connections on the displayed railway show the bare train number.
/// Connections on a different railway are prefixed with that railway's
/// title when it is known; unknown railways fall back to the bare number.
pub fn connection_label(
    connection: &TrainTimetableId,
    home: &RailwayId,
    railways: &HashMap<RailwayId, Railway>,
) -> String {
    let number = connection
        .train_number()
        .unwrap_or_else(|| connection.local_name());

    match connection.railway() {
        Some(railway) if railway != *home => match railways.get(&railway) {
            Some(known) => format!("{}{}", known.title, number),
            None => number.to_string(),
        },
        _ => number.to_string(),
    }
}

/// One train's origin → destination line, with connecting services in
/// parentheses before and after.
pub fn journey_label(
    origins: &[String],
    destinations: &[String],
    previous: &[String],
    next: &[String],
) -> String {
    let mut label = String::new();

    if !previous.is_empty() {
        label.push_str(&format!("（{}） ", previous.join(LIST_SEPARATOR)));
    }

    label.push_str(&origins.join(LIST_SEPARATOR));
    label.push('→');
    label.push_str(&destinations.join(LIST_SEPARATOR));

    if !next.is_empty() {
        label.push_str(&format!(" （{}）", next.join(LIST_SEPARATOR)));
    }

    label
}

/// Join station or train names for display.
pub fn join_names(names: &[String]) -> String {
    names.join(LIST_SEPARATOR)
}

/// Title of a resolved station, or the identifier's local part when the
/// lookup came back empty.
pub fn station_title(station: Option<&Station>, id: &StationId) -> String {
    match station {
        Some(station) => station.title.clone(),
        None => id.local_name().to_string(),
    }
}

/// Render a delay in seconds the way station displays do: on time for
/// anything rounding to zero minutes, otherwise the rounded minute count.
pub fn delay_label(delay_secs: f64) -> String {
    let minutes = (delay_secs / 60.0 + 0.5) as i64;
    if minutes == 0 {
        "平常".to_string()
    } else {
        format!("{minutes}分遅れ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odpt::OperatorId;

    fn railway(id: &str, title: &str) -> (RailwayId, Railway) {
        (
            RailwayId::new(id),
            Railway {
                same_as: RailwayId::new(id),
                title: title.to_string(),
                operator: OperatorId::new("odpt.Operator:Demo"),
                ascending_rail_direction: None,
                descending_rail_direction: None,
                station_order: Vec::new(),
            },
        )
    }

    #[test]
    fn connection_on_home_railway_is_bare_number() {
        let railways: HashMap<_, _> = [railway("odpt.Railway:JR-East.Tokaido", "東海道線")]
            .into_iter()
            .collect();
        let home = RailwayId::new("odpt.Railway:JR-East.Tokaido");
        let connection = TrainTimetableId::new("odpt.TrainTimetable:JR-East.Tokaido.123M.Weekday");

        assert_eq!(connection_label(&connection, &home, &railways), "123M");
    }

    #[test]
    fn connection_on_other_known_railway_is_prefixed() {
        let railways: HashMap<_, _> = [
            railway("odpt.Railway:JR-East.Tokaido", "東海道線"),
            railway("odpt.Railway:JR-East.Ito", "伊東線"),
        ]
        .into_iter()
        .collect();
        let home = RailwayId::new("odpt.Railway:JR-East.Tokaido");
        let connection = TrainTimetableId::new("odpt.TrainTimetable:JR-East.Ito.123M.Weekday");

        assert_eq!(connection_label(&connection, &home, &railways), "伊東線123M");
    }

    #[test]
    fn connection_on_unknown_railway_is_bare_number() {
        let railways: HashMap<_, _> = [railway("odpt.Railway:JR-East.Tokaido", "東海道線")]
            .into_iter()
            .collect();
        let home = RailwayId::new("odpt.Railway:JR-East.Tokaido");
        let connection = TrainTimetableId::new("odpt.TrainTimetable:Izukyu.Main.123M.Weekday");

        assert_eq!(connection_label(&connection, &home, &railways), "123M");
    }

    #[test]
    fn journey_label_plain() {
        let label = journey_label(
            &["東京".to_string()],
            &["熱海".to_string(), "伊東".to_string()],
            &[],
            &[],
        );
        assert_eq!(label, "東京→熱海・伊東");
    }

    #[test]
    fn journey_label_with_connections() {
        let label = journey_label(
            &["東京".to_string()],
            &["熱海".to_string()],
            &["100M".to_string()],
            &["伊東線123M".to_string(), "456M".to_string()],
        );
        assert_eq!(label, "（100M） 東京→熱海 （伊東線123M・456M）");
    }

    #[test]
    fn station_title_falls_back_to_local_name() {
        let id = StationId::new("odpt.Station:JR-East.Tokaido.Tokyo");
        assert_eq!(station_title(None, &id), "JR-East.Tokaido.Tokyo");

        let station = Station {
            same_as: id.clone(),
            title: "東京".to_string(),
            railway: RailwayId::new("odpt.Railway:JR-East.Tokaido"),
        };
        assert_eq!(station_title(Some(&station), &id), "東京");
    }

    #[test]
    fn delay_label_rounds_to_minutes() {
        assert_eq!(delay_label(0.0), "平常");
        assert_eq!(delay_label(29.0), "平常");
        assert_eq!(delay_label(30.0), "1分遅れ");
        assert_eq!(delay_label(90.0), "2分遅れ");
        assert_eq!(delay_label(300.0), "5分遅れ");
    }
}
