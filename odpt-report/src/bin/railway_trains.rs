//! List the trains serving one railway on today's schedule.
//!
//! Fetches the railway's timetables, classifies today against the holiday
//! table and the published calendars, and prints the trains whose schedule
//! category applies, grouped by direction.

use std::error::Error;

use chrono::Local;

use odpt_report::calendar::day_classes;
use odpt_report::holiday::{HolidayClient, HolidayConfig};
use odpt_report::odpt::{
    CalendarRecord, OdptClient, OdptConfig, RailDirection, Railway, RailwayId, Station,
    TrainTimetable, TrainType, group_by, resolve_station,
};
use odpt_report::report::{connection_label, journey_label, station_title};

/// Railway whose timetable is printed.
const RAILWAY: &str = "odpt.Railway:JR-East.Tokaido";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let railway_id = RailwayId::new(RAILWAY);
    let client = OdptClient::new(OdptConfig::from_env()?)?;

    let railways = client.fetch::<Railway>().await?;
    let directions = client.fetch::<RailDirection>().await?;
    let train_types = client.fetch::<TrainType>().await?;
    let calendars = client.fetch::<CalendarRecord>().await?;
    let mut stations = client
        .fetch_where::<Station>(&[("odpt:railway", RAILWAY)])
        .await?;
    let timetables = client
        .fetch_where::<TrainTimetable>(&[("odpt:railway", RAILWAY)])
        .await?;

    let by_direction = group_by(&timetables, |timetable| timetable.rail_direction.clone());

    let holidays = HolidayClient::new(HolidayConfig::default())?.fetch().await?;
    let today = Local::now().date_naive();
    let classes = day_classes(today, &holidays, Some(&calendars));

    for (direction, trains) in &by_direction {
        let direction_title = direction
            .as_ref()
            .and_then(|id| directions.get(id))
            .map(|d| d.title.as_str())
            .unwrap_or("");
        println!("\n■ {direction_title}");

        let mut trains: Vec<_> = trains.iter().collect();
        trains.sort_by(|a, b| a.0.cmp(b.0));

        for (_, timetable) in trains {
            // Skip trains whose schedule category does not apply today.
            if let Some(calendar) = &timetable.calendar {
                if !classes.contains(calendar) {
                    continue;
                }
            }

            let train_type = timetable
                .train_type
                .as_ref()
                .and_then(|id| train_types.get(id))
                .map(|t| t.title.as_str())
                .unwrap_or("");
            let train_name = timetable.train_name.as_deref().unwrap_or("");

            let mut origins = Vec::new();
            for id in timetable.origin_station.as_deref().unwrap_or(&[]) {
                let station = resolve_station(&client, id, &mut stations).await?;
                origins.push(station_title(station, id));
            }

            let mut destinations = Vec::new();
            for id in timetable.destination_station.as_deref().unwrap_or(&[]) {
                let station = resolve_station(&client, id, &mut stations).await?;
                destinations.push(station_title(station, id));
            }

            let previous: Vec<String> = timetable
                .previous_train_timetable
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|connection| connection_label(connection, &railway_id, &railways))
                .collect();
            let next: Vec<String> = timetable
                .next_train_timetable
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|connection| connection_label(connection, &railway_id, &railways))
                .collect();

            println!(
                "[{}] {} {} {}",
                timetable.train_number,
                train_name,
                train_type,
                journey_label(&origins, &destinations, &previous, &next),
            );
        }
    }

    Ok(())
}
