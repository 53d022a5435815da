//! Show the current position of every train running on one railway.

use std::error::Error;

use odpt_report::odpt::{
    OdptClient, OdptConfig, Operator, RailDirection, Railway, RailwayId, Station, Train,
    TrainType, group_by, resolve_station,
};
use odpt_report::report::{delay_label, join_names, station_title};

/// Railway whose trains are shown.
const RAILWAY: &str = "odpt.Railway:JR-East.Tokaido";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let railway_id = RailwayId::new(RAILWAY);
    let client = OdptClient::new(OdptConfig::from_env()?)?;

    let operators = client.fetch::<Operator>().await?;
    let railways = client.fetch::<Railway>().await?;
    let directions = client.fetch::<RailDirection>().await?;
    let train_types = client.fetch::<TrainType>().await?;
    let mut stations = client
        .fetch_where::<Station>(&[("odpt:railway", RAILWAY)])
        .await?;
    let trains = client
        .fetch_where::<Train>(&[("odpt:railway", RAILWAY)])
        .await?;

    let railway_title = railways
        .get(&railway_id)
        .map(|r| r.title.as_str())
        .unwrap_or("");

    let by_direction = group_by(&trains, |train| train.rail_direction.clone());

    for (direction, group) in &by_direction {
        let direction_title = direction
            .as_ref()
            .and_then(|id| directions.get(id))
            .map(|d| d.title.as_str())
            .unwrap_or("");
        println!("\n■ {railway_title}（{direction_title}） 列車走行位置");

        let mut group: Vec<_> = group.iter().collect();
        group.sort_by(|a, b| a.0.cmp(b.0));

        for (_, train) in group {
            let train_type = train
                .train_type
                .as_ref()
                .and_then(|id| train_types.get(id))
                .map(|t| t.title.as_str())
                .unwrap_or("");

            let cars = train
                .car_composition
                .map(|n| format!("{n:>2}両"))
                .unwrap_or_default();

            let owner = train
                .train_owner
                .as_ref()
                .and_then(|id| operators.get(id))
                .map(|operator| format!("車両: {}", operator.title))
                .unwrap_or_default();

            let mut destinations = Vec::new();
            for id in train.destination_station.as_deref().unwrap_or(&[]) {
                let station = resolve_station(&client, id, &mut stations).await?;
                destinations.push(station_title(station, id));
            }

            // A train between stations has both endpoints; one stopped at a
            // station has only fromStation.
            let mut position = Vec::new();
            for id in [&train.from_station, &train.to_station].into_iter().flatten() {
                let station = resolve_station(&client, id, &mut stations).await?;
                position.push(station_title(station, id));
            }

            let delay = train.delay.map(delay_label).unwrap_or_default();

            println!(
                "[{:>5}] {} {} {}行き: {} （{}） {}",
                train.train_number,
                train_type,
                cars,
                join_names(&destinations),
                position.join("→"),
                delay,
                owner,
            );
        }
    }

    Ok(())
}
