//! List every operator's railways, with directions and station order.

use std::error::Error;

use odpt_report::odpt::{
    OdptClient, OdptConfig, Operator, RailDirection, Railway, group_by,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = OdptClient::new(OdptConfig::from_env()?)?;

    let operators = client.fetch::<Operator>().await?;
    let directions = client.fetch::<RailDirection>().await?;
    let railways = client.fetch::<Railway>().await?;

    let by_operator = group_by(&railways, |railway| Some(railway.operator.clone()));

    for (operator_id, group) in &by_operator {
        let operator_title = operator_id
            .as_ref()
            .and_then(|id| operators.get(id))
            .map(|operator| operator.title.as_str())
            .unwrap_or("");
        let operator_key = operator_id.as_ref().map(|id| id.as_str()).unwrap_or("");
        println!("\n■ {operator_title} ({operator_key})");

        let mut group: Vec<_> = group.iter().collect();
        group.sort_by(|a, b| a.0.cmp(b.0));

        for (railway_id, railway) in group {
            println!("\n□ {} ({})", railway.title, railway_id);

            if let Some(descending) = &railway.descending_rail_direction {
                let descending_title = directions
                    .get(descending)
                    .map(|d| d.title.as_str())
                    .unwrap_or("");
                println!("↑{descending_title}({descending})");

                if let Some(ascending) = &railway.ascending_rail_direction {
                    let ascending_title = directions
                        .get(ascending)
                        .map(|d| d.title.as_str())
                        .unwrap_or("");
                    println!("↓{ascending_title}({ascending})");
                }
            }

            for entry in &railway.station_order {
                let title = entry
                    .station_title
                    .as_ref()
                    .and_then(|t| t.ja.as_deref())
                    .unwrap_or("");
                println!("[{:02}] {} ({})", entry.index, title, entry.station);
            }
        }
    }

    Ok(())
}
