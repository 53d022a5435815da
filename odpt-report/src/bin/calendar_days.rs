//! Print the schedule categories of every day in the current year.

use std::error::Error;

use chrono::{Datelike, Local, NaiveDate};

use odpt_report::calendar::day_classes;
use odpt_report::holiday::{HolidayClient, HolidayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let holidays = HolidayClient::new(HolidayConfig::default())?.fetch().await?;

    let year = Local::now().year();
    let mut date = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("invalid start of year")?;

    while date.year() == year {
        let classes = day_classes(date, &holidays, None);

        let mut names: Vec<&str> = classes.iter().map(|class| class.local_name()).collect();
        names.sort_unstable();

        println!("{}: {}", date.format("%Y/%m/%d"), names.join(","));

        date = date.succ_opt().ok_or("date out of range")?;
    }

    Ok(())
}
