//! ODPT record DTOs.
//!
//! These types map directly to the ODPT JSON vocabulary. They use `Option`
//! liberally because the API omits optional fields rather than sending null
//! values in most cases (real-time train positions are the exception: their
//! `odpt:fromStation`/`odpt:toStation` may be present but null).

use std::hash::Hash;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::id::{
    CalendarId, OperatorId, RailDirectionId, RailwayId, StationId, TrainId, TrainTimetableId,
    TrainTypeId,
};

/// A record type retrievable from the ODPT API.
pub trait Resource: DeserializeOwned {
    /// RDF type name used in request URLs, e.g. `odpt:Railway`.
    const TYPE: &'static str;

    /// Identifier type used to key lookup tables for this record type.
    type Id: Clone + Eq + Hash;

    /// The record's unique `owl:sameAs` identifier.
    fn id(&self) -> &Self::Id;
}

/// A railway operator.
#[derive(Debug, Clone, Deserialize)]
pub struct Operator {
    #[serde(rename = "owl:sameAs")]
    pub same_as: OperatorId,
    #[serde(rename = "dc:title")]
    pub title: String,
}

impl Resource for Operator {
    const TYPE: &'static str = "odpt:Operator";
    type Id = OperatorId;

    fn id(&self) -> &OperatorId {
        &self.same_as
    }
}

/// A travel direction on a railway (inbound/outbound etc.).
#[derive(Debug, Clone, Deserialize)]
pub struct RailDirection {
    #[serde(rename = "owl:sameAs")]
    pub same_as: RailDirectionId,
    #[serde(rename = "dc:title")]
    pub title: String,
}

impl Resource for RailDirection {
    const TYPE: &'static str = "odpt:RailDirection";
    type Id = RailDirectionId;

    fn id(&self) -> &RailDirectionId {
        &self.same_as
    }
}

/// A train service type (local, rapid, limited express, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct TrainType {
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainTypeId,
    #[serde(rename = "dc:title")]
    pub title: String,
}

impl Resource for TrainType {
    const TYPE: &'static str = "odpt:TrainType";
    type Id = TrainTypeId;

    fn id(&self) -> &TrainTypeId {
        &self.same_as
    }
}

/// A multilingual title, e.g. `{"ja": "東京", "en": "Tokyo"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Title {
    pub ja: Option<String>,
    pub en: Option<String>,
}

/// One entry of a railway's station order.
#[derive(Debug, Clone, Deserialize)]
pub struct StationOrder {
    /// Position along the line, starting at 1.
    #[serde(rename = "odpt:index")]
    pub index: u32,
    #[serde(rename = "odpt:station")]
    pub station: StationId,
    #[serde(rename = "odpt:stationTitle")]
    pub station_title: Option<Title>,
}

/// A railway line.
#[derive(Debug, Clone, Deserialize)]
pub struct Railway {
    #[serde(rename = "owl:sameAs")]
    pub same_as: RailwayId,
    #[serde(rename = "dc:title")]
    pub title: String,
    #[serde(rename = "odpt:operator")]
    pub operator: OperatorId,
    #[serde(rename = "odpt:ascendingRailDirection")]
    pub ascending_rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:descendingRailDirection")]
    pub descending_rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:stationOrder", default)]
    pub station_order: Vec<StationOrder>,
}

impl Resource for Railway {
    const TYPE: &'static str = "odpt:Railway";
    type Id = RailwayId;

    fn id(&self) -> &RailwayId {
        &self.same_as
    }
}

/// A station on a railway.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    #[serde(rename = "owl:sameAs")]
    pub same_as: StationId,
    #[serde(rename = "dc:title")]
    pub title: String,
    #[serde(rename = "odpt:railway")]
    pub railway: RailwayId,
}

impl Resource for Station {
    const TYPE: &'static str = "odpt:Station";
    type Id = StationId;

    fn id(&self) -> &StationId {
        &self.same_as
    }
}

/// A schedule category.
///
/// Built-in categories (`Weekday`, `Holiday`, the days of the week, ...)
/// carry no explicit dates. Ad-hoc categories list the exact dates they
/// apply on in `odpt:day`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRecord {
    #[serde(rename = "owl:sameAs")]
    pub same_as: CalendarId,
    #[serde(rename = "dc:title")]
    pub title: Option<String>,
    #[serde(rename = "odpt:day")]
    pub day: Option<Vec<NaiveDate>>,
}

impl Resource for CalendarRecord {
    const TYPE: &'static str = "odpt:Calendar";
    type Id = CalendarId;

    fn id(&self) -> &CalendarId {
        &self.same_as
    }
}

/// The timetable of one train on one schedule category.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainTimetable {
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainTimetableId,
    #[serde(rename = "odpt:trainNumber")]
    pub train_number: String,
    #[serde(rename = "odpt:railway")]
    pub railway: RailwayId,
    #[serde(rename = "odpt:railDirection")]
    pub rail_direction: Option<RailDirectionId>,
    /// Schedule category this timetable applies on. Absent means the
    /// timetable applies every day.
    #[serde(rename = "odpt:calendar")]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:trainType")]
    pub train_type: Option<TrainTypeId>,
    #[serde(rename = "odpt:trainName")]
    pub train_name: Option<String>,
    #[serde(rename = "odpt:originStation")]
    pub origin_station: Option<Vec<StationId>>,
    #[serde(rename = "odpt:destinationStation")]
    pub destination_station: Option<Vec<StationId>>,
    /// Timetables this train continues from, possibly on another railway.
    #[serde(rename = "odpt:previousTrainTimetable")]
    pub previous_train_timetable: Option<Vec<TrainTimetableId>>,
    /// Timetables this train continues into, possibly on another railway.
    #[serde(rename = "odpt:nextTrainTimetable")]
    pub next_train_timetable: Option<Vec<TrainTimetableId>>,
}

impl Resource for TrainTimetable {
    const TYPE: &'static str = "odpt:TrainTimetable";
    type Id = TrainTimetableId;

    fn id(&self) -> &TrainTimetableId {
        &self.same_as
    }
}

/// The real-time position of a running train.
#[derive(Debug, Clone, Deserialize)]
pub struct Train {
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainId,
    #[serde(rename = "odpt:trainNumber")]
    pub train_number: String,
    #[serde(rename = "odpt:railway")]
    pub railway: RailwayId,
    #[serde(rename = "odpt:railDirection")]
    pub rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:trainType")]
    pub train_type: Option<TrainTypeId>,
    /// Number of cars.
    #[serde(rename = "odpt:carComposition")]
    pub car_composition: Option<u32>,
    /// Operator owning the rolling stock, when different from the railway's.
    #[serde(rename = "odpt:trainOwner")]
    pub train_owner: Option<OperatorId>,
    #[serde(rename = "odpt:destinationStation")]
    pub destination_station: Option<Vec<StationId>>,
    /// Station the train last departed. May be sent as an explicit null.
    #[serde(rename = "odpt:fromStation")]
    pub from_station: Option<StationId>,
    /// Station the train is heading to. Null while stopped at a station.
    #[serde(rename = "odpt:toStation")]
    pub to_station: Option<StationId>,
    /// Delay in seconds.
    #[serde(rename = "odpt:delay")]
    pub delay: Option<f64>,
}

impl Resource for Train {
    const TYPE: &'static str = "odpt:Train";
    type Id = TrainId;

    fn id(&self) -> &TrainId {
        &self.same_as
    }
}
