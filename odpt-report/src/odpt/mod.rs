//! ODPT (Open Data Platform for Transportation) client.
//!
//! This module provides an HTTP client for the Tokyo public-transport
//! open-data API, plus the lookup-table helpers the reports are built on.
//!
//! Key characteristics of the API:
//! - one data-search endpoint serves every record type, templated by the
//!   RDF type name (`odpt:Railway`, `odpt:Station`, ...)
//! - the access key travels as the `acl:consumerKey` query parameter
//! - responses are JSON arrays of records whose fields are namespaced
//!   (`owl:sameAs`, `dc:title`, `odpt:*`); optional fields are usually
//!   omitted rather than sent as null

mod client;
mod error;
mod id;
mod index;
mod types;

pub use client::{OdptClient, OdptConfig};
pub use error::OdptError;
pub use id::{
    CalendarId, OperatorId, RailDirectionId, RailwayId, StationId, TrainId, TrainTimetableId,
    TrainTypeId,
};
pub use index::{group_by, index_by_id, resolve_station};
pub use types::{
    CalendarRecord, Operator, RailDirection, Railway, Resource, Station, StationOrder, Title,
    Train, TrainTimetable, TrainType,
};
