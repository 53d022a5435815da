//! Tokyo public-transit open-data reports.
//!
//! Retrieves operators, railways, stations, timetables and real-time train
//! positions from the ODPT API, joins them with the Cabinet Office public
//! holiday table, and renders console reports. The classifier in
//! [`calendar`] decides which schedule categories apply on a given date,
//! which is what selects the correct timetable variant.

pub mod calendar;
pub mod holiday;
pub mod odpt;
pub mod report;
