//! Typed identifiers for ODPT records.
//!
//! Every record carries an `owl:sameAs` identifier of the form
//! `odpt.<Type>:<Operator>.<Line>[.<Rest>]`. Wrapping each identifier space
//! in its own newtype keeps railway, station and calendar keys from being
//! mixed up in lookup tables. The identifiers are opaque strings as far as
//! the API is concerned; the structure-aware accessors below return `None`
//! rather than fail when an identifier does not follow the usual shape.

use std::fmt;

use chrono::Weekday;
use serde::Deserialize;

macro_rules! odpt_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The part after the vocabulary prefix, e.g. `Weekday` for
            /// `odpt.Calendar:Weekday`. Identifiers without a prefix are
            /// returned whole.
            pub fn local_name(&self) -> &str {
                match self.0.split_once(':') {
                    Some((_, rest)) => rest,
                    None => &self.0,
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

odpt_id!(
    /// Identifier of a railway operator, e.g. `odpt.Operator:JR-East`.
    OperatorId
);

odpt_id!(
    /// Identifier of a railway line, e.g. `odpt.Railway:JR-East.Tokaido`.
    RailwayId
);

odpt_id!(
    /// Identifier of a travel direction, e.g. `odpt.RailDirection:Inbound`.
    RailDirectionId
);

odpt_id!(
    /// Identifier of a train service type, e.g. `odpt.TrainType:JR-East.Local`.
    TrainTypeId
);

odpt_id!(
    /// Identifier of a schedule category, e.g. `odpt.Calendar:Weekday`.
    CalendarId
);

odpt_id!(
    /// Identifier of a station, e.g. `odpt.Station:JR-East.Tokaido.Tokyo`.
    StationId
);

odpt_id!(
    /// Identifier of a train timetable, e.g.
    /// `odpt.TrainTimetable:JR-East.Tokaido.123M.Weekday`.
    TrainTimetableId
);

odpt_id!(
    /// Identifier of a running train, e.g. `odpt.Train:JR-East.Tokaido.123M`.
    TrainId
);

impl CalendarId {
    /// The weekday schedule category.
    pub fn weekday() -> Self {
        Self::new("odpt.Calendar:Weekday")
    }

    /// The holiday schedule category.
    pub fn holiday() -> Self {
        Self::new("odpt.Calendar:Holiday")
    }

    /// The combined Saturday-and-holiday schedule category. Some timetables
    /// share a single schedule for every non-weekday.
    pub fn saturday_holiday() -> Self {
        Self::new("odpt.Calendar:SaturdayHoliday")
    }

    /// The schedule category naming a single day of the week.
    pub fn day_of_week(day: Weekday) -> Self {
        let name = match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        Self::new(format!("odpt.Calendar:{name}"))
    }
}

/// Derive `odpt.Railway:<Operator>.<Line>` from the first two segments of
/// an identifier's local part.
fn railway_of(local: &str) -> Option<RailwayId> {
    let mut segments = local.split('.');
    let operator = segments.next()?;
    let line = segments.next()?;
    Some(RailwayId::new(format!("odpt.Railway:{operator}.{line}")))
}

impl StationId {
    /// The railway this station belongs to, derived from the identifier
    /// structure. `None` when the identifier does not carry an
    /// operator-and-line prefix.
    pub fn railway(&self) -> Option<RailwayId> {
        let (_, local) = self.0.split_once(':')?;
        railway_of(local)
    }
}

impl TrainTimetableId {
    /// The railway this timetable belongs to.
    pub fn railway(&self) -> Option<RailwayId> {
        let (_, local) = self.0.split_once(':')?;
        railway_of(local)
    }

    /// The train-number segment of the identifier.
    pub fn train_number(&self) -> Option<&str> {
        let (_, local) = self.0.split_once(':')?;
        local.split('.').nth(2)
    }
}
