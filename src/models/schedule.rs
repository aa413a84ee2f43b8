//! Schedule model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::{MbtaError, Result};
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::prediction::Prediction;
use crate::models::route::Route;
use crate::models::stop::Stop;
use crate::models::trip::Trip;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{List, Params};

/// The scheduled arrival and departure of a trip at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: String,
    /// When the trip arrives at the stop; absent for the first stop of a
    /// trip.
    pub arrival_time: Option<TimeIso8601>,
    /// When the trip departs the stop; absent for the last stop of a trip.
    pub departure_time: Option<TimeIso8601>,
    /// Direction in which the trip is traveling: 0 or 1.
    pub direction_id: i32,
    /// How the vehicle arrives at the stop.
    pub drop_off_type: PickupDropOffType,
    /// How the vehicle departs from the stop.
    pub pickup_type: PickupDropOffType,
    /// Monotonically increasing (not necessarily consecutive) position of
    /// the stop within the trip.
    pub stop_sequence: i32,
    /// Whether the given times are exact or estimates.
    pub timepoint: bool,
    pub prediction: Relation<Prediction>,
    pub route: Relation<Route>,
    pub stop: Relation<Stop>,
    pub trip: Relation<Trip>,
}

/// How a vehicle picks up or drops off passengers at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum PickupDropOffType {
    #[default]
    Regular = 0,
    NotAvailable = 1,
    MustPhoneAgency = 2,
    MustCoordinateWithDriver = 3,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScheduleAttributes {
    arrival_time: Option<TimeIso8601>,
    departure_time: Option<TimeIso8601>,
    direction_id: i32,
    drop_off_type: PickupDropOffType,
    pickup_type: PickupDropOffType,
    stop_sequence: i32,
    timepoint: bool,
}

impl Resource for Schedule {
    const TYPE: &'static str = "schedule";
    const PATH: &'static str = "schedules";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: ScheduleAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            arrival_time: attributes.arrival_time,
            departure_time: attributes.departure_time,
            direction_id: attributes.direction_id,
            drop_off_type: attributes.drop_off_type,
            pickup_type: attributes.pickup_type,
            stop_sequence: attributes.stop_sequence,
            timepoint: attributes.timepoint,
            prediction: Relation::resolve(object, "prediction", included)?,
            route: Relation::resolve(object, "route", included)?,
            stop: Relation::resolve(object, "stop", included)?,
            trip: Relation::resolve(object, "trip", included)?,
        })
    }
}

/// Sort keys accepted by the schedules endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSortKey {
    ArrivalTime,
    DepartureTime,
    DirectionId,
    DropOffType,
    PickupType,
    StopSequence,
    Timepoint,
}

impl SortKey for ScheduleSortKey {
    fn as_str(self) -> &'static str {
        match self {
            ScheduleSortKey::ArrivalTime => "arrival_time",
            ScheduleSortKey::DepartureTime => "departure_time",
            ScheduleSortKey::DirectionId => "direction_id",
            ScheduleSortKey::DropOffType => "drop_off_type",
            ScheduleSortKey::PickupType => "pickup_type",
            ScheduleSortKey::StopSequence => "stop_sequence",
            ScheduleSortKey::Timepoint => "timepoint",
        }
    }
}

/// Related resources that can be side-loaded for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleInclude {
    Prediction,
    Route,
    Stop,
    Trip,
}

impl ScheduleInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ScheduleInclude::Prediction => "prediction",
            ScheduleInclude::Route => "route",
            ScheduleInclude::Stop => "stop",
            ScheduleInclude::Trip => "trip",
        }
    }
}

/// Extra options for [`Schedule::list`].
///
/// At least one of the route, stop, or trip filters must be set; the API
/// silently returns nothing otherwise, so the client rejects such a request
/// locally.
#[derive(Debug, Clone, Default)]
pub struct ListSchedulesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<ScheduleSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<ScheduleInclude>,
    /// Filter by service dates.
    pub filter_date: Vec<TimeIso8601>,
    pub filter_direction_id: Option<u8>,
    /// Earliest time to return, `HH:MM`; use more than 24 hours to reach
    /// past midnight.
    pub filter_min_time: Vec<String>,
    /// Latest time to return, `HH:MM`.
    pub filter_max_time: Vec<String>,
    pub filter_route: Vec<String>,
    pub filter_stop: Vec<String>,
    pub filter_trip: Vec<String>,
    /// Position of the stop in the trip; `first` and `last` are accepted as
    /// well as numbers.
    pub filter_stop_sequence: Option<String>,
}

impl Params for ListSchedulesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[schedule]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        let dates: Vec<String> = self.filter_date.iter().map(|d| d.to_filter_value()).collect();
        query.push_list("filter[date]", &dates);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_list("filter[min_time]", &self.filter_min_time);
        query.push_list("filter[max_time]", &self.filter_max_time);
        query.push_list("filter[route]", &self.filter_route);
        query.push_list("filter[stop]", &self.filter_stop);
        query.push_list("filter[trip]", &self.filter_trip);
        query.push_opt("filter[stop_sequence]", self.filter_stop_sequence.clone());
        query.into_pairs()
    }

    fn validate(&self) -> Result<()> {
        if self.filter_route.is_empty() && self.filter_stop.is_empty() && self.filter_trip.is_empty()
        {
            return Err(MbtaError::InvalidConfig(
                "schedules require at least one of the route, stop, or trip filters".to_string(),
            ));
        }
        Ok(())
    }
}

impl List for Schedule {
    type Params = ListSchedulesParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_required_filter() {
        let err = ListSchedulesParams::default().validate().unwrap_err();
        assert!(matches!(err, MbtaError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_accepts_any_required_filter() {
        for params in [
            ListSchedulesParams {
                filter_route: vec!["Red".to_string()],
                ..Default::default()
            },
            ListSchedulesParams {
                filter_stop: vec!["70061".to_string()],
                ..Default::default()
            },
            ListSchedulesParams {
                filter_trip: vec!["T1".to_string()],
                ..Default::default()
            },
        ] {
            assert!(params.validate().is_ok());
        }
    }
}
