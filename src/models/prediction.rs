//! Prediction model and request parameters.

use serde::Deserialize;

use crate::error::{MbtaError, Result};
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::alert::Alert;
use crate::models::route::{Route, RouteType};
use crate::models::schedule::Schedule;
use crate::models::stop::Stop;
use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{List, Params};

/// A real-time arrival/departure prediction for a trip at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: String,
    /// Predicted arrival time at the stop.
    pub arrival_time: Option<TimeIso8601>,
    /// Predicted departure time from the stop.
    pub departure_time: Option<TimeIso8601>,
    /// Direction in which the trip is traveling: 0 or 1.
    pub direction_id: i32,
    /// How the predicted stop relates to the scheduled stops.
    pub schedule_relationship: Option<ScheduleRelationship>,
    pub status: Option<String>,
    pub stop_sequence: i32,
    pub route: Relation<Route>,
    pub schedule: Relation<Schedule>,
    pub stop: Relation<Stop>,
    pub trip: Relation<Trip>,
    pub vehicle: Relation<Vehicle>,
    pub alerts: Vec<Relation<Alert>>,
}

/// How a predicted stop relates to the scheduled stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleRelationship {
    Added,
    Cancelled,
    NoData,
    Skipped,
    Unscheduled,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PredictionAttributes {
    arrival_time: Option<TimeIso8601>,
    departure_time: Option<TimeIso8601>,
    direction_id: i32,
    schedule_relationship: Option<ScheduleRelationship>,
    status: Option<String>,
    stop_sequence: i32,
}

impl Resource for Prediction {
    const TYPE: &'static str = "prediction";
    const PATH: &'static str = "predictions";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: PredictionAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            arrival_time: attributes.arrival_time,
            departure_time: attributes.departure_time,
            direction_id: attributes.direction_id,
            schedule_relationship: attributes.schedule_relationship,
            status: attributes.status,
            stop_sequence: attributes.stop_sequence,
            route: Relation::resolve(object, "route", included)?,
            schedule: Relation::resolve(object, "schedule", included)?,
            stop: Relation::resolve(object, "stop", included)?,
            trip: Relation::resolve(object, "trip", included)?,
            vehicle: Relation::resolve(object, "vehicle", included)?,
            alerts: Relation::resolve_many(object, "alerts", included)?,
        })
    }
}

/// Sort keys accepted by the predictions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSortKey {
    ArrivalTime,
    DepartureTime,
    DirectionId,
    ScheduleRelationship,
    Status,
    StopSequence,
}

impl SortKey for PredictionSortKey {
    fn as_str(self) -> &'static str {
        match self {
            PredictionSortKey::ArrivalTime => "arrival_time",
            PredictionSortKey::DepartureTime => "departure_time",
            PredictionSortKey::DirectionId => "direction_id",
            PredictionSortKey::ScheduleRelationship => "schedule_relationship",
            PredictionSortKey::Status => "status",
            PredictionSortKey::StopSequence => "stop_sequence",
        }
    }
}

/// Related resources that can be side-loaded for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionInclude {
    Schedule,
    Stop,
    Route,
    Trip,
    Vehicle,
    Alerts,
}

impl PredictionInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            PredictionInclude::Schedule => "schedule",
            PredictionInclude::Stop => "stop",
            PredictionInclude::Route => "route",
            PredictionInclude::Trip => "trip",
            PredictionInclude::Vehicle => "vehicle",
            PredictionInclude::Alerts => "alerts",
        }
    }
}

/// Extra options for [`Prediction::list`].
///
/// At least one filter must be set; the API silently returns nothing
/// otherwise, so the client rejects an unfiltered request locally.
#[derive(Debug, Clone, Default)]
pub struct ListPredictionsParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<PredictionSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<PredictionInclude>,
    /// Latitude to search around; must be paired with longitude.
    pub filter_latitude: Option<f64>,
    /// Longitude to search around; must be paired with latitude.
    pub filter_longitude: Option<f64>,
    /// Search radius in degrees; server default is 0.01.
    pub filter_radius: Option<f64>,
    pub filter_direction_id: Option<u8>,
    pub filter_route_type: Vec<RouteType>,
    pub filter_route: Vec<String>,
    pub filter_stop: Vec<String>,
    pub filter_trip: Vec<String>,
}

impl Params for ListPredictionsParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[prediction]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_opt("filter[latitude]", self.filter_latitude);
        query.push_opt("filter[longitude]", self.filter_longitude);
        query.push_opt("filter[radius]", self.filter_radius);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        let route_types: Vec<String> = self
            .filter_route_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[route_type]", &route_types);
        query.push_list("filter[route]", &self.filter_route);
        query.push_list("filter[stop]", &self.filter_stop);
        query.push_list("filter[trip]", &self.filter_trip);
        query.into_pairs()
    }

    fn validate(&self) -> Result<()> {
        let has_filter = !self.filter_route_type.is_empty()
            || !self.filter_route.is_empty()
            || !self.filter_stop.is_empty()
            || !self.filter_trip.is_empty()
            || self.filter_latitude.is_some()
            || self.filter_longitude.is_some()
            || self.filter_radius.is_some()
            || self.filter_direction_id.is_some();
        if !has_filter {
            return Err(MbtaError::InvalidConfig(
                "predictions require at least one filter to return results".to_string(),
            ));
        }
        Ok(())
    }
}

impl List for Prediction {
    type Params = ListPredictionsParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_unfiltered_request() {
        let err = ListPredictionsParams::default().validate().unwrap_err();
        assert!(matches!(err, MbtaError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_accepts_each_filter_kind() {
        let cases = [
            ListPredictionsParams {
                filter_route_type: vec![RouteType::Bus],
                ..Default::default()
            },
            ListPredictionsParams {
                filter_route: vec!["Red".to_string()],
                ..Default::default()
            },
            ListPredictionsParams {
                filter_stop: vec!["place-sstat".to_string()],
                ..Default::default()
            },
            ListPredictionsParams {
                filter_trip: vec!["T1".to_string()],
                ..Default::default()
            },
            ListPredictionsParams {
                filter_latitude: Some(42.0),
                filter_longitude: Some(-71.0),
                ..Default::default()
            },
            ListPredictionsParams {
                filter_direction_id: Some(1),
                ..Default::default()
            },
        ];
        for params in cases {
            assert!(params.validate().is_ok());
        }
    }
}
