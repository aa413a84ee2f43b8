//! Vehicle model and request parameters.

use serde::Deserialize;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::{Route, RouteType};
use crate::models::stop::Stop;
use crate::models::trip::Trip;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{Get, List, Params};

/// The current state of a vehicle on a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: String,
    /// Bearing in degrees, clockwise from True North.
    pub bearing: f32,
    /// Status of the vehicle relative to the stops on its trip.
    pub current_status: Option<VehicleStatus>,
    pub current_stop_sequence: i32,
    /// Direction in which the trip is traveling: 0 or 1.
    pub direction_id: i32,
    /// User-visible label, such as the signage on the vehicle.
    pub label: String,
    /// Degrees North, in the WGS-84 coordinate system.
    pub latitude: f64,
    /// Degrees East, in the WGS-84 coordinate system.
    pub longitude: f64,
    /// Meters per second.
    pub speed: Option<f32>,
    /// Time at which the vehicle information was last updated.
    pub updated_at: Option<TimeIso8601>,
    pub route: Relation<Route>,
    /// The stop the vehicle is at or approaching.
    pub stop: Relation<Stop>,
    /// The trip the vehicle is currently on.
    pub trip: Relation<Trip>,
}

/// Status of a vehicle relative to the stops on its trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    InTransitTo,
    StoppedAt,
    IncomingAt,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VehicleAttributes {
    bearing: f32,
    current_status: Option<VehicleStatus>,
    current_stop_sequence: i32,
    direction_id: i32,
    label: String,
    latitude: f64,
    longitude: f64,
    speed: Option<f32>,
    updated_at: Option<TimeIso8601>,
}

impl Resource for Vehicle {
    const TYPE: &'static str = "vehicle";
    const PATH: &'static str = "vehicles";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: VehicleAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            bearing: attributes.bearing,
            current_status: attributes.current_status,
            current_stop_sequence: attributes.current_stop_sequence,
            direction_id: attributes.direction_id,
            label: attributes.label,
            latitude: attributes.latitude,
            longitude: attributes.longitude,
            speed: attributes.speed,
            updated_at: attributes.updated_at,
            route: Relation::resolve(object, "route", included)?,
            stop: Relation::resolve(object, "stop", included)?,
            trip: Relation::resolve(object, "trip", included)?,
        })
    }
}

/// Sort keys accepted by the vehicles endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleSortKey {
    Bearing,
    CurrentStatus,
    CurrentStopSequence,
    DirectionId,
    Label,
    Latitude,
    Longitude,
    Speed,
    UpdatedAt,
}

impl SortKey for VehicleSortKey {
    fn as_str(self) -> &'static str {
        match self {
            VehicleSortKey::Bearing => "bearing",
            VehicleSortKey::CurrentStatus => "current_status",
            VehicleSortKey::CurrentStopSequence => "current_stop_sequence",
            VehicleSortKey::DirectionId => "direction_id",
            VehicleSortKey::Label => "label",
            VehicleSortKey::Latitude => "latitude",
            VehicleSortKey::Longitude => "longitude",
            VehicleSortKey::Speed => "speed",
            VehicleSortKey::UpdatedAt => "updated_at",
        }
    }
}

/// Related resources that can be side-loaded for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleInclude {
    Trip,
    Stop,
    Route,
}

impl VehicleInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            VehicleInclude::Trip => "trip",
            VehicleInclude::Stop => "stop",
            VehicleInclude::Route => "route",
        }
    }
}

/// Extra options for [`Vehicle::get`].
#[derive(Debug, Clone, Default)]
pub struct GetVehicleParams {
    pub fields: Vec<String>,
    pub include: Vec<VehicleInclude>,
}

impl Params for GetVehicleParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[vehicle]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Vehicle::list`].
#[derive(Debug, Clone, Default)]
pub struct ListVehiclesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<VehicleSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<VehicleInclude>,
    pub filter_id: Vec<String>,
    /// Filter by trip IDs. A vehicle on a multi-route trip is returned for
    /// any of its routes.
    pub filter_trip: Vec<String>,
    pub filter_label: Vec<String>,
    pub filter_route: Vec<String>,
    pub filter_direction_id: Option<u8>,
    pub filter_route_type: Vec<RouteType>,
}

impl Params for ListVehiclesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[vehicle]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_list("filter[id]", &self.filter_id);
        query.push_list("filter[trip]", &self.filter_trip);
        query.push_list("filter[label]", &self.filter_label);
        query.push_list("filter[route]", &self.filter_route);
        let route_types: Vec<String> = self
            .filter_route_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[route_type]", &route_types);
        query.into_pairs()
    }
}

impl Get for Vehicle {
    type Params = GetVehicleParams;
}

impl List for Vehicle {
    type Params = ListVehiclesParams;
}
