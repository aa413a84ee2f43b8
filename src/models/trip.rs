//! Trip model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::Route;
use crate::models::route_pattern::RoutePattern;
use crate::models::service::Service;
use crate::models::shape::Shape;
use crate::models::stop::WheelchairBoarding;
use crate::models::vehicle::Vehicle;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{Get, List, Params};

/// One scheduled journey of a vehicle along a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub bikes_allowed: BikesAllowed,
    /// ID used to group sequential trips made by the same vehicle for a
    /// given service.
    pub block_id: String,
    /// Direction in which the trip is traveling: 0 or 1.
    pub direction_id: i32,
    /// The text on the sign identifying the trip's destination to
    /// passengers.
    pub headsign: String,
    /// The text that appears in schedules and sign boards to identify the
    /// trip to passengers.
    pub name: String,
    pub wheelchair_accessible: WheelchairBoarding,
    pub route: Relation<Route>,
    pub route_pattern: Relation<RoutePattern>,
    pub service: Relation<Service>,
    pub shape: Relation<Shape>,
    pub vehicle: Relation<Vehicle>,
}

/// Whether bikes are allowed on a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum BikesAllowed {
    #[default]
    NoInfo = 0,
    /// The vehicle on this trip can accommodate at least one bicycle.
    Allowed = 1,
    /// No bicycles are allowed on this trip.
    NotAllowed = 2,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TripAttributes {
    bikes_allowed: BikesAllowed,
    block_id: String,
    direction_id: i32,
    headsign: String,
    name: String,
    wheelchair_accessible: WheelchairBoarding,
}

impl Resource for Trip {
    const TYPE: &'static str = "trip";
    const PATH: &'static str = "trips";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: TripAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            bikes_allowed: attributes.bikes_allowed,
            block_id: attributes.block_id,
            direction_id: attributes.direction_id,
            headsign: attributes.headsign,
            name: attributes.name,
            wheelchair_accessible: attributes.wheelchair_accessible,
            route: Relation::resolve(object, "route", included)?,
            route_pattern: Relation::resolve(object, "route_pattern", included)?,
            service: Relation::resolve(object, "service", included)?,
            shape: Relation::resolve(object, "shape", included)?,
            vehicle: Relation::resolve(object, "vehicle", included)?,
        })
    }
}

/// Sort keys accepted by the trips endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripSortKey {
    BikesAllowed,
    BlockId,
    DirectionId,
    Headsign,
    Name,
    WheelchairAccessible,
}

impl SortKey for TripSortKey {
    fn as_str(self) -> &'static str {
        match self {
            TripSortKey::BikesAllowed => "bikes_allowed",
            TripSortKey::BlockId => "block_id",
            TripSortKey::DirectionId => "direction_id",
            TripSortKey::Headsign => "headsign",
            TripSortKey::Name => "name",
            TripSortKey::WheelchairAccessible => "wheelchair_accessible",
        }
    }
}

/// Related resources that can be side-loaded for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripInclude {
    Route,
    Vehicle,
    Service,
    Shape,
    RoutePattern,
    Predictions,
}

impl TripInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TripInclude::Route => "route",
            TripInclude::Vehicle => "vehicle",
            TripInclude::Service => "service",
            TripInclude::Shape => "shape",
            TripInclude::RoutePattern => "route_pattern",
            TripInclude::Predictions => "predictions",
        }
    }
}

/// Extra options for [`Trip::get`].
#[derive(Debug, Clone, Default)]
pub struct GetTripParams {
    pub fields: Vec<String>,
    pub include: Vec<TripInclude>,
}

impl Params for GetTripParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[trip]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Trip::list`].
#[derive(Debug, Clone, Default)]
pub struct ListTripsParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<TripSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<TripInclude>,
    /// Filter by trips active on a service date. Trips beginning between
    /// midnight and 3am belong to the previous service day.
    pub filter_date: Option<TimeIso8601>,
    pub filter_direction_id: Option<u8>,
    pub filter_route: Vec<String>,
    pub filter_route_pattern: Vec<String>,
    pub filter_id: Vec<String>,
    pub filter_name: Vec<String>,
}

impl Params for ListTripsParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[trip]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_opt(
            "filter[date]",
            self.filter_date.as_ref().map(|d| d.to_filter_value()),
        );
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_list("filter[route]", &self.filter_route);
        query.push_list("filter[route_pattern]", &self.filter_route_pattern);
        query.push_list("filter[id]", &self.filter_id);
        query.push_list("filter[name]", &self.filter_name);
        query.into_pairs()
    }
}

impl Get for Trip {
    type Params = GetTripParams;
}

impl List for Trip {
    type Params = ListTripsParams;
}
