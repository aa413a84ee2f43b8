//! Route model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::line::Line;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{Get, List, Params};

/// A named transit route, e.g. the Red Line or the 77 bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    /// Route color as a six-character hex string, e.g. `DA291C`.
    pub color: String,
    /// Details about stops or vehicles for the route.
    pub description: String,
    /// The destination for each direction, indexed by direction ID.
    pub direction_destinations: Vec<String>,
    /// The name of each direction, indexed by direction ID.
    pub direction_names: Vec<String>,
    /// Fare class for the route, e.g. `Rapid Transit`.
    pub fare_class: Option<String>,
    /// The full name of the route.
    pub long_name: String,
    /// A short name or number for the route, may be empty.
    pub short_name: String,
    /// Routes sort in ascending order of this value.
    pub sort_order: i32,
    /// Legible color for text drawn against `color`.
    pub text_color: String,
    pub route_type: RouteType,
    /// The line this route belongs to. ID-only unless `line` was included.
    pub line: Relation<Line>,
}

/// GTFS route type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum RouteType {
    #[default]
    LightRail = 0,
    Subway = 1,
    Rail = 2,
    Bus = 3,
    Ferry = 4,
    CableCar = 5,
    Gondola = 6,
    Funicular = 7,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RouteAttributes {
    color: String,
    description: String,
    direction_destinations: Vec<String>,
    direction_names: Vec<String>,
    fare_class: Option<String>,
    long_name: String,
    short_name: String,
    sort_order: i32,
    text_color: String,
    #[serde(rename = "type")]
    route_type: RouteType,
}

impl Resource for Route {
    const TYPE: &'static str = "route";
    const PATH: &'static str = "routes";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: RouteAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            color: attributes.color,
            description: attributes.description,
            direction_destinations: attributes.direction_destinations,
            direction_names: attributes.direction_names,
            fare_class: attributes.fare_class,
            long_name: attributes.long_name,
            short_name: attributes.short_name,
            sort_order: attributes.sort_order,
            text_color: attributes.text_color,
            route_type: attributes.route_type,
            line: Relation::resolve(object, "line", included)?,
        })
    }
}

/// Sort keys accepted by the routes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSortKey {
    Color,
    Description,
    DirectionDestinations,
    DirectionNames,
    FareClass,
    LongName,
    ShortName,
    SortOrder,
    TextColor,
    Type,
}

impl SortKey for RouteSortKey {
    fn as_str(self) -> &'static str {
        match self {
            RouteSortKey::Color => "color",
            RouteSortKey::Description => "description",
            RouteSortKey::DirectionDestinations => "direction_destinations",
            RouteSortKey::DirectionNames => "direction_names",
            RouteSortKey::FareClass => "fare_class",
            RouteSortKey::LongName => "long_name",
            RouteSortKey::ShortName => "short_name",
            RouteSortKey::SortOrder => "sort_order",
            RouteSortKey::TextColor => "text_color",
            RouteSortKey::Type => "type",
        }
    }
}

/// Related resources that can be side-loaded for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteInclude {
    Line,
    Stop,
    RoutePatterns,
}

impl RouteInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RouteInclude::Line => "line",
            RouteInclude::Stop => "stop",
            RouteInclude::RoutePatterns => "route_patterns",
        }
    }
}

/// Extra options for [`Route::get`].
#[derive(Debug, Clone, Default)]
pub struct GetRouteParams {
    pub fields: Vec<String>,
    pub include: Vec<RouteInclude>,
}

impl Params for GetRouteParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[route]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Route::list`].
#[derive(Debug, Clone, Default)]
pub struct ListRoutesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<RouteSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<RouteInclude>,
    /// Filter by direction of travel along the route (0 or 1).
    pub filter_direction_id: Option<u8>,
    /// Filter by a date the route is active, or `NOW`.
    pub filter_date: Option<TimeIso8601>,
    pub filter_id: Vec<String>,
    /// Filter to routes serving this stop.
    pub filter_stop: Option<String>,
    pub filter_type: Vec<RouteType>,
}

impl Params for ListRoutesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[route]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_opt(
            "filter[date]",
            self.filter_date.as_ref().map(|d| d.to_filter_value()),
        );
        query.push_list("filter[id]", &self.filter_id);
        query.push_opt("filter[stop]", self.filter_stop.clone());
        let route_types: Vec<String> = self
            .filter_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[type]", &route_types);
        query.into_pairs()
    }
}

impl Get for Route {
    type Params = GetRouteParams;
}

impl List for Route {
    type Params = ListRoutesParams;
}
