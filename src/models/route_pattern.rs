//! Route pattern model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::Route;
use crate::models::trip::Trip;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::traits::{Get, List, Params};

/// One of the variants of service a route can run, grouped under a route
/// by direction and stop sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePattern {
    pub id: String,
    /// Direction in which trips on the pattern travel: 0 or 1.
    pub direction_id: i32,
    /// User-facing description of where trips on the pattern operate.
    pub name: String,
    /// Suggested display order relative to other patterns.
    pub sort_order: i32,
    /// When the pattern operates, if not all the time.
    pub time_desc: Option<String>,
    /// How common the pattern is relative to other patterns on the route.
    pub typicality: RoutePatternTypicality,
    /// A trip that can be considered representative of the pattern.
    pub representative_trip: Relation<Trip>,
    pub route: Relation<Route>,
}

/// How common a route pattern is relative to other patterns on its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum RoutePatternTypicality {
    #[default]
    NotDefined = 0,
    /// Most common patterns for the route, e.g. the subway's daily service.
    Typical = 1,
    /// Deviations from the typical pattern, such as branches.
    Deviation = 2,
    /// Highly atypical patterns, such as a special routing that runs a
    /// few times per day.
    Atypical = 3,
    /// Diversions from normal service, such as shuttles and detours.
    Diversion = 4,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RoutePatternAttributes {
    direction_id: i32,
    name: String,
    sort_order: i32,
    time_desc: Option<String>,
    typicality: RoutePatternTypicality,
}

impl Resource for RoutePattern {
    const TYPE: &'static str = "route_pattern";
    const PATH: &'static str = "route-patterns";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: RoutePatternAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            direction_id: attributes.direction_id,
            name: attributes.name,
            sort_order: attributes.sort_order,
            time_desc: attributes.time_desc,
            typicality: attributes.typicality,
            representative_trip: Relation::resolve(object, "representative_trip", included)?,
            route: Relation::resolve(object, "route", included)?,
        })
    }
}

/// Sort keys accepted by the route patterns endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePatternSortKey {
    DirectionId,
    Name,
    SortOrder,
    TimeDesc,
    Typicality,
}

impl SortKey for RoutePatternSortKey {
    fn as_str(self) -> &'static str {
        match self {
            RoutePatternSortKey::DirectionId => "direction_id",
            RoutePatternSortKey::Name => "name",
            RoutePatternSortKey::SortOrder => "sort_order",
            RoutePatternSortKey::TimeDesc => "time_desc",
            RoutePatternSortKey::Typicality => "typicality",
        }
    }
}

/// Related resources that can be side-loaded for a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePatternInclude {
    Route,
    RepresentativeTrip,
}

impl RoutePatternInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RoutePatternInclude::Route => "route",
            RoutePatternInclude::RepresentativeTrip => "representative_trip",
        }
    }
}

/// Extra options for [`RoutePattern::get`].
#[derive(Debug, Clone, Default)]
pub struct GetRoutePatternParams {
    pub fields: Vec<String>,
    pub include: Vec<RoutePatternInclude>,
}

impl Params for GetRoutePatternParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[route_pattern]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`RoutePattern::list`].
#[derive(Debug, Clone, Default)]
pub struct ListRoutePatternsParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<RoutePatternSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<RoutePatternInclude>,
    pub filter_id: Vec<String>,
    pub filter_route: Vec<String>,
    pub filter_direction_id: Option<u8>,
}

impl Params for ListRoutePatternsParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[route_pattern]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_list("filter[id]", &self.filter_id);
        query.push_list("filter[route]", &self.filter_route);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.into_pairs()
    }
}

impl Get for RoutePattern {
    type Params = GetRoutePatternParams;
}

impl List for RoutePattern {
    type Params = ListRoutePatternsParams;
}
