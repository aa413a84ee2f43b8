//! Shape model and request parameters.

use serde::Deserialize;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::Route;
use crate::models::stop::Stop;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::traits::{Get, List, Params};

/// The path a vehicle travels along a route variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: String,
    /// Direction in which the trip is traveling: 0 or 1.
    pub direction_id: i32,
    /// User-facing name for the variant, such as a headsign.
    pub name: String,
    /// Path of the shape in the Encoded Polyline Algorithm Format.
    pub polyline: String,
    /// Representativeness of the variant; negative values are exceptional
    /// and should generally be skipped when presenting routes.
    pub priority: i32,
    pub route: Relation<Route>,
    /// The stops the shape passes through, in order.
    pub stops: Vec<Relation<Stop>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShapeAttributes {
    direction_id: i32,
    name: String,
    polyline: String,
    priority: i32,
}

impl Resource for Shape {
    const TYPE: &'static str = "shape";
    const PATH: &'static str = "shapes";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: ShapeAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            direction_id: attributes.direction_id,
            name: attributes.name,
            polyline: attributes.polyline,
            priority: attributes.priority,
            route: Relation::resolve(object, "route", included)?,
            stops: Relation::resolve_many(object, "stops", included)?,
        })
    }
}

/// Sort keys accepted by the shapes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSortKey {
    DirectionId,
    Name,
    Polyline,
    Priority,
}

impl SortKey for ShapeSortKey {
    fn as_str(self) -> &'static str {
        match self {
            ShapeSortKey::DirectionId => "direction_id",
            ShapeSortKey::Name => "name",
            ShapeSortKey::Polyline => "polyline",
            ShapeSortKey::Priority => "priority",
        }
    }
}

/// Related resources that can be side-loaded for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeInclude {
    Route,
    Stops,
}

impl ShapeInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ShapeInclude::Route => "route",
            ShapeInclude::Stops => "stops",
        }
    }
}

/// Extra options for [`Shape::get`].
#[derive(Debug, Clone, Default)]
pub struct GetShapeParams {
    pub fields: Vec<String>,
    pub include: Vec<ShapeInclude>,
}

impl Params for GetShapeParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[shape]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Shape::list`].
///
/// The API requires the route filter to return any shapes.
#[derive(Debug, Clone, Default)]
pub struct ListShapesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<ShapeSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<ShapeInclude>,
    pub filter_route: Vec<String>,
    pub filter_direction_id: Option<u8>,
}

impl Params for ListShapesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[shape]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_list("filter[route]", &self.filter_route);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.into_pairs()
    }
}

impl Get for Shape {
    type Params = GetShapeParams;
}

impl List for Shape {
    type Params = ListShapesParams;
}
