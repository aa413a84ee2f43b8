//! Line model and request parameters.

use serde::Deserialize;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::Route;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::traits::{Get, List, Params};

/// A combination of routes presented to riders as a single service.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: String,
    /// Line color as a six-character hex string, e.g. `FFC72C`.
    pub color: String,
    pub long_name: String,
    pub short_name: String,
    /// Suggested display order relative to other lines.
    pub sort_order: i32,
    /// Legible color for text drawn against `color`.
    pub text_color: String,
    pub routes: Vec<Relation<Route>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LineAttributes {
    color: String,
    long_name: String,
    short_name: String,
    sort_order: i32,
    text_color: String,
}

impl Resource for Line {
    const TYPE: &'static str = "line";
    const PATH: &'static str = "lines";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: LineAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            color: attributes.color,
            long_name: attributes.long_name,
            short_name: attributes.short_name,
            sort_order: attributes.sort_order,
            text_color: attributes.text_color,
            routes: Relation::resolve_many(object, "routes", included)?,
        })
    }
}

/// Sort keys accepted by the lines endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSortKey {
    Color,
    LongName,
    ShortName,
    SortOrder,
    TextColor,
}

impl SortKey for LineSortKey {
    fn as_str(self) -> &'static str {
        match self {
            LineSortKey::Color => "color",
            LineSortKey::LongName => "long_name",
            LineSortKey::ShortName => "short_name",
            LineSortKey::SortOrder => "sort_order",
            LineSortKey::TextColor => "text_color",
        }
    }
}

/// Related resources that can be side-loaded for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInclude {
    Routes,
}

impl LineInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LineInclude::Routes => "routes",
        }
    }
}

/// Extra options for [`Line::get`].
#[derive(Debug, Clone, Default)]
pub struct GetLineParams {
    pub fields: Vec<String>,
    pub include: Vec<LineInclude>,
}

impl Params for GetLineParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[line]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Line::list`].
#[derive(Debug, Clone, Default)]
pub struct ListLinesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<LineSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<LineInclude>,
    pub filter_id: Vec<String>,
}

impl Params for ListLinesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[line]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_list("filter[id]", &self.filter_id);
        query.into_pairs()
    }
}

impl Get for Line {
    type Params = GetLineParams;
}

impl List for Line {
    type Params = ListLinesParams;
}
