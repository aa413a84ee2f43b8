//! Stop model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::route::RouteType;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::traits::{Get, List, Params};

/// A location where passengers board or exit transit vehicles, or a station
/// grouping several such locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    /// A street address for the station.
    pub address: Option<String>,
    /// Description of the stop.
    pub description: Option<String>,
    /// Degrees North, in the WGS-84 coordinate system.
    pub latitude: f64,
    /// Degrees East, in the WGS-84 coordinate system.
    pub longitude: f64,
    pub location_type: StopLocationType,
    /// Name of the stop or station in the local and tourist vernacular.
    pub name: String,
    /// A short code representing the platform/track, like a number or letter.
    pub platform_code: Option<String>,
    /// A textual description of the platform or track.
    pub platform_name: Option<String>,
    pub wheelchair_boarding: WheelchairBoarding,
    /// The parent station. ID-only unless `parent_station` was included.
    pub parent_station: Relation<Stop>,
}

/// The kind of location a stop represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum StopLocationType {
    /// A location where passengers board or disembark from a vehicle.
    #[default]
    Stop = 0,
    /// A physical structure or area that contains one or more stops.
    Station = 1,
    /// A location where passengers can enter or exit a station from the
    /// street.
    StationEntranceExit = 2,
}

/// Wheelchair accessibility of a stop or trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum WheelchairBoarding {
    #[default]
    NoInfo = 0,
    Accessible = 1,
    Inaccessible = 2,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StopAttributes {
    address: Option<String>,
    description: Option<String>,
    latitude: f64,
    location_type: StopLocationType,
    longitude: f64,
    name: String,
    platform_code: Option<String>,
    platform_name: Option<String>,
    wheelchair_boarding: WheelchairBoarding,
}

impl Resource for Stop {
    const TYPE: &'static str = "stop";
    const PATH: &'static str = "stops";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: StopAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            address: attributes.address,
            description: attributes.description,
            latitude: attributes.latitude,
            longitude: attributes.longitude,
            location_type: attributes.location_type,
            name: attributes.name,
            platform_code: attributes.platform_code,
            platform_name: attributes.platform_name,
            wheelchair_boarding: attributes.wheelchair_boarding,
            parent_station: Relation::resolve(object, "parent_station", included)?,
        })
    }
}

/// Sort keys accepted by the stops endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSortKey {
    Address,
    Description,
    Latitude,
    LocationType,
    Longitude,
    Name,
    PlatformCode,
    PlatformName,
    WheelchairBoarding,
    /// Only meaningful with the latitude/longitude filters.
    Distance,
}

impl SortKey for StopSortKey {
    fn as_str(self) -> &'static str {
        match self {
            StopSortKey::Address => "address",
            StopSortKey::Description => "description",
            StopSortKey::Latitude => "latitude",
            StopSortKey::LocationType => "location_type",
            StopSortKey::Longitude => "longitude",
            StopSortKey::Name => "name",
            StopSortKey::PlatformCode => "platform_code",
            StopSortKey::PlatformName => "platform_name",
            StopSortKey::WheelchairBoarding => "wheelchair_boarding",
            StopSortKey::Distance => "distance",
        }
    }
}

/// Related resources that can be side-loaded for a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopInclude {
    ParentStation,
}

impl StopInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            StopInclude::ParentStation => "parent_station",
        }
    }
}

/// Extra options for [`Stop::get`].
#[derive(Debug, Clone, Default)]
pub struct GetStopParams {
    /// Sparse fieldset: restrict which stop attributes the server returns.
    pub fields: Vec<String>,
    pub include: Vec<StopInclude>,
}

impl Params for GetStopParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[stop]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Stop::list`].
#[derive(Debug, Clone, Default)]
pub struct ListStopsParams {
    /// Offset (0-based) of the first element in the page.
    pub page_offset: Option<u32>,
    /// Max number of elements to return.
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<StopSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<StopInclude>,
    /// Filter by direction of travel along a route (0 or 1); only useful
    /// combined with the route filter.
    pub filter_direction_id: Option<u8>,
    /// Latitude to search around; requires longitude.
    pub filter_latitude: Option<f64>,
    /// Longitude to search around; requires latitude.
    pub filter_longitude: Option<f64>,
    /// Search radius in degrees; defaults server-side to 0.01 (roughly half
    /// a mile).
    pub filter_radius: Option<f64>,
    pub filter_id: Vec<String>,
    pub filter_route_type: Vec<RouteType>,
    pub filter_route: Vec<String>,
    pub filter_location_type: Vec<StopLocationType>,
}

impl Params for ListStopsParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[stop]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_opt("filter[latitude]", self.filter_latitude);
        query.push_opt("filter[longitude]", self.filter_longitude);
        query.push_opt("filter[radius]", self.filter_radius);
        query.push_list("filter[id]", &self.filter_id);
        let route_types: Vec<String> = self
            .filter_route_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[route_type]", &route_types);
        query.push_list("filter[route]", &self.filter_route);
        let location_types: Vec<String> = self
            .filter_location_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[location_type]", &location_types);
        query.into_pairs()
    }
}

impl Get for Stop {
    type Params = GetStopParams;
}

impl List for Stop {
    type Params = ListStopsParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_to_query() {
        let params = ListStopsParams {
            page_offset: Some(0),
            page_limit: Some(5),
            sort: Some(Sort::desc(StopSortKey::Latitude)),
            include: vec![StopInclude::ParentStation],
            filter_route: vec!["Red".to_string(), "Green-B".to_string()],
            filter_route_type: vec![RouteType::LightRail, RouteType::Subway],
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("page[offset]".to_string(), "0".to_string()),
                ("page[limit]".to_string(), "5".to_string()),
                ("sort".to_string(), "-latitude".to_string()),
                ("include".to_string(), "parent_station".to_string()),
                ("filter[route_type]".to_string(), "0,1".to_string()),
                ("filter[route]".to_string(), "Red,Green-B".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_params_produce_no_query() {
        assert!(ListStopsParams::default().to_query().is_empty());
        assert!(GetStopParams::default().to_query().is_empty());
    }
}
