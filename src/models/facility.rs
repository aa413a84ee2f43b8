//! Facility model and request parameters.

use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::jsonapi::{Included, Relation, Resource, ResourceObject};
use crate::models::stop::Stop;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::traits::{Get, List, Params};

/// Amenities at a station, such as elevators, escalators, or parking lots.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: String,
    /// Degrees North, in the WGS-84 coordinate system.
    pub latitude: Option<f64>,
    /// Degrees East, in the WGS-84 coordinate system.
    pub longitude: Option<f64>,
    pub name: String,
    pub short_name: String,
    pub facility_type: FacilityType,
    /// Name/value pairs describing the facility, such as parking capacity
    /// or accessibility.
    pub properties: Vec<FacilityProperty>,
    /// The stop the facility is at.
    pub stop: Relation<Stop>,
}

/// The kind of amenity a facility is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
    BikeStorage,
    BridgePlate,
    ElectricCarChargers,
    ElevatedSubplatform,
    Elevator,
    Escalator,
    FareMediaAssistant,
    FareMediaAssistanceFacility,
    FareVendingMachine,
    FareVendingRetailer,
    FullyElevatedPlatform,
    Other,
    ParkingArea,
    PickDrop,
    PortableBoardingLift,
    Ramp,
    TaxiStand,
    TicketWindow,
}

impl FacilityType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FacilityType::BikeStorage => "BIKE_STORAGE",
            FacilityType::BridgePlate => "BRIDGE_PLATE",
            FacilityType::ElectricCarChargers => "ELECTRIC_CAR_CHARGERS",
            FacilityType::ElevatedSubplatform => "ELEVATED_SUBPLATFORM",
            FacilityType::Elevator => "ELEVATOR",
            FacilityType::Escalator => "ESCALATOR",
            FacilityType::FareMediaAssistant => "FARE_MEDIA_ASSISTANT",
            FacilityType::FareMediaAssistanceFacility => "FARE_MEDIA_ASSISTANCE_FACILITY",
            FacilityType::FareVendingMachine => "FARE_VENDING_MACHINE",
            FacilityType::FareVendingRetailer => "FARE_VENDING_RETAILER",
            FacilityType::FullyElevatedPlatform => "FULLY_ELEVATED_PLATFORM",
            FacilityType::Other => "OTHER",
            FacilityType::ParkingArea => "PARKING_AREA",
            FacilityType::PickDrop => "PICK_DROP",
            FacilityType::PortableBoardingLift => "PORTABLE_BOARDING_LIFT",
            FacilityType::Ramp => "RAMP",
            FacilityType::TaxiStand => "TAXI_STAND",
            FacilityType::TicketWindow => "TICKET_WINDOW",
        }
    }
}

/// One name/value property of a facility.
///
/// The feed mixes strings and numbers in `value`; both decode to a string,
/// so callers never depend on the wire type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FacilityProperty {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> core::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FacilityAttributes {
    latitude: Option<f64>,
    longitude: Option<f64>,
    name: String,
    short_name: String,
    #[serde(rename = "type")]
    facility_type: FacilityType,
    properties: Vec<FacilityProperty>,
}

impl Default for FacilityAttributes {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            name: String::new(),
            short_name: String::new(),
            facility_type: FacilityType::Other,
            properties: Vec::new(),
        }
    }
}

impl Resource for Facility {
    const TYPE: &'static str = "facility";
    const PATH: &'static str = "facilities";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self> {
        let attributes: FacilityAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            latitude: attributes.latitude,
            longitude: attributes.longitude,
            name: attributes.name,
            short_name: attributes.short_name,
            facility_type: attributes.facility_type,
            properties: attributes.properties,
            stop: Relation::resolve(object, "stop", included)?,
        })
    }
}

/// Sort keys accepted by the facilities endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitySortKey {
    Latitude,
    Longitude,
    Name,
    ShortName,
    Type,
}

impl SortKey for FacilitySortKey {
    fn as_str(self) -> &'static str {
        match self {
            FacilitySortKey::Latitude => "latitude",
            FacilitySortKey::Longitude => "longitude",
            FacilitySortKey::Name => "name",
            FacilitySortKey::ShortName => "short_name",
            FacilitySortKey::Type => "type",
        }
    }
}

/// Related resources that can be side-loaded for a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityInclude {
    Stop,
}

impl FacilityInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FacilityInclude::Stop => "stop",
        }
    }
}

/// Extra options for [`Facility::get`].
#[derive(Debug, Clone, Default)]
pub struct GetFacilityParams {
    pub fields: Vec<String>,
    pub include: Vec<FacilityInclude>,
}

impl Params for GetFacilityParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[facility]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Facility::list`].
#[derive(Debug, Clone, Default)]
pub struct ListFacilitiesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<FacilitySortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<FacilityInclude>,
    pub filter_stop: Vec<String>,
    pub filter_type: Vec<FacilityType>,
}

impl Params for ListFacilitiesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[facility]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.push_list("filter[stop]", &self.filter_stop);
        let types: Vec<&str> = self.filter_type.iter().map(|t| t.as_str()).collect();
        query.push_list("filter[type]", &types);
        query.into_pairs()
    }
}

impl Get for Facility {
    type Params = GetFacilityParams;
}

impl List for Facility {
    type Params = ListFacilitiesParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_normalizes_string_and_number() {
        let properties: Vec<FacilityProperty> = serde_json::from_str(
            r#"[{"name": "capacity", "value": 150}, {"name": "enclosed", "value": "1"}]"#,
        )
        .unwrap();
        assert_eq!(properties[0].value, "150");
        assert_eq!(properties[1].value, "1");
    }

    #[test]
    fn test_type_filter_renders_wire_names() {
        let params = ListFacilitiesParams {
            filter_type: vec![FacilityType::Elevator, FacilityType::Escalator],
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![("filter[type]".to_string(), "ELEVATOR,ESCALATOR".to_string())]
        );
    }
}
