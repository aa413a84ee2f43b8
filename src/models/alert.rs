//! Alert model and request parameters.

use serde::Deserialize;
use url::Url;

use crate::error::Result;
use crate::jsonapi::{Included, Resource, ResourceObject};
use crate::models::route::RouteType;
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{Get, List, Params};

/// A service alert affecting some part of the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: String,
    /// Date/time ranges when the alert is active.
    pub active_period: Vec<ActivePeriod>,
    /// Set if the alert is meant to be displayed prominently, such as at
    /// the top of every page.
    pub banner: Option<String>,
    pub cause: AlertCause,
    pub created_at: Option<TimeIso8601>,
    /// Plain-text body of the alert, shown on an explicit expand.
    pub description: Option<String>,
    pub effect: AlertEffect,
    /// Plain-text summary, typically highlighted.
    pub header: String,
    /// The parts of the system the alert affects.
    pub informed_entity: Vec<InformedEntity>,
    /// Whether the alert is new or old, in effect or upcoming.
    pub lifecycle: Option<AlertLifecycle>,
    /// Summarizes the service and the impact to that service.
    pub service_effect: String,
    /// How severe the alert is, least (0) to most (10) severe.
    pub severity: i32,
    /// A shortened version of `header`.
    pub short_header: String,
    /// Summarizes when the alert is in effect.
    pub timeframe: Option<String>,
    pub updated_at: Option<TimeIso8601>,
    /// A URL for extra details, such as outlined construction plans.
    pub url: Option<Url>,
}

/// One date/time range when an alert is active.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivePeriod {
    pub start: TimeIso8601,
    #[serde(default)]
    pub end: Option<TimeIso8601>,
}

/// A particular part of the system affected by an alert.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct InformedEntity {
    #[serde(rename = "trip")]
    pub trip_id: Option<String>,
    #[serde(rename = "stop")]
    pub stop_id: Option<String>,
    pub route_type: Option<RouteType>,
    #[serde(rename = "route")]
    pub route_id: Option<String>,
    #[serde(rename = "facility")]
    pub facility_id: Option<String>,
    pub direction_id: Option<i32>,
    pub activities: Vec<AlertActivity>,
}

/// Whether an alert is new or old, in effect or upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLifecycle {
    New,
    Ongoing,
    OngoingUpcoming,
    Upcoming,
}

/// An activity affected by an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertActivity {
    Board,
    BringingBike,
    Exit,
    ParkCar,
    Ride,
    StoreBike,
    UsingEscalator,
    UsingWheelchair,
    /// Filter value matching all activities; never returned by the API.
    All,
}

impl AlertActivity {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            AlertActivity::Board => "BOARD",
            AlertActivity::BringingBike => "BRINGING_BIKE",
            AlertActivity::Exit => "EXIT",
            AlertActivity::ParkCar => "PARK_CAR",
            AlertActivity::Ride => "RIDE",
            AlertActivity::StoreBike => "STORE_BIKE",
            AlertActivity::UsingEscalator => "USING_ESCALATOR",
            AlertActivity::UsingWheelchair => "USING_WHEELCHAIR",
            AlertActivity::All => "ALL",
        }
    }
}

/// The effect of the problem on the affected entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertEffect {
    AccessIssue,
    AdditionalService,
    AmberAlert,
    BikeIssue,
    Cancellation,
    Delay,
    Detour,
    DockClosure,
    DockIssue,
    ElevatorClosure,
    EscalatorClosure,
    ExtraService,
    FacilityIssue,
    ModifiedService,
    NoService,
    OtherEffect,
    ParkingClosure,
    ParkingIssue,
    PolicyChange,
    ScheduleChange,
    ServiceChange,
    Shuttle,
    SnowRoute,
    StationClosure,
    StationIssue,
    StopClosure,
    StopMove,
    StopMoved,
    Summary,
    Suspension,
    TrackChange,
    UnknownEffect,
}

/// What is causing the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCause {
    Accident,
    Amtrak,
    AnEarlierMechanicalProblem,
    AnEarlierSignalProblem,
    AutosImpedingService,
    CoastGuardRestriction,
    Congestion,
    Construction,
    CrossingMalfunction,
    Demonstration,
    DisabledBus,
    DisabledTrain,
    DrawbridgeBeingRaised,
    ElectricalWork,
    Fire,
    Fog,
    FreightTrainInterference,
    HazmatCondition,
    HeavyRidership,
    HighWinds,
    Holiday,
    Hurricane,
    IceInHarbor,
    Maintenance,
    MechanicalProblem,
    MedicalEmergency,
    Parade,
    PoliceAction,
    PowerProblem,
    SevereWeather,
    SignalProblem,
    SlipperyRail,
    Snow,
    SpecialEvent,
    SpeedRestriction,
    SwitchProblem,
    TieReplacement,
    TrackProblem,
    TrackWork,
    Traffic,
    UnknownCause,
    UnrulyPassenger,
    Weather,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct AlertAttributes {
    active_period: Vec<ActivePeriod>,
    banner: Option<String>,
    cause: AlertCause,
    created_at: Option<TimeIso8601>,
    description: Option<String>,
    // The upstream feed publishes the effect under this key.
    effect_name: AlertEffect,
    header: String,
    informed_entity: Vec<InformedEntity>,
    lifecycle: Option<AlertLifecycle>,
    service_effect: String,
    severity: i32,
    short_header: String,
    timeframe: Option<String>,
    updated_at: Option<TimeIso8601>,
    url: Option<Url>,
}

impl Default for AlertAttributes {
    fn default() -> Self {
        Self {
            active_period: Vec::new(),
            banner: None,
            cause: AlertCause::UnknownCause,
            created_at: None,
            description: None,
            effect_name: AlertEffect::UnknownEffect,
            header: String::new(),
            informed_entity: Vec::new(),
            lifecycle: None,
            service_effect: String::new(),
            severity: 0,
            short_header: String::new(),
            timeframe: None,
            updated_at: None,
            url: None,
        }
    }
}

impl Resource for Alert {
    const TYPE: &'static str = "alert";
    const PATH: &'static str = "alerts";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, _included: &Included) -> Result<Self> {
        let attributes: AlertAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            active_period: attributes.active_period,
            banner: attributes.banner,
            cause: attributes.cause,
            created_at: attributes.created_at,
            description: attributes.description,
            effect: attributes.effect_name,
            header: attributes.header,
            informed_entity: attributes.informed_entity,
            lifecycle: attributes.lifecycle,
            service_effect: attributes.service_effect,
            severity: attributes.severity,
            short_header: attributes.short_header,
            timeframe: attributes.timeframe,
            updated_at: attributes.updated_at,
            url: attributes.url,
        })
    }
}

/// Sort keys accepted by the alerts endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSortKey {
    ActivePeriod,
    Banner,
    Cause,
    CreatedAt,
    Description,
    Effect,
    Header,
    InformedEntity,
    Lifecycle,
    ServiceEffect,
    Severity,
    ShortHeader,
    Timeframe,
    UpdatedAt,
    Url,
}

impl SortKey for AlertSortKey {
    fn as_str(self) -> &'static str {
        match self {
            AlertSortKey::ActivePeriod => "active_period",
            AlertSortKey::Banner => "banner",
            AlertSortKey::Cause => "cause",
            AlertSortKey::CreatedAt => "created_at",
            AlertSortKey::Description => "description",
            AlertSortKey::Effect => "effect",
            AlertSortKey::Header => "header",
            AlertSortKey::InformedEntity => "informed_entity",
            AlertSortKey::Lifecycle => "lifecycle",
            AlertSortKey::ServiceEffect => "service_effect",
            AlertSortKey::Severity => "severity",
            AlertSortKey::ShortHeader => "short_header",
            AlertSortKey::Timeframe => "timeframe",
            AlertSortKey::UpdatedAt => "updated_at",
            AlertSortKey::Url => "url",
        }
    }
}

/// Related resources that can be side-loaded for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertInclude {
    Stops,
    Routes,
    Trips,
    Facilities,
}

impl AlertInclude {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            AlertInclude::Stops => "stops",
            AlertInclude::Routes => "routes",
            AlertInclude::Trips => "trips",
            AlertInclude::Facilities => "facilities",
        }
    }
}

/// Extra options for [`Alert::get`].
#[derive(Debug, Clone, Default)]
pub struct GetAlertParams {
    pub fields: Vec<String>,
    pub include: Vec<AlertInclude>,
}

impl Params for GetAlertParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[alert]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        query.into_pairs()
    }
}

/// Extra options for [`Alert::list`].
#[derive(Debug, Clone, Default)]
pub struct ListAlertsParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<AlertSortKey>>,
    pub fields: Vec<String>,
    pub include: Vec<AlertInclude>,
    /// Filter to alerts affecting these activities; the server defaults to
    /// BOARD, EXIT, RIDE. Use [`AlertActivity::All`] to match everything.
    pub filter_activity: Vec<AlertActivity>,
    pub filter_route_type: Vec<RouteType>,
    pub filter_direction_id: Option<u8>,
    pub filter_route: Vec<String>,
    pub filter_stop: Vec<String>,
    pub filter_trip: Vec<String>,
    pub filter_facility: Vec<String>,
    pub filter_id: Vec<String>,
    /// Filter to alerts with (`true`) or without (`false`) a banner.
    pub filter_banner: Option<bool>,
    /// Filter to alerts active at a given time; use
    /// [`TimeIso8601::now_sentinel`] for currently-active alerts.
    pub filter_datetime: Option<TimeIso8601>,
    pub filter_lifecycle: Vec<String>,
    pub filter_severity: Vec<String>,
}

impl Params for ListAlertsParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[alert]", &self.fields);
        let include: Vec<&str> = self.include.iter().map(|i| i.as_str()).collect();
        query.push_list("include", &include);
        let activities: Vec<&str> = self.filter_activity.iter().map(|a| a.as_str()).collect();
        query.push_list("filter[activity]", &activities);
        let route_types: Vec<String> = self
            .filter_route_type
            .iter()
            .map(|t| (*t as u8).to_string())
            .collect();
        query.push_list("filter[route_type]", &route_types);
        query.push_opt("filter[direction_id]", self.filter_direction_id);
        query.push_list("filter[route]", &self.filter_route);
        query.push_list("filter[stop]", &self.filter_stop);
        query.push_list("filter[trip]", &self.filter_trip);
        query.push_list("filter[facility]", &self.filter_facility);
        query.push_list("filter[id]", &self.filter_id);
        query.push_opt("filter[banner]", self.filter_banner);
        query.push_opt(
            "filter[datetime]",
            self.filter_datetime.as_ref().map(|d| d.to_filter_value()),
        );
        query.push_list("filter[lifecycle]", &self.filter_lifecycle);
        query.push_list("filter[severity]", &self.filter_severity);
        query.into_pairs()
    }
}

impl Get for Alert {
    type Params = GetAlertParams;
}

impl List for Alert {
    type Params = ListAlertsParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_filter_now_sentinel() {
        let params = ListAlertsParams {
            filter_datetime: Some(TimeIso8601::now_sentinel()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![("filter[datetime]".to_string(), "NOW".to_string())]
        );
    }

    #[test]
    fn test_activity_filter_renders_wire_names() {
        let params = ListAlertsParams {
            filter_activity: vec![AlertActivity::Board, AlertActivity::UsingWheelchair],
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![(
                "filter[activity]".to_string(),
                "BOARD,USING_WHEELCHAIR".to_string()
            )]
        );
    }
}
