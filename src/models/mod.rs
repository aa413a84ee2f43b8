//! Typed resources and their request parameters.

pub mod alert;
pub mod facility;
pub mod line;
pub mod prediction;
pub mod route;
pub mod route_pattern;
pub mod schedule;
pub mod service;
pub mod shape;
pub mod stop;
pub mod trip;
pub mod vehicle;

pub use alert::{
    ActivePeriod, Alert, AlertActivity, AlertCause, AlertEffect, AlertInclude, AlertLifecycle,
    AlertSortKey, GetAlertParams, InformedEntity, ListAlertsParams,
};
pub use facility::{
    Facility, FacilityInclude, FacilityProperty, FacilitySortKey, FacilityType, GetFacilityParams,
    ListFacilitiesParams,
};
pub use line::{GetLineParams, Line, LineInclude, LineSortKey, ListLinesParams};
pub use prediction::{
    ListPredictionsParams, Prediction, PredictionInclude, PredictionSortKey, ScheduleRelationship,
};
pub use route::{
    GetRouteParams, ListRoutesParams, Route, RouteInclude, RouteSortKey, RouteType,
};
pub use route_pattern::{
    GetRoutePatternParams, ListRoutePatternsParams, RoutePattern, RoutePatternInclude,
    RoutePatternSortKey, RoutePatternTypicality,
};
pub use schedule::{
    ListSchedulesParams, PickupDropOffType, Schedule, ScheduleInclude, ScheduleSortKey,
};
pub use service::{
    GetServiceParams, ListServicesParams, Service, ServiceScheduleTypicality, ServiceSortKey,
};
pub use shape::{GetShapeParams, ListShapesParams, Shape, ShapeInclude, ShapeSortKey};
pub use stop::{
    GetStopParams, ListStopsParams, Stop, StopInclude, StopLocationType, StopSortKey,
    WheelchairBoarding,
};
pub use trip::{BikesAllowed, GetTripParams, ListTripsParams, Trip, TripInclude, TripSortKey};
pub use vehicle::{
    GetVehicleParams, ListVehiclesParams, Vehicle, VehicleInclude, VehicleSortKey, VehicleStatus,
};
