//! MBTA V3 API client library.
//!
//! A Rust library for interacting with the MBTA V3 REST API using a
//! trait-based architecture where each operation (Get, List) is defined
//! as a trait that resource types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use mbtapi::{Get, List, ListRoutesParams, MbtaClient, Route, RouteType, Stop};
//!
//! #[tokio::main]
//! async fn main() -> mbtapi::Result<()> {
//!     // Create client from environment variables
//!     let client = MbtaClient::from_env()?;
//!
//!     // Get a stop by ID
//!     let stop = Stop::get(&client, "place-sstat", &Default::default()).await?;
//!     println!("Stop: {}", stop.name);
//!
//!     // List all subway routes
//!     let params = ListRoutesParams {
//!         filter_type: vec![RouteType::LightRail, RouteType::Subway],
//!         ..Default::default()
//!     };
//!     let routes = Route::list(&client, &params).await?;
//!     println!("Found {} routes", routes.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around two core traits:
//!
//! - [`Get`] - Fetch a single resource by ID
//! - [`List`] - Fetch collections of resources
//!
//! Each resource type (like [`Stop`] or [`Route`]) implements the traits
//! supported by its API endpoints. Responses arrive as JSON:API payloads;
//! related resources requested through `include` parameters are resolved
//! into [`Relation::Full`] values, while relationships that were not
//! side-loaded remain as [`Relation::Stub`] IDs.
//!
//! # Configuration
//!
//! [`MbtaClient::from_env`] reads configuration from environment
//! variables:
//!
//! - `MBTA_API_KEY` (optional) - API key; anonymous access is allowed but
//!   heavily rate-limited
//! - `MBTA_API_URL` (optional) - Base URL (defaults to
//!   `https://api-v3.mbta.com`)

mod client;
mod error;
mod jsonapi;
mod models;
mod query;
mod time;
mod traits;

// Re-export core types
pub use client::{ClientConfig, MbtaClient, DEFAULT_BASE_URL};
pub use error::{MbtaError, Result};
pub use jsonapi::{Relation, Resource};
pub use query::{Sort, SortKey};
pub use time::TimeIso8601;

// Re-export traits
pub use traits::{Get, List, Params};

// Re-export models
pub use models::{
    // Alert types
    ActivePeriod,
    Alert,
    AlertActivity,
    AlertCause,
    AlertEffect,
    AlertInclude,
    AlertLifecycle,
    AlertSortKey,
    GetAlertParams,
    InformedEntity,
    ListAlertsParams,
    // Facility types
    Facility,
    FacilityInclude,
    FacilityProperty,
    FacilitySortKey,
    FacilityType,
    GetFacilityParams,
    ListFacilitiesParams,
    // Line types
    GetLineParams,
    Line,
    LineInclude,
    LineSortKey,
    ListLinesParams,
    // Prediction types
    ListPredictionsParams,
    Prediction,
    PredictionInclude,
    PredictionSortKey,
    ScheduleRelationship,
    // Route types
    GetRouteParams,
    ListRoutesParams,
    Route,
    RouteInclude,
    RouteSortKey,
    RouteType,
    // Route pattern types
    GetRoutePatternParams,
    ListRoutePatternsParams,
    RoutePattern,
    RoutePatternInclude,
    RoutePatternSortKey,
    RoutePatternTypicality,
    // Schedule types
    ListSchedulesParams,
    PickupDropOffType,
    Schedule,
    ScheduleInclude,
    ScheduleSortKey,
    // Service types
    GetServiceParams,
    ListServicesParams,
    Service,
    ServiceScheduleTypicality,
    ServiceSortKey,
    // Shape types
    GetShapeParams,
    ListShapesParams,
    Shape,
    ShapeInclude,
    ShapeSortKey,
    // Stop types
    GetStopParams,
    ListStopsParams,
    Stop,
    StopInclude,
    StopLocationType,
    StopSortKey,
    WheelchairBoarding,
    // Trip types
    BikesAllowed,
    GetTripParams,
    ListTripsParams,
    Trip,
    TripInclude,
    TripSortKey,
    // Vehicle types
    GetVehicleParams,
    ListVehiclesParams,
    Vehicle,
    VehicleInclude,
    VehicleSortKey,
    VehicleStatus,
};
