//! Service model and request parameters.

use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::error::Result;
use crate::jsonapi::{Included, Resource, ResourceObject};
use crate::query::{QueryBuilder, Sort, SortKey};
use crate::time::TimeIso8601;
use crate::traits::{Get, List, Params};

/// The days of the week and exceptional dates on which trips run.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    /// Extra dates the service runs, outside its usual validity window.
    pub added_dates: Vec<TimeIso8601>,
    /// Why each added date was added, index-aligned with `added_dates`.
    pub added_dates_notes: Vec<Option<String>>,
    pub description: String,
    /// Last date the service is valid.
    pub end_date: Option<TimeIso8601>,
    /// Dates within the validity window on which the service does not run.
    pub removed_dates: Vec<TimeIso8601>,
    /// Why each removed date was removed, index-aligned with
    /// `removed_dates`.
    pub removed_dates_notes: Vec<Option<String>>,
    /// Description of when the schedule applies, e.g. `Weekday` or
    /// `Sunday`.
    pub schedule_name: String,
    /// Description of the schedule type, e.g. `Saturday` or `Holiday`.
    pub schedule_type: String,
    pub schedule_typicality: ServiceScheduleTypicality,
    /// First date the service is valid.
    pub start_date: Option<TimeIso8601>,
    /// Days of the week the service runs; 1 is Monday, 7 is Sunday.
    pub valid_days: Vec<u8>,
}

/// How typical a service's schedule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize_repr)]
#[repr(u8)]
pub enum ServiceScheduleTypicality {
    #[default]
    NotDefined = 0,
    /// Typical service, with perhaps minor modifications.
    Typical = 1,
    /// Extra service supplementing typical schedules.
    Extra = 2,
    /// Reduced holiday service provided by typical Saturday or Sunday
    /// schedules.
    ReducedHoliday = 3,
    /// Major changes in service due to a planned disruption.
    PlannedDisruption = 4,
    /// Major reductions in service for weather events or other atypical
    /// situations.
    AtypicalReduction = 5,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceAttributes {
    added_dates: Vec<TimeIso8601>,
    added_dates_notes: Vec<Option<String>>,
    description: String,
    end_date: Option<TimeIso8601>,
    removed_dates: Vec<TimeIso8601>,
    removed_dates_notes: Vec<Option<String>>,
    schedule_name: String,
    schedule_type: String,
    schedule_typicality: ServiceScheduleTypicality,
    start_date: Option<TimeIso8601>,
    valid_days: Vec<u8>,
}

impl Resource for Service {
    const TYPE: &'static str = "service";
    const PATH: &'static str = "services";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_object(object: &ResourceObject, _included: &Included) -> Result<Self> {
        let attributes: ServiceAttributes = object.decode_attributes()?;
        Ok(Self {
            id: object.id.clone(),
            added_dates: attributes.added_dates,
            added_dates_notes: attributes.added_dates_notes,
            description: attributes.description,
            end_date: attributes.end_date,
            removed_dates: attributes.removed_dates,
            removed_dates_notes: attributes.removed_dates_notes,
            schedule_name: attributes.schedule_name,
            schedule_type: attributes.schedule_type,
            schedule_typicality: attributes.schedule_typicality,
            start_date: attributes.start_date,
            valid_days: attributes.valid_days,
        })
    }
}

/// Sort keys accepted by the services endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceSortKey {
    AddedDates,
    AddedDatesNotes,
    Description,
    EndDate,
    RemovedDates,
    RemovedDatesNotes,
    ScheduleName,
    ScheduleType,
    ScheduleTypicality,
    StartDate,
    ValidDays,
}

impl SortKey for ServiceSortKey {
    fn as_str(self) -> &'static str {
        match self {
            ServiceSortKey::AddedDates => "added_dates",
            ServiceSortKey::AddedDatesNotes => "added_dates_notes",
            ServiceSortKey::Description => "description",
            ServiceSortKey::EndDate => "end_date",
            ServiceSortKey::RemovedDates => "removed_dates",
            ServiceSortKey::RemovedDatesNotes => "removed_dates_notes",
            ServiceSortKey::ScheduleName => "schedule_name",
            ServiceSortKey::ScheduleType => "schedule_type",
            ServiceSortKey::ScheduleTypicality => "schedule_typicality",
            ServiceSortKey::StartDate => "start_date",
            ServiceSortKey::ValidDays => "valid_days",
        }
    }
}

/// Extra options for [`Service::get`].
#[derive(Debug, Clone, Default)]
pub struct GetServiceParams {
    pub fields: Vec<String>,
}

impl Params for GetServiceParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_list("fields[service]", &self.fields);
        query.into_pairs()
    }
}

/// Extra options for [`Service::list`].
#[derive(Debug, Clone, Default)]
pub struct ListServicesParams {
    pub page_offset: Option<u32>,
    pub page_limit: Option<u32>,
    pub sort: Option<Sort<ServiceSortKey>>,
    pub fields: Vec<String>,
    pub filter_id: Vec<String>,
    pub filter_route: Vec<String>,
}

impl Params for ListServicesParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", self.page_offset);
        query.push_opt("page[limit]", self.page_limit);
        query.push_sort(self.sort);
        query.push_list("fields[service]", &self.fields);
        query.push_list("filter[id]", &self.filter_id);
        query.push_list("filter[route]", &self.filter_route);
        query.into_pairs()
    }
}

impl Get for Service {
    type Params = GetServiceParams;
}

impl List for Service {
    type Params = ListServicesParams;
}
