//! JSON:API document decoding.
//!
//! A response document carries primary data (one resource object or an
//! array of them), an optional `included` array of side-loaded related
//! resources, and an optional `errors` array. Decoding walks the primary
//! data through each resource type's [`Resource::from_object`], resolving
//! relationship linkages against an index of the `included` array: a
//! linkage whose `(type, id)` pair is present in `included` decodes to a
//! fully populated resource, anything else stays an ID-only stub.

use std::collections::HashMap;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{self, ErrorObject, MbtaError, Result};

/// A concrete resource kind the API can return.
///
/// Implementations form a closed set; the `type` member of every resource
/// object dispatches to exactly one of them.
pub trait Resource: Sized {
    /// The JSON:API `type` discriminator, e.g. `"stop"`.
    const TYPE: &'static str;
    /// The endpoint path, e.g. `"stops"`.
    const PATH: &'static str;

    /// The resource's upstream-assigned ID.
    fn id(&self) -> &str;

    /// Decode one raw resource object, resolving relationships against
    /// `included`.
    fn from_object(object: &ResourceObject, included: &Included) -> Result<Self>;
}

/// A relationship slot on a decoded resource.
///
/// `Absent` means the payload carried no linkage at all (or an explicit
/// `data: null`). `Stub` means the linkage named an ID that was not present
/// in `included`. `Full` means the related resource was side-loaded and
/// fully decoded; whenever a matching `included` entry exists, decoding
/// always produces `Full`, never `Stub`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Relation<T> {
    #[default]
    Absent,
    Stub {
        id: String,
    },
    Full(Box<T>),
}

impl<T: Resource> Relation<T> {
    /// The related resource's ID, if any linkage was present.
    pub fn id(&self) -> Option<&str> {
        match self {
            Relation::Absent => None,
            Relation::Stub { id } => Some(id),
            Relation::Full(resource) => Some(resource.id()),
        }
    }

    /// The fully decoded related resource, when it was side-loaded.
    pub fn resource(&self) -> Option<&T> {
        match self {
            Relation::Full(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Relation::Absent)
    }

    /// Resolve a to-one relationship named `name` on `object`.
    pub(crate) fn resolve(
        object: &ResourceObject,
        name: &str,
        included: &Included,
    ) -> Result<Self> {
        let Some(relationship) = object.relationships.get(name) else {
            return Ok(Relation::Absent);
        };
        match &relationship.data {
            Linkage::None => Ok(Relation::Absent),
            Linkage::One(identifier) => Self::from_identifier(identifier, included),
            Linkage::Many(_) => Err(MbtaError::MalformedPayload(format!(
                "relationship '{name}' is to-many, expected to-one"
            ))),
        }
    }

    /// Resolve a to-many relationship named `name` on `object`. An absent
    /// relationship resolves to an empty list.
    pub(crate) fn resolve_many(
        object: &ResourceObject,
        name: &str,
        included: &Included,
    ) -> Result<Vec<Self>> {
        let Some(relationship) = object.relationships.get(name) else {
            return Ok(Vec::new());
        };
        match &relationship.data {
            Linkage::None => Ok(Vec::new()),
            Linkage::One(identifier) => Ok(vec![Self::from_identifier(identifier, included)?]),
            Linkage::Many(identifiers) => identifiers
                .iter()
                .map(|identifier| Self::from_identifier(identifier, included))
                .collect(),
        }
    }

    fn from_identifier(identifier: &ResourceIdentifier, included: &Included) -> Result<Self> {
        match included.get(T::TYPE, &identifier.id) {
            // Included resources decode one level deep only: their own
            // relationships resolve against an empty index and stay stubs.
            Some(object) => Ok(Relation::Full(Box::new(T::from_object(
                object,
                &Included::empty(),
            )?))),
            None => Ok(Relation::Stub {
                id: identifier.id.clone(),
            }),
        }
    }
}

/// A raw JSON:API resource object: `{id, type, attributes, relationships}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub relationships: HashMap<String, RelationshipObject>,
}

impl ResourceObject {
    /// Decode the `attributes` member into a typed struct. Unknown keys are
    /// ignored; a missing `attributes` member decodes as an empty object so
    /// sparse fieldsets work.
    pub(crate) fn decode_attributes<A: DeserializeOwned>(&self) -> Result<A> {
        let value = match &self.attributes {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };
        serde_json::from_value(value).map_err(MbtaError::Json)
    }
}

/// The `data` member of one relationship entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipObject {
    #[serde(default)]
    pub data: Linkage,
}

/// Zero, one, or many resource linkages.
#[derive(Debug, Clone, Default)]
pub enum Linkage {
    #[default]
    None,
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

impl<'de> Deserialize<'de> for Linkage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(Linkage::None),
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<core::result::Result<Vec<_>, _>>()
                .map(Linkage::Many)
                .map_err(de::Error::custom),
            object @ Value::Object(_) => serde_json::from_value(object)
                .map(Linkage::One)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "relationship data must be null, an object, or an array, got {other}"
            ))),
        }
    }
}

/// A bare `{id, type}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Index of the `included` array, keyed by `(type, id)`.
#[derive(Debug, Default)]
pub struct Included {
    objects: HashMap<(String, String), ResourceObject>,
}

impl Included {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    fn from_objects(objects: Vec<ResourceObject>) -> Self {
        let objects = objects
            .into_iter()
            .map(|object| ((object.kind.clone(), object.id.clone()), object))
            .collect();
        Self { objects }
    }

    fn get(&self, kind: &str, id: &str) -> Option<&ResourceObject> {
        self.objects.get(&(kind.to_string(), id.to_string()))
    }
}

/// A top-level JSON:API document. The `meta` member is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Document {
    data: DataField,
    errors: Vec<ErrorObject>,
    included: Vec<ResourceObject>,
}

impl Document {
    pub(crate) fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|err| MbtaError::MalformedPayload(err.to_string()))
    }
}

/// The `data` member, keeping "absent" distinct from `null`.
#[derive(Debug, Default)]
enum DataField {
    #[default]
    Missing,
    Null,
    One(ResourceObject),
    Many(Vec<ResourceObject>),
}

impl<'de> Deserialize<'de> for DataField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(DataField::Null),
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<core::result::Result<Vec<_>, _>>()
                .map(DataField::Many)
                .map_err(de::Error::custom),
            object @ Value::Object(_) => serde_json::from_value(object)
                .map(DataField::One)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "data must be null, an object, or an array, got {other}"
            ))),
        }
    }
}

/// Decode a single-resource document. `Ok(None)` encodes `data: null`,
/// which the API uses for "no resource at this ID".
pub(crate) fn decode_single<T: Resource>(document: Document) -> Result<Option<T>> {
    let document = check_errors(document)?;
    let included = Included::from_objects(document.included);
    match document.data {
        DataField::Null => Ok(None),
        DataField::One(object) => Ok(Some(T::from_object(&object, &included)?)),
        DataField::Many(_) => Err(MbtaError::MalformedPayload(
            "expected a single resource, got a collection".to_string(),
        )),
        DataField::Missing => Err(MbtaError::MalformedPayload(
            "document has neither data nor errors".to_string(),
        )),
    }
}

/// Decode a collection document. An empty `data` array is a valid empty
/// collection, not an error.
pub(crate) fn decode_many<T: Resource>(document: Document) -> Result<Vec<T>> {
    let document = check_errors(document)?;
    let included = Included::from_objects(document.included);
    match document.data {
        DataField::Many(objects) => objects
            .iter()
            .map(|object| T::from_object(object, &included))
            .collect(),
        DataField::One(_) | DataField::Null => Err(MbtaError::MalformedPayload(
            "expected a collection, got a single resource".to_string(),
        )),
        DataField::Missing => Err(MbtaError::MalformedPayload(
            "document has neither data nor errors".to_string(),
        )),
    }
}

/// A non-empty `errors` member takes priority over any `data` member.
fn check_errors(document: Document) -> Result<Document> {
    if !document.errors.is_empty() {
        return Err(error::from_error_objects(&document.errors));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Stop, Vehicle};

    const VEHICLE_WITH_INCLUDED_TRIP: &str = r#"{
        "data": {
            "id": "y1799",
            "type": "vehicle",
            "attributes": {
                "bearing": 45.0,
                "current_status": "IN_TRANSIT_TO",
                "current_stop_sequence": 2,
                "direction_id": 0,
                "label": "1799",
                "latitude": 42.38,
                "longitude": -71.11,
                "speed": null,
                "updated_at": "2019-06-23T04:30:00-04:00"
            },
            "relationships": {
                "trip": { "data": { "id": "T1", "type": "trip" } },
                "stop": { "data": { "id": "S9", "type": "stop" } }
            }
        },
        "included": [
            {
                "id": "T1",
                "type": "trip",
                "attributes": {
                    "bikes_allowed": 1,
                    "block_id": "B77-200",
                    "direction_id": 0,
                    "headsign": "Arlington Heights",
                    "name": "",
                    "wheelchair_accessible": 1
                }
            }
        ]
    }"#;

    #[test]
    fn test_included_trip_resolves_full_not_stub() {
        let document = Document::from_body(VEHICLE_WITH_INCLUDED_TRIP).unwrap();
        let vehicle: Vehicle = decode_single(document).unwrap().unwrap();

        let trip = vehicle.trip.resource().expect("trip should be populated");
        assert_eq!(trip.id, "T1");
        assert_eq!(trip.headsign, "Arlington Heights");

        // The stop linkage has no matching included entry, so it stays a stub.
        assert_eq!(vehicle.stop, Relation::Stub { id: "S9".to_string() });
    }

    #[test]
    fn test_decode_is_idempotent() {
        let first: Vehicle =
            decode_single(Document::from_body(VEHICLE_WITH_INCLUDED_TRIP).unwrap())
                .unwrap()
                .unwrap();
        let second: Vehicle =
            decode_single(Document::from_body(VEHICLE_WITH_INCLUDED_TRIP).unwrap())
                .unwrap()
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_data_array_is_empty_collection() {
        let document = Document::from_body(r#"{"data": []}"#).unwrap();
        let stops: Vec<Stop> = decode_many(document).unwrap();
        assert!(stops.is_empty());
    }

    #[test]
    fn test_data_null_is_none() {
        let document = Document::from_body(r#"{"data": null}"#).unwrap();
        let stop: Option<Stop> = decode_single(document).unwrap();
        assert!(stop.is_none());
    }

    #[test]
    fn test_errors_take_priority_over_data() {
        let body = r#"{
            "data": { "id": "1", "type": "stop", "attributes": {} },
            "errors": [
                { "source": { "parameter": "include" }, "title": "Invalid include", "code": "bad_request" }
            ]
        }"#;
        let document = Document::from_body(body).unwrap();
        let err = decode_single::<Stop>(document).unwrap_err();
        assert!(matches!(err, MbtaError::BadRequest { .. }));
    }

    #[test]
    fn test_missing_data_without_errors_is_malformed() {
        let document = Document::from_body(r#"{"meta": {}}"#).unwrap();
        let err = decode_many::<Stop>(document).unwrap_err();
        assert!(matches!(err, MbtaError::MalformedPayload(_)));
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let body = r#"{
            "data": {
                "id": "55",
                "type": "stop",
                "attributes": { "name": "Washington St", "some_future_field": 12 }
            }
        }"#;
        let document = Document::from_body(body).unwrap();
        let stop: Stop = decode_single(document).unwrap().unwrap();
        assert_eq!(stop.name, "Washington St");
    }

    #[test]
    fn test_non_object_data_is_malformed() {
        let err = Document::from_body(r#"{"data": 42}"#).unwrap_err();
        assert!(matches!(err, MbtaError::MalformedPayload(_)));
    }
}
