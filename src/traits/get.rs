//! Get trait for fetching single resources.

use async_trait::async_trait;

use crate::client::MbtaClient;
use crate::error::{MbtaError, Result};
use crate::jsonapi::{self, Document, Resource};
use crate::traits::Params;

/// Fetch a single resource by ID.
///
/// The default implementation covers every id-based endpoint: implementors
/// only name their parameter type.
///
/// # Example
///
/// ```no_run
/// use mbtapi::{Get, GetStopParams, MbtaClient, Stop};
///
/// # async fn example() -> mbtapi::Result<()> {
/// let client = MbtaClient::from_env()?;
/// let stop = Stop::get(&client, "place-sstat", &GetStopParams::default()).await?;
/// println!("{}", stop.name);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Get: Resource + Send + Sync {
    /// Extra options for the request.
    type Params: Params + Default + Send + Sync;

    /// Fetch the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Fails fast with [`MbtaError::MustSpecifyId`] on an empty ID, without
    /// touching the network. A `data: null` response maps to
    /// [`MbtaError::NotFound`].
    async fn get(client: &MbtaClient, id: &str, params: &Self::Params) -> Result<Self> {
        if id.is_empty() {
            return Err(MbtaError::MustSpecifyId);
        }

        let path = format!("{}/{}", Self::PATH, urlencoding::encode(id));
        tracing::debug!(path = %path, "fetching single resource");

        let body = client.get_with_query(&path, &params.to_query()).await?;
        let document = Document::from_body(&body)?;
        jsonapi::decode_single::<Self>(document)?.ok_or_else(|| MbtaError::NotFound {
            resource_type: Self::TYPE,
            id: id.to_string(),
        })
    }
}
