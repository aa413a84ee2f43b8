//! List trait for fetching resource collections.

use async_trait::async_trait;

use crate::client::MbtaClient;
use crate::error::Result;
use crate::jsonapi::{self, Document, Resource};
use crate::traits::Params;

/// List resources with filtering, sorting, and offset pagination.
///
/// The collection order is whatever the server returned; callers should not
/// assume any particular ordering unless a sort was requested. An empty
/// collection is a valid result, distinct from an error.
///
/// # Example
///
/// ```no_run
/// use mbtapi::{List, ListRoutesParams, MbtaClient, Route};
///
/// # async fn example() -> mbtapi::Result<()> {
/// let client = MbtaClient::from_env()?;
/// let routes = Route::list(&client, &ListRoutesParams::default()).await?;
/// println!("{} routes", routes.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait List: Resource + Send + Sync {
    /// Filter, sort, pagination, and include options for the request.
    type Params: Params + Default + Send + Sync;

    /// Fetch all resources matching the parameters.
    ///
    /// # Errors
    ///
    /// Parameter validation failures (missing required filters) are returned
    /// before any network call is made.
    async fn list(client: &MbtaClient, params: &Self::Params) -> Result<Vec<Self>> {
        params.validate()?;

        tracing::debug!(path = Self::PATH, "fetching resource collection");

        let body = client.get_with_query(Self::PATH, &params.to_query()).await?;
        let document = Document::from_body(&body)?;
        jsonapi::decode_many::<Self>(document)
    }
}
