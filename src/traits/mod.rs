//! Operation traits implemented by resource models.

mod get;
mod list;

pub use get::Get;
pub use list::List;

use crate::error::Result;

/// Request parameters that render to query-string pairs.
pub trait Params {
    /// Render the parameters as `(key, value)` pairs.
    fn to_query(&self) -> Vec<(String, String)>;

    /// Local validation, run before any network call. Endpoints with
    /// required filters override this.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// No-parameter marker for endpoints without extra options.
impl Params for () {
    fn to_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}
