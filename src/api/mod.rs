//! Remote placeholder API: entities, the query trait and its HTTP implementation.

mod error;
mod http;
mod source;
mod types;

pub use error::ApiError;
pub use http::HttpSource;
pub use source::RemoteSource;
pub use types::{Album, Photo, User};
