//! Notes API access
//!
//! Stateless request functions against the remote notes service. There is no
//! retry and no caching; any non-success response becomes an `ApiError`.

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

pub use client::{HttpNotesApi, NotesApi};
pub use errors::{ApiError, ApiOperation, ApiResult};
