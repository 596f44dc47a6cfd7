//! Shared HTTP surface: the response envelope, error mapping, application state,
//! the informational route and the OpenAPI metadata every router merges into.

pub mod error;
pub mod info;
pub mod openapi;
pub mod router;
pub mod schemas;
pub mod state;
