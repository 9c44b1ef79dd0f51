//! HTTP client layer: `PortalHttp`, one method per remote endpoint.

pub mod client;

pub use client::{Endpoints, PortalHttp};
