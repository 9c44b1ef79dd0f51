//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types (validated, ready for the pipeline)
//! - `wire.rs`: Raw serde structs matching the remote endpoints
//! - `client.rs`: Sub-client driving the endpoint calls for that flow

pub mod relay;
pub mod token;
pub mod trade;
