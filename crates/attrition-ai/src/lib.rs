//! Employee attrition prediction service library.
//!
//! The binary in `services/api` wires these pieces together: [`config`] loads
//! runtime settings, [`model`] loads the trained classifier artifact once at
//! startup, and [`attrition`] encodes incoming employee records into feature
//! vectors and scores them over HTTP.

pub mod attrition;
pub mod config;
pub mod error;
pub mod model;
pub mod telemetry;
