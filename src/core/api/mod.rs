// Client for the remote homology computation API.
//
// Architecture:
// - model.rs: Wire types for the three backend endpoints
// - client.rs: HTTP client and error type
//
// The computation itself (sampling, persistence diagrams, KDE) stays on
// the backend; this module only moves typed data across HTTP.

pub mod client;
pub mod model;
