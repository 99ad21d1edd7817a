//! HTTP adapter for the public memorial API.
//!
//! - `GET /api/memorials` - Recent memorials, newest first
//! - `GET /api/memorials/:slug` - One memorial, or 404

pub mod handlers;
pub mod routes;

pub use handlers::ListMemorialsParams;
pub use routes::memorial_routes;
