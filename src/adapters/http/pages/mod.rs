//! Server-rendered pages.
//!
//! Pages are assembled with `format!` over escaped values; no template
//! engine. Styling is inline CSS only.

pub mod detail;
pub mod handlers;
pub mod landing;
pub mod layout;
pub mod payment_page;
pub mod routes;

pub use layout::html_escape;
pub use routes::page_routes;
