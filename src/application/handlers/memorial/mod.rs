//! Memorial handlers.
//!
//! ## Queries
//! - Get one memorial by slug
//! - List recent memorials

mod get_memorial;
mod list_memorials;

pub use get_memorial::{GetMemorialHandler, GetMemorialQuery, GetMemorialResult};
pub use list_memorials::{
    ListMemorialsHandler, ListMemorialsQuery, ListMemorialsResult, MAX_LISTING_LIMIT,
};
