//! Memorial module - drafts and the memorials published from them.

mod aggregate;
mod draft;
mod errors;
mod profile;
mod slug;

pub use aggregate::{Memorial, NewMemorial, PUBLISHED};
pub use draft::{Draft, DEFAULT_TITLE};
pub use errors::MemorialError;
pub use profile::{MemorialProfile, DEFAULT_EPITAPH, UNKNOWN};
pub use slug::{Slug, MAX_SLUG_LEN};
