//! Supabase record store adapter.
//!
//! Implements the `RecordStore` port over Supabase's PostgREST HTTP
//! interface (`{project}/rest/v1/{table}`), plus an in-memory store for
//! tests.
//!
//! # Configuration
//!
//! Environment variables (prefix `RIP_GAMERTAGS__SUPABASE__`):
//! - `URL`: project URL
//! - `ANON_KEY`: public reads
//! - `SERVICE_ROLE_KEY`: orders, drafts and inserts

mod in_memory;
mod rows;
mod supabase_store;

pub use in_memory::InMemoryRecordStore;
pub use supabase_store::{SupabaseRecordStore, SupabaseStoreConfig};
