//! Model of the client-side bootstrap that pages run on load: a navigation
//! store, a one-shot data fetch and a data store populated from it.

mod data;
mod store;

pub use data::{DataPayload, DocumentSource, HttpDocumentSource, fetch_payload};
pub use store::{AppState, DataStore, NavigationStore};
