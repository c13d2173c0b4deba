//! Reactive-store model for the client bootstrap.
//!
//! The stores are explicit, constructed state passed to whatever view layer
//! consumes them; there is no ambient singleton. Initialization happens
//! exactly once per page view: not yet initialized, then initialized.

use log::warn;
use serde_json::Value;

use crate::project::SiteLayout;

use super::data::{DataPayload, DocumentSource, fetch_payload};

/// Store exposing the current page and a membership test for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStore {
    current_page: String,
}

impl NavigationStore {
    /// Derive the current page from a location path, falling back to the
    /// landing page when the path has no file component.
    pub fn from_location_path(path: &str, landing_page: &str) -> Self {
        let current_page = path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(landing_page)
            .to_string();
        Self { current_page }
    }

    /// File name of the page being viewed.
    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    /// Whether `page` is the page being viewed.
    pub fn is_current(&self, page: &str) -> bool {
        self.current_page == page
    }
}

/// Store holding the three data slots consumed by templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStore {
    /// Destination entries, copied verbatim from the payload.
    pub destinations: Value,
    /// Crew entries, copied verbatim from the payload.
    pub crew: Value,
    /// Technology entries, copied verbatim from the payload.
    pub technology: Value,
}

impl From<DataPayload> for DataStore {
    fn from(payload: DataPayload) -> Self {
        Self {
            destinations: payload.destinations,
            crew: payload.crew,
            technology: payload.technology,
        }
    }
}

/// Application state assembled on page load.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Navigation store, always populated.
    pub navigation: NavigationStore,
    /// Data store; empty when the fetch or parse failed.
    pub data: Option<DataStore>,
}

impl AppState {
    /// Initialize the stores for a page view.
    ///
    /// Performs the single data fetch against the layout's base-path-aware
    /// URL. A fetch or parse failure is logged and leaves the data store
    /// empty rather than propagating; the navigation store is populated
    /// either way.
    pub fn initialize(layout: &SiteLayout, location_path: &str, source: &dyn DocumentSource) -> Self {
        let navigation = NavigationStore::from_location_path(location_path, &layout.landing_page);

        let url = layout.data_url();
        let data = match fetch_payload(source, &url) {
            Ok(payload) => Some(DataStore::from(payload)),
            Err(err) => {
                warn!("data fetch failed, leaving store empty: {err:#}");
                None
            }
        };

        Self { navigation, data }
    }
}
