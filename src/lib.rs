#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod bundle;
pub mod check;
pub mod config;
pub mod project;

pub use bootstrap::{AppState, DataStore, NavigationStore};
pub use bundle::{BuildMode, BundleDriver, EsbuildJob};
pub use check::{BrokenReference, CheckReport, check_site};
pub use config::ProjectConfig;
pub use project::SiteLayout;
