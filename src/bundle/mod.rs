//! Bundler driver: turns the site layout into esbuild invocations.

mod command;
mod driver;

pub use command::{BuildMode, EsbuildJob};
pub use driver::BundleDriver;
