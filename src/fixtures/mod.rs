//! Sample API payloads shared by the unit tests.

mod assistant_fixtures;
mod error_fixtures;
mod file_fixtures;
mod image_fixtures;
mod run_fixtures;
mod thread_fixtures;

pub use assistant_fixtures::*;
pub use error_fixtures::*;
pub use file_fixtures::*;
pub use image_fixtures::*;
pub use run_fixtures::*;
pub use thread_fixtures::*;
