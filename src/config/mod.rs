//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TrailheadPaths;
pub use settings::Settings;
