//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::AuditPaths;
pub use settings::Settings;
