pub mod paths;
pub mod templates;
pub mod views;

pub use paths::SitePaths;
