pub mod config;
pub mod error;
pub mod navigation;
pub mod search;

pub use config::SiteConfig;
pub use error::ConfigError;
pub use navigation::{NavigationSection, SidebarSpec};
