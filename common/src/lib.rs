pub mod config;
pub mod error;
pub mod sidebar;

pub use config::SidebarConfig;
pub use error::SidebarError;
pub use sidebar::{SidebarState, SidebarToggle};
