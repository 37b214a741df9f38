// UI Components
pub mod command_bar;
pub mod sidebar;
pub mod status_bar;
pub mod warning;
pub mod workspace;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
pub use workspace::Workspace;
