// UI Layer
pub mod components;
pub mod layout;
pub mod layout_context;
pub mod layout_state;
pub mod notification;
pub mod observer;
pub mod viewport;

// Re-export layout types for convenience
pub use layout::{LayoutInputs, LayoutManager};
pub use layout_context::{LayoutContext, ProviderScope, ScopeError};
pub use layout_state::{LayoutStateController, PanelState};
pub use notification::{DemoModeFlag, GateDecision, NotificationGate, RestrictedVocabulary};
pub use observer::Subscription;
pub use viewport::ViewportObserver;

// Re-export components
pub use components::{CommandBar, CommandItem, Sidebar, StatusBar, WarningScreen, Workspace};
