// System Layer
pub mod preference_store;
pub mod viewport;

pub use preference_store::{
    FileStore, MemoryStore, PreferenceStore, UnavailableStore, SIDEBAR_STATE_KEY,
};
pub use viewport::{
    columns_to_width, FixedViewport, TerminalViewport, ViewportSource, DEFAULT_CELL_WIDTH,
};
