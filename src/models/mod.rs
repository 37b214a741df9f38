// Data Models
pub mod message;
pub mod orientation;

pub use message::{MessageKind, OutboundMessage};
pub use orientation::{LayoutConfiguration, Orientation};
