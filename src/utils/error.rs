use thiserror::Error;

use crate::ui::layout_context::ScopeError;

#[derive(Error, Debug)]
pub enum PanelDeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Scope(#[from] ScopeError),
}

pub type Result<T> = std::result::Result<T, PanelDeckError>;
