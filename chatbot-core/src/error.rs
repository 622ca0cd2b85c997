use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Session is closed")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, ChatError>;
