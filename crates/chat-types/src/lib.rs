pub mod message;
pub mod session;
pub mod settings;
pub mod selection;
pub mod event;
pub mod error;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
