pub mod errors;
pub mod id;
pub mod language;

pub use errors::{ConfigError, SolError};
pub use id::{new_id, SessionId};
pub use language::Language;

pub type Result<T> = std::result::Result<T, SolError>;
