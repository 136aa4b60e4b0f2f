pub mod error;
pub mod logging;
pub mod text;

pub use error::{BookbindError, BoxResult};
