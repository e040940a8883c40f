pub mod batch;
mod error;
mod evsite_app;
pub mod optimize;

pub use error::EvsiteAppError;
pub use evsite_app::{EvsiteApp, EvsiteOperation};
