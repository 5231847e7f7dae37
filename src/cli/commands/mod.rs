//! CLI command implementations.

mod ask;
mod chat;
mod doctor;
mod serve;

pub use ask::run_ask;
pub use chat::run_chat;
pub use doctor::run_doctor;
pub use serve::run_serve;
