pub mod async_runtime;
pub mod message;

pub use async_runtime::AsyncRuntime;
pub use message::SessionMessage;
