pub mod callable;
pub mod decorator;
pub mod sink;

pub use callable::{Callable, CallableMetadata, Named, Signature};
pub use decorator::{compose, Compose, Decorator};
pub use sink::{LogSink, SharedSink};
