mod in_memory;
mod json_lines;
mod tracing_notifier;

pub use in_memory::InMemory;
pub use json_lines::JsonLinesNotifier;
pub use tracing_notifier::TracingNotifier;
