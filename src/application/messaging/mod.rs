//! Message handling - turns transport events into routed handler calls

pub mod dispatcher;
pub mod parser;

pub use dispatcher::Dispatcher;
pub use parser::UpdateParser;
