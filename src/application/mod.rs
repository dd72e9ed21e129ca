//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Localization: Static per-language label table
//! - Services: Business logic orchestration
//! - Messaging: Update parsing and dispatching

pub mod errors;
pub mod localization;
pub mod messaging;
pub mod services;
