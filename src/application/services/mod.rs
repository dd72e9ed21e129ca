//! Application services - Business logic orchestration

pub mod language_service;
pub mod lookup_service;

pub use language_service::{LanguageService, LANGUAGE_CALLBACK_PREFIX};
pub use lookup_service::LookupService;
