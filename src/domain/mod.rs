//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (LanguageCode, Message, DomainRecord)
//! - Traits: Abstractions for infrastructure (Bot, PreferenceStore, DomainLookup)

pub mod entities;
pub mod traits;
