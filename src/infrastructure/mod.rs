//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Preference persistence
//! - Whois: External WHOIS data source client
//! - Adapters: Platform integrations (Telegram, console)

pub mod adapters;
pub mod config;
pub mod storage;
pub mod whois;
