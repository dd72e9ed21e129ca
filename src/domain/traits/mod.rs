//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod lookup;
pub mod store;

pub use bot::{Bot, BotInfo, KeyboardButton};
pub use lookup::DomainLookup;
pub use store::PreferenceStore;
