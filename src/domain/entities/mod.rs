//! Domain entities - Core business objects with no external dependencies

pub mod language;
pub mod message;
pub mod user;
pub mod whois;

pub use language::LanguageCode;
pub use message::{Content, Message, MessageType};
pub use user::User;
pub use whois::{Contact, DomainRecord, NameServers};
