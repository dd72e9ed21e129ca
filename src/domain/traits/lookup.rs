use crate::application::errors::LookupError;
use crate::domain::entities::DomainRecord;
use async_trait::async_trait;

/// DomainLookup trait - abstraction for the WHOIS data source
///
/// `Ok(None)` is the normal "no record for that name" outcome; `Err` means the
/// service itself failed (network, timeout, bad status, malformed body). The
/// two are kept apart so the user-facing replies can differ.
#[async_trait]
pub trait DomainLookup: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<Option<DomainRecord>, LookupError>;
}
