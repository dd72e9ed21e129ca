//! Typed view of one WHOIS record.
//!
//! Every field is optional: the upstream API omits whatever it does not know,
//! and absence is represented here rather than patched over with defaults
//! during formatting.

use serde::Deserialize;

/// A single domain registration record, as returned inside the provider's
/// `WhoisRecord` envelope. Transient - lives only while one reply is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub domain_name: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    pub created_date_normalized: Option<String>,
    pub expires_date_normalized: Option<String>,
    pub registrar_name: Option<String>,
    pub registrant: Option<Contact>,
    pub administrative_contact: Option<Contact>,
    pub technical_contact: Option<Contact>,
    pub name_servers: Option<NameServers>,
}

/// Registrant / administrative / technical contact block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub organization: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameServers {
    #[serde(default)]
    pub host_names: Vec<String>,
}

impl DomainRecord {
    pub fn host_names(&self) -> &[String] {
        self.name_servers
            .as_ref()
            .map(|ns| ns.host_names.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = serde_json::json!({
            "domainName": "example.com",
            "status": ["clientTransferProhibited"],
            "createdDateNormalized": "1995-08-14 04:00:00 UTC",
            "expiresDateNormalized": "2026-08-13 04:00:00 UTC",
            "registrarName": "RESERVED-Internet Assigned Numbers Authority",
            "registrant": {"organization": "IANA", "country": "US"},
            "nameServers": {"hostNames": ["a.iana-servers.net", "b.iana-servers.net"]}
        });
        let record: DomainRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.domain_name.as_deref(), Some("example.com"));
        assert_eq!(record.status, vec!["clientTransferProhibited"]);
        assert_eq!(record.host_names().len(), 2);
        assert_eq!(
            record.registrant.as_ref().unwrap().organization.as_deref(),
            Some("IANA")
        );
        assert!(record.administrative_contact.is_none());
    }

    #[test]
    fn deserializes_sparse_record() {
        let record: DomainRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(record.domain_name.is_none());
        assert!(record.status.is_empty());
        assert!(record.host_names().is_empty());
    }
}
