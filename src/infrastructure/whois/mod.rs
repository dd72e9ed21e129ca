//! WhoisXML API client
//!
//! Single GET per lookup with an explicit request timeout. The user's text is
//! passed verbatim as the `domainName` parameter (query-encoded by reqwest).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::errors::{BotError, LookupError};
use crate::domain::entities::DomainRecord;
use crate::domain::traits::DomainLookup;

/// Top-level provider response. A body without the `WhoisRecord` key is the
/// normal "no record" outcome, not a fault.
#[derive(Debug, Deserialize)]
struct WhoisResponse {
    #[serde(rename = "WhoisRecord")]
    whois_record: Option<DomainRecord>,
}

pub struct WhoisXmlClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WhoisXmlClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl DomainLookup for WhoisXmlClient {
    async fn lookup(&self, domain: &str) -> Result<Option<DomainRecord>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("domainName", domain),
                ("outputFormat", "JSON"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout
                } else {
                    LookupError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: WhoisResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        Ok(body.whois_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_record_parses() {
        let json = r#"{"WhoisRecord": {"domainName": "example.com", "registrarName": "Example Registrar"}}"#;
        let response: WhoisResponse = serde_json::from_str(json).unwrap();
        let record = response.whois_record.unwrap();
        assert_eq!(record.domain_name.as_deref(), Some("example.com"));
        assert_eq!(record.registrar_name.as_deref(), Some("Example Registrar"));
    }

    #[test]
    fn response_without_record_key_is_none() {
        let json = r#"{"ErrorMessage": {"msg": "no data"}}"#;
        let response: WhoisResponse = serde_json::from_str(json).unwrap();
        assert!(response.whois_record.is_none());
    }

    #[test]
    fn unknown_record_fields_are_tolerated() {
        let json = r#"{"WhoisRecord": {"domainName": "example.com", "audit": {"createdDate": "x"}, "estimatedDomainAge": 10000}}"#;
        let response: WhoisResponse = serde_json::from_str(json).unwrap();
        assert!(response.whois_record.is_some());
    }
}
