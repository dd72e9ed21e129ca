//! Domain lookup - free text in, localized WHOIS summary out.

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::localization::localize;
use crate::domain::entities::{Contact, DomainRecord, LanguageCode};
use crate::domain::traits::{Bot, DomainLookup, PreferenceStore};

const ABSENT: &str = "N/A";

/// Handles a plain-text message as a domain-name query.
pub struct LookupService {
    bot: Arc<dyn Bot>,
    store: Arc<dyn PreferenceStore>,
    lookup: Arc<dyn DomainLookup>,
    default_language: LanguageCode,
}

impl LookupService {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn PreferenceStore>,
        lookup: Arc<dyn DomainLookup>,
        default_language: LanguageCode,
    ) -> Self {
        Self {
            bot,
            store,
            lookup,
            default_language,
        }
    }

    /// Query the WHOIS source with the user's text verbatim and reply once.
    ///
    /// Three outcomes, all localized: a formatted record, `not_found` when the
    /// response has no record, `service_error` when the source itself failed.
    /// Faults never escape past this boundary.
    pub async fn handle_lookup(
        &self,
        user_id: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<(), BotError> {
        let language = self.effective_language(user_id).await;
        let loc = localize(language);

        let reply = match self.lookup.lookup(text).await {
            Ok(Some(record)) => format_record(language, &record),
            Ok(None) => loc.not_found.to_string(),
            Err(e) => {
                tracing::warn!("WHOIS lookup for {:?} failed: {}", text, e);
                loc.service_error.to_string()
            }
        };

        self.bot.send_message(chat_id, &reply).await?;
        Ok(())
    }

    async fn effective_language(&self, user_id: &str) -> LanguageCode {
        match self.store.language(user_id).await {
            Ok(Some(code)) => code,
            Ok(None) => self.default_language,
            Err(e) => {
                tracing::warn!("Preference lookup failed for {}: {}", user_id, e);
                self.default_language
            }
        }
    }
}

/// Render one record with the language's labels. Absent fields and empty
/// lists come out as `N/A`; the contact block keeps its English captions in
/// every language.
pub fn format_record(language: LanguageCode, record: &DomainRecord) -> String {
    let loc = localize(language);

    format!(
        "{domain_label}: {domain}\n\
         {status_label}: {status}\n\
         {created_label}: {created}\n\
         {expires_label}: {expires}\n\
         {registrar_label}: {registrar}\n\n\
         Registrant Organization: {registrant_org}\n\
         Registrant Country: {registrant_country}\n\n\
         Administrative Contact Organization: {admin_org}\n\
         Administrative Contact Country: {admin_country}\n\n\
         Technical Contact Organization: {tech_org}\n\
         Technical Contact Country: {tech_country}\n\n\
         Name Servers: {name_servers}\n",
        domain_label = loc.domain,
        domain = field(record.domain_name.as_deref()),
        status_label = loc.status,
        status = join_list(&record.status),
        created_label = loc.creation_date,
        created = field(record.created_date_normalized.as_deref()),
        expires_label = loc.expiration_date,
        expires = field(record.expires_date_normalized.as_deref()),
        registrar_label = loc.registrar,
        registrar = field(record.registrar_name.as_deref()),
        registrant_org = contact_field(record.registrant.as_ref(), |c| &c.organization),
        registrant_country = contact_field(record.registrant.as_ref(), |c| &c.country),
        admin_org = contact_field(record.administrative_contact.as_ref(), |c| &c.organization),
        admin_country = contact_field(record.administrative_contact.as_ref(), |c| &c.country),
        tech_org = contact_field(record.technical_contact.as_ref(), |c| &c.organization),
        tech_country = contact_field(record.technical_contact.as_ref(), |c| &c.country),
        name_servers = join_list(record.host_names()),
    )
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}

fn contact_field<'a>(
    contact: Option<&'a Contact>,
    pick: impl Fn(&'a Contact) -> &'a Option<String>,
) -> &'a str {
    contact
        .and_then(|c| pick(c).as_deref())
        .unwrap_or(ABSENT)
}

fn join_list(items: &[String]) -> String {
    if items.is_empty() {
        ABSENT.to_string()
    } else {
        items.join(", ")
    }
}
