//! Dispatcher - Routes inbound messages to handlers
//!
//! Three routes, matching the three event kinds the transport delivers:
//! the `start` command opens the language menu, callbacks with a `language:`
//! payload record the pick, and any plain text is a domain lookup.

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::services::{LanguageService, LookupService, LANGUAGE_CALLBACK_PREFIX};
use crate::domain::entities::{Content, LanguageCode, Message};
use crate::domain::traits::{Bot, DomainLookup, PreferenceStore};

pub struct Dispatcher {
    languages: LanguageService,
    lookups: LookupService,
}

impl Dispatcher {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn PreferenceStore>,
        lookup: Arc<dyn DomainLookup>,
        default_language: LanguageCode,
    ) -> Self {
        Self {
            languages: LanguageService::new(bot.clone(), store.clone(), default_language),
            lookups: LookupService::new(bot, store, lookup, default_language),
        }
    }

    pub async fn dispatch(&self, message: &Message) -> Result<(), BotError> {
        match &message.content {
            Content::Command { name, .. } if name == "start" => {
                self.languages.present_menu(&message.chat_id).await
            }
            Content::Command { name, .. } => {
                // Only /start is wired; everything else falls through silently.
                tracing::debug!("Ignoring unhandled command /{}", name);
                Ok(())
            }
            Content::Callback {
                data,
                origin_message_id,
            } => match data.strip_prefix(LANGUAGE_CALLBACK_PREFIX) {
                Some(code) => {
                    self.languages
                        .on_language_chosen(
                            message.user_id(),
                            &message.chat_id,
                            origin_message_id.as_deref(),
                            code,
                        )
                        .await
                }
                None => {
                    tracing::debug!("Ignoring unknown callback payload {:?}", data);
                    Ok(())
                }
            },
            Content::Text(text) => {
                self.lookups
                    .handle_lookup(message.user_id(), &message.chat_id, text)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::LookupError;
    use crate::application::localization::localize;
    use crate::domain::entities::{DomainRecord, User};
    use crate::domain::traits::{BotInfo, KeyboardButton};
    use crate::infrastructure::storage::MemoryPreferenceStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct NullBot {
        sent: Mutex<Vec<String>>,
    }

    impl NullBot {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Bot for NullBot {
        async fn start(&self) -> Result<(), BotError> {
            Ok(())
        }

        async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok("1".to_string())
        }

        async fn send_with_keyboard(
            &self,
            _chat_id: &str,
            text: &str,
            _buttons: Vec<Vec<KeyboardButton>>,
        ) -> Result<String, BotError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok("1".to_string())
        }

        async fn edit_message(
            &self,
            _chat_id: &str,
            _message_id: &str,
            text: &str,
        ) -> Result<(), BotError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }

        async fn answer_callback(
            &self,
            _callback_id: &str,
            _text: Option<&str>,
        ) -> Result<(), BotError> {
            Ok(())
        }

        fn bot_info(&self) -> BotInfo {
            BotInfo {
                id: "test".to_string(),
                name: "test".to_string(),
                username: "test".to_string(),
            }
        }
    }

    struct MissingLookup;

    #[async_trait]
    impl DomainLookup for MissingLookup {
        async fn lookup(&self, _domain: &str) -> Result<Option<DomainRecord>, LookupError> {
            Ok(None)
        }
    }

    fn dispatcher(bot: Arc<NullBot>, store: Arc<MemoryPreferenceStore>) -> Dispatcher {
        Dispatcher::new(bot, store, Arc::new(MissingLookup), LanguageCode::Ru)
    }

    #[tokio::test]
    async fn start_command_opens_the_menu() {
        let bot = Arc::new(NullBot::new());
        let store = Arc::new(MemoryPreferenceStore::new());
        let d = dispatcher(bot.clone(), store);

        let msg = Message::from_command("chat1", "start", vec![]);
        d.dispatch(&msg).await.unwrap();

        let sent = bot.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("choose your language"));
    }

    #[tokio::test]
    async fn other_commands_are_ignored() {
        let bot = Arc::new(NullBot::new());
        let store = Arc::new(MemoryPreferenceStore::new());
        let d = dispatcher(bot.clone(), store);

        let msg = Message::from_command("chat1", "help", vec![]);
        d.dispatch(&msg).await.unwrap();

        assert!(bot.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn language_callback_is_routed_to_the_selector() {
        let bot = Arc::new(NullBot::new());
        let store = Arc::new(MemoryPreferenceStore::new());
        let d = dispatcher(bot.clone(), store.clone());

        let msg = Message::new(
            "chat1",
            Content::Callback {
                data: "language:en".to_string(),
                origin_message_id: Some("5".to_string()),
            },
        )
        .with_sender(User::new("user1"));
        d.dispatch(&msg).await.unwrap();

        assert_eq!(
            store.language("user1").await.unwrap(),
            Some(LanguageCode::En)
        );
    }

    #[tokio::test]
    async fn foreign_callback_payloads_are_ignored() {
        let bot = Arc::new(NullBot::new());
        let store = Arc::new(MemoryPreferenceStore::new());
        let d = dispatcher(bot.clone(), store.clone());

        let msg = Message::new(
            "chat1",
            Content::Callback {
                data: "page:2".to_string(),
                origin_message_id: None,
            },
        )
        .with_sender(User::new("user1"));
        d.dispatch(&msg).await.unwrap();

        assert!(bot.sent.lock().unwrap().is_empty());
        assert_eq!(store.language("user1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn plain_text_triggers_a_lookup() {
        let bot = Arc::new(NullBot::new());
        let store = Arc::new(MemoryPreferenceStore::new());
        let d = dispatcher(bot.clone(), store);

        let msg = Message::from_text("chat1", "example.com");
        d.dispatch(&msg).await.unwrap();

        let sent = bot.sent.lock().unwrap().clone();
        assert_eq!(sent, vec![localize(LanguageCode::Ru).not_found.to_string()]);
    }
}
