//! Language selection - the `/start` menu and its callback.

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::localization::localize;
use crate::domain::entities::LanguageCode;
use crate::domain::traits::{Bot, KeyboardButton, PreferenceStore};

/// Callback payloads from the menu look like `language:en`.
pub const LANGUAGE_CALLBACK_PREFIX: &str = "language:";

/// Shown before a language is picked, so it carries all three.
const MENU_PROMPT: &str =
    "Please choose your language / Пожалуйста, выберите ваш язык / Prosím, vyberte váš jazyk:";

/// Presents the language menu and records the user's pick.
pub struct LanguageService {
    bot: Arc<dyn Bot>,
    store: Arc<dyn PreferenceStore>,
    default_language: LanguageCode,
}

impl LanguageService {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn PreferenceStore>,
        default_language: LanguageCode,
    ) -> Self {
        Self {
            bot,
            store,
            default_language,
        }
    }

    /// Send the trilingual prompt with one button per supported language.
    pub async fn present_menu(&self, chat_id: &str) -> Result<(), BotError> {
        let row = LanguageCode::ALL
            .iter()
            .map(|code| {
                KeyboardButton::new(code.native_name())
                    .with_callback(format!("{}{}", LANGUAGE_CALLBACK_PREFIX, code.as_str()))
            })
            .collect();

        self.bot
            .send_with_keyboard(chat_id, MENU_PROMPT, vec![row])
            .await?;
        Ok(())
    }

    /// Record the chosen language and confirm in that language.
    ///
    /// The code always originates from the fixed menu, but anything not in the
    /// supported set is still rejected rather than stored: the user gets the
    /// `choose_language` message in their effective language instead.
    pub async fn on_language_chosen(
        &self,
        user_id: &str,
        chat_id: &str,
        origin_message_id: Option<&str>,
        code: &str,
    ) -> Result<(), BotError> {
        let Some(language) = LanguageCode::parse(code) else {
            tracing::warn!("Rejected unsupported language code {:?} from {}", code, user_id);
            let effective = self.effective_language(user_id).await;
            self.bot
                .send_message(chat_id, localize(effective).choose_language)
                .await?;
            return Err(BotError::UnsupportedLanguage(code.to_string()));
        };

        self.store.set_language(user_id, language).await?;
        tracing::info!("User {} set language to {}", user_id, language);

        let confirmation = localize(language).language_set;
        match origin_message_id {
            Some(message_id) => {
                self.bot
                    .edit_message(chat_id, message_id, confirmation)
                    .await?
            }
            None => {
                self.bot.send_message(chat_id, confirmation).await?;
            }
        }
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
