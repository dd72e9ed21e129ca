//! Static per-language label table.
//!
//! One immutable entry per supported language, fixed at compile time. Lookup
//! is a total match and can never fail for a `LanguageCode`.

use crate::domain::entities::LanguageCode;

/// The full set of localized strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct LocalizationEntry {
    pub domain: &'static str,
    pub status: &'static str,
    pub creation_date: &'static str,
    pub expiration_date: &'static str,
    pub registrar: &'static str,
    pub not_found: &'static str,
    pub language_set: &'static str,
    pub choose_language: &'static str,
    pub service_error: &'static str,
}

const EN: LocalizationEntry = LocalizationEntry {
    domain: "Domain",
    status: "Status",
    creation_date: "Creation Date",
    expiration_date: "Expiration Date",
    registrar: "Registrar",
    not_found: "Sorry, domain information not found.",
    language_set: "Language set to English.",
    choose_language: "Please, choose one of the available languages: en, sk, ru.",
    service_error: "Sorry, the domain lookup service is temporarily unavailable. Please try again later.",
};

const SK: LocalizationEntry = LocalizationEntry {
    domain: "Doména",
    status: "Stav",
    creation_date: "Dátum vytvorenia",
    expiration_date: "Dátum expirácie",
    registrar: "Registrátor",
    not_found: "Ľutujeme, informácie o doméne sa nenašli.",
    language_set: "Jazyk nastavený na slovenčinu.",
    choose_language: "Prosím, vyberte jeden z dostupných jazykov: en, sk, ru.",
    service_error: "Ľutujeme, služba vyhľadávania domén je dočasne nedostupná. Skúste to prosím neskôr.",
};

const RU: LocalizationEntry = LocalizationEntry {
    domain: "Домен",
    status: "Статус",
    creation_date: "Дата создания",
    expiration_date: "Дата окончания",
    registrar: "Регистратор",
    not_found: "Извините, информация о домене не найдена.",
    language_set: "Язык установлен на русский.",
    choose_language: "Пожалуйста, выберите один из доступных языков: en, sk, ru.",
    service_error: "Извините, сервис поиска доменов временно недоступен. Попробуйте позже.",
};

/// Returns the complete entry for a language. Total over all three codes.
pub fn localize(code: LanguageCode) -> &'static LocalizationEntry {
    match code {
        LanguageCode::En => &EN,
        LanguageCode::Sk => &SK,
        LanguageCode::Ru => &RU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_complete_entry() {
        for code in LanguageCode::ALL {
            let loc = localize(code);
            assert!(!loc.domain.is_empty());
            assert!(!loc.not_found.is_empty());
            assert!(!loc.language_set.is_empty());
            assert!(!loc.choose_language.is_empty());
            assert!(!loc.service_error.is_empty());
        }
    }

    #[test]
    fn entries_are_distinct_per_language() {
        assert_ne!(
            localize(LanguageCode::En).not_found,
            localize(LanguageCode::Ru).not_found
        );
        assert_ne!(
            localize(LanguageCode::Sk).language_set,
            localize(LanguageCode::Ru).language_set
        );
    }

    #[test]
    fn english_labels_match_reply_format() {
        let loc = localize(LanguageCode::En);
        assert_eq!(loc.domain, "Domain");
        assert_eq!(loc.registrar, "Registrar");
        assert_eq!(loc.not_found, "Sorry, domain information not found.");
    }
}
