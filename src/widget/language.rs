//! Supported chat languages and their localized strings.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A language the concierge service answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
}

/// Supported language codes and their display names.
pub const SUPPORTED_LANGUAGES: &[(Language, &str)] =
    &[(Language::Ja, "日本語"), (Language::En, "English")];

impl Language {
    /// The wire code sent to the server in the `lang` field.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// The name shown on the language selection control.
    pub fn display_name(self) -> &'static str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(lang, _)| *lang == self)
            .map_or_else(|| self.code(), |(_, name)| *name)
    }

    /// Localized UI strings for this language.
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> Result<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(lang, _)| *lang)
            .find(|lang| lang.code() == code)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid language code: '{code}'\n\n\
                     Valid language codes: ja, en\n\
                     Run 'rag-chat languages' to see all supported codes."
                )
            })
    }
}

/// Localized strings for one language.
#[derive(Debug)]
pub struct Strings {
    pub placeholder: &'static str,
    pub send_label: &'static str,
    pub loading: &'static str,
    pub welcome: &'static str,
    error_template: &'static str,
    connect_failure_template: &'static str,
}

impl Strings {
    /// Wraps a failure description in the localized error sentence.
    #[allow(clippy::literal_string_with_formatting_args)]
    pub fn error_message(&self, message: &str) -> String {
        // {message} is a placeholder for string replacement, not a format argument
        self.error_template.replace("{message}", message)
    }

    /// The localized "could not connect" description for `endpoint`.
    #[allow(clippy::literal_string_with_formatting_args)]
    pub fn connect_failure(&self, endpoint: &str) -> String {
        self.connect_failure_template.replace("{endpoint}", endpoint)
    }
}

const JA: Strings = Strings {
    placeholder: "質問を入力してください...",
    send_label: "送信",
    loading: "回答を準備しています...",
    welcome: "いらっしゃいませ。当ホテル周辺のおすすめ施設についてご質問ください。\
              最新の情報とホテルの推奨リストに基づいてお答えします。",
    error_template: "エラーが発生しました: {message}。",
    connect_failure_template: "サーバーに接続できませんでした。\
                               RAGサーバーが起動しているか確認してください ({endpoint})",
};

const EN: Strings = Strings {
    placeholder: "Enter your question...",
    send_label: "Send",
    loading: "Looking that up...",
    welcome: "Welcome. Please ask me about recommended facilities around the hotel. \
              I can provide information based on the hotel's list and up-to-date search results.",
    error_template: "An error occurred: {message}.",
    connect_failure_template: "Could not connect to the server. \
                               Please check that the RAG server is running ({endpoint})",
};

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (lang, name) in SUPPORTED_LANGUAGES {
        println!("  {:3} {}", Style::code(lang.code()), Style::secondary(name));
    }
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(code: &str) -> Result<Language> {
    code.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert_eq!(validate_language("ja").ok(), Some(Language::Ja));
        assert_eq!(validate_language("en").ok(), Some(Language::En));
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("fr").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("JA").is_err()); // Case sensitive
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Ja).ok().as_deref(), Some("\"ja\""));
        assert_eq!(serde_json::to_string(&Language::En).ok().as_deref(), Some("\"en\""));
    }

    #[test]
    fn test_display_name_comes_from_supported_languages() {
        for (lang, name) in SUPPORTED_LANGUAGES {
            assert_eq!(lang.display_name(), *name);
        }
        assert_eq!(Language::Ja.display_name(), "日本語");
    }

    #[test]
    fn test_english_strings() {
        let strings = Language::En.strings();
        assert_eq!(strings.placeholder, "Enter your question...");
        assert_eq!(strings.send_label, "Send");
        assert!(strings.welcome.starts_with("Welcome."));
        assert_eq!(
            strings.error_message("Server error: 500 - internal"),
            "An error occurred: Server error: 500 - internal."
        );
    }

    #[test]
    fn test_japanese_strings() {
        let strings = Language::Ja.strings();
        assert_eq!(strings.placeholder, "質問を入力してください...");
        assert_eq!(strings.send_label, "送信");
        assert_eq!(strings.error_message("x"), "エラーが発生しました: x。");
    }

    #[test]
    fn test_connect_failure_mentions_endpoint() {
        let text = Language::En
            .strings()
            .connect_failure("http://localhost:3000/rag-chat");
        assert!(text.starts_with("Could not connect to the server."));
        assert!(text.contains("http://localhost:3000/rag-chat"));
    }
}
