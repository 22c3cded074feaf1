use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{ Deserialize, Serialize };

use crate::utils::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Text {
    Name,
    Subtitle,
    Telegram,
    Vk,
    Phone,
    Email,
    Hint,
    PhotosTitle,
    Photo1,
    Photo2,
    Photo3,
    Photo4,
    FooterLine1,
    FooterLine2,
    FooterGithub,
    CopiedHint,
    ThemeMatrix,
    ThemeCosmos,
    ThemeOcean,
}

impl Text {
    pub const ALL: [Text; 19] = [
        Text::Name,
        Text::Subtitle,
        Text::Telegram,
        Text::Vk,
        Text::Phone,
        Text::Email,
        Text::Hint,
        Text::PhotosTitle,
        Text::Photo1,
        Text::Photo2,
        Text::Photo3,
        Text::Photo4,
        Text::FooterLine1,
        Text::FooterLine2,
        Text::FooterGithub,
        Text::CopiedHint,
        Text::ThemeMatrix,
        Text::ThemeCosmos,
        Text::ThemeOcean,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Text::Name => "name",
            Text::Subtitle => "subtitle",
            Text::Telegram => "telegram",
            Text::Vk => "vk",
            Text::Phone => "phone",
            Text::Email => "email",
            Text::Hint => "hint",
            Text::PhotosTitle => "photosTitle",
            Text::Photo1 => "photo1",
            Text::Photo2 => "photo2",
            Text::Photo3 => "photo3",
            Text::Photo4 => "photo4",
            Text::FooterLine1 => "footerLine1",
            Text::FooterLine2 => "footerLine2",
            Text::FooterGithub => "footerGithub",
            Text::CopiedHint => "copiedHint",
            Text::ThemeMatrix => "themeMatrix",
            Text::ThemeCosmos => "themeCosmos",
            Text::ThemeOcean => "themeOcean",
        }
    }
}

type Table = HashMap<Text, String>;

fn parse_table(language: Language, raw: &str) -> Table {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("Translation table for {} is malformed: {}", language, e);
        Table::new()
    })
}

lazy_static! {
    static ref RU: Table = parse_table(Language::Ru, include_str!("../../assets/i18n/ru.json"));
    static ref EN: Table = parse_table(Language::En, include_str!("../../assets/i18n/en.json"));
}

fn table(language: Language) -> &'static Table {
    match language {
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

/// Looks up `key` for `language`, falling back to Russian and then to the key id.
pub fn translate(language: Language, key: Text) -> &'static str {
    table(language)
        .get(&key)
        .or_else(|| RU.get(&key))
        .map(String::as_str)
        .unwrap_or_else(|| key.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_translated_in_both_tables() {
        for language in Language::ALL {
            for key in Text::ALL {
                assert!(table(language).contains_key(&key), "{} is missing {}", language, key.key());
            }
            assert_eq!(table(language).len(), Text::ALL.len());
        }
    }

    #[test]
    fn test_serde_names_match_keys() {
        for key in Text::ALL {
            assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{}\"", key.key()));
        }
    }

    #[test]
    fn test_translate_switches_language() {
        assert_eq!(translate(Language::Ru, Text::Name), "Кирсанов Егор Дмитриевич");
        assert_eq!(translate(Language::En, Text::Name), "Egor Dmitrievich Kirsanov");
        assert_eq!(translate(Language::En, Text::Vk), "VKontakte");
    }

    #[test]
    fn test_partial_and_broken_tables() {
        let partial: Table = parse_table(Language::En, r#"{ "name": "Only name" }"#);
        assert_eq!(partial.len(), 1);
        assert!(parse_table(Language::En, "not json").is_empty());
    }
}
