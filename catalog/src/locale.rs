use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Locale(pub(crate) String);

impl Locale {
    pub const ENGLISH: &'static str = "en";

    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub name: Locale,
}

/// A localized flavor text entry, as attached to moves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Text {
    #[serde(rename = "flavor_text")]
    pub text: String,
    pub language: Language,
}

/// Returns the first English entry of `texts`, if any.
pub fn english<'a>(texts: impl IntoIterator<Item = &'a Text>) -> Option<&'a str> {
    texts
        .into_iter()
        .find(|text| text.language.name.is_english())
        .map(|text| text.text.as_str())
}

/// Collapses the line breaks and form feeds the games embed in their text.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str, locale: &str) -> Text {
        Text {
            text: content.to_owned(),
            language: Language {
                name: Locale(locale.to_owned()),
            },
        }
    }

    #[test]
    fn english_picks_the_first_english_entry() {
        let texts = [
            text("Un vent violent", "fr"),
            text("Whips up a whirlwind", "en"),
            text("Whirlwind again", "en"),
        ];

        assert_eq!(english(&texts), Some("Whips up a whirlwind"));
        assert_eq!(english(&texts[..1]), None);
    }

    #[test]
    fn normalize_collapses_game_line_breaks() {
        assert_eq!(
            normalize("A two-turn attack.\nBlades of wind\u{c}slash\n the foe."),
            "A two-turn attack. Blades of wind slash the foe."
        );
    }
}
