//! Display strings in Spanish and English.
//!
//! The localizer only turns message keys and notices into text. It has no
//! say in game logic. Hosts can override individual entries, for example to
//! ship a regional variant, without replacing the whole catalog.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::Notice;

/// Display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Parse an ISO 639-1 code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Spanish),
            "en" => Some(Language::English),
            _ => None,
        }
    }
}

/// Catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    Title,
    Subtitle,
    MobileTitle,
    Instruction,
    /// Label under the honey jar.
    Drops,
    /// Label on the start cell.
    Start,
    /// Shown when the bee bumps the grid edge.
    Wall,
    /// Prefix of the early-flower message; progress is appended.
    NeedHoney,
    WonTitle,
    WonDescription,
    PlayAgain,
    /// Shown while a background is being requested.
    Painting,
}

impl MessageKey {
    pub const ALL: [MessageKey; 12] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::MobileTitle,
        MessageKey::Instruction,
        MessageKey::Drops,
        MessageKey::Start,
        MessageKey::Wall,
        MessageKey::NeedHoney,
        MessageKey::WonTitle,
        MessageKey::WonDescription,
        MessageKey::PlayAgain,
        MessageKey::Painting,
    ];
}

fn builtin(language: Language, key: MessageKey) -> &'static str {
    use MessageKey::*;
    match language {
        Language::Spanish => match key {
            Title => "¡Abejita",
            Subtitle => "Exploradora!",
            MobileTitle => "Abejita Exploradora",
            Instruction => "Lleva a la abeja por la miel hasta la flor",
            Drops => "Gotas",
            Start => "Inicio",
            Wall => "¡Ups! Hay una pared",
            NeedHoney => "¡Necesitas más miel!",
            WonTitle => "¡Lo lograste!",
            WonDescription => "La abeja recogió toda la miel y llegó a la flor.",
            PlayAgain => "Jugar otra vez",
            Painting => "Pintando el mapa...",
        },
        Language::English => match key {
            Title => "Explorer",
            Subtitle => "Bee!",
            MobileTitle => "Explorer Bee",
            Instruction => "Guide the bee through the honey to the flower",
            Drops => "Drops",
            Start => "Start",
            Wall => "Oops! There's a wall",
            NeedHoney => "You need more honey!",
            WonTitle => "You did it!",
            WonDescription => "The bee collected all the honey and reached the flower.",
            PlayAgain => "Play again",
            Painting => "Painting the map...",
        },
    }
}

/// Turns message keys and notices into display strings.
#[derive(Clone, Debug, Default)]
pub struct Localizer {
    language: Language,
    overrides: FxHashMap<(Language, MessageKey), String>,
}

impl Localizer {
    /// Create a localizer for a language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            overrides: FxHashMap::default(),
        }
    }

    /// Replace one catalog entry.
    #[must_use]
    pub fn with_override(
        mut self,
        language: Language,
        key: MessageKey,
        text: impl Into<String>,
    ) -> Self {
        self.overrides.insert((language, key), text.into());
        self
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch to the other language and return it.
    pub fn toggle(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Text for a key in the current language.
    #[must_use]
    pub fn text(&self, key: MessageKey) -> &str {
        match self.overrides.get(&(self.language, key)) {
            Some(text) => text,
            None => builtin(self.language, key),
        }
    }

    /// Render an advisory notice.
    ///
    /// The early-flower message carries progress as `(collected / total)`.
    #[must_use]
    pub fn notice(&self, notice: &Notice) -> String {
        match notice {
            Notice::Boundary => self.text(MessageKey::Wall).to_string(),
            Notice::NeedMoreHoney { collected, total } => {
                format!("{} ({} / {})", self.text(MessageKey::NeedHoney), collected, total)
            }
        }
    }
}
