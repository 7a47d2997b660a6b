//! Library listing of text collections

use crate::content::GITA_TEXT_ID;
use serde::{Deserialize, Serialize};

/// A text collection shown in the library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub chapters: u32,
    pub verses: u32,
    pub languages: Vec<String>,
    pub translators: Vec<String>,
    pub themes: Vec<String>,
    pub featured: bool,
    pub available: bool,
    /// Reader location for available texts
    pub read_location: Option<String>,
}

impl TextEntry {
    /// Case-insensitive match on title, description or any theme
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .themes
                .iter()
                .any(|t| t.to_lowercase().contains(&query))
    }

    /// Theme filter; "all" matches everything
    pub fn matches_theme(&self, theme: &str) -> bool {
        if theme.eq_ignore_ascii_case("all") {
            return true;
        }
        let theme = theme.to_lowercase();
        self.themes
            .iter()
            .any(|t| t.to_lowercase().contains(&theme))
    }
}

/// The set of texts offered for reading
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub texts: Vec<TextEntry>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Library {
    /// The built-in listing; only the Gita is readable
    pub fn builtin() -> Self {
        Self {
            texts: vec![
                TextEntry {
                    id: "bhagavad-gita".to_string(),
                    title: "Bhagavad Gita".to_string(),
                    subtitle: "The Song of God".to_string(),
                    description: "The eternal dialogue between Prince Arjuna and Lord Krishna on the battlefield of Kurukshetra, revealing profound truths about life, duty, and spirituality.".to_string(),
                    chapters: 18,
                    verses: 700,
                    languages: strings(&["Sanskrit", "English", "Hindi"]),
                    translators: strings(&[
                        "Paramahansa Yogananda",
                        "Eknath Easwaran",
                        "Barbara Stoler Miller",
                    ]),
                    themes: strings(&["Dharma", "Karma Yoga", "Bhakti", "Self-realization"]),
                    featured: true,
                    available: true,
                    read_location: Some(format!("/read/{}/1/1", GITA_TEXT_ID)),
                },
                TextEntry {
                    id: "upanishads".to_string(),
                    title: "Principal Upanishads".to_string(),
                    subtitle: "The Philosophical Foundations".to_string(),
                    description: "Ancient philosophical texts that form the theoretical basis for Hinduism, exploring the nature of reality and consciousness.".to_string(),
                    chapters: 108,
                    verses: 2000,
                    languages: strings(&["Sanskrit", "English"]),
                    translators: strings(&["Patrick Olivelle", "Swami Nikhilananda"]),
                    themes: strings(&["Brahman", "Atman", "Meditation", "Wisdom"]),
                    featured: false,
                    available: false,
                    read_location: None,
                },
                TextEntry {
                    id: "yoga-sutras".to_string(),
                    title: "Yoga Sutras of Patanjali".to_string(),
                    subtitle: "The Science of Yoga".to_string(),
                    description: "The foundational text of classical yoga philosophy, presenting the eight-limbed path to spiritual realization.".to_string(),
                    chapters: 4,
                    verses: 196,
                    languages: strings(&["Sanskrit", "English"]),
                    translators: strings(&["Swami Satchidananda", "Georg Feuerstein"]),
                    themes: strings(&["Eight Limbs", "Samadhi", "Concentration", "Ethics"]),
                    featured: false,
                    available: false,
                    read_location: None,
                },
            ],
        }
    }

    /// Texts matching an optional search query and theme, in listing order
    pub fn filter<'a>(
        &'a self,
        search: Option<&'a str>,
        theme: Option<&'a str>,
    ) -> impl Iterator<Item = &'a TextEntry> + 'a {
        self.texts.iter().filter(move |entry| {
            search.map_or(true, |q| entry.matches_search(q))
                && theme.map_or(true, |t| entry.matches_theme(t))
        })
    }

    /// Look up a text by id
    pub fn get(&self, id: &str) -> Option<&TextEntry> {
        self.texts.iter().find(|t| t.id == id)
    }
}
