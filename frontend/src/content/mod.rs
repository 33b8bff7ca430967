//! Bilingual page copy and the active-language state.
//!
//! Copy lives in one typed [`PageContent`] instance per language. The store
//! also keeps a flattened, dot-separated view of each tree
//! (`"benefits.items.0.title"`) for keyed lookups and for checking that both
//! languages carry the same keys.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

mod english;
mod hebrew;
pub mod schema;

pub use schema::PageContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::He, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::He => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("no content tree registered for language '{language}'")]
    Configuration { language: Language },
    #[error("content key '{key}' is missing for language '{language}'")]
    MissingContent { language: Language, key: String },
    #[error("content key '{key}' is empty for language '{language}'")]
    EmptyContent { language: Language, key: String },
    #[error("content tree for '{language}' could not be flattened: {message}")]
    Malformed { language: Language, message: String },
}

struct RegisteredTree {
    tree: &'static PageContent,
    flat: BTreeMap<String, String>,
}

#[derive(Default)]
pub struct ContentStore {
    trees: HashMap<Language, RegisteredTree>,
}

static STORE: Lazy<ContentStore> = Lazy::new(ContentStore::bundled);

/// The store holding the page's built-in Hebrew and English copy.
pub fn store() -> &'static ContentStore {
    &STORE
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers both shipped languages. A tree that cannot be registered is
    /// logged and left out, so lookups for it report `Configuration`.
    pub fn bundled() -> Self {
        let mut store = Self::new();
        for language in Language::ALL {
            if let Err(err) = store.register(language, bundled_tree(language)) {
                log::error!("{}", err);
            }
        }
        store
    }

    pub fn register(
        &mut self,
        language: Language,
        tree: &'static PageContent,
    ) -> Result<(), ContentError> {
        let value = serde_json::to_value(tree).map_err(|err| ContentError::Malformed {
            language,
            message: err.to_string(),
        })?;
        let mut flat = BTreeMap::new();
        flatten_into(&mut flat, String::new(), &value);
        self.trees.insert(language, RegisteredTree { tree, flat });
        Ok(())
    }

    pub fn get_tree(&self, language: Language) -> Result<&'static PageContent, ContentError> {
        self.trees
            .get(&language)
            .map(|registered| registered.tree)
            .ok_or(ContentError::Configuration { language })
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self.trees.keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn keys(&self, language: Language) -> Result<Vec<&str>, ContentError> {
        let registered = self.registered(language)?;
        Ok(registered.flat.keys().map(String::as_str).collect())
    }

    /// Looks up one string by its dotted path.
    pub fn text(&self, language: Language, key: &str) -> Result<&str, ContentError> {
        self.registered(language)?
            .flat
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContentError::MissingContent {
                language,
                key: key.to_string(),
            })
    }

    /// Like [`ContentStore::text`], but a missing string renders as nothing
    /// instead of failing the section.
    pub fn text_or_empty(&self, language: Language, key: &str) -> &str {
        match self.text(language, key) {
            Ok(text) => text,
            Err(err) => {
                if cfg!(debug_assertions) {
                    log::warn!("{}", err);
                }
                ""
            }
        }
    }

    /// Checks that every registered language has exactly the same keys and
    /// that none of them is empty.
    pub fn validate(&self) -> Result<(), ContentError> {
        let languages = self.languages();
        for &language in &languages {
            let registered = self.registered(language)?;
            for (key, value) in &registered.flat {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyContent {
                        language,
                        key: key.clone(),
                    });
                }
                for &other in languages.iter().filter(|other| **other != language) {
                    if !self.registered(other)?.flat.contains_key(key) {
                        return Err(ContentError::MissingContent {
                            language: other,
                            key: key.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn registered(&self, language: Language) -> Result<&RegisteredTree, ContentError> {
        self.trees
            .get(&language)
            .ok_or(ContentError::Configuration { language })
    }
}

fn bundled_tree(language: Language) -> &'static PageContent {
    match language {
        Language::He => &hebrew::CONTENT,
        Language::En => &english::CONTENT,
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, child_key(&prefix, key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, child_key(&prefix, &index.to_string()), child);
            }
        }
        Value::String(text) => {
            out.insert(prefix, text.clone());
        }
        Value::Null => {
            out.insert(prefix, String::new());
        }
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

fn child_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Active language plus the text direction derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    active: Language,
    direction: TextDirection,
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageState {
    pub fn new(active: Language) -> Self {
        Self {
            active,
            direction: active.direction(),
        }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn toggle(&self) -> Self {
        Self::new(self.active.toggled())
    }
}

pub enum LanguageAction {
    Toggle,
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LanguageAction::Toggle => Rc::new(self.toggle()),
        }
    }
}

pub type LanguageContext = UseReducerHandle<LanguageState>;
