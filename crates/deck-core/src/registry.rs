//! Section registry: the fixed, ordered set of slides

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::content::{CodeSample, ContentNode};
use crate::error::{DeckError, Result};

/// Identifier of a section, drawn from the registry's own key set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionKey(&'static str);

impl SectionKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

// Hash must agree with `str` so lookups by `&str` work through `Borrow`.
impl Hash for SectionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Borrow<str> for SectionKey {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One top-level slide
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub title: String,
    pub content: Vec<ContentNode>,
}

impl Section {
    /// The code sample this section embeds, if any
    pub fn code_sample(&self) -> Option<&CodeSample> {
        self.content
            .iter()
            .flat_map(|node| node.code_samples())
            .next()
    }
}

/// Fixed mapping from section key to section, in insertion order
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: IndexMap<SectionKey, Section>,
    first: SectionKey,
}

impl SectionRegistry {
    pub fn builder() -> SectionRegistryBuilder {
        SectionRegistryBuilder::default()
    }

    /// Look up a section by key
    pub fn get(&self, key: &str) -> Result<&Section> {
        self.sections
            .get(key)
            .ok_or_else(|| DeckError::NotFound(key.to_string()))
    }

    /// Keys in insertion order, which is also navigation order
    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.keys().copied()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Map a raw key onto the registry's own key, if present
    pub fn resolve(&self, key: &str) -> Option<SectionKey> {
        self.sections.get_key_value(key).map(|(k, _)| *k)
    }

    pub fn first_key(&self) -> SectionKey {
        self.first
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.sections.get_index_of(key)
    }

    pub fn key_at(&self, index: usize) -> Option<SectionKey> {
        self.sections.get_index(index).map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a built registry; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Collects sections and validates them into a [`SectionRegistry`]
#[derive(Debug, Default)]
pub struct SectionRegistryBuilder {
    sections: Vec<Section>,
}

impl SectionRegistryBuilder {
    pub fn section(
        mut self,
        key: &'static str,
        title: impl Into<String>,
        content: Vec<ContentNode>,
    ) -> Self {
        self.sections.push(Section {
            key: SectionKey::new(key),
            title: title.into(),
            content,
        });
        self
    }

    pub fn build(self) -> Result<SectionRegistry> {
        let first = self
            .sections
            .first()
            .map(|section| section.key)
            .ok_or(DeckError::EmptyRegistry)?;

        let mut sections = IndexMap::with_capacity(self.sections.len());
        for section in self.sections {
            let samples = section
                .content
                .iter()
                .map(|node| node.code_samples().len())
                .sum::<usize>();
            if samples > 1 {
                return Err(DeckError::MultipleCodeSamples(section.key.to_string()));
            }

            let key = section.key;
            if sections.insert(key, section).is_some() {
                return Err(DeckError::DuplicateKey(key.to_string()));
            }
        }

        tracing::debug!("Built section registry with {} sections", sections.len());

        Ok(SectionRegistry { sections, first })
    }
}

/// Static header and footer text around the slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckChrome {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub footer: String,
}

/// A complete deck: chrome plus its section registry
#[derive(Debug, Clone)]
pub struct Presentation {
    pub chrome: DeckChrome,
    pub sections: SectionRegistry,
}
