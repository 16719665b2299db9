//! Heuristic Entity Extractor
//!
//! Classifies numbers and capitalized spans with a handful of surface rules.
//! Deterministic: the same text always yields the same entities in order of
//! first appearance.
//!
//! | Rule | Type |
//! |------|------|
//! | digits, optionally with separators or `%` | `Number` |
//! | acronym, or span ending in a legal/institution suffix | `Organization` |
//! | known place name, or span after `in` / `aus` / `from` | `Place` |
//! | span after an honorific, or two or more capitalized words | `Person` |
//! | any other capitalized word not opening a sentence | `Other` |

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use sift_application::ports::registry::{
    ENTITY_EXTRACTORS, EntityExtractorConfig, EntityExtractorEntry,
};
use sift_domain::ports::providers::EntityExtractor;
use sift_domain::value_objects::{Entity, EntityType};

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*%?").expect("Invalid regex"));

static CAPITALIZED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{Lu}[\p{L}\p{N}&'-]*(?:[ \t]+\p{Lu}[\p{L}\p{N}&'-]*)*").expect("Invalid regex")
});

const ORGANIZATION_SUFFIXES: &[&str] = &[
    "gmbh", "ag", "kg", "se", "inc", "ltd", "llc", "corp", "co", "university", "universität",
    "institut", "institute", "foundation", "stiftung",
];

const PLACES: &[&str] = &[
    "berlin", "hamburg", "münchen", "munich", "köln", "cologne", "frankfurt", "stuttgart",
    "wien", "vienna", "zürich", "zurich", "deutschland", "germany", "österreich", "austria",
    "schweiz", "switzerland", "europa", "europe", "london", "paris", "new york", "usa",
];

const PLACE_PREPOSITIONS: &[&str] = &["in", "aus", "from"];

const HONORIFICS: &[&str] = &[
    "dr", "dr.", "prof", "prof.", "herr", "frau", "mr", "mr.", "mrs", "mrs.", "ms", "ms.",
];

/// Rule-based entity extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEntityExtractor;

impl HeuristicEntityExtractor {
    /// Create a new heuristic extractor
    pub fn new() -> Self {
        Self
    }

    fn classify(text: &str, span: &str, start: usize) -> Option<EntityType> {
        let lowered = span.to_lowercase();
        if HONORIFICS.contains(&lowered.as_str()) {
            return None;
        }

        let words: Vec<&str> = lowered.split_whitespace().collect();
        let previous = previous_word(text, start);
        let previous = previous.as_deref();

        let has_org_suffix = words.len() > 1
            && words
                .last()
                .is_some_and(|last| ORGANIZATION_SUFFIXES.contains(last));
        if is_acronym(span) || has_org_suffix {
            return Some(EntityType::Organization);
        }
        if PLACES.contains(&lowered.as_str())
            || previous.is_some_and(|word| PLACE_PREPOSITIONS.contains(&word))
        {
            return Some(EntityType::Place);
        }
        if previous.is_some_and(|word| HONORIFICS.contains(&word)) || words.len() > 1 {
            return Some(EntityType::Person);
        }
        if opens_sentence(text, start) {
            return None;
        }
        Some(EntityType::Other)
    }
}

impl EntityExtractor for HeuristicEntityExtractor {
    fn extract(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<(usize, Entity)> = Vec::new();

        for m in NUMBER.find_iter(text) {
            found.push((m.start(), Entity::new(m.as_str(), EntityType::Number)));
        }
        for m in CAPITALIZED_SPAN.find_iter(text) {
            let (start, span) = drop_sentence_opener(text, m.start(), m.as_str());
            let span = span.trim_end_matches(['-', '\'']);
            if let Some(entity_type) = Self::classify(text, span, start) {
                found.push((start, Entity::new(span, entity_type)));
            }
        }

        found.sort_by_key(|(start, _)| *start);
        let mut seen = HashSet::new();
        found
            .into_iter()
            .map(|(_, entity)| entity)
            .filter(|entity| seen.insert(entity.clone()))
            .collect()
    }

    fn provider_name(&self) -> &str {
        "heuristic"
    }
}

fn is_acronym(span: &str) -> bool {
    let letters: Vec<char> = span.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2
        && !span.contains(char::is_whitespace)
        && letters.iter().all(|c| c.is_uppercase())
}

fn previous_word(text: &str, start: usize) -> Option<String> {
    text[..start]
        .split_whitespace()
        .next_back()
        .map(str::to_lowercase)
}

/// A multi-word span at the start of a sentence loses its first word,
/// which is capitalized by position rather than by being a name
fn drop_sentence_opener<'a>(text: &str, start: usize, span: &'a str) -> (usize, &'a str) {
    if !opens_sentence(text, start) || PLACES.contains(&span.to_lowercase().as_str()) {
        return (start, span);
    }
    match span.split_once(char::is_whitespace) {
        Some((first, rest)) => {
            let rest_trimmed = rest.trim_start();
            let offset = first.len() + (rest.len() - rest_trimmed.len()) + 1;
            (start + offset, rest_trimmed)
        }
        None => (start, span),
    }
}

fn opens_sentence(text: &str, start: usize) -> bool {
    text[..start]
        .trim_end()
        .chars()
        .next_back()
        .is_none_or(|c| matches!(c, '.' | '!' | '?' | ':' | '"' | '„' | '('))
}

fn heuristic_factory(
    _config: &EntityExtractorConfig,
) -> std::result::Result<Arc<dyn EntityExtractor>, String> {
    Ok(Arc::new(HeuristicEntityExtractor::new()))
}

#[linkme::distributed_slice(ENTITY_EXTRACTORS)]
static HEURISTIC_EXTRACTOR: EntityExtractorEntry = EntityExtractorEntry {
    name: "heuristic",
    description: "Rule-based person/place/organization/number extraction",
    factory: heuristic_factory,
};
