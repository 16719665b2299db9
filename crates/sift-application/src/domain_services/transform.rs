//! Result Transformer
//!
//! Applies the default-substitution policy to raw hits. Nothing here can
//! fail: a hit with every field missing still becomes a well-formed result.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use sift_domain::value_objects::{ImageResult, NormalizedResult, RawHit};
use unicode_segmentation::UnicodeSegmentation;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid regex"));

/// Remove every `<tag>`-shaped substring
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Maps [`RawHit`]s to [`NormalizedResult`]s
#[derive(Debug, Clone)]
pub struct ResultTransformer {
    snippet_max_chars: usize,
}

impl ResultTransformer {
    /// Create a transformer with the fallback snippet bound
    pub fn new(snippet_max_chars: usize) -> Self {
        Self { snippet_max_chars }
    }

    /// Transform every hit, preserving engine order
    pub fn transform_all(&self, hits: &[RawHit]) -> Vec<NormalizedResult> {
        hits.iter().map(|hit| self.transform(hit)).collect()
    }

    /// Transform one hit
    ///
    /// Title: highlighted title, else raw title, else URL.
    /// Snippet: joined highlighted content, else a markup-stripped prefix of
    /// the body.
    pub fn transform(&self, hit: &RawHit) -> NormalizedResult {
        let doc = &hit.document;
        let url = non_empty(doc.url.as_deref()).unwrap_or_default().to_string();
        let body = doc
            .content
            .as_deref()
            .map(|content| strip_markup(content).trim().to_string())
            .unwrap_or_default();

        let highlighted_title = hit
            .highlight
            .title
            .iter()
            .find(|fragment| !fragment.trim().is_empty())
            .cloned();
        let body_fragments: Vec<&str> = hit
            .highlight
            .content
            .iter()
            .map(String::as_str)
            .filter(|fragment| !fragment.trim().is_empty())
            .collect();
        let highlighted_body = (!body_fragments.is_empty()).then(|| body_fragments.join(" "));

        let title = highlighted_title
            .clone()
            .or_else(|| non_empty(doc.title.as_deref()).map(str::to_string))
            .unwrap_or_else(|| url.clone());
        let snippet = highlighted_body
            .clone()
            .unwrap_or_else(|| self.truncate(&body));

        let id = if hit.id.is_empty() {
            url.clone()
        } else {
            hit.id.clone()
        };

        NormalizedResult {
            id,
            url,
            title,
            snippet,
            body,
            language: doc.language.clone().unwrap_or_default(),
            updated_at: doc.updated_at,
            tags: distinct(&doc.tags),
            keywords: distinct(&doc.keywords),
            views: doc.views.unwrap_or(0),
            highlighted_title,
            highlighted_body,
            entities: Vec::new(),
            relevance_score: hit.score.filter(|s| s.is_finite()).unwrap_or(0.0),
            composite_score: 0.0,
            sort_values: hit.sort.clone(),
        }
    }

    fn truncate(&self, text: &str) -> String {
        text.graphemes(true)
            .take(self.snippet_max_chars)
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

/// Flatten the images of every hit into image results, in hit order
///
/// `alt` falls back to the page title, then to an empty string. Images
/// without a URL are skipped.
pub fn flatten_images(hits: &[RawHit]) -> Vec<ImageResult> {
    hits.iter()
        .flat_map(|hit| {
            let page_url = hit.document.url.clone().unwrap_or_default();
            let title = non_empty(hit.document.title.as_deref()).map(str::to_string);
            hit.document
                .images
                .iter()
                .filter(|image| !image.url.trim().is_empty())
                .map(move |image| ImageResult {
                    id: format!("{}-{}", hit.id, image.url),
                    image_url: image.url.clone(),
                    page_url: page_url.clone(),
                    alt: non_empty(image.alt.as_deref())
                        .map(str::to_string)
                        .or_else(|| title.clone())
                        .unwrap_or_default(),
                })
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn distinct(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}
