//! Elasticsearch response parsing
//!
//! Field types in a page index drift over time (tags as a string or a
//! list, timestamps as text or epoch millis, `lang` vs `language`). Every
//! document field is read leniently; only a body without a `hits` object is
//! treated as an upstream error.

use serde_json::Value;
use sift_domain::error::{Error, Result};
use sift_domain::value_objects::{EngineResponse, Highlight, RawDocument, RawHit, RawImage};

use crate::utils::JsonExt;

/// Parse a `_search` response body
pub fn parse_search_response(body: &Value) -> Result<EngineResponse> {
    let hits = body
        .get("hits")
        .filter(|hits| hits.is_object())
        .ok_or_else(|| Error::upstream("malformed search response: missing hits"))?;

    let parsed: Vec<RawHit> = hits
        .get("hits")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(parse_hit).collect())
        .unwrap_or_default();

    Ok(EngineResponse {
        total: parse_total(hits).unwrap_or(parsed.len() as u64),
        hits: parsed,
    })
}

/// `hits.total` is a number on old clusters and `{ "value": n }` on new ones
fn parse_total(hits: &Value) -> Option<u64> {
    match hits.get("total")? {
        Value::Number(n) => n.as_u64(),
        total @ Value::Object(_) => total.opt_u64_lenient("value"),
        _ => None,
    }
}

fn parse_hit(hit: &Value) -> RawHit {
    let source = hit.get("_source").unwrap_or(&Value::Null);
    let highlight = hit.get("highlight").unwrap_or(&Value::Null);

    RawHit {
        id: hit.opt_string("_id").unwrap_or_default(),
        score: hit.opt_f64("_score"),
        document: parse_document(source),
        highlight: Highlight {
            title: highlight.string_list("title"),
            content: highlight.string_list("content"),
        },
        sort: hit
            .get("sort")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    }
}

fn parse_document(source: &Value) -> RawDocument {
    let keywords = match source.string_list("meta_keywords") {
        keywords if keywords.is_empty() => source.string_list("keywords"),
        keywords => keywords,
    };

    RawDocument {
        url: source.opt_string("url"),
        title: source.opt_string("title"),
        content: source.opt_string("content"),
        language: source.first_string(&["lang", "language"]),
        updated_at: source
            .opt_timestamp("crawl_time")
            .or_else(|| source.opt_timestamp("updated_at")),
        tags: source.string_list("tags"),
        keywords,
        views: source.opt_u64_lenient("views"),
        images: source
            .get("images")
            .and_then(Value::as_array)
            .map(|images| images.iter().filter_map(parse_image).collect())
            .unwrap_or_default(),
    }
}

fn parse_image(image: &Value) -> Option<RawImage> {
    Some(RawImage {
        url: image.opt_string("url")?,
        alt: image.opt_string("alt"),
        width: image
            .opt_u64_lenient("width")
            .and_then(|w| u32::try_from(w).ok()),
        height: image
            .opt_u64_lenient("height")
            .and_then(|h| u32::try_from(h).ok()),
    })
}
