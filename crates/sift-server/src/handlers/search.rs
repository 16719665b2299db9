//! `GET /search`
//!
//! Translates query parameters into [`SearchParams`] and the service result
//! into an HTTP status. Validation problems never produce an error status:
//! short queries and unknown search types answer 200 with an empty envelope.
//! Engine failures answer 500 with an empty envelope and an error marker.

use std::convert::Infallible;

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::serde::json::Json;
use rocket::{FromForm, State, get};
use sift_domain::value_objects::{SearchEnvelope, SearchParams, SearchResponse};
use tracing::error;

use crate::constants::{HEADER_ACCEPT_LANGUAGE, SEARCH_FAILED_MESSAGE};
use crate::state::ServerState;

/// Raw query string of a search request
///
/// Everything is captured as text so that malformed numbers fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, FromForm)]
pub struct SearchQuery {
    /// Query text
    pub q: Option<String>,
    /// Zero-based page number
    pub page: Option<String>,
    /// Page size
    pub size: Option<String>,
    /// Language hint
    pub lang: Option<String>,
    /// Continuation cursor
    pub cursor: Option<String>,
    /// `web` or `image`
    #[field(name = "type")]
    pub kind: Option<String>,
}

impl SearchQuery {
    /// Combine with the `Accept-Language` header into service params
    pub fn into_params(self, accept_language: Option<String>) -> SearchParams {
        SearchParams {
            query: self.q,
            page: parse_number(self.page.as_deref()),
            size: parse_number(self.size.as_deref()),
            lang: self.lang,
            cursor: self.cursor,
            kind: self.kind,
            accept_language,
        }
    }
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Request guard exposing the `Accept-Language` header, if any
#[derive(Debug, Clone, Default)]
pub struct AcceptLanguage(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AcceptLanguage {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let value = request
            .headers()
            .get_one(HEADER_ACCEPT_LANGUAGE)
            .map(str::to_string);
        Outcome::Success(Self(value))
    }
}

/// Run a search
#[get("/search?<query..>")]
pub async fn search(
    state: &State<ServerState>,
    query: SearchQuery,
    accept_language: AcceptLanguage,
) -> (Status, Json<SearchEnvelope>) {
    let params = query.into_params(accept_language.0);

    match state.search.search(params).await {
        Ok(envelope) => (Status::Ok, Json(envelope)),
        Err(e) => {
            error!(
                engine = %state.search.engine_name(),
                error = %e,
                "Search request failed"
            );
            (
                Status::InternalServerError,
                Json(SearchResponse::failure(SEARCH_FAILED_MESSAGE).into()),
            )
        }
    }
}
