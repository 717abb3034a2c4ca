// src/fetch/mod.rs

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;
use url::Url;

pub mod session;

static GRAPHQL_ENDPOINT: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://leetcode.com/graphql").expect("GraphQL endpoint URL should be valid")
});

static FAVORITE_QUESTION_QUERY: &str = r#"
query favoriteQuestionList(
    $favoriteSlug: String!,
    $sortBy: QuestionSortByInput,
    $version: String = "v2"
) {
    favoriteQuestionList(
        favoriteSlug: $favoriteSlug,
        sortBy: $sortBy
        version: $version
    ) {
        questions {
            title
            titleSlug
            difficulty
        }
    }
}
"#;

/// One problem from a favorite list. Only `title_slug` drives the merge;
/// the rest is descriptive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
}

/// GraphQL envelope. Both `data` and the list inside it are nullable: the
/// API answers 200 with a null list when the session lacks access.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    favorite_question_list: Option<FavoriteQuestionList>,
}

#[derive(Debug, Deserialize)]
struct FavoriteQuestionList {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Fetch every question in `favorite_slug`, in the list's own order,
/// authenticating with the given LEETCODE_SESSION cookie value.
pub async fn fetch_favorite_questions(
    client: &Client,
    favorite_slug: &str,
    session: &str,
) -> Result<Vec<Question>> {
    let body = serde_json::json!({
        "query": FAVORITE_QUESTION_QUERY,
        "variables": {
            "favoriteSlug": favorite_slug,
            "sortBy": { "sortField": "CUSTOM", "sortOrder": "ASCENDING" },
        },
    });

    debug!(slug = favorite_slug, "querying favorite list");
    let response: GraphQlResponse = client
        .post(GRAPHQL_ENDPOINT.clone())
        .header(header::COOKIE, format!("LEETCODE_SESSION={session}"))
        .json(&body)
        .send()
        .await
        .with_context(|| format!("POST {} failed", *GRAPHQL_ENDPOINT))?
        .error_for_status()
        .context("LeetCode returned a non-success status")?
        .json()
        .await
        .context("decoding GraphQL response")?;

    questions_from_response(response, favorite_slug)
}

/// Unwrap the GraphQL envelope, mapping each failure shape to its own
/// error before any question reaches the caller.
fn questions_from_response(
    response: GraphQlResponse,
    favorite_slug: &str,
) -> Result<Vec<Question>> {
    if let Some(errors) = response.errors {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        bail!("GraphQL errors: {}", messages.join("; "));
    }

    response
        .data
        .and_then(|data| data.favorite_question_list)
        .map(|list| list.questions)
        .ok_or_else(|| {
            anyhow!(
                "favorite list `{favorite_slug}` is not accessible; \
                 LeetCode Premium and access to the list are required"
            )
        })
}
