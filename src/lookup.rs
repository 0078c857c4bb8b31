//! Crossref works-search lookup and candidate selection.

use crate::client::CrossrefClient;
use crate::error::{BackfillError, Result};
use crate::similarity::title_similarity;
use serde::Deserialize;

/// Minimum similarity between the query title and a candidate's title for the
/// candidate to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.55;

/// Number of candidate results requested per query.
const SEARCH_ROWS: u32 = 5;

/// Crossref works-search response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct WorksResponse {
    #[serde(default)]
    pub message: WorksMessage,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorksMessage {
    #[serde(default)]
    pub items: Vec<Work>,
}

/// A single candidate work from a Crossref response.
#[derive(Debug, Deserialize)]
pub(crate) struct Work {
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
}

impl Work {
    /// First listed title, or empty when Crossref supplied none.
    fn primary_title(&self) -> &str {
        self.title.first().map(String::as_str).unwrap_or("")
    }
}

/// Parse a Crossref works-search JSON response into its candidate list.
pub(crate) fn parse_works_response(json: &str) -> Result<Vec<Work>> {
    let response: WorksResponse = serde_json::from_str(json)
        .map_err(|e| BackfillError::Parse(format!("Invalid Crossref JSON: {}", e)))?;
    Ok(response.message.items)
}

/// Pick the best-scoring candidate against the query title.
///
/// Strict `>` comparison keeps the first-seen candidate on ties, so Crossref's
/// own relevance ordering breaks them. Returns `None` when the best score is
/// below [`SIMILARITY_THRESHOLD`].
pub(crate) fn select_best(query_title: &str, works: Vec<Work>) -> Option<Work> {
    let mut best: Option<Work> = None;
    let mut best_score = 0.0;

    for work in works {
        let score = title_similarity(query_title, work.primary_title());
        if score > best_score {
            best_score = score;
            best = Some(work);
        }
    }

    if best_score >= SIMILARITY_THRESHOLD {
        best
    } else {
        None
    }
}

/// Build the works-search query parameters for a lookup.
///
/// Always `query.title` and `rows`; `query.author` only for a non-empty
/// surname, and a closed `from-pub-date`/`until-pub-date` filter spanning the
/// calendar year when one is known.
pub(crate) fn build_params(
    title: &str,
    author_last: &str,
    year: Option<i64>,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("query.title".to_string(), title.to_string()),
        ("rows".to_string(), SEARCH_ROWS.to_string()),
    ];
    if !author_last.is_empty() {
        params.push(("query.author".to_string(), author_last.to_string()));
    }
    if let Some(y) = year {
        params.push((
            "filter".to_string(),
            format!("from-pub-date:{y}-01-01,until-pub-date:{y}-12-31"),
        ));
    }
    params
}

/// Resolves a parsed citation to a DOI.
///
/// The driver is generic over this seam so tests can substitute a mock for
/// the live Crossref client.
#[allow(async_fn_in_trait)]
pub trait DoiResolver {
    /// Resolve `(title, author surname, year)` to a DOI.
    ///
    /// `Ok(None)` means the lookup completed but nothing matched; `Err` means
    /// the lookup itself failed (network, HTTP status, malformed response).
    async fn resolve(
        &self,
        title: &str,
        author_last: &str,
        year: Option<i64>,
    ) -> Result<Option<String>>;
}

impl CrossrefClient {
    /// Look up the DOI for a title, optionally narrowed by first-author
    /// surname and publication year.
    ///
    /// Issues exactly one GET against `/works`; an empty title short-circuits
    /// to `Ok(None)` without touching the network. Transport and HTTP-status
    /// errors propagate to the caller.
    pub async fn lookup_doi(
        &self,
        title: &str,
        author_last: &str,
        year: Option<i64>,
    ) -> Result<Option<String>> {
        if title.is_empty() {
            return Ok(None);
        }

        let params = build_params(title, author_last, year);
        let params: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let body = self.get("/works", &params).await?;
        let works = parse_works_response(&body)?;
        Ok(select_best(title, works).and_then(|work| work.doi))
    }
}

impl DoiResolver for CrossrefClient {
    async fn resolve(
        &self,
        title: &str,
        author_last: &str,
        year: Option<i64>,
    ) -> Result<Option<String>> {
        self.lookup_doi(title, author_last, year).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "status": "ok",
        "message-type": "work-list",
        "message": {
            "items": [
                {
                    "DOI": "10.1000/first",
                    "title": ["Quantum Dynamics of Water"],
                    "container-title": ["Nature"]
                },
                {
                    "DOI": "10.1000/second",
                    "title": ["Classical Dynamics of Ice"]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_works_response() {
        let works = parse_works_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(works.len(), 2);
        assert_eq!(works[0].doi.as_deref(), Some("10.1000/first"));
        assert_eq!(works[0].primary_title(), "Quantum Dynamics of Water");
    }

    #[test]
    fn test_parse_missing_message() {
        let works = parse_works_response(r#"{"status": "ok"}"#).unwrap();
        assert!(works.is_empty());
    }

    #[test]
    fn test_parse_missing_items() {
        let works = parse_works_response(r#"{"message": {"total-results": 0}}"#).unwrap();
        assert!(works.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_works_response("not json").unwrap_err();
        assert!(matches!(err, BackfillError::Parse(_)));
    }

    #[test]
    fn test_work_without_title_scores_zero() {
        let work: Work = serde_json::from_str(r#"{"DOI": "10.1/x"}"#).unwrap();
        assert_eq!(work.primary_title(), "");
    }

    #[test]
    fn test_select_best_picks_highest_score() {
        let works = parse_works_response(SAMPLE_RESPONSE).unwrap();
        let best = select_best("Quantum Dynamics of Water", works).unwrap();
        assert_eq!(best.doi.as_deref(), Some("10.1000/first"));
    }

    #[test]
    fn test_select_best_rejects_below_threshold() {
        let works = parse_works_response(SAMPLE_RESPONSE).unwrap();
        assert!(select_best("Completely Unrelated Topic", works).is_none());
    }

    #[test]
    fn test_select_best_ties_keep_first_seen() {
        let works: Vec<Work> = serde_json::from_str(
            r#"[
                {"DOI": "10.1/a", "title": ["Water Dynamics"]},
                {"DOI": "10.1/b", "title": ["Dynamics Water"]}
            ]"#,
        )
        .unwrap();
        let best = select_best("Water Dynamics", works).unwrap();
        assert_eq!(best.doi.as_deref(), Some("10.1/a"));
    }

    #[test]
    fn test_select_best_empty_list() {
        assert!(select_best("Anything", Vec::new()).is_none());
    }

    #[test]
    fn test_build_params_full() {
        let params = build_params("Quantum Dynamics of Water", "Doe", Some(2021));
        assert_eq!(
            params,
            vec![
                ("query.title".to_string(), "Quantum Dynamics of Water".to_string()),
                ("rows".to_string(), "5".to_string()),
                ("query.author".to_string(), "Doe".to_string()),
                (
                    "filter".to_string(),
                    "from-pub-date:2021-01-01,until-pub-date:2021-12-31".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_build_params_without_author() {
        let params = build_params("Some Title", "", Some(1999));
        assert!(params.iter().all(|(k, _)| k != "query.author"));
        assert_eq!(
            params.iter().find(|(k, _)| k == "filter").map(|(_, v)| v.as_str()),
            Some("from-pub-date:1999-01-01,until-pub-date:1999-12-31")
        );
    }

    #[test]
    fn test_build_params_without_year() {
        let params = build_params("Some Title", "Doe", None);
        assert!(params.iter().all(|(k, _)| k != "filter"));
        assert_eq!(
            params,
            vec![
                ("query.title".to_string(), "Some Title".to_string()),
                ("rows".to_string(), "5".to_string()),
                ("query.author".to_string(), "Doe".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_lookup_empty_title_skips_network() {
        // Base URL points nowhere; the empty-title short circuit must return
        // before any request is attempted.
        let client = CrossrefClient::new().with_base_url("http://127.0.0.1:0");
        let doi = client.lookup_doi("", "Smith", Some(2020)).await.unwrap();
        assert!(doi.is_none());
    }
}
