use serde::Deserialize;

/// Query string of `GET /api/news/search`.
///
/// The browser client also sends `sort` and `page`; they are accepted and
/// ignored.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}
