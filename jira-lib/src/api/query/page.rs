//! Search result pages

use serde::Deserialize;

use crate::error::Error;
use crate::model::FieldSet;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::JiraClient;

/// One page of search results, as reported by the server.
///
/// `total` is the size of the full result set at the time the page was
/// produced; it can drift while a result set is being paged through.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase", bound(deserialize = "F: FieldSet"))]
pub struct SearchPage<F: FieldSet = IssueFields> {
    pub issues: Vec<Issue<F>>,
    pub start_at: usize,
    pub max_results: usize,
    pub total: usize,
}

impl<F: FieldSet> SearchPage<F> {
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl<F: FieldSet> Default for SearchPage<F> {
    fn default() -> Self {
        Self { issues: Vec::new(), start_at: 0, max_results: 0, total: 0 }
    }
}

impl JiraClient {
    /// Fetches one page of search results.
    ///
    /// `fields` restricts what the server includes under each issue's
    /// `fields` object; `None` returns the server's default selection.
    /// Issue links come back normalized, with the owning issue filled in
    /// as the omitted endpoint.
    pub async fn search_page<F: FieldSet>(
        &self,
        jql: &str,
        start_at: usize,
        max_results: usize,
        fields: Option<&[String]>,
    ) -> Result<SearchPage<F>, Error> {
        let mut path = format!(
            "search?jql={}&startAt={start_at}&maxResults={max_results}",
            urlencoding::encode(jql)
        );
        if let Some(fields) = fields {
            path.push_str("&fields=");
            path.push_str(&fields.join(","));
        }

        let mut page: SearchPage<F> = self.get_decoded(&path).await?;
        for issue in &mut page.issues {
            issue.normalize_links()?;
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_shape() {
        let json = r#"{
            "expand": "schema,names",
            "startAt": 4,
            "maxResults": 2,
            "total": 5,
            "issues": [{ "id": "10004", "key": "DEMO-5", "fields": { "summary": "last one" } }]
        }"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.start_at, 4);
        assert_eq!(page.max_results, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.len(), 1);
        assert_eq!(page.issues[0].fields.summary.as_deref(), Some("last one"));
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let page: SearchPage = serde_json::from_str(r#"{"issues": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}
