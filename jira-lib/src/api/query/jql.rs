//! JQL construction

use std::fmt;

/// A JQL query assembled from clauses.
///
/// Clauses are joined with ` AND ` in the order they were added, so equal
/// inputs always render the same query text. Escaping for the request URL
/// happens when the search is sent, not here.
///
/// # Example
///
/// ```ignore
/// let jql = Jql::new().project("DEMO").issue_type("Bug");
/// assert_eq!(jql.build(), "project=DEMO AND issueType=Bug");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jql {
    clauses: Vec<String>,
}

impl Jql {
    /// Creates an empty query, which matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query from raw JQL text.
    pub fn raw(query: impl Into<String>) -> Self {
        Self { clauses: vec![query.into()] }
    }

    /// Restricts the query to one project. Empty keys are ignored.
    pub fn project(self, key: impl AsRef<str>) -> Self {
        match key.as_ref() {
            "" => self,
            key => self.clause(format!("project={key}")),
        }
    }

    /// Restricts the query to one issue type. Empty names are ignored.
    pub fn issue_type(self, name: impl AsRef<str>) -> Self {
        match name.as_ref() {
            "" => self,
            name => self.clause(format!("issueType={name}")),
        }
    }

    /// Appends a clause verbatim.
    pub fn clause(mut self, clause: impl Into<String>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders the query text.
    pub fn build(&self) -> String {
        self.clauses.join(" AND ")
    }
}

impl fmt::Display for Jql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<Jql> for String {
    fn from(jql: Jql) -> Self {
        jql.build()
    }
}

impl From<&str> for Jql {
    fn from(query: &str) -> Self {
        Self::raw(query)
    }
}

impl From<String> for Jql {
    fn from(query: String) -> Self {
        Self::raw(query)
    }
}
