//! Search entry points

use std::marker::PhantomData;

use futures::Stream;

use crate::error::Error;
use crate::model::FieldSet;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::JiraClient;

use super::jql::Jql;
use super::page::SearchPage;
use super::pages::IssuePages;

/// A search under construction.
///
/// Created by [`JiraClient::search`]; holds the query plus paging options.
/// Finish with [`pages`](Self::pages) to pull page by page,
/// [`stream`](Self::stream) for a flat issue stream, [`all`](Self::all) to
/// drain every match into memory, or [`first_page`](Self::first_page) for
/// a single fetch.
pub struct SearchBuilder<'a, F: FieldSet = IssueFields> {
    client: &'a JiraClient,
    jql: String,
    start_at: usize,
    page_size: usize,
    fields: Option<Vec<String>>,
    _fields: PhantomData<F>,
}

impl JiraClient {
    /// Starts a search over the standard issue fields.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let open_bugs = client
    ///     .search(Jql::new().project("DEMO").issue_type("Bug"))
    ///     .all()
    ///     .await?;
    /// ```
    pub fn search(&self, jql: impl Into<Jql>) -> SearchBuilder<'_, IssueFields> {
        self.search_as(jql)
    }

    /// Starts a search decoding issues into a caller-chosen field set.
    pub fn search_as<F: FieldSet>(&self, jql: impl Into<Jql>) -> SearchBuilder<'_, F> {
        SearchBuilder {
            client: self,
            jql: jql.into().build(),
            start_at: 0,
            page_size: self.default_page_size(),
            fields: None,
            _fields: PhantomData,
        }
    }
}

impl<'a, F: FieldSet> SearchBuilder<'a, F> {
    /// Sets the offset of the first result. Defaults to 0.
    pub fn start_at(mut self, start_at: usize) -> Self {
        self.start_at = start_at;
        self
    }

    /// Sets how many results each page requests.
    ///
    /// Defaults to the client's page size; values below 1 are raised to 1.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Restricts which fields the server returns for each issue.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Returns a page-at-a-time enumerator over the result set.
    pub fn pages(self) -> IssuePages<'a, F> {
        IssuePages::new(self.client, self.jql, self.start_at, self.page_size, self.fields)
    }

    /// Returns a stream of issues, fetching pages as it is polled.
    pub fn stream(self) -> impl Stream<Item = Result<Issue<F>, Error>> + 'a {
        self.pages().into_stream()
    }

    /// Fetches only the first page.
    pub async fn first_page(self) -> Result<SearchPage<F>, Error> {
        self.client
            .search_page(&self.jql, self.start_at, self.page_size, self.fields.as_deref())
            .await
    }

    /// Drains the whole result set into memory.
    pub async fn all(self) -> Result<Vec<Issue<F>>, Error> {
        let mut pages = self.pages();
        let mut issues = Vec::new();
        while let Some(page) = pages.next_page().await {
            issues.append(&mut page?.issues);
        }
        Ok(issues)
    }
}
