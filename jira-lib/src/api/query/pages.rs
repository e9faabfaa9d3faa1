//! Page-at-a-time search enumeration

use std::marker::PhantomData;

use async_stream::try_stream;
use futures::Stream;
use tracing::warn;

use crate::error::Error;
use crate::model::FieldSet;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::JiraClient;

use super::page::SearchPage;

/// Pulls search result pages on demand.
///
/// Nothing is fetched until [`next_page`](Self::next_page) is called. The
/// cursor advances by the number of issues each page actually returned and
/// the reported total is re-read from every response, so a result set that
/// grows or shrinks mid-enumeration neither skips offsets nor repeats them.
/// A server that reports more results but returns an empty page would loop
/// forever; that case ends enumeration with [`Error::Stalled`] instead.
///
/// After the final page, an error, or a stall the enumerator is exhausted
/// for good; resuming means starting a new search with an explicit offset.
pub struct IssuePages<'a, F: FieldSet = IssueFields> {
    client: &'a JiraClient,
    jql: String,
    fields: Option<Vec<String>>,
    page_size: usize,
    start_at: usize,
    done: bool,
    _fields: PhantomData<F>,
}

impl<'a, F: FieldSet> IssuePages<'a, F> {
    pub(crate) fn new(
        client: &'a JiraClient,
        jql: String,
        start_at: usize,
        page_size: usize,
        fields: Option<Vec<String>>,
    ) -> Self {
        Self {
            client,
            jql,
            fields,
            page_size,
            start_at,
            done: false,
            _fields: PhantomData,
        }
    }

    /// Returns the offset the next fetch would start from.
    pub fn start_at(&self) -> usize {
        self.start_at
    }

    /// Returns true once enumeration has finished or failed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Fetches the next page, or `None` when the result set is exhausted.
    pub async fn next_page(&mut self) -> Option<Result<SearchPage<F>, Error>> {
        if self.done {
            return None;
        }

        let page = match self
            .client
            .search_page::<F>(&self.jql, self.start_at, self.page_size, self.fields.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let returned = page.len();
        if returned == 0 && self.start_at < page.total {
            self.done = true;
            warn!(start_at = self.start_at, total = page.total, "search stalled");
            return Some(Err(Error::Stalled { start_at: self.start_at, total: page.total }));
        }

        self.start_at += returned;
        if self.start_at >= page.total {
            self.done = true;
        }
        Some(Ok(page))
    }

    /// Flattens the remaining pages into a stream of issues.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Issue<F>, Error>> + 'a {
        try_stream! {
            while let Some(page) = self.next_page().await {
                for issue in page?.issues {
                    yield issue;
                }
            }
        }
    }
}
