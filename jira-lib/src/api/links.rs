//! Issue link operations

use reqwest::Method;
use reqwest::StatusCode;
use serde_json::json;

use crate::error::Error;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::model::IssueLink;
use crate::model::IssueRef;
use crate::transport::WireBody;
use crate::JiraClient;

/// Renders a link endpoint for the create payload, id when the reference
/// carries one, key otherwise.
fn link_endpoint(issue: &IssueRef) -> serde_json::Value {
    if issue.id.is_empty() {
        json!({ "key": issue.key })
    } else {
        json!({ "id": issue.id })
    }
}

/// Returns true when a link endpoint refers to the wanted issue.
///
/// Matched by id when the wanted reference carries one, by key otherwise.
fn endpoint_matches(endpoint: &IssueRef, wanted: &IssueRef) -> bool {
    if wanted.id.is_empty() {
        endpoint.key == wanted.key
    } else {
        endpoint.id == wanted.id
    }
}

impl JiraClient {
    /// Lists an issue's links, normalized so both endpoints are filled.
    pub async fn issue_links(&self, issue: &IssueRef) -> Result<Vec<IssueLink>, Error> {
        let issue: Issue<IssueFields> = self.load_issue_as(issue).await?;
        Ok(issue.fields.links)
    }

    /// Finds the link with the given relationship between two issues.
    ///
    /// Fails with [`Error::NotFound`] when no link matches and with
    /// [`Error::Ambiguous`] when more than one does.
    pub async fn load_issue_link(
        &self,
        parent: &IssueRef,
        child: &IssueRef,
        relationship: &str,
    ) -> Result<IssueLink, Error> {
        let links = self.issue_links(parent).await?;
        let mut matches = links.into_iter().filter(|link| {
            link.link_type.name == relationship
                && endpoint_matches(&link.inward, parent)
                && endpoint_matches(&link.outward, child)
        });

        let Some(link) = matches.next() else {
            return Err(Error::not_found("issue link"));
        };
        if matches.next().is_some() {
            return Err(Error::ambiguous("issue link"));
        }
        Ok(link)
    }

    /// Links two issues with the given relationship and returns the link.
    pub async fn create_issue_link(
        &self,
        parent: &IssueRef,
        child: &IssueRef,
        relationship: &str,
    ) -> Result<IssueLink, Error> {
        let body = serde_json::to_string(&json!({
            "type": { "name": relationship },
            "inwardIssue": link_endpoint(parent),
            "outwardIssue": link_endpoint(child),
        }))?;

        let response = self.request(Method::POST, "issueLink", None, WireBody::Json(body)).await?;
        response.expect_status(StatusCode::CREATED)?;
        self.load_issue_link(parent, child, relationship).await
    }

    /// Removes an issue link.
    pub async fn delete_issue_link(&self, link: &IssueLink) -> Result<(), Error> {
        let path = format!("issueLink/{}", link.id);
        let response = self.request(Method::DELETE, &path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
