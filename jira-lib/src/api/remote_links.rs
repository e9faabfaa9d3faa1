//! Remote link operations

use reqwest::Method;
use reqwest::StatusCode;
use serde_json::json;

use crate::error::Error;
use crate::model::types::RemoteLink;
use crate::model::types::RemoteLinkResult;
use crate::model::IssueRef;
use crate::transport::WireBody;
use crate::JiraClient;

impl JiraClient {
    /// Lists the remote links attached to an issue.
    pub async fn remote_links(&self, issue: &IssueRef) -> Result<Vec<RemoteLink>, Error> {
        let path = format!("issue/{}/remotelink", issue.remote_identifier());
        let results: Vec<RemoteLinkResult> = self.get_decoded(&path).await?;
        Ok(results.into_iter().map(RemoteLinkResult::into_remote_link).collect())
    }

    /// Attaches a remote link to an issue and returns it as stored.
    pub async fn create_remote_link(
        &self,
        issue: &IssueRef,
        link: &RemoteLink,
    ) -> Result<RemoteLink, Error> {
        let path = format!("issue/{}/remotelink", issue.remote_identifier());
        let body = serde_json::to_string(&json!({
            "application": {
                "type": "jira-lib",
                "name": "Jira REST client"
            },
            "object": {
                "url": link.url,
                "title": link.title,
                "summary": link.summary
            }
        }))?;

        let response = self.request(Method::POST, &path, None, WireBody::Json(body)).await?;
        response.expect_status(StatusCode::CREATED)?;
        // the response carries only { "id": <id>, "self": <url> }
        let created = response.decode::<RemoteLinkResult>()?.into_remote_link();
        self.remote_link_by_id(issue, &created.id).await
    }

    /// Updates a remote link's target and text, then returns it as stored.
    ///
    /// Only the fields with a value are sent; the rest keep their stored
    /// values.
    pub async fn update_remote_link(
        &self,
        issue: &IssueRef,
        link: &RemoteLink,
    ) -> Result<RemoteLink, Error> {
        let mut object = serde_json::Map::new();
        if let Some(url) = &link.url {
            object.insert("url".to_string(), json!(url));
        }
        if let Some(title) = &link.title {
            object.insert("title".to_string(), json!(title));
        }
        if let Some(summary) = &link.summary {
            object.insert("summary".to_string(), json!(summary));
        }
        let body = serde_json::to_string(&json!({ "object": object }))?;
        let path = format!("issue/{}/remotelink/{}", issue.remote_identifier(), link.id);

        let response = self.request(Method::PUT, &path, None, WireBody::Json(body)).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        self.remote_link_by_id(issue, &link.id).await
    }

    /// Removes a remote link from an issue.
    pub async fn delete_remote_link(&self, issue: &IssueRef, link: &RemoteLink) -> Result<(), Error> {
        let path = format!("issue/{}/remotelink/{}", issue.remote_identifier(), link.id);
        let response = self.request(Method::DELETE, &path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    async fn remote_link_by_id(&self, issue: &IssueRef, id: &str) -> Result<RemoteLink, Error> {
        let links = self.remote_links(issue).await?;
        let mut matches = links.into_iter().filter(|link| link.id == id);
        let Some(link) = matches.next() else {
            return Err(Error::not_found("remote link"));
        };
        if matches.next().is_some() {
            return Err(Error::ambiguous("remote link"));
        }
        Ok(link)
    }
}
