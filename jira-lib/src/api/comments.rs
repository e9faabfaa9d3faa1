//! Comment operations

use reqwest::Method;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::model::types::Comment;
use crate::model::IssueRef;
use crate::transport::WireBody;
use crate::JiraClient;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommentsContainer {
    comments: Vec<Comment>,
}

impl JiraClient {
    /// Lists an issue's comments.
    pub async fn comments(&self, issue: &IssueRef) -> Result<Vec<Comment>, Error> {
        let path = format!("issue/{}/comment", issue.remote_identifier());
        let container: CommentsContainer = self.get_decoded(&path).await?;
        Ok(container.comments)
    }

    /// Adds a comment to an issue and returns it as stored.
    pub async fn create_comment(&self, issue: &IssueRef, body: &str) -> Result<Comment, Error> {
        let path = format!("issue/{}/comment", issue.remote_identifier());
        let payload = serde_json::to_string(&json!({ "body": body }))?;

        let response = self.request(Method::POST, &path, None, WireBody::Json(payload)).await?;
        response.expect_status(StatusCode::CREATED)?;
        Ok(response.decode()?)
    }

    /// Deletes a comment from an issue.
    pub async fn delete_comment(&self, issue: &IssueRef, comment: &Comment) -> Result<(), Error> {
        let path = format!("issue/{}/comment/{}", issue.remote_identifier(), comment.id);
        let response = self.request(Method::DELETE, &path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
