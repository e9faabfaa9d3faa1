//! Attachment operations

use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::header::ACCEPT;
use reqwest::Method;
use reqwest::StatusCode;

use crate::error::Error;
use crate::model::types::Attachment;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::model::IssueRef;
use crate::transport::WireBody;
use crate::JiraClient;

static ATLASSIAN_TOKEN: HeaderName = HeaderName::from_static("x-atlassian-token");

impl JiraClient {
    /// Lists an issue's attachments.
    pub async fn attachments(&self, issue: &IssueRef) -> Result<Vec<Attachment>, Error> {
        let issue: Issue<IssueFields> = self.load_issue_as(issue).await?;
        Ok(issue.fields.attachments)
    }

    /// Uploads a file as an attachment and returns its metadata.
    ///
    /// The upload is a `multipart/form-data` request, so the JSON content
    /// type is not sent; the `X-Atlassian-Token` header opts out of the
    /// server's cross-site request check for uploads.
    pub async fn create_attachment(
        &self,
        issue: &IssueRef,
        content: Vec<u8>,
        file_name: &str,
    ) -> Result<Attachment, Error> {
        let path = format!("issue/{}/attachments", issue.remote_identifier());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ATLASSIAN_TOKEN.clone(), HeaderValue::from_static("nocheck"));

        let body = WireBody::File { file_name: file_name.to_string(), bytes: content };
        let response = self.request(Method::POST, &path, Some(headers), body).await?;
        response.expect_status(StatusCode::OK)?;

        let uploaded: Vec<Attachment> = response.decode()?;
        let mut uploaded = uploaded.into_iter();
        let Some(attachment) = uploaded.next() else {
            return Err(Error::not_found("attachment"));
        };
        if uploaded.next().is_some() {
            return Err(Error::ambiguous("attachment"));
        }
        Ok(attachment)
    }

    /// Deletes an attachment.
    pub async fn delete_attachment(&self, attachment: &Attachment) -> Result<(), Error> {
        let path = format!("attachment/{}", attachment.id);
        let response = self.request(Method::DELETE, &path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
