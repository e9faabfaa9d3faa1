//! Issue CRUD and workflow operations

use reqwest::Method;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::model::projection;
use crate::model::types::JiraUser;
use crate::model::types::Transition;
use crate::model::FieldSet;
use crate::model::Issue;
use crate::model::IssueFields;
use crate::model::IssueRef;
use crate::transport::WireBody;
use crate::JiraClient;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransitionsContainer {
    transitions: Vec<Transition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WatchersContainer {
    watchers: Vec<JiraUser>,
}

impl JiraClient {
    /// Loads an issue with its comments, watchers and normalized links.
    ///
    /// Comments and watchers live in their own resources, so this makes
    /// three requests. [`load_issue_as`](Self::load_issue_as) fetches only
    /// the issue itself.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let issue = client.load_issue(&IssueRef::from_key("DEMO-1")).await?;
    /// println!("{}: {:?}", issue.key, issue.fields.summary);
    /// ```
    pub async fn load_issue(&self, issue: &IssueRef) -> Result<Issue<IssueFields>, Error> {
        let mut loaded: Issue<IssueFields> = self.load_issue_as(issue).await?;
        let loaded_ref = loaded.issue_ref();
        loaded.fields.comments = self.comments(&loaded_ref).await?;
        loaded.fields.watchers = self.watchers(&loaded_ref).await?;
        Ok(loaded)
    }

    /// Loads an issue into a caller-chosen field set.
    ///
    /// Fetches the issue resource only; comments and watchers have their
    /// own operations.
    pub async fn load_issue_as<F: FieldSet>(&self, issue: &IssueRef) -> Result<Issue<F>, Error> {
        let path = format!("issue/{}", issue.remote_identifier());
        let mut loaded: Issue<F> = self.get_decoded(&path).await?;
        loaded.normalize_links()?;
        Ok(loaded)
    }

    /// Creates an issue and returns it as the server stored it.
    ///
    /// Only fields with a value are sent; everything else falls back to
    /// the project's defaults. The created issue is reloaded so generated
    /// values (key, status, reporter) are filled in.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut fields = IssueFields::with_summary("Fix the login page");
    /// fields.labels = vec!["ui".to_string()];
    /// let issue = client.create_issue("DEMO", "Bug", &fields).await?;
    /// ```
    pub async fn create_issue<F: FieldSet>(
        &self,
        project_key: &str,
        issue_type: &str,
        fields: &F,
    ) -> Result<Issue<F>, Error> {
        let mut payload = projection::create_payload(fields)?;
        payload.insert("project".to_string(), json!({ "key": project_key }));
        payload.insert("issuetype".to_string(), json!({ "name": issue_type }));
        let body = serde_json::to_string(&json!({ "fields": payload }))?;

        let response = self.request(Method::POST, "issue", None, WireBody::Json(body)).await?;
        response.expect_status(StatusCode::CREATED)?;
        let created: IssueRef = response.decode()?;
        self.load_issue_as(&created).await
    }

    /// Creates an issue carrying only a summary.
    pub async fn create_issue_with_summary(
        &self,
        project_key: &str,
        issue_type: &str,
        summary: &str,
    ) -> Result<Issue<IssueFields>, Error> {
        self.create_issue(project_key, issue_type, &IssueFields::with_summary(summary)).await
    }

    /// Applies an issue's field values to the server and reloads it.
    ///
    /// Each field with a value becomes a `set` operation in the update
    /// payload; unset fields are left untouched on the server.
    pub async fn update_issue<F: FieldSet>(&self, issue: &Issue<F>) -> Result<Issue<F>, Error> {
        let update = projection::update_payload(&issue.fields)?;
        let body = serde_json::to_string(&json!({ "update": update }))?;
        let issue_ref = issue.issue_ref();
        let path = format!("issue/{}", issue_ref.remote_identifier());

        let response = self.request(Method::PUT, &path, None, WireBody::Json(body)).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        self.load_issue_as(&issue_ref).await
    }

    /// Deletes an issue, subtasks included.
    pub async fn delete_issue(&self, issue: &IssueRef) -> Result<(), Error> {
        let path = format!("issue/{}?deleteSubtasks=true", issue.remote_identifier());
        let response = self.request(Method::DELETE, &path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// Lists the workflow transitions currently available for an issue.
    pub async fn transitions(&self, issue: &IssueRef) -> Result<Vec<Transition>, Error> {
        let path = format!(
            "issue/{}/transitions?expand=transitions.fields",
            issue.remote_identifier()
        );
        let container: TransitionsContainer = self.get_decoded(&path).await?;
        Ok(container.transitions)
    }

    /// Moves an issue through a workflow transition and reloads it.
    ///
    /// When the transition carries screen field values they are sent along
    /// under `fields`.
    pub async fn transition_issue<F: FieldSet>(
        &self,
        issue: &Issue<F>,
        transition: &Transition,
    ) -> Result<Issue<F>, Error> {
        let mut body = json!({ "transition": { "id": transition.id } });
        if let Some(fields) = &transition.fields {
            body["fields"] = fields.clone();
        }
        let issue_ref = issue.issue_ref();
        let path = format!("issue/{}/transitions", issue_ref.remote_identifier());

        let response = self
            .request(Method::POST, &path, None, WireBody::Json(serde_json::to_string(&body)?))
            .await?;
        response.expect_status(StatusCode::NO_CONTENT)?;
        self.load_issue_as(&issue_ref).await
    }

    /// Lists the users watching an issue.
    pub async fn watchers(&self, issue: &IssueRef) -> Result<Vec<JiraUser>, Error> {
        let path = format!("issue/{}/watchers", issue.remote_identifier());
        let container: WatchersContainer = self.get_decoded(&path).await?;
        Ok(container.watchers)
    }
}
