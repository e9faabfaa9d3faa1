//! Server metadata operations

use crate::error::Error;
use crate::model::types::IssueType;
use crate::model::types::JiraUser;
use crate::model::types::Priority;
use crate::model::types::Project;
use crate::model::types::ProjectVersion;
use crate::model::types::ServerInfo;
use crate::model::types::Status;
use crate::JiraClient;

impl JiraClient {
    /// Lists the issue types defined on the server.
    pub async fn issue_types(&self) -> Result<Vec<IssueType>, Error> {
        self.get_decoded("issuetype").await
    }

    /// Lists the workflow statuses defined on the server.
    pub async fn statuses(&self) -> Result<Vec<Status>, Error> {
        self.get_decoded("status").await
    }

    /// Lists the issue priorities defined on the server.
    pub async fn priorities(&self) -> Result<Vec<Priority>, Error> {
        self.get_decoded("priority").await
    }

    /// Lists the projects visible to the authenticated user.
    pub async fn projects(&self) -> Result<Vec<Project>, Error> {
        self.get_decoded("project").await
    }

    /// Lists a project's versions.
    pub async fn project_versions(&self, project_key: &str) -> Result<Vec<ProjectVersion>, Error> {
        self.get_decoded(&format!("project/{project_key}/versions")).await
    }

    /// Returns the server's version and build information.
    pub async fn server_info(&self) -> Result<ServerInfo, Error> {
        self.get_decoded("serverInfo").await
    }

    /// Searches users by name or email fragment.
    pub async fn find_users(&self, search: &str) -> Result<Vec<JiraUser>, Error> {
        let path = format!("user/search?username={}", urlencoding::encode(search));
        self.get_decoded(&path).await
    }

    /// Returns the first user matching the search, if any.
    pub async fn find_user(&self, search: &str) -> Result<Option<JiraUser>, Error> {
        Ok(self.find_users(search).await?.into_iter().next())
    }
}
