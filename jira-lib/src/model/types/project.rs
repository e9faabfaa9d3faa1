//! Project types

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::IssueType;
use super::JiraUser;

/// A Jira project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Canonical URL of this project resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Project id.
    pub id: String,
    /// Project key (e.g. "WEB").
    pub key: String,
    /// Project name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project URL, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Contact email, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Default assignee policy (e.g. "PROJECT_LEAD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    /// Project lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<JiraUser>,
    /// Issue types available in this project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issue_types: Vec<IssueType>,
    /// Project components.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    /// Project category, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<ProjectCategory>,
}

/// A component within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
    /// Canonical URL of this component resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Component id.
    pub id: String,
    /// Component name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A category grouping projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectCategory {
    /// Canonical URL of this category resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Category id.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectVersion {
    /// Canonical URL of this version resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Version id.
    pub id: String,
    /// Version name (e.g. "2.1").
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the version has been archived.
    pub archived: bool,
    /// Whether the version has been released.
    pub released: bool,
    /// Planned or actual release date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Whether the release date has passed without a release.
    pub overdue: bool,
    /// Id of the owning project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}
