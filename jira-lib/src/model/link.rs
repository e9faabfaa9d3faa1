//! Issue links

use serde::Deserialize;
use serde::Serialize;

use super::issue::IssueRef;

/// The relationship an issue link expresses, e.g. "Blocks" or "Relates".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkType {
    pub name: String,
}

impl LinkType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A directed link between two issues.
///
/// The inward endpoint is the link's source and the outward endpoint its
/// target; the server reports links from both sides and omits the endpoint
/// that is the issue being read, which [`normalize`] fills back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueLink {
    pub id: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    #[serde(rename = "inwardIssue")]
    pub inward: IssueRef,
    #[serde(rename = "outwardIssue")]
    pub outward: IssueRef,
}

impl IssueLink {
    pub fn new(link_type: LinkType, inward: IssueRef, outward: IssueRef) -> Self {
        Self { id: String::new(), link_type, inward, outward }
    }
}

/// Fills an omitted link endpoint with the owning issue's identity.
///
/// An endpoint is filled only when its id is empty, its key is empty, and
/// the opposite endpoint has an id. Links where both endpoints are present,
/// or both absent, are returned unchanged.
pub fn normalize(mut link: IssueLink, owner: &IssueRef) -> IssueLink {
    match (link.inward.id.is_empty(), link.outward.id.is_empty()) {
        (true, false) if link.inward.key.is_empty() => link.inward = owner.clone(),
        (false, true) if link.outward.key.is_empty() => link.outward = owner.clone(),
        _ => {}
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_ref(id: &str, key: &str) -> IssueRef {
        IssueRef::new(id, key)
    }

    #[test]
    fn fills_the_missing_inward_endpoint() {
        let owner = issue_ref("10000", "DEMO-1");
        let link = IssueLink::new(
            LinkType::new("Blocks"),
            issue_ref("", ""),
            issue_ref("10001", "DEMO-2"),
        );
        let link = normalize(link, &owner);
        assert_eq!(link.inward, owner);
        assert_eq!(link.outward.id, "10001");
    }

    #[test]
    fn fills_the_missing_outward_endpoint() {
        let owner = issue_ref("10000", "DEMO-1");
        let link = IssueLink::new(
            LinkType::new("Blocks"),
            issue_ref("10001", "DEMO-2"),
            issue_ref("", ""),
        );
        let link = normalize(link, &owner);
        assert_eq!(link.outward, owner);
    }

    #[test]
    fn complete_links_are_unchanged() {
        let owner = issue_ref("10000", "DEMO-1");
        let link = IssueLink::new(
            LinkType::new("Relates"),
            issue_ref("10001", "DEMO-2"),
            issue_ref("10002", "DEMO-3"),
        );
        assert_eq!(normalize(link.clone(), &owner), link);
    }

    #[test]
    fn links_with_both_endpoints_absent_are_unchanged() {
        let owner = issue_ref("10000", "DEMO-1");
        let link = IssueLink::new(LinkType::new("Relates"), issue_ref("", ""), issue_ref("", ""));
        assert_eq!(normalize(link.clone(), &owner), link);
    }

    #[test]
    fn an_endpoint_with_only_a_key_is_kept() {
        let owner = issue_ref("10000", "DEMO-1");
        let link = IssueLink::new(
            LinkType::new("Blocks"),
            issue_ref("", "DEMO-9"),
            issue_ref("10001", "DEMO-2"),
        );
        let link = normalize(link.clone(), &owner);
        assert_eq!(link.inward.key, "DEMO-9");
        assert_eq!(link.inward.id, "");
    }

    #[test]
    fn decodes_the_wire_shape() {
        let json = r#"{
            "id": "30000",
            "type": { "name": "Blocks" },
            "outwardIssue": { "id": "10001", "key": "DEMO-2" }
        }"#;
        let link: IssueLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.link_type.name, "Blocks");
        assert_eq!(link.outward.key, "DEMO-2");
        assert!(link.inward.id.is_empty());
    }
}
