//! Jira data types

mod attachment;
mod comment;
pub(crate) mod datetime;
mod named;
mod project;
mod remote_link;
mod server_info;
mod timetracking;
mod transition;
mod user;

pub use attachment::*;
pub use comment::*;
pub use datetime::format_datetime;
pub use datetime::parse_datetime;
pub use named::*;
pub use project::*;
pub use remote_link::RemoteLink;
pub(crate) use remote_link::RemoteLinkResult;
pub use server_info::*;
pub use timetracking::*;
pub use transition::*;
pub use user::*;
