//! Authentication

mod credentials;

pub use credentials::Credentials;
pub use credentials::CredentialsProvider;
pub use credentials::StaticCredentials;
