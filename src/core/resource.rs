//! Virtual resource identifiers.
//!
//! Views address synthetic items (a file inside a commit, a branch) with URI-shaped
//! identifiers of the form `<scheme>://<authority>/<path>?<json>`:
//!
//! - the authority selects the kind (`commit-file` or `branch`),
//! - the path carries the branch name (branch kind) or `<sha>/<file>` (commit-file kind),
//! - the query is a percent-encoded JSON object with the structured payload.
//!
//! [`VirtualResourceRef::parse`] decodes such an identifier without interpreting the
//! payload; typed payloads are decoded on demand with [`VirtualResourceRef::payload`].

use crate::core::{
    error::{DecoratorError, Result},
    state::FileStatusRecord,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Scheme reserved for decorated view resources
pub const DEFAULT_SCHEME: &str = "gitlens-view";

const COMMIT_FILE_AUTHORITY: &str = "commit-file";
const BRANCH_AUTHORITY: &str = "branch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    CommitFile,
    Branch,
    Other(String),
}

impl ResourceKind {
    fn from_authority(authority: &str) -> Self {
        match authority {
            COMMIT_FILE_AUTHORITY => ResourceKind::CommitFile,
            BRANCH_AUTHORITY => ResourceKind::Branch,
            other => ResourceKind::Other(other.to_string()),
        }
    }

    pub fn authority(&self) -> &str {
        match self {
            ResourceKind::CommitFile => COMMIT_FILE_AUTHORITY,
            ResourceKind::Branch => BRANCH_AUTHORITY,
            ResourceKind::Other(authority) => authority,
        }
    }
}

/// Payload of a `commit-file` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitFilePayload {
    #[serde(default)]
    pub repo_path: Option<String>,
    pub file: FileStatusRecord,
}

/// Payload of a `branch` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPayload {
    #[serde(default)]
    pub repo_path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryProbe {
    #[serde(default)]
    repo_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualResourceRef {
    pub scheme: String,
    pub kind: ResourceKind,
    /// Decoded path without its leading separator
    pub path: String,
    /// Decoded JSON payload text, empty when the identifier has no query
    pub payload: String,
}

impl VirtualResourceRef {
    /// Decode an identifier. Fails on anything that is not URI-shaped or lacks an authority.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri)?;

        let authority = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or(DecoratorError::MissingAuthority)?;

        let path = urlencoding::decode(url.path())?;
        let path = path.strip_prefix('/').unwrap_or(&path).to_string();

        let payload = match url.query() {
            Some(query) => urlencoding::decode(query)?.into_owned(),
            None => String::new(),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            kind: ResourceKind::from_authority(authority),
            path,
            payload,
        })
    }

    /// Identifier for a local branch
    pub fn branch(scheme: &str, repo_path: &str, name: &str) -> Result<Self> {
        let payload = serde_json::to_string(&BranchPayload {
            repo_path: Some(repo_path.to_string()),
        })?;

        Ok(Self {
            scheme: scheme.to_string(),
            kind: ResourceKind::Branch,
            path: name.to_string(),
            payload,
        })
    }

    /// Identifier for a file as changed by commit `sha`
    pub fn commit_file(
        scheme: &str,
        repo_path: &str,
        sha: &str,
        file: &FileStatusRecord,
    ) -> Result<Self> {
        let payload = serde_json::to_string(&CommitFilePayload {
            repo_path: Some(repo_path.to_string()),
            file: file.clone(),
        })?;

        Ok(Self {
            scheme: scheme.to_string(),
            kind: ResourceKind::CommitFile,
            path: format!("{sha}/{}", file.file_name),
            payload,
        })
    }

    /// Decode the JSON payload into a typed record
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T> {
        if self.payload.trim().is_empty() {
            return Err(DecoratorError::MissingPayload);
        }
        Ok(serde_json::from_str(&self.payload)?)
    }

    /// Repository path named by the payload, if it has one
    pub fn repository_path(&self) -> Option<String> {
        serde_json::from_str::<RepositoryProbe>(&self.payload)
            .ok()
            .and_then(|probe| probe.repo_path)
    }

    /// Encode back into identifier form
    pub fn to_uri(&self) -> String {
        let path = self
            .path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let mut uri = format!("{}://{}/{}", self.scheme, self.kind.authority(), path);
        if !self.payload.is_empty() {
            uri.push('?');
            uri.push_str(&urlencoding::encode(&self.payload));
        }
        uri
    }
}

impl fmt::Display for VirtualResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}
