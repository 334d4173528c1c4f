use crate::error::Result;
use crate::models::RepositoryRecord;
use crate::types::GitHubRepo;
use tracing::debug;

/// Literal body GitHub returns for a user without public repositories
pub const EMPTY_LISTING: &str = "[]";

/// What a repository listing decoded to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The body was exactly `[]`
    NoPublicRepositories,
    /// The body decoded to an array with no elements
    NoneParsed,
    Repositories(Vec<RepositoryRecord>),
}

/// Decode a raw listing body into repository records, in response order
pub fn parse(raw: &str) -> Result<ParseOutcome> {
    if raw == EMPTY_LISTING {
        return Ok(ParseOutcome::NoPublicRepositories);
    }

    let repos: Vec<GitHubRepo> = serde_json::from_str(raw)?;
    debug!("Decoded {} repositories", repos.len());

    if repos.is_empty() {
        return Ok(ParseOutcome::NoneParsed);
    }

    Ok(ParseOutcome::Repositories(
        repos.into_iter().map(RepositoryRecord::from).collect(),
    ))
}
