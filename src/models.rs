use std::collections::HashMap;
use std::fmt;

use crate::types::GitHubRepo;

/// Placeholder used for a missing, null or blank description/language
pub const MISSING_FIELD: &str = "None";

/// One repository as reported and exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
}

impl RepositoryRecord {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        language: Option<String>,
        stars: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: or_missing(description),
            language: or_missing(language),
            stars,
        }
    }
}

fn or_missing(value: Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => MISSING_FIELD.to_string(),
    }
}

impl From<GitHubRepo> for RepositoryRecord {
    fn from(repo: GitHubRepo) -> Self {
        RepositoryRecord::new(
            repo.name,
            repo.description,
            repo.language,
            repo.stargazers_count.unwrap_or(0),
        )
    }
}

impl fmt::Display for RepositoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Repo : {}, Language: {}, Description : {}, Stars : {}",
            self.name, self.language, self.description, self.stars
        )
    }
}

/// Totals derived from a repository collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub total_repositories: usize,
    pub total_stars: u64,
    pub average_stars: f64,
}

/// Language name to repository count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDistribution {
    counts: HashMap<String, usize>,
    total: usize,
}

/// One row of the language breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
    pub percentage: f64,
}

impl LanguageDistribution {
    pub fn from_records(records: &[RepositoryRecord]) -> Self {
        let mut counts = HashMap::new();
        for record in records {
            *counts.entry(record.language.clone()).or_insert(0) += 1;
        }

        Self {
            counts,
            total: records.len(),
        }
    }

    pub fn count(&self, language: &str) -> usize {
        self.counts.get(language).copied().unwrap_or(0)
    }

    /// Share of repositories using `language`, 0 when there are none
    pub fn percentage(&self, language: &str) -> f64 {
        percentage_of(self.count(language), self.total)
    }

    /// Rows ordered by count descending, then by language name
    pub fn shares(&self) -> Vec<LanguageShare> {
        let mut shares: Vec<LanguageShare> = self
            .counts
            .iter()
            .map(|(language, &count)| LanguageShare {
                language: language.clone(),
                count,
                percentage: percentage_of(count, self.total),
            })
            .collect();

        shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
        shares
    }
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Result of aggregating one user's repositories
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub repositories: Vec<RepositoryRecord>,
    pub summary: SummaryStatistics,
    pub languages: LanguageDistribution,
}
