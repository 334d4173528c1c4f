use crate::models::{Aggregation, LanguageDistribution, RepositoryRecord, SummaryStatistics};

/// Sort, summarize and group a user's repositories
pub fn aggregate(repositories: Vec<RepositoryRecord>) -> Aggregation {
    let repositories = sort_by_stars(repositories);
    let summary = summarize(&repositories);
    let languages = language_distribution(&repositories);

    Aggregation {
        repositories,
        summary,
        languages,
    }
}

/// Most-starred first; equal star counts keep their input order
pub fn sort_by_stars(mut repositories: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    // sort_by is stable
    repositories.sort_by(|a, b| b.stars.cmp(&a.stars));
    repositories
}

pub fn summarize(repositories: &[RepositoryRecord]) -> SummaryStatistics {
    let total_repositories = repositories.len();
    let total_stars: u64 = repositories.iter().map(|r| u64::from(r.stars)).sum();
    let average_stars = if total_repositories > 0 {
        total_stars as f64 / total_repositories as f64
    } else {
        0.0
    };

    SummaryStatistics {
        total_repositories,
        total_stars,
        average_stars,
    }
}

pub fn language_distribution(repositories: &[RepositoryRecord]) -> LanguageDistribution {
    LanguageDistribution::from_records(repositories)
}
