use serde::Serialize;
use std::fmt;

use super::ResultRow;

/// Headline figures over a set of result rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_authors: usize,
    pub mean_publications: f64,
    pub mean_average_citations: f64,
    pub with_orcid: usize,
}

impl Summary {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let n = rows.len() as f64;
        let publications: u64 = rows.iter().map(|row| row.count).sum();
        let citations: f64 = rows.iter().map(|row| row.average_citations).sum();

        Self {
            total_authors: rows.len(),
            mean_publications: publications as f64 / n,
            mean_average_citations: citations / n,
            with_orcid: rows.iter().filter(|row| !row.orcid.is_empty()).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total authors: {}, avg publications: {:.1}, avg citations: {:.1}, with ORCID: {}",
            self.total_authors, self.mean_publications, self.mean_average_citations, self.with_orcid
        )
    }
}
