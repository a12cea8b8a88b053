//! Explainability for ranked results
//!
//! Output structures that show how each distance was built up, with the
//! weighted contribution of every component.

use crate::rank::RankedCocktail;
use crate::weights::Component;
use serde::Serialize;
use shaker_core::{Cocktail, LocalizedText};
use std::collections::BTreeMap;

/// A ranked match with its per-component distance breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMatch {
    pub name: LocalizedText,
    /// Total weighted distance to the query
    pub distance: f64,
    pub mocktail: bool,
    /// Full catalog entry, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cocktail: Option<Cocktail>,
    /// Per-component weighted contributions
    pub explain: BTreeMap<Component, f64>,
}

impl ExplainedMatch {
    /// Create an explained match from a ranked result
    pub fn from_ranked(ranked: RankedCocktail<'_>, include_cocktail: bool) -> Self {
        Self {
            name: ranked.cocktail.name.clone(),
            distance: ranked.distance,
            mocktail: ranked.cocktail.is_mocktail(),
            cocktail: if include_cocktail { Some(ranked.cocktail.clone()) } else { None },
            explain: ranked.breakdown.components,
        }
    }

    /// Create a list of explained matches from ranked results
    pub fn from_ranked_list(ranked_list: Vec<RankedCocktail<'_>>, include_cocktail: bool) -> Vec<Self> {
        ranked_list
            .into_iter()
            .map(|r| Self::from_ranked(r, include_cocktail))
            .collect()
    }
}

/// Response body for twist and explore queries
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    /// Matches in ascending distance order
    pub result: Vec<ExplainedMatch>,
    pub stats: RankingStats,
}

impl MatchResponse {
    /// Build a response from ranked results.
    ///
    /// `candidates_count` is the number of catalog entries that were
    /// considered before limits and thresholds.
    pub fn from_ranked(
        ranked_list: Vec<RankedCocktail<'_>>,
        candidates_count: usize,
        include_cocktail: bool,
    ) -> Self {
        let stats = RankingStats::compute(&ranked_list, candidates_count);
        Self {
            result: ExplainedMatch::from_ranked_list(ranked_list, include_cocktail),
            stats,
        }
    }
}

/// Summary statistics for a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingStats {
    /// Number of catalog entries considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Mean distance of the returned results
    pub mean_distance: f64,
    /// Distance of the closest result
    pub best_distance: f64,
    /// Component that contributed most to the closest result's distance
    pub dominant_component: Option<Component>,
}

impl RankingStats {
    /// Compute stats from ranked results (assumed sorted ascending)
    pub fn compute(results: &[RankedCocktail<'_>], candidates_count: usize) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                mean_distance: 0.0,
                best_distance: 0.0,
                dominant_component: None,
            };
        };

        let mean_distance =
            results.iter().map(|r| r.distance).sum::<f64>() / results.len() as f64;

        Self {
            candidates_count,
            results_count: results.len(),
            mean_distance,
            best_distance: best.distance,
            dominant_component: best.breakdown.dominant_component(),
        }
    }
}
