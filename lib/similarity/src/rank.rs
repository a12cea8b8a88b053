//! Ranking engine
//!
//! Scores every catalog entry against a query and returns them in
//! ascending distance order. Used by the twist finder (query is a catalog
//! member) and by the explorer (query is synthetic).

use crate::explorer::ExplorerQuery;
use crate::score::{DistanceBreakdown, Scorer};
use crate::weights::DistanceWeights;
use serde::Serialize;
use shaker_core::{find_by_name, Cocktail};
use tracing::debug;

/// Number of twists returned when the caller does not ask for a limit
pub const DEFAULT_TWIST_LIMIT: usize = 10;

/// A catalog entry with its distance to the query
#[derive(Debug, Clone, Serialize)]
pub struct RankedCocktail<'a> {
    /// The catalog entry
    pub cocktail: &'a Cocktail,
    /// Total weighted distance to the query
    pub distance: f64,
    /// Per-component weighted contributions
    pub breakdown: DistanceBreakdown,
}

impl<'a> RankedCocktail<'a> {
    /// The plain `(cocktail, distance)` pair
    pub fn pair(&self) -> (&'a Cocktail, f64) {
        (self.cocktail, self.distance)
    }
}

/// Post-sort selection applied to a ranking
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankOptions {
    /// Keep at most this many results
    pub limit: Option<usize>,
    /// Drop results farther than this distance
    pub max_distance: Option<f64>,
}

impl RankOptions {
    /// Return every distance
    pub fn all() -> Self {
        Self::default()
    }

    /// Return the closest `limit` results
    pub fn top(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            max_distance: None,
        }
    }

    #[must_use]
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }
}

/// Ranks a catalog against a query with a fixed set of weights
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
}

impl Ranker {
    /// Create a ranker with the given scorer
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Create a ranker with the given weights
    pub fn with_weights(weights: DistanceWeights) -> Self {
        Self::new(Scorer::new(weights))
    }

    /// Get a reference to the scorer
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Rank `catalog` by ascending distance to `query`
    ///
    /// Entries sharing the query's name on any localized variant are
    /// excluded; a query with a blank name (explorer) excludes nothing. Equal distances keep catalog
    /// order. `options` is applied after sorting: first the distance
    /// threshold, then the limit.
    pub fn rank<'a>(
        &self,
        catalog: &'a [Cocktail],
        query: &Cocktail,
        options: &RankOptions,
    ) -> Vec<RankedCocktail<'a>> {
        let mut results: Vec<RankedCocktail<'a>> = catalog
            .iter()
            .filter(|candidate| !candidate.name.same_identity(&query.name))
            .map(|candidate| {
                let breakdown = self.scorer.breakdown(query, candidate);
                RankedCocktail {
                    cocktail: candidate,
                    distance: breakdown.total,
                    breakdown,
                }
            })
            .collect();

        // Sort by distance ascending; sort_by is stable
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let scored = results.len();
        if let Some(max_distance) = options.max_distance {
            results.retain(|r| r.distance <= max_distance);
        }
        if let Some(limit) = options.limit {
            results.truncate(limit);
        }

        debug!(
            "Ranked {} of {} candidates for '{}', returning {}",
            scored,
            catalog.len(),
            query.name,
            results.len()
        );

        results
    }

    /// Find twists of the cocktail named `name`
    ///
    /// Returns an empty list when no catalog entry has that name.
    pub fn twists<'a>(
        &self,
        catalog: &'a [Cocktail],
        name: &str,
        limit: usize,
    ) -> Vec<RankedCocktail<'a>> {
        match find_by_name(catalog, name) {
            Some(reference) => self.rank(catalog, reference, &RankOptions::top(limit)),
            None => {
                debug!("No cocktail named '{}' in catalog", name);
                Vec::new()
            }
        }
    }

    /// Rank `catalog` against explorer preferences
    pub fn explore<'a>(
        &self,
        catalog: &'a [Cocktail],
        query: &ExplorerQuery,
        options: &RankOptions,
    ) -> Vec<RankedCocktail<'a>> {
        self.rank(catalog, &query.to_cocktail(), options)
    }
}

/// Every catalog entry ranked by ascending distance to `query`, using the
/// default weights
pub fn rank_by_distance<'a>(catalog: &'a [Cocktail], query: &Cocktail) -> Vec<RankedCocktail<'a>> {
    Ranker::default().rank(catalog, query, &RankOptions::all())
}

/// The `limit` closest catalog entries to `query`, using the default weights
pub fn top_matches<'a>(
    catalog: &'a [Cocktail],
    query: &Cocktail,
    limit: usize,
) -> Vec<RankedCocktail<'a>> {
    Ranker::default().rank(catalog, query, &RankOptions::top(limit))
}

/// Twists of the cocktail named `name`, using the default weights
pub fn find_twists<'a>(
    catalog: &'a [Cocktail],
    name: &str,
    limit: usize,
) -> Vec<RankedCocktail<'a>> {
    Ranker::default().twists(catalog, name, limit)
}

/// Catalog entries ranked against explorer preferences, using the default
/// weights
pub fn explore<'a>(
    catalog: &'a [Cocktail],
    query: &ExplorerQuery,
    options: &RankOptions,
) -> Vec<RankedCocktail<'a>> {
    Ranker::default().explore(catalog, query, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::Component;
    use shaker_core::{FlavorProfile, LocalizedText};

    fn profile() -> FlavorProfile {
        FlavorProfile::new(3.0, 2.0, 4.0, 1.0, 40.0).with_bubbles(false)
    }

    fn cocktail(name: &str, ingredients: &[&str]) -> Cocktail {
        Cocktail::new(name)
            .with_profile(profile())
            .with_base_spirits(["Gin"])
            .with_ingredients(ingredients.iter().copied())
    }

    fn names(results: &[RankedCocktail<'_>]) -> Vec<String> {
        results.iter().map(|r| r.cocktail.name.en.clone()).collect()
    }

    #[test]
    fn test_rank_ascending() {
        let query = cocktail("Query", &[]);
        let catalog = vec![
            cocktail("A", &["x", "y"]),
            cocktail("B", &[]),
            cocktail("C", &["x"]),
        ];

        let results = rank_by_distance(&catalog, &query);
        assert_eq!(names(&results), vec!["B", "C", "A"]);
        let distances: Vec<f64> = results.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let query = cocktail("Query", &[]);
        let catalog = vec![
            cocktail("First", &["x"]),
            cocktail("Exact", &[]),
            cocktail("Second", &["y"]),
            cocktail("Third", &["z"]),
        ];

        let results = rank_by_distance(&catalog, &query);
        assert_eq!(names(&results), vec!["Exact", "First", "Second", "Third"]);
    }

    #[test]
    fn test_query_identity_excluded() {
        let catalog = vec![
            cocktail("Gimlet", &["Lime"]),
            cocktail("Gin Sour", &["Lemon"]),
            cocktail("Gin Rickey", &["Lime", "Soda"]),
        ];

        let results = top_matches(&catalog, &catalog[0], 10);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.cocktail.name.en != "Gimlet"));
    }

    #[test]
    fn test_query_identity_excluded_across_translations() {
        let catalog = vec![
            Cocktail::new(LocalizedText::new("Gimlet").with_translation("he", "גימלט"))
                .with_ingredients(["Lime"]),
            cocktail("Gin Rickey", &["Lime", "Soda"]),
        ];

        let query = cocktail("gimlet", &["Lime"]);
        let results = top_matches(&catalog, &query, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].cocktail.name.en, "Gin Rickey");

        let by_hebrew = Cocktail::new(LocalizedText::new("").with_translation("he", "גימלט"))
            .with_ingredients(["Lime"]);
        assert_eq!(top_matches(&catalog, &by_hebrew, 10).len(), 1);
    }

    #[test]
    fn test_top_matches_limit() {
        let query = cocktail("Query", &[]);
        let catalog: Vec<Cocktail> = (0..25)
            .map(|i| cocktail(&format!("Drink {}", i), &[]))
            .collect();

        assert_eq!(top_matches(&catalog, &query, 10).len(), 10);
        assert_eq!(top_matches(&catalog, &query, 0).len(), 0);
        assert_eq!(top_matches(&catalog, &query, 100).len(), 25);
    }

    #[test]
    fn test_mocktails_sort_last() {
        let query = cocktail("Query", &[]);
        let mut virgin = cocktail("Virgin", &[]);
        virgin.flavor_profile.booziness = Some(0.0);
        let catalog = vec![virgin, cocktail("Far", &["a", "b", "c", "d"])];

        let results = rank_by_distance(&catalog, &query);
        assert_eq!(names(&results), vec!["Far", "Virgin"]);
        assert_eq!(results[1].distance, 1000.0);
        assert!(results[1].breakdown.mocktail_mismatch);
    }

    #[test]
    fn test_malformed_entry_still_ranked() {
        let query = cocktail("Query", &[]);
        let mut broken = cocktail("Broken", &[]);
        broken.ingredients = None;
        broken.flavor_profile.body = None;
        let catalog = vec![broken, cocktail("Fine", &["x"])];

        let results = rank_by_distance(&catalog, &query);
        assert_eq!(names(&results), vec!["Fine", "Broken"]);
        // (5 missing body) * 3 + 5 missing ingredients * 1
        assert_eq!(results[1].distance, 20.0);
        assert_eq!(results[1].breakdown.get(Component::Ingredients), 5.0);
    }

    #[test]
    fn test_twists_by_name() {
        let catalog = vec![
            cocktail("Gimlet", &["Lime"]),
            cocktail("Gin Sour", &["Lemon"]),
            cocktail("Southside", &["Lime", "Mint"]),
        ];

        let results = find_twists(&catalog, "gimlet", DEFAULT_TWIST_LIMIT);
        assert_eq!(names(&results), vec!["Southside", "Gin Sour"]);
        assert_eq!(results[0].pair().1, 1.0);
    }

    #[test]
    fn test_twists_unknown_name_is_empty() {
        let catalog = vec![cocktail("Gimlet", &["Lime"])];
        assert!(find_twists(&catalog, "Zombie", 10).is_empty());
    }

    #[test]
    fn test_explore_with_threshold() {
        let catalog = vec![
            cocktail("Close", &["Lime"]),
            cocktail("Exact", &[]),
            cocktail("Far", &["a", "b", "c"]),
        ];
        let query = ExplorerQuery::new(3.0, 2.0, 4.0, 1.0)
            .bubbles(false)
            .base_spirit("gin");

        let results = explore(&catalog, &query, &RankOptions::all().with_max_distance(1.0));
        assert_eq!(names(&results), vec!["Exact", "Close"]);

        let all = explore(&catalog, &query, &RankOptions::all());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_explore_mocktail_preference() {
        let mut virgin = cocktail("Virgin", &["Lime", "Mint", "Soda"]);
        virgin.flavor_profile.booziness = Some(0.0);
        let catalog = vec![cocktail("Boozy", &[]), virgin];

        let query = ExplorerQuery::new(3.0, 2.0, 4.0, 1.0).mocktail();
        let results = explore(&catalog, &query, &RankOptions::top(1));
        assert_eq!(names(&results), vec!["Virgin"]);
    }

    #[test]
    fn test_ranker_custom_weights() {
        let weights = DistanceWeights {
            ingredients: 0.0,
            ..DistanceWeights::default()
        };
        let ranker = Ranker::with_weights(weights);
        let query = cocktail("Query", &[]);
        let catalog = vec![cocktail("Noisy", &["a", "b", "c"])];

        let results = ranker.rank(&catalog, &query, &RankOptions::all());
        assert_eq!(results[0].distance, 0.0);
    }
}
