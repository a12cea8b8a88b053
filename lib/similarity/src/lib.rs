//! # Shaker Similarity
//!
//! Weighted cocktail distance and ranking engine.
//!
//! This crate compares cocktails attribute by attribute and ranks a
//! catalog against a query, either a reference cocktail (twist finding) or
//! a set of explorer preferences.
//!
//! ## Features
//!
//! - **Attribute distances**: Taste dimensions, bubbles and ingredient/descriptor sets
//! - **Weighted aggregate**: Fixed, configurable weights with a hard mocktail gate
//! - **Ranking**: Stable ascending sort with top-N or distance-threshold selection
//! - **Explainability**: Per-component contribution breakdown for every match
//!
//! ## Example
//!
//! ```rust
//! use shaker_core::{Cocktail, FlavorProfile};
//! use shaker_similarity::{find_twists, DEFAULT_TWIST_LIMIT};
//!
//! let profile = FlavorProfile::new(3.0, 2.0, 4.0, 1.0, 40.0).with_bubbles(false);
//! let catalog = vec![
//!     Cocktail::new("Margarita")
//!         .with_profile(profile)
//!         .with_base_spirits(["Tequila"])
//!         .with_liqueurs(["Cointreau"])
//!         .with_ingredients(["Lime"]),
//!     Cocktail::new("Tommy's Margarita")
//!         .with_profile(profile)
//!         .with_base_spirits(["Tequila"])
//!         .with_ingredients(["Lime", "Agave"]),
//! ];
//!
//! let twists = find_twists(&catalog, "margarita", DEFAULT_TWIST_LIMIT);
//! assert_eq!(twists.len(), 1);
//! assert_eq!(twists[0].distance, 2.5);
//! ```
//!
//! ## Distance
//!
//! ```text
//! booziness == 0 on exactly one side  ->  1000 (mocktail mismatch)
//!
//! otherwise:
//!     3.0 * (|Δbody| + |Δcomplexity| + |Δsourness| + |Δsweetness| + bubbles)
//!   + 2.5 * |descriptors Δ|
//!   + 2.0 * |base spirits Δ|
//!   + 1.5 * |liqueurs Δ|
//!   + 1.0 * |ingredients Δ|
//! ```
//!
//! A missing list or taste dimension counts as a fixed penalty of 5 before
//! weighting.

pub mod distance;
pub mod explain;
pub mod explorer;
pub mod rank;
pub mod score;
pub mod weights;

// Re-export main types for convenience
pub use distance::{
    bubble_distance, canonical_set, profile_distance, set_distance, taste_distance, CanonicalName,
};
pub use explain::{ExplainedMatch, MatchResponse, RankingStats};
pub use explorer::{ExplorerQuery, SLIDER_MAX, SLIDER_MIN};
pub use rank::{
    explore, find_twists, rank_by_distance, top_matches, RankOptions, RankedCocktail, Ranker,
    DEFAULT_TWIST_LIMIT,
};
pub use score::{DistanceBreakdown, Scorer};
pub use weights::{
    Component, DistanceWeights, WeightsError, BASE_SPIRIT_WEIGHT, DESCRIPTOR_WEIGHT,
    INGREDIENT_WEIGHT, LIQUEUR_WEIGHT, MALFORMED_SET_PENALTY, MOCKTAIL_MISMATCH_DISTANCE,
    TASTE_WEIGHT,
};
