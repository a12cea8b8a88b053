//! # Shaker
//!
//! A cocktail similarity engine: weighted flavor distance, twist finding
//! and preference exploration over a cocktail catalog.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! shaker --catalog cocktails.json serve --http-port 8080
//! curl localhost:8080/cocktails/negroni/twists?limit=5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use shaker::prelude::*;
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"name": "Negroni",
//!      "flavor_profile": {"body": 4, "complexity": 4, "sourness": 1, "sweetness": 3, "booziness": 4},
//!      "flavor_descriptors": ["Bitter"], "base_spirits": ["Gin"],
//!      "liqueurs": ["Campari"], "ingredients": ["Sweet Vermouth"]},
//!     {"name": "Boulevardier",
//!      "flavor_profile": {"body": 4, "complexity": 4, "sourness": 1, "sweetness": 3, "booziness": 4},
//!      "flavor_descriptors": ["Bitter"], "base_spirits": ["Bourbon"],
//!      "liqueurs": ["Campari"], "ingredients": ["Sweet Vermouth"]}
//! ]"#).unwrap();
//!
//! let twists = find_twists(catalog.cocktails(), "Negroni", DEFAULT_TWIST_LIMIT);
//! assert_eq!(twists[0].cocktail.name.en, "Boulevardier");
//! assert_eq!(twists[0].distance, 4.0);
//! ```
//!
//! ## Crate Structure
//!
//! - `shaker-core` - Cocktail model, lenient catalog loading
//! - `shaker-similarity` - Attribute distances, weighted scorer, ranking, explain output
//! - `shaker-api` - REST API

// Re-export core types
pub use shaker_core::{
    Amount, Catalog, Cocktail, Error, FlavorProfile, Ingredient, LocalizedText, Result,
    StructuredIngredient, TasteDimension,
};

// Re-export the engine
pub use shaker_similarity::{
    explore, find_twists, rank_by_distance, top_matches, Component, DistanceBreakdown,
    DistanceWeights, ExplainedMatch, ExplorerQuery, MatchResponse, RankOptions, RankedCocktail,
    Ranker, RankingStats, Scorer, WeightsError, DEFAULT_TWIST_LIMIT,
};

// Re-export API
pub use shaker_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        explore, find_twists, rank_by_distance, top_matches, Catalog, Cocktail, DistanceWeights,
        ExplorerQuery, FlavorProfile, Ingredient, LocalizedText, RankOptions, RankedCocktail,
        Ranker, Scorer, DEFAULT_TWIST_LIMIT,
    };
}

/// Per-attribute distance functions
pub mod distance {
    pub use shaker_similarity::distance::{
        bubble_distance, profile_distance, set_distance, taste_distance, CanonicalName,
    };
}
