//! # Shaker Core
//!
//! Core model for the Shaker cocktail similarity engine.
//!
//! This crate provides the data types the engine compares:
//!
//! - [`Cocktail`] - A catalog entry with flavor profile, descriptors and ingredients
//! - [`FlavorProfile`] - Taste dimensions, booziness and bubbles
//! - [`Ingredient`] - A bare ingredient name or a structured, measured entry
//! - [`LocalizedText`] - English text with translations
//! - [`Catalog`] - The cocktail list a query is ranked against
//!
//! Catalog records are read leniently: a missing or mistyped field becomes
//! `None` rather than failing the record (see [`lenient`]).
//!
//! ## Example
//!
//! ```rust
//! use shaker_core::{Catalog, Cocktail, FlavorProfile};
//!
//! let negroni = Cocktail::new("Negroni")
//!     .with_profile(FlavorProfile::new(4.0, 4.0, 1.0, 3.0, 4.0))
//!     .with_base_spirits(["Gin"])
//!     .with_liqueurs(["Campari"]);
//!
//! let catalog = Catalog::new(vec![negroni]);
//! assert!(catalog.find_by_name("negroni").is_some());
//! ```

pub mod catalog;
pub mod cocktail;
pub mod error;
pub mod ingredient;
pub mod lenient;
pub mod profile;
pub mod text;

pub use catalog::{find_by_name, Catalog};
pub use cocktail::Cocktail;
pub use error::{Error, Result};
pub use ingredient::{Amount, Ingredient, StructuredIngredient};
pub use profile::{FlavorProfile, TasteDimension};
pub use text::LocalizedText;
