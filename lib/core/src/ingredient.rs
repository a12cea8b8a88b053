use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// An ingredient entry as it appears in a cocktail recipe.
///
/// Older catalog entries list ingredients as bare names, newer ones carry a
/// localized name with an amount and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Plain(String),
    Structured(StructuredIngredient),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredIngredient {
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Amounts are usually numeric but free text ("top up", "1 1/2") is common.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Quantity(f64),
    Text(String),
}

impl Ingredient {
    /// Create a bare-name ingredient
    pub fn plain(name: impl Into<String>) -> Self {
        Ingredient::Plain(name.into())
    }

    /// Create a structured ingredient with a measured amount
    pub fn measured(name: impl Into<LocalizedText>, amount: f64, unit: impl Into<String>) -> Self {
        Ingredient::Structured(StructuredIngredient {
            name: name.into(),
            amount: Some(Amount::Quantity(amount)),
            unit: Some(unit.into()),
        })
    }

    /// The English name of this ingredient
    pub fn english_name(&self) -> &str {
        match self {
            Ingredient::Plain(name) => name,
            Ingredient::Structured(s) => &s.name.en,
        }
    }
}

impl From<&str> for Ingredient {
    fn from(s: &str) -> Self {
        Ingredient::plain(s)
    }
}

impl From<String> for Ingredient {
    fn from(s: String) -> Self {
        Ingredient::Plain(s)
    }
}
