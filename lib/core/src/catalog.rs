use crate::cocktail::Cocktail;
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// An in-memory cocktail catalog, loaded once and read by every query
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cocktails: Vec<Cocktail>,
}

impl Catalog {
    pub fn new(cocktails: Vec<Cocktail>) -> Self {
        Self { cocktails }
    }

    /// Parse a catalog from JSON.
    ///
    /// Accepts either a top-level array of cocktails or an object with a
    /// `cocktails` array. Entries that cannot be read at all (no usable
    /// name) are skipped with a warning; partially malformed entries are
    /// kept.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let entries = match root {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("cocktails") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(Error::InvalidCatalog(
                        "expected a 'cocktails' array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(Error::InvalidCatalog(
                    "expected an array or an object".to_string(),
                ))
            }
        };

        let total = entries.len();
        let mut cocktails = Vec::with_capacity(total);
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Cocktail>(entry) {
                Ok(cocktail) if !cocktail.name.is_blank() => {
                    if !cocktail.is_well_formed() {
                        debug!("Cocktail '{}' has malformed fields", cocktail.name);
                    }
                    cocktails.push(cocktail);
                }
                Ok(_) => warn!("Skipping catalog entry {}: blank name", idx),
                Err(e) => warn!("Skipping catalog entry {}: {}", idx, e),
            }
        }

        info!("Loaded {} of {} catalog entries", cocktails.len(), total);
        Ok(Self { cocktails })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading catalog from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[inline]
    pub fn cocktails(&self) -> &[Cocktail] {
        &self.cocktails
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cocktails.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cocktails.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cocktail> {
        self.cocktails.iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Cocktail> {
        find_by_name(&self.cocktails, name)
    }

    /// Like [`Catalog::find_by_name`] but reports a miss as an error
    pub fn get(&self, name: &str) -> Result<&Cocktail> {
        self.find_by_name(name)
            .ok_or_else(|| Error::CocktailNotFound(name.to_string()))
    }
}

impl From<Vec<Cocktail>> for Catalog {
    fn from(cocktails: Vec<Cocktail>) -> Self {
        Self::new(cocktails)
    }
}

impl AsRef<[Cocktail]> for Catalog {
    fn as_ref(&self) -> &[Cocktail] {
        &self.cocktails
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Cocktail;
    type IntoIter = std::slice::Iter<'a, Cocktail>;

    fn into_iter(self) -> Self::IntoIter {
        self.cocktails.iter()
    }
}

/// Find the first cocktail whose name matches `name` in any language,
/// ignoring case and surrounding whitespace.
pub fn find_by_name<'a>(cocktails: &'a [Cocktail], name: &str) -> Option<&'a Cocktail> {
    cocktails.iter().find(|c| c.name.matches(name))
}
