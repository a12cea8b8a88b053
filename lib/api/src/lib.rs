//! # Shaker API
//!
//! REST surface over a loaded cocktail catalog.
//!
//! | Method | Path                          | Description                          |
//! |--------|-------------------------------|--------------------------------------|
//! | GET    | `/health`                     | Liveness and catalog size            |
//! | GET    | `/cocktails`                  | Full catalog                         |
//! | GET    | `/cocktails/{name}`           | One cocktail by name                 |
//! | GET    | `/cocktails/{name}/twists`    | Closest twists (`?limit=10`)         |
//! | POST   | `/explore`                    | Rank against explorer preferences    |
//! | POST   | `/distance`                   | Distance breakdown between two names |

pub mod error;
pub mod rest;

pub use error::ApiError;
pub use rest::{routes, AppState, RestApi};
