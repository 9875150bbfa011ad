uniffi::setup_scaffolding!();

pub mod catalog;
pub mod ffi;
pub mod import;
pub mod model;
pub mod store;

pub use catalog::{Catalog, CatalogError, RecipeSummary};
pub use import::{
    import_recipe, parse_plan, parse_recipe, GeneratedRecipe, ImportError, RecipePlanList,
};
pub use model::*;
pub use store::{recipe_key, save_recipe, MemoryStore, StateStore, StoreError};
