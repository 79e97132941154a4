use smart_recipe_shared::{Recipe, RecipeKey};
use tracing::{debug, error, warn};

use crate::{ImportError, StorageBackend};

/// Storage slot holding the serialized collection.
pub const SAVED_RECIPES_KEY: &str = "smart-recipe-saved-recipes";

/// Saved recipe collection. No two entries share a [`RecipeKey`].
///
/// The in-memory list is authoritative: persistence failures are logged and
/// the session carries on with the state it has.
pub struct SavedRecipes<S> {
    backend: S,
    recipes: Vec<Recipe>,
}

impl<S: StorageBackend> SavedRecipes<S> {
    /// Read the persisted collection. An unreadable or malformed slot yields
    /// an empty collection.
    pub fn load(backend: S) -> Self {
        let recipes = match backend.get(SAVED_RECIPES_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<Recipe>>(&text) {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed saved recipes");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Failed to read saved recipes");
                Vec::new()
            }
        };

        debug!(count = recipes.len(), "Loaded saved recipes");

        Self { backend, recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn count(&self) -> usize {
        self.recipes.len()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn is_recipe_saved(&self, recipe: &Recipe) -> bool {
        let key = recipe.key();
        self.recipes.iter().any(|saved| saved.key() == key)
    }

    /// Toggle membership: removes every entry sharing the recipe's key, or
    /// appends the recipe when none does. Returns whether it is now saved.
    pub fn save_recipe(&mut self, recipe: Recipe) -> bool {
        let key = recipe.key();
        let before = self.recipes.len();
        self.recipes.retain(|saved| saved.key() != key);

        let saved = self.recipes.len() == before;
        if saved {
            self.recipes.push(recipe);
        }

        self.persist();
        saved
    }

    /// Remove every entry matching `key`: by id equality for [`RecipeKey::Id`],
    /// by title equality for [`RecipeKey::Title`]. Returns how many were removed.
    pub fn remove_recipe(&mut self, key: &RecipeKey) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|saved| match key {
            RecipeKey::Id(id) => saved.id != Some(*id),
            RecipeKey::Title(title) => saved.title != *title,
        });

        let removed = before - self.recipes.len();
        self.persist();
        removed
    }

    pub fn clear_all(&mut self) {
        self.recipes.clear();
        self.persist();
    }

    /// Pretty-printed JSON array of the collection.
    pub fn export(&self) -> String {
        serde_json::to_string_pretty(&self.recipes).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize saved recipes");
            "[]".to_owned()
        })
    }

    /// Replace the whole collection with a JSON array of recipes.
    /// On error the collection is unchanged.
    pub fn import(&mut self, text: &str) -> Result<usize, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
        if !value.is_array() {
            return Err(ImportError::NotASequence);
        }
        let recipes: Vec<Recipe> =
            serde_json::from_value(value).map_err(ImportError::InvalidRecipe)?;

        self.recipes = recipes;
        self.persist();
        Ok(self.recipes.len())
    }

    fn persist(&mut self) {
        let text = match serde_json::to_string(&self.recipes) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Failed to serialize saved recipes");
                return;
            }
        };

        if let Err(e) = self.backend.set(SAVED_RECIPES_KEY, &text) {
            error!(error = %e, "Failed to persist saved recipes");
        }
    }
}
