// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, storage keys, legacy field aliases and display defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Constants module
//!
//! Constants are grouped by domain. The legacy field alias tables live here so the
//! normalizer and the plan models read from a single source.

/// Service identity
pub mod service_names {
    /// Name reported in logs and the CLI banner
    pub const VITALFLOW_CLIENT: &str = "vitalflow-client";
}

/// Backend defaults
pub mod defaults {
    /// Default backend base URL
    pub const API_URL: &str = "http://localhost:4080";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Page size used by the recipe catalog
    pub const CATALOG_PAGE_SIZE: u32 = 30;
    /// Page size used when listing challenges
    pub const CHALLENGE_PAGE_SIZE: u32 = 12;
    /// Challenge duration when the backend omits it
    pub const CHALLENGE_DURATION_DAYS: u32 = 7;
    /// Challenge reward when the backend omits it
    pub const CHALLENGE_REWARD_POINTS: u32 = 10;
}

/// REST endpoint paths, relative to the configured base URL
pub mod endpoints {
    /// Plans owned by the current user
    pub const MY_PLANS: &str = "/api/plans/me";
    /// Ask the backend to generate a new AI plan
    pub const GENERATE_PLAN: &str = "/api/plans/generate";
    /// Nutritionist plan review list (mounted outside `/api` by the backend)
    pub const REVIEW_PLANS: &str = "/plans";
    /// Recipe collection
    pub const RECIPES: &str = "/api/recipes";
    /// Bulk recipe lookup by comma-joined ids
    pub const RECIPES_BULK: &str = "/api/recipes/bulk";
    /// Recipes authored by the current user
    pub const MY_RECIPES: &str = "/api/recipes/me";
    /// Server-side favorites of the current user
    pub const MY_FAVORITES: &str = "/api/recipes/favorites/me";
    /// Challenge collection
    pub const CHALLENGES: &str = "/api/challenges";
    /// Challenges the current user is taking part in
    pub const MY_ACTIVE_CHALLENGES: &str = "/api/challenges/me/active";
    /// Challenges the current user finished
    pub const MY_COMPLETED_CHALLENGES: &str = "/api/challenges/me/completed";
    /// Profile of the current user; `PATCH` with JSON updates it
    pub const MY_PROFILE: &str = "/api/user/me";
    /// Multipart profile update carrying an avatar
    pub const PROFILE_WITH_AVATAR: &str = "/api/user/profile";
    /// Submit an application to become a nutritionist
    pub const NUTRITIONIST_REQUEST: &str = "/api/nutriologo/request";
    /// The current user's nutritionist application
    pub const MY_NUTRITIONIST_REQUEST: &str = "/api/nutriologo/request/me";
}

/// Local persistence
pub mod storage {
    /// Key under which the favorites id list is persisted
    pub const FAVORITES_KEY: &str = "vf_fav_recipes";
    /// Application directory name under the platform data dir
    pub const APP_DIR: &str = "vitalflow";
}

/// Field names observed across backend schema iterations
pub mod fields {
    /// Recipe identifier keys, in lookup order
    pub const RECIPE_ID: &[&str] = &["_id", "id"];
    /// Keys identifying a recipe inside a `suggestedRecipes` entry
    pub const SUGGESTED_RECIPE_ID: &[&str] = &["_id", "id", "recipeId", "recetaId"];
    /// Keys holding the ingredient list of a recipe
    pub const INGREDIENT_LISTS: &[&str] = &[
        "ingredients",
        "ingredientes",
        "ingredientsList",
        "ingredientsArray",
    ];
    /// Keys holding the preparation steps of a recipe, in priority order
    pub const INSTRUCTION_SOURCES: &[&str] = &[
        "instructions",
        "steps",
        "pasos",
        "instruction",
        "pasos_de_preparacion",
        "method",
    ];
    /// Keys holding the text of a single step object
    pub const STEP_TEXT: &[&str] = &["text", "step", "instruction", "description"];
    /// Keys under which a meal slot embeds a recipe snippet
    pub const EMBEDDED_RECIPE: &[&str] = &["receta", "receta_embebida", "recipe"];
    /// Favorite counter keys on a recipe card
    pub const FAVORITE_COUNT: &[&str] = &["favoriteCount", "favoritesCount", "likes"];
}

/// Display defaults for meal cards
pub mod display {
    /// Title shown when neither the slot nor the recipe carries one
    pub const DEFAULT_MEAL_TITLE: &str = "Receta generada para este horario";
    /// Description shown when the recipe has none
    pub const DEFAULT_MEAL_DESCRIPTION: &str =
        "Receta generada automáticamente para este horario.";
    /// Prefix of synthesized recipe map keys for snippets without an id
    pub const EMBEDDED_KEY_PREFIX: &str = "embedded";
}
