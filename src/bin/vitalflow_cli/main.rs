// ABOUTME: VitalFlow CLI - command-line front end for plans, recipes, favorites, challenges and profiles
// ABOUTME: Parses arguments with clap, loads configuration from the environment and dispatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow
//!
//! Usage:
//! ```bash
//! # Show the current plan, only dinners containing "sopa"
//! vitalflow-cli plan show --meal cena --search sopa
//!
//! # Browse vegan recipes under 500 kcal
//! vitalflow-cli recipes list --diet vegana --max-kcal 500
//!
//! # Toggle a favorite and list favorites
//! vitalflow-cli favorites toggle 665f1c2ab9
//! vitalflow-cli favorites list
//!
//! # Mark today's progress in a challenge
//! vitalflow-cli challenges mark 66a0d3
//!
//! # Update the profile and apply as a nutritionist
//! vitalflow-cli profile edit --weight-kg 62.5 --allergy nuez
//! vitalflow-cli nutritionist apply --full-name "Laura Ruiz" --certificate cedula.pdf ...
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use vitalflow::config::ClientConfig;
use vitalflow::constants::service_names;
use vitalflow::logging::LoggingConfig;
use vitalflow::profile::NutritionistApplication;

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "vitalflow-cli",
    about = "VitalFlow nutrition client",
    long_about = "Command-line front end for VitalFlow meal plans, recipes, favorites and challenges."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token override
    #[arg(long, global = true)]
    token: Option<String>,

    /// Keep favorites on the server instead of the local file
    #[arg(long, global = true)]
    server_favorites: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Meal plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Recipe catalog and authoring commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Favorite recipe commands
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// Community challenge commands
    Challenges {
        #[command(subcommand)]
        action: ChallengeCommand,
    },

    /// Profile and onboarding commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Nutritionist application commands
    Nutritionist {
        #[command(subcommand)]
        action: NutritionistCommand,
    },

    /// Print the effective configuration
    Config,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Show the current plan
    Show {
        /// Meal name filter ("desayuno", "cena"); `all` shows every meal
        #[arg(long, default_value = "all")]
        meal: String,

        /// Recipe title search
        #[arg(long)]
        search: Option<String>,
    },

    /// Generate a new AI plan and show it
    Generate,

    /// List plans awaiting nutritionist review
    Review {
        /// Status filter (pending_review, approved, rejected, active, all)
        #[arg(long, default_value = "all")]
        status: String,

        /// Search over patient name, email, goal and diet
        #[arg(long)]
        search: Option<String>,
    },

    /// Approve a plan
    Approve {
        /// Plan id
        plan_id: String,

        /// Reviewer notes
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Catalog filter flags
#[derive(Args)]
struct CatalogArgs {
    /// Free text search
    #[arg(long)]
    q: Option<String>,

    /// Category
    #[arg(long)]
    category: Option<String>,

    /// Diet
    #[arg(long)]
    diet: Option<String>,

    /// Maximum kcal
    #[arg(long)]
    max_kcal: Option<u32>,

    /// Only locally sourced recipes
    #[arg(long)]
    local: bool,

    /// Sort key understood by the backend
    #[arg(long)]
    sort: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    page: u32,
}

/// Recipe authoring flags
#[derive(Args)]
struct DraftArgs {
    /// Title
    #[arg(long)]
    title: Option<String>,

    /// Description
    #[arg(long)]
    description: Option<String>,

    /// Kcal per serving
    #[arg(long)]
    kcal: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    duration_min: Option<String>,

    /// Servings
    #[arg(long)]
    servings: Option<String>,

    /// Diet label, repeatable
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Category label, repeatable
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Tag, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Ingredient as `name[:amount[:unit]]`, repeatable
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Preparation step, repeatable
    #[arg(long = "step")]
    steps: Vec<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Browse the recipe catalog
    List(CatalogArgs),

    /// Show one recipe
    Show {
        /// Recipe id
        recipe_id: String,
    },

    /// List recipes authored by the current user
    Mine,

    /// Create a recipe
    Create(DraftArgs),

    /// Edit a recipe; only the given fields change
    Edit {
        /// Recipe id
        recipe_id: String,

        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        recipe_id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoriteCommand {
    /// List favorite recipes
    List,

    /// Add or remove a favorite
    Toggle {
        /// Recipe id
        recipe_id: String,
    },

    /// Fetch favorite recipes missing from the current plan
    Hydrate,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ChallengeCommand {
    /// List challenges
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Join a challenge
    Join {
        /// Challenge id
        challenge_id: String,
    },

    /// Leave a challenge
    Leave {
        /// Challenge id
        challenge_id: String,
    },

    /// Mark today as done
    Mark {
        /// Challenge id
        challenge_id: String,
    },

    /// Show my active and completed challenges
    Mine,
}

/// Profile flags; only the given ones change
#[derive(Args)]
struct ProfileArgs {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Short biography
    #[arg(long)]
    bio: Option<String>,

    /// Birth date as YYYY-MM-DD
    #[arg(long)]
    birth_date: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    height_cm: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Target weight in kilograms
    #[arg(long)]
    target_weight_kg: Option<f64>,

    /// Activity level (low, moderate, high)
    #[arg(long)]
    activity_level: Option<String>,

    /// Goal (perder_peso, mantener, ganar_masa, mejorar_salud)
    #[arg(long)]
    goal: Option<String>,

    /// Diet, repeatable
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Allergy, repeatable
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Disliked food, repeatable
    #[arg(long = "dislike")]
    dislikes: Vec<String>,

    /// Favourite ingredient, repeatable
    #[arg(long = "favourite")]
    favourite_ingredients: Vec<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show my profile
    Show,

    /// Edit my profile
    Edit {
        #[command(flatten)]
        profile: ProfileArgs,

        /// New avatar image
        #[arg(long)]
        avatar: Option<PathBuf>,
    },

    /// Complete the onboarding questionnaire
    Onboard(ProfileArgs),
}

/// Nutritionist application flags
#[derive(Args)]
struct ApplicationArgs {
    /// Full name
    #[arg(long)]
    full_name: String,

    /// Phone
    #[arg(long)]
    phone: String,

    /// City
    #[arg(long)]
    city: String,

    /// Professional license number
    #[arg(long)]
    professional_id: String,

    /// Degree title
    #[arg(long)]
    degree: String,

    /// University
    #[arg(long)]
    university: String,

    /// Years of experience
    #[arg(long)]
    years_experience: Option<String>,

    /// Specialty, repeatable
    #[arg(long = "specialty")]
    specialties: Vec<String>,

    /// Main workplace
    #[arg(long)]
    main_workplace: Option<String>,

    /// Attendance modality
    #[arg(long)]
    modalities: Option<String>,

    /// Website
    #[arg(long)]
    website: Option<String>,

    /// Instagram handle
    #[arg(long)]
    instagram: Option<String>,

    /// Notes for the reviewer
    #[arg(long)]
    notes: Option<String>,

    /// Certificate (PDF or image)
    #[arg(long)]
    certificate: PathBuf,

    /// Curriculum vitae
    #[arg(long)]
    cv: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NutritionistCommand {
    /// Show my application status
    Status,

    /// Apply to become a nutritionist
    Apply(ApplicationArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url)?;
    }
    if let Some(token) = cli.token {
        config = config.with_token(token);
    }
    info!(service = service_names::VITALFLOW_CLIENT, api_url = %config.api_url, "Starting");

    if matches!(cli.command, Command::Config) {
        println!("{}", config.summary());
        return Ok(());
    }

    let ctx = CliContext::new(config, cli.server_favorites)?;

    match cli.command {
        Command::Plan { action } => match action {
            PlanCommand::Show { meal, search } => {
                commands::plan::show(&ctx, meal, search.unwrap_or_default()).await?;
            }
            PlanCommand::Generate => commands::plan::generate(&ctx).await?,
            PlanCommand::Review { status, search } => {
                commands::plan::review(&ctx, &status, search.as_deref()).await?;
            }
            PlanCommand::Approve { plan_id, notes } => {
                commands::plan::approve(&ctx, &plan_id, notes.as_deref()).await?;
            }
        },
        Command::Recipes { action } => match action {
            RecipeCommand::List(args) => {
                let page = args.page;
                commands::recipes::list(&ctx, &args.into_filters(), page).await?;
            }
            RecipeCommand::Show { recipe_id } => commands::recipes::show(&ctx, &recipe_id).await?,
            RecipeCommand::Mine => commands::recipes::mine(&ctx).await?,
            RecipeCommand::Create(draft) => {
                commands::recipes::create(&ctx, draft.into_input()).await?;
            }
            RecipeCommand::Edit { recipe_id, draft } => {
                commands::recipes::edit(&ctx, &recipe_id, draft.into_input()).await?;
            }
            RecipeCommand::Delete { recipe_id } => {
                commands::recipes::delete(&ctx, &recipe_id).await?;
            }
        },
        Command::Favorites { action } => match action {
            FavoriteCommand::List => commands::favorites::list(&ctx).await?,
            FavoriteCommand::Toggle { recipe_id } => {
                commands::favorites::toggle(&ctx, &recipe_id).await?;
            }
            FavoriteCommand::Hydrate => commands::favorites::hydrate(&ctx).await?,
        },
        Command::Challenges { action } => match action {
            ChallengeCommand::List { page } => commands::challenges::list(&ctx, page).await?,
            ChallengeCommand::Join { challenge_id } => {
                commands::challenges::join(&ctx, &challenge_id).await?;
            }
            ChallengeCommand::Leave { challenge_id } => {
                commands::challenges::leave(&ctx, &challenge_id).await?;
            }
            ChallengeCommand::Mark { challenge_id } => {
                commands::challenges::mark(&ctx, &challenge_id).await?;
            }
            ChallengeCommand::Mine => commands::challenges::mine(&ctx).await?,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&ctx).await?,
            ProfileCommand::Edit { profile, avatar } => {
                commands::profile::edit(&ctx, profile.into_input(), avatar).await?;
            }
            ProfileCommand::Onboard(profile) => {
                commands::profile::onboard(&ctx, profile.into_input()).await?;
            }
        },
        Command::Nutritionist { action } => match action {
            NutritionistCommand::Status => commands::profile::request_status(&ctx).await?,
            NutritionistCommand::Apply(args) => {
                let (application, certificate, cv) = args.into_parts();
                commands::profile::apply(&ctx, &application, &certificate, cv.as_deref()).await?;
            }
        },
        Command::Config => {}
    }

    Ok(())
}

impl CatalogArgs {
    fn into_filters(self) -> vitalflow::recipes::CatalogFilters {
        vitalflow::recipes::CatalogFilters {
            q: self.q.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            diet: self.diet.unwrap_or_default(),
            max_kcal: self.max_kcal,
            local: self.local,
            sort: self.sort.unwrap_or_default(),
        }
    }
}

impl DraftArgs {
    fn into_input(self) -> commands::recipes::DraftInput {
        commands::recipes::DraftInput {
            title: self.title,
            description: self.description,
            kcal: self.kcal,
            duration_min: self.duration_min,
            servings: self.servings,
            diets: self.diets,
            categories: self.categories,
            tags: self.tags,
            ingredients: self.ingredients,
            steps: self.steps,
        }
    }
}

impl ProfileArgs {
    fn into_input(self) -> commands::profile::ProfileInput {
        commands::profile::ProfileInput {
            name: self.name,
            bio: self.bio,
            birth_date: self.birth_date,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            target_weight_kg: self.target_weight_kg,
            activity_level: self.activity_level,
            goal: self.goal,
            diets: self.diets,
            allergies: self.allergies,
            dislikes: self.dislikes,
            favourite_ingredients: self.favourite_ingredients,
        }
    }
}

impl ApplicationArgs {
    fn into_parts(self) -> (NutritionistApplication, PathBuf, Option<PathBuf>) {
        let defaults = NutritionistApplication::default();
        let mut application = NutritionistApplication {
            full_name: self.full_name,
            phone: self.phone,
            city: self.city,
            notes: self.notes.unwrap_or_default(),
            professional_id: self.professional_id,
            degree: self.degree,
            university: self.university,
            years_experience: self.years_experience.unwrap_or_default(),
            specialties: Vec::new(),
            main_workplace: self.main_workplace.unwrap_or_default(),
            modalities: self.modalities.unwrap_or(defaults.modalities),
            website: self.website.unwrap_or_default(),
            instagram: self.instagram.unwrap_or_default(),
        };
        for specialty in &self.specialties {
            application.add_specialty(specialty);
        }
        (application, self.certificate, self.cv)
    }
}
