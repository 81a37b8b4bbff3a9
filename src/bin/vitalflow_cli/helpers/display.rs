// ABOUTME: Output formatting helpers for vitalflow-cli
// ABOUTME: Consistent text rendering of meal cards, recipes, catalog pages, challenges and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use vitalflow::challenges::ChallengeSummary;
use vitalflow::models::{
    Challenge, NutritionistRequest, Participation, Plan, Recipe, RequestStatus, UserProfile,
};
use vitalflow::plans::DayView;
use vitalflow::recipes::CatalogPage;

const RULE_WIDTH: usize = 60;

fn star(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        "☆"
    }
}

fn kcal_text(kcal: Option<f64>) -> String {
    kcal.map(|k| format!("{k:.0} kcal")).unwrap_or_default()
}

/// Plan title block
pub fn print_plan_header(plan: &Plan) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Mi plan: {}", plan.status_label());
    println!("Origen: {}", plan.source_label());
    if let Some(created) = plan.created_at {
        println!("Creado: {}", created.format("%Y-%m-%d"));
    }
    if let Some(notes) = plan.reviewer_notes.as_deref().filter(|n| !n.is_empty()) {
        println!("Notas del nutriólogo: {notes}");
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// One day with its meal cards
pub fn print_day(day: &DayView<'_>) {
    if day.meals.is_empty() {
        return;
    }
    println!("\n{}", if day.dia.is_empty() { "Día" } else { &day.dia });
    for card in &day.meals {
        println!(
            "  {} [{}] {}  {}",
            star(card.is_favorite),
            card.meal_name.as_deref().unwrap_or("Comida"),
            card.title,
            kcal_text(card.kcal)
        );
        println!("      {}", card.description);
        if let Some(recipe) = card.recipe.as_deref() {
            let names: Vec<_> = recipe.ingredients().iter().map(|i| i.name.as_str()).collect();
            if !names.is_empty() {
                println!("      Ingredientes: {}", names.join(", "));
            }
        }
    }
}

/// One line of the review list
pub fn print_review_row(plan: &Plan, is_selected: bool) {
    let owner = plan.owner.as_ref();
    let who = owner
        .and_then(|o| o.name().or_else(|| o.email()))
        .or_else(|| owner.and_then(|o| o.id()))
        .unwrap_or("Usuario");
    println!(
        "{} {:<24} {:<20} {:<24} {}",
        if is_selected { ">" } else { " " },
        plan.id.as_deref().unwrap_or("-"),
        plan.status_label(),
        who,
        plan.meta.objetivo.as_deref().unwrap_or_default()
    );
}

/// Compact recipe line
pub fn print_recipe_row(recipe: &Recipe, is_favorite: bool) {
    println!(
        "{} {:<26} {}  {}{}",
        star(is_favorite),
        recipe.id().unwrap_or_default(),
        recipe.title().unwrap_or_default(),
        kcal_text(recipe.kcal()),
        if recipe.is_local() { "  [local]" } else { "" }
    );
}

/// Full recipe detail
pub fn print_recipe(recipe: &Recipe, is_favorite: bool) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{} {}", star(is_favorite), recipe.title().unwrap_or_default());
    println!("{}", "=".repeat(RULE_WIDTH));
    if let Some(description) = recipe.description() {
        println!("{description}\n");
    }
    let mut facts = Vec::new();
    if let Some(kcal) = recipe.kcal() {
        facts.push(format!("{kcal:.0} kcal"));
    }
    if let Some(minutes) = recipe.duration_min() {
        facts.push(format!("{minutes} min"));
    }
    if let Some(servings) = recipe.servings() {
        facts.push(format!("{servings} porciones"));
    }
    facts.push(format!("{} favoritos", recipe.favorites_count()));
    println!("{}", facts.join(" · "));

    let labels: Vec<String> = recipe
        .diets()
        .into_iter()
        .chain(recipe.categories())
        .chain(recipe.tags())
        .collect();
    if !labels.is_empty() {
        println!("Etiquetas: {}", labels.join(", "));
    }

    println!("\nIngredientes:");
    for ingredient in recipe.ingredients() {
        let quantity = [ingredient.amount.as_str(), ingredient.unit.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let local = if ingredient.local { " (local)" } else { "" };
        if quantity.is_empty() {
            println!("  - {}{local}", ingredient.name);
        } else {
            println!("  - {} {}{local}", quantity, ingredient.name);
        }
    }

    println!("\nPreparación:");
    for (index, step) in recipe.instructions().iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }
}

/// Catalog page with paging info
pub fn print_catalog_page(page: &CatalogPage, active_filters: usize) {
    println!(
        "Página {} · {} recetas · {active_filters} filtros activos",
        page.page, page.total
    );
    if page.recipes.is_empty() {
        println!("No hay recetas que coincidan.");
    }
    for entry in &page.recipes {
        print_recipe_row(&entry.recipe, entry.is_favorite);
    }
}

/// One challenge
pub fn print_challenge(challenge: &Challenge, is_joined: bool) {
    println!(
        "{} {:<26} {} · {} días · {} pts{}",
        if is_joined { "✔" } else { " " },
        challenge.id.as_deref().unwrap_or("-"),
        challenge.title,
        challenge.duration_days,
        challenge.reward_points,
        if challenge.is_active { "" } else { " (inactivo)" }
    );
}

/// Totals of the user's challenges
pub fn print_challenge_summary(summary: &ChallengeSummary) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Completados: {} · Activos: {} · Racha: {} días · Puntos: {}",
        summary.completed, summary.active, summary.streak_days, summary.points
    );
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// One participation with progress
pub fn print_participation(participation: &Participation) {
    let title = participation
        .challenge_title()
        .or_else(|| participation.challenge_id())
        .unwrap_or("Reto");
    let state = if participation.finished_at.is_some() {
        "terminado".to_owned()
    } else {
        format!("racha {}", participation.streak)
    };
    println!(
        "  {title}: {}% ({} días, {state}, {} pts)",
        participation.progress_percent(),
        participation.completed_days,
        participation.total_points
    );
}

fn tag_text(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_owned()
    } else {
        tags.join(", ")
    }
}

/// Profile summary
pub fn print_profile(profile: &UserProfile) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", profile.name.as_deref().unwrap_or("Sin nombre"));
    if let Some(email) = &profile.email {
        println!("{email}");
    }
    println!("{}", "=".repeat(RULE_WIDTH));
    if let Some(birth_date) = profile.birth_date {
        println!("Nacimiento: {}", birth_date.format("%d/%m/%Y"));
    }
    let measure = |value: Option<f64>, unit: &str| {
        value.map_or_else(|| "-".to_owned(), |v| format!("{v} {unit}"))
    };
    println!(
        "Estatura: {} · Peso: {} · Objetivo: {}",
        measure(profile.height_cm, "cm"),
        measure(profile.weight_kg, "kg"),
        measure(profile.target_weight_kg, "kg")
    );
    println!(
        "Meta: {} · Actividad: {}",
        profile.goal.label(),
        profile.activity_level.as_deref().unwrap_or("-")
    );
    println!("Dietas: {}", tag_text(&profile.diets));
    println!("Alergias: {}", tag_text(&profile.allergies));
    println!("No le gusta: {}", tag_text(&profile.dislikes));
    println!("Ingredientes favoritos: {}", tag_text(&profile.favourite_ingredients));
    if !profile.onboarding_completed {
        println!("(cuestionario inicial pendiente)");
    }
}

/// Status of a nutritionist application
pub fn print_nutritionist_request(request: &NutritionistRequest) {
    let status = match request.status {
        RequestStatus::Pending => "pendiente",
        RequestStatus::Approved => "aprobada",
        RequestStatus::Rejected => "rechazada",
        RequestStatus::NeedsInfo => "requiere información",
        RequestStatus::Unknown => "desconocido",
    };
    println!("Estado de la solicitud: {status}");
    if let Some(notes) = &request.admin_notes {
        println!("Comentarios del administrador: {notes}");
    }
}
