// ABOUTME: Profile commands for vitalflow-cli: show, edit, onboarding and nutritionist applications
// ABOUTME: Edits start from the stored profile so only the given flags change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use vitalflow::models::{push_tag, Goal, UserProfile};
use vitalflow::profile::{Attachment, NutritionistApplication};

use super::CliContext;
use crate::helpers::display;

/// Profile fields accepted on the command line
pub struct ProfileInput {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub diets: Vec<String>,
    pub allergies: Vec<String>,
    pub dislikes: Vec<String>,
    pub favourite_ingredients: Vec<String>,
}

impl ProfileInput {
    fn apply(self, profile: &mut UserProfile) -> Result<()> {
        if let Some(name) = self.name {
            profile.name = Some(name);
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(raw) = self.birth_date {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => profile.birth_date = Some(date),
                Err(_) => bail!("Fecha inválida '{raw}', usa AAAA-MM-DD"),
            }
        }
        if self.height_cm.is_some() {
            profile.height_cm = self.height_cm;
        }
        if self.weight_kg.is_some() {
            profile.weight_kg = self.weight_kg;
        }
        if self.target_weight_kg.is_some() {
            profile.target_weight_kg = self.target_weight_kg;
        }
        if let Some(level) = self.activity_level {
            profile.activity_level = Some(level);
        }
        if let Some(goal) = self.goal {
            profile.goal = parse_goal(&goal)?;
        }
        for (tags, added) in [
            (&mut profile.diets, self.diets),
            (&mut profile.allergies, self.allergies),
            (&mut profile.dislikes, self.dislikes),
            (&mut profile.favourite_ingredients, self.favourite_ingredients),
        ] {
            for tag in added {
                push_tag(tags, &tag);
            }
        }
        Ok(())
    }
}

fn parse_goal(raw: &str) -> Result<Goal> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())).map_err(|_| {
        anyhow!("Objetivo desconocido '{raw}' (perder_peso, mantener, ganar_masa, mejorar_salud)")
    })
}

/// Show the signed-in user's profile
pub async fn show(ctx: &CliContext) -> Result<()> {
    let profile = ctx.client.profile().await?;
    display::print_profile(&profile);
    Ok(())
}

/// Edit the profile, optionally uploading a new avatar
pub async fn edit(ctx: &CliContext, input: ProfileInput, avatar: Option<PathBuf>) -> Result<()> {
    let mut profile = ctx.client.profile().await?;
    input.apply(&mut profile)?;
    let saved = match avatar {
        Some(path) => {
            let avatar = Attachment::from_path(&path).await?;
            ctx.client.update_profile_with_avatar(&profile, &avatar).await?
        }
        None => ctx.client.update_profile(&profile).await?,
    };
    println!("Perfil actualizado correctamente");
    display::print_profile(&saved);
    Ok(())
}

/// Answer the onboarding questionnaire
pub async fn onboard(ctx: &CliContext, input: ProfileInput) -> Result<()> {
    let mut profile = ctx.client.profile().await?;
    input.apply(&mut profile)?;
    let onboarded = ctx.client.complete_onboarding(&profile).await?;
    match onboarded.first_name() {
        Some(name) => println!("¡Bienvenido a VitalFlow, {name}!"),
        None => println!("¡Bienvenido a VitalFlow!"),
    }
    Ok(())
}

/// Show the status of the nutritionist application
pub async fn request_status(ctx: &CliContext) -> Result<()> {
    match ctx.client.my_nutritionist_request().await? {
        Some(request) => display::print_nutritionist_request(&request),
        None => println!("Aún no has enviado una solicitud."),
    }
    Ok(())
}

/// Apply to become a nutritionist
pub async fn apply(
    ctx: &CliContext,
    application: &NutritionistApplication,
    certificate: &Path,
    cv: Option<&Path>,
) -> Result<()> {
    let certificate = Attachment::from_path(certificate).await?;
    let cv = match cv {
        Some(path) => Some(Attachment::from_path(path).await?),
        None => None,
    };
    let request = ctx
        .client
        .submit_nutritionist_request(application, &certificate, cv.as_ref())
        .await?;
    println!("Solicitud enviada correctamente. Te notificaremos cuando sea revisada.");
    display::print_nutritionist_request(&request);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn empty_input() -> ProfileInput {
        ProfileInput {
            name: None,
            bio: None,
            birth_date: None,
            height_cm: None,
            weight_kg: None,
            target_weight_kg: None,
            activity_level: None,
            goal: None,
            diets: Vec::new(),
            allergies: Vec::new(),
            dislikes: Vec::new(),
            favourite_ingredients: Vec::new(),
        }
    }

    #[test]
    fn test_apply_keeps_unspecified_fields() {
        let mut profile = UserProfile {
            weight_kg: Some(70.0),
            diets: vec!["vegana".to_owned()],
            ..UserProfile::default()
        };
        let input = ProfileInput {
            goal: Some("Ganar_Masa".to_owned()),
            diets: vec!["Vegana".to_owned(), "keto".to_owned()],
            ..empty_input()
        };
        input.apply(&mut profile).unwrap();
        assert_eq!(profile.weight_kg, Some(70.0));
        assert_eq!(profile.goal, Goal::GanarMasa);
        assert_eq!(profile.diets, vec!["vegana", "keto"]);
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut profile = UserProfile::default();
        let input = ProfileInput {
            birth_date: Some("02/03/1994".to_owned()),
            ..empty_input()
        };
        assert!(input.apply(&mut profile).is_err());
        assert!(parse_goal("volar").is_err());
    }
}
