use pantry_core::GenerateError;

/// Thin layer over the core generate call, wiring in the cached config.
///
/// Presence is checked before the config lookup so a blank submission is
/// a validation error even on a server with no credential configured.
pub async fn generate_recipes(ingredients: String) -> Result<String, GenerateError> {
    if ingredients.trim().is_empty() {
        return Err(GenerateError::MissingIngredients);
    }

    let config = super::config::get()?;
    pantry_core::ai::generate_recipes(&ingredients, &config.openrouter_api_key).await
}
