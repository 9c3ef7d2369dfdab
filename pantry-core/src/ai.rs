//! Recipe generation against the completion service
//!
//! One upstream call per submission: fixed prompts, fixed sampling, the
//! raw completion text handed back unparsed. Splitting into the two
//! options is the presentation layer's concern.

use crate::error::GenerateError;
use crate::openrouter::{self, ChatRequest, Message};
use tracing::info;

/// LLM model used for recipe generation
const MODEL: &str = "openai/gpt-4o-mini";

/// Sampling temperature; high enough that the two options actually
/// diverge in style
const TEMPERATURE: f32 = 0.8;

/// Maximum tokens for the two-recipe completion
const MAX_COMPLETION_TOKENS: u32 = 1500;

/// Fixed instruction telling the model to produce exactly two labeled,
/// differently-styled recipes
const SYSTEM_PROMPT: &str = "You are a helpful chef that creates recipes based on available \
    ingredients. Create TWO different recipes using the same ingredients. Make them distinctly \
    different in style or cuisine. Provide recipes in a clear format with sections for \
    ingredients (with measurements) and instructions. Keep recipes practical and easy to \
    follow. Label them as 'Recipe Option 1:' and 'Recipe Option 2:'.";

fn build_user_prompt(ingredients: &str) -> String {
    format!(
        "Create two different recipes using these ingredients: {ingredients}. You can suggest \
         additional basic ingredients (salt, pepper, oil, etc.) if needed. Make the recipes \
         different in style or cuisine type."
    )
}

/// Generate two alternative recipes for the given ingredients.
///
/// Fails fast with [`GenerateError::MissingIngredients`] on blank input;
/// every upstream problem (network, API status, empty choices) comes back
/// as [`GenerateError::Upstream`].
pub async fn generate_recipes(ingredients: &str, api_key: &str) -> Result<String, GenerateError> {
    use std::time::Instant;

    let ingredients = ingredients.trim();
    if ingredients.is_empty() {
        return Err(GenerateError::MissingIngredients);
    }

    let request = ChatRequest::new(
        MODEL,
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_user_prompt(ingredients)),
        ],
    )
    .temperature(TEMPERATURE)
    .max_tokens(MAX_COMPLETION_TOKENS);

    let start = Instant::now();
    let response = openrouter::chat_completion(&request, api_key).await?;
    let content = response.content_or_err()?;
    let duration_ms = start.elapsed().as_millis();

    info!(
        model = %MODEL,
        chars = content.len(),
        duration_ms = %duration_ms,
        "Recipe completion finished"
    );

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RECIPE_ONE_MARKER, RECIPE_TWO_MARKER};

    #[test]
    fn user_prompt_embeds_the_ingredients_verbatim() {
        let prompt = build_user_prompt("chicken, rice, tomatoes, onions");
        assert!(prompt.contains("chicken, rice, tomatoes, onions"));
    }

    #[test]
    fn system_prompt_requests_both_labels() {
        assert!(SYSTEM_PROMPT.contains(RECIPE_ONE_MARKER));
        assert!(SYSTEM_PROMPT.contains(RECIPE_TWO_MARKER));
    }

    #[tokio::test]
    async fn blank_ingredients_fail_before_any_upstream_call() {
        // An obviously invalid key: validation must reject first
        let result = generate_recipes("   \n ", "invalid-key").await;
        assert!(matches!(result, Err(GenerateError::MissingIngredients)));
    }
}
