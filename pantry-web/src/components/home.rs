use crate::components::recipe_card::RecipeCard;
use leptos::prelude::*;
use pantry_core::RecipePair;

#[server]
pub async fn generate_recipes(ingredients: String) -> Result<String, ServerFnError> {
    use crate::server::ai;
    use std::time::Instant;

    let start = Instant::now();
    let result = ai::generate_recipes(ingredients).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(text) => {
            tracing::info!(
                chars = text.len(),
                duration_ms = %duration_ms,
                "Recipe generation completed"
            );
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                duration_ms = %duration_ms,
                "Recipe generation failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Next selection after a click on card `index`: clicking the expanded
/// card collapses back to the overview, anything else expands that card.
fn toggle_selection(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) { None } else { Some(index) }
}

#[component]
pub fn Home() -> impl IntoView {
    let (ingredients, set_ingredients) = signal(String::new());
    let (recipes, set_recipes) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (selected, set_selected) = signal(Option::<usize>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = ingredients.get();
        // One outstanding request at a time
        if input.trim().is_empty() || loading.get() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_recipes.set(None);

        leptos::task::spawn_local(async move {
            match generate_recipes(input).await {
                Ok(text) => {
                    set_recipes.set(Some(text));
                    set_selected.set(None);
                }
                Err(e) => {
                    set_error.set(Some(
                        "Failed to generate recipes. Please try again.".to_string(),
                    ));
                    leptos::logging::error!("API error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let select_card = move |index: usize| {
        set_selected.update(|current| *current = toggle_selection(*current, index));
    };

    view! {
        <div class="home-container">
            <header class="hero">
                <h1>"🍳 Pantry"</h1>
                <p class="tagline">"Two AI-generated recipes from whatever is in your kitchen"</p>
            </header>

            <form class="ingredients-form" on:submit=on_submit>
                <label class="ingredients-label" for="ingredients">
                    "Enter your ingredients"
                </label>
                <textarea
                    id="ingredients"
                    class="ingredients-input"
                    placeholder="e.g., chicken, rice, tomatoes, onions"
                    rows="4"
                    prop:value=ingredients
                    on:input=move |ev| set_ingredients.set(event_target_value(&ev))
                    prop:disabled=loading
                />

                <button
                    type="submit"
                    class="generate-button"
                    prop:disabled=move || loading.get() || ingredients.get().trim().is_empty()
                >
                    {move || if loading.get() {
                        "Crafting your recipes..."
                    } else {
                        "Generate recipes"
                    }}
                </button>
            </form>

            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"⚠️"</span>
                    <span>{err}</span>
                </div>
            })}

            {move || recipes.get().map(|text| {
                let pair = RecipePair::from_completion(&text);
                view! {
                    <div class=move || {
                        if selected.get().is_some() { "recipe-grid expanded" } else { "recipe-grid" }
                    }>
                        {move || {
                            let pair = pair.clone();
                            match selected.get() {
                                None => view! {
                                    <RecipeCard index=0 title="Recipe Option 1" body=pair.recipe1
                                        expanded=false on_select=select_card />
                                    <RecipeCard index=1 title="Recipe Option 2" body=pair.recipe2
                                        expanded=false on_select=select_card />
                                }.into_any(),
                                Some(0) => view! {
                                    <RecipeCard index=0 title="Recipe Option 1" body=pair.recipe1
                                        expanded=true on_select=select_card />
                                }.into_any(),
                                Some(_) => view! {
                                    <RecipeCard index=1 title="Recipe Option 2" body=pair.recipe2
                                        expanded=true on_select=select_card />
                                }.into_any(),
                            }
                        }}
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_selection;

    #[test]
    fn clicking_a_card_expands_it() {
        assert_eq!(toggle_selection(None, 0), Some(0));
        assert_eq!(toggle_selection(None, 1), Some(1));
    }

    #[test]
    fn clicking_the_expanded_card_collapses_it() {
        assert_eq!(toggle_selection(Some(0), 0), None);
        assert_eq!(toggle_selection(Some(1), 1), None);
    }

    #[test]
    fn clicking_the_other_card_switches_the_expansion() {
        assert_eq!(toggle_selection(Some(0), 1), Some(1));
    }
}
