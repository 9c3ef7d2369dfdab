//! Live integration test against the real completion service
//!
//! Run with: cargo test -p pantry-core --test generate_live -- --ignored --nocapture

use anyhow::Result;
use pantry_core::{Config, RecipePair, ai};

#[tokio::test]
#[ignore] // Requires API key, run with: cargo test --ignored
async fn generates_two_splittable_recipes() -> Result<()> {
    let config = Config::from_env()?;

    let text = ai::generate_recipes("chicken, rice, tomatoes, onions", &config.openrouter_api_key)
        .await?;

    println!("--- completion ---\n{text}\n------------------");

    let pair = RecipePair::from_completion(&text);
    assert!(
        !pair.recipe1.is_empty(),
        "first recipe missing from completion"
    );
    assert!(
        !pair.recipe2.is_empty(),
        "second recipe missing from completion"
    );

    Ok(())
}
