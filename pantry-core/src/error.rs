use thiserror::Error;

/// Failure modes of the generate operation.
///
/// Exactly two kinds: the caller sent no ingredients, or the completion
/// service let us down. The Display strings double as the client-facing
/// error payloads; upstream detail is logged server-side only.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Ingredients are required")]
    MissingIngredients,

    #[error("Failed to generate recipes")]
    Upstream(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_stays_generic() {
        let err = GenerateError::Upstream(anyhow::anyhow!("connection refused to 10.0.0.1"));
        assert_eq!(err.to_string(), "Failed to generate recipes");
    }

    #[test]
    fn upstream_keeps_its_source() {
        use std::error::Error as _;
        let err = GenerateError::Upstream(anyhow::anyhow!("boom"));
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}
