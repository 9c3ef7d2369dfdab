use serde::{Deserialize, Serialize};

/// Label the completion service puts in front of the first recipe
pub const RECIPE_ONE_MARKER: &str = "Recipe Option 1:";

/// Label separating the second recipe from the first
pub const RECIPE_TWO_MARKER: &str = "Recipe Option 2:";

/// Request body for `POST /api/generate-recipe`
///
/// `ingredients` defaults to empty so a body without the field falls into
/// the same 400 path as an empty string instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub ingredients: String,
}

/// Success body: the unparsed completion text with both recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub recipes: String,
}

/// Error body for 400/500 responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The two recipes cut out of one completion blob
///
/// No structural parsing beyond the cut: each side stays an opaque text
/// blob the UI renders as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePair {
    pub recipe1: String,
    pub recipe2: String,
}

impl RecipePair {
    /// Split raw completion text at the second recipe label.
    ///
    /// The text before the label becomes `recipe1` (with the first label
    /// stripped), the text after becomes `recipe2`, both trimmed. Without
    /// a second label the whole text lands in `recipe1` and `recipe2`
    /// stays empty.
    #[must_use]
    pub fn from_completion(text: &str) -> Self {
        let (first, second) = match find_second_marker(text) {
            Some(at) => (&text[..at], &text[at + RECIPE_TWO_MARKER.len()..]),
            None => (text, ""),
        };

        let recipe1 = first.replacen(RECIPE_ONE_MARKER, "", 1).trim().to_string();
        let recipe2 = second.trim().to_string();

        Self { recipe1, recipe2 }
    }
}

/// Byte offset of the second recipe label, counting only occurrences at
/// the start of a line. A recipe body can legitimately mention the label
/// mid-sentence; such a mention must not cut the pair in half.
fn find_second_marker(text: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = text[from..].find(RECIPE_TWO_MARKER) {
        let at = from + rel;
        let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
        if text[line_start..at].trim().is_empty() {
            return Some(at);
        }
        from = at + RECIPE_TWO_MARKER.len();
    }
    None
}
