use leptos::prelude::*;

/// One recipe as a clickable card
///
/// The parent owns the selection state; the card only reports clicks on
/// its index through `on_select`. The body is rendered verbatim, the
/// completion text is never parsed beyond the option split.
#[component]
pub fn RecipeCard(
    index: usize,
    title: &'static str,
    body: String,
    expanded: bool,
    on_select: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div
            class=if expanded { "recipe-card expanded" } else { "recipe-card" }
            role="button"
            tabindex="0"
            on:click=move |_| on_select(index)
            on:keydown=move |e: web_sys::KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    on_select(index);
                }
            }
        >
            <h2 class="card-title">{title}</h2>
            {expanded.then(|| view! {
                <p class="collapse-hint">"(click to return to both options)"</p>
            })}
            <div class="recipe-body">{body}</div>
        </div>
    }
}
