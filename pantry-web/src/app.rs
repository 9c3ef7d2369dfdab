use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pantry-web.css"/>
        <Title text="Pantry - AI Recipe Generator"/>
        <Meta name="description" content="Two AI-generated recipes from whatever is in your kitchen"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
