use crate::domain::a001_product::ui::form::ProductForm;
use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::icons::icon;
use crate::system::auth::context::{self, use_auth};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let username = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <header class="app-header">
            <A href="/products" attr:class="app-header__brand">{icon("products")}" Tienda"</A>
            <div class="app-header__user">
                <span>{username}</span>
                <button class="button button--secondary" on:click=move |_| context::logout(set_auth_state)>
                    {icon("logout")}
                    <span>"Salir"</span>
                </button>
            </div>
        </header>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="empty">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/new") view=ProductForm />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.get().restoring
            fallback=|| view! { <div class="loading">"Cargando..."</div> }
        >
            <Show
                when=move || auth_state.get().access_token.is_some()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
