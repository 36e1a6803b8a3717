use contracts::domain::a001_product::aggregate::ProductListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_product::api;
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn ProductList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let items = RwSignal::new(Vec::<ProductListItem>::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(true);

    let token = auth_state.get_untracked().access_token;
    spawn_local(async move {
        match api::fetch_products(token.as_deref()).await {
            Ok(list) => {
                let _ = items.try_set(list);
            }
            Err(e) => {
                log::warn!("product list failed: {}", e);
                let _ = error.try_set(Some(format!("Error al cargar productos: {}", e)));
            }
        }
        let _ = is_loading.try_set(false);
    });

    view! {
        <section class="product-list">
            <div class="page-header">
                <h2>{icon("products")}" Productos"</h2>
                <A href="/products/new" attr:class="button button--primary">
                    {icon("plus")}
                    <span>"Nuevo producto"</span>
                </A>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Cargando..."</div> }
            >
                <Show
                    when=move || !items.with(|v| v.is_empty())
                    fallback=|| view! { <p class="empty">"Todavía no hay productos."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Nombre"</th>
                                <th>"Descripción"</th>
                                <th class="table__cell--money">"Precio"</th>
                                <th>"Creado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|item| item.id.clone()
                                children=|item| {
                                    let created = format_datetime(&item.created_at);
                                    view! {
                                        <tr>
                                            <td><img class="product-list__thumb" src=api_url(&item.image_url) alt=item.name.clone()/></td>
                                            <td>{item.name}</td>
                                            <td>{item.description}</td>
                                            <td class="table__cell--money">{item.price}</td>
                                            <td>{created}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
