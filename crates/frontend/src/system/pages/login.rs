use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::{api, context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = context::use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    context::complete_login(set_auth_state, response.access_token, response.user);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let _ = error_message.try_set(Some(e));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Tienda"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Input
                        id="username"
                        label="Usuario"
                        placeholder="admin"
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                        autocomplete="username"
                        required=true
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <Input
                        id="password"
                        label="Contraseña"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        autocomplete="current-password"
                        required=true
                        disabled=Signal::derive(move || is_loading.get())
                    />

                    <Button button_type="submit" loading=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
