//! Login page: username + password against `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_auth;

/// Both fields are sent exactly as typed.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.login(&username_value, &password_value).await {
                    Ok(_) => {
                        info.set(String::new());
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => info.set(err.user_message()),
                }
                password.set(String::new());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth, &navigate, username_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
