//! Registration page. A successful registration does not sign in; the user
//! is sent to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_auth;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = auth.register(&registration.username, &registration.email, &registration.password).await;
                busy.set(false);
                match result {
                    Ok(()) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(err) => info.set(err.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&auth, &navigate, registration);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
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
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
