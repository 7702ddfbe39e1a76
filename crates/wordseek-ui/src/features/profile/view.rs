//! Profile page view.
//!
//! Guests have no profile; the page redirects them to search instead of
//! fetching on their behalf.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::SessionCtx;
use crate::components::toast::Toaster;
use crate::features::profile::state::PasswordForm;
use wordseek_api_models::ProfileData;

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let session = use_context::<SessionCtx>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let profile = use_state(|| None::<ProfileData>);
    let fetch_error = use_state(|| None::<String>);
    let form = use_state(PasswordForm::default);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let (Some(session), Some(toaster)) = (session, toaster) else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing session context."}</p>
            </div>
        };
    };

    let load_profile = {
        let session = session.clone();
        let profile = profile.clone();
        let fetch_error = fetch_error.clone();
        Callback::from(move |()| {
            let session = session.clone();
            let profile = profile.clone();
            let fetch_error = fetch_error.clone();
            spawn_local(async move {
                match session.client.fetch_profile(&session.user).await {
                    Ok(data) => {
                        fetch_error.set(None);
                        profile.set(Some(data));
                    }
                    Err(err) => fetch_error.set(Some(err.to_string())),
                }
            });
        })
    };

    {
        let session = session.clone();
        let navigator = navigator.clone();
        let load_profile = load_profile.clone();
        use_effect_with_deps(
            move |_| {
                if session.is_guest() {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Search);
                    }
                } else {
                    load_profile.emit(());
                }
                || ()
            },
            (),
        );
    }

    let on_new_password = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.new_password = input.value();
                form.set(next);
            }
        })
    };

    let on_confirm = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.confirm = input.value();
                form.set(next);
            }
        })
    };

    let on_submit = {
        let session = session.clone();
        let toaster = toaster.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let load_profile = load_profile.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            if let Err(message) = form.validate() {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            saving.set(true);
            let session = session.clone();
            let toaster = toaster.clone();
            let form = form.clone();
            let saving = saving.clone();
            let load_profile = load_profile.clone();
            let new_password = form.new_password.clone();
            spawn_local(async move {
                match session
                    .client
                    .update_password(&session.user, &new_password)
                    .await
                {
                    Ok(ack) => {
                        let message = ack.trim().to_string();
                        if message.is_empty() {
                            toaster.success("Password updated");
                        } else {
                            toaster.success(message);
                        }
                        let mut next = (*form).clone();
                        next.reset();
                        form.set(next);
                        load_profile.emit(());
                    }
                    Err(err) => {
                        toaster.error(format!("Password change failed: {err}"));
                    }
                }
                saving.set(false);
            });
        })
    };

    if session.is_guest() {
        // The effect above is already navigating away.
        return html! {};
    }

    let account = match (&*profile, &*fetch_error) {
        (Some(data), _) => html! {
            <dl class="profile-details">
                <dt>{"Username"}</dt>
                <dd>{data.username.clone()}</dd>
                <dt>{"Password"}</dt>
                <dd>{data.password.clone()}</dd>
                <dt>{"Theme"}</dt>
                <dd>{session.theme.name().to_string()}</dd>
            </dl>
        },
        (None, Some(message)) => html! {
            <p class="text-sm text-error">{message.clone()}</p>
        },
        (None, None) => html! { <p class="muted">{"Loading…"}</p> },
    };

    html! {
        <section class="page profile-page">
            <div class="panel">
                <h2>{"Profile"}</h2>
                {account}
            </div>
            <div class="panel">
                <h3>{"Change Password"}</h3>
                <form onsubmit={on_submit}>
                    <label>
                        {"New password"}
                        <input
                            type="password"
                            value={form.new_password.clone()}
                            oninput={on_new_password} />
                    </label>
                    <label>
                        {"Confirm password"}
                        <input
                            type="password"
                            value={form.confirm.clone()}
                            oninput={on_confirm} />
                    </label>
                    {form_error.as_ref().map(|message| html! {
                        <p class="text-sm text-error">{message.clone()}</p>
                    }).unwrap_or_default()}
                    <button type="submit" disabled={*saving}>
                        {if *saving { "Saving…" } else { "Update password" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
