//! App shell: boot sequencing, routing, and the toast host.
//!
//! # Design
//! - Identity and theme settle before any routed page renders, so no page
//!   ever fetches data for the wrong user or flashes the wrong stylesheet.
//! - Pages are independent; the shell only hands them the session and a way
//!   to raise notifications.

use std::rc::Rc;

use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::SessionCtx;
use crate::components::toast::{Toast, ToastHost, ToastKind, Toaster};
use crate::features::history::view::HistoryPage;
use crate::features::profile::view::ProfilePage;
use crate::features::saved::view::SavedPage;
use crate::features::search::view::SearchPage;
use crate::features::uploads::view::UploadsPage;
use crate::services::api::ApiClient;
use crate::theme::ThemePreference;

pub(crate) mod api;
pub(crate) mod poller;
mod preferences;
pub(crate) mod routes;

pub(crate) use routes::Route;

const MAX_TOASTS: usize = 4;

#[function_component(WordseekApp)]
fn wordseek_app() -> Html {
    let session = use_state(|| None::<SessionCtx>);
    let toasts = use_state(Vec::<Toast>::new);
    let toast_seq = use_mut_ref(|| 0u64);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                let resolved = preferences::resolve_identity();
                if let Some(cached) = preferences::load_cached_theme() {
                    apply_theme(&cached);
                }
                let client = Rc::new(ApiClient::new(String::new()));
                yew::platform::spawn_local(async move {
                    let theme = if resolved.is_guest() {
                        ThemePreference::fallback()
                    } else {
                        match client.fetch_settings(&resolved.name).await {
                            Ok(settings) => ThemePreference::from_settings(settings.theme),
                            Err(_) => ThemePreference::fallback(),
                        }
                    };
                    apply_theme(&theme);
                    preferences::persist_theme(&theme);
                    session.set(Some(SessionCtx::new(resolved.name, theme, client)));
                });
                || ()
            },
            (),
        );
    }

    let push_toast = {
        let toasts = toasts.clone();
        let toast_seq = toast_seq.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let mut seq = toast_seq.borrow_mut();
            *seq += 1;
            let mut list = (*toasts).clone();
            list.push(Toast {
                id: *seq,
                kind,
                message,
            });
            let overflow = list.len().saturating_sub(MAX_TOASTS);
            if overflow > 0 {
                list.drain(..overflow);
            }
            toasts.set(list);
        })
    };

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            let list: Vec<Toast> = (*toasts)
                .iter()
                .filter(|toast| toast.id != id)
                .cloned()
                .collect();
            toasts.set(list);
        })
    };

    let Some(ctx) = (*session).clone() else {
        // Identity and theme are still settling.
        return html! {
            <div class="boot-splash">
                <p class="muted">{"Loading…"}</p>
            </div>
        };
    };

    let banner = if ctx.is_guest() {
        "Browsing as guest".to_string()
    } else {
        format!("Signed in as {}", ctx.user)
    };
    let show_profile = !ctx.is_guest();

    html! {
        <ContextProvider<SessionCtx> context={ctx}>
            <ContextProvider<Toaster> context={Toaster::new(push_toast)}>
                <BrowserRouter>
                    <header class="app-header">
                        <h1>{"Wordseek"}</h1>
                        <nav>
                            <Link<Route> to={Route::Search}>{"Search"}</Link<Route>>
                            <Link<Route> to={Route::History}>{"History"}</Link<Route>>
                            <Link<Route> to={Route::Saved}>{"Saved"}</Link<Route>>
                            <Link<Route> to={Route::Uploads}>{"Uploads"}</Link<Route>>
                            {if show_profile {
                                html! { <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>> }
                            } else {
                                html! {}
                            }}
                        </nav>
                        <span class="muted">{banner}</span>
                    </header>
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
                </BrowserRouter>
            </ContextProvider<Toaster>>
        </ContextProvider<SessionCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Search => html! { <SearchPage /> },
        Route::History => html! { <HistoryPage /> },
        Route::Saved => html! { <SavedPage /> },
        Route::Uploads => html! { <UploadsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Search} /> },
    }
}

fn apply_theme(theme: &ThemePreference) {
    let Some(element) = document().get_element_by_id("theme-stylesheet") else {
        return;
    };
    if let Ok(link) = element.dyn_into::<web_sys::HtmlLinkElement>() {
        link.set_href(&theme.stylesheet_href());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<WordseekApp>::with_root(root).render();
    } else {
        yew::Renderer::<WordseekApp>::new().render();
    }
}
