//! Saved searches page view.

use std::collections::HashSet;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::SessionCtx;
use crate::app::routes::SearchQuery;
use crate::components::atoms::EmptyState;
use crate::components::toast::Toaster;
use crate::logic::relative_label;
use crate::state::{ListPhase, RequestSequence, SavedRow, remove_row};

const GUEST_MESSAGE: &str = "You must be logged in to view saved searches.";

#[function_component(SavedPage)]
pub(crate) fn saved_page() -> Html {
    let session = use_context::<SessionCtx>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let refresh = use_force_update();
    let model = use_mut_ref(|| ListPhase::<SavedRow>::Loading);
    let seq = use_mut_ref(RequestSequence::new);
    let busy = use_mut_ref(HashSet::<u64>::new);

    let (Some(session), Some(toaster)) = (session, toaster) else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing session context."}</p>
            </div>
        };
    };

    let load = {
        let session = session.clone();
        let model = model.clone();
        let seq = seq.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            *model.borrow_mut() = ListPhase::Loading;
            refresh.force_update();
            let token = seq.borrow_mut().issue();
            let session = session.clone();
            let model = model.clone();
            let seq = seq.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = session.client.fetch_saved(&session.user).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                let rows = result.map(|entries| {
                    entries.into_iter().map(SavedRow::from).collect::<Vec<_>>()
                });
                *model.borrow_mut() = ListPhase::from_result(rows.map_err(|err| err.to_string()));
                refresh.force_update();
            });
        })
    };

    {
        let session = session.clone();
        let model = model.clone();
        let refresh = refresh.clone();
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                if session.is_guest() {
                    *model.borrow_mut() = ListPhase::Error(GUEST_MESSAGE.to_string());
                    refresh.force_update();
                } else {
                    load.emit(());
                }
                || ()
            },
            (),
        );
    }

    let on_delete = {
        let session = session.clone();
        let toaster = toaster.clone();
        let model = model.clone();
        let busy = busy.clone();
        let refresh = refresh.clone();
        Callback::from(move |(id, term): (u64, String)| {
            if busy.borrow().contains(&id) {
                return;
            }
            busy.borrow_mut().insert(id);
            refresh.force_update();
            let session = session.clone();
            let toaster = toaster.clone();
            let model = model.clone();
            let busy = busy.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = session.client.delete_saved(&session.user, id).await;
                busy.borrow_mut().remove(&id);
                match result {
                    Ok(()) => {
                        let remaining = {
                            let current = model.borrow();
                            current.rows().map(|rows| remove_row(rows, id))
                        };
                        if let Some(rows) = remaining {
                            *model.borrow_mut() = ListPhase::from_items(rows);
                        }
                    }
                    Err(err) => {
                        toaster.error(format!("Could not remove \"{term}\": {err}"));
                    }
                }
                refresh.force_update();
            });
        })
    };

    let on_search_again = {
        Callback::from(move |term: String| {
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(
                    &Route::Search,
                    &SearchQuery { query: Some(term) },
                );
            }
        })
    };

    let is_guest = session.is_guest();
    let retry = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let phase = model.borrow().clone();
    let busy_ids = busy.borrow().clone();
    let now_ms = js_sys::Date::now() as i64;

    let body = match &phase {
        ListPhase::Loading => html! { <p class="muted">{"Loading…"}</p> },
        ListPhase::Error(message) => html! {
            <div class="error-banner">
                <p>{message.clone()}</p>
                {if is_guest {
                    html! {}
                } else {
                    html! { <button onclick={retry.clone()}>{"Retry"}</button> }
                }}
            </div>
        },
        ListPhase::Empty => html! {
            <EmptyState
                title="Nothing saved yet"
                description="Pick a suggestion on the search page and save it." />
        },
        ListPhase::Populated(rows) => html! {
            <ul class="saved-list">
                {for rows.iter().map(|row| {
                    let id = row.id;
                    let term = row.term.clone();
                    let delete_term = row.term.clone();
                    let on_search_again = on_search_again.clone();
                    let on_delete = on_delete.clone();
                    let deleting = busy_ids.contains(&id);
                    html! {
                        <li key={id.to_string()} class="saved-row">
                            <span class="term">{row.term.clone()}</span>
                            <span class="muted">{format!("Saved {}", relative_label(&row.timestamp, now_ms))}</span>
                            <button class="link" onclick={Callback::from(move |_| on_search_again.emit(term.clone()))}>
                                {"Search Again"}
                            </button>
                            <button
                                class="ghost"
                                disabled={deleting}
                                onclick={Callback::from(move |_| on_delete.emit((id, delete_term.clone())))}>
                                {"Remove"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        },
    };

    html! {
        <section class="page saved-page">
            <div class="page-header">
                <h2>{"Saved Searches"}</h2>
                {if is_guest {
                    html! {}
                } else {
                    html! { <button onclick={retry}>{"Refresh"}</button> }
                }}
            </div>
            {body}
        </section>
    }
}
