//! History page view.
//!
//! # Design
//! - The rendered list is a projection of the in-memory row model; deletes
//!   and silent refreshes mutate the model and re-render, never the DOM.
//! - A background refresh that fails is logged and skipped; the rows on
//!   screen stay put until the next successful fetch.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo::console;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::SessionCtx;
use crate::app::routes::SearchQuery;
use crate::app::{Route, poller};
use crate::components::atoms::EmptyState;
use crate::components::toast::Toaster;
use crate::features::history::state::{ClearAllProgress, ClearOutcome, count_label};
use crate::logic::relative_label;
use crate::state::{HistoryRow, ListPhase, RequestSequence, remove_row, rows_differ};

const POLL_INTERVAL_MS: u32 = 30_000;
/// Brief exit transition before a deleted row leaves the model.
const REMOVE_DELAY_MS: u32 = 180;

#[function_component(HistoryPage)]
pub(crate) fn history_page() -> Html {
    let session = use_context::<SessionCtx>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let refresh = use_force_update();
    let model = use_mut_ref(|| ListPhase::<HistoryRow>::Loading);
    let seq = use_mut_ref(RequestSequence::new);
    let busy = use_mut_ref(HashSet::<u64>::new);
    let leaving = use_mut_ref(HashSet::<u64>::new);
    let clearing = use_mut_ref(|| false);

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
        Callback::from(move |silent: bool| {
            if !silent {
                *model.borrow_mut() = ListPhase::Loading;
                refresh.force_update();
            }
            let token = seq.borrow_mut().issue();
            let session = session.clone();
            let model = model.clone();
            let seq = seq.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = session.client.fetch_history(&session.user).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(entries) => {
                        let rows: Vec<HistoryRow> =
                            entries.into_iter().map(HistoryRow::from).collect();
                        let keep = {
                            let current = model.borrow();
                            silent
                                && matches!(&*current, ListPhase::Populated(shown) if !rows_differ(shown, &rows))
                        };
                        if !keep {
                            *model.borrow_mut() = ListPhase::from_items(rows);
                        }
                        // Even when rows are unchanged the relative labels move.
                        refresh.force_update();
                    }
                    Err(err) => {
                        if silent {
                            console::error!("history refresh skipped", err.to_string());
                            return;
                        }
                        *model.borrow_mut() = ListPhase::Error(err.to_string());
                        refresh.force_update();
                    }
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(false);
                let poll = poller::start(POLL_INTERVAL_MS, {
                    let load = load.clone();
                    Callback::from(move |()| load.emit(true))
                });
                move || drop(poll)
            },
            (),
        );
    }

    let on_delete = {
        let session = session.clone();
        let toaster = toaster.clone();
        let model = model.clone();
        let busy = busy.clone();
        let leaving = leaving.clone();
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
            let leaving = leaving.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = session.client.delete_history(&session.user, id).await;
                busy.borrow_mut().remove(&id);
                match result {
                    Ok(()) => {
                        leaving.borrow_mut().insert(id);
                        refresh.force_update();
                        Timeout::new(REMOVE_DELAY_MS, move || {
                            let remaining = {
                                let current = model.borrow();
                                current.rows().map(|rows| remove_row(rows, id))
                            };
                            if let Some(rows) = remaining {
                                *model.borrow_mut() = ListPhase::from_items(rows);
                            }
                            leaving.borrow_mut().remove(&id);
                            refresh.force_update();
                        })
                        .forget();
                    }
                    Err(err) => {
                        toaster.error(format!("Could not delete \"{term}\": {err}"));
                        refresh.force_update();
                    }
                }
            });
        })
    };

    let on_clear = {
        let session = session.clone();
        let toaster = toaster.clone();
        let model = model.clone();
        let clearing = clearing.clone();
        let refresh = refresh.clone();
        let load = load.clone();
        Callback::from(move |_: MouseEvent| {
            if *clearing.borrow() {
                return;
            }
            let ids: Vec<u64> = model
                .borrow()
                .rows()
                .map(|rows| rows.iter().map(|row| row.id).collect())
                .unwrap_or_default();
            if ids.is_empty() {
                return;
            }
            *clearing.borrow_mut() = true;
            refresh.force_update();
            let progress = Rc::new(RefCell::new(ClearAllProgress::new(ids.len())));
            for id in ids {
                let session = session.clone();
                let toaster = toaster.clone();
                let model = model.clone();
                let clearing = clearing.clone();
                let refresh = refresh.clone();
                let load = load.clone();
                let progress = progress.clone();
                spawn_local(async move {
                    let ok = session.client.delete_history(&session.user, id).await.is_ok();
                    let outcome = progress.borrow_mut().record(ok);
                    let Some(outcome) = outcome else {
                        return;
                    };
                    *clearing.borrow_mut() = false;
                    match outcome {
                        ClearOutcome::Cleared => {
                            *model.borrow_mut() = ListPhase::Empty;
                            toaster.success("History cleared");
                            refresh.force_update();
                        }
                        ClearOutcome::Partial { failed, total } => {
                            toaster
                                .error(format!("{failed} of {total} entries could not be deleted"));
                            load.emit(false);
                        }
                    }
                });
            }
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

    let retry = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(false))
    };

    let phase = model.borrow().clone();
    let busy_ids = busy.borrow().clone();
    let leaving_ids = leaving.borrow().clone();
    let is_clearing = *clearing.borrow();
    let now_ms = js_sys::Date::now() as i64;

    let counter = count_label(&phase);

    let body = match &phase {
        ListPhase::Loading => html! { <p class="muted">{"Loading…"}</p> },
        ListPhase::Error(message) => html! {
            <div class="error-banner">
                <p>{message.clone()}</p>
                <button onclick={retry.clone()}>{"Retry"}</button>
            </div>
        },
        ListPhase::Empty => html! {
            <EmptyState
                title="No searches yet"
                description="Searches you run will show up here." />
        },
        ListPhase::Populated(rows) => html! {
            <ul class="history-list">
                {for rows.iter().map(|row| {
                    let id = row.id;
                    let term = row.term.clone();
                    let delete_term = row.term.clone();
                    let on_search_again = on_search_again.clone();
                    let on_delete = on_delete.clone();
                    let exiting = leaving_ids.contains(&id);
                    let deleting = busy_ids.contains(&id);
                    html! {
                        <li key={id.to_string()} class={classes!("history-row", exiting.then_some("leaving"))}>
                            <button class="link" onclick={Callback::from(move |_| on_search_again.emit(term.clone()))}>
                                {row.term.clone()}
                            </button>
                            <span class="muted">{relative_label(&row.timestamp, now_ms)}</span>
                            <button
                                class="ghost"
                                disabled={deleting || is_clearing}
                                onclick={Callback::from(move |_| on_delete.emit((id, delete_term.clone())))}>
                                {"Delete"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        },
    };

    html! {
        <section class="page history-page">
            <div class="page-header">
                <h2>{"Search History"}</h2>
                <span class="muted">{counter}</span>
                <div class="page-actions">
                    <button onclick={retry}>{"Refresh"}</button>
                    <button disabled={is_clearing || phase.rows().is_none()} onclick={on_clear}>
                        {if is_clearing { "Clearing…" } else { "Clear all" }}
                    </button>
                </div>
            </div>
            {body}
        </section>
    }
}
