//! Search page view.
//!
//! # Design
//! - Every keystroke issues a lookup carrying a fresh sequence token; a
//!   response is applied only while its token is still the latest, so a
//!   slow earlier response can never overwrite a newer list.
//! - Keystroke lookups are never recorded in history; picking a suggestion
//!   or pressing Enter records the term through the log queue.

use gloo::console;
use gloo::events::EventListener;
use gloo::file::callbacks::FileReader;
use gloo::utils::document;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::SessionCtx;
use crate::app::routes::SearchQuery;
use crate::components::toast::Toaster;
use crate::features::search::state::SaveControl;
use crate::state::RequestSequence;

/// Give the backend a moment to index a fresh upload before re-running the
/// current lookup against it.
const RETRIGGER_DELAY_MS: u32 = 150;

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let session = use_context::<SessionCtx>();
    let toaster = use_context::<Toaster>();
    let location = use_location();
    let refresh = use_force_update();
    let query = use_state(String::new);
    let suggestions = use_state(Vec::<String>::new);
    let query_model = use_mut_ref(String::new);
    let seq = use_mut_ref(RequestSequence::new);
    let save = use_mut_ref(|| SaveControl::Hidden);
    let reader = use_mut_ref(|| None::<FileReader>);
    let wrapper = use_node_ref();

    let (Some(session), Some(toaster)) = (session, toaster) else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing session context."}</p>
            </div>
        };
    };

    let run_lookup = {
        let session = session.clone();
        let suggestions = suggestions.clone();
        let seq = seq.clone();
        Callback::from(move |text: String| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                // Invalidate any in-flight lookup so it cannot repopulate
                // the list after the input was cleared.
                let _ = seq.borrow_mut().issue();
                suggestions.set(Vec::new());
                return;
            }
            let token = seq.borrow_mut().issue();
            let session = session.clone();
            let suggestions = suggestions.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let result = session.client.suggest(&trimmed, &session.user).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(list) => suggestions.set(list),
                    Err(err) => {
                        console::error!("suggestion lookup failed", err.to_string());
                        suggestions.set(Vec::new());
                    }
                }
            });
        })
    };

    {
        let query = query.clone();
        let query_model = query_model.clone();
        let run_lookup = run_lookup.clone();
        use_effect_with_deps(
            move |_| {
                let initial = location
                    .and_then(|location| location.query::<SearchQuery>().ok())
                    .and_then(|params| params.query);
                if let Some(term) = initial {
                    *query_model.borrow_mut() = term.clone();
                    query.set(term.clone());
                    run_lookup.emit(term);
                }
                || ()
            },
            (),
        );
    }

    {
        let suggestions = suggestions.clone();
        let wrapper = wrapper.clone();
        use_effect_with_deps(
            move |_| {
                let click = {
                    let suggestions = suggestions.clone();
                    let wrapper = wrapper.clone();
                    EventListener::new(&document(), "click", move |event| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                        let inside = wrapper
                            .cast::<web_sys::Node>()
                            .zip(target)
                            .is_some_and(|(wrapper, target)| wrapper.contains(Some(&target)));
                        if !inside {
                            suggestions.set(Vec::new());
                        }
                    })
                };
                let escape = EventListener::new(&document(), "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if is_escape {
                        suggestions.set(Vec::new());
                    }
                });
                move || {
                    drop(click);
                    drop(escape);
                }
            },
            (),
        );
    }

    let on_input = {
        let query = query.clone();
        let query_model = query_model.clone();
        let save = save.clone();
        let run_lookup = run_lookup.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            *query_model.borrow_mut() = value.clone();
            *save.borrow_mut() = SaveControl::Hidden;
            query.set(value.clone());
            run_lookup.emit(value);
        })
    };

    let on_keydown = {
        let session = session.clone();
        let query_model = query_model.clone();
        Callback::from(move |event: KeyboardEvent| {
            // Enter records the term but leaves any open dropdown alone.
            if event.key() == "Enter" {
                event.prevent_default();
                let term = query_model.borrow().trim().to_string();
                if !term.is_empty() {
                    session.logs.record_search(&session.user, &term);
                }
            }
        })
    };

    let on_pick = {
        let session = session.clone();
        let query = query.clone();
        let query_model = query_model.clone();
        let suggestions = suggestions.clone();
        let save = save.clone();
        let run_lookup = run_lookup.clone();
        Callback::from(move |term: String| {
            *query_model.borrow_mut() = term.clone();
            {
                let mut control = save.borrow_mut();
                *control = control.on_chosen();
            }
            query.set(term.clone());
            suggestions.set(Vec::new());
            session.logs.record_search(&session.user, &term);
            run_lookup.emit(term);
        })
    };

    let on_save = {
        let session = session.clone();
        let toaster = toaster.clone();
        let query_model = query_model.clone();
        let save = save.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let term = query_model.borrow().trim().to_string();
            if term.is_empty() {
                return;
            }
            let begun = {
                let mut control = save.borrow_mut();
                let before = *control;
                *control = control.begin();
                before == SaveControl::Ready
            };
            if !begun {
                return;
            }
            refresh.force_update();
            let session = session.clone();
            let toaster = toaster.clone();
            let save = save.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = session.client.save_search(&session.user, &term).await;
                {
                    let mut control = save.borrow_mut();
                    *control = control.finish(result.is_ok());
                }
                match result {
                    Ok(()) => toaster.success(format!("Saved \"{term}\"")),
                    Err(err) => toaster.error(format!("Could not save \"{term}\": {err}")),
                }
                refresh.force_update();
            });
        })
    };

    let on_file = {
        let session = session.clone();
        let toaster = toaster.clone();
        let query_model = query_model.clone();
        let run_lookup = run_lookup.clone();
        let reader = reader.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let filename = file.name();
            let file = gloo::file::File::from(file);
            // Reset the control so picking the same file again re-fires.
            input.set_value("");
            let session = session.clone();
            let toaster = toaster.clone();
            let query_model = query_model.clone();
            let run_lookup = run_lookup.clone();
            *reader.borrow_mut() = Some(gloo::file::callbacks::read_as_text(
                &file,
                move |result| match result {
                    Ok(content) => {
                        spawn_local(async move {
                            match session
                                .client
                                .upload_text(&session.user, &filename, &content)
                                .await
                            {
                                Ok(ack) => {
                                    let message = ack.trim().to_string();
                                    if message.is_empty() {
                                        toaster.success(format!("Uploaded {filename}"));
                                    } else {
                                        toaster.success(message);
                                    }
                                }
                                Err(err) => toaster.error(format!("Upload failed: {err}")),
                            }
                            // Either way the backend may have (partially)
                            // indexed new words for the current query.
                            let text = query_model.borrow().clone();
                            if !text.trim().is_empty() {
                                Timeout::new(RETRIGGER_DELAY_MS, move || {
                                    run_lookup.emit(text);
                                })
                                .forget();
                            }
                        });
                    }
                    Err(err) => toaster.error(format!("Could not read file: {err}")),
                },
            ));
        })
    };

    let suggestion_items = (*suggestions).clone();
    let control = *save.borrow();
    let dropped = session.logs.dropped();

    let save_row = match control {
        SaveControl::Hidden => html! {},
        SaveControl::Ready => html! {
            <button class="save" onclick={on_save}>{"Save this search"}</button>
        },
        SaveControl::Saving => html! {
            <button class="save" disabled=true>{"Saving…"}</button>
        },
        SaveControl::Saved => html! { <span class="muted">{"Saved ✓"}</span> },
    };

    html! {
        <section class="page search-page">
            <div class="page-header">
                <h2>{"Word Search"}</h2>
            </div>
            <div class="search-box" ref={wrapper}>
                <input
                    type="search"
                    placeholder="Start typing a word…"
                    value={(*query).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown} />
                {if suggestion_items.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="suggestions">
                            {for suggestion_items.iter().map(|term| {
                                let on_pick = on_pick.clone();
                                let value = term.clone();
                                html! {
                                    <li key={term.clone()}>
                                        <button class="link" onclick={Callback::from(move |_| on_pick.emit(value.clone()))}>
                                            {term.clone()}
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </div>
            <div class="save-row">{save_row}</div>
            <div class="upload-box">
                <label>
                    {"Upload a word list"}
                    <input type="file" accept=".txt" onchange={on_file} />
                </label>
            </div>
            {if dropped > 0 {
                html! {
                    <p class="muted">{format!("{dropped} searches could not be recorded")}</p>
                }
            } else {
                html! {}
            }}
        </section>
    }
}
