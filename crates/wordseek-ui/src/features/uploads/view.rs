//! Uploads page view.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::SessionCtx;
use crate::components::atoms::EmptyState;
use crate::logic::relative_label;
use crate::state::{ListPhase, RequestSequence, UploadRow};

#[function_component(UploadsPage)]
pub(crate) fn uploads_page() -> Html {
    let session = use_context::<SessionCtx>();
    let refresh = use_force_update();
    let model = use_mut_ref(|| ListPhase::<UploadRow>::Loading);
    let seq = use_mut_ref(RequestSequence::new);

    let Some(session) = session else {
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
                let result = session.client.fetch_uploads(&session.user).await;
                if !seq.borrow().is_current(token) {
                    return;
                }
                let rows = result.map(|entries| {
                    entries.into_iter().map(UploadRow::from).collect::<Vec<_>>()
                });
                *model.borrow_mut() = ListPhase::from_result(rows.map_err(|err| err.to_string()));
                refresh.force_update();
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            (),
        );
    }

    let retry = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let phase = model.borrow().clone();
    let now_ms = js_sys::Date::now() as i64;

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
                title="No uploads yet"
                description="Word files you upload from the search page appear here." />
        },
        ListPhase::Populated(rows) => html! {
            <ul class="uploads-list">
                {for rows.iter().map(|row| html! {
                    <li key={row.filename.clone()} class="upload-row">
                        <span class="term">{row.filename.clone()}</span>
                        <span class="muted">{format!("Uploaded {}", relative_label(&row.uploaded_at, now_ms))}</span>
                    </li>
                })}
            </ul>
        },
    };

    html! {
        <section class="page uploads-page">
            <div class="page-header">
                <h2>{"Uploaded Files"}</h2>
                <button onclick={retry}>{"Refresh"}</button>
            </div>
            {body}
        </section>
    }
}
