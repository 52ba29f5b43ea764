//! Bulk delete button and next-page control.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{DeleteOutcome, next_page_query};
use crate::utils::HttpDeleteApi;
use crate::utils::dom::{self, WindowActions};

stylance::import_crate_style!(css, "src/components/actions.module.css");

/// Deletes the checked blobs after confirmation, then reloads the page.
#[component]
pub fn DeleteButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;
    let pending = RwSignal::new(false);

    let on_click = move |_| {
        let controller = selection.get_untracked();
        pending.set(true);
        spawn_local(async move {
            let outcome = controller.request_delete(&WindowActions, &HttpDeleteApi).await;
            log::debug!("delete finished: {:?}", outcome);
            if matches!(outcome, DeleteOutcome::Declined | DeleteOutcome::NothingSelected) {
                pending.set(false);
            }
        });
    };

    view! {
        <button
            class=css::delete
            disabled=move || pending.get() || !selection.with(|s| s.delete_enabled())
            on:click=on_click
        >
            <Icon icon=ic::TRASH />
            " Delete"
            {move || {
                let count = selection.with(|s| s.selected_count());
                (count > 0).then(|| format!(" ({})", count))
            }}
        </button>
    }
}

/// Link to the next page; only rendered while the server reports more results.
#[component]
pub fn NextPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let next = ctx
        .page
        .with_value(|page| page.next_cursor().cloned())
        .map(|cursor| ctx.query.with_value(|query| next_page_query(query, &cursor)));

    next.map(|query| {
        view! {
            <button class=css::next on:click=move |_| dom::navigate_to_query(&query)>
                "Next page "
                <Icon icon=ic::NEXT_PAGE />
            </button>
        }
    })
}
