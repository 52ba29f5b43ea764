//! Blob listing table.
//!
//! Column headers sort the listing by navigating to a new query; the
//! active column shows its direction. Each row carries a checkbox bound to
//! the bulk selection and a download link for the blob.

use chrono::Local;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::sort_query;
use crate::models::{BlobRow, SortColumn, SortDirection};
use crate::utils::dom;
use crate::utils::format::{format_size, format_timestamp};
use crate::utils::serve_url;

stylance::import_crate_style!(css, "src/components/listing.module.css");

#[component]
pub fn Listing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;
    let rows = ctx.page.with_value(|page| page.blobs.clone());
    let empty = rows.is_empty();

    view! {
        <table class=css::table aria-label="Blobs">
            <thead>
                <tr class=css::headerRow>
                    <th class=css::checkCell>
                        <input
                            type="checkbox"
                            aria-label="Select all"
                            prop:checked=move || selection.with(|s| s.all_checked())
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                selection.update(|s| s.toggle_all(checked));
                            }
                        />
                    </th>
                    {SortColumn::ALL
                        .into_iter()
                        .map(|column| view! { <SortHeader column=column /> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row| row.key.clone()
                    children=move |row| view! { <ListingRow row=row /> }
                />
            </tbody>
        </table>
        <Show when=move || empty>
            <p class=css::empty>"No blobs found."</p>
        </Show>
    }
}

#[component]
fn SortHeader(column: SortColumn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let current = ctx.page.with_value(|page| page.sort);
    let direction = current
        .filter(|sort| sort.is_active(column))
        .map(|sort| sort.direction);

    let on_click = move |_| dom::navigate_to_query(&sort_query(column, current.as_ref()));

    view! {
        <th class=css::sortable on:click=on_click>
            {column.label()}
            {direction.map(|direction| {
                let icon = match direction {
                    SortDirection::Asc => ic::SORT_ASC,
                    SortDirection::Desc => ic::SORT_DESC,
                };
                view! { <span class=css::sortIcon><Icon icon=icon /></span> }
            })}
        </th>
    }
}

#[component]
fn ListingRow(row: BlobRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.selection;

    let key = StoredValue::new(row.key.clone());
    let href = serve_url(&row.key);
    let size = format_size(row.size);
    let created = format_timestamp(row.creation, &Local);
    let label = format!("Select {}", row.filename);

    view! {
        <tr class=css::row>
            <td class=css::checkCell>
                <input
                    type="checkbox"
                    aria-label=label
                    prop:checked=move || key.with_value(|k| selection.with(|s| s.is_checked(k)))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        key.with_value(|k| selection.update(|s| s.toggle_row(k, checked)));
                    }
                />
            </td>
            <td class=css::filename>
                <a href=href>
                    <Icon icon=ic::DOWNLOAD />
                    " "
                    {row.filename}
                </a>
            </td>
            <td>{row.content_type}</td>
            <td class=css::numeric>{size}</td>
            <td class=css::numeric>{created}</td>
        </tr>
    }
}
