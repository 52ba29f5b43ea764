//! Filter panel: kind selector, the inputs of the selected kind, and the
//! filter button.
//!
//! Submitting validates the form and navigates to the encoded query. Any
//! sort or pagination state of the current page is dropped. Pressing Enter
//! in a text input submits as well.

use chrono::{Local, NaiveDate};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::build_filter_query;
use crate::models::{CreationOp, FilterKind, SizeOp, SizeUnit};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/filter_panel.module.css");

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value of an `<input type="date">` for `day`.
fn date_value(day: Option<NaiveDate>) -> String {
    day.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Day picked in an `<input type="date">`; empty input means no day.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = ctx.form;

    let submit = move || match build_filter_query(&form.get_untracked(), &Local) {
        Ok(query) => dom::navigate_to_query(&query),
        Err(err) => dom::alert(&err.to_string()),
    };

    let on_enter = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let is_kind = move |kind: FilterKind| form.with(|f| f.kind == kind);

    view! {
        <div class=css::panel role="search">
            <select
                class=css::select
                aria-label="Filter by"
                on:change=move |ev| {
                    if let Some(kind) = FilterKind::parse(&event_target_value(&ev)) {
                        form.update(|f| f.select_kind(kind));
                    }
                }
            >
                {FilterKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <option value=kind.as_str() prop:selected=move || is_kind(kind)>
                                {kind.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <Show when=move || is_kind(FilterKind::Filename)>
                <input
                    type="text"
                    class=css::input
                    placeholder="Filename prefix"
                    prop:value=move || form.with(|f| f.filename_prefix.clone())
                    on:input=move |ev| form.update(|f| f.filename_prefix = event_target_value(&ev))
                    on:keyup=on_enter
                />
            </Show>

            <Show when=move || is_kind(FilterKind::ContentType)>
                <input
                    type="text"
                    class=css::input
                    placeholder="e.g. image/png"
                    prop:value=move || form.with(|f| f.content_type.clone())
                    on:input=move |ev| form.update(|f| f.content_type = event_target_value(&ev))
                    on:keyup=on_enter
                />
            </Show>

            <Show when=move || is_kind(FilterKind::Size)>
                <SizeInputs on_enter=on_enter />
            </Show>

            <Show when=move || is_kind(FilterKind::Creation)>
                <CreationInputs />
            </Show>

            <button class=css::button on:click=move |_| submit()>
                <Icon icon=ic::FILTER />
                " Filter"
            </button>
        </div>
    }
}

#[component]
fn SizeInputs(on_enter: impl Fn(ev::KeyboardEvent) + Copy + Send + Sync + 'static) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = ctx.form;

    view! {
        <select
            class=css::select
            aria-label="Size comparison"
            on:change=move |ev| {
                if let Some(op) = SizeOp::parse(&event_target_value(&ev)) {
                    form.update(|f| f.size_op = op);
                }
            }
        >
            {SizeOp::ALL
                .into_iter()
                .map(|op| {
                    view! {
                        <option
                            value=op.as_str()
                            prop:selected=move || form.with(|f| f.size_op == op)
                        >
                            {op.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
        <input
            type="text"
            inputmode="decimal"
            class=css::sizeInput
            placeholder="Size"
            prop:value=move || form.with(|f| f.size.clone())
            on:input=move |ev| form.update(|f| f.size = event_target_value(&ev))
            on:keyup=on_enter
        />
        <select
            class=css::select
            aria-label="Size unit"
            on:change=move |ev| {
                if let Some(unit) = SizeUnit::parse(&event_target_value(&ev)) {
                    form.update(|f| f.size_unit = unit);
                }
            }
        >
            {SizeUnit::ALL
                .into_iter()
                .map(|unit| {
                    view! {
                        <option
                            value=unit.as_str()
                            prop:selected=move || form.with(|f| f.size_unit == unit)
                        >
                            {unit.as_str()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn CreationInputs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = ctx.form;

    view! {
        <select
            class=css::select
            aria-label="Created"
            on:change=move |ev| {
                if let Some(op) = CreationOp::parse(&event_target_value(&ev)) {
                    form.update(|f| f.creation_op = op);
                }
            }
        >
            {CreationOp::ALL
                .into_iter()
                .map(|op| {
                    view! {
                        <option
                            value=op.as_str()
                            prop:selected=move || form.with(|f| f.creation_op == op)
                        >
                            {op.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
        <Show when=move || form.with(|f| f.shows_range())>
            <span class=css::range>
                <input
                    type="date"
                    class=css::input
                    aria-label="Start date"
                    prop:value=move || form.with(|f| date_value(f.creation_start))
                    on:change=move |ev| {
                        form.update(|f| f.creation_start = parse_date(&event_target_value(&ev)))
                    }
                />
                " to "
                <input
                    type="date"
                    class=css::input
                    aria-label="End date"
                    prop:value=move || form.with(|f| date_value(f.creation_end))
                    on:change=move |ev| {
                        form.update(|f| f.creation_end = parse_date(&event_target_value(&ev)))
                    }
                />
            </span>
        </Show>
    }
}
