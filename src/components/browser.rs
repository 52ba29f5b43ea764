//! Page layout for the blob browser.

use leptos::prelude::*;

use super::actions::{DeleteButton, NextPage};
use super::filter_panel::FilterPanel;
use super::listing::Listing;

stylance::import_crate_style!(css, "src/components/browser.module.css");

/// Filter panel on top, then the bulk actions, the listing and the pager.
#[component]
pub fn BlobBrowser() -> impl IntoView {
    view! {
        <div class=css::browser>
            <FilterPanel />
            <div class=css::toolbar>
                <DeleteButton />
            </div>
            <Listing />
            <div class=css::footer>
                <NextPage />
            </div>
        </div>
    }
}
