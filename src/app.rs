//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use chrono::Local;
use leptos::prelude::*;

use crate::components::BlobBrowser;
use crate::core::{ListingArgs, SelectionController};
use crate::models::{FilterForm, PageState, QueryState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Page state**: the listing the server rendered, read once at startup
/// - **Query**: the query string this page was loaded with; paging extends it
/// - **Form**: filter form contents, pre-populated from the query
/// - **Selection**: checkbox and delete button state
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Listing embedded by the server.
    pub page: StoredValue<PageState>,

    /// Query string of the current page.
    pub query: StoredValue<QueryState>,

    /// Filter form contents.
    pub form: RwSignal<FilterForm>,

    /// Bulk selection state.
    pub selection: RwSignal<SelectionController>,
}

impl AppContext {
    /// Creates the context for one page view.
    pub fn new(page: PageState, query: QueryState) -> Self {
        let form = match ListingArgs::decode(&query) {
            Ok(ListingArgs {
                filter: Some(filter),
                ..
            }) => FilterForm::from_filter(&filter, &Local),
            Ok(_) => FilterForm::default(),
            Err(err) => {
                log::warn!("ignoring invalid listing query: {}", err);
                FilterForm::default()
            }
        };
        let selection = SelectionController::new(page.row_keys());

        Self {
            page: StoredValue::new(page),
            query: StoredValue::new(query),
            form: RwSignal::new(form),
            selection: RwSignal::new(selection),
        }
    }

    /// Creates the context from the current browser page.
    ///
    /// A missing or unreadable page state renders as an empty listing.
    pub fn from_page() -> Self {
        let page = dom::read_page_state().unwrap_or_else(|err| {
            log::error!("{}", err);
            PageState::default()
        });
        Self::new(page, QueryState::parse(&dom::current_search()))
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the blob browser
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::from_page();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::error>
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <BlobBrowser />
        </ErrorBoundary>
    }
}
