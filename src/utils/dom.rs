//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

use crate::config::PAGE_STATE_ELEMENT_ID;
use crate::core::BrowserActions;
use crate::core::error::StateError;
use crate::models::{PageState, QueryState};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Embedded Page State
// =============================================================================

/// Read the listing state the server embedded into the page.
pub fn read_page_state() -> Result<PageState, StateError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(StateError::NoDocument)?;
    let json = document
        .get_element_by_id(PAGE_STATE_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .ok_or(StateError::Missing(PAGE_STATE_ELEMENT_ID))?;
    Ok(PageState::from_json(&json)?)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current query string (`location.search`, including the leading `?`).
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Navigate to the current path with `query` as its query string.
///
/// This is a full page load; the server renders the new listing.
pub fn navigate_to_query(query: &QueryState) {
    let search = query.to_query_string();
    log::debug!("navigating to ?{}", search);
    if let Some(window) = window()
        && let Err(err) = window.location().set_search(&search)
    {
        log::error!("navigation failed: {:?}", err);
    }
}

// =============================================================================
// Dialogs
// =============================================================================

/// [`BrowserActions`] backed by the window's native dialogs and location.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowActions;

impl BrowserActions for WindowActions {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reload(&self) {
        if let Some(window) = window()
            && let Err(err) = window.location().reload()
        {
            log::error!("reload failed: {:?}", err);
        }
    }
}

/// Show a blocking message.
pub fn alert(message: &str) {
    WindowActions.alert(message);
}
