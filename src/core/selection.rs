//! Bulk selection and delete.
//!
//! [`SelectionController`] is the value behind the row checkboxes, the
//! "select all" checkbox and the delete button. Browser side effects go
//! through [`BrowserActions`] and [`DeleteApi`] so the delete protocol runs
//! the same against the real page and in tests.

use crate::core::error::RequestError;
use crate::models::SelectionSet;

/// Shown when the delete request fails. The page reloads afterwards anyway.
pub const DELETE_FAILED_MESSAGE: &str = "An error occurred, please try again.";

/// Blocking browser interactions used by the delete flow.
pub trait BrowserActions {
    /// Ask the user a yes/no question.
    fn confirm(&self, message: &str) -> bool;
    /// Show a blocking message.
    fn alert(&self, message: &str);
    /// Reload the current page.
    fn reload(&self);
}

/// The bulk delete endpoint.
#[allow(async_fn_in_trait)]
pub trait DeleteApi {
    /// Delete `keys` in a single request.
    async fn delete(&self, keys: &[&str]) -> Result<(), RequestError>;
}

/// How a delete request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No row was checked; nothing happened
    NothingSelected,
    /// The user declined the confirmation; nothing was sent
    Declined,
    /// The request succeeded and the page was reloaded
    Deleted(usize),
    /// The request failed, the user was told, and the page was reloaded
    Failed(RequestError),
}

/// Confirmation prompt for deleting `count` blobs.
pub fn confirmation_message(count: usize) -> String {
    let noun = if count == 1 { "blob" } else { "blobs" };
    format!("This will delete {} {}. Okay to continue?", count, noun)
}

/// Checkbox and delete button state for one page of the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    /// Row identifiers in display order
    rows: Vec<String>,
    selection: SelectionSet,
    all_checked: bool,
    delete_enabled: bool,
}

impl SelectionController {
    /// Controller for a page showing `rows`, nothing checked.
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Row checkbox changed.
    ///
    /// Unchecking any row clears "select all". The delete button is enabled
    /// while at least one row remains checked. Unknown ids are ignored.
    pub fn toggle_row(&mut self, id: &str, checked: bool) {
        if !self.rows.iter().any(|row| row == id) {
            return;
        }
        self.selection.set(id, checked);
        if !checked {
            self.all_checked = false;
        }
        self.delete_enabled = !self.selection.is_empty();
    }

    /// "Select all" checkbox changed.
    ///
    /// Every row follows `checked` and the delete button mirrors the
    /// checkbox itself, not the resulting row state.
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            for row in &self.rows {
                self.selection.set(row, true);
            }
        } else {
            self.selection.clear();
        }
        self.all_checked = checked;
        self.delete_enabled = checked;
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn all_checked(&self) -> bool {
        self.all_checked
    }

    pub fn delete_enabled(&self) -> bool {
        self.delete_enabled
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Checked keys in display order.
    pub fn selected_keys(&self) -> Vec<&str> {
        self.selection.ordered(&self.rows)
    }

    /// Confirm, delete the checked blobs, then reload.
    ///
    /// Once the request is sent the page is reloaded exactly once, after the
    /// request settles, whether it succeeded or not. A failure is reported
    /// with a generic alert before the reload. There is no retry.
    pub async fn request_delete<B, A>(&self, browser: &B, api: &A) -> DeleteOutcome
    where
        B: BrowserActions,
        A: DeleteApi,
    {
        let keys = self.selected_keys();
        if keys.is_empty() {
            return DeleteOutcome::NothingSelected;
        }

        if !browser.confirm(&confirmation_message(keys.len())) {
            return DeleteOutcome::Declined;
        }

        log::info!("deleting {} blob(s)", keys.len());
        let outcome = match api.delete(&keys).await {
            Ok(()) => DeleteOutcome::Deleted(keys.len()),
            Err(err) => {
                log::warn!("delete request failed: {}", err);
                browser.alert(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed(err)
            }
        };
        browser.reload();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Confirm(String),
        Alert(String),
        Reload,
        DeleteSent(Vec<String>),
        DeleteSettled,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct FakeBrowser {
        answer: bool,
        log: Log,
    }

    impl BrowserActions for FakeBrowser {
        fn confirm(&self, message: &str) -> bool {
            self.log.borrow_mut().push(Event::Confirm(message.to_string()));
            self.answer
        }

        fn alert(&self, message: &str) {
            self.log.borrow_mut().push(Event::Alert(message.to_string()));
        }

        fn reload(&self) {
            self.log.borrow_mut().push(Event::Reload);
        }
    }

    struct FakeApi {
        result: Result<(), RequestError>,
        log: Log,
    }

    impl DeleteApi for FakeApi {
        async fn delete(&self, keys: &[&str]) -> Result<(), RequestError> {
            self.log
                .borrow_mut()
                .push(Event::DeleteSent(keys.iter().map(|k| k.to_string()).collect()));
            tokio::task::yield_now().await;
            self.log.borrow_mut().push(Event::DeleteSettled);
            self.result.clone()
        }
    }

    fn controller(rows: &[&str]) -> SelectionController {
        SelectionController::new(rows.iter().map(|r| r.to_string()).collect())
    }

    fn fakes(answer: bool, result: Result<(), RequestError>) -> (FakeBrowser, FakeApi, Log) {
        let log = Log::default();
        (
            FakeBrowser {
                answer,
                log: log.clone(),
            },
            FakeApi {
                result,
                log: log.clone(),
            },
            log,
        )
    }

    // -------------------------------------------------------------------------
    // Checkbox state
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_row_enables_delete() {
        let mut c = controller(&["a", "b"]);
        assert!(!c.delete_enabled());
        c.toggle_row("a", true);
        assert!(c.delete_enabled());
        assert!(c.is_checked("a"));
        c.toggle_row("b", true);
        c.toggle_row("a", false);
        assert!(c.delete_enabled());
        assert_eq!(c.selected_keys(), vec!["b"]);
    }

    #[test]
    fn test_last_row_unchecked_disables_delete_and_select_all() {
        let mut c = controller(&["a", "b"]);
        c.toggle_all(true);
        assert!(c.all_checked());
        c.toggle_row("a", false);
        assert!(!c.all_checked());
        assert!(c.delete_enabled());
        c.toggle_row("b", false);
        assert!(!c.delete_enabled());
        assert!(!c.all_checked());
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn test_toggle_all() {
        let mut c = controller(&["a", "b", "c"]);
        c.toggle_all(true);
        assert_eq!(c.selected_keys(), vec!["a", "b", "c"]);
        assert!(c.delete_enabled());
        c.toggle_all(false);
        assert_eq!(c.selected_count(), 0);
        assert!(!c.delete_enabled());
    }

    #[test]
    fn test_toggle_all_mirrors_checkbox_on_empty_page() {
        let mut c = controller(&[]);
        c.toggle_all(true);
        assert!(c.delete_enabled());
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn test_unknown_row_ignored() {
        let mut c = controller(&["a"]);
        c.toggle_row("zzz", true);
        assert!(!c.delete_enabled());
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn test_confirmation_pluralization() {
        assert_eq!(
            confirmation_message(1),
            "This will delete 1 blob. Okay to continue?"
        );
        assert_eq!(
            confirmation_message(2),
            "This will delete 2 blobs. Okay to continue?"
        );
        assert_eq!(
            confirmation_message(0),
            "This will delete 0 blobs. Okay to continue?"
        );
    }

    // -------------------------------------------------------------------------
    // Delete protocol
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_delete_success_reloads_after_settle() {
        let mut c = controller(&["k1", "k2", "k3"]);
        c.toggle_row("k3", true);
        c.toggle_row("k1", true);
        let (browser, api, log) = fakes(true, Ok(()));

        let outcome = c.request_delete(&browser, &api).await;

        assert_eq!(outcome, DeleteOutcome::Deleted(2));
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Confirm(confirmation_message(2)),
                Event::DeleteSent(vec!["k1".to_string(), "k3".to_string()]),
                Event::DeleteSettled,
                Event::Reload,
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_alerts_then_reloads() {
        let mut c = controller(&["k1"]);
        c.toggle_row("k1", true);
        let (browser, api, log) = fakes(true, Err(RequestError::Http(500)));

        let outcome = c.request_delete(&browser, &api).await;

        assert_eq!(outcome, DeleteOutcome::Failed(RequestError::Http(500)));
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Confirm("This will delete 1 blob. Okay to continue?".to_string()),
                Event::DeleteSent(vec!["k1".to_string()]),
                Event::DeleteSettled,
                Event::Alert(DELETE_FAILED_MESSAGE.to_string()),
                Event::Reload,
            ]
        );
        let reloads = log.borrow().iter().filter(|e| **e == Event::Reload).count();
        assert_eq!(reloads, 1);
    }

    #[tokio::test]
    async fn test_declined_sends_nothing() {
        let mut c = controller(&["k1", "k2"]);
        c.toggle_all(true);
        let (browser, api, log) = fakes(false, Ok(()));

        let outcome = c.request_delete(&browser, &api).await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(*log.borrow(), vec![Event::Confirm(confirmation_message(2))]);
    }

    #[tokio::test]
    async fn test_nothing_selected_is_noop() {
        let c = controller(&["k1"]);
        let (browser, api, log) = fakes(true, Ok(()));

        let outcome = c.request_delete(&browser, &api).await;

        assert_eq!(outcome, DeleteOutcome::NothingSelected);
        assert!(log.borrow().is_empty());
    }
}
