//! App state and store-event dispatch.

mod form;

pub use form::{FormField, LinkForm};

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::client::ApiClient;
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::store::{LinkStore, MIN_SLUG_LENGTH, StoreEvent};
use crate::system::{browser, clipboard};

/// Active view. `Create` and `List` are the two tabs; `Help` and `Exiting`
/// are popups drawn over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Create,
    List,
    Help,
    Exiting,
}

pub struct App {
    pub store: LinkStore,
    pub form: LinkForm,
    pub current_screen: CurrentScreen,
    pub inline_search_mode: bool,

    // UI state
    pub selected_index: usize,
    pub table_state: ratatui::widgets::TableState,
    pub status_message: String,
    pub error_message: String,

    public_base_url: String,
    events: UnboundedReceiver<StoreEvent>,
}

impl App {
    pub fn new(config: &StaticConfig) -> Result<App> {
        let api = ApiClient::new(&config.api)?;
        let (tx, rx) = LinkStore::channel();
        let mut store = LinkStore::new(Arc::new(api), config.ui.page_size, tx);

        // Initial page load kicks off immediately; the result arrives as a
        // StoreEvent on the first loop ticks.
        store.fetch_links();

        Ok(App {
            store,
            form: LinkForm::new(),
            current_screen: CurrentScreen::Create,
            inline_search_mode: false,
            selected_index: 0,
            table_state: ratatui::widgets::TableState::default(),
            status_message: String::new(),
            error_message: String::new(),
            public_base_url: config.api.public_base_url.trim_end_matches('/').to_string(),
            events: rx,
        })
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Apply every pending completion. Called once per loop tick, before
    /// drawing.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_store_event(event);
        }
    }

    /// Fold one completion into the store, then run the interface side of
    /// it: screen switches, browser launches, user-visible messages.
    pub fn handle_store_event(&mut self, event: StoreEvent) {
        let applied = self.store.apply(&event);

        match event {
            StoreEvent::PageLoaded { .. } => {
                if applied {
                    self.clamp_selection();
                }
            }
            StoreEvent::PageLoadFailed { .. } => {
                if applied {
                    self.set_error("Failed to load links. Check the server and try again.");
                }
            }
            StoreEvent::LinkCreated { link } => {
                let short_url = link.short_url(&self.public_base_url);
                self.form.clear();
                self.current_screen = CurrentScreen::List;
                self.selected_index = 0;
                self.set_status(format!("Created {}", short_url));
            }
            StoreEvent::CreateFailed { message } => {
                self.form.submitting = false;
                self.form.error = Some(message);
            }
            StoreEvent::SlugDebounced { slug } => {
                // Only probe if the slug is still what the timer was armed
                // for; a later edit supersedes this firing.
                if slug == self.form.slug && slug.len() >= MIN_SLUG_LENGTH {
                    self.form.slug_checking = true;
                    self.store.check_slug_availability(slug);
                }
            }
            StoreEvent::SlugChecked { slug, status } => {
                if slug == self.form.slug {
                    self.form.slug_checking = false;
                    self.form.slug_status = status;
                } else {
                    debug!(%slug, "dropping availability result for edited slug");
                }
            }
            StoreEvent::RedirectResolved { slug, url } => match browser::open_url(&url) {
                Ok(()) => self.set_status(format!("Opened /r/{} in your browser", slug)),
                Err(e) => self.set_error(e.format_simple()),
            },
            StoreEvent::RedirectFailed { message, .. } => {
                self.set_error(message);
            }
            // Fully handled inside the store.
            StoreEvent::SearchDebounced { .. } | StoreEvent::CopyExpired { .. } => {}
        }
    }

    // ========== selection ==========

    pub fn selected_link(&self) -> Option<&crate::client::Link> {
        self.store.links.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index < self.store.links.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.store.links.len() {
            self.selected_index = self.store.links.len().saturating_sub(1);
        }
    }

    // ========== messages ==========

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    // ========== form actions ==========

    /// Validate locally and hand the draft to the store. Local failures
    /// never touch the network.
    pub fn submit_form(&mut self) {
        self.form.error = None;

        if self.form.url.is_empty() {
            self.form.error = Some("Please enter a URL".to_string());
            return;
        }

        if !self.form.slug.is_empty()
            && self.form.slug_status.as_ref().is_some_and(|s| !s.available)
        {
            self.form.error = Some("The specified slug is already taken".to_string());
            return;
        }

        self.form.submitting = true;
        let slug = (!self.form.slug.is_empty()).then(|| self.form.slug.clone());
        self.store.create_link(self.form.url.clone(), slug);
    }

    /// React to a slug edit: clear stale feedback and re-arm the debounced
    /// availability check when the input qualifies.
    pub fn after_slug_edit(&mut self) {
        if self.form.slug.is_empty() {
            self.form.slug_status = None;
            self.form.slug_checking = false;
            self.store.cancel_slug_check();
        } else if self.form.slug.len() >= MIN_SLUG_LENGTH && self.form.slug_touched {
            self.store.schedule_slug_check(self.form.slug.clone());
        } else {
            self.form.slug_status = None;
            self.store.cancel_slug_check();
        }
    }

    // ========== list actions ==========

    /// Copy the selected entry's short URL; feedback is scoped to that
    /// entry's id and expires on its own.
    pub fn copy_selected(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        let id = link.id;
        let short_url = link.short_url(&self.public_base_url);

        match clipboard::copy_text(&short_url) {
            Ok(()) => {
                self.store.mark_copied(id);
                self.set_status(format!("Copied: {}", short_url));
            }
            Err(e) => self.set_error(e.format_simple()),
        }
    }

    /// Resolve the selected entry's slug and open the original URL.
    pub fn open_selected(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        let slug = link.slug.clone();
        self.set_status(format!("Resolving /r/{}...", slug));
        self.store.resolve_redirect(slug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SlugStatus;

    fn test_app() -> App {
        App::new(&StaticConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_submit_with_empty_url_is_rejected_locally() {
        let mut app = test_app();

        app.submit_form();

        assert_eq!(app.form.error.as_deref(), Some("Please enter a URL"));
        assert!(!app.form.submitting);
    }

    #[tokio::test]
    async fn test_submit_with_taken_slug_is_rejected_locally() {
        let mut app = test_app();
        app.form.url = "https://example.com".to_string();
        app.form.slug = "taken".to_string();
        app.form.slug_status = Some(SlugStatus {
            available: false,
            error: None,
        });

        app.submit_form();

        assert_eq!(
            app.form.error.as_deref(),
            Some("The specified slug is already taken")
        );
        assert!(!app.form.submitting);
    }

    #[tokio::test]
    async fn test_clearing_slug_drops_stale_feedback() {
        let mut app = test_app();
        app.form.editing = Some(FormField::Slug);
        app.form.slug = "mine".to_string();
        app.form.slug_status = Some(SlugStatus {
            available: false,
            error: None,
        });
        app.form.slug_touched = true;

        app.form.slug.clear();
        app.after_slug_edit();

        assert!(app.form.slug_status.is_none());
        assert!(!app.form.slug_checking);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft_and_shows_message() {
        let mut app = test_app();
        app.form.url = "https://example.com".to_string();
        app.form.submitting = true;

        app.handle_store_event(StoreEvent::CreateFailed {
            message: "The slug has already been taken.".to_string(),
        });

        assert_eq!(app.form.url, "https://example.com");
        assert!(!app.form.submitting);
        assert_eq!(
            app.form.error.as_deref(),
            Some("The slug has already been taken.")
        );
    }

    #[tokio::test]
    async fn test_stale_slug_result_is_ignored() {
        let mut app = test_app();
        app.form.slug = "newer".to_string();
        app.form.slug_checking = true;

        app.handle_store_event(StoreEvent::SlugChecked {
            slug: "older".to_string(),
            status: Some(SlugStatus {
                available: false,
                error: None,
            }),
        });

        // Result for the superseded slug changes nothing.
        assert!(app.form.slug_checking);
        assert!(app.form.slug_status.is_none());
    }
}
