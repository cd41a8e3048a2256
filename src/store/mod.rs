//! Shared state container for the link list.
//!
//! `LinkStore` is the single source of truth for the current page of links
//! and the pagination/search/loading flags around it. It is constructed with
//! an [`LinkApi`] handle and an event sender; every network operation is
//! spawned onto the runtime and reports back as a [`StoreEvent`], which the
//! interface feeds into [`LinkStore::apply`] between draws. All mutation
//! therefore happens on the UI task and no locking is needed.

mod debounce;
mod pagination;

pub use debounce::Debouncer;
pub use pagination::{PageItem, page_numbers};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::client::{ApiError, Link, LinkApi, LinkPage, SlugStatus};
use crate::config::PAGE_SIZE_OPTIONS;

/// How long raw search input must sit still before it is sent to the server.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// How long a slug must sit still before its availability is probed.
pub const SLUG_CHECK_DEBOUNCE: Duration = Duration::from_millis(500);

/// Slugs shorter than this are never sent to the availability endpoint.
pub const MIN_SLUG_LENGTH: usize = 4;

/// How long a copied entry keeps its feedback marker.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Completions and timer firings delivered back to the UI task.
#[derive(Debug)]
pub enum StoreEvent {
    PageLoaded { seq: u64, page: LinkPage },
    PageLoadFailed { seq: u64, error: ApiError },
    SearchDebounced { term: String },
    SlugDebounced { slug: String },
    SlugChecked { slug: String, status: Option<SlugStatus> },
    LinkCreated { link: Link },
    CreateFailed { message: String },
    RedirectResolved { slug: String, url: String },
    RedirectFailed { slug: String, message: String },
    CopyExpired { id: u64 },
}

pub struct LinkStore {
    api: Arc<dyn LinkApi>,
    events: UnboundedSender<StoreEvent>,

    /// The links of the most recently applied page, newest first.
    pub links: Vec<Link>,
    pub loading: bool,
    pub is_searching: bool,
    pub current_page: u64,
    pub total_pages: u64,
    /// Server-reported total matching links, bumped locally on optimistic
    /// inserts.
    pub total_count: u64,
    pub items_per_page: u64,
    /// Raw search box contents; staged, not yet sent.
    pub search_input: String,
    /// Entry currently carrying the "copied" marker.
    pub copied_id: Option<u64>,

    /// Debounced value actually sent with list requests.
    applied_search: String,
    search_debounce: Debouncer,
    slug_debounce: Debouncer,
    copy_timer: Debouncer,
    /// Sequence of the most recently issued fetch; stale completions are
    /// dropped in `apply`.
    fetch_seq: u64,
}

impl LinkStore {
    pub fn new(api: Arc<dyn LinkApi>, page_size: u64, events: UnboundedSender<StoreEvent>) -> Self {
        let items_per_page = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            PAGE_SIZE_OPTIONS[0]
        };

        Self {
            api,
            events,
            links: Vec::new(),
            loading: false,
            is_searching: false,
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            items_per_page,
            search_input: String::new(),
            copied_id: None,
            applied_search: String::new(),
            search_debounce: Debouncer::new(),
            slug_debounce: Debouncer::new(),
            copy_timer: Debouncer::new(),
            fetch_seq: 0,
        }
    }

    /// Create the event channel the store reports through.
    pub fn channel() -> (UnboundedSender<StoreEvent>, UnboundedReceiver<StoreEvent>) {
        mpsc::unbounded_channel()
    }

    /// The search term currently in effect on the server side.
    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    /// Pagination bar contents for the current state.
    pub fn page_items(&self) -> Vec<PageItem> {
        page_numbers(self.current_page, self.total_pages)
    }

    /// Issue exactly one page fetch for the current (page, size, term)
    /// triple. Called once at startup and on every change of the triple.
    pub fn fetch_links(&mut self) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.loading = true;
        self.is_searching = !self.applied_search.trim().is_empty();

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let page = self.current_page;
        let per_page = self.items_per_page;
        let term = self.applied_search.clone();

        tokio::spawn(async move {
            let search = (!term.trim().is_empty()).then_some(term);
            let result = api.list_links(page, per_page, search.as_deref()).await;
            let event = match result {
                Ok(page) => StoreEvent::PageLoaded { seq, page },
                Err(error) => StoreEvent::PageLoadFailed { seq, error },
            };
            let _ = events.send(event);
        });
    }

    /// Stage raw search input. The page resets to 1 immediately; the term
    /// itself only reaches the server once it has been stable for
    /// [`SEARCH_DEBOUNCE`].
    pub fn set_search_input(&mut self, term: String) {
        self.search_input = term.clone();

        if self.current_page != 1 {
            self.current_page = 1;
            self.fetch_links();
        }

        let events = self.events.clone();
        self.search_debounce.schedule(SEARCH_DEBOUNCE, move || {
            let _ = events.send(StoreEvent::SearchDebounced { term });
        });
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.search_input.clone();
        term.push(c);
        self.set_search_input(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.search_input.clone();
        term.pop();
        self.set_search_input(term);
    }

    /// Drop the search term in one action.
    pub fn clear_search(&mut self) {
        self.set_search_input(String::new());
    }

    /// Jump to `page`, clamped to the known range. Out-of-range requests and
    /// the current page are no-ops, which is what disables prev/next at the
    /// edges.
    pub fn set_page(&mut self, page: u64) {
        let page = page.clamp(1, self.total_pages.max(1));
        if page != self.current_page {
            self.current_page = page;
            self.fetch_links();
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn set_items_per_page(&mut self, per_page: u64) {
        if per_page != self.items_per_page {
            self.items_per_page = per_page;
            self.current_page = 1;
            self.fetch_links();
        }
    }

    /// Advance the page-size selector to its next option.
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&n| n == self.items_per_page)
            .unwrap_or(0);
        self.set_items_per_page(PAGE_SIZE_OPTIONS[(idx + 1) % PAGE_SIZE_OPTIONS.len()]);
    }

    /// Submit a new link. The outcome arrives as `LinkCreated` or
    /// `CreateFailed`; nothing is mutated until then.
    pub fn create_link(&self, url: String, slug: Option<String>) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();

        tokio::spawn(async move {
            match api.create_link(&url, slug.as_deref()).await {
                Ok(link) => {
                    let _ = events.send(StoreEvent::LinkCreated { link });
                }
                Err(err) => {
                    debug!("create link rejected: {}", err);
                    let message = match err {
                        ApiError::Server { message } => message,
                        ApiError::Decode(_) => {
                            "An unexpected error occurred. Please try again.".to_string()
                        }
                        _ => "Failed to create link. Please try again.".to_string(),
                    };
                    let _ = events.send(StoreEvent::CreateFailed { message });
                }
            }
        });
    }

    /// Arm the availability probe for a candidate slug; fires as
    /// `SlugDebounced` once the input has been stable.
    pub fn schedule_slug_check(&mut self, slug: String) {
        let events = self.events.clone();
        self.slug_debounce.schedule(SLUG_CHECK_DEBOUNCE, move || {
            let _ = events.send(StoreEvent::SlugDebounced { slug });
        });
    }

    pub fn cancel_slug_check(&mut self) {
        self.slug_debounce.cancel();
    }

    /// Probe slug availability. Inputs under [`MIN_SLUG_LENGTH`] report a
    /// cleared status without touching the network.
    pub fn check_slug_availability(&self, slug: String) {
        if slug.len() < MIN_SLUG_LENGTH {
            let _ = self.events.send(StoreEvent::SlugChecked { slug, status: None });
            return;
        }

        let api = Arc::clone(&self.api);
        let events = self.events.clone();

        tokio::spawn(async move {
            let status = match api.check_slug(&slug).await {
                Ok(status) => status,
                Err(err) => SlugStatus {
                    available: false,
                    error: Some(
                        err.server_message()
                            .unwrap_or("Invalid slug format")
                            .to_string(),
                    ),
                },
            };
            let _ = events.send(StoreEvent::SlugChecked {
                slug,
                status: Some(status),
            });
        });
    }

    /// Resolve the original URL behind a slug. A 404 surfaces its own
    /// message; every other failure collapses into a generic one.
    pub fn resolve_redirect(&self, slug: String) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();

        tokio::spawn(async move {
            match api.resolve_redirect(&slug).await {
                Ok(target) => {
                    let _ = events.send(StoreEvent::RedirectResolved {
                        slug,
                        url: target.url,
                    });
                }
                Err(err) => {
                    let message = if err.is_not_found() {
                        "Link not found. The shortened URL may have expired or been removed."
                            .to_string()
                    } else {
                        "An error occurred while retrieving the URL".to_string()
                    };
                    let _ = events.send(StoreEvent::RedirectFailed { slug, message });
                }
            }
        });
    }

    /// Mark one entry as copied. At most one entry carries the marker; the
    /// expiry is scoped to the id it was armed for.
    pub fn mark_copied(&mut self, id: u64) {
        self.copied_id = Some(id);
        let events = self.events.clone();
        self.copy_timer.schedule(COPY_FEEDBACK, move || {
            let _ = events.send(StoreEvent::CopyExpired { id });
        });
    }

    /// Fold a completion into the container. Events the store does not own
    /// (slug feedback for the form, redirect side effects) are left to the
    /// interface. Returns whether the event mutated state; stale fetch
    /// completions are dropped and report `false`.
    pub fn apply(&mut self, event: &StoreEvent) -> bool {
        match event {
            StoreEvent::PageLoaded { seq, page } => {
                if *seq != self.fetch_seq {
                    debug!(seq, latest = self.fetch_seq, "dropping stale page load");
                    return false;
                }
                self.links = page.data.clone();
                self.total_pages = page.last_page.max(1);
                self.total_count = page.total;
                self.loading = false;
                self.is_searching = false;
                true
            }
            StoreEvent::PageLoadFailed { seq, error } => {
                if *seq != self.fetch_seq {
                    return false;
                }
                warn!("failed to fetch links: {}", error);
                self.links.clear();
                self.total_pages = 1;
                self.total_count = 0;
                self.loading = false;
                self.is_searching = false;
                true
            }
            StoreEvent::SearchDebounced { term } => {
                if *term != self.applied_search {
                    self.applied_search = term.clone();
                    self.current_page = 1;
                    self.fetch_links();
                    true
                } else {
                    false
                }
            }
            StoreEvent::LinkCreated { link } => {
                // Optimistic: prepend locally instead of refetching the page.
                self.links.insert(0, link.clone());
                self.total_count += 1;
                true
            }
            StoreEvent::CopyExpired { id } => {
                if self.copied_id == Some(*id) {
                    self.copied_id = None;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}
