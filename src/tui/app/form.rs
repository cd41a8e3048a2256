//! Creation form state.

use crate::client::SlugStatus;

/// Field currently focused in the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Url,
    Slug,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Url => Self::Slug,
            Self::Slug => Self::Url,
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "URL to Shorten",
            Self::Slug => "Custom Slug",
        }
    }
}

/// Draft of one create interaction. Lives until the creation succeeds, at
/// which point everything resets.
#[derive(Debug, Default)]
pub struct LinkForm {
    pub url: String,
    pub slug: String,
    pub editing: Option<FormField>,
    pub submitting: bool,
    pub error: Option<String>,
    /// Most recent availability result; `None` means nothing to show.
    pub slug_status: Option<SlugStatus>,
    pub slug_checking: bool,
    /// Whether the user has edited the slug field at all. A value that was
    /// never touched must not trigger availability probes.
    pub slug_touched: bool,
}

impl LinkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the whole draft, including check state.
    pub fn clear(&mut self) {
        self.url.clear();
        self.slug.clear();
        self.editing = None;
        self.submitting = false;
        self.error = None;
        self.slug_status = None;
        self.slug_checking = false;
        self.slug_touched = false;
    }

    pub fn toggle_field(&mut self) {
        self.editing = Some(match &self.editing {
            Some(field) => field.next(),
            None => FormField::default(),
        });
    }

    /// Append a character to the focused field. Returns true when the slug
    /// field changed, so the caller can re-arm the availability check.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.editing {
            Some(FormField::Url) => {
                self.url.push(c);
                false
            }
            Some(FormField::Slug) => {
                self.slug.push(c);
                self.slug_touched = true;
                true
            }
            None => false,
        }
    }

    /// Delete the last character of the focused field. Returns true when the
    /// slug field changed.
    pub fn pop_char(&mut self) -> bool {
        match self.editing {
            Some(FormField::Url) => {
                self.url.pop();
                false
            }
            Some(FormField::Slug) => {
                if self.slug.pop().is_some() {
                    self.slug_touched = true;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    /// Whether submission is currently allowed: the URL must be present, and
    /// an entered slug must not be known-unavailable.
    pub fn is_valid(&self) -> bool {
        if self.url.is_empty() {
            return false;
        }
        if !self.slug.is_empty()
            && self.slug_status.as_ref().is_some_and(|s| !s.available)
        {
            return false;
        }
        true
    }
}
