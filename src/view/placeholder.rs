//! Placeholder copy for collections that have nothing to show.

use crate::state::collection::CollectionKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    Loading,
    Empty,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderView {
    pub kind: PlaceholderKind,
    /// Font Awesome icon name without the `fa-` prefix.
    pub icon: &'static str,
    pub title: String,
    pub hint: &'static str,
}

impl PlaceholderView {
    #[must_use]
    pub fn loading(collection: CollectionKind) -> Self {
        Self {
            kind: PlaceholderKind::Loading,
            icon: "spinner",
            title: format!("Loading {}...", collection.noun()),
            hint: "",
        }
    }

    #[must_use]
    pub fn empty(collection: CollectionKind) -> Self {
        let (icon, title, hint) = match collection {
            CollectionKind::Pets => ("paw", "No pets registered yet", "Add your first pet to get started!"),
            CollectionKind::Appointments => ("calendar", "No appointments scheduled", "Book your first appointment!"),
        };
        Self { kind: PlaceholderKind::Empty, icon, title: title.to_owned(), hint }
    }

    #[must_use]
    pub fn error(collection: CollectionKind) -> Self {
        Self {
            kind: PlaceholderKind::Error,
            icon: "exclamation-triangle",
            title: format!("Error loading {}", collection.noun()),
            hint: "Please try again later.",
        }
    }

    /// Container class; empty and loading share the muted style.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            PlaceholderKind::Loading | PlaceholderKind::Empty => "no-data",
            PlaceholderKind::Error => "error-message",
        }
    }
}
