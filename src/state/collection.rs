//! Per-collection load state for the pets and appointments lists.
//!
//! DESIGN
//! ======
//! Each load replaces the whole state. There is no merge with a previous
//! result, so a render always reflects exactly the last completed fetch.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

/// Server collections rendered by the clinic page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Pets,
    Appointments,
}

impl CollectionKind {
    /// Plural noun used in logs and placeholder copy.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Pets => "pets",
            Self::Appointments => "appointments",
        }
    }

    /// DOM id of the page section holding this collection.
    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Pets => "pets",
            Self::Appointments => "appointments",
        }
    }
}

/// Outcome of the most recent load of one collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CollectionState<T> {
    /// No load has completed yet.
    #[default]
    Loading,
    /// At least one record, in server order.
    Populated(Vec<T>),
    /// The server returned an empty list.
    Empty,
    /// The load failed; details went to the log.
    Error,
}

impl<T> CollectionState<T> {
    /// Classify a load result. An empty list never becomes `Populated`.
    pub fn from_result<E>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Populated(items),
            Err(_) => Self::Error,
        }
    }

    /// Populated records; empty for every other state.
    #[cfg(test)]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
