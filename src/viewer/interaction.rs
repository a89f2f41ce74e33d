// SPDX-License-Identifier: MPL-2.0
//! Boundary to the service that owns "liked" state.
//!
//! The viewer only signals intent; persisting the like (or failing to) is the
//! service's business.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The item id is not known to the service.
    UnknownItem(String),
    /// The service could not be reached or refused the request.
    Unavailable(String),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionError::UnknownItem(id) => write!(f, "Unknown item: {}", id),
            InteractionError::Unavailable(reason) => {
                write!(f, "Interaction service unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for InteractionError {}

pub trait InteractionService {
    /// Flips the liked flag of `item_id` and returns the new value.
    fn toggle_like(&mut self, item_id: &str) -> Result<bool, InteractionError>;

    fn is_liked(&self, item_id: &str) -> bool;
}

/// Service backed by a set of known ids, used by the demo front-end.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInteractions {
    known: HashSet<String>,
    liked: HashSet<String>,
}

impl InMemoryInteractions {
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: items.into_iter().map(Into::into).collect(),
            liked: HashSet::new(),
        }
    }

    #[must_use]
    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }
}

impl InteractionService for InMemoryInteractions {
    fn toggle_like(&mut self, item_id: &str) -> Result<bool, InteractionError> {
        if !self.known.contains(item_id) {
            return Err(InteractionError::UnknownItem(item_id.to_string()));
        }
        let liked = if self.liked.remove(item_id) {
            false
        } else {
            self.liked.insert(item_id.to_string());
            true
        };
        log::debug!("item {} liked={}", item_id, liked);
        Ok(liked)
    }

    fn is_liked(&self, item_id: &str) -> bool {
        self.liked.contains(item_id)
    }
}
