//! Whether a row or cell should look clickable.
//!
//! The answer only drives styling. Handlers are dispatched whether or not
//! an element is flagged clickable.

use crate::handler::{EventHandlers, EventKind};

/// True when any of the five event kinds has at least one handler attached.
pub fn is_clickable<E>(handlers: &EventHandlers<E>) -> bool {
    EventKind::ALL
        .iter()
        .any(|kind| !handlers.chain(*kind).is_empty())
}

/// Something that carries event handlers.
pub trait Interactive {
    type Event;

    fn handlers(&self) -> &EventHandlers<Self::Event>;

    fn is_clickable(&self) -> bool {
        is_clickable(self.handlers())
    }
}
