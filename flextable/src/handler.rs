//! Event kinds, payloads and ordered handler chains.

use std::fmt;
use std::sync::Arc;

use crate::types::RowPosition;

/// Pointer interactions a row or cell can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DoubleClick,
    MouseOver,
    MouseOut,
    RightClick,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Click,
        EventKind::DoubleClick,
        EventKind::MouseOver,
        EventKind::MouseOut,
        EventKind::RightClick,
    ];
}

/// Payload delivered to row-level callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowEvent {
    pub kind: EventKind,
    pub row_index: usize,
}

/// Payload delivered to cell-level callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub kind: EventKind,
    pub row: RowPosition,
    pub column_index: usize,
}

impl CellEvent {
    /// Body row index, `None` when the cell sits in the header.
    pub fn row_index(&self) -> Option<usize> {
        self.row.body_index()
    }
}

pub type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Handlers for one event kind, invoked in the order they were added.
///
/// Every handler runs on every dispatch; none can stop the ones after it.
pub struct HandlerChain<E> {
    handlers: Vec<Handler<E>>,
}

impl<E> HandlerChain<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn push(&mut self, handler: Handler<E>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler with `event`. Returns how many ran.
    pub fn invoke(&self, event: &E) -> usize {
        for handler in &self.handlers {
            handler(event);
        }
        self.handlers.len()
    }
}

impl<E> Default for HandlerChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HandlerChain<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandlerChain({})", self.handlers.len())
    }
}

/// One handler chain per [`EventKind`].
///
/// An empty chain stands for "no handler"; there is no shared no-op default.
pub struct EventHandlers<E> {
    click: HandlerChain<E>,
    double_click: HandlerChain<E>,
    mouse_over: HandlerChain<E>,
    mouse_out: HandlerChain<E>,
    right_click: HandlerChain<E>,
}

impl<E> EventHandlers<E> {
    pub fn new() -> Self {
        Self {
            click: HandlerChain::new(),
            double_click: HandlerChain::new(),
            mouse_over: HandlerChain::new(),
            mouse_out: HandlerChain::new(),
            right_click: HandlerChain::new(),
        }
    }

    pub fn chain(&self, kind: EventKind) -> &HandlerChain<E> {
        match kind {
            EventKind::Click => &self.click,
            EventKind::DoubleClick => &self.double_click,
            EventKind::MouseOver => &self.mouse_over,
            EventKind::MouseOut => &self.mouse_out,
            EventKind::RightClick => &self.right_click,
        }
    }

    pub fn chain_mut(&mut self, kind: EventKind) -> &mut HandlerChain<E> {
        match kind {
            EventKind::Click => &mut self.click,
            EventKind::DoubleClick => &mut self.double_click,
            EventKind::MouseOver => &mut self.mouse_over,
            EventKind::MouseOut => &mut self.mouse_out,
            EventKind::RightClick => &mut self.right_click,
        }
    }

    /// Append a handler to the chain for `kind`.
    pub fn on<F>(&mut self, kind: EventKind, f: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.chain_mut(kind).push(Arc::new(f));
    }

    pub fn dispatch(&self, kind: EventKind, event: &E) -> usize {
        self.chain(kind).invoke(event)
    }
}

impl<E: 'static> EventHandlers<E> {
    /// Fix the payload of every handler, producing handlers that take no event.
    ///
    /// `payload` builds the event for the kind being dispatched, so the
    /// row and column indices are attached at call time.
    pub fn bind<P>(&self, payload: P) -> EventHandlers<()>
    where
        P: Fn(EventKind) -> E + Send + Sync + 'static,
    {
        let payload = Arc::new(payload);
        let mut bound = EventHandlers::new();
        for kind in EventKind::ALL {
            for handler in &self.chain(kind).handlers {
                let handler = Arc::clone(handler);
                let payload = Arc::clone(&payload);
                bound.on(kind, move |_: &()| handler(&payload(kind)));
            }
        }
        bound
    }
}

impl<E> Default for EventHandlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventHandlers<E> {
    fn clone(&self) -> Self {
        Self {
            click: self.click.clone(),
            double_click: self.double_click.clone(),
            mouse_over: self.mouse_over.clone(),
            mouse_out: self.mouse_out.clone(),
            right_click: self.right_click.clone(),
        }
    }
}

impl<E> fmt::Debug for EventHandlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("click", &self.click.len())
            .field("double_click", &self.double_click.len())
            .field("mouse_over", &self.mouse_over.len())
            .field("mouse_out", &self.mouse_out.len())
            .field("right_click", &self.right_click.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_chain_runs_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut chain = HandlerChain::<u32>::new();
        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            chain.push(Arc::new(move |value: &u32| {
                log.lock().unwrap().push(format!("{tag}:{value}"));
            }));
        }

        assert_eq!(chain.invoke(&7), 3);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:7", "second:7", "third:7"]
        );
    }

    #[test]
    fn test_bind_attaches_payload_at_call_time() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut handlers = EventHandlers::<RowEvent>::new();
        let sink = Arc::clone(&seen);
        handlers.on(EventKind::RightClick, move |event: &RowEvent| {
            sink.lock().unwrap().push(*event);
        });

        let bound = handlers.bind(|kind| RowEvent { kind, row_index: 4 });
        assert_eq!(bound.dispatch(EventKind::Click, &()), 0);
        assert_eq!(bound.dispatch(EventKind::RightClick, &()), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![RowEvent {
                kind: EventKind::RightClick,
                row_index: 4
            }]
        );
    }
}
