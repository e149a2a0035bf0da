//! Pointer input: crossterm mouse events to table events.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::element::Element;
use crate::handler::EventKind;
use crate::render::{Hit, TableGeometry};

/// Default maximum gap between two clicks on the same cell to count as a
/// double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// One event delivered to a cell (and bubbled to its row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub target: Hit,
    pub kind: EventKind,
    /// Handlers run on the cell and its row together.
    pub handled: usize,
}

/// Tracks hover and click timing across mouse events.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    hovered: Option<Hit>,
    last_click: Option<(Hit, Instant)>,
    double_click_window: Duration,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            hovered: None,
            last_click: None,
            double_click_window: DOUBLE_CLICK_WINDOW,
        }
    }

    pub fn double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    /// The cell currently under the pointer.
    pub fn hovered(&self) -> Option<Hit> {
        self.hovered
    }

    pub fn handle(
        &mut self,
        event: &MouseEvent,
        geometry: &TableGeometry,
        root: &Element,
    ) -> Vec<Dispatched> {
        self.handle_at(event, geometry, root, Instant::now())
    }

    /// Like [`PointerTracker::handle`], with an explicit timestamp.
    pub fn handle_at(
        &mut self,
        event: &MouseEvent,
        geometry: &TableGeometry,
        root: &Element,
        now: Instant,
    ) -> Vec<Dispatched> {
        let hit = geometry.hit_test(event.column, event.row);
        let mut dispatched = Vec::new();

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = hit else {
                    self.last_click = None;
                    return dispatched;
                };
                dispatched.extend(dispatch(root, target, EventKind::Click));

                let is_double = self.last_click.is_some_and(|(previous, at)| {
                    previous == target && now.saturating_duration_since(at) <= self.double_click_window
                });
                if is_double {
                    dispatched.extend(dispatch(root, target, EventKind::DoubleClick));
                    self.last_click = None;
                } else {
                    self.last_click = Some((target, now));
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if let Some(target) = hit {
                    dispatched.extend(dispatch(root, target, EventKind::RightClick));
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if hit != self.hovered {
                    if let Some(previous) = self.hovered {
                        dispatched.extend(dispatch(root, previous, EventKind::MouseOut));
                    }
                    if let Some(target) = hit {
                        dispatched.extend(dispatch(root, target, EventKind::MouseOver));
                    }
                    self.hovered = hit;
                }
            }
            _ => {}
        }

        dispatched
    }
}

/// Fire `kind` on the cell at `target`, then on its row.
fn dispatch(root: &Element, target: Hit, kind: EventKind) -> Option<Dispatched> {
    let row = root.row_at(target.row)?;
    let cell = row.children.get(target.column)?;

    let handled = cell.dispatch(kind) + row.dispatch(kind);
    log::debug!(
        "[table] {:?} on cell ({}, {}) ran {} handlers",
        kind,
        target.row,
        target.column,
        handled
    );

    Some(Dispatched {
        target,
        kind,
        handled,
    })
}
