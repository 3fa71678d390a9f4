//! Hover and drag-to-select handling, independent of any UI toolkit.

use tracing::{debug, trace};

use crate::data_types::Cell;

/// Pointer state over the cell area. Anchors are cell times in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    Hovering { cell: usize },
    /// Button held, pointer outside the cells.
    Selecting { anchor: i64 },
    HoveringWhileSelecting { cell: usize, anchor: i64 },
}

impl PointerState {
    pub fn hovered(&self) -> Option<usize> {
        match *self {
            Self::Hovering { cell } | Self::HoveringWhileSelecting { cell, .. } => Some(cell),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<i64> {
        match *self {
            Self::Selecting { anchor } | Self::HoveringWhileSelecting { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    fn with(hovered: Option<usize>, anchor: Option<i64>) -> Self {
        match (hovered, anchor) {
            (None, None) => Self::Idle,
            (Some(cell), None) => Self::Hovering { cell },
            (None, Some(anchor)) => Self::Selecting { anchor },
            (Some(cell), Some(anchor)) => Self::HoveringWhileSelecting { cell, anchor },
        }
    }
}

/// Pointer events, each targeting a cell by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Over { cell: usize, buttons_held: bool },
    Out,
    Down { cell: usize },
    Up { cell: usize },
}

/// A committed selection, in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsoluteTimeRange {
    pub from: i64,
    pub to: i64,
}

type HoverCallback = Box<dyn FnMut(Option<&Cell>) + Send>;
type SelectCallback = Box<dyn FnMut(AbsoluteTimeRange) + Send>;

/// Drives [`PointerState`] from pointer events and reports hover changes and
/// committed selections.
#[derive(Default)]
pub struct Interaction {
    state: PointerState,
    on_hover: Option<HoverCallback>,
    on_select: Option<SelectCallback>,
}

impl std::fmt::Debug for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interaction")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_hover(mut self, callback: impl FnMut(Option<&Cell>) + Send + 'static) -> Self {
        self.on_hover = Some(Box::new(callback));
        self
    }

    pub fn on_select(mut self, callback: impl FnMut(AbsoluteTimeRange) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Forgets hover and anchor, e.g. after the cells were recomputed.
    pub fn reset(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Applies `event`; returns the range committed by a completed drag.
    ///
    /// Events naming a cell index outside `cells` are ignored.
    pub fn handle(&mut self, event: PointerEvent, cells: &[Cell]) -> Option<AbsoluteTimeRange> {
        let before = self.state;
        let anchor = before.anchor();
        let mut committed = None;

        let next = match event {
            PointerEvent::Over { cell, buttons_held } => {
                cells.get(cell)?;
                // a drag released outside the plot never sent its pointer-up
                let anchor = anchor.filter(|_| buttons_held);
                PointerState::with(Some(cell), anchor)
            }
            PointerEvent::Out => PointerState::with(None, anchor),
            PointerEvent::Down { cell } => {
                let target = cells.get(cell)?;
                PointerState::with(Some(cell), Some(target.time))
            }
            PointerEvent::Up { cell } => {
                let target = cells.get(cell)?;
                if let Some(anchor) = anchor {
                    if anchor != target.time {
                        committed = Some(AbsoluteTimeRange {
                            from: anchor.min(target.time) * 1000,
                            to: anchor.max(target.time) * 1000,
                        });
                    }
                }
                PointerState::with(Some(cell), None)
            }
        };

        trace!(?event, ?before, ?next, "pointer transition");
        self.state = next;

        if before.hovered() != next.hovered() {
            if let Some(on_hover) = self.on_hover.as_mut() {
                on_hover(next.hovered().and_then(|i| cells.get(i)));
            }
        }
        if let Some(range) = committed {
            debug!(from = range.from, to = range.to, "committed time range selection");
            if let Some(on_select) = self.on_select.as_mut() {
                on_select(range);
            }
        }
        committed
    }

    /// Indices of the cells to outline.
    ///
    /// While selecting: every cell whose time lies between the anchor and the
    /// hovered cell, inclusive. While hovering: the hovered cell and its split
    /// sibling. Nothing is outlined while no cell is hovered, even with a
    /// held anchor.
    pub fn highlighted(&self, cells: &[Cell]) -> Vec<usize> {
        match self.state {
            PointerState::Idle | PointerState::Selecting { .. } => Vec::new(),
            PointerState::Hovering { cell } => {
                let Some(target) = cells.get(cell) else {
                    return Vec::new();
                };
                let mut out = vec![cell];
                if let Some(sibling) = target.sibling_index(cell).filter(|&i| i < cells.len()) {
                    out.push(sibling);
                }
                out
            }
            PointerState::HoveringWhileSelecting { cell, anchor } => {
                let end = cells.get(cell).map_or(anchor, |c| c.time);
                time_span(cells, anchor.min(end), anchor.max(end))
            }
        }
    }
}

fn time_span(cells: &[Cell], min: i64, max: i64) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.time >= min && c.time <= max)
        .map(|(i, _)| i)
        .collect()
}
