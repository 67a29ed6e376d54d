//! Two-pane browsing state: a row viewport, a column viewport and the focus between them.

use std::ops::Range;

use tracing::debug;

use super::viewport::{Movement, Viewport, ViewportError};

/// Which pane receives move commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Rows,
    Columns,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Rows => Focus::Columns,
            Focus::Columns => Focus::Rows,
        }
    }
}

/// Discrete input events consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserEvent {
    Move(Movement),
    ToggleFocus,
    /// New pane height, in lines.
    Resize(u16),
    Quit,
}

/// Whether the event loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the renderer needs to draw one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSnapshot {
    pub visible: Range<usize>,
    pub selected: Option<usize>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub rows: PaneSnapshot,
    pub columns: PaneSnapshot,
}

/// Routes events to the focused [`Viewport`] and resizes both panes together.
#[derive(Debug, Clone)]
pub struct DualPaneController {
    rows: Viewport,
    columns: Viewport,
    focus: Focus,
}

impl DualPaneController {
    pub fn new(
        row_count: usize,
        column_count: usize,
        height: usize,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            rows: Viewport::new(row_count, height)?,
            columns: Viewport::new(column_count, height)?,
            focus: Focus::default(),
        })
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn row_viewport(&self) -> &Viewport {
        &self.rows
    }

    pub fn column_viewport(&self) -> &Viewport {
        &self.columns
    }

    /// Record whose values fill the right pane.
    pub fn selected_row(&self) -> Option<usize> {
        self.rows.selection()
    }

    pub fn handle_toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        debug!(focus = ?self.focus(), "Focus toggled");
    }

    pub fn handle_move(&mut self, movement: Movement) {
        match self.focus {
            Focus::Rows => self.rows.apply(movement),
            Focus::Columns => self.columns.apply(movement),
        }
    }

    /// Resize both panes. An invalid height leaves both untouched.
    pub fn handle_resize(&mut self, height: usize) -> Result<(), ViewportError> {
        let mut rows = self.rows;
        let mut columns = self.columns;
        rows.resize(height)?;
        columns.resize(height)?;
        self.rows = rows;
        self.columns = columns;
        debug!(
            height,
            rows_start = self.rows.start(),
            rows_end = self.rows.end(),
            columns_start = self.columns.start(),
            columns_end = self.columns.end(),
            "Panes resized"
        );
        Ok(())
    }

    /// Apply one event. `Quit` is reported back and otherwise ignored.
    pub fn handle_event(&mut self, event: BrowserEvent) -> Result<Flow, ViewportError> {
        match event {
            BrowserEvent::Move(movement) => self.handle_move(movement),
            BrowserEvent::ToggleFocus => self.handle_toggle_focus(),
            BrowserEvent::Resize(height) => self.handle_resize(usize::from(height))?,
            BrowserEvent::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            rows: pane_snapshot(&self.rows, self.focus == Focus::Rows),
            columns: pane_snapshot(&self.columns, self.focus == Focus::Columns),
        }
    }
}

fn pane_snapshot(viewport: &Viewport, focused: bool) -> PaneSnapshot {
    PaneSnapshot {
        visible: viewport.visible_range(),
        selected: viewport.selection(),
        focused,
    }
}
