//! Scrollable window plus cursor over a fixed-length sequence.
//!
//! A [`Viewport`] knows nothing about what it scrolls over: it tracks a half-open window
//! `[start, end)` and a selected index inside it, against a visible height. Every operation
//! clamps rather than fails, except for a zero height, which can never be satisfied.

use std::ops::Range;

use thiserror::Error;

/// Errors raised while building or resizing a [`Viewport`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ViewportError {
    /// The visible height must be at least one item.
    #[error("Invalid viewport height {height}: at least one line is required")]
    InvalidDimension { height: usize },
}

/// A single-step or page-sized cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
}

/// Window and cursor state for one pane.
///
/// For a non-empty sequence the following always holds:
/// `start <= selection < end <= length`, `end - start == min(height, length - start)`
/// and `start == 0` whenever everything fits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    length: usize,
    height: usize,
    start: usize,
    end: usize,
    selection: usize,
}

impl Viewport {
    /// Create a viewport over `length` items showing at most `height` of them.
    pub fn new(length: usize, height: usize) -> Result<Self, ViewportError> {
        check_height(height)?;
        Ok(Self {
            length,
            height,
            start: 0,
            end: length.min(height),
            selection: 0,
        })
    }

    /// Total number of items; fixed for the lifetime of the viewport.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Currently selected index, `None` when there is nothing to select.
    #[inline]
    pub fn selection(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.selection)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Indices to draw, top to bottom.
    pub fn visible_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Dispatch a [`Movement`] to the matching move operation.
    pub fn apply(&mut self, movement: Movement) {
        match movement {
            Movement::Up => self.move_up(),
            Movement::Down => self.move_down(),
            Movement::PageUp => self.move_page_up(),
            Movement::PageDown => self.move_page_down(),
        }
    }

    /// Move the cursor up one item. Leaving the window scrolls it back a whole page.
    pub fn move_up(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selection = self.selection.saturating_sub(1);
        if self.selection < self.start {
            self.page_back();
        }
    }

    /// Move the cursor down one item. Leaving the window restarts it at the cursor.
    pub fn move_down(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selection = (self.selection + 1).min(self.length - 1);
        if self.selection >= self.end {
            self.start = self.selection;
            self.end = self.length.min(self.start + self.height);
        }
    }

    /// Jump to the top of the window, or scroll back a page when already there.
    pub fn move_page_up(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.selection > self.start {
            self.selection = self.start;
        } else {
            self.page_back();
            self.selection = self.start;
        }
    }

    /// Jump to the bottom of the window, or scroll forward a page when already there.
    pub fn move_page_down(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.selection + 1 < self.end {
            self.selection = self.end - 1;
        } else if self.end < self.length {
            self.start = self.end;
            self.end = (self.start + self.height).min(self.length);
            self.selection = self.end - 1;
        }
    }

    /// Change the visible height and pull the window back inside its bounds.
    ///
    /// On error the viewport is left untouched.
    pub fn resize(&mut self, height: usize) -> Result<(), ViewportError> {
        check_height(height)?;
        self.height = height;
        self.end = (self.start + height).min(self.length);
        if self.end - self.start < height && self.start > 0 {
            self.start = self.end.saturating_sub(height);
        }
        if !self.is_empty() {
            self.selection = self.selection.clamp(self.start, self.end - 1);
        }
        Ok(())
    }

    fn page_back(&mut self) {
        self.start = self.start.saturating_sub(self.height);
        self.end = (self.start + self.height).min(self.length);
    }
}

fn check_height(height: usize) -> Result<(), ViewportError> {
    if height == 0 {
        return Err(ViewportError::InvalidDimension { height });
    }
    Ok(())
}
