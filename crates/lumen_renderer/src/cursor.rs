//! Shared pixel cursor for multi-threaded rendering.
//!
//! Render threads pull pixels one at a time in row-major order. The claim is
//! the only critical section of a render; everything else a thread touches
//! is read-only or its own pixel.

use std::sync::{Mutex, PoisonError};

/// A pixel handed out to a render thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelClaim {
    pub col: u32,
    pub row: u32,
    /// Percentage of claimed pixels, set only when this claim crossed a
    /// whole-percent boundary and progress reporting is enabled
    pub progress: Option<u32>,
}

#[derive(Debug, Default)]
struct CursorState {
    row: u32,
    col: u32,
    claimed: u64,
    last_percent: u32,
}

/// Row-major pixel dispenser for an `nx` by `ny` image.
#[derive(Debug)]
pub struct PixelCursor {
    nx: u32,
    ny: u32,
    total: u64,
    report_progress: bool,
    state: Mutex<CursorState>,
}

impl PixelCursor {
    pub fn new(nx: u32, ny: u32) -> Self {
        Self {
            nx,
            ny,
            total: nx as u64 * ny as u64,
            report_progress: false,
            state: Mutex::new(CursorState::default()),
        }
    }

    /// Report whole-percent progress on claims.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.report_progress = enabled;
        self
    }

    /// Total number of pixels.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pixels claimed so far.
    pub fn claimed(&self) -> u64 {
        self.lock().claimed
    }

    /// Claim the next pixel, or `None` once every pixel is taken.
    pub fn advance(&self) -> Option<PixelClaim> {
        let mut state = self.lock();
        if self.nx == 0 || state.row >= self.ny {
            return None;
        }

        let claim = PixelClaim {
            col: state.col,
            row: state.row,
            progress: None,
        };

        state.col += 1;
        if state.col == self.nx {
            state.col = 0;
            state.row += 1;
        }
        state.claimed += 1;

        if !self.report_progress {
            return Some(claim);
        }

        let percent = (state.claimed * 100 / self.total) as u32;
        let progress = if percent > state.last_percent {
            state.last_percent = percent;
            Some(percent)
        } else {
            None
        };

        Some(PixelClaim { progress, ..claim })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CursorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
