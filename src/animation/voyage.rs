// src/animation/voyage.rs
//
// The ship motion animator
//
// A Voyage advances a simulated position along a waypoint path, one tick
// per elapsed interval. Each tick reports the new state through the
// progress callback; reaching the final waypoint fires the completion
// callback exactly once and the voyage stops for good. Rendering is the
// caller's business.

use crate::models::{LngLat, ShipPath};

/// Where along the path a voyage currently is: traversing the segment
/// between waypoint `segment_index` and the next one, `progress` of the
/// way across. The terminal state is the last segment at progress 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoyageState {
    pub segment_index: usize,
    pub progress: f64,
}

pub type ProgressFn = Box<dyn FnMut(&VoyageState, LngLat)>;
pub type CompleteFn = Box<dyn FnOnce()>;

pub struct Voyage {
    path: ShipPath,
    state: VoyageState,
    tick_timer: f32,
    tick_interval: f32,
    step: f64,
    completed: bool,
    on_progress: ProgressFn,
    on_complete: Option<CompleteFn>,
}

impl Voyage {
    /// Reports the initial state synchronously. A single-waypoint path has
    /// nothing to traverse and completes immediately.
    pub fn new(
        path: ShipPath,
        tick_interval: f32,
        step: f64,
        mut on_progress: ProgressFn,
        on_complete: CompleteFn,
    ) -> Self {
        let state = VoyageState {
            segment_index: 0,
            progress: 0.0,
        };
        on_progress(&state, path.first());

        let mut voyage = Self {
            path,
            state,
            tick_timer: 0.0,
            tick_interval,
            step,
            completed: false,
            on_progress,
            on_complete: Some(on_complete),
        };

        if voyage.path.len() < 2 {
            voyage.finish();
        }
        voyage
    }

    /// Accumulates wall-clock time and runs one tick per elapsed interval.
    pub fn update(&mut self, dt: f32) {
        if self.completed {
            return;
        }

        self.tick_timer += dt;
        if self.tick_timer >= self.tick_interval {
            self.tick_timer -= self.tick_interval;
            self.tick();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn state(&self) -> VoyageState {
        self.state
    }

    pub fn path(&self) -> &ShipPath {
        &self.path
    }

    // One discrete animation step. Advances at most one segment.
    fn tick(&mut self) {
        let last_segment = self.path.len() - 1;

        // Terminal guard, idempotent
        if self.state.segment_index >= last_segment {
            self.finish();
            return;
        }

        let new_progress = self.state.progress + self.step;

        if new_progress < 1.0 {
            self.state.progress = new_progress;
            let position = self
                .path
                .position_at(self.state.segment_index, self.state.progress);
            (self.on_progress)(&self.state, position);
            return;
        }

        let next_segment = self.state.segment_index + 1;
        if next_segment >= last_segment {
            // Final segment traversed: snap to the exact last waypoint.
            self.state.progress = 1.0;
            let final_position = self.path.last();
            (self.on_progress)(&self.state, final_position);
            self.finish();
            return;
        }

        self.state = VoyageState {
            segment_index: next_segment,
            progress: 0.0,
        };
        let position = self.path.position_at(next_segment, 0.0);
        (self.on_progress)(&self.state, position);
    }

    // Completed is flipped before the callback runs, so a misbehaving
    // callback cannot leave the voyage ticking.
    fn finish(&mut self) {
        self.completed = true;
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}
