// src/animation/voyage_manager.rs
//
// Owns every live Voyage. Voyages are started with caller-supplied
// callbacks, driven together from the host update loop, and dropped when
// they complete naturally or the caller stops them.

use std::collections::HashMap;

use crate::animation::{CompleteFn, ProgressFn, Voyage};
use crate::models::ShipPath;

/// Opaque handle for a started voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoyageHandle(u64);

pub struct VoyageManager {
    voyages: HashMap<VoyageHandle, Voyage>,
    next_id: u64,
    tick_interval: f32,
    step: f64,
}

impl VoyageManager {
    pub fn new(tick_interval: f32, step: f64) -> Self {
        Self {
            voyages: HashMap::new(),
            next_id: 0,
            tick_interval,
            step,
        }
    }

    /// Starts a voyage along `path`. The initial progress report fires
    /// before this returns; a single-waypoint path also completes before
    /// this returns and is never tracked.
    pub fn start(
        &mut self,
        path: ShipPath,
        on_progress: ProgressFn,
        on_complete: CompleteFn,
    ) -> VoyageHandle {
        let handle = VoyageHandle(self.next_id);
        self.next_id += 1;

        let voyage = Voyage::new(path, self.tick_interval, self.step, on_progress, on_complete);
        if !voyage.is_complete() {
            self.voyages.insert(handle, voyage);
        }
        handle
    }

    /// Cancels a voyage's remaining ticks. Safe to call repeatedly or after
    /// natural completion.
    pub fn stop(&mut self, handle: VoyageHandle) {
        self.voyages.remove(&handle);
    }

    pub fn is_active(&self, handle: VoyageHandle) -> bool {
        self.voyages.contains_key(&handle)
    }

    pub fn active_count(&self) -> usize {
        self.voyages.len()
    }

    /// Advances every live voyage and drops the ones that completed.
    pub fn update_all(&mut self, dt: f32) {
        for voyage in self.voyages.values_mut() {
            voyage.update(dt);
        }
        self.voyages.retain(|_, voyage| !voyage.is_complete());
    }

    /// Whole-system teardown: no callback fires after this.
    pub fn cancel_all(&mut self) {
        self.voyages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::VoyageState;
    use crate::models::LngLat;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const TICK: f32 = 2.0;

    fn two_leg_path() -> ShipPath {
        ShipPath::new(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(10.0, 0.0),
            LngLat::new(10.0, 10.0),
        ])
        .unwrap()
    }

    fn start_recording(
        manager: &mut VoyageManager,
        path: ShipPath,
    ) -> (VoyageHandle, Rc<RefCell<Vec<VoyageState>>>, Rc<Cell<u32>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));

        let progress_log = Rc::clone(&log);
        let completion_count = Rc::clone(&completions);
        let handle = manager.start(
            path,
            Box::new(move |state, _| progress_log.borrow_mut().push(*state)),
            Box::new(move || completion_count.set(completion_count.get() + 1)),
        );

        (handle, log, completions)
    }

    #[test]
    fn test_stop_cancels_remaining_ticks() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let (handle, log, completions) = start_recording(&mut manager, two_leg_path());

        manager.update_all(TICK);
        let reports_before_stop = log.borrow().len();

        manager.stop(handle);
        assert!(!manager.is_active(handle));

        for _ in 0..10 {
            manager.update_all(TICK);
        }
        assert_eq!(log.borrow().len(), reports_before_stop);
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let (handle, _, _) = start_recording(&mut manager, two_leg_path());

        manager.stop(handle);
        manager.stop(handle);
        manager.stop(handle);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn test_completed_voyages_are_dropped() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let (handle, _, completions) = start_recording(&mut manager, two_leg_path());

        for _ in 0..4 {
            manager.update_all(TICK);
        }

        assert_eq!(completions.get(), 1);
        assert!(!manager.is_active(handle));
        assert_eq!(manager.active_count(), 0);

        // stop after natural completion is a no-op
        manager.stop(handle);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_degenerate_path_never_tracked() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let path = ShipPath::new(vec![LngLat::new(1.0, 2.0)]).unwrap();
        let (handle, log, completions) = start_recording(&mut manager, path);

        assert!(!manager.is_active(handle));
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_voyages_advance_independently() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let (fast, _, fast_completions) = start_recording(
            &mut manager,
            ShipPath::new(vec![LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0)]).unwrap(),
        );
        let (slow, _, slow_completions) = start_recording(&mut manager, two_leg_path());

        manager.update_all(TICK);
        manager.update_all(TICK);

        assert_eq!(fast_completions.get(), 1);
        assert!(!manager.is_active(fast));
        assert_eq!(slow_completions.get(), 0);
        assert!(manager.is_active(slow));
    }

    #[test]
    fn test_cancel_all() {
        let mut manager = VoyageManager::new(TICK, 0.5);
        let (_, log_a, _) = start_recording(&mut manager, two_leg_path());
        let (_, log_b, _) = start_recording(&mut manager, two_leg_path());

        manager.cancel_all();
        assert_eq!(manager.active_count(), 0);

        for _ in 0..5 {
            manager.update_all(TICK);
        }
        assert_eq!(log_a.borrow().len(), 1);
        assert_eq!(log_b.borrow().len(), 1);
    }
}
