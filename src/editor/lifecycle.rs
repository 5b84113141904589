//! Editor Map Slot
//!
//! The editor owns at most one interactive map per mount. The slot refuses
//! re-entrant construction and releases the map exactly once.

/// A live map that must be released explicitly
pub trait MapHandle {
    /// Re-measure the container and redraw tiles
    fn invalidate_size(&self);

    /// Tear the map down; the handle is unusable afterwards
    fn release(self);
}

#[derive(Debug)]
enum SlotState<M> {
    Empty,
    Building,
    Ready(M),
    /// Construction failed; the screen stays mapless
    Failed,
}

impl<M> Default for SlotState<M> {
    fn default() -> Self {
        SlotState::Empty
    }
}

#[derive(Debug)]
pub struct MapSlot<M> {
    state: SlotState<M>,
}

impl<M: MapHandle> MapSlot<M> {
    pub fn new() -> Self {
        Self { state: SlotState::Empty }
    }

    /// Claim the slot for construction; `false` if a map exists, is being built, or failed
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, SlotState::Empty) {
            self.state = SlotState::Building;
            true
        } else {
            false
        }
    }

    /// Store the result of a construction started with [`begin`](Self::begin).
    ///
    /// Returns the error to report, if any. A map finished without a claim is
    /// released straight away.
    pub fn finish<E>(&mut self, built: Result<M, E>) -> Option<E> {
        if !matches!(self.state, SlotState::Building) {
            if let Ok(map) = built {
                map.release();
            }
            return None;
        }
        match built {
            Ok(map) => {
                self.state = SlotState::Ready(map);
                None
            }
            Err(e) => {
                self.state = SlotState::Failed;
                Some(e)
            }
        }
    }

    pub fn map(&self) -> Option<&M> {
        match &self.state {
            SlotState::Ready(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.map().is_some()
    }

    /// Size changed (window resize, container settled)
    pub fn invalidate_size(&self) {
        if let Some(map) = self.map() {
            map.invalidate_size();
        }
    }

    /// Release the map, if any; idempotent
    pub fn teardown(&mut self) {
        if let SlotState::Ready(map) = std::mem::take(&mut self.state) {
            map.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Counters {
        invalidated: Cell<u32>,
        released: Cell<u32>,
    }

    #[derive(Debug)]
    struct FakeMap(Rc<Counters>);

    impl MapHandle for FakeMap {
        fn invalidate_size(&self) {
            self.0.invalidated.set(self.0.invalidated.get() + 1);
        }

        fn release(self) {
            self.0.released.set(self.0.released.get() + 1);
        }
    }

    #[test]
    fn test_second_construction_refused() {
        let counters = Rc::new(Counters::default());
        let mut slot = MapSlot::new();

        assert!(slot.begin());
        assert!(!slot.begin());
        assert_eq!(slot.finish::<String>(Ok(FakeMap(counters.clone()))), None);
        assert!(!slot.begin());
        assert!(slot.is_ready());
    }

    #[test]
    fn test_unclaimed_map_is_released() {
        let counters = Rc::new(Counters::default());
        let mut slot: MapSlot<FakeMap> = MapSlot::new();

        assert_eq!(slot.finish::<String>(Ok(FakeMap(counters.clone()))), None);
        assert_eq!(counters.released.get(), 1);
        assert!(!slot.is_ready());
    }

    #[test]
    fn test_teardown_releases_once() {
        let counters = Rc::new(Counters::default());
        let mut slot = MapSlot::new();
        slot.begin();
        slot.finish::<String>(Ok(FakeMap(counters.clone())));

        slot.teardown();
        slot.teardown();

        assert_eq!(counters.released.get(), 1);
        assert!(!slot.is_ready());
    }

    #[test]
    fn test_failure_reported_once_and_not_retried() {
        let mut slot: MapSlot<FakeMap> = MapSlot::new();
        slot.begin();

        assert_eq!(slot.finish(Err("L is not defined")), Some("L is not defined"));
        assert!(!slot.begin());
        assert!(!slot.is_ready());
    }

    #[test]
    fn test_resize_only_reaches_ready_map() {
        let counters = Rc::new(Counters::default());
        let mut slot = MapSlot::new();
        slot.invalidate_size();

        slot.begin();
        slot.finish::<String>(Ok(FakeMap(counters.clone())));
        slot.invalidate_size();
        slot.invalidate_size();

        assert_eq!(counters.invalidated.get(), 2);
    }
}
