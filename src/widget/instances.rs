//! Widget instance arena - host ids to state indices.
//!
//! Manages the lifecycle of stateful widget instances:
//! - host instance id ↔ arena index bidirectional mapping
//! - free index pool for O(1) reuse
//! - dispose callbacks run exactly once when an instance is released
//!
//! Widget modules keep their state in maps keyed by the arena index and
//! register a dispose callback at state creation, so releasing an instance
//! deterministically tears down timers before the state entry disappears.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

// =============================================================================
// Arena state
// =============================================================================

thread_local! {
    /// Map host instance id to arena index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map arena index to host instance id.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if the pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Dispose callbacks registered per index.
    static DISPOSE_CALLBACKS: RefCell<HashMap<usize, Vec<Box<dyn FnOnce()>>>> =
        RefCell::new(HashMap::new());
}

// =============================================================================
// Allocation
// =============================================================================

/// Get the arena index for a host instance id, allocating one on first use.
pub fn acquire(id: &str) -> usize {
    let existing = ID_TO_INDEX.with(|map| map.borrow().get(id).copied());
    if let Some(index) = existing {
        return index;
    }

    let index = FREE_INDICES.with(|free| free.borrow_mut().pop()).unwrap_or_else(|| {
        NEXT_INDEX.with(|next| {
            let mut next = next.borrow_mut();
            let index = *next;
            *next += 1;
            index
        })
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(id.to_string(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, id.to_string());
    });
    debug!(id, index, "widget instance acquired");

    index
}

/// Look up the arena index for a host instance id.
pub fn index_of(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Look up the host instance id for an arena index.
pub fn id_of(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Whether an index is currently allocated.
pub fn is_active(index: usize) -> bool {
    INDEX_TO_ID.with(|map| map.borrow().contains_key(&index))
}

/// Number of live instances.
pub fn active_count() -> usize {
    INDEX_TO_ID.with(|map| map.borrow().len())
}

// =============================================================================
// Dispose
// =============================================================================

/// Register a callback to run when the instance at `index` is disposed.
pub fn on_dispose(index: usize, callback: impl FnOnce() + 'static) {
    DISPOSE_CALLBACKS.with(|callbacks| {
        callbacks
            .borrow_mut()
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

/// Dispose an instance: run its callbacks, clear the mappings, return the
/// index to the pool. A no-op for unknown ids.
pub fn dispose(id: &str) {
    let index = ID_TO_INDEX.with(|map| map.borrow_mut().remove(id));
    let Some(index) = index else { return };

    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });

    // Take the callbacks out before running them so a callback can never
    // observe itself still registered.
    let callbacks = DISPOSE_CALLBACKS.with(|callbacks| callbacks.borrow_mut().remove(&index));
    if let Some(callbacks) = callbacks {
        for callback in callbacks {
            callback();
        }
    }

    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });
    debug!(id, index, "widget instance disposed");
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Dispose every live instance and clear all arena state.
pub fn reset() {
    let ids: Vec<String> =
        ID_TO_INDEX.with(|map| map.borrow().keys().cloned().collect());
    for id in ids {
        dispose(&id);
    }
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    DISPOSE_CALLBACKS.with(|callbacks| callbacks.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset();
    }

    #[test]
    fn test_acquire_is_idempotent() {
        setup();

        let a = acquire("slider-1");
        let b = acquire("slider-1");
        let c = acquire("slider-2");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(active_count(), 2);
    }

    #[test]
    fn test_dispose_and_reuse() {
        setup();

        let a = acquire("one");
        let _b = acquire("two");

        dispose("one");
        assert!(!is_active(a));
        assert_eq!(index_of("one"), None);

        // Freed index is reused.
        let c = acquire("three");
        assert_eq!(c, a);
    }

    #[test]
    fn test_id_mapping() {
        setup();

        let index = acquire("expander-7");
        assert_eq!(index_of("expander-7"), Some(index));
        assert_eq!(id_of(index), Some("expander-7".to_string()));
    }

    #[test]
    fn test_dispose_runs_callbacks_once() {
        setup();

        let calls = Rc::new(Cell::new(0));
        let calls_in_callback = calls.clone();

        let index = acquire("w");
        on_dispose(index, move || {
            calls_in_callback.set(calls_in_callback.get() + 1);
        });

        dispose("w");
        assert_eq!(calls.get(), 1);

        // Second dispose is a no-op.
        dispose("w");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dispose_unknown_id_is_noop() {
        setup();
        dispose("never-acquired");
        assert_eq!(active_count(), 0);
    }

    #[test]
    fn test_reset_disposes_everything() {
        setup();

        let disposed = Rc::new(Cell::new(false));
        let flag = disposed.clone();

        let index = acquire("w");
        on_dispose(index, move || flag.set(true));

        reset();
        assert!(disposed.get());
        assert_eq!(active_count(), 0);
    }
}
