//! crates/atomlog/src/thread_local.rs
//! Per-thread scratch buffers reused across log calls.

use std::cell::Cell;

thread_local! {
    static SCRATCH: Cell<Scratch> = const { Cell::new(Scratch::new()) };
}

/// Buffers used to render and frame one line.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    /// Rendered record text.
    pub(crate) line: String,
    /// Framed bytes handed to the sink.
    pub(crate) frame: Vec<u8>,
}

impl Scratch {
    const fn new() -> Self {
        Self {
            line: String::new(),
            frame: Vec::new(),
        }
    }
}

/// Takes the calling thread's scratch buffers, leaving empty ones behind.
///
/// A nested call on the same thread simply gets fresh buffers. During thread
/// teardown, when the slot is gone, fresh buffers are returned as well.
pub(crate) fn take_scratch() -> Scratch {
    SCRATCH.try_with(Cell::take).unwrap_or_default()
}

/// Returns buffers to the calling thread for the next call.
pub(crate) fn restore_scratch(scratch: Scratch) {
    let _ = SCRATCH.try_with(|slot| slot.set(scratch));
}
