//! Process-unique, time-ordered record identifiers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

static LAST_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Generate a new identifier: hex milliseconds-since-epoch plus a random
/// 32-bit suffix. Unique within one process lifetime; no cross-process
/// guarantee. The millis component is bumped when the clock reading repeats
/// so ids stay ordered by creation.
pub fn new_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut prev = LAST_MILLIS.load(Ordering::Relaxed);
    let millis = loop {
        let candidate = now.max(prev + 1);
        match LAST_MILLIS.compare_exchange_weak(
            prev,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => break candidate,
            Err(actual) => prev = actual,
        }
    };

    let suffix: u32 = rand::thread_rng().gen();
    format!("{millis:012x}-{suffix:08x}")
}
