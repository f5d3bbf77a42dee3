use crate::internal_log::{InternalLog, SdkVerbosity};
use std::sync::atomic::{AtomicBool, Ordering};

/// An automatic instrumentation feature that can be switched on once.
///
/// The bootstrapper starts these conditionally from configuration flags;
/// what "tracking" captures afterwards is the native layer's business.
pub trait Instrumentation: Send + Sync {
    /// Begin tracking. Safe to call more than once; only the first call
    /// has any effect.
    fn start_tracking(&self);

    fn is_tracking(&self) -> bool;
}

/// Tracks user interactions (taps, scrolls) as RUM actions.
#[derive(Default)]
pub struct UserInteractionTracking {
    started: AtomicBool,
}

impl Instrumentation for UserInteractionTracking {
    fn start_tracking(&self) {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            InternalLog::log("user interaction tracking started", SdkVerbosity::Debug);
        }
    }

    fn is_tracking(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}

/// Tracks unhandled runtime errors as RUM errors.
#[derive(Default)]
pub struct ErrorTracking {
    started: AtomicBool,
}

impl Instrumentation for ErrorTracking {
    fn start_tracking(&self) {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            InternalLog::log("error tracking started", SdkVerbosity::Debug);
        }
    }

    fn is_tracking(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}
