//! Fatal-condition reporting.
//!
//! Operations that mirror the classic "assert and carry on" container API (`push`, `insert`,
//! `Extend`) cannot return an error without changing their shape. When they detect a
//! [`Violation`] they leave the container untouched and call [`report`], which forwards the
//! violation to the installed [`ViolationHandler`].
//!
//! | Handler                 | Behaviour of a violating call                           |
//! |-------------------------|---------------------------------------------------------|
//! | none installed          | panics with the violation message                       |
//! | [`IGNORE`]              | returns normally; the container was not modified        |
//! | user supplied           | whatever `on_violation` does (abort, reset, count, ...) |
//!
//! Installing [`IGNORE`] is the equivalent of compiling assertions out. Because every
//! reporting operation checks before it mutates, the container is still consistent
//! afterwards, but the value the caller tried to store has been dropped. Code that needs
//! to keep the value should use the `try_*` variants instead.
//!
//! The handler is process-global. It is stored in an `AtomicPtr` using plain loads and
//! stores, so it also works on targets without compare-and-swap.

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::Violation;

/// Table of callbacks invoked on contract violations.
#[derive(Debug)]
pub struct ViolationHandler {
    /// Called once per detected violation.
    pub on_violation: fn(Violation),
}

fn ignore(_: Violation) {}

/// A handler that swallows every violation.
pub static IGNORE: ViolationHandler = ViolationHandler {
    on_violation: ignore,
};

static HANDLER: AtomicPtr<ViolationHandler> = AtomicPtr::new(ptr::null_mut());

/// Installs `handler` for all containers, replacing any previous handler.
pub fn install(handler: &'static ViolationHandler) {
    HANDLER.store(
        handler as *const ViolationHandler as *mut ViolationHandler,
        Ordering::Release,
    );
}

/// Removes the installed handler, restoring the panicking default, and returns it.
pub fn uninstall() -> Option<&'static ViolationHandler> {
    let previous = current();
    HANDLER.store(ptr::null_mut(), Ordering::Release);
    previous
}

/// Returns the installed handler, if any.
pub fn current() -> Option<&'static ViolationHandler> {
    // SAFETY: the pointer is either null or was created from a `&'static ViolationHandler`.
    unsafe { HANDLER.load(Ordering::Acquire).as_ref() }
}

/// Reports `violation` to the installed handler, or panics if there is none.
///
/// The panic location is the caller's, so a failing `push` or `insert` points at user code.
#[track_caller]
pub fn report(violation: Violation) {
    #[cfg(feature = "log")]
    log::error!("fixed-collections contract violation: {violation}");

    match current() {
        Some(handler) => (handler.on_violation)(violation),
        None => panic!("contract violation: {violation}"),
    }
}

/// Reports `violation` and then panics regardless of the handler.
///
/// Used where the caller expects a reference back and there is nothing valid to return.
#[cold]
#[track_caller]
pub fn fatal(violation: Violation) -> ! {
    report(violation);
    panic!("contract violation: {violation}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    static SERIAL: Mutex<()> = Mutex::new(());
    static RECORDED: Mutex<Vec<Violation>> = Mutex::new(Vec::new());

    fn record(violation: Violation) {
        RECORDED
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(violation);
    }

    static RECORDER: ViolationHandler = ViolationHandler {
        on_violation: record,
    };

    /// Serializes tests that depend on the global handler state.
    pub(crate) fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs `f` with a recording handler installed and returns every violation it reported.
    pub(crate) fn recording<R>(f: impl FnOnce() -> R) -> (R, Vec<Violation>) {
        let _guard = serial();
        RECORDED.lock().unwrap_or_else(|e| e.into_inner()).clear();
        install(&RECORDER);
        let result = f();
        uninstall();
        let seen = core::mem::take(&mut *RECORDED.lock().unwrap_or_else(|e| e.into_inner()));
        (result, seen)
    }

    /// Runs `f` with no handler installed, expecting a contract panic, and returns the
    /// `(file, line)` the panic was attributed to.
    pub(crate) fn contract_panic_location(
        f: impl FnOnce() + std::panic::UnwindSafe,
    ) -> Option<(String, u32)> {
        static LOCATION: Mutex<Option<(String, u32)>> = Mutex::new(None);

        let _guard = serial();
        uninstall();
        LOCATION.lock().unwrap_or_else(|e| e.into_inner()).take();

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(|info: &std::panic::PanicHookInfo<'_>| {
            let message = info
                .payload()
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| info.payload().downcast_ref::<&str>().copied());
            if let (Some(msg), Some(loc)) = (message, info.location()) {
                if msg.starts_with("contract violation") {
                    *LOCATION.lock().unwrap_or_else(|e| e.into_inner()) =
                        Some((loc.file().to_string(), loc.line()));
                }
            }
        }));
        let caught = std::panic::catch_unwind(f);
        std::panic::set_hook(previous);

        assert!(caught.is_err(), "expected a contract panic");
        LOCATION.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}
