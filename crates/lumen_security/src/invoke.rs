//! The callback panic boundary.
//!
//! Widgets hand user-supplied closures (`on_pressed`, `on_completed`, ...)
//! back into user code from the middle of event dispatch. A panic there must
//! not tear down the dispatch loop, so these wrappers contain it. This module
//! is the workspace's only `catch_unwind` call site; the pattern does not
//! spread beyond it.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Invokes an optional zero-argument callback, containing any panic.
///
/// An absent callback is a no-op. A panicking callback is caught, its message
/// logged at error level, and nothing propagates to the caller.
///
/// An absent callback needs a type annotation: `safe_invoke(None::<fn()>)`.
pub fn safe_invoke<F>(callback: Option<F>)
where
    F: FnOnce(),
{
    let Some(callback) = callback else {
        return;
    };
    if let Err(payload) = catch_unwind(AssertUnwindSafe(callback)) {
        tracing::error!(
            target: "lumen::security",
            panic = panic_message(payload.as_ref()),
            "widget callback panicked; contained"
        );
    }
}

/// Invokes an optional one-argument callback, containing any panic.
///
/// The value is moved into the callback; if the callback is absent the value
/// is simply dropped.
pub fn safe_invoke_with<T, F>(callback: Option<F>, value: T)
where
    F: FnOnce(T),
{
    let Some(callback) = callback else {
        return;
    };
    if let Err(payload) = catch_unwind(AssertUnwindSafe(move || callback(value))) {
        tracing::error!(
            target: "lumen::security",
            panic = panic_message(payload.as_ref()),
            "widget callback panicked; contained"
        );
    }
}

/// Pulls a printable message out of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "opaque panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn absent_callbacks_are_no_ops() {
        safe_invoke(None::<fn()>);
        safe_invoke_with(None::<fn(u32)>, 7);
    }

    #[test]
    fn callbacks_run_and_receive_their_value() {
        let hits = Cell::new(0);
        safe_invoke(Some(|| hits.set(hits.get() + 1)));
        safe_invoke_with(Some(|v: i32| hits.set(hits.get() + v)), 10);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn str_panic_does_not_propagate() {
        safe_invoke(Some(|| panic!("handler blew up")));
        // Reaching this line is the assertion.
    }

    #[test]
    fn string_panic_does_not_propagate() {
        let detail = String::from("formatted failure 42");
        safe_invoke(Some(move || panic!("{detail}")));
    }

    #[test]
    fn value_arg_panic_does_not_propagate() {
        safe_invoke_with(Some(|v: u32| assert_eq!(v, 999, "unexpected value")), 1);
    }

    #[test]
    fn non_string_payload_is_contained_too() {
        safe_invoke(Some(|| std::panic::panic_any(404_u16)));
    }

    #[test]
    fn state_before_the_panic_survives() {
        let hits = Cell::new(0);
        safe_invoke(Some(|| {
            hits.set(1);
            panic!("after the write");
        }));
        assert_eq!(hits.get(), 1);
    }
}
