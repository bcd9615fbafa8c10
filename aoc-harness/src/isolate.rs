//! Running puzzle code so that an error or a panic stays contained

use crate::error::CaseError;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

static INSTALL_HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install, once per process, a panic hook that records the location of panics
/// raised inside [`call_isolated`] on the calling thread and forwards every
/// other panic to the hook that was in place before.
fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(Cell::get) {
                let location = info.location().map(|l| l.to_string());
                LOCATION.with(|slot| *slot.borrow_mut() = location);
            } else {
                previous(info);
            }
        }));
    });
}

/// Call `f`, turning both an `Err` and a panic into a [`CaseError`].
///
/// A panic inside `f` is not printed; its message and location end up in the
/// returned error instead.
pub fn call_isolated<T, F>(f: F) -> Result<T, CaseError>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    install_hook();
    LOCATION.with(|slot| slot.borrow_mut().take());
    let was_capturing = CAPTURING.with(|c| c.replace(true));

    let result = panic::catch_unwind(AssertUnwindSafe(f));

    CAPTURING.with(|c| c.set(was_capturing));

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(CaseError::Failed(e)),
        Err(payload) => Err(CaseError::Panicked {
            message: panic_message(payload.as_ref()),
            location: LOCATION.with(|slot| slot.borrow_mut().take()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
