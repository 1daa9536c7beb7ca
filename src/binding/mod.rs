//! C entry points.
//!
//! The engine registers a [`HostVTable`] once, then opens the party screen
//! with [`InitFullSummaryScreen`]. From then on it keeps calling whatever
//! main callback the screen installed: [`SummaryScreen_MainCallback`] while
//! the party is shown, or one of the resume callbacks after the detail pages
//! or the bag close.
//!
//! All state lives behind one mutex that is held while host functions run,
//! so host functions must not call back into these entry points.
#![allow(non_snake_case)]

mod vtable;


pub use vtable::{HostVTable, SlotRender, VTableHost, NO_TERA_TYPE, TEXT_NAME, TEXT_STATS};

use crate::config::ScreenConfig;
use crate::errors::{BindingError, BindingResult, ScreenError, ScreenResult};
use crate::host::{Host, MainCallback};
use crate::party::PartyHandle;
use crate::screen::SummaryScreen;
use schema::{Pokemon, SummaryScreenStyle};
use std::ffi::{c_char, CStr};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

struct Runtime {
    host: Option<VTableHost>,
    config: Option<ScreenConfig>,
    screen: Option<SummaryScreen>,
}

static RUNTIME: Mutex<Runtime> = Mutex::new(Runtime {
    host: None,
    config: None,
    screen: None,
});

fn runtime() -> MutexGuard<'static, Runtime> {
    RUNTIME.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Validate an entry call and open the screen on `host`.
///
/// # Safety
/// When `count > 0`, `mons` must point to `count` initialized records that
/// stay valid, and untouched by anyone else, until the screen closes.
pub unsafe fn init_full_summary_screen<H: Host + ?Sized>(
    host: &mut H,
    callback: MainCallback,
    style_tag: u32,
    mons: *mut Pokemon,
    count: u32,
    config: ScreenConfig,
) -> BindingResult<SummaryScreen> {
    let style = SummaryScreenStyle::try_from(style_tag)?;
    let party = PartyHandle::from_raw(mons, count)?;
    Ok(SummaryScreen::open(host, callback, style, party, config))
}

/// Install the engine's function table. Returns false if it is null or
/// incomplete, leaving any earlier table in place.
///
/// # Safety
/// `vtable` must be null or point to a readable [`HostVTable`] whose entries
/// stay callable for the rest of the program.
#[no_mangle]
pub unsafe extern "C" fn SummaryScreen_RegisterHost(vtable: *const HostVTable) -> bool {
    match VTableHost::from_raw(vtable) {
        Ok(host) => {
            runtime().host = Some(host);
            info!("Summary screen host registered");
            true
        }
        Err(err) => {
            error!(%err, "Rejected summary screen host table");
            false
        }
    }
}

/// Load the layout used by later screens from RON text. Null restores the
/// defaults. A config that fails to load is logged and leaves the current one.
///
/// # Safety
/// `source` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn SummaryScreen_Configure(source: *const c_char) -> bool {
    if source.is_null() {
        runtime().config = None;
        return true;
    }
    let Ok(text) = CStr::from_ptr(source).to_str() else {
        error!("Summary screen config is not valid UTF-8");
        return false;
    };
    match ScreenConfig::from_ron(text) {
        Ok(config) => {
            runtime().config = Some(config);
            true
        }
        Err(err) => {
            error!(%err, "Rejected summary screen config");
            false
        }
    }
}

/// Open the party summary screen.
///
/// The screen takes over the main callback until the player backs out, then
/// installs `callback`. A call that cannot be honoured (unknown style, null
/// or oversized party) is logged and `callback` is installed immediately;
/// any screen still open from an earlier call is dropped with it.
///
/// # Safety
/// When `count > 0`, `mons` must point to `count` records owned by the
/// engine that stay valid until `callback` runs.
#[no_mangle]
pub unsafe extern "C" fn InitFullSummaryScreen(
    callback: MainCallback,
    style: u32,
    mons: *mut Pokemon,
    count: u32,
) {
    let mut guard = runtime();
    let rt = &mut *guard;
    let Some(host) = rt.host.as_mut() else {
        // Without a table there is no way to hand `callback` back.
        error!(err = %BindingError::NoHost, style, count, "Rejected summary screen request");
        return;
    };
    let config = rt.config.clone().unwrap_or_default();
    match init_full_summary_screen(host, callback, style, mons, count, config) {
        Ok(screen) => {
            if rt.screen.replace(screen).is_some() {
                warn!("Opening a summary screen replaced one that was still active");
            }
        }
        Err(err) => {
            error!(%err, style, count, "Rejected summary screen request");
            if rt.screen.take().is_some() {
                warn!("Rejected request closed the summary screen that was still active");
            }
            host.return_to(callback);
        }
    }
}

/// One frame of the party screen.
#[no_mangle]
pub extern "C" fn SummaryScreen_MainCallback() {
    let mut guard = runtime();
    let Runtime { host, screen, .. } = &mut *guard;
    let (Some(host), Some(active)) = (host.as_mut(), screen.as_mut()) else {
        warn!("{}", ScreenError::NotActive);
        return;
    };
    active.tick(host);
    log_events(active);
    if active.is_closed() {
        *screen = None;
    }
}

/// Installed as the detail pages' return callback.
#[no_mangle]
pub extern "C" fn SummaryScreen_ReturnFromDetail() {
    resume("detail summary", |screen, host| screen.resume_from_detail(host));
}

/// Installed as the bag's return callback.
#[no_mangle]
pub extern "C" fn SummaryScreen_ReturnFromBag() {
    resume("bag", |screen, host| screen.resume_from_bag(host));
}

fn resume(from: &str, f: impl FnOnce(&mut SummaryScreen, &mut VTableHost) -> ScreenResult<()>) {
    let mut guard = runtime();
    let Runtime { host, screen, .. } = &mut *guard;
    let (Some(host), Some(active)) = (host.as_mut(), screen.as_mut()) else {
        warn!(from, "{}", ScreenError::NotActive);
        return;
    };
    if let Err(err) = f(active, host) {
        error!(%err, from, "Ignored resume callback");
    }
    log_events(active);
}

fn log_events(screen: &mut SummaryScreen) {
    for event in screen.take_events() {
        if let Some(line) = event.format() {
            debug!("{line}");
        }
    }
}

/// Whether a screen is currently open.
pub fn is_active() -> bool {
    runtime().screen.is_some()
}

#[cfg(test)]
fn reset() {
    *runtime() = Runtime {
        host: None,
        config: None,
        screen: None,
    };
}
