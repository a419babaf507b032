//! Countdown tick source using ESP-IDF's esp_timer API.
//!
//! A periodic timer pushes [`Event::Tick`] into the event queue once per
//! configured period. Timer callbacks execute in the ESP timer task
//! context (not ISR), and only call `push_event()`.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::events::{Event, push_event};

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

/// SAFETY: TICK_TIMER is written once in `start_tick_timer()` before any
/// timer callback fires. Only called from the single main task.
#[cfg(target_os = "espidf")]
unsafe fn tick_timer() -> esp_timer_handle_t {
    unsafe { TICK_TIMER }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn countdown_tick_cb(_arg: *mut core::ffi::c_void) {
    if !push_event(Event::Tick) {
        log::warn!("hw_timer: event queue full, tick dropped");
    }
}

/// Convert the configured period to the esp_timer microsecond argument.
pub const fn period_us(tick_period_ms: u32) -> u64 {
    tick_period_ms as u64 * 1_000
}

/// Start the periodic countdown tick.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(tick_period_ms: u32) -> Result<(), crate::error::Error> {
    use crate::error::Error;

    // SAFETY: TICK_TIMER is written here once at boot from the main task
    // before the callback can fire.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(countdown_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"countdown".as_ptr(),
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer create failed (rc={})", ret);
            return Err(Error::Init("tick timer create"));
        }
        let ret = esp_timer_start_periodic(tick_timer(), period_us(tick_period_ms));
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer start failed (rc={})", ret);
            return Err(Error::Init("tick timer start"));
        }
    }
    info!("hw_timer: countdown tick every {} ms", tick_period_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(tick_period_ms: u32) -> Result<(), crate::error::Error> {
    log::info!(
        "hw_timer(sim): {} ms tick not started (ticks injected by caller)",
        tick_period_ms
    );
    Ok(())
}

/// Stop the countdown tick. Used to unwind a boot that failed after the
/// timer was started.
#[cfg(target_os = "espidf")]
pub fn stop_tick_timer() {
    // SAFETY: tick_timer() contract; null-check covers a failed start.
    unsafe {
        let t = tick_timer();
        if !t.is_null() && esp_timer_stop(t) != ESP_OK {
            log::warn!("hw_timer: tick timer stop failed");
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_tick_timer() {}
