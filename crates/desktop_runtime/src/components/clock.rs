use std::time::Duration;

use leptos::*;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Local wall-clock reading. `weekday` is 0 for Sunday, `month` is 0 for January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: u32,
    pub month: u32,
    pub day: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 0,
                minute: 0,
                second: 0,
                weekday: 4,
                month: 0,
                day: 1,
            }
        }
    }

    fn twelve_hour(self) -> (u32, &'static str) {
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        (hour, suffix)
    }
}

/// `HH:MM:SS AM/PM`, shown in the taskbar.
pub(super) fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let (hour, suffix) = snapshot.twelve_hour();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour, snapshot.minute, snapshot.second, suffix
    )
}

/// `HH:MM AM/PM`, shown on the lock screen.
pub(super) fn format_lock_time(snapshot: ClockSnapshot) -> String {
    let (hour, suffix) = snapshot.twelve_hour();
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

/// `Weekday, Month D`, shown under the lock-screen time.
pub(super) fn format_lock_date(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS.get(snapshot.weekday as usize).copied().unwrap_or("");
    let month = MONTHS.get(snapshot.month as usize).copied().unwrap_or("");
    format!("{weekday}, {month} {}", snapshot.day)
}

/// Signal refreshed every `tick_ms`; the interval is cleared when the owner unmounts.
pub(super) fn use_clock(tick_ms: u64) -> ReadSignal<ClockSnapshot> {
    let (now, set_now) = create_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || set_now.set(ClockSnapshot::now()),
        Duration::from_millis(tick_ms),
    ) {
        on_cleanup(move || interval.clear());
    }
    now
}
