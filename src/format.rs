//! Clock formatting for rendered schedules.

/// Formats `minutes` past `start_hour` as a 12-hour clock time, e.g. `09:30AM`.
///
/// Hours roll over the 12-hour dial without wrapping the AM/PM marker past
/// midnight; schedules never run that late.
pub fn minutes_to_friendly_time(minutes: u32, start_hour: u32) -> String {
    let hour = start_hour + minutes / 60;
    let minute = minutes % 60;
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{hour_12:02}:{minute:02}{meridiem}")
}
