/// Prints a timestamped log line, similar to `info!` in tracing.
/// Pass a start time first and the elapsed seconds since then are appended.
/// ```
/// use chemscrape::info_time;
///
/// info_time!("fetched {} of {}", 1, 2);
/// let start = chrono::Local::now();
/// info_time!(start, "fetched {} of {}", 2, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(, $arg:expr)* $(,)?) => {{
        let local_now = ::chrono::Local::now();
        println!("{:<30} : {}", local_now, format!($strfm $(, $arg)*));
    }};
    ($time:expr, $strfm:literal $(, $arg:expr)* $(,)?) => {{
        let local_now = ::chrono::Local::now();
        println!(
            "{:<30} : {} (took {:.3} sec)",
            local_now,
            format!($strfm $(, $arg)*),
            $crate::macros::elapsed_secs($time, local_now)
        );
    }};
}

#[doc(hidden)]
pub fn elapsed_secs(start: chrono::DateTime<chrono::Local>, now: chrono::DateTime<chrono::Local>) -> f64 {
    (now - start)
        .num_microseconds()
        .map(|n| n as f64 / 1_000_000.0)
        .unwrap_or(0.0)
}
