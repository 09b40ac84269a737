//! Custom panic hook for structured crash reports.
//!
//! A crash should say which version crashed, where and why, so a user can
//! file an actionable report.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info));
    }));
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        "\n=== hdbmatch crash report ===\n\
         Version:  {VERSION}\n\
         Platform: {}\n\
         Time:     {timestamp}\n\
         Message:  {}\n\
         Location: {location}\n\
         \n\
         Set RUST_BACKTRACE=1 for a backtrace and RUST_LOG=hdbmatch=debug for context.",
        std::env::consts::OS,
        panic_message(info),
    )
}
