//! Convenient macros for application messaging and logging.
//!
//! The macros switch between two output modes at runtime. In normal mode
//! messages go straight to the console with `println!`/`eprintln!`. In
//! debug mode (`TASKDECK_DEBUG` or `RUST_LOG` set) they are routed through
//! the tracing system instead, so they interleave correctly with
//! structured log output.
//!
//! ## Macro Categories
//!
//! - **Display**: `msg_print!`, `msg_success!`, `msg_info!`, `msg_warning!`
//! - **Errors**: `msg_error!`, `msg_error_anyhow!`
//! - **Debug**: `msg_debug!` (suppressed entirely in normal mode)

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether message output should be routed through tracing.
///
/// Debug mode is enabled when either `TASKDECK_DEBUG` or `RUST_LOG` is
/// set in the environment. The check runs once and is cached for the
/// lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix. Uses stderr in normal mode so
/// errors stay separable from regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Prints a debug-only message with 🔍 prefix. Completely suppressed in
/// normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
