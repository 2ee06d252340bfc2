//! Compiled-in configuration
//!
//! `build.rs` validates lock.toml and emits the values as constants;
//! this module turns them into the core configuration types.

use defmt::*;

use keyward_core::config::{BoardConfig, ConfigError, KeyMap, LockConfig, INPUT_CAPACITY};
use keyward_drivers::display::Lines;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/lock_config.rs"));
}

/// Board settings from lock.toml
pub fn board_config() -> BoardConfig {
    BoardConfig {
        display_address: generated::DISPLAY_ADDRESS,
        display_columns: generated::DISPLAY_COLUMNS,
        keymap: KeyMap(generated::KEYMAP),
        scan_period_ms: generated::SCAN_PERIOD_MS,
        column_settle_us: generated::COLUMN_SETTLE_US,
        debug_baudrate: generated::DEBUG_BAUDRATE,
    }
}

/// HD44780 function-set line mode
pub fn display_lines() -> Lines {
    match generated::DISPLAY_LINES {
        2 => Lines::Two,
        _ => Lines::One,
    }
}

fn build_lock_config(board: &BoardConfig) -> Result<LockConfig, ConfigError> {
    let mut config = LockConfig {
        clear_key: generated::CLEAR_KEY,
        submit_key: generated::SUBMIT_KEY,
        entry_columns: board.display_columns.min(INPUT_CAPACITY as u8),
        max_attempts: generated::MAX_ATTEMPTS,
        lockout_secs: generated::LOCKOUT_SECS,
        lockout_notice_ms: generated::LOCKOUT_NOTICE_MS,
        key_pacing_ms: generated::KEY_PACING_MS,
        unlock_hold_ms: generated::UNLOCK_HOLD_MS,
        ..LockConfig::default()
    };
    config.set_credential(generated::CREDENTIAL)?;
    config.validate(&board.keymap)?;
    Ok(config)
}

/// Lock policy from lock.toml
///
/// build.rs applies the same checks, so the fallback only triggers if
/// the two ever drift apart.
pub fn lock_config(board: &BoardConfig) -> LockConfig {
    match build_lock_config(board) {
        Ok(config) => {
            info!(
                "Lock policy: {} attempts, {}s lockout",
                config.max_attempts, config.lockout_secs
            );
            config
        }
        Err(e) => {
            error!("Invalid compiled-in lock policy: {:?}", e);
            error!("Using reference lock policy");
            LockConfig::default()
        }
    }
}
