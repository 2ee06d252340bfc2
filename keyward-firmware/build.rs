//! Build script for keyward-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lock.toml at compile time
//! - Generates `lock_config.rs` with the validated values

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Longest credential the entry buffer holds
const MAX_CREDENTIAL_LEN: usize = 16;

fn main() {
    setup_linker();
    let config = load_config();
    let lock = validate_lock(&config);
    let board = validate_board(&config, &lock);
    generate(&lock, &board);

    println!("cargo:warning=lock.toml validated successfully");
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse lock.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=lock.toml");

    let config_path = Path::new("lock.toml");
    if !config_path.exists() {
        fail(
            "lock.toml not found!",
            &[
                "The firmware requires a lock.toml configuration file.".to_string(),
                "Create one in the keyward-firmware directory.".to_string(),
            ],
        );
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail("Failed to read lock.toml", &[e.to_string()]));

    toml::from_str(&content).unwrap_or_else(|e| {
        let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
        fail("Invalid TOML syntax in lock.toml", &lines)
    })
}

/// Abort the build with every collected error, boxed for readability
fn fail(title: &str, errors: &[String]) -> ! {
    let body = errors
        .iter()
        .map(|e| {
            let line = if e.chars().count() > 62 {
                format!("{}...", e.chars().take(59).collect::<String>())
            } else {
                e.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

/// Validated `[lock]` table
struct Lock {
    credential: String,
    clear_key: char,
    submit_key: char,
    max_attempts: i64,
    lockout_secs: i64,
    lockout_notice_ms: i64,
    key_pacing_ms: i64,
    unlock_hold_ms: i64,
}

/// Validated `[board]` table
struct Board {
    display_address: i64,
    display_columns: i64,
    display_lines: i64,
    keymap: Vec<Vec<char>>,
    scan_period_ms: i64,
    column_settle_us: i64,
    debug_baudrate: i64,
}

/// Integer field with a default and an inclusive range
fn int_field(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    default: i64,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match table.get(key) {
        None => default,
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            default
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Single-character string field
fn key_field(
    table: &toml::value::Table,
    key: &str,
    default: char,
    errors: &mut Vec<String>,
) -> char {
    match table.get(key) {
        None => default,
        Some(toml::Value::String(s)) if s.chars().count() == 1 => s.chars().next().unwrap(),
        Some(_) => {
            errors.push(format!("[lock] {} must be a single character", key));
            default
        }
    }
}

fn validate_lock(config: &toml::Value) -> Lock {
    let table = match config.get("lock") {
        Some(toml::Value::Table(t)) => t,
        _ => fail(
            "Missing [lock] section in lock.toml",
            &["[lock] with at least 'credential' is required".to_string()],
        ),
    };

    let mut errors = Vec::new();

    let credential = match table.get("credential") {
        Some(toml::Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push("[lock] credential must be a string".to_string());
            String::new()
        }
        None => {
            errors.push("[lock] missing 'credential'".to_string());
            String::new()
        }
    };

    let clear_key = key_field(table, "clear_key", '*', &mut errors);
    let submit_key = key_field(table, "submit_key", '#', &mut errors);

    if credential.is_empty() {
        errors.push("[lock] credential cannot be empty".to_string());
    }
    if credential.chars().count() > MAX_CREDENTIAL_LEN {
        errors.push(format!(
            "[lock] credential longer than {} characters",
            MAX_CREDENTIAL_LEN
        ));
    }
    if clear_key == submit_key {
        errors.push("[lock] clear_key and submit_key must differ".to_string());
    }
    if credential.contains(clear_key) || credential.contains(submit_key) {
        errors.push("[lock] credential contains the clear or submit key".to_string());
    }

    let lock = Lock {
        credential,
        clear_key,
        submit_key,
        max_attempts: int_field(table, "lock", "max_attempts", 3, 1, 255, &mut errors),
        lockout_secs: int_field(table, "lock", "lockout_secs", 10, 1, 255, &mut errors),
        lockout_notice_ms: int_field(
            table,
            "lock",
            "lockout_notice_ms",
            1000,
            0,
            60_000,
            &mut errors,
        ),
        key_pacing_ms: int_field(table, "lock", "key_pacing_ms", 300, 0, 60_000, &mut errors),
        unlock_hold_ms: int_field(table, "lock", "unlock_hold_ms", 300, 0, 60_000, &mut errors),
    };

    if !errors.is_empty() {
        fail("Invalid [lock] configuration", &errors);
    }
    lock
}

fn validate_board(config: &toml::Value, lock: &Lock) -> Board {
    let empty = toml::value::Table::new();
    let table = match config.get("board") {
        Some(toml::Value::Table(t)) => t,
        None => &empty,
        Some(_) => fail(
            "Invalid [board] configuration",
            &["[board] must be a table".to_string()],
        ),
    };

    let mut errors = Vec::new();

    let keymap: Vec<Vec<char>> = match table.get("keymap") {
        None => ["123A", "456B", "789C", "*0#D"]
            .iter()
            .map(|row| row.chars().collect())
            .collect(),
        Some(toml::Value::Array(rows)) => {
            let rows: Vec<Vec<char>> = rows
                .iter()
                .filter_map(|row| row.as_str().map(|s| s.chars().collect()))
                .collect();
            if rows.len() != 4 || rows.iter().any(|row| row.len() != 4) {
                errors.push("[board] keymap must be 4 strings of 4 characters".to_string());
            }
            rows
        }
        Some(_) => {
            errors.push("[board] keymap must be an array of strings".to_string());
            Vec::new()
        }
    };

    let on_keypad = |ch: char| keymap.iter().any(|row| row.contains(&ch));
    if !on_keypad(lock.clear_key) || !on_keypad(lock.submit_key) {
        errors.push("[lock] clear_key or submit_key is not on the keypad".to_string());
    }
    for ch in lock.credential.chars() {
        if !on_keypad(ch) {
            errors.push(format!("[lock] credential character '{}' is not on the keypad", ch));
        }
    }

    let board = Board {
        display_address: int_field(table, "board", "display_address", 0x27, 0x03, 0x77, &mut errors),
        display_columns: int_field(table, "board", "display_columns", 16, 8, 40, &mut errors),
        display_lines: int_field(table, "board", "display_lines", 1, 1, 2, &mut errors),
        keymap,
        scan_period_ms: int_field(table, "board", "scan_period_ms", 20, 1, 1000, &mut errors),
        column_settle_us: int_field(table, "board", "column_settle_us", 10, 1, 1000, &mut errors),
        debug_baudrate: int_field(
            table,
            "board",
            "debug_baudrate",
            115_200,
            1200,
            921_600,
            &mut errors,
        ),
    };

    if (board.display_columns as usize) < lock.credential.chars().count() {
        errors.push("[board] display_columns narrower than the credential".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid [board] configuration", &errors);
    }
    board
}

/// Write `lock_config.rs` into OUT_DIR
fn generate(lock: &Lock, board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let keymap = board
        .keymap
        .iter()
        .map(|row| {
            let keys = row
                .iter()
                .map(|ch| format!("{:?}", ch))
                .collect::<Vec<_>>()
                .join(", ");
            format!("    [{}],", keys)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let source = format!(
        "// Generated from lock.toml by build.rs\n\
         \n\
         pub const CREDENTIAL: &str = {:?};\n\
         pub const CLEAR_KEY: char = {:?};\n\
         pub const SUBMIT_KEY: char = {:?};\n\
         pub const MAX_ATTEMPTS: u8 = {};\n\
         pub const LOCKOUT_SECS: u8 = {};\n\
         pub const LOCKOUT_NOTICE_MS: u32 = {};\n\
         pub const KEY_PACING_MS: u32 = {};\n\
         pub const UNLOCK_HOLD_MS: u32 = {};\n\
         \n\
         pub const DISPLAY_ADDRESS: u8 = {:#04x};\n\
         pub const DISPLAY_COLUMNS: u8 = {};\n\
         pub const DISPLAY_LINES: u8 = {};\n\
         pub const SCAN_PERIOD_MS: u32 = {};\n\
         pub const COLUMN_SETTLE_US: u32 = {};\n\
         pub const DEBUG_BAUDRATE: u32 = {};\n\
         \n\
         pub const KEYMAP: [[char; 4]; 4] = [\n{}\n];\n",
        lock.credential,
        lock.clear_key,
        lock.submit_key,
        lock.max_attempts,
        lock.lockout_secs,
        lock.lockout_notice_ms,
        lock.key_pacing_ms,
        lock.unlock_hold_ms,
        board.display_address,
        board.display_columns,
        board.display_lines,
        board.scan_period_ms,
        board.column_settle_us,
        board.debug_baudrate,
        keymap,
    );

    fs::write(out_dir.join("lock_config.rs"), source).unwrap();
}
