//! Runtime configuration
//!
//! Read from the environment (a `.env` file is honored by the binary).
//!
//! | Variable                   | Default  |
//! |----------------------------|----------|
//! | `GATEPASS_DATA_DIR`        | `./data` |
//! | `GATEPASS_VIP_EVERY`       | `10`     |
//! | `GATEPASS_SCAN_LOCKOUT_MS` | `3500`   |
//! | `GATEPASS_DEMO_TICKET`     | `false`  |
//!
//! `GATEPASS_DEMO_TICKET` accepts `true`/`false`, `1`/`0`, `yes`/`no` and
//! `on`/`off`. The demo pass is off by default so a production store never
//! admits `TKT-VIP-001`; set it to carry the pass on a fresh store.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_VIP_EVERY: u32 = 10;
pub const DEFAULT_SCAN_LOCKOUT_MS: u64 = 3500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Directory of the file blob store
    pub data_dir: PathBuf,
    /// Every n-th issued ticket is VIP
    pub vip_every: u32,
    /// Station lockout after an accepted scan
    pub scan_lockout_ms: u64,
    /// Seed the demo VIP pass on a store without tickets
    pub demo_ticket: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            vip_every: DEFAULT_VIP_EVERY,
            scan_lockout_ms: DEFAULT_SCAN_LOCKOUT_MS,
            demo_ticket: false,
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let data_dir = match env::var("GATEPASS_DATA_DIR") {
            Ok(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Ok(path) => current_dir.join(path),
            Err(_) => current_dir.join(DEFAULT_DATA_DIR),
        };

        let mut vip_every = parse_var("GATEPASS_VIP_EVERY", DEFAULT_VIP_EVERY);
        if vip_every == 0 {
            warn!("GATEPASS_VIP_EVERY must be positive, using {}", DEFAULT_VIP_EVERY);
            vip_every = DEFAULT_VIP_EVERY;
        }

        Self {
            data_dir,
            vip_every,
            scan_lockout_ms: parse_var("GATEPASS_SCAN_LOCKOUT_MS", DEFAULT_SCAN_LOCKOUT_MS),
            demo_ticket: parse_flag("GATEPASS_DEMO_TICKET", false),
        }
    }

    pub fn with_data_dir<P: AsRef<Path>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_vip_every(mut self, vip_every: u32) -> Self {
        self.vip_every = vip_every;
        self
    }

    pub fn with_scan_lockout_ms(mut self, scan_lockout_ms: u64) -> Self {
        self.scan_lockout_ms = scan_lockout_ms;
        self
    }

    pub fn with_demo_ticket(mut self, demo_ticket: bool) -> Self {
        self.demo_ticket = demo_ticket;
        self
    }
}

/// Parse an environment variable, keeping `default` when unset or invalid
fn parse_var<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(var = name, value = %raw, "Invalid value, using {}", default);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a boolean switch, keeping `default` when unset or invalid
fn parse_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => {
                warn!(var = name, value = %raw, "Invalid switch, using {}", default);
                default
            }
        },
        Err(_) => default,
    }
}
