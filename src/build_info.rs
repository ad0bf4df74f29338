//! Compile-time build stamp
//!
//! `build.rs` exports the build counter and timestamp as environment variables.

/// Incremented by `build.rs` on every compile; 0 when built without it
pub const BUILD_NUMBER: u64 = match option_env!("HEALTHCALC_BUILD_NUMBER") {
    Some(raw) => match digits_to_u64(raw) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

pub const BUILD_TIMESTAMP: &str = match option_env!("HEALTHCALC_BUILD_TIMESTAMP") {
    Some(stamp) => stamp,
    None => "unknown",
};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// `str::parse` is not const
const fn digits_to_u64(raw: &str) -> Option<u64> {
    let bytes = raw.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    Some(value)
}

/// Startup banner on stderr; stdout carries the MCP transport
pub fn print_startup_banner() {
    eprintln!("-----------------------------------------------");
    eprintln!(" {} {} (build {}, {})", NAME, VERSION, BUILD_NUMBER, BUILD_TIMESTAMP);
    eprintln!(" BMI / daily calories / nutrient lookup");
    eprintln!("-----------------------------------------------");
}
