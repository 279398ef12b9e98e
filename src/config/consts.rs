// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://graph.facebook.com";
pub const API_VERSION: &str = "v3.2";
pub const ENDPOINT: &str = "reachestimate";
pub const USER_AGENT: &str = concat!("reach_estimate/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Query
pub const CURRENCY: &str = "USD";
pub const OPTIMIZE_FOR: &str = "NONE";

// Account ids go on the wire as act_<id>
pub const ACCOUNT_PREFIX: &str = "act_";

// Spec flattening: this group's keys become top-level columns
pub const GEO_GROUP: &str = "geo_locations";
pub const ESTIMATE_COLUMN: &str = "users";

// Throttle: the API rate limiter trips easily, so 1 call per 5 s
pub const REQUESTS_PER_WINDOW: u32 = 1;
pub const WINDOW_SECS: u64 = 5;

// Local files
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "reach";
