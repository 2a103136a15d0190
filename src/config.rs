pub const DEFAULT_RETRY_COUNT: u32 = 3;

pub const DEFAULT_RETRY_DELAY_SECS: u64 = 2;

pub const AUTO_COMMIT_PREFIX: &str = "auto commit";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
