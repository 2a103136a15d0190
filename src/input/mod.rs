mod prompts;

pub use prompts::{pause_enabled, wait_for_acknowledgment};
