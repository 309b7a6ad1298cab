// ── Paths ──────────────────────────────────────────────────────────

pub const DEFAULT_CONFIG_PATH: &str = "/etc/alerttriage/config.yaml";

// ── Stream defaults ────────────────────────────────────────────────

pub const DEFAULT_GROUP_ID: &str = "alerttriage";

// ── Inference defaults ─────────────────────────────────────────────

pub const DEFAULT_INFERENCE_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "gemma:2b";

/// Hard per-call budget for one inference request. Local CPU inference
/// can legitimately take minutes on a cold model, but the consume loop
/// must never stall indefinitely behind a hung call.
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 120;

// ── Retention defaults ─────────────────────────────────────────────

pub const DEFAULT_RETENTION_DAYS: u64 = 10;
pub const DEFAULT_RETENTION_GIGABYTES: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_timeout_is_positive() {
        assert!(DEFAULT_INFERENCE_TIMEOUT_SECS > 0);
    }

    #[test]
    fn retention_defaults_are_positive() {
        assert!(DEFAULT_RETENTION_DAYS > 0);
        assert!(DEFAULT_RETENTION_GIGABYTES > 0);
    }

    #[test]
    fn default_endpoint_is_http() {
        assert!(DEFAULT_INFERENCE_ENDPOINT.starts_with("http://"));
    }
}
