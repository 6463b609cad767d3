pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_RESEARCH_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000/mcp";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_STAGE_TIMEOUT_SECS: u64 = 300;
