/// Application name
pub const APP_NAME: &str = "Aervix";

/// Storage key of the global user collection
pub const USERS_KEY: &str = "users";

/// Prefix of the per-owner task collections (`tasks:<userId>`)
pub const TASKS_PREFIX: &str = "tasks:";

/// Storage key of the global message collection
pub const MESSAGES_KEY: &str = "messages";

/// Database file name inside the platform data directory
pub const DB_FILE_NAME: &str = "aervix.db";

/// Tip shown when the insight provider is unavailable
pub const FALLBACK_INSIGHT: &str =
    "Ensure proper power supply and double-check your pin connections.";
