pub const APP_NAME: &str = "Text Visualizer";

// Session
pub const SESSION_COOKIE: &str = "adminSession";
pub const SESSION_COOKIE_PATH: &str = "/admin";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

// Auto-reply
pub const AUTO_REPLY_COOLDOWN_MS: u64 = 4_000;

// Speaker prefixes written by the automation service
pub const CLIENT_PREFIX: &str = "Client: ";
pub const JORDAN_PREFIX: &str = "Jordan: ";
pub const BABA_PREFIX: &str = "Baba: ";

// Email header lines embedded in the first row of an email thread
pub const EMAIL_SUBJECT_PREFIX: &str = "Email subject:";
pub const EMAIL_FROM_PREFIX: &str = "From address:";
pub const NO_SUBJECT: &str = "No subject";
pub const UNKNOWN_SENDER: &str = "Unknown sender";

// Display
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Denver";

// Limits
pub const MAX_REPLY_LENGTH: usize = 4000;
pub const MAX_PASSWORD_LENGTH: usize = 1024;
