//! Sensitive filename globs and required ignore patterns.

/// Globs for filenames that commonly hold credentials or exported
/// personal data. A history commit touching one of these paths is a
/// finding even without inspecting the file content.
pub const SENSITIVE_FILE_GLOBS: &[&str] = &[
    ".env",
    ".env.*",
    "*.env",
    "*.pem",
    "*.key",
    "*.p12",
    "*.pfx",
    "id_rsa*",
    "id_ed25519*",
    "*.csv",
    ".netrc",
    ".npmrc",
    "credentials.json",
    "service-account*.json",
];

/// Ignore patterns every repository is expected to declare. A missing
/// entry is an ignore-gap finding.
pub const REQUIRED_IGNORE_PATTERNS: &[&str] = &[".env", "*.pem", "*.key", "credentials.json"];
