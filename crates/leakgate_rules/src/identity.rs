//! Tables and heuristics for classifying commit author identities.

/// Email domains operated by consumer providers. An author email on one
/// of these domains identifies a person rather than an organisation.
pub const PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.co.jp",
    "yahoo.com",
    "hotmail.com",
    "hotmail.co.jp",
    "outlook.com",
    "outlook.jp",
    "icloud.com",
    "me.com",
    "mac.com",
    "live.com",
    "live.jp",
    "msn.com",
    "protonmail.com",
    "proton.me",
];

/// Regex matching vendor-default machine hostnames embedded in an email
/// local part or domain (e.g. `alice@Alices-MacBook-Pro.local`).
pub const MACHINE_HOSTNAME_REGEX: &str =
    r"(?i)\b[\w-]*(?:MacBook|iMac|Mac-?mini|DESKTOP|LAPTOP|PC)[\w-]*\.local\b";

/// Returns `true` if the email is on a consumer provider domain.
#[must_use]
pub fn is_personal_email(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let domain = domain.to_ascii_lowercase();
    PERSONAL_EMAIL_DOMAINS.iter().any(|d| domain == *d)
}

/// Returns `true` for forge-issued noreply addresses, which are the
/// recommended way to hide a personal email and must never be flagged.
#[must_use]
pub fn is_noreply_email(email: &str) -> bool {
    let email = email.to_ascii_lowercase();
    email.contains("noreply") || email.contains("no-reply")
}

/// Returns `true` if the name contains CJK characters, which in an
/// author signature almost always means a real legal name.
#[must_use]
pub fn contains_cjk(name: &str) -> bool {
    name.chars().any(is_cjk_char)
}

const fn is_cjk_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'   // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{AC00}'..='\u{D7AF}' // hangul syllables
    )
}
