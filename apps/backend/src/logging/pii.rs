use std::fmt;

use lazy_regex::{regex, Regex};

/// Emails: the local part is masked down to its first character.
fn email_regex() -> &'static Regex {
    regex!(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b")
}

/// bcrypt hashes (`$2a$`, `$2b$`, `$2y$`), matched before generic tokens so the cost prefix goes too.
fn bcrypt_regex() -> &'static Regex {
    regex!(r"\$2[aby]?\$\d{2}\$[./A-Za-z0-9]{53}")
}

/// Compact JWS: three base64url segments.
fn jwt_regex() -> &'static Regex {
    regex!(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b")
}

/// Any other opaque base64-like run of 16+ characters.
fn opaque_token_regex() -> &'static Regex {
    regex!(r"\b[A-Za-z0-9+/_-]{16,}={0,2}")
}

/// Mask emails, password hashes and bearer tokens in free text.
///
/// Order matters: hashes and JWTs are replaced whole before the generic
/// token pass, emails last so their domains survive.
pub fn redact(input: &str) -> String {
    let out = bcrypt_regex().replace_all(input, "[REDACTED_HASH]");
    let out = jwt_regex().replace_all(&out, "[REDACTED_TOKEN]");
    let out = opaque_token_regex().replace_all(&out, "[REDACTED_TOKEN]");
    email_regex()
        .replace_all(&out, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    format!("{}***@{}", &local[..1], domain)
                }
                _ => full.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format, for log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
