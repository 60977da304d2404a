//! Best-effort PII redaction
//!
//! Masks email addresses, phone numbers, and Luhn-valid card numbers before
//! free text is sent to the classifier model. Contract: best-effort redact;
//! if the engine cannot be constructed the caller passes text through
//! unchanged. Never an error path on the request path.

use regex::{Captures, Regex};

pub const EMAIL_MASK: &str = "<EMAIL_ADDRESS>";
pub const PHONE_MASK: &str = "<PHONE_NUMBER>";
pub const CARD_MASK: &str = "<CREDIT_CARD>";

/// Redaction engine, constructed once at process start.
pub struct Sanitizer {
    email: Regex,
    phone: Regex,
    card: Regex,
}

impl Sanitizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")?,
            phone: Regex::new(r"(?:\+?\d{1,3}[ .-]?)?\(?\d{3}\)?[ .-]?\d{3}[ .-]?\d{4}")?,
            card: Regex::new(r"\b(?:\d[ -]?){12,18}\d\b")?,
        })
    }

    /// Mask PII in `text`. Card masking runs first so the phone pattern
    /// cannot eat half of a 16-digit PAN.
    pub fn sanitize(&self, text: &str) -> String {
        let masked = self.card.replace_all(text, |caps: &Captures| {
            let candidate = &caps[0];
            if luhn_valid(candidate) {
                CARD_MASK.to_string()
            } else {
                candidate.to_string()
            }
        });
        let masked = self.email.replace_all(&masked, EMAIL_MASK);
        self.phone.replace_all(&masked, PHONE_MASK).into_owned()
    }
}

/// Luhn checksum over the digits of a card-number candidate.
fn luhn_valid(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new().expect("static patterns compile")
    }

    #[test]
    fn test_masks_email() {
        let out = sanitizer().sanitize("reset the password for alice@example.com please");
        assert_eq!(out, format!("reset the password for {} please", EMAIL_MASK));
    }

    #[test]
    fn test_masks_phone() {
        let out = sanitizer().sanitize("call me at 555-123-4567");
        assert_eq!(out, format!("call me at {}", PHONE_MASK));
    }

    #[test]
    fn test_masks_international_phone() {
        let out = sanitizer().sanitize("dial +1 555 123 4567");
        assert_eq!(out, format!("dial {}", PHONE_MASK));
    }

    #[test]
    fn test_masks_luhn_valid_card() {
        let out = sanitizer().sanitize("charge 4111 1111 1111 1111 now");
        assert_eq!(out, format!("charge {} now", CARD_MASK));
    }

    #[test]
    fn test_clean_text_passes_through() {
        let out = sanitizer().sanitize("what is the weather today");
        assert_eq!(out, "what is the weather today");
    }

    #[test]
    fn test_luhn() {
        assert!(luhn_valid("4111111111111111"));
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid("1234")); // too short to be a PAN
    }
}
