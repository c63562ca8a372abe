//! Label patterns for loan application fields.
//!
//! Every pattern is matched case-insensitively and takes the candidate from
//! its first capture group. Labels may be followed by any mix of colons,
//! hyphens and whitespace before the value.

/// Applicant name labels.
pub const NAME_PATTERNS: &[&str] = &[
    r"Applicant\s*[:\-\s]+(.+)",
    r"Full\s*Name\s*[:\-\s]+(.+)",
    r"NAME\s*[:\-\s]+(.+)",
];

/// Residential address labels.
pub const ADDRESS_PATTERNS: &[&str] = &[
    r"Address\s*[:\-\s]+(.+)",
    r"Residential\s*Address\s*[:\-\s]+(.+)",
];

/// Income labels followed by an optional currency symbol and digits.
pub const INCOME_PATTERNS: &[&str] = &[
    r"Income\s*Details\s*[:\-\s]*₹?\$?([\d,]+)",
    r"Annual\s*Income\s*[:\-\s]*₹?\$?([\d,]+)",
];

/// Requested loan amount labels.
pub const LOAN_AMOUNT_PATTERNS: &[&str] = &[
    r"Loan\s*Amount\s*[:\-\s]*₹?\$?([\d,]+)",
    r"Amount\s*Requested\s*[:\-\s]*₹?\$?([\d,]+)",
];

/// Currency symbols that mark a match as high confidence.
pub const CURRENCY_SYMBOLS: &[char] = &['₹', '$'];

/// Characters stripped from both ends of a captured value.
pub fn is_trim_char(c: char) -> bool {
    matches!(c, ':' | '-' | '\'' | '"') || c.is_whitespace()
}
