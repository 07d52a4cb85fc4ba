//! Phone-number normalization.
//!
//! Numbers are checked against curated numbering plans keyed by dialing
//! prefix. Two predicates are exposed: *possible* (the national number has a
//! dialable length) and *valid* (it falls inside an allocated range). Only
//! the possibility check gates the form; validity decides whether the
//! canonical E.164 rendering can be trusted.

mod plans;

use thiserror::Error;

use crate::domain::country::Country;

const MIN_NATIONAL_LENGTH: usize = 2;
const MAX_NATIONAL_LENGTH: usize = 17;
const SEPARATORS: &[char] = &['-', '.', '(', ')', '/'];

/// Reasons a raw phone string cannot be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneParseError {
    /// Nothing but whitespace was supplied.
    #[error("phone number is empty")]
    Empty,
    /// A character outside digits and the accepted separators.
    #[error("unsupported character {0:?} in phone number")]
    InvalidCharacter(char),
    /// `+` appeared anywhere but the first position.
    #[error("`+` may only lead the phone number")]
    MisplacedPlus,
    /// The international prefix matches no known dialing code.
    #[error("unknown international dialing code")]
    UnknownCallingCode,
    /// Fewer national digits than any plan can dial.
    #[error("phone number is too short")]
    TooShort,
    /// More national digits than any plan can dial.
    #[error("phone number is too long")]
    TooLong,
}

/// A parsed number: dialing prefix plus national significant number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    calling_code: &'static str,
    national: String,
}

impl PhoneNumber {
    /// Parse user input in the context of the selected country.
    ///
    /// A leading `+` switches to international parsing; otherwise the digits
    /// are read against the country's plan, dropping a typed calling code or
    /// trunk prefix when present.
    pub fn parse(raw: &str, country: &Country) -> Result<Self, PhoneParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PhoneParseError::Empty);
        }
        let (international, body) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let digits = collect_digits(body)?;

        let (plan, national) = if international {
            split_calling_code(&digits)?
        } else {
            let plan =
                plans::plan_for(country.dial_code).ok_or(PhoneParseError::UnknownCallingCode)?;
            (plan, plan.strip_domestic_prefixes(&digits, MIN_NATIONAL_LENGTH))
        };

        if national.len() < MIN_NATIONAL_LENGTH {
            return Err(PhoneParseError::TooShort);
        }
        if national.len() > MAX_NATIONAL_LENGTH {
            return Err(PhoneParseError::TooLong);
        }
        Ok(Self {
            calling_code: plan.calling_code(),
            national,
        })
    }

    /// Dialing prefix, digits only.
    pub fn calling_code(&self) -> &str {
        self.calling_code
    }

    /// National significant number.
    pub fn national_number(&self) -> &str {
        &self.national
    }

    /// Whether the national number has a dialable length.
    pub fn is_possible(&self) -> bool {
        self.plan()
            .is_some_and(|plan| plan.is_possible_length(self.national.len()))
    }

    /// Whether the national number sits in an allocated range.
    pub fn is_valid(&self) -> bool {
        self.is_possible()
            && self
                .plan()
                .is_some_and(|plan| plan.is_valid_national(&self.national))
    }

    /// Canonical `+<code><national>` rendering.
    pub fn to_e164(&self) -> String {
        format!("+{}{}", self.calling_code, self.national)
    }

    fn plan(&self) -> Option<&'static plans::CompiledPlan> {
        plans::plan_for(self.calling_code)
    }
}

/// Phone number as stored upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    /// Borrow the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the normalized text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Whether `raw` could be a phone number for `country`.
///
/// Empty input counts as possible so untouched forms do not flag an error;
/// the required-field check catches it instead.
///
/// # Examples
/// ```
/// use breakout_backend::domain::country::find_by_region;
/// use breakout_backend::domain::phone::is_possible;
///
/// let peru = find_by_region("PE").expect("Peru is listed");
/// assert!(is_possible("987 654 321", peru));
/// assert!(!is_possible("98765", peru));
/// assert!(is_possible("", peru));
/// ```
pub fn is_possible(raw: &str, country: &Country) -> bool {
    raw.is_empty() || PhoneNumber::parse(raw, country).is_ok_and(|number| number.is_possible())
}

/// Render `raw` for storage.
///
/// Valid numbers come back in E.164. Anything else falls back to the
/// country's dialing prefix followed by every digit in the input; this
/// never fails.
///
/// # Examples
/// ```
/// use breakout_backend::domain::country::find_by_region;
/// use breakout_backend::domain::phone::normalize;
///
/// let peru = find_by_region("PE").expect("Peru is listed");
/// assert_eq!(normalize("987 654 321", peru).as_str(), "+51987654321");
/// assert_eq!(normalize("12345", peru).as_str(), "+5112345");
/// ```
pub fn normalize(raw: &str, country: &Country) -> NormalizedPhone {
    match PhoneNumber::parse(raw, country) {
        Ok(number) if number.is_valid() => NormalizedPhone(number.to_e164()),
        _ => {
            let digits: String = raw.trim().chars().filter(char::is_ascii_digit).collect();
            NormalizedPhone(format!("+{}{digits}", country.dial_code))
        }
    }
}

fn collect_digits(body: &str) -> Result<String, PhoneParseError> {
    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            '+' => return Err(PhoneParseError::MisplacedPlus),
            c if c.is_whitespace() || SEPARATORS.contains(&c) => {}
            c => return Err(PhoneParseError::InvalidCharacter(c)),
        }
    }
    if digits.is_empty() {
        return Err(PhoneParseError::TooShort);
    }
    Ok(digits)
}

fn split_calling_code(
    digits: &str,
) -> Result<(&'static plans::CompiledPlan, String), PhoneParseError> {
    (1..=3)
        .filter_map(|len| {
            let code = digits.get(..len)?;
            let rest = digits.get(len..)?;
            plans::plan_for(code).map(|plan| (plan, rest.to_owned()))
        })
        .next()
        .ok_or(PhoneParseError::UnknownCallingCode)
}
