use chrono::NaiveDate;

use crate::errors::{DecisionError, Result};

/// external check answering whether a code is structurally valid
pub trait IdentityCodeValidator {
    fn is_valid(&self, code: &str) -> bool;
}

impl<F> IdentityCodeValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}

/// format-only validator: 11 digits whose first seven encode a real date
///
/// no checksum is verified; production callers plug in their own validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub const CODE_LENGTH: usize = 11;
}

impl IdentityCodeValidator for StructuralValidator {
    fn is_valid(&self, code: &str) -> bool {
        code.len() == Self::CODE_LENGTH
            && code.bytes().all(|b| b.is_ascii_digit())
            && IdentityCode::new(code).birth_date().is_ok()
    }
}

/// borrowed view over a personal identity code
///
/// layout read here: `G YY MM DD ... SSSS` where `G` picks the century and
/// the last four digits are the credit segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityCode<'a> {
    raw: &'a str,
}

impl<'a> IdentityCode<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// segment number from the last four digits, 0..=9999
    pub fn segment(&self) -> Result<u16> {
        let bytes = self.raw.as_bytes();
        if bytes.len() < 4 {
            return Err(self.invalid());
        }
        parse_digits(&bytes[bytes.len() - 4..])
            .map(|n| n as u16)
            .ok_or_else(|| self.invalid())
    }

    /// century base from the leading digit
    pub fn century(&self) -> Result<i32> {
        match self.raw.as_bytes().first().copied() {
            Some(b'5') | Some(b'6') => Ok(2000),
            Some(b) if b.is_ascii_digit() => Ok(1900),
            _ => Err(self.invalid()),
        }
    }

    /// birth date encoded in the first seven digits
    pub fn birth_date(&self) -> Result<NaiveDate> {
        let bytes = self.raw.as_bytes();
        if bytes.len() < 7 {
            return Err(self.invalid());
        }

        let century = self.century()?;
        let year = parse_digits(&bytes[1..3]).ok_or_else(|| self.invalid())?;
        let month = parse_digits(&bytes[3..5]).ok_or_else(|| self.invalid())?;
        let day = parse_digits(&bytes[5..7]).ok_or_else(|| self.invalid())?;

        NaiveDate::from_ymd_opt(century + year as i32, month, day).ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> DecisionError {
        DecisionError::InvalidIdentityCode {
            code: self.raw.to_string(),
        }
    }
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
