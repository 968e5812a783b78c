use crate::error::{ParseStringError, parse_string_error::EmptySnafu};
use serde::Serialize;
use std::{fmt::Display, ops::Deref, str::FromStr};

/// A trimmed string guaranteed to contain at least one non-whitespace
/// character. Free-text feed fields deserialize through this so that empty
/// values collapse to `None` instead of polluting the canonical records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl FromStr for NonEmptyString {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(Self(value.into()))
        }
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq<NonEmptyString> for String {
    fn eq(&self, other: &NonEmptyString) -> bool {
        other.as_ref().eq(self)
    }
}

impl PartialEq<NonEmptyString> for &str {
    fn eq(&self, other: &NonEmptyString) -> bool {
        other.as_ref().eq(*self)
    }
}
