//! Error-code filter options.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Which compiler error codes get reported.
///
/// Both lists are optional. A present include list (even an empty one)
/// restricts reports to its members; the exclude list is applied after it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    /// Only report these error codes.
    #[serde(
        default,
        deserialize_with = "whole_codes",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<f64>>")]
    pub include_error_codes: Option<BTreeSet<u32>>,

    /// Never report these error codes.
    #[serde(
        default,
        deserialize_with = "whole_codes",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<f64>>")]
    pub exclude_error_codes: Option<BTreeSet<u32>>,
}

/// Codes are JSON numbers; `2322.0` names the same code as `2322`.
fn whole_codes<'de, D>(deserializer: D) -> Result<Option<BTreeSet<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(codes) = Option::<Vec<f64>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    codes
        .into_iter()
        .map(|code| {
            if code.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&code) {
                Ok(code as u32)
            } else {
                Err(D::Error::custom(format!(
                    "error code {} is not a non-negative whole number",
                    code
                )))
            }
        })
        .collect::<Result<BTreeSet<_>, _>>()
        .map(Some)
}

impl FilterConfig {
    /// A filter that lets every code through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given codes.
    pub fn include(mut self, codes: impl IntoIterator<Item = u32>) -> Self {
        self.include_error_codes = Some(codes.into_iter().collect());
        self
    }

    /// Drop the given codes.
    pub fn exclude(mut self, codes: impl IntoIterator<Item = u32>) -> Self {
        self.exclude_error_codes = Some(codes.into_iter().collect());
        self
    }

    /// Whether `code` passes the include list.
    pub fn is_included(&self, code: u32) -> bool {
        self.include_error_codes
            .as_ref()
            .is_none_or(|codes| codes.contains(&code))
    }

    /// Whether `code` is on the exclude list.
    pub fn is_excluded(&self, code: u32) -> bool {
        self.exclude_error_codes
            .as_ref()
            .is_some_and(|codes| codes.contains(&code))
    }

    /// Replace whichever lists `overrides` sets.
    pub fn overridden_by(mut self, overrides: &FilterConfig) -> Self {
        if let Some(codes) = &overrides.include_error_codes {
            self.include_error_codes = Some(codes.clone());
        }
        if let Some(codes) = &overrides.exclude_error_codes {
            self.exclude_error_codes = Some(codes.clone());
        }
        self
    }
}
