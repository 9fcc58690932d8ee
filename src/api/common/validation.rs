//
//  cloudfoundry-client
//  api/common/validation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request validation.
//!
//! Every request type implements [`Validate`]. Validation is pure: it looks
//! at the populated request and reports every violation it finds, so the
//! caller sees all problems at once rather than fixing them one by one.
//!
//! # Example
//!
//! ```rust
//! use cloudfoundry_client::api::common::{Validate, ValidationResult};
//!
//! struct RenameRequest {
//!     id: Option<String>,
//!     name: Option<String>,
//! }
//!
//! impl Validate for RenameRequest {
//!     fn validate(&self) -> ValidationResult {
//!         let mut result = ValidationResult::new();
//!         result.require("id", &self.id);
//!         result.require("name", &self.name);
//!         result
//!     }
//! }
//!
//! let result = RenameRequest { id: None, name: None }.validate();
//! assert_eq!(result.fields(), vec!["id", "name"]);
//! ```

use std::fmt;

use serde::Serialize;

use super::Error;

/// Implemented by every request type.
pub trait Validate {
    /// Checks the request's required fields and ranges.
    fn validate(&self) -> ValidationResult;
}

/// A single field that failed validation.
///
/// `field` is the wire name of the offending field (e.g. `application_id`)
/// so callers can match on it; `message` is meant for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the field.
    pub field: &'static str,

    /// Human readable description of the problem.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects violations for one request, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation if `value` is unset.
    pub fn require<T>(&mut self, field: &'static str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.push(field, format!("{} must be specified", humanize(field)));
        }
        self
    }

    /// Records a violation if the identifier `value` is unset, empty, or
    /// `.` / `..`, none of which can name a single path segment.
    pub fn require_id(&mut self, field: &'static str, value: &Option<String>) -> &mut Self {
        match value.as_deref() {
            None => self.require(field, value),
            Some(id) if id.trim().is_empty() => {
                self.push(field, format!("{} must not be blank", humanize(field)))
            }
            Some("." | "..") => {
                self.push(field, format!("{} must not be a relative path", humanize(field)))
            }
            Some(_) => self,
        }
    }

    /// Records a violation if `value` is set and below `min`.
    pub fn at_least(&mut self, field: &'static str, value: Option<i64>, min: i64) -> &mut Self {
        if let Some(v) = value {
            if v < min {
                self.push(
                    field,
                    format!("{} must be greater than or equal to {}", humanize(field), min),
                );
            }
        }
        self
    }

    /// Records a violation if `value` is set and outside `min..=max`.
    pub fn between(
        &mut self,
        field: &'static str,
        value: Option<i64>,
        min: i64,
        max: i64,
    ) -> &mut Self {
        if let Some(v) = value {
            if v < min || v > max {
                self.push(
                    field,
                    format!("{} must be between {} and {}", humanize(field), min, max),
                );
            }
        }
        self
    }

    /// Records an arbitrary violation.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) -> &mut Self {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
        self
    }

    /// Returns `true` when no violation was recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The wire names of the offending fields, in check order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Converts into `Err(Error::InvalidRequest)` when any violation exists.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidRequest(ValidationErrors(self.violations)))
        }
    }
}

/// The violations carried by [`Error::InvalidRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    /// The violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Returns `true` if `field` is among the violations.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|v| v.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// `application_id` -> `application id`
fn humanize(field: &str) -> String {
    field.replace(['_', '-'], " ")
}

/// Reads a path parameter that validation has already checked.
pub(crate) fn required(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Validates the v3 `page` / `per_page` pair.
pub(crate) fn validate_v3_paging(result: &mut ValidationResult, page: Option<i32>, per_page: Option<i32>) {
    result
        .at_least("page", page.map(i64::from), 1)
        .between("per_page", per_page.map(i64::from), 1, 5000);
}

/// Validates the v2 `page` / `results-per-page` pair.
pub(crate) fn validate_v2_paging(
    result: &mut ValidationResult,
    page: Option<i32>,
    results_per_page: Option<i32>,
) {
    result
        .at_least("page", page.map(i64::from), 1)
        .between("results_per_page", results_per_page.map(i64::from), 1, 100);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_collects_every_missing_field() {
        let mut result = ValidationResult::new();
        result
            .require("application_id", &None::<String>)
            .require("name", &Some("present"))
            .require("type", &None::<u8>);

        assert_eq!(result.fields(), vec!["application_id", "type"]);
        assert_eq!(result.violations()[0].message, "application id must be specified");

        match result.into_result() {
            Err(Error::InvalidRequest(errors)) => {
                assert_eq!(
                    errors.to_string(),
                    "application id must be specified; type must be specified"
                );
                assert!(errors.contains("type"));
                assert!(!errors.contains("name"));
            }
            other => panic!("expected invalid request, got {:?}", other),
        }
    }

    #[test]
    fn test_identifiers_that_cannot_be_a_path_segment() {
        let mut result = ValidationResult::new();
        result
            .require_id("id", &Some(String::new()))
            .require_id("application_id", &Some("..".to_string()))
            .require_id("source_package_id", &Some(".".to_string()))
            .require_id("guid", &None)
            .require_id("ok", &Some("a/b".to_string()));

        assert_eq!(
            result.fields(),
            vec!["id", "application_id", "source_package_id", "guid"]
        );
        assert_eq!(result.violations()[0].message, "id must not be blank");
        assert_eq!(
            result.violations()[1].message,
            "application id must not be a relative path"
        );
        assert_eq!(result.violations()[3].message, "guid must be specified");
    }

    #[test]
    fn test_negative_page_is_a_violation() {
        let mut result = ValidationResult::new();
        validate_v3_paging(&mut result, Some(-1), None);
        assert_eq!(result.fields(), vec!["page"]);
        assert_eq!(
            result.violations()[0].message,
            "page must be greater than or equal to 1"
        );
    }

    #[test]
    fn test_paging_bounds() {
        let mut ok = ValidationResult::new();
        validate_v3_paging(&mut ok, Some(1), Some(5000));
        assert!(ok.is_valid());

        let mut bad = ValidationResult::new();
        validate_v3_paging(&mut bad, Some(0), Some(5001));
        assert_eq!(bad.fields(), vec!["page", "per_page"]);

        let mut v2 = ValidationResult::new();
        validate_v2_paging(&mut v2, None, Some(101));
        assert_eq!(v2.violations()[0].message, "results per page must be between 1 and 100");
    }
}
