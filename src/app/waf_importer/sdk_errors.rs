//! Errors raised while enumerating WAF resources, and their categorization.
//!
//! The generator has exactly one failure mode: a list call failed. That error
//! is propagated untouched. [`categorize_error`] exists only to turn it into a
//! short message for the command line; nothing here retries.

use super::aws_services::{BoxError, WafResourceKind};
use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

/// Failure of a WAF enumeration run
#[derive(Debug, Error)]
pub enum ImportError {
    /// A list call failed; later listers did not run.
    #[error("{operation} failed while loading {kind}", operation = .kind.list_operation())]
    ListFailed {
        kind: WafResourceKind,
        #[source]
        source: BoxError,
    },
}

impl ImportError {
    pub fn kind(&self) -> WafResourceKind {
        match self {
            ImportError::ListFailed { kind, .. } => *kind,
        }
    }

    /// Error text including the full source chain
    pub fn detail(&self) -> String {
        format!("{}", DisplayErrorContext(self))
    }
}

/// Categorized error types for WAF list failures
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorCategory {
    /// Request was throttled due to rate limiting
    Throttled { service: String, error_code: String },
    /// Request timed out
    Timeout { operation: String },
    /// Network connectivity issues
    NetworkError { message: String },
    /// AWS service temporarily unavailable
    ServiceUnavailable { service: String, message: String },
    /// Non-retryable error (permissions, validation, etc.)
    NonRetryable {
        code: String,
        message: String,
        is_permission_error: bool,
    },
}

impl ErrorCategory {
    /// Returns true if re-running the whole import may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Throttled { .. }
                | ErrorCategory::Timeout { .. }
                | ErrorCategory::NetworkError { .. }
                | ErrorCategory::ServiceUnavailable { .. }
        )
    }

    /// User-friendly one-line message
    pub fn user_message(&self) -> String {
        match self {
            ErrorCategory::Throttled { service, .. } => format!("{} rate limited", service),
            ErrorCategory::Timeout { operation } => format!("{} timeout", operation),
            ErrorCategory::NetworkError { .. } => "Network error".to_string(),
            ErrorCategory::ServiceUnavailable { service, .. } => {
                format!("{} unavailable", service)
            }
            ErrorCategory::NonRetryable {
                code,
                is_permission_error: true,
                ..
            } => format!("{} (check IAM permissions for waf:List*)", code),
            ErrorCategory::NonRetryable { code, .. } => code.clone(),
        }
    }

    /// Short label for compact display
    pub fn short_label(&self) -> &'static str {
        match self {
            ErrorCategory::Throttled { .. } => "throttled",
            ErrorCategory::Timeout { .. } => "timeout",
            ErrorCategory::NetworkError { .. } => "network",
            ErrorCategory::ServiceUnavailable { .. } => "unavailable",
            ErrorCategory::NonRetryable { .. } => "error",
        }
    }
}

/// Categorize a failed enumeration run
pub fn categorize_error(error: &ImportError) -> ErrorCategory {
    categorize_error_string(&error.detail(), "WAF", error.kind().list_operation())
}

/// Categorize an error based on its string representation
pub fn categorize_error_string(error_str: &str, service: &str, operation: &str) -> ErrorCategory {
    if error_str.contains("ThrottlingException")
        || error_str.contains("Throttling")
        || error_str.contains("TooManyRequestsException")
        || error_str.contains("RequestLimitExceeded")
        || error_str.contains("RateExceeded")
    {
        let error_code = extract_error_code(error_str).unwrap_or_else(|| "Throttling".to_string());
        return ErrorCategory::Throttled {
            service: service.to_string(),
            error_code,
        };
    }

    if error_str.contains("TimeoutError")
        || error_str.contains("timeout")
        || error_str.contains("timed out")
    {
        return ErrorCategory::Timeout {
            operation: operation.to_string(),
        };
    }

    if error_str.contains("DispatchFailure")
        || error_str.contains("dispatch failure")
        || error_str.contains("connection")
        || error_str.contains("Connection")
        || error_str.contains("DNS")
        || error_str.contains("dns error")
    {
        return ErrorCategory::NetworkError {
            message: truncate_message(error_str, 100),
        };
    }

    // WAFInternalErrorException is the WAF Classic equivalent of a 500
    if error_str.contains("WAFInternalErrorException")
        || error_str.contains("WafInternalErrorException")
        || error_str.contains("ServiceUnavailable")
        || error_str.contains("InternalFailure")
    {
        return ErrorCategory::ServiceUnavailable {
            service: service.to_string(),
            message: truncate_message(error_str, 100),
        };
    }

    let is_permission_error = error_str.contains("AccessDenied")
        || error_str.contains("UnauthorizedOperation")
        || error_str.contains("InvalidClientTokenId")
        || error_str.contains("ExpiredToken")
        || error_str.contains("SignatureDoesNotMatch")
        || error_str.contains("UnrecognizedClientException");

    let code = extract_error_code(error_str).unwrap_or_else(|| {
        if is_permission_error {
            "AccessDenied".to_string()
        } else {
            "Error".to_string()
        }
    });

    ErrorCategory::NonRetryable {
        code,
        message: truncate_message(error_str, 200),
        is_permission_error,
    }
}

/// Extract an AWS error code from an error message if present
fn extract_error_code(error_str: &str) -> Option<String> {
    // "ThrottlingException: Rate exceeded"
    if let Some(pos) = error_str.find(':') {
        let prefix = error_str[..pos].trim();
        if prefix.ends_with("Exception") || prefix.ends_with("Error") {
            let code = prefix.rsplit(' ').next().unwrap_or(prefix);
            if !code.is_empty() && code.len() < 50 {
                return Some(code.to_string());
            }
        }
    }

    // code: "ErrorName" in debug output
    if let Some(start) = error_str.find("code:") {
        let after_code = &error_str[start + 5..];
        if let Some(quote_start) = after_code.find('"') {
            let after_quote = &after_code[quote_start + 1..];
            if let Some(quote_end) = after_quote.find('"') {
                let code = &after_quote[..quote_end];
                if !code.is_empty() && code.len() < 50 {
                    return Some(code.to_string());
                }
            }
        }
    }

    None
}

/// Truncate a message to max chars, adding ellipsis if truncated
fn truncate_message(msg: &str, max_len: usize) -> String {
    if msg.chars().count() <= max_len {
        msg.to_string()
    } else {
        let kept: String = msg.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_failed_display_names_operation() {
        let error = ImportError::ListFailed {
            kind: WafResourceKind::GeoMatchSet,
            source: "connection refused".into(),
        };
        assert_eq!(
            error.to_string(),
            "ListGeoMatchSets failed while loading aws_waf_geo_match_set"
        );
        assert_eq!(error.kind(), WafResourceKind::GeoMatchSet);
        assert!(error.detail().contains("connection refused"));
    }

    #[test]
    fn test_categorize_list_failure() {
        let error = ImportError::ListFailed {
            kind: WafResourceKind::Rule,
            source: "ThrottlingException: Rate exceeded".into(),
        };
        let cat = categorize_error(&error);
        assert!(matches!(cat, ErrorCategory::Throttled { .. }));
        assert_eq!(cat.user_message(), "WAF rate limited");
    }

    #[test]
    fn test_categorize_timeout() {
        let cat = categorize_error_string("request timed out after 30s", "WAF", "ListRules");
        assert_eq!(
            cat,
            ErrorCategory::Timeout {
                operation: "ListRules".to_string()
            }
        );
        assert!(cat.is_retryable());
        assert_eq!(cat.user_message(), "ListRules timeout");
    }

    #[test]
    fn test_categorize_network_error() {
        let cat = categorize_error_string("dispatch failure: dns error", "WAF", "ListIPSets");
        assert!(matches!(cat, ErrorCategory::NetworkError { .. }));
        assert_eq!(cat.short_label(), "network");
    }

    #[test]
    fn test_categorize_waf_internal_error() {
        let cat = categorize_error_string(
            "WAFInternalErrorException: internal error",
            "WAF",
            "ListWebACLs",
        );
        assert!(matches!(cat, ErrorCategory::ServiceUnavailable { .. }));
        assert!(cat.is_retryable());
    }

    #[test]
    fn test_categorize_access_denied() {
        let cat = categorize_error_string(
            "AccessDeniedException: User is not authorized to perform waf:ListRules",
            "WAF",
            "ListRules",
        );
        assert!(matches!(
            cat,
            ErrorCategory::NonRetryable {
                is_permission_error: true,
                ..
            }
        ));
        assert!(!cat.is_retryable());
        assert_eq!(
            cat.user_message(),
            "AccessDeniedException (check IAM permissions for waf:List*)"
        );
    }

    #[test]
    fn test_categorize_generic_error() {
        let cat = categorize_error_string("WAFInvalidAccountException: bad account", "WAF", "ListRules");
        assert_eq!(
            cat,
            ErrorCategory::NonRetryable {
                code: "WAFInvalidAccountException".to_string(),
                message: "WAFInvalidAccountException: bad account".to_string(),
                is_permission_error: false,
            }
        );
    }

    #[test]
    fn test_extract_error_code() {
        assert_eq!(
            extract_error_code("ThrottlingException: Rate exceeded"),
            Some("ThrottlingException".to_string())
        );
        assert_eq!(
            extract_error_code("code: \"ValidationException\""),
            Some("ValidationException".to_string())
        );
        assert_eq!(extract_error_code("nothing useful here"), None);
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("abcdefghijkl", 8), "abcde...");
    }
}
