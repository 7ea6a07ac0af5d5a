//! API actions
//!
//! An action is one request/response unit bound to a connected server
//! version. Construction validates compatibility through the version
//! registry, so an action that exists has already passed the check; the
//! transport then executes it and hands the raw body back to
//! [`ApiAction::process_response`].

mod rendering;

pub use rendering::GetRendering;

use crate::error::Result;
use crate::version::VersionSet;


// ============================================================================
// Requests
// ============================================================================

/// A single GET request against `api.php`, as an ordered parameter list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Start a request for the given API action, XML output preselected
    pub fn action(name: impl Into<String>) -> Self {
        Self::default()
            .param("action", name)
            .param("format", "xml")
    }

    /// Append a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter unless the value is empty
    #[must_use]
    pub fn param_nonempty(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self
        } else {
            self.param(key, value)
        }
    }

    /// The parameters in append order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

// ============================================================================
// Transport collaborator
// ============================================================================

/// Executes requests and returns raw response text
///
/// Implemented by [`HttpClient`](crate::http::HttpClient); tests substitute
/// scripted implementations. Transport failures are opaque to the core and
/// propagate unchanged; retry policy, if any, lives behind this trait.
pub trait Transport {
    /// Execute a request, returning the response body
    fn execute(&self, request: &ApiRequest) -> Result<String>;
}

// ============================================================================
// The consume-once latch
// ============================================================================

/// One-shot "more work pending" flag
///
/// A fresh latch is `Pending`; [`take`](MoreMessages::take) reports and
/// consumes it in one step, so an action signals pending work exactly once
/// unless something re-arms it with [`set`](MoreMessages::set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoreMessages {
    /// Work is pending; the next `take` returns true
    #[default]
    Pending,
    /// The signal was consumed (or explicitly cleared)
    Consumed,
}

impl MoreMessages {
    /// Report whether work is pending, consuming the signal
    pub fn take(&mut self) -> bool {
        let pending = matches!(self, MoreMessages::Pending);
        *self = MoreMessages::Consumed;
        pending
    }

    /// Re-arm (`true`) or clear (`false`) the latch
    pub fn set(&mut self, more: bool) {
        *self = if more {
            MoreMessages::Pending
        } else {
            MoreMessages::Consumed
        };
    }

    /// Peek without consuming
    pub fn is_pending(self) -> bool {
        matches!(self, MoreMessages::Pending)
    }
}

// ============================================================================
// Action contract
// ============================================================================

/// The contract every API action fulfills
pub trait ApiAction {
    /// The request the transport should execute next
    fn request(&self) -> ApiRequest;

    /// Consume raw response text
    ///
    /// The base behavior is identity; concrete actions override to extract
    /// their payload.
    fn process_response(&mut self, body: &str) -> Result<String> {
        Ok(body.to_owned())
    }

    /// The supported-version set this instance resolved at construction
    fn supported_versions(&self) -> &VersionSet;

    /// Read the consume-once latch (see [`MoreMessages::take`])
    fn has_more(&mut self) -> bool;

    /// Re-arm or clear the latch
    fn set_has_more(&mut self, more: bool);
}

// ============================================================================
// Helpers
// ============================================================================

/// Join namespace numbers with `|` as the API's multi-value filters expect
///
/// The empty slice (the absent-namespaces case) yields the empty string; no
/// trailing separator is emitted.
pub fn namespace_filter(namespaces: &[u32]) -> String {
    namespaces
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("|")
}
