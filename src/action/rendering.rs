//! Wikitext rendering via `action=parse`

use super::{ApiAction, ApiRequest, MoreMessages};
use crate::error::{Error, Result};
use crate::version::{check_compatible, ActionKind, Version, VersionRegistry, VersionSet};
use crate::xml::parse_root;

/// Renders a wikitext fragment to HTML on the server
///
/// Overrides [`process_response`](ApiAction::process_response) to extract the
/// rendered markup from the `<text>` element of the parse result.
#[derive(Debug, Clone)]
pub struct GetRendering {
    wikitext: String,
    supported: VersionSet,
    more: MoreMessages,
}

impl GetRendering {
    /// Create a rendering action for the connected server version
    ///
    /// Fails with `VersionIncompatible` before any network interaction when
    /// the server is older than every supported version.
    pub fn new(connected: Version, wikitext: impl Into<String>) -> Result<Self> {
        let supported = VersionRegistry::global().supported(ActionKind::Rendering);
        check_compatible(connected, &supported)?;
        Ok(Self {
            wikitext: wikitext.into(),
            supported,
            more: MoreMessages::default(),
        })
    }
}

impl ApiAction for GetRendering {
    fn request(&self) -> ApiRequest {
        ApiRequest::action("parse")
            .param("text", &self.wikitext)
            .param("prop", "text")
    }

    fn process_response(&mut self, body: &str) -> Result<String> {
        let root = parse_root(body)?;
        let rendered = match root.name() {
            // responses arrive as <api><parse><text>..</text></parse></api>
            "api" => root.child("parse").and_then(|parse| parse.child("text")),
            "parse" => root.child("text"),
            _ => None,
        };
        rendered
            .map(|text| text.text().to_owned())
            .ok_or_else(|| Error::malformed("missing parse/text element", body))
    }

    fn supported_versions(&self) -> &VersionSet {
        &self.supported
    }

    fn has_more(&mut self) -> bool {
        self.more.take()
    }

    fn set_has_more(&mut self, more: bool) {
        self.more.set(more);
    }
}
