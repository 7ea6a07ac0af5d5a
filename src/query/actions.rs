//! Concrete listing actions

use super::ListAction;
use crate::action::{namespace_filter, ApiAction, ApiRequest, MoreMessages};
use crate::error::Result;
use crate::version::{check_compatible, ActionKind, Version, VersionRegistry, VersionSet};
use crate::xml::parse_root;

/// Page size requested from the server per listing fetch
const PAGE_LIMIT: &str = "50";

// ============================================================================
// allpages
// ============================================================================

/// Lists page titles via `list=allpages`
///
/// Follows the server's `query-continue` cursor from page to page within a
/// single collection; a [`reset`](ListAction::reset) drops the cursor.
#[derive(Debug, Clone)]
pub struct AllPageTitles {
    prefix: Option<String>,
    namespaces: Vec<u32>,
    continue_from: Option<String>,
    supported: VersionSet,
    more: MoreMessages,
}

impl AllPageTitles {
    /// Create a listing for the connected server version
    pub fn new(connected: Version, prefix: Option<&str>, namespaces: &[u32]) -> Result<Self> {
        let supported = VersionRegistry::global().supported(ActionKind::AllPages);
        check_compatible(connected, &supported)?;
        Ok(Self {
            prefix: prefix.map(str::to_owned),
            namespaces: namespaces.to_vec(),
            continue_from: None,
            supported,
            more: MoreMessages::default(),
        })
    }
}

impl ApiAction for AllPageTitles {
    fn request(&self) -> ApiRequest {
        let mut request = ApiRequest::action("query")
            .param("list", "allpages")
            .param("aplimit", PAGE_LIMIT)
            .param_nonempty("apnamespace", namespace_filter(&self.namespaces))
            .param_nonempty("apprefix", self.prefix.as_deref().unwrap_or(""));
        if let Some(from) = &self.continue_from {
            request = request.param("apcontinue", from);
        }
        request
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

impl ListAction for AllPageTitles {
    fn parse_page(&mut self, body: &str) -> Result<Vec<String>> {
        let root = parse_root(body)?;
        let titles = root
            .find_all("p")
            .iter()
            .filter_map(|page| page.attr("title"))
            .map(str::to_owned)
            .collect();

        self.continue_from = root
            .child("query-continue")
            .and_then(|qc| qc.child("allpages"))
            .and_then(|ap| ap.attr("apcontinue"))
            .map(str::to_owned);
        self.more.set(self.continue_from.is_some());

        Ok(titles)
    }

    fn reset(&mut self) {
        self.continue_from = None;
        self.more.set(true);
    }
}

// ============================================================================
// unreviewedpages
// ============================================================================

/// Lists unreviewed page titles via `list=unreviewedpages` (FlaggedRevs)
///
/// This listing does not follow server continuation: one page is fetched per
/// collection and whatever it held is the result.
#[derive(Debug, Clone)]
pub struct UnreviewedPagesTitles {
    namespaces: Vec<u32>,
    supported: VersionSet,
    more: MoreMessages,
}

impl UnreviewedPagesTitles {
    /// Create a listing for the connected server version
    pub fn new(connected: Version, namespaces: &[u32]) -> Result<Self> {
        let supported = VersionRegistry::global().supported(ActionKind::UnreviewedPages);
        check_compatible(connected, &supported)?;
        Ok(Self {
            namespaces: namespaces.to_vec(),
            supported,
            more: MoreMessages::default(),
        })
    }
}

impl ApiAction for UnreviewedPagesTitles {
    fn request(&self) -> ApiRequest {
        ApiRequest::action("query")
            .param("list", "unreviewedpages")
            .param("urlimit", PAGE_LIMIT)
            .param_nonempty("urnamespace", namespace_filter(&self.namespaces))
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

impl ListAction for UnreviewedPagesTitles {
    fn parse_page(&mut self, body: &str) -> Result<Vec<String>> {
        let root = parse_root(body)?;
        // the latch stays consumed: no continuation for this listing
        Ok(root
            .find_all("p")
            .iter()
            .filter_map(|page| page.attr("title"))
            .map(str::to_owned)
            .collect())
    }

    fn reset(&mut self) {
        self.more.set(true);
    }
}
