//! MediaWiki wire-level constants and text helpers
//!
//! Namespace numbers, the API charset, and the encoding helpers bots need
//! when assembling titles and parameters by hand.

use crate::error::{Error, Result};
use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Charset of every API exchange
pub const CHARSET: &str = "UTF-8";

// ============================================================================
// Namespaces
// ============================================================================

/// Article namespace
pub const NS_MAIN: u32 = 0;
/// Article talk namespace
pub const NS_TALK: u32 = 1;
/// User namespace
pub const NS_USER: u32 = 2;
/// User talk namespace
pub const NS_USER_TALK: u32 = 3;
/// Project namespace
pub const NS_META: u32 = 4;
/// Project talk namespace
pub const NS_META_TALK: u32 = 5;
/// File namespace
pub const NS_IMAGES: u32 = 6;
/// File talk namespace
pub const NS_IMAGES_TALK: u32 = 7;
/// MediaWiki system namespace
pub const NS_MEDIAWIKI: u32 = 8;
/// MediaWiki system talk namespace
pub const NS_MEDIAWIKI_TALK: u32 = 9;
/// Template namespace
pub const NS_TEMPLATE: u32 = 10;
/// Template talk namespace
pub const NS_TEMPLATE_TALK: u32 = 11;
/// Help namespace
pub const NS_HELP: u32 = 12;
/// Help talk namespace
pub const NS_HELP_TALK: u32 = 13;
/// Category namespace
pub const NS_CATEGORY: u32 = 14;
/// Category talk namespace
pub const NS_CATEGORY_TALK: u32 = 15;

/// Every standard namespace
pub const NS_ALL: [u32; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

// ============================================================================
// Encoding
// ============================================================================

/// Encode text as an `application/x-www-form-urlencoded` value
///
/// Spaces become `+`; everything outside `[A-Za-z0-9*\-._]` is
/// percent-encoded.
pub fn url_encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Decode an `application/x-www-form-urlencoded` value
///
/// Fails when the decoded bytes are not valid UTF-8.
pub fn url_decode(text: &str) -> Result<String> {
    let spaced = text.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::Other(format!("invalid URL encoding in {text:?}: {e}")))
}

/// Resolve the HTML entities the API emits in page text
///
/// Named entities (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;` `&nbsp;`) and
/// numeric references are decoded; anything unrecognized is kept literally.
pub fn html_unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = rest[1..]
            .find(';')
            .and_then(|end| decode_entity(&rest[1..=end]).map(|c| (c, end + 2)));
        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = if let Some(hex) = number.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                number.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
