//! Share links
//!
//! Builds outbound URLs for third-party share endpoints from the page URL
//! and the converted text. Both are percent-encoded.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::data::constants::{COPY_LINK_FAILED_TEXT, PAGE_TITLE};
use crate::utils::clipboard::{copy_to_clipboard, Clipboard};
use crate::utils::error::KaengError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Facebook,
    X,
    LinkedIn,
    WhatsApp,
    Telegram,
    /// Copies the page URL instead of opening a share endpoint
    CopyLink,
}

impl SharePlatform {
    /// All platforms in display order
    pub const ALL: [SharePlatform; 6] = [
        SharePlatform::Facebook,
        SharePlatform::X,
        SharePlatform::LinkedIn,
        SharePlatform::WhatsApp,
        SharePlatform::Telegram,
        SharePlatform::CopyLink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::X => "x",
            SharePlatform::LinkedIn => "linkedin",
            SharePlatform::WhatsApp => "whatsapp",
            SharePlatform::Telegram => "telegram",
            SharePlatform::CopyLink => "copy",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePlatform {
    type Err = KaengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" | "fb" => Ok(SharePlatform::Facebook),
            "x" | "twitter" => Ok(SharePlatform::X),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            "whatsapp" => Ok(SharePlatform::WhatsApp),
            "telegram" => Ok(SharePlatform::Telegram),
            "copy" | "copylink" => Ok(SharePlatform::CopyLink),
            other => Err(KaengError::invalid(format!("unknown share platform '{}'", other))),
        }
    }
}

/// Share URL for one platform, `None` for [`SharePlatform::CopyLink`]
pub fn build_share_url(platform: SharePlatform, text: &str, page_url: &str) -> Option<String> {
    let u = urlencoding::encode(page_url);
    let t = urlencoding::encode(text);
    match platform {
        SharePlatform::Facebook => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            u
        )),
        SharePlatform::X => Some(format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            t, u
        )),
        SharePlatform::LinkedIn => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            u
        )),
        SharePlatform::WhatsApp => Some(format!(
            "https://api.whatsapp.com/send?text={}",
            urlencoding::encode(&format!("{} {}", text, page_url))
        )),
        SharePlatform::Telegram => Some(format!("https://t.me/share/url?url={}&text={}", u, t)),
        SharePlatform::CopyLink => None,
    }
}

/// Text to share: the converted output, or the page title when there is none
pub fn share_text_or_title(output: &str) -> &str {
    if output.is_empty() {
        PAGE_TITLE
    } else {
        output
    }
}

/// Share URLs for every platform that has one, in display order
pub fn share_links(text: &str, page_url: &str) -> IndexMap<SharePlatform, String> {
    SharePlatform::ALL
        .iter()
        .filter_map(|&platform| build_share_url(platform, text, page_url).map(|url| (platform, url)))
        .collect()
}

/// Copy the page URL, returning the user-facing message on failure
pub fn copy_link(clipboard: &dyn Clipboard, page_url: &str) -> Result<(), String> {
    if copy_to_clipboard(clipboard, page_url) {
        Ok(())
    } else {
        Err(COPY_LINK_FAILED_TEXT.to_string())
    }
}
