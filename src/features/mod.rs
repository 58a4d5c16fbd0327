//! Feature modules
//!
//! Collaborators around the converter:
//! - Converter session (input surface with clipboard auto-copy)
//! - Theme preference
//! - Share links
//! - Visitor counter

pub mod session;
pub mod share;
pub mod theme;
pub mod visitors;

pub use session::ConverterSession;
pub use share::{build_share_url, copy_link, share_links, share_text_or_title, SharePlatform};
pub use theme::{Theme, ThemeManager};
pub use visitors::{VisitCounts, VisitPayload, VisitTransport, VisitorCounter};

#[cfg(all(feature = "telemetry", not(target_arch = "wasm32")))]
pub use visitors::HttpTransport;
