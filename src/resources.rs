//! Resource resolution for payload attributes
//!
//! Payload attributes (the image mark's `image` attribute) carry opaque
//! resource references. Turning a reference into a displayable source is the
//! host's concern, exposed here as a port. The crate ships a passthrough
//! resolver for keys that are already displayable, and a built-in placeholder
//! shown while a mark has no image assigned.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Turns a resource key into a displayable source (URL or data URI)
pub trait ResourceResolver {
    /// Resolve `key`, or None if the resource is unknown
    fn resolve(&self, key: &str) -> Option<String>;
}

/// Resolver for keys that are already displayable as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl ResourceResolver for PassthroughResolver {
    fn resolve(&self, key: &str) -> Option<String> {
        Some(key.to_string())
    }
}

/// Encode raw bytes as a data URI with the given MIME type
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

// Built-in placeholder: a gray box with a photo pictogram, shown while the
// image attribute is empty. Inlined so no fetch is ever needed.
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <rect x="0" y="0" width="100" height="100" fill="#eeeeee" stroke="#cccccc"/>
  <circle cx="35" cy="35" r="10" fill="#cccccc"/>
  <path d="M15,80 L40,50 L60,70 L75,55 L85,80 Z" fill="#cccccc"/>
</svg>"##;

static PLACEHOLDER_URI: LazyLock<String> =
    LazyLock::new(|| data_uri("image/svg+xml", PLACEHOLDER_SVG.as_bytes()));

/// Data URI of the built-in placeholder image
pub fn placeholder_image() -> &'static str {
    PLACEHOLDER_URI.as_str()
}
