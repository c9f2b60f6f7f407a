//! URL handling module for Site-Sieve
//!
//! This module provides seed validation, authority extraction, static-asset
//! filtering, and internal/external link classification.

mod assets;
mod domain;

use std::collections::BTreeSet;
use url::Url;

// Re-export main functions
pub use assets::{is_static_asset, STATIC_ASSET_EXTENSIONS};
pub use domain::{extract_authority, parse_seed_url, Authority};

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Same authority as the seed - eligible for the frontier
    Internal,
    /// Any other authority - recorded but never visited
    External,
}

/// A resolved link together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub kind: LinkKind,
    pub url: Url,
}

/// Classifies a raw href found on a page
///
/// The checks run in order and each one short-circuits:
/// 1. Fragment-only hrefs (`#top`) are dropped
/// 2. The href is resolved against `page_url`; failures are dropped
/// 3. Non-http(s) results (`mailto:`, `javascript:`, ...) are dropped
/// 4. Paths ending in a static-asset extension are dropped
/// 5. The link is internal if it shares the seed's authority, external otherwise
///
/// There is no error case: anything that cannot be classified is `None`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_sieve::url::{classify_link, extract_authority, LinkKind};
///
/// let page = Url::parse("http://a.test/").unwrap();
/// let seed = extract_authority(&page).unwrap();
///
/// let link = classify_link(&page, "/x", &seed).unwrap();
/// assert_eq!(link.kind, LinkKind::Internal);
/// assert_eq!(link.url.as_str(), "http://a.test/x");
///
/// assert!(classify_link(&page, "#top", &seed).is_none());
/// assert!(classify_link(&page, "img.png", &seed).is_none());
/// ```
pub fn classify_link(page_url: &Url, href: &str, seed: &Authority) -> Option<ClassifiedLink> {
    let href = href.trim();

    if href.starts_with('#') {
        return None;
    }

    let resolved = match page_url.join(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::trace!("Dropping unresolvable href {:?} on {}: {}", href, page_url, e);
            return None;
        }
    };

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    if is_static_asset(&resolved) {
        return None;
    }

    let kind = if seed.contains(&resolved) {
        LinkKind::Internal
    } else {
        LinkKind::External
    };

    Some(ClassifiedLink {
        kind,
        url: resolved,
    })
}

/// The classified links of one page, each set kept in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSets {
    pub internal: BTreeSet<Url>,
    pub external: BTreeSet<Url>,
}

impl LinkSets {
    /// Inserts a classified link into the matching set
    pub fn insert(&mut self, link: ClassifiedLink) -> bool {
        match link.kind {
            LinkKind::Internal => self.internal.insert(link.url),
            LinkKind::External => self.external.insert(link.url),
        }
    }
}

/// Classifies every href of a page into sorted internal and external sets
pub fn classify_links<'a, I>(page_url: &Url, hrefs: I, seed: &Authority) -> LinkSets
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sets = LinkSets::default();
    for href in hrefs {
        if let Some(link) = classify_link(page_url, href, seed) {
            sets.insert(link);
        }
    }
    sets
}
