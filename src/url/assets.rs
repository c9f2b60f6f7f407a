use url::Url;

/// Path suffixes of files that are never crawled or reported as links
pub const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".tiff", ".ico", ".zip", ".pdf",
];

/// Checks whether a URL points at a static asset
///
/// Only the path is inspected, case-insensitively; query strings and
/// fragments are ignored, so `/logo.PNG?v=2` is an asset but
/// `/view?file=a.png` is not.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_sieve::url::is_static_asset;
///
/// assert!(is_static_asset(&Url::parse("http://a.test/photo.JPG").unwrap()));
/// assert!(!is_static_asset(&Url::parse("http://a.test/photos/").unwrap()));
/// ```
pub fn is_static_asset(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    STATIC_ASSET_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_every_extension_matches() {
        for ext in STATIC_ASSET_EXTENSIONS {
            let candidate = url(&format!("http://a.test/file{}", ext));
            assert!(is_static_asset(&candidate), "{} should be an asset", ext);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_static_asset(&url("http://a.test/photo.JPG")));
        assert!(is_static_asset(&url("http://a.test/Report.Pdf")));
    }

    #[test]
    fn test_query_is_ignored() {
        assert!(is_static_asset(&url("http://a.test/logo.png?v=3")));
        assert!(!is_static_asset(&url("http://a.test/view?file=logo.png")));
    }

    #[test]
    fn test_html_pages_pass() {
        assert!(!is_static_asset(&url("http://a.test/")));
        assert!(!is_static_asset(&url("http://a.test/about.html")));
        assert!(!is_static_asset(&url("http://a.test/archive.zip/contents")));
    }
}
