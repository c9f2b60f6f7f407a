use crate::UrlError;
use std::fmt;
use url::Url;

/// The host-and-port scope a link is compared against
///
/// Two URLs share an authority only if their hosts are the exact same string
/// and their explicit ports match. Subdomains are distinct authorities, and so
/// is `www.` versus the bare host. Default ports are dropped by the URL parser,
/// so `http://a.test:80/` and `http://a.test/` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    host: String,
    port: Option<u16>,
}

impl Authority {
    /// Returns the host component
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the explicit, non-default port if one was present
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns true if `url` belongs to this authority
    pub fn contains(&self, url: &Url) -> bool {
        url.host_str() == Some(self.host.as_str()) && url.port() == self.port
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Extracts the authority from a URL
///
/// # Returns
///
/// * `Some(Authority)` - The host and explicit port
/// * `None` - If the URL has no host (e.g. `mailto:` or `data:` URLs)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_sieve::url::extract_authority;
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// let authority = extract_authority(&url).unwrap();
/// assert_eq!(authority.to_string(), "example.com:8443");
/// ```
pub fn extract_authority(url: &Url) -> Option<Authority> {
    url.host_str().map(|host| Authority {
        host: host.to_string(),
        port: url.port(),
    })
}

/// Parses and validates the seed URL of a crawl
///
/// The seed must be an absolute http(s) URL with a host; its authority fixes
/// the scope of the whole run.
///
/// # Examples
///
/// ```
/// use site_sieve::url::parse_seed_url;
///
/// assert!(parse_seed_url("http://a.test/").is_ok());
/// assert!(parse_seed_url("ftp://a.test/").is_err());
/// assert!(parse_seed_url("/relative").is_err());
/// ```
pub fn parse_seed_url(raw: &str) -> Result<Url, UrlError> {
    let url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
