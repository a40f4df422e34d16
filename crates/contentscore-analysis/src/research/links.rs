//! `getLinkStats` research.
//!
//! Anchors are classified against the site host. Relative links and links
//! to the site host (with or without `www.`) are internal; any other http(s)
//! host is external. Fragment-only, `mailto:`, `tel:` and `javascript:`
//! links are not counted. A `rel` attribute containing `nofollow` marks the
//! link as not dofollow.

use super::types::LinkStats;
use crate::text::patterns::{RE_ANCHOR, RE_HREF, RE_REL};

/// Lower-cased host of an absolute or protocol-relative URL, without port,
/// credentials or a leading `www.`.
pub fn host_of(url: &str) -> Option<String> {
    let url = url.trim();
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url.strip_prefix("//")?,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("").to_lowercase();
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}

enum LinkKind {
    Internal,
    External,
    Ignored,
}

fn classify(href: &str, site_host: Option<&str>) -> LinkKind {
    let href = href.trim();
    let lower = href.to_lowercase();
    if href.is_empty()
        || href.starts_with('#')
        || ["mailto:", "tel:", "javascript:"]
            .iter()
            .any(|scheme| lower.starts_with(scheme))
    {
        return LinkKind::Ignored;
    }

    let absolute = lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//");
    if !absolute {
        return LinkKind::Internal;
    }

    match (host_of(href), site_host) {
        (Some(host), Some(site)) if host == site => LinkKind::Internal,
        (Some(_), _) => LinkKind::External,
        (None, _) => LinkKind::Ignored,
    }
}

/// Link statistics for `text`, classified against `site_host` (already
/// normalized by [`host_of`]). Without a site host every absolute link is
/// external.
pub fn link_stats(text: &str, site_host: Option<&str>) -> LinkStats {
    let mut stats = LinkStats::default();
    let (Some(anchor_re), Some(href_re)) = (RE_ANCHOR.as_ref(), RE_HREF.as_ref()) else {
        return stats;
    };

    for anchor in anchor_re.find_iter(text) {
        let tag = anchor.as_str();
        let Some(href) = href_re.captures(tag).and_then(|c| c.get(1)) else {
            continue;
        };
        let dofollow = !RE_REL
            .as_ref()
            .and_then(|re| re.captures(tag))
            .and_then(|c| c.get(1))
            .is_some_and(|rel| rel.as_str().to_lowercase().contains("nofollow"));

        match classify(href.as_str(), site_host) {
            LinkKind::Internal => {
                stats.internal_total += 1;
                stats.internal_dofollow += usize::from(dofollow);
            }
            LinkKind::External => {
                stats.external_total += 1;
                stats.external_dofollow += usize::from(dofollow);
            }
            LinkKind::Ignored => continue,
        }
        stats.total += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_extraction() {
        assert_eq!(host_of("https://www.Example.com:8080/a?b").as_deref(), Some("example.com"));
        assert_eq!(host_of("//cdn.example.com/x").as_deref(), Some("cdn.example.com"));
        assert_eq!(host_of("http://user:pw@example.org").as_deref(), Some("example.org"));
        assert_eq!(host_of("/relative/path"), None);
    }

    #[test]
    fn classifies_internal_and_external() {
        let text = r##"
            <a href="/about">About</a>
            <a href="https://example.com/post">Post</a>
            <a href="https://other.org" rel="noopener nofollow">Other</a>
            <a href="https://third.net">Third</a>
            <a href="#top">Top</a>
            <a href="mailto:me@example.com">Mail</a>
        "##;
        let stats = link_stats(text, Some("example.com"));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.internal_total, 2);
        assert_eq!(stats.internal_dofollow, 2);
        assert_eq!(stats.external_total, 2);
        assert_eq!(stats.external_dofollow, 1);
    }

    #[test]
    fn without_site_host_absolute_links_are_external() {
        let stats = link_stats(r#"<a href="https://example.com">x</a>"#, None);
        assert_eq!(stats.external_total, 1);
        assert_eq!(stats.internal_total, 0);
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        assert_eq!(link_stats(r#"<a name="x">x</a>"#, None).total, 0);
    }
}
