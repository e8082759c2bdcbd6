use std::collections::HashSet;
use url::Url;

/// Keeps the hrefs that belong to the site rooted at `base_url`.
///
/// A href matches when it starts with `base_url` or with `"/" + base_url`.
/// The comparison is a literal string prefix, so `https://site.com/ru-news`
/// matches a base of `https://site.com/ru`. Hrefs that don't match as given
/// are resolved against `base_url` first, which is what the browser reports
/// for a root-relative anchor. Duplicates are dropped and the first-seen
/// order is kept.
pub fn filter_links<I, S>(hrefs: I, base_url: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let slashed = format!("/{}", base_url);
    let base = Url::parse(base_url).ok();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in hrefs {
        let href = href.as_ref().trim();
        if href.is_empty() {
            continue;
        }

        let candidate = if href.starts_with(&slashed) || href.starts_with(base_url) {
            Some(href.to_string())
        } else {
            base.as_ref()
                .and_then(|base| base.join(href).ok())
                .map(|resolved| resolved.to_string())
                .filter(|resolved| resolved.starts_with(base_url))
        };

        match candidate {
            Some(link) => {
                if seen.insert(link.clone()) {
                    links.push(link);
                }
            }
            None => ::log::trace!("Link outside {} skipped: {}", base_url, href),
        }
    }

    ::log::debug!("Kept {} links under {}", links.len(), base_url);
    links
}
