use crate::results::Target;
use url::Url;

/// Check that a candidate is an absolute URL with both a scheme and a host.
///
/// Anything that fails to parse is simply invalid; this never errors.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            has_authority(candidate, url.scheme())
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(e) => {
            ::log::trace!("Rejecting {:?}: {}", candidate, e);
            false
        }
    }
}

/// The scheme must be followed by `//`. The URL parser also accepts `https:host`
/// and `http:\\host` for special schemes, which carry no network location.
fn has_authority(candidate: &str, scheme: &str) -> bool {
    candidate
        .trim()
        .get(scheme.len() + 1..)
        .is_some_and(|rest| rest.starts_with("//"))
}

/// Resolve a raw href against the page it was found on.
///
/// Absolute hrefs are returned as written (only surrounding whitespace is dropped);
/// scheme-relative, path-relative and fragment-only references are joined onto
/// `base`. Without a base only absolute hrefs resolve.
pub fn resolve_href(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    let Some(base) = base else {
        ::log::debug!("Could not resolve href {:?} without a base URL", href);
        return None;
    };

    match base.join(href) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            ::log::debug!("Could not resolve href {:?}: {}", href, e);
            None
        }
    }
}

/// Whether an input line names a target: not blank and not a `#` comment
pub fn is_target_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Pick the target lines out of an input file, numbering them from 1.
///
/// Lines may end in `\n`, `\r\n` or a bare `\r`. Skipped lines do not count
/// towards the numbering.
pub fn parse_targets(contents: &str) -> Vec<Target> {
    contents
        .split(['\n', '\r'])
        .filter(|line| is_target_line(line))
        .enumerate()
        .map(|(i, line)| Target::new(i + 1, line.trim()))
        .collect()
}
