use percent_encoding::percent_decode_str;

pub const HOME_LABEL: &str = "Home";
pub const HOME_HREF: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub is_current: bool,
}

pub fn path_segments(pathname: &str) -> Vec<&str> {
    pathname
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Display text for a raw path segment: percent-decoded, hyphens as spaces.
pub fn segment_label(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8_lossy()
        .replace('-', " ")
}

/// Crumbs for every segment after Home. Hrefs keep the raw segments.
pub fn build_breadcrumbs(pathname: &str) -> Vec<Crumb> {
    let segments = path_segments(pathname);
    let last = segments.len().saturating_sub(1);
    let mut href = String::new();
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            href.push('/');
            href.push_str(segment);
            Crumb {
                label: segment_label(segment),
                href: href.clone(),
                is_current: index == last,
            }
        })
        .collect()
}
