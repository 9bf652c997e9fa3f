//! Word XML preparation
//!
//! Word stores typed text in runs (`<w:r><w:t>...</w:t></w:r>`) and splits a
//! run whenever formatting, spell checking or revision tracking changes, so a
//! tag typed as `{{ client }}` often reaches the XML as several runs. Before a
//! part is handed to the template engine, the markup inside every tag is
//! removed and structural tags are lifted out of the element that holds them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{` followed by markup and then `{`, `%` or `#`
static SPLIT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:<[^>]*>)+([{%#])").expect("valid open delimiter regex"));

/// `}`, `%` or `#` followed by markup and then `}`
static SPLIT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([}%#])(?:<[^>]*>)+\}").expect("valid close delimiter regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{%.*?%\}|\{#.*?#\}|\{\{.*?\}\}").expect("valid tag regex"));

/// From the end of one text node to the start of the next
static RUN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)</w:t>.*?(?:<w:t>|<w:t [^>]*>)").expect("valid run break regex"));

/// Elements a structural tag can replace, outermost first
const STRUCTURAL_ELEMENTS: [&str; 4] = ["tr", "tc", "p", "r"];

/// Prepare one XML part for the template engine
pub fn patch_xml(xml: &str) -> String {
    let xml = SPLIT_OPEN.replace_all(xml, "{${1}");
    let xml = SPLIT_CLOSE.replace_all(&xml, "${1}}");
    let xml = TAG.replace_all(&xml, |caps: &Captures| clean_tag(&caps[0]));

    let mut xml = xml.into_owned();
    for element in STRUCTURAL_ELEMENTS {
        xml = lift_structural_tags(&xml, element);
    }
    xml
}

fn clean_tag(tag: &str) -> String {
    RUN_BREAK
        .replace_all(tag, "")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#8216;", "'")
        .replace("&#8217;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace(['\u{201c}', '\u{201d}', '\u{201e}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Replace each element holding a `{%p ... %}` style tag with the plain tag
///
/// `{%tr for row in rows %}` in a table row becomes `{% for row in rows %}`
/// and the row itself is dropped, so the loop repeats the rows between the
/// opening and closing tags.
fn lift_structural_tags(xml: &str, element: &str) -> String {
    let open_attrs = format!("<w:{element} ");
    let open_bare = format!("<w:{element}>");
    let close = format!("</w:{element}>");

    let mut out = xml.to_string();
    let mut cursor = 0;

    while let Some(found) = find_structural_tag(&out, cursor, element) {
        let before = &out[..found.start];
        let start = before.rfind(&open_attrs).max(before.rfind(&open_bare));
        let end = out[found.end..].find(&close).map(|i| found.end + i + close.len());

        match (start, end) {
            (Some(start), Some(end)) => {
                out.replace_range(start..end, &found.plain);
                cursor = start + found.plain.len();
            }
            _ => cursor = found.end,
        }
    }

    out
}

struct StructuralTag {
    start: usize,
    end: usize,
    /// The tag without its element marker
    plain: String,
}

fn find_structural_tag(xml: &str, from: usize, element: &str) -> Option<StructuralTag> {
    let markers = [format!("{{%{element} "), format!("{{{{{element} ")];
    let mut search = from;

    loop {
        let start = markers
            .iter()
            .filter_map(|m| xml[search..].find(m.as_str()).map(|i| search + i))
            .min()?;
        let opener = &xml[start..start + 2];
        let body_start = start + 2 + element.len() + 1;
        let body = &xml[body_start..];

        if let Some(stop) = body.find(['}', '%']) {
            let closer = &body[stop..];
            if closer.starts_with("%}") || closer.starts_with("}}") {
                return Some(StructuralTag {
                    start,
                    end: body_start + stop + 2,
                    plain: format!("{} {}{}", opener, &body[..stop], &closer[..2]),
                });
            }
        }
        search = start + 2;
    }
}
