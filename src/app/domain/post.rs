use serde::Deserialize;

use crate::app::services::reading_time::ReadingStats;

/// YAML block between the leading `---` fences of a post file.
/// Every field is optional; a post with no front matter at all is
/// still valid and falls back to its file stem as the title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,

    /// `YYYY-MM-DD`; posts sort by this string, newest first.
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,
}

/// One blog post, fully parsed and ready to render.
#[derive(Debug, Clone)]
pub struct Post {
    /// File stem; stable identifier used by routes.
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    /// Markdown body with front matter stripped.
    pub body: String,
    pub word_count: u32,
    pub reading: ReadingStats,
}

/// Split a raw post file into its front matter block and body.
///
/// The front matter is the YAML between a `---` on the first line and
/// the next `---` line. Returns `(yaml, body)`; `yaml` is `None` when
/// the file has no fence on line one or the closing fence is missing
/// (in which case the whole file is body).
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let rest = match raw.strip_prefix("---") {
        Some(rest) => match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
            Some(rest) => rest,
            None => return (None, raw),
        },
        None => return (None, raw),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body.trim_start_matches(['\r', '\n']));
        }
        offset += line.len();
    }

    (None, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let raw = "---\ntitle: Hello\ndate: 2024-01-02\n---\n\nBody text.";
        let (yaml, body) = split_front_matter(raw);
        assert_eq!(yaml, Some("title: Hello\ndate: 2024-01-02\n"));
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_split_no_front_matter() {
        let raw = "# Just a heading\n\nBody.";
        let (yaml, body) = split_front_matter(raw);
        assert!(yaml.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_unclosed_fence_is_body() {
        let raw = "---\ntitle: Broken\n\nNo closing fence.";
        let (yaml, body) = split_front_matter(raw);
        assert!(yaml.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_requires_fence_on_first_line() {
        let raw = "intro\n---\ntitle: Nope\n---\n";
        let (yaml, _) = split_front_matter(raw);
        assert!(yaml.is_none());
    }

    #[test]
    fn test_front_matter_deserialize() {
        let fm: FrontMatter =
            serde_yaml::from_str("title: A post\ndate: 2023-11-05\nsummary: Short.").unwrap();
        assert_eq!(fm.title.as_deref(), Some("A post"));
        assert_eq!(fm.date.as_deref(), Some("2023-11-05"));
        assert_eq!(fm.summary.as_deref(), Some("Short."));
    }

    #[test]
    fn test_front_matter_partial() {
        let fm: FrontMatter = serde_yaml::from_str("title: Only a title").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Only a title"));
        assert!(fm.date.is_none());
        assert!(fm.summary.is_none());
    }
}
