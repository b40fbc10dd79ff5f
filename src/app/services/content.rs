//! Loads the site from disk: `site.toml` plus `posts/*.md`.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::post::{split_front_matter, FrontMatter, Post};
use crate::app::domain::settings::AppSettings;
use crate::app::domain::site::SiteProfile;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::reading_time;

/// Everything the app renders, loaded once and on explicit reload.
pub struct SiteContent {
    pub profile: SiteProfile,
    pub posts: Vec<Post>,
}

impl SiteContent {
    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

/// Content directory: CLI argument wins, then the settings override,
/// then `./content`.
pub fn resolve_content_dir(cli_arg: Option<String>, settings: &AppSettings) -> PathBuf {
    cli_arg
        .or_else(|| settings.content_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("content"))
}

pub fn load_site(dir: &Path) -> Result<SiteContent> {
    if !dir.is_dir() {
        return Err(AppError::Content(format!(
            "content directory not found: {}",
            dir.display()
        )));
    }

    let profile = load_profile(&dir.join("site.toml"));
    let posts = load_posts(&dir.join("posts"));

    Ok(SiteContent { profile, posts })
}

/// Missing or malformed profiles fall back to defaults; the app still
/// starts with an empty home page.
fn load_profile(path: &Path) -> SiteProfile {
    match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                eprintln!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                SiteProfile::default()
            }
        },
        Err(_) => SiteProfile::default(),
    }
}

/// Scan `posts/*.md`, newest first. Unreadable or malformed posts are
/// skipped with a warning rather than taking the whole site down.
fn load_posts(dir: &Path) -> Vec<Post> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut posts = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        match parse_post(slug, &raw) {
            Ok(post) => posts.push(post),
            Err(e) => eprintln!("Skipping {}: {}", path.display(), e),
        }
    }

    posts.sort_by(compare_posts);
    posts
}

/// Parse one post file: front matter, then body with derived stats.
pub fn parse_post(slug: String, raw: &str) -> Result<Post> {
    let (yaml, body) = split_front_matter(raw);
    let front: FrontMatter = match yaml {
        Some(yaml) => serde_yaml::from_str(yaml)?,
        None => FrontMatter::default(),
    };

    let word_count = reading_time::count_words(body);
    let reading = reading_time::estimate(word_count);
    let title = front.title.unwrap_or_else(|| slug.clone());

    Ok(Post {
        slug,
        title,
        date: front.date,
        summary: front.summary,
        body: body.to_string(),
        word_count,
        reading,
    })
}

/// Newest date first; undated posts sink to the bottom; ties break on
/// title so ordering is stable across reloads.
fn compare_posts(a: &Post, b: &Post) -> Ordering {
    match (&a.date, &b.date) {
        (Some(da), Some(db)) => db.cmp(da).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_parse_post_with_front_matter() {
        let raw = "---\ntitle: My Post\ndate: 2024-03-01\n---\n\nHello there readers.";
        let post = parse_post("my-post".to_string(), raw).unwrap();
        assert_eq!(post.title, "My Post");
        assert_eq!(post.date.as_deref(), Some("2024-03-01"));
        assert_eq!(post.word_count, 3);
        assert_eq!(post.reading.minutes, 1);
    }

    #[test]
    fn test_parse_post_without_front_matter_uses_slug() {
        let post = parse_post("notes".to_string(), "Just a body.").unwrap();
        assert_eq!(post.title, "notes");
        assert!(post.date.is_none());
    }

    #[test]
    fn test_parse_post_bad_yaml_is_error() {
        let raw = "---\ntitle: [unclosed\n---\nBody.";
        assert!(parse_post("bad".to_string(), raw).is_err());
    }

    #[test]
    fn test_load_site_missing_dir() {
        let err = load_site(Path::new("/nonexistent/site")).unwrap_err();
        assert!(err.to_string().contains("content directory not found"));
    }

    #[test]
    fn test_load_site_sorts_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let posts_dir = tmp.path().join("posts");
        fs::create_dir(&posts_dir).unwrap();
        write_post(&posts_dir, "old.md", "---\ntitle: Old\ndate: 2022-01-01\n---\nbody");
        write_post(&posts_dir, "new.md", "---\ntitle: New\ndate: 2024-06-15\n---\nbody");
        write_post(&posts_dir, "undated.md", "---\ntitle: Undated\n---\nbody");
        write_post(&posts_dir, "ignored.txt", "not a post");

        let site = load_site(tmp.path()).unwrap();
        let titles: Vec<&str> = site.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_load_site_skips_malformed_post() {
        let tmp = tempfile::tempdir().unwrap();
        let posts_dir = tmp.path().join("posts");
        fs::create_dir(&posts_dir).unwrap();
        write_post(&posts_dir, "good.md", "---\ntitle: Good\n---\nbody");
        write_post(&posts_dir, "bad.md", "---\ntitle: [unclosed\n---\nbody");

        let site = load_site(tmp.path()).unwrap();
        assert_eq!(site.posts.len(), 1);
        assert_eq!(site.posts[0].title, "Good");
    }

    #[test]
    fn test_load_site_reads_profile() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("site.toml"), "name = \"Jane Doe\"\nlogo = \"JD\"").unwrap();

        let site = load_site(tmp.path()).unwrap();
        assert_eq!(site.profile.name, "Jane Doe");
        assert!(site.posts.is_empty());
    }

    #[test]
    fn test_resolve_content_dir_priority() {
        let mut settings = AppSettings::default();
        settings.content_dir = Some("/from/settings".to_string());

        let from_cli = resolve_content_dir(Some("/from/cli".to_string()), &settings);
        assert_eq!(from_cli, PathBuf::from("/from/cli"));

        let from_settings = resolve_content_dir(None, &settings);
        assert_eq!(from_settings, PathBuf::from("/from/settings"));

        let fallback = resolve_content_dir(None, &AppSettings::default());
        assert_eq!(fallback, PathBuf::from("content"));
    }

    #[test]
    fn test_site_content_post_lookup() {
        let post = parse_post("hello".to_string(), "body").unwrap();
        let site = SiteContent {
            profile: SiteProfile::default(),
            posts: vec![post],
        };
        assert!(site.post("hello").is_some());
        assert!(site.post("missing").is_none());
    }
}
