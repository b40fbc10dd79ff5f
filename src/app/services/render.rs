//! Renders pages into text + style buffers for an FLTK `TextDisplay`.
//!
//! Markdown is parsed with pulldown-cmark and flattened into plain text
//! with one style character per byte (the style table comes from the
//! active palette via `StyleMap`). Fenced code blocks run through
//! syntect with a light/dark theme matching the UI palette.

use fltk::enums::Font;
use fltk::text::StyleTableEntry;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

use crate::app::domain::post::Post;
use crate::app::domain::site::SiteProfile;
use crate::app::domain::theme::{Palette, ThemeName};
use crate::app::services::reading_time;
use crate::app::services::style_map::{StyleMap, StyleRole};

/// Syntect machinery, loaded once at startup and shared across renders.
pub struct Highlighting {
    pub syntax_set: SyntaxSet,
    pub theme_set: ThemeSet,
}

impl Highlighting {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Syntect theme paired with each UI palette.
    pub fn theme_key(theme: ThemeName) -> &'static str {
        match theme {
            ThemeName::Light => "InspiredGitHub",
            ThemeName::Dark => "base16-ocean.dark",
        }
    }
}

impl Default for Highlighting {
    fn default() -> Self {
        Self::new()
    }
}

/// A page ready to bind to a `TextDisplay`: text, a same-length style
/// string (one char per byte), and the matching style table.
pub struct StyledDoc {
    pub text: String,
    pub styles: String,
    pub table: Vec<StyleTableEntry>,
}

struct DocBuilder {
    text: String,
    styles: String,
    map: StyleMap,
}

impl DocBuilder {
    fn new(palette: &Palette, font: Font, font_size: i32) -> Self {
        Self {
            text: String::new(),
            styles: String::new(),
            map: StyleMap::new(palette, font, font_size),
        }
    }

    fn push(&mut self, s: &str, role: StyleRole) {
        self.push_char(s, role.style_char());
    }

    fn push_char(&mut self, s: &str, style: char) {
        self.text.push_str(s);
        for _ in 0..s.len() {
            self.styles.push(style);
        }
    }

    fn newline(&mut self) {
        self.push("\n", StyleRole::Body);
    }

    /// Make sure the next block starts after exactly one empty line.
    fn blank_line(&mut self) {
        if self.text.is_empty() {
            return;
        }
        while !self.text.ends_with("\n\n") {
            self.newline();
        }
    }

    fn finish(self) -> StyledDoc {
        let table = self.map.entries();
        StyledDoc {
            text: self.text,
            styles: self.styles,
            table,
        }
    }
}

/// Render a full post page: title, meta line, then the markdown body.
pub fn render_post(
    post: &Post,
    theme: ThemeName,
    font: Font,
    font_size: i32,
    hl: &Highlighting,
) -> StyledDoc {
    let palette = theme.palette();
    let mut b = DocBuilder::new(palette, font, font_size);

    b.push(&post.title, StyleRole::Heading1);
    b.newline();

    let reading = reading_time::format_stats(&post.reading);
    let meta = match (&post.date, reading.is_empty()) {
        (Some(date), false) => format!("{} \u{00b7} {}", date, reading),
        (Some(date), true) => date.clone(),
        (None, false) => reading,
        (None, true) => String::new(),
    };
    if !meta.is_empty() {
        b.push(&meta, StyleRole::Meta);
        b.newline();
    }
    b.blank_line();

    render_markdown(&post.body, &mut b, theme, hl);
    b.finish()
}

/// Render the home page from the site profile.
pub fn render_home(
    profile: &SiteProfile,
    theme: ThemeName,
    font: Font,
    font_size: i32,
) -> StyledDoc {
    let palette = theme.palette();
    let mut b = DocBuilder::new(palette, font, font_size);

    b.push(&profile.name, StyleRole::Heading1);
    b.newline();
    if !profile.email.is_empty() {
        b.push(&profile.email, StyleRole::Meta);
        b.newline();
    }
    if !profile.tagline.is_empty() {
        b.blank_line();
        b.push(&profile.tagline, StyleRole::Heading2);
        b.newline();
    }

    for paragraph in &profile.intro {
        b.blank_line();
        b.push(paragraph, StyleRole::Body);
        b.newline();
    }

    if !profile.links.is_empty() {
        b.blank_line();
        b.push("Elsewhere", StyleRole::Heading3);
        b.newline();
        for link in &profile.links {
            b.push("\u{2022} ", StyleRole::Body);
            b.push(&link.label, StyleRole::Link);
            b.push("  ", StyleRole::Body);
            b.push(&link.url, StyleRole::Meta);
            b.newline();
        }
    }

    b.finish()
}

/// One line of the blog index browser. The reading estimate only shows
/// once a post earns at least one coffee.
pub fn index_row(post: &Post) -> String {
    let mut row = post.title.clone();
    if let Some(date) = &post.date {
        row.push_str(&format!(" \u{00b7} {}", date));
    }
    if post.reading.coffees > 0 {
        row.push_str(&format!(" \u{00b7} {} min read", post.reading.minutes));
    }
    row
}

struct ListState {
    next_number: Option<u64>,
}

fn render_markdown(body: &str, b: &mut DocBuilder, theme: ThemeName, hl: &Highlighting) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);

    // Inline role stack; Body sits at the bottom
    let mut roles: Vec<StyleRole> = vec![StyleRole::Body];
    let mut lists: Vec<ListState> = Vec::new();
    let mut quote_depth: usize = 0;
    // Set while inside a fenced/indented block: (language token, raw code)
    let mut code_block: Option<(String, String)> = None;
    let mut link_dest: Option<String> = None;

    let current = |roles: &[StyleRole]| *roles.last().unwrap_or(&StyleRole::Body);

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if lists.is_empty() {
                        b.blank_line();
                    }
                    if quote_depth > 0 {
                        b.push("\u{258c} ", StyleRole::Quote);
                    }
                }
                Tag::Heading { level, .. } => {
                    b.blank_line();
                    roles.push(heading_role(level));
                }
                Tag::BlockQuote(_) => {
                    quote_depth += 1;
                    roles.push(StyleRole::Quote);
                }
                Tag::CodeBlock(kind) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code_block = Some((lang, String::new()));
                }
                Tag::List(start) => {
                    if lists.is_empty() {
                        b.blank_line();
                    }
                    lists.push(ListState { next_number: start });
                }
                Tag::Item => {
                    if !b.text.ends_with('\n') && !b.text.is_empty() {
                        b.newline();
                    }
                    let depth = lists.len().saturating_sub(1);
                    b.push(&"  ".repeat(depth), StyleRole::Body);
                    let marker = match lists.last_mut() {
                        Some(state) => match state.next_number {
                            Some(n) => {
                                state.next_number = Some(n + 1);
                                format!("{}. ", n)
                            }
                            None => "\u{2022} ".to_string(),
                        },
                        None => "\u{2022} ".to_string(),
                    };
                    b.push(&marker, current(&roles));
                }
                Tag::Emphasis => roles.push(StyleRole::Emphasis),
                Tag::Strong => roles.push(StyleRole::Strong),
                Tag::Strikethrough => roles.push(StyleRole::Meta),
                Tag::Link { dest_url, .. } => {
                    link_dest = Some(dest_url.to_string());
                    roles.push(StyleRole::Link);
                }
                Tag::Image { .. } => {
                    b.push("[image: ", StyleRole::Meta);
                    roles.push(StyleRole::Meta);
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => b.newline(),
                TagEnd::Heading(_) => {
                    roles.pop();
                    b.newline();
                }
                TagEnd::BlockQuote(_) => {
                    quote_depth = quote_depth.saturating_sub(1);
                    roles.pop();
                }
                TagEnd::CodeBlock => {
                    if let Some((lang, code)) = code_block.take() {
                        b.blank_line();
                        push_code_block(b, &lang, &code, theme, hl);
                        b.blank_line();
                    }
                }
                TagEnd::List(_) => {
                    lists.pop();
                    if lists.is_empty() {
                        b.newline();
                    }
                }
                TagEnd::Item => {}
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                    roles.pop();
                }
                TagEnd::Link => {
                    roles.pop();
                    if let Some(dest) = link_dest.take() {
                        // Show where external links point since nothing
                        // here is clickable
                        if dest.starts_with("http://") || dest.starts_with("https://") {
                            b.push(&format!(" ({})", dest), StyleRole::Meta);
                        }
                    }
                }
                TagEnd::Image => {
                    roles.pop();
                    b.push("]", StyleRole::Meta);
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some((_, code)) = code_block.as_mut() {
                    code.push_str(&text);
                } else {
                    b.push(&text, current(&roles));
                }
            }
            Event::Code(code) => {
                b.push(&code, StyleRole::Code);
            }
            Event::SoftBreak => {
                b.push(" ", current(&roles));
            }
            Event::HardBreak => b.newline(),
            Event::Rule => {
                b.blank_line();
                b.push(&"\u{2500}".repeat(36), StyleRole::Meta);
                b.newline();
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                b.push(marker, current(&roles));
            }
            // Raw HTML has no sensible plain-text rendering here
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }
}

fn heading_role(level: HeadingLevel) -> StyleRole {
    match level {
        HeadingLevel::H1 => StyleRole::Heading1,
        HeadingLevel::H2 => StyleRole::Heading2,
        _ => StyleRole::Heading3,
    }
}

/// Highlight a fenced block with syntect, mapping each foreground
/// color to a dynamic style char. Unknown languages stay monochrome.
fn push_code_block(b: &mut DocBuilder, lang: &str, code: &str, theme: ThemeName, hl: &Highlighting) {
    let syntax = if lang.is_empty() {
        None
    } else {
        hl.syntax_set.find_syntax_by_token(lang)
    };

    let syntax = match syntax {
        Some(syntax) => syntax,
        None => {
            push_plain_code(b, code);
            return;
        }
    };

    let syntect_theme = &hl.theme_set.themes[Highlighting::theme_key(theme)];
    let mut highlighter = HighlightLines::new(syntax, syntect_theme);

    for line in code.lines() {
        let line_nl = format!("{}\n", line);
        match highlighter.highlight_line(&line_nl, &hl.syntax_set) {
            Ok(regions) => {
                for (style, piece) in regions {
                    let ch = b.map.get_or_insert(style.foreground);
                    b.push_char(piece, ch);
                }
            }
            Err(_) => {
                b.push(&line_nl, StyleRole::Code);
            }
        }
    }
}

fn push_plain_code(b: &mut DocBuilder, code: &str) {
    for line in code.lines() {
        b.push(line, StyleRole::Code);
        b.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::content::parse_post;

    fn doc(body: &str) -> StyledDoc {
        let hl = Highlighting::new();
        let post = parse_post("test".to_string(), body).unwrap();
        render_post(&post, ThemeName::Dark, Font::Helvetica, 16, &hl)
    }

    #[test]
    fn test_styles_cover_every_byte() {
        let styled = doc("---\ntitle: T\u{e9}st\n---\n# H\u{e9}ading\n\nBody with *emph* and `code`.");
        assert_eq!(styled.text.len(), styled.styles.len());
    }

    #[test]
    fn test_title_uses_heading_style() {
        let styled = doc("---\ntitle: Hello\n---\nBody.");
        assert!(styled.text.starts_with("Hello\n"));
        let h1 = StyleRole::Heading1.style_char();
        assert!(styled.styles.starts_with(&h1.to_string().repeat(5)));
    }

    #[test]
    fn test_meta_line_has_coffee_and_minutes() {
        let words = vec!["word"; 1001].join(" ");
        let styled = doc(&format!("---\ntitle: Long\ndate: 2024-01-01\n---\n{}", words));
        assert!(styled.text.contains("2024-01-01 \u{00b7} \u{2615}\u{2615} \u{00b7} 6 min read"));
    }

    #[test]
    fn test_short_post_has_no_coffee_row() {
        let styled = doc("---\ntitle: Empty\ndate: 2024-01-01\n---\n");
        assert!(!styled.text.contains('\u{2615}'));
        assert!(!styled.text.contains("min read"));
    }

    #[test]
    fn test_inline_code_styled() {
        let styled = doc("Use `cargo build` here.");
        let start = styled.text.find("cargo build").unwrap();
        let ch = StyleRole::Code.style_char();
        let run = &styled.styles[start..start + "cargo build".len()];
        assert!(run.chars().all(|c| c == ch));
    }

    #[test]
    fn test_external_link_shows_destination() {
        let styled = doc("See [the docs](https://example.com/docs).");
        assert!(styled.text.contains("the docs (https://example.com/docs)"));
        let start = styled.text.find("the docs").unwrap();
        assert_eq!(
            styled.styles.as_bytes()[start],
            StyleRole::Link.style_char() as u8
        );
    }

    #[test]
    fn test_fenced_rust_block_gets_dynamic_styles() {
        let styled = doc("```rust\nfn main() {}\n```\n");
        assert!(styled.text.contains("fn main() {}"));
        // Dynamic syntect entries come after the ten fixed roles
        assert!(styled.table.len() > 10);
        let start = styled.text.find("fn").unwrap();
        assert!(styled.styles.as_bytes()[start] > b'J');
    }

    #[test]
    fn test_unknown_language_stays_plain() {
        let styled = doc("```nosuchlang\nopaque text\n```\n");
        let start = styled.text.find("opaque text").unwrap();
        assert_eq!(
            styled.styles.as_bytes()[start],
            StyleRole::Code.style_char() as u8
        );
    }

    #[test]
    fn test_unordered_list_bullets() {
        let styled = doc("- one\n- two\n");
        assert!(styled.text.contains("\u{2022} one"));
        assert!(styled.text.contains("\u{2022} two"));
    }

    #[test]
    fn test_ordered_list_numbers() {
        let styled = doc("1. first\n2. second\n");
        assert!(styled.text.contains("1. first"));
        assert!(styled.text.contains("2. second"));
    }

    #[test]
    fn test_block_quote_prefix() {
        let styled = doc("> quoted wisdom\n");
        let start = styled.text.find("quoted wisdom").unwrap();
        assert_eq!(
            styled.styles.as_bytes()[start],
            StyleRole::Quote.style_char() as u8
        );
        assert!(styled.text.contains("\u{258c} quoted wisdom"));
    }

    #[test]
    fn test_render_home_sections() {
        let profile: SiteProfile = toml::from_str(
            r#"
name = "Jane Doe"
email = "jane@example.com"
tagline = "Hello!"
intro = ["Paragraph one."]

[[links]]
label = "GitHub"
url = "https://github.com/janedoe"
"#,
        )
        .unwrap();

        let styled = render_home(&profile, ThemeName::Light, Font::Helvetica, 16);
        assert_eq!(styled.text.len(), styled.styles.len());
        assert!(styled.text.starts_with("Jane Doe\n"));
        assert!(styled.text.contains("Paragraph one."));
        assert!(styled.text.contains("GitHub  https://github.com/janedoe"));
    }

    #[test]
    fn test_index_row_formats() {
        let post = parse_post(
            "p".to_string(),
            &format!("---\ntitle: Post\ndate: 2024-05-05\n---\n{}", vec!["w"; 400].join(" ")),
        )
        .unwrap();
        assert_eq!(index_row(&post), "Post \u{00b7} 2024-05-05 \u{00b7} 2 min read");

        let short = parse_post("s".to_string(), "---\ntitle: Short\n---\n").unwrap();
        assert_eq!(index_row(&short), "Short");
    }
}
