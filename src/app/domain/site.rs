use serde::Deserialize;

/// Profile rendered on the home page, parsed from `site.toml` in the
/// content directory. External links also feed the Links menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteProfile {
    /// Short initials shown as the nav-bar logo.
    #[serde(default = "default_logo")]
    pub logo: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// One-line greeting under the name.
    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub email: String,

    /// Bio paragraphs, rendered in order.
    #[serde(default)]
    pub intro: Vec<String>,

    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

fn default_logo() -> String {
    "FF".to_string()
}

fn default_name() -> String {
    "Untitled Portfolio".to_string()
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            name: default_name(),
            tagline: String::new(),
            email: String::new(),
            intro: Vec::new(),
            links: Vec::new(),
        }
    }
}
