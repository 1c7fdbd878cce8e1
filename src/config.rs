use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Deserialize;

/// Library entry point the import map aliases as `blog` unless a profile overrides it.
pub const DEFAULT_BLOG_IMPORT: &str = "https://deno.land/x/blog@0.5.0/blog.tsx";

/// One concrete blog, loaded from a TOML site profile.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteProfile {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub avatar: Option<String>,
    pub avatar_class: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub script: Option<Script>,
    #[serde(default)]
    pub middlewares: Vec<Middleware>,
    /// URL of the blog library module, e.g. a fork or a different pinned version.
    pub import: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// Extra script handed to the library: either literal source or a JS function
/// expression the library calls with its render context.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Inline(String),
    Callback(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Middleware {
    /// Google Analytics tagging.
    Ga { key: String },
    /// Pathname redirects, source to destination, in profile order.
    Redirects { map: IndexMap<String, String> },
}

impl SiteProfile {
    pub fn blog_import(&self) -> &str {
        self.import.as_deref().unwrap_or(DEFAULT_BLOG_IMPORT)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("profile `title` must not be empty");
        }
        for (idx, link) in self.links.iter().enumerate() {
            if link.title.trim().is_empty() || link.url.trim().is_empty() {
                bail!("link #{} needs both a title and a url", idx + 1);
            }
        }
        if let Some(import) = &self.import {
            if !(import.starts_with("https://") || import.starts_with("http://")) {
                bail!("`import` must be an http(s) URL, got `{}`", import);
            }
        }
        if let Some(Script::Callback(function)) = &self.script {
            if function.trim().is_empty() {
                bail!("`script.callback` must not be empty");
            }
        }
        for middleware in &self.middlewares {
            match middleware {
                Middleware::Ga { key } if key.trim().is_empty() => {
                    bail!("ga middleware needs a non-empty `key`")
                }
                Middleware::Redirects { map } => {
                    for (from, to) in map {
                        if !from.starts_with('/') || !to.starts_with('/') {
                            bail!("redirect `{}` -> `{}` must use absolute pathnames", from, to);
                        }
                    }
                }
                Middleware::Ga { .. } => {}
            }
        }
        Ok(())
    }
}

pub fn parse(raw: &str) -> Result<SiteProfile> {
    let profile: SiteProfile = toml::from_str(raw)?;
    profile.validate()?;
    Ok(profile)
}

pub fn load_from_path(path: &Utf8Path) -> Result<SiteProfile> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading profile {}", path))?;
    parse(&raw).with_context(|| format!("parsing profile {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
title = "nakasyou's blog"
description = "のんびりやってきます"
author = "nakasyou"
avatar = "https://deno-avatar.deno.dev/avatar/blog.svg"
avatar_class = "rounded-full"
import = "https://raw.githubusercontent.com/example/blog/main/blog.tsx"

[[links]]
title = "GitHub"
url = "https://github.com/nakasyou"

[[links]]
title = "Twitter"
url = "https://twitter.com/nakasyou"

[script]
inline = "alert(0)"

[[middlewares]]
kind = "ga"
key = "UA-XXXXXXXX-X"

[[middlewares]]
kind = "redirects"
map = { "/hello_world.html" = "/hello_world" }
"#;

    #[test]
    fn parses_full_profile() {
        let profile = parse(FULL).unwrap();
        assert_eq!(profile.title, "nakasyou's blog");
        assert_eq!(profile.avatar_class.as_deref(), Some("rounded-full"));
        assert_eq!(profile.links.len(), 2);
        assert_eq!(profile.links[1].title, "Twitter");
        assert_eq!(profile.script, Some(Script::Inline("alert(0)".into())));
        assert_eq!(
            profile.middlewares[0],
            Middleware::Ga { key: "UA-XXXXXXXX-X".into() }
        );
        assert!(matches!(&profile.middlewares[1], Middleware::Redirects { map } if map.len() == 1));
        assert!(profile.blog_import().starts_with("https://raw.githubusercontent.com/"));
    }

    #[test]
    fn minimal_profile_uses_default_import() {
        let profile = parse("title = \"Mine\"\n").unwrap();
        assert_eq!(profile.blog_import(), DEFAULT_BLOG_IMPORT);
        assert!(profile.links.is_empty());
        assert!(profile.middlewares.is_empty());
    }

    #[test]
    fn callback_script() {
        let profile = parse("title = \"t\"\n[script]\ncallback = \"(ctx) => {}\"\n").unwrap();
        assert_eq!(profile.script, Some(Script::Callback("(ctx) => {}".into())));
    }

    #[test]
    fn rejects_blank_callback_script() {
        let err = parse("title = \"t\"\n[script]\ncallback = \"   \"\n").unwrap_err();
        assert!(err.to_string().contains("script.callback"));
    }

    #[test]
    fn blank_inline_script_is_still_a_string() {
        let profile = parse("title = \"t\"\n[script]\ninline = \"\"\n").unwrap();
        assert_eq!(profile.script, Some(Script::Inline(String::new())));
    }

    #[test]
    fn redirects_keep_profile_order() {
        let raw = "title = \"t\"\n[[middlewares]]\nkind = \"redirects\"\nmap = { \"/z\" = \"/1\", \"/a\" = \"/2\" }\n";
        let profile = parse(raw).unwrap();
        let Middleware::Redirects { map } = &profile.middlewares[0] else {
            panic!("expected redirects");
        };
        let sources: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(sources, vec!["/z", "/a"]);
    }

    #[test]
    fn rejects_empty_title() {
        assert!(parse("title = \"  \"\n").is_err());
    }

    #[test]
    fn rejects_relative_redirects() {
        let raw = "title = \"t\"\n[[middlewares]]\nkind = \"redirects\"\nmap = { \"old\" = \"/new\" }\n";
        let err = parse(raw).unwrap_err();
        assert!(err.to_string().contains("absolute pathnames"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse("title = \"t\"\nheader = \"<header/>\"\n").is_err());
    }

    #[test]
    fn rejects_non_http_import() {
        assert!(parse("title = \"t\"\nimport = \"./blog.tsx\"\n").is_err());
    }
}
