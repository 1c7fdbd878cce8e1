use std::fmt::Write as _;

use anyhow::Result;

use crate::config::{Middleware, Script, SiteProfile};

const HEADER: &str = "/** @jsx h */\n\nimport blog, { ga, redirects, h } from \"blog\";\n\n";

/// Render `main.tsx` with a live `blog({...})` call built from the profile.
pub fn render(profile: &SiteProfile) -> Result<String> {
    let mut out = String::from(HEADER);
    out.push_str("blog({\n");

    writeln!(out, "  title: {},", js_string(&profile.title)?)?;
    let optional = [
        ("description", &profile.description),
        ("avatar", &profile.avatar),
        ("avatarClass", &profile.avatar_class),
        ("author", &profile.author),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            writeln!(out, "  {}: {},", key, js_string(value)?)?;
        }
    }

    if !profile.links.is_empty() {
        out.push_str("  links: [\n");
        for link in &profile.links {
            writeln!(
                out,
                "    {{ title: {}, url: {} }},",
                js_string(&link.title)?,
                js_string(&link.url)?
            )?;
        }
        out.push_str("  ],\n");
    }

    match &profile.script {
        Some(Script::Inline(source)) => writeln!(out, "  script: {},", js_string(source)?)?,
        Some(Script::Callback(function)) => writeln!(out, "  script: {},", function.trim())?,
        None => {}
    }

    if !profile.middlewares.is_empty() {
        out.push_str("  middlewares: [\n");
        for middleware in &profile.middlewares {
            match middleware {
                Middleware::Ga { key } => writeln!(out, "    ga({}),", js_string(key)?)?,
                Middleware::Redirects { map } => {
                    out.push_str("    redirects({\n");
                    for (from, to) in map {
                        writeln!(out, "      {}: {},", js_string(from)?, js_string(to)?)?;
                    }
                    out.push_str("    }),\n");
                }
            }
        }
        out.push_str("  ],\n");
    }

    out.push_str("});\n");
    Ok(out)
}

/// JSON string literals are valid JS string literals.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
