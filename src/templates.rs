use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

pub fn get_bytes(path: &str) -> Result<Vec<u8>> {
    let file = Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    Ok(file.data.as_ref().to_vec())
}

pub fn get_string(path: &str) -> Result<String> {
    let bytes = get_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("decoding embedded template `{}`", path))
}

/// Load an embedded template and substitute each `{{key}}` with its value.
pub fn render(path: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut contents = get_string(path)?;
    for (key, value) in vars {
        contents = contents.replace(&format!("{{{{{}}}}}", key), value);
    }
    Ok(contents)
}

/// Write `contents` to `destination`, replacing whatever was there.
pub fn write_to(destination: &Utf8Path, contents: &str) -> Result<()> {
    fs::write(destination, contents).with_context(|| format!("writing {}", destination))
}
