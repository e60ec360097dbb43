// Static asset bundling - stylesheets are compiled once at startup
use anyhow::Context;
use std::fs;

#[derive(Debug, Clone)]
pub struct AssetBundle {
    css: String,
}

impl AssetBundle {
    /// Concatenate the configured stylesheets in order. An unreadable input
    /// aborts startup.
    pub fn compile(stylesheets: &[String]) -> anyhow::Result<Self> {
        let mut css = String::new();
        for path in stylesheets {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read stylesheet {path}"))?;
            css.push_str(&contents);
            if !css.ends_with('\n') {
                css.push('\n');
            }
        }
        Ok(Self { css })
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}
