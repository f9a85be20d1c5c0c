use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pulldown_cmark::Options;
use serde::Deserialize;

/// The flavor of Markdown to parse.
/// Each flavor has a different set of default extensions enabled.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// GitHub Flavored Markdown (default)
    #[default]
    Gfm,
    /// CommonMark (no extensions)
    #[serde(alias = "commonmark")]
    CommonMark,
}

/// Parser extensions on top of CommonMark.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// Pipe tables
    pub tables: bool,
    /// Strikethrough ~~text~~
    pub strikethrough: bool,
    /// Task list items - [ ] and - [x]
    pub tasklists: bool,
    /// Reference footnotes [^1]
    pub footnotes: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self::for_flavor(Flavor::default())
    }
}

impl Extensions {
    /// Get the default extension set for a given flavor.
    pub fn for_flavor(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Gfm => Self {
                tables: true,
                strikethrough: true,
                tasklists: true,
                footnotes: true,
            },
            Flavor::CommonMark => Self {
                tables: false,
                strikethrough: false,
                tasklists: false,
                footnotes: false,
            },
        }
    }

    /// Parser options for these extensions.
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

/// Options for the HTML rendering path. Never applied to round-trip text.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Run the rendered HTML through the sanitizer
    pub sanitize: bool,
    /// Drop raw HTML from the document before rendering
    pub skip_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sanitize: true,
            skip_html: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub flavor: Flavor,
    pub extensions: Extensions,
    /// Expand :shortcode: emoji in text
    pub emoji: bool,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        let flavor = Flavor::default();
        Self {
            flavor,
            extensions: Extensions::for_flavor(flavor),
            emoji: true,
            render: RenderOptions::default(),
        }
    }
}

/// On-disk shape of the config. Extensions left out of the file fall back to
/// the defaults of the chosen flavor rather than the default flavor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    flavor: Flavor,
    extensions: Option<RawExtensions>,
    emoji: Option<bool>,
    render: RenderOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExtensions {
    tables: Option<bool>,
    strikethrough: Option<bool>,
    tasklists: Option<bool>,
    footnotes: Option<bool>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let mut extensions = Extensions::for_flavor(raw.flavor);
        if let Some(ext) = raw.extensions {
            extensions.tables = ext.tables.unwrap_or(extensions.tables);
            extensions.strikethrough = ext.strikethrough.unwrap_or(extensions.strikethrough);
            extensions.tasklists = ext.tasklists.unwrap_or(extensions.tasklists);
            extensions.footnotes = ext.footnotes.unwrap_or(extensions.footnotes);
        }
        Self {
            flavor: raw.flavor,
            extensions,
            emoji: raw.emoji.unwrap_or(true),
            render: raw.render,
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawConfig::deserialize(deserializer).map(Config::from)
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.config.flavor = flavor;
        self.config.extensions = Extensions::for_flavor(flavor);
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn emoji(mut self, enabled: bool) -> Self {
        self.config.emoji = enabled;
        self
    }

    pub fn sanitize(mut self, enabled: bool) -> Self {
        self.config.render.sanitize = enabled;
        self
    }

    pub fn skip_html(mut self, enabled: bool) -> Self {
        self.config.render.skip_html = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".glyphmark.toml", "glyphmark.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => dirs::config_dir()?,
    };
    let p = base.join("glyphmark").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .glyphmark.toml, glyphmark.toml
/// 3) XDG: $XDG_CONFIG_HOME/glyphmark/config.toml or the platform config dir
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config {}: {e}", p.display()),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
