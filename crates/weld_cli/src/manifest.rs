//! `weld.toml` manifest
//!
//! ```toml
//! [output]
//! namespace = "Feliz.MaterialUI"
//! path = "src/Mui.fs"
//!
//! [cache]
//! dir = ".cache/html"
//!
//! [[pages]]
//! name = "button"
//! url = "https://mui.com/api/button/"
//!
//! [[components]]
//! name = "Button"
//! import_path = "@material-ui/core"
//! import_selector = "Button"
//!
//! [[components.props]]
//! real_name = "variant"
//! overloads = [{ params = "value: string", value = "value" }]
//! enum_values = [{ value = "contained" }, { value = "outlined" }]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use weld_fetch::PageRequest;

/// Parsed manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Generated .fs file; stdout when unset
    pub path: Option<PathBuf>,
    pub doc: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            path: None,
            doc: None,
        }
    }
}

fn default_namespace() -> String {
    "Bindings".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".cache/html")
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    /// Raw component name, normalized into the member name
    pub name: String,
    pub import_path: String,
    pub import_selector: Option<String>,
    pub doc: Option<String>,
    #[serde(default)]
    pub props: Vec<PropConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropConfig {
    /// Native property name, emitted verbatim
    pub real_name: String,
    /// Raw member name; defaults to `real_name`
    pub method_name: Option<String>,
    pub doc: Option<String>,
    #[serde(default)]
    pub overloads: Vec<OverloadConfig>,
    #[serde(default)]
    pub enum_values: Vec<EnumValueConfig>,
}

impl PropConfig {
    pub fn raw_method_name(&self) -> &str {
        self.method_name.as_deref().unwrap_or(&self.real_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverloadConfig {
    pub params: String,
    pub value: String,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValueConfig {
    /// Raw member name; defaults to `value`
    pub method: Option<String>,
    pub value: String,
    pub doc: Option<String>,
}

impl EnumValueConfig {
    pub fn raw_method_name(&self) -> &str {
        self.method.as_deref().unwrap_or(&self.value)
    }
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading manifest at {}", path.display()))?;
        text.parse()
            .with_context(|| format!("parsing manifest at {}", path.display()))
    }

    /// Cache directory, relative paths resolved against `base`
    pub fn cache_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.cache.dir)
    }

    /// Output file, relative paths resolved against `base`
    pub fn output_path(&self, base: &Path) -> Option<PathBuf> {
        self.output.path.as_ref().map(|p| base.join(p))
    }

    /// Download requests for every listed page
    pub fn page_requests(&self) -> Result<Vec<PageRequest>> {
        self.pages
            .iter()
            .map(|p| {
                PageRequest::new(&p.name, &p.url)
                    .with_context(|| format!("page {:?} in manifest", p.name))
            })
            .collect()
    }
}

impl std::str::FromStr for Manifest {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
