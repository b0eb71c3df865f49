use std::io::prelude::*;
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const APP_DIR_NAME: &str = "mpvlink";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

const DEFAULT_DOMAINS: [&str; 4] = ["youtube.com", "youtu.be", "reddit.com", "twitch.tv"];
const DEFAULT_EXTENSIONS: [&str; 9] = [
    "mp4", "webm", "mkv", "flv", "avi", "wmv", "mpg", "mpeg", "3gp",
];

/// FilterConfig holds the three allow-lists. Every list is a newline separated
/// string, an empty list contributes no matches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// domains matched as a suffix of the url's host
    pub domain_allow_list: String,
    /// bare file extensions matched at the very end of the url
    pub extension_allow_list: String,
    /// regular expressions searched anywhere in the url
    pub url_regex_allow_list: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            domain_allow_list: DEFAULT_DOMAINS.join("\n"),
            extension_allow_list: DEFAULT_EXTENSIONS.join("\n"),
            url_regex_allow_list: String::new(),
        }
    }
}

/// ConfigField addresses one of the allow-lists
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ConfigField {
    Domains,
    Extensions,
    UrlRegex,
}

impl FilterConfig {
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Domains => &self.domain_allow_list,
            ConfigField::Extensions => &self.extension_allow_list,
            ConfigField::UrlRegex => &self.url_regex_allow_list,
        }
    }

    fn get_mut(&mut self, field: ConfigField) -> &mut String {
        match field {
            ConfigField::Domains => &mut self.domain_allow_list,
            ConfigField::Extensions => &mut self.extension_allow_list,
            ConfigField::UrlRegex => &mut self.url_regex_allow_list,
        }
    }

    /// replaces a whole list
    pub fn update(&mut self, field: ConfigField, value: String) {
        *self.get_mut(field) = value;
    }

    /// appends a line unless it is already present, returns whether the list changed
    pub fn add_line(&mut self, field: ConfigField, line: &str) -> bool {
        let list = self.get_mut(field);
        if list.lines().any(|l| l == line) {
            return false;
        }
        if !list.is_empty() && !list.ends_with('\n') {
            list.push('\n');
        }
        list.push_str(line);
        true
    }

    /// removes every occurrence of a line, returns whether the list changed
    pub fn remove_line(&mut self, field: ConfigField, line: &str) -> bool {
        let list = self.get_mut(field);
        let kept: Vec<&str> = list.lines().filter(|l| *l != line).collect();
        if kept.len() == list.lines().count() {
            return false;
        }
        let joined = kept.join("\n");
        *list = joined;
        true
    }
}

/// Settings ties a FilterConfig to the key-value store it was read from
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    pub filters: FilterConfig,
}

impl Settings {
    /// `<config dir>/mpvlink/settings.json` of the current user
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine the user config directory"))?;
        path.push(APP_DIR_NAME);
        path.push(SETTINGS_FILE_NAME);
        Ok(path)
    }

    /// Populates the Settings from a json file. Keys missing from the file and a
    /// missing file fall back to the defaults.
    ///
    /// * `path`: file system path to the settings file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no settings found at {}, using defaults", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                filters: FilterConfig::default(),
            });
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("error reading settings file {}", path.display()))?;
        let filters: FilterConfig = serde_json::from_str(&contents)
            .with_context(|| format!("invalid json in {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            filters,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// writes the current filters back to the settings file
    pub fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        let mut file = File::create(&self.path)
            .with_context(|| format!("could not write {}", self.path.display()))?;
        let conf_str = serde_json::to_string_pretty(&self.filters)?;
        file.write_all(conf_str.as_bytes())?;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }

    /// restores the default lists
    pub fn reset(&mut self) {
        self.filters = FilterConfig::default();
    }
}
