use crate::defaults::DEFAULT_TITLE;
use crate::error::PipelineError;
use onepager_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Accepted range for a fixed base font size, in points.
pub const BASE_FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=16;
pub const DEFAULT_BASE_FONT_SIZE: u32 = 10;
pub const DEFAULT_PREVIEW_SCALE: f32 = 2.0;
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// The bundled NotoEmoji font family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiFontChoice {
    #[default]
    Variable,
    Bold,
    Light,
    Medium,
    Regular,
    SemiBold,
}

impl EmojiFontChoice {
    pub const ALL: [EmojiFontChoice; 6] = [
        EmojiFontChoice::Variable,
        EmojiFontChoice::Bold,
        EmojiFontChoice::Light,
        EmojiFontChoice::Medium,
        EmojiFontChoice::Regular,
        EmojiFontChoice::SemiBold,
    ];

    /// The face name emoji runs are tagged with.
    pub fn face_name(self) -> &'static str {
        match self {
            EmojiFontChoice::Variable => "NotoEmoji Variable",
            EmojiFontChoice::Bold => "NotoEmoji Bold",
            EmojiFontChoice::Light => "NotoEmoji Light",
            EmojiFontChoice::Medium => "NotoEmoji Medium",
            EmojiFontChoice::Regular => "NotoEmoji Regular",
            EmojiFontChoice::SemiBold => "NotoEmoji SemiBold",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            EmojiFontChoice::Variable => "NotoEmoji-VariableFont_wght.ttf",
            EmojiFontChoice::Bold => "NotoEmoji-Bold.ttf",
            EmojiFontChoice::Light => "NotoEmoji-Light.ttf",
            EmojiFontChoice::Medium => "NotoEmoji-Medium.ttf",
            EmojiFontChoice::Regular => "NotoEmoji-Regular.ttf",
            EmojiFontChoice::SemiBold => "NotoEmoji-SemiBold.ttf",
        }
    }

    pub fn path_in(self, font_dir: &Path) -> PathBuf {
        font_dir.join(self.file_name())
    }
}

impl fmt::Display for EmojiFontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.face_name())
    }
}

/// Generator-wide settings, usually read once from a JSON file.
///
/// Every field is defaulted, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the NotoEmoji `.ttf` files.
    pub font_dir: PathBuf,
    /// Page title used when a request does not carry its own.
    pub title: String,
    pub layout: LayoutConfig,
    pub preview_scale: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            title: DEFAULT_TITLE.to_string(),
            layout: LayoutConfig::default(),
            preview_scale: DEFAULT_PREVIEW_SCALE,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }
}

/// Parameters of a single generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Item font size used when `auto_size` is off.
    pub base_font_size: u32,
    /// Derive the item size from the amount of content instead.
    pub auto_size: bool,
    /// Emoji face to tag emoji runs with. `None` leaves emoji in the text font.
    pub emoji_font: Option<EmojiFontChoice>,
    /// Overrides [`GeneratorConfig::title`].
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            auto_size: true,
            emoji_font: None,
            title: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_font_size(mut self, size: u32) -> Self {
        self.base_font_size = size;
        self
    }

    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    pub fn with_emoji_font(mut self, choice: EmojiFontChoice) -> Self {
        self.emoji_font = Some(choice);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !BASE_FONT_SIZE_RANGE.contains(&self.base_font_size) {
            return Err(PipelineError::Config(format!(
                "Base font size {} is outside {}..={} points",
                self.base_font_size,
                BASE_FONT_SIZE_RANGE.start(),
                BASE_FONT_SIZE_RANGE.end()
            )));
        }
        Ok(())
    }
}
