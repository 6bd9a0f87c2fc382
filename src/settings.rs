//! Configuration resolution: locate, load, and if necessary regenerate the
//! settings file, producing the immutable snapshot the render loop consumes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use eframe::egui::Color32;
use ini::Ini;
use tracing::{info, warn};

use crate::geometry::Anchor;

/// Fixed file name, resolved next to the executable.
pub const SETTINGS_FILE: &str = "topclock.ini";

const SECTION: &str = "Settings";

/// Canonical default file content. Regeneration always writes exactly this,
/// never a merge with whatever was on disk.
const DEFAULT_SETTINGS: &str = "[Settings]
; Window background color
background_color = #1E1E1E

; Font size in points
font_size = 48

; Font family name, resolved through the system font database
font_name = Tahoma

; Font style (normal, bold, italic, bold italic)
font_style = bold

; Time text color
font_color = #D4D4D4

; Window placement (center, top_left, bottom_left, top_right, bottom_right)
anchor_position = center

; Show seconds (true or false)
show_seconds = true

; Multiplier applied to the measured text width
width_scale = 1.2

; Multiplier applied to the measured text height
height_scale = 1.05

; Color of the minute-progress bar along the bottom edge
seconds_bar_color = #4C72AF

; Height of the minute-progress bar, in pixels
seconds_bar_height = 3
";

/// Immutable settings snapshot, constructed once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub background_color: Color32,
    pub font_size: u32,
    pub font_name: String,
    pub font_style: String,
    pub font_color: Color32,
    pub anchor_position: Anchor,
    pub show_seconds: bool,
    pub width_scale: f64,
    pub height_scale: f64,
    pub seconds_bar_color: Color32,
    pub seconds_bar_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            font_size: 48,
            font_name: "Tahoma".to_owned(),
            font_style: "bold".to_owned(),
            font_color: Color32::from_rgb(0xD4, 0xD4, 0xD4),
            anchor_position: Anchor::Center,
            show_seconds: true,
            width_scale: 1.2,
            height_scale: 1.05,
            seconds_bar_color: Color32::from_rgb(0x4C, 0x72, 0xAF),
            seconds_bar_height: 3,
        }
    }
}

/// The settings file lives beside the executable, not the current working
/// directory, so every launch finds the same file.
pub fn settings_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join(SETTINGS_FILE))
}

/// Loads the settings file, writing the canonical defaults first when the file
/// is missing, unparseable, or lacks the `[Settings]` section. A key inside a
/// present section that fails to coerce is a fatal error rather than a
/// regeneration: the file only reaches that state through a hand edit.
pub fn load_or_create(path: &Path) -> Result<Settings> {
    if !path.exists() {
        info!(path = %path.display(), "settings file not found, writing defaults");
        write_defaults(path)?;
    }

    let ini = match Ini::load_from_file(path) {
        Ok(ini) if ini.section(Some(SECTION)).is_some() => ini,
        Ok(_) => {
            warn!(path = %path.display(), "settings file has no [Settings] section, rewriting defaults");
            regenerate(path)?
        }
        Err(ini::Error::Parse(err)) => {
            warn!(path = %path.display(), error = %err, "settings file is not valid INI, rewriting defaults");
            regenerate(path)?
        }
        Err(ini::Error::Io(err)) => {
            return Err(err).with_context(|| format!("cannot read {}", path.display()));
        }
    };

    let section = ini
        .section(Some(SECTION))
        .context("settings file lost its [Settings] section after regeneration")?;

    Ok(Settings {
        background_color: color_value(section, "background_color")?,
        font_size: parsed_value(section, "font_size")?,
        font_name: raw_value(section, "font_name")?.trim().to_owned(),
        font_style: raw_value(section, "font_style")?.trim().to_owned(),
        font_color: color_value(section, "font_color")?,
        anchor_position: Anchor::from_key(raw_value(section, "anchor_position")?),
        show_seconds: bool_value(section, "show_seconds")?,
        width_scale: parsed_value(section, "width_scale")?,
        height_scale: parsed_value(section, "height_scale")?,
        seconds_bar_color: color_value(section, "seconds_bar_color")?,
        seconds_bar_height: parsed_value(section, "seconds_bar_height")?,
    })
}

fn regenerate(path: &Path) -> Result<Ini> {
    write_defaults(path)?;
    Ini::load_from_file(path)
        .with_context(|| format!("cannot reread {} after regeneration", path.display()))
}

fn write_defaults(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_SETTINGS)
        .with_context(|| format!("cannot write default settings to {}", path.display()))
}

fn raw_value<'a>(section: &'a ini::Properties, key: &str) -> Result<&'a str> {
    section
        .get(key)
        .with_context(|| format!("settings key `{key}` is missing"))
}

fn parsed_value<T>(section: &ini::Properties, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = raw_value(section, key)?;
    raw.trim()
        .parse()
        .with_context(|| format!("settings key `{key}` has invalid value `{raw}`"))
}

// Same set configparser's getboolean accepts.
fn bool_value(section: &ini::Properties, key: &str) -> Result<bool> {
    let raw = raw_value(section, key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("settings key `{key}` has invalid boolean `{raw}`"),
    }
}

fn color_value(section: &ini::Properties, key: &str) -> Result<Color32> {
    let raw = raw_value(section, key)?;
    parse_hex_color(raw).with_context(|| format!("settings key `{key}` has invalid color `{raw}`"))
}

/// `#RRGGBB`; the leading `#` is optional.
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}
