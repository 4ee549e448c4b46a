//! The paper configuration document
//!
//! `PaperConfig` is plain data: every update helper returns a new value
//! and nothing in the pattern, composition or export code mutates it.

use crate::catalog::find_template;
use crate::dimensions::resolve_dimensions;
use crate::geometry::Rect;
use crate::themes::find_theme;
use crate::types::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Top-level fields an imported document must carry
const REQUIRED_IMPORT_FIELDS: [&str; 3] = ["pattern", "margins", "size"];

/// Nested groups merged field by field over the defaults on import
const MERGED_GROUPS: [&str; 4] = ["margins", "background", "watermark", "pages"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperConfig {
    pub id: String,
    pub name: String,
    pub size: PaperSize,
    /// Only consulted when `size` is `custom`
    #[serde(default)]
    pub custom_dimensions: Option<PaperDimension>,
    pub orientation: Orientation,
    pub margins: Margins,
    pub pattern: PatternType,
    /// Primary tiling period in mm
    pub spacing: f32,
    pub stroke_width: f32,
    pub stroke_color: String,
    pub line_style: LineStyle,
    pub opacity: f32,
    pub show_margin_box: bool,
    pub background: BackgroundConfig,
    pub watermark: WatermarkConfig,
    pub pages: PageConfig,
    #[serde(default)]
    pub theme: Option<String>,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default Lined".to_string(),
            size: PaperSize::A4,
            custom_dimensions: Some(PaperDimension::new(210.0, 297.0)),
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            pattern: PatternType::Lined,
            spacing: 10.0,
            stroke_width: 1.0,
            stroke_color: "#94a3b8".to_string(),
            line_style: LineStyle::Solid,
            opacity: 1.0,
            show_margin_box: false,
            background: BackgroundConfig::default(),
            watermark: WatermarkConfig::default(),
            pages: PageConfig::default(),
            theme: Some("default".to_string()),
        }
    }
}

impl PaperConfig {
    /// Resolved physical page size in mm
    pub fn page_size(&self) -> PaperDimension {
        resolve_dimensions(self.size, self.custom_dimensions, self.orientation)
    }

    /// Margin-bounded content area. May be empty (or inverted) when the
    /// margins meet or exceed the page size.
    pub fn content_rect(&self) -> Rect {
        self.margins.content_rect(self.page_size())
    }

    pub fn with_margins(&self, margins: Margins) -> Self {
        Self {
            margins,
            ..self.clone()
        }
    }

    pub fn with_background(&self, background: BackgroundConfig) -> Self {
        Self {
            background,
            ..self.clone()
        }
    }

    pub fn with_watermark(&self, watermark: WatermarkConfig) -> Self {
        Self {
            watermark,
            ..self.clone()
        }
    }

    pub fn with_pages(&self, pages: PageConfig) -> Self {
        Self {
            pages,
            ..self.clone()
        }
    }

    /// Apply a theme's colors, leaving every other field untouched
    pub fn with_theme(&self, key: &str) -> Result<Self> {
        let preset = find_theme(key).ok_or_else(|| PaperError::UnknownTheme(key.to_string()))?;
        let mut next = self.clone();
        next.theme = Some(preset.key.to_string());
        next.stroke_color = preset.stroke_color.to_string();
        next.background.color = preset.background_color.to_string();
        next.background.pattern_color = preset.pattern_color.to_string();
        Ok(next)
    }

    /// Replace everything with a catalog template, keeping this config's id
    pub fn with_template(&self, template_id: &str) -> Result<Self> {
        let template = find_template(template_id)
            .ok_or_else(|| PaperError::UnknownTemplate(template_id.to_string()))?;
        Ok(Self {
            id: self.id.clone(),
            ..template
        })
    }

    /// Pretty-printed configuration document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import a configuration document.
    ///
    /// The document must carry `pattern`, `margins` and `size`; everything
    /// else is merged over the default configuration, nested groups field
    /// by field. The result always gets a fresh `imported-<millis>` id and
    /// at least one page.
    pub fn from_document(document: &str) -> Result<Self> {
        let imported: Value = serde_json::from_str(document)
            .map_err(|e| PaperError::Import(format!("Document is not valid JSON: {}", e)))?;
        let Value::Object(imported) = imported else {
            return Err(PaperError::Import(
                "Document is not a configuration object".to_string(),
            ));
        };

        for field in REQUIRED_IMPORT_FIELDS {
            if !imported.get(field).is_some_and(is_truthy) {
                return Err(PaperError::Import(format!("Missing required field '{}'", field)));
            }
        }

        let Value::Object(mut merged) = serde_json::to_value(PaperConfig::default())? else {
            return Err(PaperError::Import("Default configuration is not an object".to_string()));
        };
        for (key, value) in imported {
            if MERGED_GROUPS.contains(&key.as_str()) {
                merge_group(&mut merged, &key, value);
            } else {
                merged.insert(key, value);
            }
        }
        merged.insert("id".to_string(), Value::String(fresh_id("imported")));

        let mut config: PaperConfig = serde_json::from_value(Value::Object(merged))
            .map_err(|e| PaperError::Import(format!("Invalid configuration: {}", e)))?;
        config.pages.count = config.pages.count.max(1);
        log::debug!("Imported configuration '{}' as {}", config.name, config.id);
        Ok(config)
    }

    /// Load a configuration saved by [`PaperConfig::save`], keeping its id
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Read and import a configuration document from disk
    pub async fn import_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_document(&contents)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Default file name for an exported configuration document
pub fn settings_file_name() -> String {
    format!("paper-settings-{}.json", chrono::Utc::now().format("%Y-%m-%d"))
}

/// `<prefix>-<unix millis>`
pub(crate) fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_millis())
}

/// Overlay an imported nested group onto the default's group. A group
/// that is not an object contributes nothing.
fn merge_group(target: &mut Map<String, Value>, key: &str, value: Value) {
    let Value::Object(fields) = value else {
        return;
    };
    match target.get_mut(key) {
        Some(Value::Object(base)) => base.extend(fields),
        _ => {
            target.insert(key.to_string(), Value::Object(fields));
        }
    }
}

/// Loose presence check: null, false, zero and empty strings don't count
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::String(String::new())));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(is_truthy(&serde_json::json!("grid")));
        assert!(is_truthy(&serde_json::json!({})));
    }

    #[test]
    fn test_merge_group_keeps_unlisted_defaults() {
        let mut target = serde_json::json!({"pages": {"count": 1, "showNumbers": false}})
            .as_object()
            .unwrap()
            .clone();
        merge_group(&mut target, "pages", serde_json::json!({"count": 4}));
        assert_eq!(target["pages"]["count"], 4);
        assert_eq!(target["pages"]["showNumbers"], false);
    }

    #[test]
    fn test_settings_file_name_shape() {
        let name = settings_file_name();
        assert!(name.starts_with("paper-settings-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "paper-settings-2024-01-01.json".len());
    }
}
