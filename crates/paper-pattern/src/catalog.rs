//! Built-in template catalog
//!
//! Templates are read-only presets layered over the default configuration.
//! The list order is the display order.

use crate::config::PaperConfig;
use crate::types::{BackgroundConfig, LineStyle, Margins, PatternType};

/// Background used by the Chinese calligraphy presets
const RICE_PAPER: (&str, &str, f32) = ("#FFF8E6", "#E7BC91", 0.1);

struct Preset(PaperConfig);

impl Preset {
    fn new(
        id: &str,
        name: &str,
        pattern: PatternType,
        spacing: f32,
        stroke_color: &str,
        stroke_width: f32,
    ) -> Self {
        Self(PaperConfig {
            id: id.to_string(),
            name: name.to_string(),
            pattern,
            spacing,
            stroke_color: stroke_color.to_string(),
            stroke_width,
            ..PaperConfig::default()
        })
    }

    fn margins(mut self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.0.margins = Margins {
            top,
            bottom,
            left,
            right,
        };
        self
    }

    fn theme(mut self, key: &str) -> Self {
        self.0.theme = Some(key.to_string());
        self
    }

    fn line_style(mut self, style: LineStyle) -> Self {
        self.0.line_style = style;
        self
    }

    fn background(mut self, f: impl FnOnce(&mut BackgroundConfig)) -> Self {
        f(&mut self.0.background);
        self
    }

    fn rice_paper(self) -> Self {
        let (color, pattern_color, opacity) = RICE_PAPER;
        self.theme("vintage").background(|bg| {
            bg.color = color.to_string();
            bg.pattern_color = pattern_color.to_string();
            bg.pattern_opacity = opacity;
        })
    }
}

/// Every built-in template, in display order
pub fn templates() -> Vec<PaperConfig> {
    use PatternType::*;

    let red = "#ff6b6b";
    let brown = "#8B4513";
    let presets = vec![
        // Standard & academic
        Preset::new("lined-basic", "Standard Notebook", Lined, 8.0, "#808080", 0.5)
            .margins(25.0, 25.0, 20.0, 20.0),
        Preset::new("cornell", "Cornell Notes", Cornell, 7.0, "#808080", 0.5)
            .margins(25.0, 25.0, 20.0, 20.0),
        Preset::new("grid-math", "Math Grid", Grid, 5.0, "#a0a0a0", 0.3)
            .margins(20.0, 20.0, 20.0, 20.0),
        Preset::new("dot-paper", "Dot Paper", Dot, 5.0, "#a0a0a0", 0.3)
            .margins(20.0, 20.0, 20.0, 20.0),
        Preset::new("english-paper", "English Practice", EnglishPaper, 5.0, red, 0.5)
            .margins(25.0, 25.0, 25.0, 25.0),
        // Specialized
        Preset::new("arithmetic", "Arithmetic", ArithmeticPaper, 5.0, red, 0.5)
            .margins(25.0, 25.0, 25.0, 25.0),
        Preset::new("composition", "Composition", CompositionPaper, 8.0, red, 0.5)
            .margins(25.0, 25.0, 25.0, 25.0),
        Preset::new("music-staff", "Music Staff", Music, 7.0, "#505050", 0.5)
            .theme("classic")
            .margins(25.0, 25.0, 20.0, 20.0),
        Preset::new("guitar-tab", "Guitar Tab", GuitarTab, 25.0, "#333333", 0.6)
            .margins(15.0, 15.0, 15.0, 15.0),
        Preset::new("seyes", "Seyes (French)", Seyes, 8.0, "#9c9c9c", 0.3).theme("classic"),
        // Chinese calligraphy & practice
        Preset::new("tianzi", "Tianzi", Tianzi, 20.0, brown, 0.6)
            .rice_paper()
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("mizige", "Mizige", Mizige, 20.0, brown, 0.6)
            .rice_paper()
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("jiugongge", "Jiugongge", Jiugongge, 10.0, brown, 0.6)
            .rice_paper()
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("huigongge", "Huigongge", Huigongge, 25.0, brown, 0.6)
            .rice_paper()
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("hardpen-huigongge", "Hardpen Huigongge", HardpenHuigongge, 25.0, "#ff0000", 0.4)
            .rice_paper()
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("calligraphy", "Calligraphy Paper", Mizige, 10.0, "#c0c0c0", 0.4)
            .line_style(LineStyle::Dashed)
            .theme("vintage")
            .background(|bg| bg.color = "#fff8e1".to_string())
            .margins(10.0, 9.0, 9.0, 9.0),
        Preset::new("pinyin-paper", "Chinese Pinyin", Pinyin, 20.0, red, 0.5)
            .margins(25.0, 25.0, 25.0, 25.0),
        Preset::new("pinyin-tianzi", "Pinyin Tianzi", PinyinTianzi, 20.0, red, 0.5)
            .margins(15.0, 15.0, 15.0, 15.0),
        Preset::new("chinese-preview-card", "Chinese Preview Card", Tianzi, 20.0, "#6b7280", 0.5)
            .margins(15.0, 15.0, 15.0, 15.0),
        // Creative & design
        Preset::new("children_drawing", "Children Drawing Paper", ChildrenDrawing, 10.0, "#808080", 0.5)
            .theme("creative")
            .margins(20.0, 20.0, 20.0, 20.0),
        Preset::new("storyboard", "Storyboard", Storyboard, 50.0, "#808080", 0.5)
            .margins(20.0, 20.0, 20.0, 20.0),
        Preset::new("isometric", "Isometric Dot", Isometric, 10.0, "#a0a0a0", 0.3),
        Preset::new("hexagonal", "Hexagonal", Hexagonal, 15.0, "#a0a0a0", 0.3),
        Preset::new("cross-grid", "Cross Grid", Cross, 10.0, "#808080", 0.4)
            .background(|bg| bg.pattern_opacity = 0.1)
            .margins(9.0, 9.0, 9.0, 9.0),
        Preset::new("vertical-lined", "Vertical Lined", VerticalLined, 8.0, "#6b7280", 0.5)
            .margins(25.0, 25.0, 25.0, 25.0),
        Preset::new("minimal_journal", "Minimal Journal", Lined, 8.0, "#909090", 0.4)
            .theme("minimalist")
            .background(|bg| {
                bg.color = "#ffffff".to_string();
                bg.pattern_opacity = 0.1;
            })
            .margins(30.0, 30.0, 25.0, 25.0),
        Preset::new("practice_paper", "Practice Paper", Lined, 8.0, "#6b7280", 0.5)
            .line_style(LineStyle::Dashed)
            .margins(25.0, 25.0, 25.0, 25.0),
    ];

    presets.into_iter().map(|p| p.0).collect()
}

/// Look up a template by id
pub fn find_template(id: &str) -> Option<PaperConfig> {
    templates().into_iter().find(|t| t.id == id)
}
