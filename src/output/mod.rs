pub mod formatter;
pub mod theme;

pub use formatter::{
    format_grade_legend, format_json, format_lead_detail, format_scored_table, format_tsv,
    should_use_colors, OutputFormat,
};
pub use theme::{grade_badge, grade_style, resolve_theme, ColorPair, GradeStyle, Theme, ThemeMode};
