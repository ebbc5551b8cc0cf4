//! Text and JSON rendering of assessments

use std::fmt::Write as _;

use covira_ai::{Assessment, Question, Section};
use covira_model::LoadedModel;
use serde::Serialize;

use crate::locale::{Language, LanguagePack};

pub const BAR_WIDTH: usize = 50;

/// `[#####-----]` with `width` cells filled in proportion to `percent`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).floor() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn render_header(pack: &LanguagePack) -> String {
    format!("=== {} ===\n{}\n", pack.title, pack.subtitle)
}

/// The ten questions grouped under their localized section headings
pub fn render_questions(pack: &LanguagePack) -> String {
    let mut out = String::new();
    for section in [Section::Symptoms, Section::Exposure] {
        let _ = writeln!(out, "{}", pack.section_heading(section));
        for q in Question::in_section(section) {
            let _ = writeln!(out, "  --{:<16} {}", q.key().replace('_', "-"), q.label());
        }
    }
    out
}

pub fn render_report(assessment: &Assessment, pack: &LanguagePack) -> String {
    let percent = assessment.result.risk_probability;
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", pack.title);
    let _ = writeln!(out, "Risk Assessment");
    let _ = writeln!(out, "{} {percent:.2}%", progress_bar(percent, BAR_WIDTH));
    let _ = writeln!(out, "{}", assessment.category.label());
    let _ = writeln!(out, "COVID-19 Risk Probability: {percent:.2}%");
    let _ = writeln!(out, "{}", assessment.recommendation.verdict());
    let _ = writeln!(
        out,
        "Recommendation: {}",
        assessment.recommendation.message()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", pack.note);
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    language: Language,
    #[serde(flatten)]
    assessment: &'a Assessment,
    label: &'static str,
    verdict: &'static str,
    message: &'static str,
}

pub fn render_json(assessment: &Assessment, language: Language) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        language,
        assessment,
        label: assessment.category.label(),
        verdict: assessment.recommendation.verdict(),
        message: assessment.recommendation.message(),
    })
}

pub fn render_model_info(model: &LoadedModel) -> String {
    let meta = model.metadata();
    let mut out = String::new();
    let _ = writeln!(out, "name:     {}", meta.name);
    let _ = writeln!(out, "version:  {}", meta.version);
    let _ = writeln!(out, "kind:     {}", model.kind());
    if let Some(description) = &meta.description {
        let _ = writeln!(out, "about:    {description}");
    }
    let _ = writeln!(out, "features:");
    if meta.feature_names.is_empty() {
        let _ = writeln!(out, "  (undeclared)");
    }
    for (i, name) in meta.feature_names.iter().enumerate() {
        let _ = writeln!(out, "  {i:>2} {name}");
    }
    for (key, value) in &meta.tags {
        let _ = writeln!(out, "tag:      {key}={value}");
    }
    out
}
