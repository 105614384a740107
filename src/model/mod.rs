//! # Report Model
//!
//! The input representation: one assessment, fully populated by the caller
//! before rendering begins and never mutated afterwards. It deserializes from
//! the camelCase JSON the capture app stores, with every field optional.

use serde::{Deserialize, Serialize};

/// A complete building assessment ready for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentReport {
    pub name: String,
    /// Pre-formatted by the caller; rendered verbatim.
    pub date: String,
    pub overall_risk: RiskLevel,

    /// Advisory total. Not required to equal the sum of the category counts.
    pub total_issues: u32,
    pub crack_high: u32,
    pub crack_moderate: u32,
    pub crack_low: u32,
    pub paint: u32,
    pub algae: u32,

    #[serde(flatten)]
    pub building: BuildingInfo,

    /// Photograph references in rendering order. Empty entries are skipped.
    pub image_urls: Vec<String>,
}

/// Optional building metadata. An empty string means "absent".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingInfo {
    pub building_type: String,
    pub construction_year: String,
    pub renovation_year: String,
    pub floors: String,
    pub material: String,
    pub foundation: String,
    pub environment: String,
    pub previous_issues: String,
    pub occupancy: String,
    pub environmental_risks: String,
    pub notes: String,
}

impl BuildingInfo {
    /// Label/value rows in display order, skipping absent fields.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Building Type", self.building_type.as_str()),
            ("Material", self.material.as_str()),
            ("Year Built", self.construction_year.as_str()),
            ("Floors", self.floors.as_str()),
            ("Foundation", self.foundation.as_str()),
            ("Environment", self.environment.as_str()),
            ("Last Renovated", self.renovation_year.as_str()),
            ("Occupancy", self.occupancy.as_str()),
            ("Environmental Risks", self.environmental_risks.as_str()),
            ("Previous Issues", self.previous_issues.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| is_present(value))
        .collect()
    }

    /// Notes text, if present.
    pub fn notes(&self) -> Option<&str> {
        let notes = self.notes.trim();
        if notes.is_empty() {
            None
        } else {
            Some(notes)
        }
    }

    /// Whether the building-info block should be rendered at all.
    pub fn has_any(&self) -> bool {
        !self.rows().is_empty() || self.notes().is_some()
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Overall risk classification. Unrecognized labels read as `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    High,
    Moderate,
    #[default]
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Moderate => "Moderate Risk",
            Self::Low => "Low Risk",
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(label: &str) -> Self {
        match label {
            "High Risk" => Self::High,
            "Moderate Risk" => Self::Moderate,
            _ => Self::Low,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.label().to_string()
    }
}

/// Static severity of a defect category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

/// The five defect categories the detector reports, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectCategory {
    SeriousConcreteDamage,
    LargeCrack,
    HairlineCrack,
    PaintDamage,
    AlgaeGrowth,
}

impl DefectCategory {
    pub const ALL: [DefectCategory; 5] = [
        Self::SeriousConcreteDamage,
        Self::LargeCrack,
        Self::HairlineCrack,
        Self::PaintDamage,
        Self::AlgaeGrowth,
    ];

    /// Title used for recommendations and the guidance lookup.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeriousConcreteDamage => "Serious Concrete Damage",
            Self::LargeCrack => "Large Crack Found",
            Self::HairlineCrack => "Small Hairline Crack/s",
            Self::PaintDamage => "Paint Peeling or Flaking",
            Self::AlgaeGrowth => "Algae/Moss Growth",
        }
    }

    /// Noun phrase for the narrative summary, preceded by the count.
    pub fn summary_phrase(&self) -> &'static str {
        match self {
            Self::SeriousConcreteDamage => "serious concrete damage",
            Self::LargeCrack => "large cracks",
            Self::HairlineCrack => "small hairline cracks",
            Self::PaintDamage => "paint damage areas",
            Self::AlgaeGrowth => "algae/moss areas",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::SeriousConcreteDamage => Severity::High,
            Self::LargeCrack => Severity::Moderate,
            Self::HairlineCrack | Self::PaintDamage | Self::AlgaeGrowth => Severity::Low,
        }
    }

    pub fn count_in(&self, report: &AssessmentReport) -> u32 {
        match self {
            Self::SeriousConcreteDamage => report.crack_high,
            Self::LargeCrack => report.crack_moderate,
            Self::HairlineCrack => report.crack_low,
            Self::PaintDamage => report.paint,
            Self::AlgaeGrowth => report.algae,
        }
    }
}

/// One defect category that was actually observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub category: DefectCategory,
    pub count: u32,
    pub severity: Severity,
}

impl RecommendationEntry {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl AssessmentReport {
    /// Non-zero categories in template order.
    pub fn observed_categories(&self) -> Vec<(DefectCategory, u32)> {
        DefectCategory::ALL
            .iter()
            .map(|c| (*c, c.count_in(self)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Recommendation entries derived purely from the category counts.
    pub fn recommendation_entries(&self) -> Vec<RecommendationEntry> {
        self.observed_categories()
            .into_iter()
            .map(|(category, count)| RecommendationEntry {
                category,
                count,
                severity: category.severity(),
            })
            .collect()
    }

    /// Image references that will get a page, in order.
    pub fn image_references(&self) -> Vec<&str> {
        self.image_urls
            .iter()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
            .collect()
    }
}
