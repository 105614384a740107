//! Header and risk badge: the two fixed-height blocks at the top of page 1.

use super::{BlockContext, SECTION_GAP};
use crate::layout::{Cursor, Surface};
use crate::model::{AssessmentReport, RiskLevel};
use crate::style::{Color, TextStyle};

pub const HEADER_HEIGHT: u32 = 60;
pub const DEFAULT_TITLE: &str = "Building Assessment Report";

pub const BADGE_WIDTH: f64 = 200.0;
pub const BADGE_HEIGHT: f64 = 40.0;
const BADGE_RADIUS: f64 = 8.0;

/// Title and assessment date.
pub fn render_header(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    report: &AssessmentReport,
) -> Cursor {
    let title = if report.name.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        report.name.as_str()
    };
    let title_style = TextStyle::TITLE;
    let baseline = cursor.top() + title_style.size;
    surface.draw_text(ctx.left(), baseline, title, title_style);

    let date_style = TextStyle::BODY.with_color(Color::TEXT_MUTED);
    surface.draw_text(
        ctx.left(),
        baseline + 24.0,
        format!("Assessment Date: {}", report.date),
        date_style,
    );

    cursor.advance(HEADER_HEIGHT)
}

/// Fill color for the risk badge.
pub fn badge_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::RISK_HIGH,
        RiskLevel::Moderate => Color::RISK_MODERATE,
        RiskLevel::Low => Color::RISK_LOW,
    }
}

/// A colored pill with the risk label centred in white.
pub fn render_risk_badge(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    report: &AssessmentReport,
) -> Cursor {
    let x = ctx.left();
    let y = cursor.top();
    surface.fill_rounded_rect(
        x,
        y,
        BADGE_WIDTH,
        BADGE_HEIGHT,
        BADGE_RADIUS,
        badge_color(report.overall_risk),
    );

    let style = TextStyle::BADGE;
    let label = report.overall_risk.label();
    let label_width = ctx.text_width(label, &style);
    // Optical centre: cap height of Helvetica is ~0.72em.
    let baseline = y + (BADGE_HEIGHT + style.size * 0.72) / 2.0;
    surface.draw_text(x + (BADGE_WIDTH - label_width) / 2.0, baseline, label, style);

    cursor.advance(BADGE_HEIGHT as u32 + SECTION_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontContext, GlyphMetrics};
    use crate::layout::{DrawCommand, PageGeometry};

    fn render_badge(risk: RiskLevel) -> Vec<DrawCommand> {
        let fc = FontContext::new();
        let geometry = PageGeometry::default();
        let ctx = BlockContext::new(&fc, geometry);
        let mut surface = Surface::new(&geometry);
        let report = AssessmentReport {
            overall_risk: risk,
            ..Default::default()
        };
        let next = render_risk_badge(&ctx, &mut surface, Cursor::at(110), &report);
        assert_eq!(next, Cursor::at(170));
        surface.commands().to_vec()
    }

    #[test]
    fn badge_color_mapping() {
        assert_eq!(badge_color(RiskLevel::from("High Risk")), Color::RISK_HIGH);
        assert_eq!(badge_color(RiskLevel::from("Moderate Risk")), Color::RISK_MODERATE);
        assert_eq!(badge_color(RiskLevel::from("Low Risk")), Color::RISK_LOW);
        assert_eq!(badge_color(RiskLevel::from("whatever")), Color::RISK_LOW);
        assert_eq!(badge_color(RiskLevel::default()), Color::RISK_LOW);
    }

    #[test]
    fn badge_draws_rect_then_centred_label() {
        let commands = render_badge(RiskLevel::High);
        match &commands[0] {
            DrawCommand::RoundedRect { width, height, fill, .. } => {
                assert_eq!((*width, *height), (200.0, 40.0));
                assert_eq!(*fill, Color::RISK_HIGH);
            }
            other => panic!("expected badge rect, got {other:?}"),
        }
        match &commands[1] {
            DrawCommand::Text { x, text, style, .. } => {
                assert_eq!(text, "High Risk");
                assert_eq!(style.color, Color::WHITE);
                let fc = FontContext::new();
                let w = fc.text_width("High Risk", style.weight, style.size);
                assert!(((x - 40.0) - (200.0 - w) / 2.0).abs() < 1e-9);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn header_uses_default_title_when_unnamed() {
        let fc = FontContext::new();
        let geometry = PageGeometry::default();
        let ctx = BlockContext::new(&fc, geometry);
        let mut surface = Surface::new(&geometry);
        let report = AssessmentReport {
            date: "March 3, 2025".into(),
            ..Default::default()
        };
        let next = render_header(&ctx, &mut surface, Cursor::at(50), &report);
        assert_eq!(next, Cursor::at(110));
        let texts: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![DEFAULT_TITLE, "Assessment Date: March 3, 2025"]);
    }
}
