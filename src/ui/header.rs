//! Entity profile header.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::HIGH_RISK_THRESHOLD;
use crate::domain::Entity;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::{create_border_block, format_with_commas};

// ============================================================================
// Header Rendering
// ============================================================================

/// Renders name, profile, risk and exposure for the mounted entity.
pub fn render(frame: &mut Frame, area: Rect, entity: &Entity) {
    let mut block = create_border_block(&entity.id);
    if entity.is_flagged() {
        block = block.border_style(Style::default().fg(ERROR_COLOR));
    }
    let header = Paragraph::new(header_lines(entity)).block(block);
    frame.render_widget(header, area);
}

fn header_lines(entity: &Entity) -> Vec<Line<'_>> {
    let profile = &entity.profile;

    let mut title = vec![
        Span::styled(
            format!(" {}", entity.name),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} • {} • KYC {}",
                profile.entity_type, profile.jurisdiction, profile.kyc_status
            ),
            Style::default().fg(MUTED_COLOR),
        ),
    ];
    if profile.pep_status {
        title.push(Span::styled(
            "  [PEP]",
            Style::default().fg(WARNING_COLOR).add_modifier(Modifier::BOLD),
        ));
    }
    if profile.sanctions_hit {
        title.push(Span::styled(
            "  [SANCTIONS]",
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        ));
    }

    let risk_color = if entity.risk_score > HIGH_RISK_THRESHOLD {
        ERROR_COLOR
    } else {
        WARNING_COLOR
    };
    let balances = entity
        .balances_by_currency()
        .into_iter()
        .map(|(currency, total)| format!("{} {currency}", format_with_commas(total)))
        .collect::<Vec<_>>()
        .join(" + ");
    let balances = if balances.is_empty() {
        "no accounts".to_string()
    } else {
        balances
    };

    let stats = vec![
        Span::raw(" Risk "),
        Span::styled(
            entity.risk_score.to_string(),
            Style::default().fg(risk_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(MUTED_COLOR)),
        Span::raw(balances),
        Span::styled("  │  ", Style::default().fg(MUTED_COLOR)),
        Span::raw(format!(
            "{} alerts  {} cases",
            entity.alerts.len(),
            entity.cases.len()
        )),
    ];

    vec![Line::from(title), Line::from(stats)]
}

// ============================================================================
// Tests
// ============================================================================
