//! Rendering
//!
//! The page body is a virtual column of sections scrolled by
//! [`crate::components::navigation::PageScroll`]; overlays (nav menu,
//! cart) draw on top of it. Section anchor rows are recomputed from the
//! same builder the renderer uses, so scroll targets always match what is
//! on screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::App;
use crate::app::Focus;
use crate::components::alerts::{Alert, AlertKind};
use crate::components::cart::{CartOverlay, ContactField, EMPTY_CART_MSG, OverlayStage};
use crate::components::navigation::NAV_LINKS;
use crate::components::reservation::ReservationField;
use crate::utils::price::format_usd;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page body
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = if app.show_logs {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        draw_logs(f, split[1]);
        split[0]
    } else {
        chunks[1]
    };

    let (lines, _) = build_page(app);
    let page = Paragraph::new(lines)
        .scroll((app.page.offset, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(page, body);

    if app.nav.open {
        draw_nav_overlay(f, app, body);
    }
    if let Some(overlay) = app.cart.overlay() {
        draw_cart_overlay(f, app, overlay, body);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw(format!(" {} ", app.nav.icon())),
        Span::styled(
            " Tavola Trattoria ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.page.is_sticky() {
        spans.push(Span::styled(
            " sticky ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("🛒 {}", app.cart.badge()),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::styled(
        "   m menu · c cart · r reserve · n newsletter · l logs · q quit",
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(Block::default().title(" Logs ").borders(Borders::ALL))
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White));
    f.render_widget(logs, area);
}

/// Section anchor rows for the current app state
pub fn section_anchors(app: &App) -> Vec<(&'static str, u16)> {
    build_page(app).1
}

/// Build the virtual page and record where each section starts
fn build_page(app: &App) -> (Vec<Line<'static>>, Vec<(&'static str, u16)>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors: Vec<(&'static str, u16)> = Vec::new();

    // --- Home ---
    anchors.push(("home", lines.len() as u16));
    lines.push(section_title("Benvenuti"));
    lines.push(Line::raw("Cucina casalinga, every day from 11 AM."));
    lines.push(Line::raw(""));

    // --- Menu ---
    anchors.push(("menu", lines.len() as u16));
    lines.push(section_title("Menu"));
    let mut buttons: Vec<Span<'static>> = Vec::new();
    for (i, category) in app.menu.categories().iter().enumerate() {
        let style = if i == app.menu.active() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        buttons.push(Span::styled(format!(" {} ", category), style));
        buttons.push(Span::raw(" "));
    }
    lines.push(Line::from(buttons));
    for (i, item) in app.menu.visible_items().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(item.name.clone()),
            Span::styled(
                format!("  {}", format_usd(item.price)),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
    lines.push(Line::styled(
        " ←/→ pick a category · 1-9 add a dish to your order",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::raw(""));

    // --- Reservations ---
    anchors.push(("reservations", lines.len() as u16));
    lines.push(section_title("Reservations"));
    if let Some(alert) = app.form_alert.current() {
        lines.push(alert_line(alert));
    }
    let editing = app.focus == Focus::Reservation;
    lines.push(field_line(app, ReservationField::Name, app.reservation.name.value(), editing));
    lines.push(field_line(app, ReservationField::Email, app.reservation.email.value(), editing));
    lines.push(field_line(app, ReservationField::Phone, app.reservation.phone.value(), editing));
    lines.push(field_line(
        app,
        ReservationField::Date,
        &format!(
            "{} (min {})",
            app.reservation.date.value(),
            app.reservation.min_date()
        ),
        editing,
    ));
    lines.push(field_line(
        app,
        ReservationField::Time,
        &format!("‹ {} ›", app.reservation.time_label()),
        editing,
    ));
    lines.push(field_line(app, ReservationField::Guests, app.reservation.guests.value(), editing));
    lines.push(field_line(app, ReservationField::Message, app.reservation.message.value(), editing));
    if let Some(status) = app.reservation.availability() {
        let color = match status {
            crate::components::reservation::AvailabilityStatus::Available { .. } => Color::Green,
            crate::components::reservation::AvailabilityStatus::Unavailable { .. } => Color::Red,
        };
        for text in status.lines() {
            lines.push(Line::styled(format!("   {}", text), Style::default().fg(color)));
        }
    }
    lines.push(Line::styled(
        " r edit · Tab next field · Enter submit",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::raw(""));

    // --- Newsletter ---
    anchors.push(("newsletter", lines.len() as u16));
    lines.push(section_title("Newsletter"));
    let email_style = if app.focus == Focus::Newsletter {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::raw(" Email: "),
        Span::styled(app.newsletter.email.value().to_string(), email_style),
    ]));
    if let Some(alert) = app.newsletter_alert.current() {
        lines.push(alert_line(alert));
    }
    lines.push(Line::styled(
        " n edit · Enter subscribe",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::raw(""));

    // --- Footer ---
    lines.push(Line::styled(
        format!("© {} Tavola Trattoria", app.footer_year),
        Style::default().fg(Color::DarkGray),
    ));

    (lines, anchors)
}

fn section_title(title: &str) -> Line<'static> {
    Line::styled(
        format!("── {} ──", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn field_line(app: &App, field: ReservationField, value: &str, editing: bool) -> Line<'static> {
    let focused = editing && app.reservation.focus == field;
    let marker = if focused { "▸" } else { " " };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("{} {:<17}", marker, format!("{}:", field.label()))),
        Span::styled(value.to_string(), style),
    ])
}

fn alert_line(alert: &Alert) -> Line<'static> {
    let color = match alert.kind {
        AlertKind::Success => Color::Green,
        AlertKind::Error => Color::Red,
    };
    Line::styled(format!(" {} ", alert.message), Style::default().fg(color))
}

fn draw_nav_overlay(f: &mut Frame, app: &App, body: Rect) {
    let width = 22.min(body.width);
    let height = (NAV_LINKS.len() as u16 + 2).min(body.height);
    let area = Rect::new(body.right().saturating_sub(width), body.y, width, height);
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let style = if i == app.nav.selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!(" {} ", link.label), style));
    }
    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Navigate ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(menu, area);
}

fn draw_cart_overlay(f: &mut Frame, app: &App, overlay: &CartOverlay, body: Rect) {
    let area = centered_rect(60, 70, body);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match &overlay.stage {
        OverlayStage::Items => {
            if app.cart.cart.is_empty() {
                lines.push(Line::styled(
                    EMPTY_CART_MSG,
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                for (i, item) in app.cart.cart.items().iter().enumerate() {
                    let style = if i == overlay.selected {
                        Style::default().fg(Color::Black).bg(Color::Yellow)
                    } else {
                        Style::default()
                    };
                    lines.push(Line::styled(
                        format!(" {:<30} {:>8} ", item.name, format_usd(item.price)),
                        style,
                    ));
                }
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::raw(" Total: "),
                Span::styled(
                    format_usd(app.cart.cart.total()),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                " Enter checkout · x remove · Esc close",
                Style::default().fg(Color::DarkGray),
            ));
        }
        OverlayStage::Contact(form) => {
            for (field, input) in [
                (ContactField::Name, &form.name),
                (ContactField::Email, &form.email),
                (ContactField::Phone, &form.phone),
            ] {
                let style = if form.focus == Some(field) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::raw(format!(" {:<22}", format!("{}:", field.label()))),
                    Span::styled(input.value().to_string(), style),
                ]));
            }
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                " Tab next · Enter place order · Esc back",
                Style::default().fg(Color::DarkGray),
            ));
        }
        OverlayStage::Dialog(dialog) => {
            let color = if dialog.success { Color::Green } else { Color::Red };
            lines.push(Line::styled(
                dialog.message.clone(),
                Style::default().fg(color),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                " Enter dismiss",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Your Order ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(panel, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
