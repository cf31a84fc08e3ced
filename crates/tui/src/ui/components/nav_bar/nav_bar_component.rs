//! Fixed navigation bar: brand, section links with the active one
//! highlighted, phone CTA, and the menu trigger.
//!
//! The bar reads the threshold watcher's boolean for purely visual styling:
//! transparent over the hero, elevated once the page scrolls past the
//! threshold. Hit areas for every interactive element are recorded during
//! rendering and consumed by the mouse handler.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use navetta_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::component::{Component, hit_test};

/// Below this width the inline link row is hidden and navigation goes
/// through the slide-out menu instead.
const LINK_ROW_MIN_WIDTH: u16 = 70;

#[derive(Debug, Default)]
pub struct NavBarComponent;

impl Component for NavBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        if hit_test(std::slice::from_ref(&app.nav.trigger_area), x, y).is_some() {
            return app.update(Msg::MenuToggle);
        }
        if hit_test(std::slice::from_ref(&app.nav.phone_area), x, y).is_some() {
            return app.update(Msg::CopyPhone);
        }
        if let Some(idx) = hit_test(&app.nav.link_areas, x, y) {
            return app.update(Msg::NavActivate(idx));
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let App {
            nav,
            threshold,
            ctx,
            ..
        } = app;
        let theme = &ctx.theme;
        let elevated = threshold.is_past();
        let bg = if elevated {
            theme.bar_bg_elevated
        } else {
            theme.bar_bg
        };
        let border_style = if elevated {
            Style::default().fg(theme.panel_border)
        } else {
            // Border glyphs in the bar's own color read as no border at all.
            Style::default().fg(bg)
        };

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style)
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

        // Row 0: brand on the left, phone CTA and menu trigger on the right.
        let brand = Line::from(vec![
            Span::styled("⚓ ", theme.accent_style()),
            Span::styled(
                ctx.site.meta.brand.clone(),
                Style::default().fg(theme.bar_text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", ctx.site.meta.tagline),
                Style::default().fg(theme.bar_text_muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(brand), rows[0]);

        let phone_label = format!("☎ {}", ctx.site.meta.phone_display);
        let trigger_label = if nav.navigator.menu_open() { "✕" } else { "≡" };
        let phone_width = phone_label.width() as u16 + 2;
        let trigger_width = trigger_label.width() as u16 + 2;
        let right_x = rows[0].right().saturating_sub(phone_width + trigger_width);

        nav.phone_area = Rect::new(right_x, rows[0].y, phone_width, 1);
        nav.trigger_area = Rect::new(right_x + phone_width, rows[0].y, trigger_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(phone_label, theme.accent_style())),
            nav.phone_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {trigger_label}"),
                Style::default().fg(theme.bar_text),
            )),
            nav.trigger_area,
        );

        // Row 1: the inline link list, hidden below the narrow breakpoint.
        nav.link_areas.clear();
        if inner.width < LINK_ROW_MIN_WIDTH {
            return;
        }
        let active = nav.navigator.active().to_string();
        let mut x = rows[1].x + 2;
        for (idx, link) in nav.navigator.links().iter().enumerate() {
            let hint = format!("{} ", idx + 1);
            let label_width = (hint.width() + link.label.width()) as u16;
            if x + label_width >= rows[1].right() {
                break;
            }
            let mut style = if link.anchor == active {
                theme.active_link_style()
            } else {
                Style::default().fg(theme.bar_text_muted)
            };
            if nav.focused == Some(idx) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let area = Rect::new(x, rows[1].y, label_width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(hint, Style::default().fg(theme.bar_text_muted).add_modifier(Modifier::DIM)),
                    Span::styled(link.label.clone(), style),
                ])),
                area,
            );
            nav.link_areas.push(area);
            x += label_width + 3;
        }
    }
}
