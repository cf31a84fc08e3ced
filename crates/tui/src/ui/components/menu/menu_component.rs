//! Slide-out menu sheet: the navigation list mirrored into a right-hand
//! overlay, with the phone CTA at the bottom.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navetta_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::BAR_HEIGHT;
use crate::ui::components::component::{Component, hit_test};

/// Sheet width, bounded by the terminal.
const SHEET_WIDTH: u16 = 32;

#[derive(Debug, Default)]
pub struct MenuComponent;

impl MenuComponent {
    fn sheet_area(frame_area: Rect) -> Rect {
        let width = SHEET_WIDTH.min(frame_area.width);
        let y = BAR_HEIGHT.min(frame_area.height);
        Rect::new(
            frame_area.right().saturating_sub(width),
            y,
            width,
            frame_area.height.saturating_sub(y),
        )
    }
}

impl Component for MenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => app.update(Msg::MenuDismiss),
            KeyCode::Char('m') => app.update(Msg::MenuToggle),
            KeyCode::Up | KeyCode::Char('k') => app.update(Msg::MenuMoveSelection(-1)),
            KeyCode::Down | KeyCode::Char('j') => app.update(Msg::MenuMoveSelection(1)),
            KeyCode::Enter => app.update(Msg::MenuActivate),
            KeyCode::Char('c') => app.update(Msg::CopyPhone),
            KeyCode::Char(digit @ '1'..='5') => {
                app.update(Msg::NavActivate(digit as usize - '1' as usize))
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = hit_test(&app.menu.item_areas, x, y) {
                    return app.update(Msg::NavActivate(idx));
                }
                if hit_test(std::slice::from_ref(&app.menu.phone_area), x, y).is_some() {
                    return app.update(Msg::CopyPhone);
                }
                if hit_test(std::slice::from_ref(&app.menu.last_area), x, y).is_none() {
                    // Backdrop click dismisses the sheet.
                    return app.update(Msg::MenuDismiss);
                }
                Vec::new()
            }
            MouseEventKind::ScrollDown => app.update(Msg::MenuMoveSelection(1)),
            MouseEventKind::ScrollUp => app.update(Msg::MenuMoveSelection(-1)),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let App { nav, menu, ctx, .. } = app;
        let theme = &ctx.theme;
        let sheet = Self::sheet_area(area);
        menu.last_area = sheet;

        frame.render_widget(Clear, sheet);
        let block = Block::bordered()
            .title(" Menu ")
            .border_style(Style::default().fg(theme.panel_border))
            .style(Style::default().bg(theme.panel_bg).fg(theme.text));
        let inner = block.inner(sheet);
        frame.render_widget(block, sheet);

        let active = nav.navigator.active().to_string();
        menu.item_areas.clear();
        let mut y = inner.y + 1;
        for (idx, link) in nav.navigator.links().iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }
            let is_active = link.anchor == active;
            let is_selected = idx == menu.selected;
            let marker = if is_active { "▌" } else { " " };
            let mut style = if is_active {
                theme.accent_style()
            } else {
                theme.text_style()
            };
            if is_selected {
                style = style.bg(theme.selection_bg).add_modifier(Modifier::BOLD);
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, theme.accent_style()),
                    Span::styled(format!(" {}", link.label), style),
                ])),
                row,
            );
            menu.item_areas.push(row);
            y += 2;
        }

        // Phone CTA pinned to the sheet's bottom.
        if inner.height >= 2 {
            let phone_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            menu.phone_area = phone_row;
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("☎ Chiama Ora · {}", ctx.site.meta.phone_display),
                    theme.accent_style().add_modifier(Modifier::BOLD),
                )),
                phone_row,
            );
        } else {
            menu.phone_area = Rect::default();
        }
    }
}
