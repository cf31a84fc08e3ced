//! Top-level view: composes the fixed bar, the scrollable page, the
//! slide-out menu overlay, and the transient status notice, and routes
//! input to whichever of them should see it.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use navetta_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::BAR_HEIGHT;
use crate::ui::components::{Component, MenuComponent, NavBarComponent, PageComponent};

pub struct MainView {
    nav_bar: NavBarComponent,
    page: PageComponent,
    menu: MenuComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            nav_bar: NavBarComponent,
            page: PageComponent,
            menu: MenuComponent,
        }
    }

    /// Routes a key event: the open menu captures the keyboard; otherwise
    /// keys map to page scrolling and bar navigation.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.nav.navigator.menu_open() {
            return self.menu.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Char('m') => app.update(Msg::MenuToggle),
            KeyCode::Char('c') => app.update(Msg::CopyPhone),
            KeyCode::Char(digit @ '1'..='5') => {
                app.update(Msg::NavActivate(digit as usize - '1' as usize))
            }
            KeyCode::Down | KeyCode::Char('j') => app.update(Msg::ScrollLines(1)),
            KeyCode::Up | KeyCode::Char('k') => app.update(Msg::ScrollLines(-1)),
            KeyCode::PageDown | KeyCode::Char(' ') => app.update(Msg::ScrollPages(1)),
            KeyCode::PageUp => app.update(Msg::ScrollPages(-1)),
            KeyCode::Home | KeyCode::Char('g') => app.update(Msg::ScrollToTop),
            KeyCode::End | KeyCode::Char('G') => app.update(Msg::ScrollToBottom),
            KeyCode::Right | KeyCode::Tab => app.update(Msg::NavFocusNext),
            KeyCode::Left | KeyCode::BackTab => app.update(Msg::NavFocusPrev),
            KeyCode::Enter => app.update(Msg::NavActivateFocused),
            _ => Vec::new(),
        }
    }

    /// Routes a mouse event. The wheel always scrolls the page; clicks go to
    /// the open menu first (its backdrop dismisses), then to the bar.
    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !app.nav.navigator.menu_open()
            && matches!(
                mouse.kind,
                MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
            )
        {
            let delta = if mouse.kind == MouseEventKind::ScrollDown { 3 } else { -3 };
            return app.update(Msg::ScrollLines(delta));
        }
        if app.nav.navigator.menu_open() {
            return self.menu.handle_mouse_events(app, mouse);
        }
        self.nav_bar.handle_mouse_events(app, mouse)
    }

    /// Forwards runtime messages (ticks, resizes) to the reducer.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(msg)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let chunks =
            Layout::vertical([Constraint::Length(BAR_HEIGHT), Constraint::Min(0)]).split(area);
        // Page first: it rebuilds the layout cache the bar's scroll-spy
        // highlight reads from.
        self.page.render(frame, chunks[1], app);
        self.nav_bar.render(frame, chunks[0], app);
        if app.nav.navigator.menu_open() {
            self.menu.render(frame, area, app);
        }
        self.render_status(frame, area, app);
    }

    /// One-line transient notice, top-right under the bar.
    fn render_status(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(notice) = &app.status else {
            return;
        };
        let width = (notice.text.width() as u16 + 4).min(area.width);
        let rect = Rect::new(
            area.right().saturating_sub(width),
            BAR_HEIGHT.min(area.height.saturating_sub(1)),
            width,
            1,
        );
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}  ", notice.text),
                app.ctx.theme.accent_style(),
            ))
            .block(Block::new().style(Style::default().bg(app.ctx.theme.panel_bg))),
            rect,
        );
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}
