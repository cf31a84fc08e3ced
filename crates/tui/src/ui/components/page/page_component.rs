//! Page view: draws the virtual page at the current scroll offset.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::app::App;
use crate::ui::components::component::Component;

#[derive(Debug, Default)]
pub struct PageComponent;

impl Component for PageComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let App {
            page,
            nav,
            threshold,
            ctx,
            ..
        } = app;

        page.set_viewport(rect.height);
        if page.ensure_layout(&ctx.site, &ctx.theme, rect.width) {
            // Fresh geometry: re-derive the threshold flag and the active
            // section before anything reads them. This is also what
            // establishes the initial active section on the first draw.
            let offset = page.offset();
            threshold.observe(offset);
            nav.navigator.observe_scroll(offset, page.geometry());
        }

        let paragraph = Paragraph::new(Text::from(page.geometry().lines().to_vec()))
            .style(Style::default().bg(ctx.theme.page_bg))
            .scroll((page.offset(), 0));
        frame.render_widget(paragraph, rect);

        if page.max_offset() > 0 {
            let mut scrollbar_state =
                ScrollbarState::new(usize::from(page.max_offset())).position(usize::from(page.offset()));
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(ctx.theme.scrollbar_thumb))
                .track_style(Style::default().fg(ctx.theme.panel_border));
            frame.render_stateful_widget(scrollbar, rect, &mut scrollbar_state);
        }
    }
}
