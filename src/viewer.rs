//! Interactive terminal viewer for a rendered container.

use std::time::Duration;

use anyhow::Result;
use filepeek_render_api::SharedContainer;
use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the viewer until the user quits with `q` or `Esc`.
///
/// `j`/`k` and the arrow keys scroll the content.
pub fn run(container: &SharedContainer) -> Result<()> {
    let mut terminal = ratatui::init();
    let mut scroll: u16 = 0;

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, container, scroll)) {
            break Err(err.into());
        }

        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => break Err(err.into()),
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Char('j') | KeyCode::Down => scroll = scroll.saturating_add(1),
                KeyCode::Char('k') | KeyCode::Up => scroll = scroll.saturating_sub(1),
                KeyCode::PageDown => scroll = scroll.saturating_add(10),
                KeyCode::PageUp => scroll = scroll.saturating_sub(10),
                _ => {}
            },
            Ok(_) => {}
            Err(err) => break Err(err.into()),
        }
    };

    ratatui::restore();
    result
}

fn draw(frame: &mut Frame<'_>, container: &SharedContainer, scroll: u16) {
    let area: Rect = frame.area();

    container.with(|contents| {
        let mut text = Text::default();
        for block in contents.blocks() {
            text.lines.extend(block.lines.iter().cloned());
        }

        let mut frame_block = Block::bordered();
        if let Some(title) = contents.title() {
            frame_block = frame_block.title(title.to_string());
        }

        let paragraph = Paragraph::new(text)
            .block(frame_block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    });
}
