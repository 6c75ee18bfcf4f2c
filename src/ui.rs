use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::diff::{CharClass, DiffCell};
use crate::feedback::{FeedbackTier, MetricLevel};
use crate::session::Phase;
use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;

fn level_color(level: MetricLevel) -> Color {
    match level {
        MetricLevel::Good => Color::Green,
        MetricLevel::Ok => Color::Yellow,
        MetricLevel::Bad => Color::Red,
    }
}

fn tier_color(tier: FeedbackTier) -> Color {
    match tier {
        FeedbackTier::Excellent | FeedbackTier::Great => Color::Green,
        FeedbackTier::Nice | FeedbackTier::Effort => Color::Yellow,
        FeedbackTier::KeepGoing => Color::Red,
    }
}

/// Incorrectly typed whitespace still needs a visible glyph.
fn visible(ch: char) -> String {
    if ch.is_whitespace() {
        "·".to_owned()
    } else {
        ch.to_string()
    }
}

fn cell_span(cell: &DiffCell) -> Span<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match cell.class {
        CharClass::Correct => Span::styled(cell.ch.to_string(), bold.fg(Color::Green)),
        CharClass::Incorrect => Span::styled(visible(cell.ch), bold.fg(Color::Red)),
        CharClass::Current => Span::styled(
            cell.ch.to_string(),
            bold.add_modifier(Modifier::DIM | Modifier::UNDERLINED),
        ),
        CharClass::Pending => Span::styled(cell.ch.to_string(), bold.add_modifier(Modifier::DIM)),
        CharClass::Overflow => Span::styled(visible(cell.ch), bold.fg(Color::Red)),
    }
}

fn metrics_line(app: &App) -> Line<'static> {
    let m = app.session.metrics();
    let bold = Style::default().add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(format!("{:.2}s", m.elapsed_secs), bold.fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(
            format!("{:.1} wpm", m.wpm),
            bold.fg(level_color(MetricLevel::for_wpm(m.wpm))),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{:.1}% acc", m.accuracy),
            bold.fg(level_color(MetricLevel::for_accuracy(m.accuracy))),
        ),
    ])
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.session.phase() {
            Phase::Idle => render_idle(self, area, buf),
            Phase::Ready | Phase::Running => render_typing(self, area, buf),
            Phase::Finished => render_results(self, area, buf),
        }
    }
}

fn render_idle(app: &App, area: Rect, buf: &mut Buffer) {
    let dim_bold = Style::default().add_modifier(Modifier::BOLD | Modifier::DIM);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    if !app.session.sentence().is_empty() {
        lines.push(Line::styled(app.session.sentence().to_owned(), dim_bold));
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "(enter) start / (→) new sentence / (esc)ape",
        italic,
    ));

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([Constraint::Length(top), Constraint::Min(1)])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}

fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let sentence = app.session.sentence();
    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let mut prompt_occupied_lines =
        ((sentence.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

    if sentence.width() <= max_chars_per_line as usize {
        prompt_occupied_lines = 1;
    }

    // prompt block plus gauge, metrics, and feedback rows
    let occupied = prompt_occupied_lines + 4;
    let top = area.height.saturating_sub(occupied) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(prompt_occupied_lines),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let spans: Vec<Span> = app.session.diff().iter().map(cell_span).collect();
    let prompt = Paragraph::new(Line::from(spans))
        .alignment(if prompt_occupied_lines == 1 {
            // a single centered line gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });
    prompt.render(chunks[1], buf);

    let progress = app.session.metrics().progress;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio((progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{progress:.0}%"));
    gauge.render(chunks[3], buf);

    Paragraph::new(metrics_line(app))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

    if app.session.phase() == Phase::Running {
        let tier = app.session.feedback();
        let feedback = Paragraph::new(Span::styled(
            tier.message(),
            Style::default()
                .fg(tier_color(tier))
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        feedback.render(chunks[5], buf);
    }
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let top = area.height.saturating_sub(4) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(metrics_line(app))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let tier = app.session.feedback();
    Paragraph::new(Span::styled(
        tier.message(),
        Style::default().fg(tier_color(tier)),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    Paragraph::new(Span::styled(
        "(enter) again / (←) reset / (→) new / (esc)ape",
        italic,
    ))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);
}
