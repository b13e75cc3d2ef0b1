/// Ratatui drawing for the interactive session - no game logic in here
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::feedback;
use crate::round::{ProximityTier, RoundStatus};
use crate::tui::app::App;

fn tier_style(tier: ProximityTier) -> Style {
    match tier {
        ProximityTier::Exact => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ProximityTier::Close => Style::default().fg(Color::Yellow),
        ProximityTier::Far => Style::default().fg(Color::Red),
        ProximityTier::Neutral => Style::default(),
    }
}

impl<S> App<S> {
    pub fn render(&self, f: &mut Frame) {
        let view = self.view();

        let [title, status, input, body, guesses, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(f.area());

        f.render_widget(
            Paragraph::new(" NUMBER GUESSING ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan)),
            title,
        );

        f.render_widget(Paragraph::new(feedback::attempts_line(&view)), status);

        let prompt = if self.is_finished() {
            Line::from("Round over")
        } else {
            Line::from(vec![Span::raw(" > "), Span::raw(self.input())])
        };
        f.render_widget(
            Paragraph::new(prompt)
                .block(Block::default().title(" YOUR GUESS (1-100) ").borders(Borders::ALL)),
            input,
        );

        let lines: Vec<Line> = self.feedback().iter().map(|l| Line::from(l.as_str())).collect();
        let feedback_style = match view.status {
            RoundStatus::Won => Style::default().fg(Color::Green),
            RoundStatus::Lost => Style::default().fg(Color::Red),
            RoundStatus::InProgress => Style::default(),
        };
        f.render_widget(
            Paragraph::new(lines)
                .style(feedback_style)
                .wrap(Wrap { trim: true })
                .block(Block::default().title(" FEEDBACK ").borders(Borders::ALL)),
            body,
        );

        let spans: Vec<Span> = view
            .history
            .iter()
            .zip(&view.proximity)
            .flat_map(|(guess, &tier)| [Span::styled(guess.to_string(), tier_style(tier)), Span::raw(" ")])
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(spans))
                .block(Block::default().title(" PREVIOUS GUESSES ").borders(Borders::ALL)),
            guesses,
        );

        let keys = if self.is_finished() {
            "[Enter/N] New Game  [Esc] Quit"
        } else {
            "[0-9] Type  [Backspace] Erase  [Enter] Guess  [Esc] Quit"
        };
        f.render_widget(Paragraph::new(keys).alignment(Alignment::Center), help);
    }
}
