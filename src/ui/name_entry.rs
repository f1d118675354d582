//! The opening screen: name your hunter.

use crate::core::constants::PLAYER_NAME_MAX_LENGTH;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Checks a candidate hunter name.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if trimmed.chars().count() > PLAYER_NAME_MAX_LENGTH {
        return Err(format!(
            "Name must be at most {PLAYER_NAME_MAX_LENGTH} characters"
        ));
    }
    let allowed =
        |c: char| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_';
    if !trimmed.chars().all(allowed) {
        return Err("Only letters, numbers, spaces, hyphens, and underscores".to_string());
    }
    Ok(())
}

/// Text-entry state for the opening screen. Editing is append-only;
/// backspace trims from the end.
pub struct NameEntryScreen {
    pub name_input: String,
    pub validation_error: Option<String>,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            validation_error: None,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.name_input.push(c);
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
        self.validate();
    }

    fn validate(&mut self) {
        self.validation_error = validate_name(&self.name_input).err();
    }

    pub fn is_valid(&self) -> bool {
        !self.name_input.trim().is_empty() && self.validation_error.is_none()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Rules
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("You have been chosen by the System.")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let label = Paragraph::new("Hunter Name:");
        frame.render_widget(label, chunks[2]);

        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 1,
        };
        let input_widget = Paragraph::new(format!("{}_", self.name_input))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        frame.render_widget(input_widget, input_area);

        let rules = vec![
            Line::from(format!("- 1-{PLAYER_NAME_MAX_LENGTH} characters")),
            Line::from("- Letters, numbers, spaces, hyphens, underscores"),
        ];
        let rules_widget = Paragraph::new(rules).style(Style::default().fg(Color::Gray));
        frame.render_widget(rules_widget, chunks[4]);

        let validation_text = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("x {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if !self.name_input.trim().is_empty() {
            Line::from(Span::styled(
                "Name accepted",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(validation_text), chunks[5]);

        let controls = Paragraph::new("[Enter] Begin    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(controls, chunks[7]);
    }
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}
