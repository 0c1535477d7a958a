use legalens_core::Tone;
use ratatui::style::{Color, Modifier, Style};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Neutral => Color::DarkGray,
    }
}

pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn section() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn link() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}
