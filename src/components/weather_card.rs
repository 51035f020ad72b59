use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use tui_dispatch::DataResource;

use super::Component;
use crate::action::Action;
use crate::icons;
use crate::state::{AppState, WeatherResult};

pub const PLACEHOLDER_HINT: &str = "Type a city and press Search to see current weather.";

pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match CardView::from_state(props.state) {
            CardView::Ready(weather) => {
                render_ready(frame, area, weather, props.state.icon_url());
            }
            CardView::Loading => render_placeholder(frame, area, "Loading..."),
            CardView::Prompt => render_placeholder(frame, area, PLACEHOLDER_HINT),
        }
    }
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    weather: &WeatherResult,
    icon_url: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    // Left: glyph, temperature, description
    let mut left = vec![
        Line::from(icons::weather_emoji(weather.icon.as_deref())),
        Line::default(),
    ];
    if let Some(temp) = weather.temp {
        left.push(Line::from(Span::styled(
            format!("{temp}°C"),
            Style::default().fg(temperature_color(temp)).bold(),
        )));
    }
    if let Some(description) = &weather.description {
        left.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(Paragraph::new(left), padded(columns[0]));

    // Right: place and details; missing fields are omitted
    let mut right = vec![Line::from(Span::styled(
        weather.place(),
        Style::default().fg(Color::White).bold(),
    ))];
    if let Some(feels_like) = weather.feels_like {
        right.push(detail("Feels like", format!("{feels_like}°C")));
    }
    if let Some(humidity) = weather.humidity {
        right.push(detail("Humidity", format!("{humidity}%")));
    }
    if let Some(wind) = weather.wind_speed {
        right.push(detail("Wind", format!("{wind} m/s")));
    }
    if let Some(url) = icon_url {
        right.push(Line::default());
        right.push(Line::from(Span::styled(
            url,
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(right), padded(columns[1]));
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let msg = Line::from(vec![Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

// ============================================================================
// Helpers
// ============================================================================

enum CardView<'a> {
    Ready(&'a WeatherResult),
    Loading,
    Prompt,
}

impl<'a> CardView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.lookup {
            DataResource::Loaded(weather) => CardView::Ready(weather),
            DataResource::Loading => CardView::Loading,
            // The error banner sits above the prompt
            DataResource::Failed(_) | DataResource::Empty => CardView::Prompt,
        }
    }
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ])
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn temperature_color(celsius: i32) -> Color {
    match celsius {
        t if t < 0 => Color::Rgb(150, 200, 255),
        t if t < 15 => Color::Rgb(100, 180, 255),
        t if t < 25 => Color::Rgb(100, 200, 150),
        t if t < 35 => Color::Rgb(255, 180, 80),
        _ => Color::Rgb(255, 60, 60),
    }
}
