use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

pub const TITLE: &str = "Weatherly";
pub const SUBTITLE: &str = "Fast, simple weather lookup";

const FILL_STOPS: usize = 8;
const FILL_ANGLE: f32 = 5.0;

pub struct TitleHeader;

pub struct TitleHeaderProps {
    /// Tints the title; gray when nothing is displayed
    pub temperature: Option<i32>,
    pub is_animating: bool,
    pub tick_count: u32,
}

fn gradient_colors(temp: Option<i32>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        Some(t) if t < 15 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

/// Linear fill whose colors drift along the title as `phase` goes 0..1.
fn title_fill(colors: (ArtColor, ArtColor), phase: f32) -> Fill {
    let stops = (0..=FILL_STOPS)
        .map(|i| {
            let pos = i as f32 / FILL_STOPS as f32;
            let color = colors.0.interpolate(colors.1, sweep(pos - phase));
            artbox::ColorStop::new(pos, color)
        })
        .collect();
    Fill::Linear(LinearGradient::new(FILL_ANGLE, stops))
}

/// Triangle wave over one period: 0 at the ends, 1 in the middle.
fn sweep(position: f32) -> f32 {
    let t = position.rem_euclid(1.0);
    1.0 - (2.0 * t - 1.0).abs()
}

fn loading_phase(tick_count: u32) -> f32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % cycle) as f32 / cycle as f32
}

impl Component<Action> for TitleHeader {
    type Props<'a> = TitleHeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet title
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let phase = if props.is_animating {
            loading_phase(props.tick_count)
        } else {
            0.0
        };
        let fill = title_fill(gradient_colors(props.temperature), phase);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);
        frame.render_widget(ArtBox::new(&renderer, TITLE), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_phase_wraps() {
        assert_eq!(loading_phase(0), 0.0);
        assert_eq!(loading_phase(LOADING_ANIM_CYCLE_TICKS), 0.0);
        assert!(loading_phase(LOADING_ANIM_CYCLE_TICKS / 2) > 0.49);
    }

    #[test]
    fn test_sweep_is_periodic_triangle() {
        assert_eq!(sweep(0.0), 0.0);
        assert_eq!(sweep(0.5), 1.0);
        assert_eq!(sweep(0.25), 0.5);
        assert_eq!(sweep(1.25), 0.5);
        assert_eq!(sweep(-0.25), 0.5);
    }

    #[test]
    fn test_render_shows_subtitle() {
        use tui_dispatch::testing::RenderHarness;

        let mut render = RenderHarness::new(60, 8);
        let mut header = TitleHeader;

        let output = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                TitleHeaderProps {
                    temperature: Some(15),
                    is_animating: false,
                    tick_count: 0,
                },
            );
        });

        assert!(output.contains(SUBTITLE));
    }
}
