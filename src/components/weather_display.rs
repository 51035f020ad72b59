use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, LookupForm, LookupFormProps, TitleHeader, TitleHeaderProps, WeatherCard,
    WeatherCardProps,
};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const FOOTER: &str = "Data from OpenWeatherMap";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole lookup screen
#[derive(Default)]
pub struct WeatherDisplay {
    form: LookupForm,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> LookupFormProps<'a> {
        LookupFormProps {
            query: &state.query,
            is_loading: state.is_loading(),
            has_content: state.has_content(),
            is_focused,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let form_props = Self::form_props(props.state, props.is_focused);
        self.form
            .handle_event(event, form_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Max(8),    // Title + subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Form
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error banner
            Constraint::Min(3),    // Result card or placeholder
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut header = TitleHeader;
        header.render(
            frame,
            chunks[0],
            TitleHeaderProps {
                temperature: state.weather().and_then(|w| w.temp),
                is_animating: state.loading_anim_active(),
                tick_count: state.tick_count,
            },
        );

        self.form
            .render(frame, chunks[2], Self::form_props(state, props.is_focused));

        if let Some(error) = state.error_message() {
            let banner = Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled(error.to_string(), Style::default().fg(Color::Red).bold()),
            ])
            .centered();
            frame.render_widget(Paragraph::new(banner), chunks[4]);
        }

        let mut card = WeatherCard;
        card.render(frame, chunks[5], WeatherCardProps { state });

        let footer = Line::from(Span::styled(FOOTER, Style::default().fg(Color::DarkGray)))
            .centered();
        frame.render_widget(Paragraph::new(footer), chunks[6]);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[7],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "clear"),
                    StatusBarHint::new("ctrl+c", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
