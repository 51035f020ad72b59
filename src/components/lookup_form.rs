use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city (e.g. Mumbai)";

const INPUT_BG: Color = Color::Rgb(50, 50, 60);
const BUTTON_WIDTH: u16 = 14;

/// City input plus the search button
pub struct LookupForm {
    input: TextInput,
    had_text: bool,
}

pub struct LookupFormProps<'a> {
    pub query: &'a str,
    pub is_loading: bool,
    /// A result, an error or typed text that reset would clear
    pub has_content: bool,
    pub is_focused: bool,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            had_text: false,
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the input's cursor state when the query is cleared externally.
    fn sync(&mut self, query: &str) {
        if query.is_empty() && self.had_text {
            self.input = TextInput::new();
        }
        self.had_text = !query.is_empty();
    }

    pub fn button_label(is_loading: bool) -> &'static str {
        if is_loading { "Loading..." } else { "Search" }
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(INPUT_BG),
            fg: None,
        },
        placeholder_style: Some(Style::default().fg(Color::DarkGray)),
        cursor_style: None,
    }
}

fn submit_lookup(_: String) -> Action {
    Action::LookupSubmit
}

fn ui_render(_: usize) -> Action {
    Action::Render
}

impl Component<Action> for LookupForm {
    type Props<'a> = LookupFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        self.sync(props.query);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Esc => {
                if props.has_content {
                    return vec![Action::LookupReset];
                }
                return vec![Action::Quit];
            }
            // The button is disabled while a request is in flight
            KeyCode::Enter => {
                if props.is_loading {
                    return Vec::new();
                }
                return vec![Action::LookupSubmit];
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: Action::QueryChange,
            on_submit: submit_lookup,
            on_cursor_move: Some(ui_render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.query);

        let chunks = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::QueryChange,
            on_submit: submit_lookup,
            on_cursor_move: Some(ui_render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button_style = if props.is_loading {
            Style::default().fg(Color::DarkGray).bg(INPUT_BG)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        let button = Line::from(Self::button_label(props.is_loading)).centered();
        frame.render_widget(Paragraph::new(button).style(button_style), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn events(form: &mut LookupForm, code: KeyCode, props: LookupFormProps<'_>) -> Vec<Action> {
        form.handle_event(&EventKind::Key(press(code)), props)
            .into_iter()
            .collect()
    }

    fn props(query: &str, is_loading: bool, has_content: bool) -> LookupFormProps<'_> {
        LookupFormProps {
            query,
            is_loading,
            has_content,
            is_focused: true,
        }
    }

    #[test]
    fn test_enter_submits() {
        let mut form = LookupForm::new();
        let actions = events(&mut form, KeyCode::Enter, props("London", false, true));
        actions.assert_count(1);
        actions.assert_first(Action::LookupSubmit);
    }

    #[test]
    fn test_enter_ignored_while_loading() {
        let mut form = LookupForm::new();
        let actions = events(&mut form, KeyCode::Enter, props("London", true, true));
        actions.assert_empty();
    }

    #[test]
    fn test_esc_resets_or_quits() {
        let mut form = LookupForm::new();

        let actions = events(&mut form, KeyCode::Esc, props("Paris", false, true));
        actions.assert_first(Action::LookupReset);

        let actions = events(&mut form, KeyCode::Esc, props("", false, false));
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut form = LookupForm::new();
        let event = EventKind::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let actions: Vec<_> = form
            .handle_event(&event, props("Paris", false, true))
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut form = LookupForm::new();
        let actions: Vec<_> = form
            .handle_event(
                &EventKind::Key(press(KeyCode::Enter)),
                LookupFormProps {
                    is_focused: false,
                    ..props("London", false, true)
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_button_label() {
        assert_eq!(LookupForm::button_label(false), "Search");
        assert_eq!(LookupForm::button_label(true), "Loading...");
    }
}
