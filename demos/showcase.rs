//! # Input Field Showcase
//!
//! Demonstrates every `InputField` configuration on one screen:
//! - Controlled fields whose values live in the parent model
//! - Disabled, invalid, loading, password, and numeric fields
//! - Switching the variant and theme of every field at once
//! - Focus cycling with Tab / Shift-Tab
//!
//! Run with: `cargo run --example showcase`

use matcha::crossterm::event::{KeyCode, KeyModifiers};
use matcha::ratatui::layout::{Constraint, Layout};
use matcha::ratatui::style::{Modifier, Style};
use matcha::ratatui::text::{Line, Span};
use matcha::ratatui::widgets::Paragraph;
use matcha::ratatui::Frame;
use matcha::widgets::input_field::{self, InputField, InputType};
use matcha::widgets::theme::{FieldSize, Theme, Variant};
use matcha::{Command, Component, Model, ProgramError, TerminalEvent};

/// One screen of input fields, all driven by the parent model.
struct Showcase {
    fields: Vec<InputField>,
    values: Vec<String>,
    focused: usize,
    variant: Variant,
    theme: Theme,
}

// Each field's messages are wrapped with its index so the parent can route
// replies back to the right child.
#[derive(Debug)]
enum Msg {
    Field(usize, input_field::Message),
    FocusNext,
    FocusPrev,
    SelectVariant(Variant),
    ToggleTheme,
    Tick,
    Quit,
}

fn build_fields(variant: Variant, theme: Theme) -> (Vec<InputField>, Vec<String>) {
    let values = vec![
        "Hello World".to_string(),
        "Some disabled text".to_string(),
        String::new(),
        "secret123".to_string(),
        String::new(),
        String::new(),
        "123".to_string(),
    ];

    let mut fields = vec![
        InputField::new("Enter your name")
            .with_label("Your Name")
            .with_helper_text("This is a helper text.")
            .controlled(values[0].clone()),
        InputField::new("")
            .with_label("Disabled")
            .with_disabled(true)
            .controlled(values[1].clone()),
        InputField::new("you@example.com")
            .with_label("Email")
            .with_input_type(InputType::Email)
            .with_size(FieldSize::Sm)
            .with_invalid(true)
            .with_error_message("Please enter a valid email address.")
            .with_helper_text("We never share your email.")
            .controlled(values[2].clone()),
        InputField::new("Enter password")
            .with_label("Password")
            .with_input_type(InputType::Password)
            .with_size(FieldSize::Lg)
            .with_password_toggle()
            .controlled(values[3].clone()),
        InputField::new("Type, then press Ctrl-U")
            .with_label("Clearable")
            .with_clear_button()
            .controlled(values[4].clone()),
        InputField::new("Fetching suggestions")
            .with_label("Loading")
            .with_loading(true)
            .controlled(values[5].clone()),
        InputField::new("0")
            .with_label("Amount")
            .with_input_type(InputType::Number)
            .controlled(values[6].clone()),
    ];

    for field in &mut fields {
        field.set_variant(variant);
        field.set_theme(theme);
    }
    fields[0].focus();

    (fields, values)
}

impl Showcase {
    fn focusable(&self, index: usize) -> bool {
        // Skip the disabled field when cycling focus.
        index != 1
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields.len();
        self.fields[self.focused].blur();
        let mut next = self.focused;
        for _ in 0..count {
            next = if forward {
                (next + 1) % count
            } else {
                (next + count - 1) % count
            };
            if self.focusable(next) {
                break;
            }
        }
        self.focused = next;
        self.fields[self.focused].focus();
    }
}

impl Model for Showcase {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let variant = Variant::Outlined;
        let theme = Theme::Light;
        let (fields, values) = build_fields(variant, theme);
        (
            Showcase {
                fields,
                values,
                focused: 0,
                variant,
                theme,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // A controlled field reported an edit: accept it by storing the
            // value and pushing it back into the field's display.
            Msg::Field(i, input_field::Message::Changed(value)) => {
                self.values[i] = value;
                self.fields[i].set_value(&self.values[i]);
                Command::none()
            }
            // Delegate to the child and lift its commands back into Msg.
            Msg::Field(i, m) => self.fields[i].update(m).map(move |fm| Msg::Field(i, fm)),
            Msg::FocusNext => {
                self.move_focus(true);
                Command::none()
            }
            Msg::FocusPrev => {
                self.move_focus(false);
                Command::none()
            }
            Msg::SelectVariant(variant) => {
                self.variant = variant;
                for field in &mut self.fields {
                    field.set_variant(variant);
                }
                Command::none()
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                for field in &mut self.fields {
                    field.set_theme(self.theme);
                }
                Command::none()
            }
            // Fan the animation pulse out to every field; only loading
            // fields advance their spinner.
            Msg::Tick => {
                let cmds: Vec<_> = self
                    .fields
                    .iter_mut()
                    .enumerate()
                    .map(|(i, field)| {
                        field
                            .update(input_field::Message::Tick)
                            .map(move |fm| Msg::Field(i, fm))
                    })
                    .collect();
                Command::batch(cmds)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let header_height = 2;
        let mut constraints = vec![Constraint::Length(header_height)];
        for field in &self.fields {
            constraints.push(Constraint::Length(field.height() + 1));
        }
        constraints.push(Constraint::Fill(1));
        let areas = Layout::vertical(constraints).split(frame.area());

        let variant_name = match self.variant {
            Variant::Filled => "Filled",
            Variant::Outlined => "Outlined",
            Variant::Ghost => "Ghost",
        };
        let theme_name = match self.theme {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        };
        let header = vec![
            Line::from(vec![
                Span::styled("Input Field Showcase  ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("variant: {variant_name}  theme: {theme_name}")),
            ]),
            Line::from(Span::raw(
                "Tab/Shift-Tab focus · F1/F2/F3 variant · Ctrl-D theme · Ctrl-R reveal · Ctrl-U clear · Esc quit",
            )),
        ];
        frame.render_widget(Paragraph::new(header), areas[0]);

        for (field, area) in self.fields.iter().zip(areas.iter().skip(1)) {
            field.view(frame, *area);
        }
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Tab, _) => Some(Msg::FocusNext),
                (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                (KeyCode::F(1), _) => Some(Msg::SelectVariant(Variant::Filled)),
                (KeyCode::F(2), _) => Some(Msg::SelectVariant(Variant::Outlined)),
                (KeyCode::F(3), _) => Some(Msg::SelectVariant(Variant::Ghost)),
                (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(Msg::ToggleTheme),
                _ => Some(Msg::Field(
                    self.focused,
                    input_field::Message::KeyPress(key),
                )),
            },
            TerminalEvent::Paste(text) => {
                Some(Msg::Field(self.focused, input_field::Message::Paste(text)))
            }
            TerminalEvent::Tick => Some(Msg::Tick),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ProgramError> {
    matcha::run::<Showcase>(()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcha::crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};
    use matcha::testing::TestProgram;

    fn key(code: KeyCode) -> TerminalEvent {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn variant_keys_apply_to_every_field() {
        let mut prog = TestProgram::<Showcase>::new(());
        prog.send_event(key(KeyCode::F(1)));
        assert!(prog
            .model()
            .fields
            .iter()
            .all(|f| f.variant() == Variant::Filled));

        prog.send_event(key(KeyCode::F(3)));
        assert!(prog
            .model()
            .fields
            .iter()
            .all(|f| f.variant() == Variant::Ghost));
    }

    #[test]
    fn theme_toggle_rethemes_every_field() {
        let mut prog = TestProgram::<Showcase>::new(());
        prog.send_event(key_with(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(prog.model().theme, Theme::Dark);
        assert!(prog.model().fields.iter().all(|f| f.theme() == Theme::Dark));

        prog.send_event(key_with(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert!(prog.model().fields.iter().all(|f| f.theme() == Theme::Light));
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut prog = TestProgram::<Showcase>::new(());
        prog.send_event(key(KeyCode::Char('!')));
        prog.drain_messages();
        assert_eq!(prog.model().values[0], "Hello World!");
        assert_eq!(prog.model().fields[0].value(), "Hello World!");
    }

    #[test]
    fn tab_skips_the_disabled_field() {
        let mut prog = TestProgram::<Showcase>::new(());
        prog.send_event(key(KeyCode::Tab));
        assert_eq!(prog.model().focused, 2);
        assert!(prog.model().fields[2].focused());

        prog.send_event(key(KeyCode::BackTab));
        assert_eq!(prog.model().focused, 0);
    }

    #[test]
    fn clear_binding_round_trips_through_the_parent() {
        let mut prog = TestProgram::<Showcase>::new(());
        // Tab past the email and password fields to the clearable one.
        for _ in 0..3 {
            prog.send_event(key(KeyCode::Tab));
        }
        assert_eq!(prog.model().focused, 4);

        prog.send_event(key(KeyCode::Char('h')));
        prog.send_event(key(KeyCode::Char('i')));
        prog.drain_messages();
        assert_eq!(prog.model().values[4], "hi");

        prog.send_event(key_with(KeyCode::Char('u'), KeyModifiers::CONTROL));
        prog.drain_messages();
        assert_eq!(prog.model().values[4], "");
        assert_eq!(prog.model().fields[4].value(), "");
    }

    #[test]
    fn tick_animates_the_loading_spinner() {
        let mut prog = TestProgram::<Showcase>::new(());
        prog.send_event(TerminalEvent::Tick);
        prog.drain_messages();
        // The loading field uses the line frame set; one tick lands on "/".
        // Scope the assertion to that field's row (found by its placeholder).
        let output = prog.render_string(60, 48);
        let row = output
            .lines()
            .find(|line| line.contains("Fetching suggestions"))
            .unwrap();
        assert!(row.contains('/'));
    }

    #[test]
    fn header_shows_current_variant_and_theme() {
        let mut prog = TestProgram::<Showcase>::new(());
        let output = prog.render_string(80, 48);
        assert!(output.contains("variant: Outlined"));
        assert!(output.contains("theme: Light"));

        prog.send_event(key(KeyCode::F(1)));
        let output = prog.render_string(80, 48);
        assert!(output.contains("variant: Filled"));
    }
}
