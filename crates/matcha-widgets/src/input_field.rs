//! Labeled single-line form field with helper/error text, a loading spinner,
//! a clear action, a password-visibility toggle, and variant/size styling.
//!
//! The field can own its text (uncontrolled) or mirror a value owned by the
//! caller (controlled). The mode is chosen once at construction and cannot
//! change afterwards; see [`InputField::controlled`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use matcha_core::command::Command;
use matcha_core::component::Component;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::spinner::{frames, Spinner};
use crate::theme::{palette, size_metrics, variant_style, FieldSize, Theme, Variant};

/// Character used to mask password input.
pub const MASK_CHAR: char = '•';

const CLEAR_GLYPH: &str = "✕";
const GLYPH_MASKED: &str = "◎";
const GLYPH_REVEALED: &str = "◉";

/// Input interpretation for typed characters.
///
/// Only [`Password`](InputType::Password) changes how text is displayed;
/// [`Number`](InputType::Number) restricts which characters the field accepts,
/// the way a numeric input rejects letters at the keystroke level. The field
/// performs no validation of its own in any mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    /// Plain text (default).
    #[default]
    Text,
    /// Masked text with an optional visibility toggle.
    Password,
    /// Email address; treated as plain text by the field.
    Email,
    /// Numeric text; non-numeric keystrokes are ignored.
    Number,
}

/// Who owns the field's text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    /// The caller owns the value; the field displays it verbatim and reports
    /// prospective edits through [`Message::Changed`].
    Controlled(String),
    /// The field owns and mutates its own value.
    Uncontrolled(String),
}

/// An editing operation applied to the field's text.
#[derive(Debug, Clone)]
enum Edit {
    Insert(char),
    DeleteBackward,
    DeleteForward,
    Paste(String),
    Clear,
}

/// Apply an edit to `text` at `cursor` (a char index). Returns the new text
/// and cursor, or `None` when the edit changes nothing.
fn edited(text: &str, cursor: usize, edit: &Edit) -> Option<(String, usize)> {
    let mut chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    match edit {
        Edit::Insert(c) => {
            chars.insert(cursor, *c);
            Some((chars.into_iter().collect(), cursor + 1))
        }
        Edit::DeleteBackward => {
            if cursor == 0 {
                return None;
            }
            chars.remove(cursor - 1);
            Some((chars.into_iter().collect(), cursor - 1))
        }
        Edit::DeleteForward => {
            if cursor >= chars.len() {
                return None;
            }
            chars.remove(cursor);
            Some((chars.into_iter().collect(), cursor))
        }
        Edit::Paste(inserted) => {
            if inserted.is_empty() {
                return None;
            }
            let mut pos = cursor;
            for c in inserted.chars() {
                chars.insert(pos, c);
                pos += 1;
            }
            Some((chars.into_iter().collect(), pos))
        }
        Edit::Clear => {
            if chars.is_empty() {
                return None;
            }
            Some((String::new(), 0))
        }
    }
}

/// Messages for the input field component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text at the cursor position.
    Paste(String),
    /// Reset the text to empty (same notification path as ordinary edits).
    Clear,
    /// Flip the password-visibility toggle.
    ToggleVisibility,
    /// Animation pulse; advances the loading spinner.
    Tick,
    /// Emitted when an edit produces a new value.
    ///
    /// In uncontrolled mode the field has already applied the edit; in
    /// controlled mode this carries the prospective text and the caller
    /// decides whether to accept it via [`InputField::set_value`].
    Changed(String),
}

/// A labeled single-line input field.
///
/// # Example
///
/// ```ignore
/// let mut email = InputField::new("you@example.com")
///     .with_label("Email")
///     .with_helper_text("We never share it.")
///     .with_input_type(InputType::Email)
///     .with_variant(Variant::Outlined)
///     .with_size(FieldSize::Md)
///     .with_clear_button();
///
/// email.focus();
///
/// // In your parent's update method, forward messages:
/// // let cmd = email.update(msg);
///
/// // In your parent's view method, delegate rendering:
/// // email.view(frame, area);
/// ```
pub struct InputField {
    binding: Binding,
    cursor: usize,
    focus: bool,
    revealed: bool,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    input_type: InputType,
    variant: Variant,
    size: FieldSize,
    theme: Theme,
    disabled: bool,
    invalid: bool,
    loading: bool,
    show_clear_button: bool,
    show_password_toggle: bool,
    spinner: Spinner,
}

impl InputField {
    /// Create a new uncontrolled field with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            binding: Binding::Uncontrolled(String::new()),
            cursor: 0,
            focus: false,
            revealed: false,
            label: None,
            placeholder: placeholder.into(),
            helper_text: None,
            error_message: None,
            input_type: InputType::default(),
            variant: Variant::default(),
            size: FieldSize::default(),
            theme: Theme::default(),
            disabled: false,
            invalid: false,
            loading: false,
            show_clear_button: false,
            show_password_toggle: false,
            spinner: Spinner::new().with_frames(frames::LINE),
        }
    }

    /// Put the field in controlled mode with the given externally owned value.
    ///
    /// A controlled field is a pure display proxy: the rendered text always
    /// equals the value the caller last supplied. Edits do not touch the
    /// display; they are reported through [`Message::Changed`] with the
    /// prospective text, and the caller accepts one by pushing it back with
    /// [`set_value`](Self::set_value). Switching between controlled and
    /// uncontrolled mid-lifetime is not supported.
    pub fn controlled(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.cursor = value.chars().count();
        self.binding = Binding::Controlled(value);
        self
    }

    /// Set the initial value of an uncontrolled field (builder variant).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.cursor = value.chars().count();
        self.binding = Binding::Uncontrolled(value);
        self
    }

    /// Set the label displayed above the field.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the helper text displayed below the field.
    ///
    /// Suppressed whenever an error message is present.
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message displayed below the field.
    ///
    /// Inert display data; the field performs no validation itself.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set the input type (text, password, email, number).
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the visual variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size preset.
    pub fn with_size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Disable the field. A disabled field ignores all input and renders dim.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the field invalid. Draws an error-colored border on every variant.
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Show the loading spinner. While loading, the clear action and the
    /// password toggle are unavailable.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable the clear action (shown only while there is text to clear).
    pub fn with_clear_button(mut self) -> Self {
        self.show_clear_button = true;
        self
    }

    /// Enable the password-visibility toggle (effective only for
    /// [`InputType::Password`]).
    pub fn with_password_toggle(mut self) -> Self {
        self.show_password_toggle = true;
        self
    }

    /// Give this field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        match &self.binding {
            Binding::Controlled(s) | Binding::Uncontrolled(s) => s,
        }
    }

    /// Set the value and move the cursor to the end.
    ///
    /// For a controlled field this is how the caller supplies the value to
    /// display, typically in response to a [`Message::Changed`] notification.
    pub fn set_value(&mut self, value: &str) {
        let len = value.chars().count();
        match &mut self.binding {
            Binding::Controlled(s) | Binding::Uncontrolled(s) => {
                s.clear();
                s.push_str(value);
            }
        }
        self.cursor = len;
    }

    /// Whether this field is in controlled mode.
    pub fn is_controlled(&self) -> bool {
        matches!(self.binding, Binding::Controlled(_))
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value().chars().count()
    }

    /// Current cursor position (char index).
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// The input type this field was configured with.
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// The current visual variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change the visual variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Change the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Start or stop the loading spinner.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if !loading {
            self.spinner.reset();
        }
    }

    /// Whether a password is currently revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the clear action is currently available: it must be enabled,
    /// there must be text, and the field must be neither disabled nor loading.
    pub fn clear_visible(&self) -> bool {
        self.show_clear_button && !self.is_empty() && !self.disabled && !self.loading
    }

    /// Whether the password toggle is currently available: it must be enabled,
    /// the input type must be password, and the field must be neither disabled
    /// nor loading.
    pub fn toggle_visible(&self) -> bool {
        self.show_password_toggle
            && self.input_type == InputType::Password
            && !self.disabled
            && !self.loading
    }

    /// The text as displayed: masked for an unrevealed password field,
    /// verbatim otherwise.
    pub fn display_value(&self) -> String {
        if self.input_type == InputType::Password && !self.revealed {
            MASK_CHAR.to_string().repeat(self.len())
        } else {
            self.value().to_string()
        }
    }

    /// Total rows this field needs (label + body + helper/error line).
    ///
    /// Useful for sizing a `Constraint::Length` in the parent layout. The
    /// body grows when a border is drawn, which happens for the outlined
    /// variant and for any invalid field.
    pub fn height(&self) -> u16 {
        let metrics = size_metrics(self.size);
        let bordered = variant_style(self.variant, self.theme).bordered || self.invalid;
        let body = 1 + 2 * metrics.pad_y + if bordered { 2 } else { 0 };
        u16::from(self.label.is_some())
            + body
            + u16::from(self.error_message.is_some() || self.helper_text.is_some())
    }

    /// Whether the field accepts this character, per its input type.
    fn accepts(&self, c: char) -> bool {
        match self.input_type {
            InputType::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+'),
            _ => !c.is_control(),
        }
    }

    /// Route an edit through the value binding.
    ///
    /// Uncontrolled: apply it and notify. Controlled: notify with the
    /// prospective text and leave the displayed value untouched.
    fn apply_edit(&mut self, edit: Edit) -> Command<Message> {
        let Some((next, cursor)) = edited(self.value(), self.cursor, &edit) else {
            return Command::none();
        };
        if let Binding::Uncontrolled(s) = &mut self.binding {
            *s = next.clone();
            self.cursor = cursor;
        }
        Command::message(Message::Changed(next))
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.accepts(c) {
                    self.apply_edit(Edit::Insert(c))
                } else {
                    Command::none()
                }
            }
            (KeyCode::Backspace, KeyModifiers::NONE) => self.apply_edit(Edit::DeleteBackward),
            (KeyCode::Delete, KeyModifiers::NONE) => self.apply_edit(Edit::DeleteForward),
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.move_cursor_left();
                Command::none()
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.move_cursor_right();
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.cursor = self.len();
                Command::none()
            }
            (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.len();
                Command::none()
            }
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => {
                if self.clear_visible() {
                    self.apply_edit(Edit::Clear)
                } else {
                    Command::none()
                }
            }
            (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => {
                if self.toggle_visible() {
                    self.revealed = !self.revealed;
                }
                Command::none()
            }
            _ => Command::none(),
        }
    }

    /// Clip a string to a display-cell budget.
    fn clip_to_width(s: &str, max: usize) -> String {
        let mut out = String::new();
        let mut used = 0;
        for c in s.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > max {
                break;
            }
            out.push(c);
            used += w;
        }
        out
    }

    /// Build the right-aligned indicator cluster: spinner, clear, toggle.
    fn indicators(&self) -> Vec<Span<'static>> {
        let pal = palette(self.theme);
        let mut cluster: Vec<Span> = Vec::new();
        if self.loading {
            cluster.push(Span::styled(
                self.spinner.current(),
                Style::default().fg(pal.accent),
            ));
        }
        if self.clear_visible() {
            cluster.push(Span::styled(CLEAR_GLYPH, pal.helper));
        }
        if self.toggle_visible() {
            let glyph = if self.revealed {
                GLYPH_REVEALED
            } else {
                GLYPH_MASKED
            };
            cluster.push(Span::styled(glyph, pal.helper));
        }
        cluster
    }
}

impl Component for InputField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focus || self.disabled {
                    return Command::none();
                }
                self.handle_key(key)
            }
            Message::Paste(text) => {
                if !self.focus || self.disabled {
                    return Command::none();
                }
                let filtered: String = text.chars().filter(|c| self.accepts(*c)).collect();
                self.apply_edit(Edit::Paste(filtered))
            }
            Message::Clear => {
                if self.clear_visible() {
                    self.apply_edit(Edit::Clear)
                } else {
                    Command::none()
                }
            }
            Message::ToggleVisibility => {
                if self.toggle_visible() {
                    self.revealed = !self.revealed;
                }
                Command::none()
            }
            Message::Tick => {
                if self.loading {
                    self.spinner.advance();
                }
                Command::none()
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let pal = palette(self.theme);
        let vstyle = variant_style(self.variant, self.theme);
        let metrics = size_metrics(self.size);
        let bordered = vstyle.bordered || self.invalid;

        let label_h = u16::from(self.label.is_some());
        let footer_h = u16::from(self.error_message.is_some() || self.helper_text.is_some());
        let [label_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(label_h),
            Constraint::Fill(1),
            Constraint::Length(footer_h),
        ])
        .areas(area);

        if let Some(ref label) = self.label {
            let style = if self.disabled {
                pal.label.add_modifier(Modifier::DIM)
            } else {
                pal.label
            };
            frame.render_widget(Paragraph::new(label.as_str()).style(style), label_area);
        }

        let mut base = vstyle.base;
        if self.disabled {
            base = base.add_modifier(Modifier::DIM);
        }

        let mut block = Block::default().style(base).padding(Padding::new(
            metrics.pad_x,
            metrics.pad_x,
            metrics.pad_y,
            metrics.pad_y,
        ));
        if bordered {
            let border_style = if self.invalid {
                pal.error
            } else if self.focus {
                Style::default().fg(pal.accent)
            } else {
                vstyle.border
            };
            block = block.borders(Borders::ALL).border_style(border_style);
        }
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let cluster = self.indicators();
        let cluster_width: usize = cluster
            .iter()
            .map(|span| span.content.as_ref().width())
            .sum::<usize>()
            + cluster.len().saturating_sub(1)
            + usize::from(!cluster.is_empty());
        let available = (inner.width as usize).saturating_sub(cluster_width);

        let display = self.display_value();
        let show_cursor = self.focus && !self.disabled;

        let mut spans: Vec<Span> = Vec::new();
        let mut used = 0usize;

        if display.is_empty() {
            if show_cursor {
                spans.push(Span::styled(" ", base.add_modifier(Modifier::REVERSED)));
                used += 1;
            }
            let clipped =
                Self::clip_to_width(&self.placeholder, available.saturating_sub(used));
            used += clipped.width();
            spans.push(Span::styled(clipped, pal.placeholder));
        } else {
            // Reserve a cell for the cursor when it sits past the last char.
            let budget = if show_cursor && self.cursor >= self.len() {
                available.saturating_sub(1)
            } else {
                available
            };
            let budget = budget.max(1);

            // Window the text so the cursor stays visible.
            let chars: Vec<char> = display.chars().collect();
            let offset = if show_cursor && self.cursor >= budget {
                self.cursor + 1 - budget
            } else {
                0
            };
            let visible_end = (offset + budget).min(chars.len());
            let visible: String = chars[offset..visible_end.max(offset)].iter().collect();

            if show_cursor {
                let cursor_in_visible = self.cursor.saturating_sub(offset);
                let before: String = visible.chars().take(cursor_in_visible).collect();
                let cursor_char = visible.chars().nth(cursor_in_visible);
                let after: String = visible.chars().skip(cursor_in_visible + 1).collect();

                if !before.is_empty() {
                    used += before.width();
                    spans.push(Span::styled(before, base));
                }
                match cursor_char {
                    Some(c) => {
                        let cell = c.to_string();
                        used += cell.width();
                        spans.push(Span::styled(cell, base.add_modifier(Modifier::REVERSED)));
                    }
                    None => {
                        used += 1;
                        spans.push(Span::styled(" ", base.add_modifier(Modifier::REVERSED)));
                    }
                }
                if !after.is_empty() {
                    used += after.width();
                    spans.push(Span::styled(after, base));
                }
            } else {
                used += visible.width();
                spans.push(Span::styled(visible, base));
            }
        }

        if !cluster.is_empty() {
            let pad = (inner.width as usize)
                .saturating_sub(used)
                .saturating_sub(cluster_width - 1);
            spans.push(Span::raw(" ".repeat(pad.max(1))));
            for (i, span) in cluster.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(span);
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), inner);

        if footer_h > 0 {
            // Error always wins over helper text.
            let (text, style) = if let Some(error) = &self.error_message {
                (error.as_str(), pal.error)
            } else if let Some(helper) = &self.helper_text {
                (helper.as_str(), pal.helper)
            } else {
                return;
            };
            let style = if self.disabled {
                style.add_modifier(Modifier::DIM)
            } else {
                style
            };
            frame.render_widget(Paragraph::new(text).style(style), footer_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use matcha_core::component::Component;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.update(Message::KeyPress(key(KeyCode::Char(c))));
        }
    }

    fn render(field: &InputField, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| field.view(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..height {
            for x in 0..width {
                output.push_str(buf[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn new_field_is_empty_and_uncontrolled() {
        let field = InputField::new("placeholder");
        assert_eq!(field.value(), "");
        assert!(!field.is_controlled());
    }

    #[test]
    fn typing_characters() {
        let mut field = InputField::new("");
        field.focus();
        type_str(&mut field, "hi");
        assert_eq!(field.value(), "hi");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn typing_emits_changed() {
        let mut field = InputField::new("");
        field.focus();
        let cmd = field.update(Message::KeyPress(key(KeyCode::Char('a'))));
        match cmd.into_message() {
            Some(Message::Changed(value)) => assert_eq!(value, "a"),
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn backspace_deletes_char() {
        let mut field = InputField::new("");
        field.focus();
        type_str(&mut field, "ab");
        field.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn backspace_on_empty_is_silent() {
        let mut field = InputField::new("");
        field.focus();
        let cmd = field.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert!(cmd.is_none());
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut field = InputField::new("").with_value("abc");
        field.focus();
        field.update(Message::KeyPress(key(KeyCode::Home)));
        field.update(Message::KeyPress(key(KeyCode::Delete)));
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn cursor_movement_inserts_mid_text() {
        let mut field = InputField::new("");
        field.focus();
        type_str(&mut field, "abc");
        field.update(Message::KeyPress(key(KeyCode::Left)));
        field.update(Message::KeyPress(key(KeyCode::Left)));
        field.update(Message::KeyPress(key(KeyCode::Char('x'))));
        assert_eq!(field.value(), "axbc");
    }

    #[test]
    fn home_end_keys() {
        let mut field = InputField::new("").with_value("hello");
        field.focus();
        field.update(Message::KeyPress(key(KeyCode::Home)));
        field.update(Message::KeyPress(key(KeyCode::Char('!'))));
        assert_eq!(field.value(), "!hello");

        field.update(Message::KeyPress(key(KeyCode::End)));
        field.update(Message::KeyPress(key(KeyCode::Char('!'))));
        assert_eq!(field.value(), "!hello!");
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut field = InputField::new("");
        field.update(Message::KeyPress(key(KeyCode::Char('a'))));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn disabled_ignores_keys() {
        let mut field = InputField::new("").with_value("locked").with_disabled(true);
        field.focus();
        field.update(Message::KeyPress(key(KeyCode::Char('a'))));
        field.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "locked");
    }

    // -- controlled mode ---------------------------------------------------

    #[test]
    fn controlled_display_ignores_keystrokes() {
        let mut field = InputField::new("").controlled("fixed");
        field.focus();
        type_str(&mut field, "xyz");
        assert_eq!(field.value(), "fixed");
    }

    #[test]
    fn controlled_edit_reports_prospective_value() {
        let mut field = InputField::new("").controlled("fixed");
        field.focus();
        let cmd = field.update(Message::KeyPress(key(KeyCode::Char('!'))));
        match cmd.into_message() {
            Some(Message::Changed(value)) => assert_eq!(value, "fixed!"),
            other => panic!("expected Changed, got {:?}", other),
        }
        // Still a display proxy for the old value.
        assert_eq!(field.value(), "fixed");
    }

    #[test]
    fn controlled_round_trip_through_set_value() {
        let mut field = InputField::new("").controlled("ab");
        field.focus();
        // A cooperative caller echoes every Changed back into the field.
        for c in ['c', 'd'] {
            let cmd = field.update(Message::KeyPress(key(KeyCode::Char(c))));
            if let Some(Message::Changed(value)) = cmd.into_message() {
                field.set_value(&value);
            }
        }
        assert_eq!(field.value(), "abcd");
        assert_eq!(field.cursor_position(), 4);
    }

    #[test]
    fn controlled_backspace_reports_shortened_value() {
        let mut field = InputField::new("").controlled("abc");
        field.focus();
        let cmd = field.update(Message::KeyPress(key(KeyCode::Backspace)));
        match cmd.into_message() {
            Some(Message::Changed(value)) => assert_eq!(value, "ab"),
            other => panic!("expected Changed, got {:?}", other),
        }
        assert_eq!(field.value(), "abc");
    }

    // -- clear action ------------------------------------------------------

    #[test]
    fn clear_resets_uncontrolled_value() {
        let mut field = InputField::new("").with_clear_button().with_value("abc");
        let cmd = field.update(Message::Clear);
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor_position(), 0);
        match cmd.into_message() {
            Some(Message::Changed(value)) => assert_eq!(value, ""),
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn clear_notifies_controlled_caller() {
        let mut field = InputField::new("").with_clear_button().controlled("abc");
        let cmd = field.update(Message::Clear);
        match cmd.into_message() {
            Some(Message::Changed(value)) => assert_eq!(value, ""),
            other => panic!("expected Changed, got {:?}", other),
        }
        // Displayed value is still caller-owned until set_value.
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut field = InputField::new("").with_clear_button().with_value("abc");
        field.focus();
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('u'))));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn clear_requires_opt_in() {
        let mut field = InputField::new("").with_value("abc");
        let cmd = field.update(Message::Clear);
        assert!(cmd.is_none());
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn clear_hidden_when_empty() {
        let field = InputField::new("").with_clear_button();
        assert!(!field.clear_visible());
    }

    #[test]
    fn clear_hidden_when_disabled() {
        let field = InputField::new("")
            .with_clear_button()
            .with_value("abc")
            .with_disabled(true);
        assert!(!field.clear_visible());
    }

    #[test]
    fn clear_hidden_when_loading() {
        let mut field = InputField::new("")
            .with_clear_button()
            .with_value("abc")
            .with_loading(true);
        assert!(!field.clear_visible());
        let cmd = field.update(Message::Clear);
        assert!(cmd.is_none());
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn clear_visible_with_text() {
        let field = InputField::new("").with_clear_button().with_value("abc");
        assert!(field.clear_visible());
    }

    // -- password masking and toggle ---------------------------------------

    #[test]
    fn password_is_masked_by_default() {
        let field = InputField::new("")
            .with_input_type(InputType::Password)
            .with_value("sec");
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.value(), "sec");
    }

    #[test]
    fn toggle_reveals_then_remasks() {
        let mut field = InputField::new("")
            .with_input_type(InputType::Password)
            .with_password_toggle()
            .with_value("sec");
        field.update(Message::ToggleVisibility);
        assert_eq!(field.display_value(), "sec");
        field.update(Message::ToggleVisibility);
        assert_eq!(field.display_value(), "•••");
    }

    #[test]
    fn ctrl_r_toggles_visibility() {
        let mut field = InputField::new("")
            .with_input_type(InputType::Password)
            .with_password_toggle()
            .with_value("sec");
        field.focus();
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('r'))));
        assert!(field.is_revealed());
    }

    #[test]
    fn toggle_requires_password_type() {
        let mut field = InputField::new("").with_password_toggle().with_value("abc");
        field.update(Message::ToggleVisibility);
        assert!(!field.is_revealed());
    }

    #[test]
    fn toggle_unavailable_when_disabled_or_loading() {
        let disabled = InputField::new("")
            .with_input_type(InputType::Password)
            .with_password_toggle()
            .with_disabled(true);
        assert!(!disabled.toggle_visible());

        let loading = InputField::new("")
            .with_input_type(InputType::Password)
            .with_password_toggle()
            .with_loading(true);
        assert!(!loading.toggle_visible());
    }

    #[test]
    fn password_reveal_round_trip_renders_plain_text() {
        // Mount with a controlled secret, reveal it, then re-mask it.
        let mut field = InputField::new("")
            .with_input_type(InputType::Password)
            .with_password_toggle()
            .controlled("secret123");

        let masked = render(&field, 30, field.height());
        assert!(masked.contains(&MASK_CHAR.to_string().repeat(9)));
        assert!(!masked.contains("secret123"));

        field.update(Message::ToggleVisibility);
        let revealed = render(&field, 30, field.height());
        assert!(revealed.contains("secret123"));

        field.update(Message::ToggleVisibility);
        let remasked = render(&field, 30, field.height());
        assert!(remasked.contains(&MASK_CHAR.to_string().repeat(9)));
        assert!(!remasked.contains("secret123"));
    }

    // -- input types -------------------------------------------------------

    #[test]
    fn number_rejects_letters() {
        let mut field = InputField::new("").with_input_type(InputType::Number);
        field.focus();
        type_str(&mut field, "1a2b3");
        assert_eq!(field.value(), "123");
    }

    #[test]
    fn number_accepts_sign_and_decimal_point() {
        let mut field = InputField::new("").with_input_type(InputType::Number);
        field.focus();
        type_str(&mut field, "-1.5");
        assert_eq!(field.value(), "-1.5");
    }

    #[test]
    fn email_behaves_as_plain_text() {
        let mut field = InputField::new("").with_input_type(InputType::Email);
        field.focus();
        type_str(&mut field, "a@b.c");
        assert_eq!(field.value(), "a@b.c");
        assert_eq!(field.display_value(), "a@b.c");
    }

    // -- paste -------------------------------------------------------------

    #[test]
    fn paste_inserts_at_cursor() {
        let mut field = InputField::new("").with_value("hd");
        field.focus();
        field.update(Message::KeyPress(key(KeyCode::Home)));
        field.update(Message::KeyPress(key(KeyCode::Right)));
        field.update(Message::Paste("ello worl".into()));
        assert_eq!(field.value(), "hello world");
        assert_eq!(field.cursor_position(), 10);
    }

    #[test]
    fn paste_is_filtered_by_input_type() {
        let mut field = InputField::new("").with_input_type(InputType::Number);
        field.focus();
        field.update(Message::Paste("1,234.5".into()));
        assert_eq!(field.value(), "1234.5");
    }

    #[test]
    fn paste_when_unfocused_is_ignored() {
        let mut field = InputField::new("");
        field.update(Message::Paste("hello".into()));
        assert_eq!(field.value(), "");
    }

    // -- spinner -----------------------------------------------------------

    #[test]
    fn tick_advances_spinner_while_loading() {
        let mut field = InputField::new("").with_loading(true);
        let before = field.spinner.current();
        field.update(Message::Tick);
        assert_ne!(field.spinner.current(), before);
    }

    #[test]
    fn tick_is_ignored_when_not_loading() {
        let mut field = InputField::new("");
        let before = field.spinner.current();
        field.update(Message::Tick);
        assert_eq!(field.spinner.current(), before);
    }

    #[test]
    fn loading_field_renders_spinner_frame() {
        let field = InputField::new("").with_loading(true).with_value("wait");
        let output = render(&field, 30, field.height());
        assert!(output.contains(field.spinner.current()));
    }

    // -- rendering ---------------------------------------------------------

    #[test]
    fn label_renders_above_field() {
        let field = InputField::new("").with_label("Username");
        let output = render(&field, 30, field.height());
        assert!(output.lines().next().unwrap().contains("Username"));
    }

    #[test]
    fn placeholder_shown_when_empty() {
        let field = InputField::new("Enter your name");
        let output = render(&field, 30, field.height());
        assert!(output.contains("Enter your name"));
    }

    #[test]
    fn value_replaces_placeholder() {
        let field = InputField::new("Enter your name").with_value("Ada");
        let output = render(&field, 30, field.height());
        assert!(output.contains("Ada"));
        assert!(!output.contains("Enter your name"));
    }

    #[test]
    fn error_suppresses_helper_text() {
        let field = InputField::new("")
            .with_helper_text("All good.")
            .with_error_message("Invalid email address.");
        let output = render(&field, 40, field.height());
        assert!(output.contains("Invalid email address."));
        assert!(!output.contains("All good."));
    }

    #[test]
    fn helper_renders_without_error() {
        let field = InputField::new("").with_helper_text("All good.");
        let output = render(&field, 40, field.height());
        assert!(output.contains("All good."));
    }

    #[test]
    fn clear_glyph_rendered_only_when_available() {
        let with_text = InputField::new("").with_clear_button().with_value("abc");
        assert!(render(&with_text, 30, with_text.height()).contains(CLEAR_GLYPH));

        let empty = InputField::new("").with_clear_button();
        assert!(!render(&empty, 30, empty.height()).contains(CLEAR_GLYPH));

        let disabled = InputField::new("")
            .with_clear_button()
            .with_value("abc")
            .with_disabled(true);
        assert!(!render(&disabled, 30, disabled.height()).contains(CLEAR_GLYPH));

        let loading = InputField::new("")
            .with_clear_button()
            .with_value("abc")
            .with_loading(true);
        assert!(!render(&loading, 30, loading.height()).contains(CLEAR_GLYPH));
    }

    #[test]
    fn outlined_draws_border() {
        let field = InputField::new("").with_variant(Variant::Outlined);
        let output = render(&field, 20, field.height());
        assert!(output.contains('│'));
    }

    #[test]
    fn ghost_draws_no_border() {
        let field = InputField::new("").with_variant(Variant::Ghost);
        let output = render(&field, 20, field.height());
        assert!(!output.contains('│'));
    }

    #[test]
    fn invalid_forces_border_on_borderless_variants() {
        let field = InputField::new("")
            .with_variant(Variant::Ghost)
            .with_invalid(true);
        let output = render(&field, 20, field.height());
        assert!(output.contains('│'));
    }

    // -- geometry ----------------------------------------------------------

    #[test]
    fn height_counts_label_and_footer() {
        let bare = InputField::new("").with_variant(Variant::Ghost);
        assert_eq!(bare.height(), 1);

        let labeled = InputField::new("")
            .with_variant(Variant::Ghost)
            .with_label("Name");
        assert_eq!(labeled.height(), 2);

        let full = InputField::new("")
            .with_variant(Variant::Ghost)
            .with_label("Name")
            .with_helper_text("hint");
        assert_eq!(full.height(), 3);
    }

    #[test]
    fn height_grows_with_border_and_size() {
        let outlined = InputField::new("").with_variant(Variant::Outlined);
        assert_eq!(outlined.height(), 3);

        let large = InputField::new("")
            .with_variant(Variant::Outlined)
            .with_size(FieldSize::Lg);
        assert_eq!(large.height(), 5);

        let invalid_ghost = InputField::new("")
            .with_variant(Variant::Ghost)
            .with_invalid(true);
        assert_eq!(invalid_ghost.height(), 3);
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut field = InputField::new("");
        field.set_value("hello");
        assert_eq!(field.cursor_position(), 5);
        assert_eq!(field.len(), 5);
        assert!(!field.is_empty());
    }
}
