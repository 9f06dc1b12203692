//! Demo application state and key handling

use crate::config::DemoConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;
use switchkraft::{AttachedField, FormState, Listener};

/// One labelled text field on the demo form
pub struct DemoField {
    pub label: &'static str,
    pub state: AttachedField<String>,
}

/// Main application struct
pub struct App {
    /// The form every field is attached to
    pub form: FormState,
    /// Fields in display order
    pub fields: Vec<DemoField>,
    /// Index of the focused field (Edit mode only)
    pub active_field: usize,
    /// Feedback for the last action
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
    /// Set by state listeners, cleared after each draw
    needs_redraw: Rc<Cell<bool>>,
    /// Keeps the redraw subscription alive
    _redraw_listener: Listener,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        let form = FormState::new(config.initial_mode());
        let fields = vec![
            DemoField {
                label: "First Name",
                state: AttachedField::new(config.first_name(), Some(&form)),
            },
            DemoField {
                label: "Last Name",
                state: AttachedField::new(config.last_name(), Some(&form)),
            },
            DemoField {
                label: "Email",
                state: AttachedField::new(config.email(), Some(&form)),
            },
        ];

        let needs_redraw = Rc::new(Cell::new(true));
        let redraw_listener: Listener = {
            let needs_redraw = Rc::clone(&needs_redraw);
            Rc::new(move || needs_redraw.set(true))
        };
        form.subscribe(&redraw_listener);
        for field in &fields {
            field.state.subscribe(&redraw_listener);
        }

        Self {
            form,
            fields,
            active_field: 0,
            status_message: None,
            quit: false,
            needs_redraw,
            _redraw_listener: redraw_listener,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether state changed since the last draw; clears the flag
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Force a redraw, e.g. after a terminal resize
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    pub fn is_editing(&self) -> bool {
        self.form.mode().is_edit()
    }

    /// The focused field, if any
    pub fn active(&self) -> Option<&DemoField> {
        self.fields.get(self.active_field)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.is_editing() {
            self.handle_edit_key(key);
        } else {
            self.handle_view_key(key);
        }
        // Focus and status changes are not observable state
        self.request_redraw();
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => self.revert_active(),
            KeyCode::Char('z') if ctrl => self.revert_all(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.active() {
                    field.state.update_current(|v| v.push(c));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.active() {
                    field.state.update_current(|v| {
                        v.pop();
                    });
                }
            }
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => self.done(),
            KeyCode::Esc => self.cancel(),
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        self.form.toggle_mode();
        self.active_field = 0;
        self.status_message = None;
        tracing::info!("editing started");
    }

    /// Commit and leave Edit mode
    pub fn done(&mut self) {
        let changed = self.form.is_modified();
        self.form.commit();
        self.form.toggle_mode();
        self.status_message = Some(if changed {
            "Changes saved".to_string()
        } else {
            "No changes".to_string()
        });
        tracing::info!(changed, "editing finished");
    }

    /// Revert and leave Edit mode
    pub fn cancel(&mut self) {
        let changed = self.form.is_modified();
        self.form.revert();
        self.form.toggle_mode();
        self.status_message = Some(if changed {
            "Changes discarded".to_string()
        } else {
            "Edit cancelled".to_string()
        });
        tracing::info!(changed, "editing cancelled");
    }

    /// Revert only the focused field
    pub fn revert_active(&mut self) {
        let Some(field) = self.active() else {
            return;
        };
        if !field.state.is_modified() {
            return;
        }
        field.state.revert();
        let message = format!("Reverted {}", field.label);
        tracing::info!(field = field.label, "field reverted");
        self.status_message = Some(message);
    }

    /// Revert every field; ignored while the form is clean
    pub fn revert_all(&mut self) {
        if !self.form.is_modified() {
            tracing::warn!("revert all ignored, nothing to revert");
            return;
        }
        self.form.revert();
        self.status_message = Some("Reverted all fields".to_string());
        tracing::info!("form reverted");
    }

    fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active_field = (self.active_field + 1) % self.fields.len();
        }
    }

    fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.active_field == 0 {
            self.active_field = self.fields.len() - 1;
        } else {
            self.active_field -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchkraft::FormMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn values(app: &App) -> Vec<String> {
        app.fields.iter().map(|f| f.state.current_value()).collect()
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_in_view_with_defaults() {
            let app = App::new(&DemoConfig::default());
            assert_eq!(app.form.mode(), FormMode::View);
            assert_eq!(values(&app), vec!["John", "Doe", "john.doe@example.com"]);
            assert_eq!(app.form.len(), 3);
            assert!(!app.form.is_modified());
        }

        #[test]
        fn test_config_can_start_in_edit() {
            let config = DemoConfig {
                start_in_edit: Some(true),
                first_name: Some("Ada".to_string()),
                ..Default::default()
            };
            let app = App::new(&config);
            assert!(app.is_editing());
            assert_eq!(app.fields[0].state.current_value(), "Ada");
        }

        #[test]
        fn test_first_draw_is_requested() {
            let app = App::new(&DemoConfig::default());
            assert!(app.take_redraw());
            assert!(!app.take_redraw());
        }
    }

    mod view_mode {
        use super::*;

        #[test]
        fn test_typing_does_not_edit() {
            let mut app = App::new(&DemoConfig::default());
            app.handle_key(key(KeyCode::Char('x')));
            assert!(!app.form.is_modified());
        }

        #[test]
        fn test_e_enters_edit() {
            let mut app = App::new(&DemoConfig::default());
            app.handle_key(key(KeyCode::Char('e')));
            assert!(app.is_editing());
        }

        #[test]
        fn test_q_quits() {
            let mut app = App::new(&DemoConfig::default());
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = App::new(&DemoConfig::default());
            app.handle_key(key(KeyCode::Char('e')));
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }
    }

    mod edit_mode {
        use super::*;
        use pretty_assertions::assert_eq;

        fn editing() -> App {
            let mut app = App::new(&DemoConfig::default());
            app.handle_key(key(KeyCode::Char('e')));
            app
        }

        #[test]
        fn test_typing_edits_active_field() {
            let mut app = editing();
            type_text(&mut app, "ny");
            assert_eq!(app.fields[0].state.current_value(), "Johnny");
            assert!(app.form.is_modified());
        }

        #[test]
        fn test_typing_marks_redraw() {
            let app = editing();
            app.take_redraw();
            app.fields[1].state.set_current("Smith".to_string());
            assert!(app.take_redraw());
        }

        #[test]
        fn test_backspace_deletes() {
            let mut app = editing();
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.fields[0].state.current_value(), "Joh");
        }

        #[test]
        fn test_tab_moves_focus_and_wraps() {
            let mut app = editing();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.active_field, 1);
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.active_field, 0);
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.active_field, 2);
        }

        #[test]
        fn test_enter_commits_and_leaves_edit() {
            let mut app = editing();
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "-Smith");
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.form.mode(), FormMode::View);
            assert!(!app.form.is_modified());
            assert_eq!(app.fields[1].state.original_value(), "Doe-Smith");
            assert_eq!(app.status_message.as_deref(), Some("Changes saved"));
        }

        #[test]
        fn test_esc_reverts_and_leaves_edit() {
            let mut app = editing();
            type_text(&mut app, "ny");
            app.handle_key(key(KeyCode::Esc));

            assert_eq!(app.form.mode(), FormMode::View);
            assert_eq!(app.fields[0].state.current_value(), "John");
            assert_eq!(app.status_message.as_deref(), Some("Changes discarded"));
        }

        #[test]
        fn test_ctrl_r_reverts_only_active_field() {
            let mut app = editing();
            type_text(&mut app, "ny");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "s");
            app.handle_key(ctrl('r'));

            assert_eq!(app.fields[0].state.current_value(), "Johnny");
            assert_eq!(app.fields[1].state.current_value(), "Doe");
            assert!(app.is_editing());
        }

        #[test]
        fn test_ctrl_z_reverts_all() {
            let mut app = editing();
            type_text(&mut app, "ny");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "s");
            app.handle_key(ctrl('z'));

            assert_eq!(values(&app), vec!["John", "Doe", "john.doe@example.com"]);
            assert!(app.is_editing());
            assert_eq!(app.status_message.as_deref(), Some("Reverted all fields"));
        }

        #[test]
        fn test_revert_all_on_clean_form_is_ignored() {
            let mut app = editing();
            app.handle_key(ctrl('z'));
            assert!(app.status_message.is_none());
        }

        #[test]
        fn test_revert_after_done_uses_new_baseline() {
            let mut app = editing();
            type_text(&mut app, "ny");
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('e')));
            type_text(&mut app, "!");
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.fields[0].state.current_value(), "Johnny");
        }
    }
}
