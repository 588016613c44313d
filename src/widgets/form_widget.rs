use crate::app::AppMsg;
use crate::widgets::form::FormState;
use crossterm::event::KeyCode;

/// Routes key events into the form. Navigation and edit-mode toggling mutate
/// the form directly; the three caller-visible operations (field changed,
/// confirm, dismiss) are returned as messages for the update loop, so a
/// confirm always observes the latest applied edit.
pub struct FormWidget {
    pub form: FormState,
}

impl FormWidget {
    pub fn new(form: FormState) -> Self {
        Self { form }
    }

    pub fn on_key(&mut self, key: KeyCode) -> Vec<AppMsg> {
        let mut msgs: Vec<AppMsg> = Vec::new();
        match key {
            KeyCode::Up => {
                if !self.form.editing && self.form.selected > 0 {
                    self.form.selected -= 1;
                }
            }
            KeyCode::Down => {
                if !self.form.editing && self.form.selected < self.form.cancel_index() {
                    self.form.selected += 1;
                }
            }
            KeyCode::Left => {
                // move between buttons: Cancel -> Done
                if !self.form.editing && self.form.selected == self.form.cancel_index() {
                    self.form.selected = self.form.done_index();
                }
            }
            KeyCode::Right => {
                // move between buttons: Done -> Cancel
                if !self.form.editing && self.form.selected == self.form.done_index() {
                    self.form.selected = self.form.cancel_index();
                }
            }
            KeyCode::Enter => {
                if self.form.editing {
                    self.form.editing = false;
                } else if self.form.selected == self.form.done_index() {
                    msgs.push(AppMsg::Confirm);
                } else if self.form.selected == self.form.cancel_index() {
                    msgs.push(AppMsg::Dismiss);
                } else {
                    self.form.editing = true;
                }
            }
            KeyCode::Backspace => {
                if self.form.editing {
                    let index = self.form.selected;
                    let mut value = self.form.values[index].clone();
                    if value.pop().is_some() {
                        msgs.push(AppMsg::FieldChanged { index, value });
                    }
                }
            }
            KeyCode::Esc => {
                if self.form.editing {
                    self.form.editing = false;
                } else {
                    msgs.push(AppMsg::Dismiss);
                }
            }
            KeyCode::Char(c) => {
                if self.form.editing {
                    let index = self.form.selected;
                    let mut value = self.form.values[index].clone();
                    value.push(c);
                    msgs.push(AppMsg::FieldChanged { index, value });
                } else if c == 'q' {
                    msgs.push(AppMsg::Dismiss);
                }
            }
            _ => {}
        }
        msgs
    }
}
