use crate::model::PromptResult;
use crate::registry::MethodDescriptor;
use crate::theme::Theme;
use crate::widgets::chrome::panel_block;
use ratatui::prelude::*;
use ratatui::widgets::*;

/// One editable row per parameter hint. `hints` and `values` are index-aligned
/// and stay the same length for the whole life of the screen; edits overwrite
/// in place, nothing is ever inserted or removed.
#[derive(Clone, Debug)]
pub struct FormState {
    pub rpc: String,
    pub title: String,
    pub hints: Vec<String>,
    pub values: Vec<String>,
    pub selected: usize,
    pub editing: bool,
    pub message: Option<String>,
}

impl FormState {
    pub fn new(descriptor: &MethodDescriptor, initial: Vec<String>) -> Self {
        let hints = descriptor.hints.clone();
        let values = normalize_values(initial, hints.len());
        Self {
            rpc: descriptor.name.clone(),
            title: descriptor.name.clone(),
            hints,
            values,
            selected: 0,
            editing: false,
            message: None,
        }
    }

    /// Overwrite the value at `index`. An out-of-range index means the key
    /// routing is broken; losing the edit silently would be worse than the
    /// panic, so the slice index is left unguarded.
    pub fn set_value(&mut self, index: usize, value: String) {
        self.values[index] = value;
    }

    pub fn result(&self) -> PromptResult {
        PromptResult {
            rpc: self.rpc.clone(),
            values: self.values.clone(),
        }
    }

    pub fn done_index(&self) -> usize {
        self.hints.len()
    }

    pub fn cancel_index(&self) -> usize {
        self.hints.len() + 1
    }
}

/// Align caller-supplied values to the hint count: truncate extras, pad the
/// tail with empty strings.
pub fn normalize_values(mut values: Vec<String>, expected: usize) -> Vec<String> {
    values.resize(expected, String::new());
    values
}

pub(crate) fn compute_scroll_window(total: usize, selected: usize, inner_h: u16) -> (usize, usize) {
    if inner_h == 0 || total == 0 {
        return (0, 0);
    }
    let ih = inner_h as usize;
    let sel = selected.min(total.saturating_sub(1));
    let start = if sel >= ih.saturating_sub(1) {
        sel - ih.saturating_sub(1)
    } else {
        0
    };
    let end = (start + ih).min(total);
    (start, end)
}

pub fn draw_form(
    f: &mut Frame,
    area: Rect,
    form: &FormState,
    highlight: bool,
    cursor_on: bool,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, hint) in form.hints.iter().enumerate() {
        let sel = if i == form.selected { '›' } else { ' ' };
        let mut val = form.values[i].clone();
        if form.editing && i == form.selected && cursor_on {
            val.push('▏');
        }
        let value_style = if i == form.selected {
            if form.editing {
                theme.text_editing_bold()
            } else {
                theme.text_active_bold()
            }
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{sel} {hint}: ")),
            Span::styled(val, value_style),
        ]));
    }
    if !form.hints.is_empty() {
        lines.push(Line::from(""));
    }
    let mut done_style = theme.text_active_bold();
    let mut cancel_style = theme.text_muted();
    if form.selected == form.done_index() {
        done_style = theme.list_cursor_style();
    }
    if form.selected == form.cancel_index() {
        cancel_style = theme.list_cursor_style();
    }
    lines.push(Line::from(vec![
        Span::styled("  [ Done ]  ", done_style),
        Span::styled("Cancel", cancel_style),
    ]));
    if let Some(msg) = &form.message {
        lines.push(Line::from(Span::styled(msg.clone(), theme.text_muted())));
    }
    let title = if form.editing {
        format!("{} — editing", form.title)
    } else {
        form.title.clone()
    };
    // Keep the selected row inside the viewport for RPCs with many parameters.
    let selected_row = if form.selected < form.hints.len() {
        form.selected
    } else {
        form.hints.len() + 1
    };
    let (start, _end) =
        compute_scroll_window(lines.len(), selected_row, area.height.saturating_sub(2));
    let block = panel_block(&title, highlight, theme);
    let p = Paragraph::new(lines).block(block).scroll((start as u16, 0));
    f.render_widget(p, area);
}
