use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::*;

use crate::ui::AppState;

pub fn draw_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    if let Some(t) = &state.toast {
        spans.push(Span::styled(
            format!(" {}  |  ", t.text),
            Style::default().fg(state.theme.success),
        ));
    }
    if state.form.form.editing {
        spans.push(Span::raw("editing  |  "));
    }
    let help = if state.form.form.editing {
        "Type  Backspace delete  Enter/Esc finish"
    } else {
        "↑/↓ select  Enter edit/activate  Ctrl+Y copy  Esc/q cancel"
    };
    spans.push(Span::styled(help, state.theme.text_muted()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
