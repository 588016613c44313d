use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::ui::AppState;

/// Titled-mode header bar: app name, the RPC's display name, and its
/// description when the catalog carries one.
pub fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let border = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(state.theme.text_muted());
    let inner = border.inner(area);
    f.render_widget(border, area);
    let mut spans: Vec<Span> = vec![
        Span::styled("api-prompt", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(state.form.form.title.clone(), state.theme.title_style()),
    ];
    if let Some(desc) = &state.rpc_description {
        spans.push(Span::styled(
            format!("  — {desc}"),
            state.theme.text_muted(),
        ));
    }
    let p = Paragraph::new(Line::from(spans));
    f.render_widget(p, inner);
}
