use crate::app::{update, AppMsg, Effect, Outcome};
use crate::model::{Envelope, PromptRequest, Settings};
use crate::registry::{Registry, REGISTRY_FILE};
use crate::services::usage::{FileSink, NullSink, UsageSink};
use crate::theme::Theme;
use crate::widgets::form::{draw_form, FormState};
use crate::widgets::form_widget::FormWidget;
use crate::widgets::header::draw_header;
use crate::widgets::status_bar::draw_footer;
use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const SETTINGS_FILE: &str = "api-prompt.yaml";
const USAGE_LOG: &str = "usage.log";
const TOAST_TICKS: u64 = 10; // ~2s @ 200ms tick

pub(crate) struct AppState {
    pub(crate) settings: Settings,
    pub(crate) theme: Theme,
    pub(crate) form: FormWidget,
    pub(crate) rpc_description: Option<String>,
    pub(crate) tick: u64,
    pub(crate) toast: Option<Toast>,
    pub(crate) outcome: Option<Outcome>,
}

pub(crate) struct Toast {
    pub text: String,
    pub expires_at_tick: u64,
}

impl AppState {
    pub(crate) fn new(
        settings: Settings,
        form: FormWidget,
        rpc_description: Option<String>,
    ) -> Self {
        let theme = Theme::from_name(settings.theme.as_deref());
        Self {
            settings,
            theme,
            form,
            rpc_description,
            tick: 0,
            toast: None,
            outcome: None,
        }
    }
}

pub fn run() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let request = PromptRequest::from_args(&argv)?;
    let dir = config_dir()?;
    let settings = load_settings(&dir)?;
    let registry = Registry::load(&dir)?;
    // An unknown identifier is a caller bug: abort before any terminal setup,
    // no fields are ever rendered.
    let descriptor = registry
        .lookup(&request.rpc)
        .cloned()
        .ok_or_else(|| anyhow!("unknown RPC '{}' (not in {REGISTRY_FILE})", request.rpc))?;
    let form = FormState::new(&descriptor, request.values);
    let sink: Box<dyn UsageSink> = if settings.analytics {
        Box::new(FileSink::new(dir.join(USAGE_LOG)))
    } else {
        Box::new(NullSink)
    };
    sink.screen_viewed("api_prompt");
    let mut state = AppState::new(
        settings,
        FormWidget::new(form),
        descriptor.description.clone(),
    );

    // Headless smoke mode
    if env_flag("API_PROMPT_HEADLESS") {
        let ticks: u64 = std::env::var("API_PROMPT_TICKS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10);
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;
        for _ in 0..ticks {
            terminal.draw(|f| ui(f, &mut state))?;
            state.tick = state.tick.wrapping_add(1);
        }
        if env_flag("API_PROMPT_HEADLESS_CONFIRM") {
            let effects = update(&mut state, AppMsg::Confirm);
            run_effects(&mut state, effects);
        }
        return emit_outcome(state.outcome.take());
    }

    // Setup terminal (interactive)
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();
    let res = loop {
        terminal.draw(|f| ui(f, &mut state))?;
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        copy_values(&mut state);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let effects = update(&mut state, AppMsg::Dismiss);
                        run_effects(&mut state, effects);
                    }
                    code => {
                        let msgs = state.form.on_key(code);
                        for msg in msgs {
                            let effects = update(&mut state, msg);
                            run_effects(&mut state, effects);
                        }
                    }
                }
            }
        }
        if state.outcome.is_some() {
            break Ok(());
        }
        if last_tick.elapsed() >= tick_rate {
            state.tick = state.tick.wrapping_add(1);
            last_tick = Instant::now();
        }
    };
    // Restore
    disable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res?;
    emit_outcome(state.outcome.take())
}

fn run_effects(state: &mut AppState, effects: Vec<Effect>) {
    for eff in effects {
        match eff {
            Effect::Close(outcome) => {
                state.outcome = Some(outcome);
            }
        }
    }
}

/// Print the caller-facing envelope after the terminal is restored. Leaving
/// the screen any way other than Confirm means "not accepted".
fn emit_outcome(outcome: Option<Outcome>) -> Result<()> {
    let envelope = match outcome {
        Some(Outcome::Accepted(result)) => Envelope::result(result),
        _ => Envelope::cancelled(),
    };
    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}

fn ui(f: &mut Frame, state: &mut AppState) {
    // Clear expired toast
    if let Some(t) = &state.toast {
        if state.tick >= t.expires_at_tick {
            state.toast = None;
        }
    }
    let screen = f.area();
    let bg = Block::default().style(state.theme.base_style());
    f.render_widget(bg, screen);
    let constraints = if state.settings.fullscreen {
        vec![Constraint::Min(0), Constraint::Length(1)]
    } else {
        vec![
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(screen);
    let mut idx = 0;
    if !state.settings.fullscreen {
        draw_header(f, chunks[idx], state);
        idx += 1;
    }
    let cursor_on = state.tick % 2 == 0;
    draw_form(
        f,
        chunks[idx],
        &state.form.form,
        true,
        cursor_on,
        &state.theme,
    );
    draw_footer(f, chunks[idx + 1], state);
}

fn copy_values(state: &mut AppState) {
    let form = &state.form.form;
    let text = form
        .hints
        .iter()
        .zip(&form.values)
        .map(|(h, v)| format!("{h}: {v}"))
        .collect::<Vec<_>>()
        .join("\n");
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        if clipboard.set_text(&text).is_ok() {
            state.toast = Some(Toast {
                text: "Copied to clipboard".into(),
                expires_at_tick: state.tick.saturating_add(TOAST_TICKS),
            });
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    // 1) Explicit override
    if let Ok(base) = std::env::var("API_PROMPT_CONFIG_DIR") {
        return Ok(PathBuf::from(base));
    }
    // 2) Discover the registry from CWD, ancestors, then HOME
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if cwd.join(REGISTRY_FILE).exists() {
        return Ok(cwd);
    }
    let mut cur = cwd.as_path();
    while let Some(parent) = cur.parent() {
        let p = parent.join(".api-prompt");
        if p.join(REGISTRY_FILE).exists() {
            return Ok(p);
        }
        cur = parent;
    }
    if let Some(home) = std::env::var("HOME")
        .ok()
        .or_else(|| std::env::var("USERPROFILE").ok())
        .map(PathBuf::from)
    {
        let p = home.join(".api-prompt");
        if p.join(REGISTRY_FILE).exists() {
            return Ok(p);
        }
    }
    Err(anyhow!(
        "No {REGISTRY_FILE} found. Set API_PROMPT_CONFIG_DIR=<dir with {REGISTRY_FILE}> or place one in CWD or ~/.api-prompt"
    ))
}

fn load_settings(dir: &std::path::Path) -> Result<Settings> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let s = fs::read_to_string(&path).with_context(|| format!("reading settings: {path:?}"))?;
    serde_yaml::from_str(&s).with_context(|| format!("parsing settings: {path:?}"))
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"))
        .unwrap_or(false)
}
