use super::*;
use crate::model::Settings;
use crate::registry::MethodDescriptor;
use crate::widgets::form::FormState;
use crate::widgets::form_widget::FormWidget;
use crossterm::event::KeyCode;

fn state_with(hints: &[&str], values: &[&str]) -> AppState {
    let descriptor = MethodDescriptor {
        name: "test.rpc".into(),
        description: None,
        hints: hints.iter().map(|s| s.to_string()).collect(),
    };
    let form = FormState::new(
        &descriptor,
        values.iter().map(|s| s.to_string()).collect(),
    );
    AppState::new(Settings::default(), FormWidget::new(form), None)
}

fn feed_key(st: &mut AppState, key: KeyCode) -> Vec<Effect> {
    let msgs = st.form.on_key(key);
    let mut effects = Vec::new();
    for msg in msgs {
        effects.extend(update(st, msg));
    }
    effects
}

#[test]
fn field_changed_updates_only_the_target_index() {
    let mut st = state_with(&["a", "b", "c"], &["1", "2", "3"]);
    let effects = update(
        &mut st,
        AppMsg::FieldChanged {
            index: 1,
            value: "two".into(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(st.form.form.values, vec!["1", "two", "3"]);
    assert_eq!(st.form.form.values.len(), st.form.form.hints.len());
}

#[test]
fn confirm_without_edits_returns_initial_values() {
    let mut st = state_with(&["message"], &["hello"]);
    let effects = update(&mut st, AppMsg::Confirm);
    match effects.as_slice() {
        [Effect::Close(Outcome::Accepted(r))] => {
            assert_eq!(r.rpc, "test.rpc");
            assert_eq!(r.values, vec!["hello"]);
        }
        _ => panic!("expected a single Close(Accepted)"),
    }
}

#[test]
fn confirm_after_edit_returns_updated_snapshot() {
    let mut st = state_with(&["p0", "p1", "p2", "p3"], &["a", "b", "c", "d"]);
    let _ = update(
        &mut st,
        AppMsg::FieldChanged {
            index: 2,
            value: "z".into(),
        },
    );
    let effects = update(&mut st, AppMsg::Confirm);
    match effects.as_slice() {
        [Effect::Close(Outcome::Accepted(r))] => {
            assert_eq!(r.rpc, "test.rpc");
            assert_eq!(r.values, vec!["a", "b", "z", "d"]);
        }
        _ => panic!("expected a single Close(Accepted)"),
    }
}

#[test]
fn dismiss_discards_edits_and_yields_cancelled() {
    let mut st = state_with(&["a"], &["1"]);
    let _ = update(
        &mut st,
        AppMsg::FieldChanged {
            index: 0,
            value: "edited".into(),
        },
    );
    let effects = update(&mut st, AppMsg::Dismiss);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Close(Outcome::Cancelled)]
    ));
}

#[test]
fn keystrokes_route_to_the_selected_field() {
    let mut st = state_with(&["path", "width"], &["", "64"]);
    // Move to the second field, start editing, type a digit.
    assert!(feed_key(&mut st, KeyCode::Down).is_empty());
    assert!(feed_key(&mut st, KeyCode::Enter).is_empty());
    assert!(st.form.form.editing);
    assert!(feed_key(&mut st, KeyCode::Char('0')).is_empty());
    assert_eq!(st.form.form.values, vec!["", "640"]);
    // Backspace routes through the same per-keystroke path.
    assert!(feed_key(&mut st, KeyCode::Backspace).is_empty());
    assert_eq!(st.form.form.values, vec!["", "64"]);
}

#[test]
fn enter_on_done_button_confirms_current_snapshot() {
    let mut st = state_with(&["message"], &["hi"]);
    // field -> Done button
    let _ = feed_key(&mut st, KeyCode::Down);
    let effects = feed_key(&mut st, KeyCode::Enter);
    match effects.as_slice() {
        [Effect::Close(Outcome::Accepted(r))] => assert_eq!(r.values, vec!["hi"]),
        _ => panic!("expected Close(Accepted)"),
    }
}

#[test]
fn enter_on_cancel_button_dismisses() {
    let mut st = state_with(&["message"], &[]);
    let _ = feed_key(&mut st, KeyCode::Down);
    let _ = feed_key(&mut st, KeyCode::Right);
    let effects = feed_key(&mut st, KeyCode::Enter);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Close(Outcome::Cancelled)]
    ));
}

#[test]
fn esc_leaves_editing_before_it_dismisses() {
    let mut st = state_with(&["message"], &[]);
    let _ = feed_key(&mut st, KeyCode::Enter);
    assert!(st.form.form.editing);
    assert!(feed_key(&mut st, KeyCode::Esc).is_empty());
    assert!(!st.form.form.editing);
    let effects = feed_key(&mut st, KeyCode::Esc);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Close(Outcome::Cancelled)]
    ));
}

#[test]
fn q_dismisses_only_outside_editing() {
    let mut st = state_with(&["message"], &[]);
    let _ = feed_key(&mut st, KeyCode::Enter);
    assert!(feed_key(&mut st, KeyCode::Char('q')).is_empty());
    assert_eq!(st.form.form.values, vec!["q"]);
    let _ = feed_key(&mut st, KeyCode::Esc);
    let effects = feed_key(&mut st, KeyCode::Char('q'));
    assert!(matches!(
        effects.as_slice(),
        [Effect::Close(Outcome::Cancelled)]
    ));
}

#[test]
fn zero_parameter_rpc_still_confirms() {
    let mut st = state_with(&[], &[]);
    // Selection starts on the Done button when there are no fields.
    let effects = feed_key(&mut st, KeyCode::Enter);
    match effects.as_slice() {
        [Effect::Close(Outcome::Accepted(r))] => assert!(r.values.is_empty()),
        _ => panic!("expected Close(Accepted)"),
    }
}
