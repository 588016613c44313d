use crate::model::PromptResult;
use crate::ui::AppState;

pub enum AppMsg {
    FieldChanged { index: usize, value: String },
    Confirm,
    Dismiss,
}

pub enum Effect {
    Close(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(PromptResult),
    Cancelled,
}

pub fn update(state: &mut AppState, msg: AppMsg) -> Vec<Effect> {
    use AppMsg::*;
    let mut effects: Vec<Effect> = Vec::new();
    match msg {
        FieldChanged { index, value } => {
            state.form.form.set_value(index, value);
        }
        Confirm => {
            // No preconditions: an unedited form confirms with its initial
            // values unchanged.
            effects.push(Effect::Close(Outcome::Accepted(state.form.form.result())));
        }
        Dismiss => {
            // In-progress edits are discarded with the state; the outcome
            // carries no values.
            effects.push(Effect::Close(Outcome::Cancelled));
        }
    }
    effects
}

#[cfg(test)]
mod tests;
