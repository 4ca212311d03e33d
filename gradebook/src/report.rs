//! Render command outcomes as user-facing text.

use anyhow::{Context, Result};

use crate::handlers::Outcome;

/// Text to print for `outcome`, newline-terminated.
///
/// With `echo_state`, a committed state is printed as compact JSON before the
/// confirmation line, leaving an audit trail of every write.
pub fn render(outcome: &Outcome, echo_state: bool) -> Result<String> {
    let mut out = String::new();
    match outcome {
        Outcome::Committed { state, message } => {
            if echo_state {
                out.push_str(&serde_json::to_string(state).context("serialize committed state")?);
                out.push('\n');
            }
            out.push_str(message);
        }
        Outcome::Reported(text) => out.push_str(text),
        Outcome::Rejected(rejection) => out.push_str(&rejection.to_string()),
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;
    use crate::gradebook::Gradebook;

    #[test]
    fn committed_state_is_echoed_before_message() {
        let outcome = Outcome::Committed {
            state: Gradebook::default(),
            message: "Added Math class with teacher Daniel.".to_string(),
        };
        assert_eq!(
            render(&outcome, true).expect("render"),
            "{\"students\":{},\"classrooms\":{}}\nAdded Math class with teacher Daniel.\n"
        );
        assert_eq!(
            render(&outcome, false).expect("render"),
            "Added Math class with teacher Daniel.\n"
        );
    }

    #[test]
    fn rejection_prints_its_diagnostic() {
        let outcome = Outcome::Rejected(Rejection::InvalidCommand);
        assert_eq!(
            render(&outcome, true).expect("render"),
            "Please enter a valid command.\n"
        );
    }
}
