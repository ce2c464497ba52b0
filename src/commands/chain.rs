use anyhow::Result;
use pk_app::ChainSession;
use pk_core::{AutoSolveOutcome, EncodingStep, StepMethod};

/// Applies `steps` in order, then optionally auto-solves, and renders the
/// resulting chain one step per line.
pub fn run(text: &str, steps: &[StepMethod], auto: bool, max_iterations: usize) -> Result<String> {
    let mut session = ChainSession::new(max_iterations);
    session.set_input(text);

    for (n, method) in steps.iter().enumerate() {
        let applied = session.apply(*method).map(|_| ());
        if let Err(e) = applied {
            return Err(anyhow::Error::new(e).context(format!(
                "step {} ({method}) rejected; chain so far:\n{}",
                n + 1,
                render_steps(session.steps())
            )));
        }
    }

    let note = match auto.then(|| session.auto_solve()) {
        Some(AutoSolveOutcome::NoNestedEncoding) => Some("(no nested encoding detected)"),
        _ => None,
    };

    let mut out = render_steps(session.steps());
    if let Some(note) = note {
        out.push('\n');
        out.push_str(note);
    }
    Ok(out)
}

pub fn render_steps(steps: &[EncodingStep]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("[{i}] {}: {}", step.method, step.value))
        .collect::<Vec<_>>()
        .join("\n")
}
