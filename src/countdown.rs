// Pre-battle countdown sequencer.
//
// Plays an ordered list of display steps through a callback, sleeping a
// fixed delay after each one, then signals completion with `None`. Runs as
// a single sequential task; there is no cancellation — once started, the
// sequence always runs to completion.

use std::time::Duration;

/// Delay between countdown steps when the caller has no preference.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(800);

/// Invoke `on_step` with `Some(step)` for each step in order, sleeping
/// `step_delay` between invocations, then exactly once with `None`.
///
/// With an empty step list the callback still fires once, with `None`.
pub async fn play_countdown<F>(steps: &[&str], step_delay: Duration, mut on_step: F)
where
    F: FnMut(Option<&str>),
{
    for step in steps {
        on_step(Some(step));
        tokio::time::sleep(step_delay).await;
    }
    on_step(None);
}
