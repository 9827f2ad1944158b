use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::carousel::{CarouselWidget, NavigationInput};
use crate::events::ClickEvent;
use crate::session::Session;
use crate::surface::ViewSurface;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    Click(ClickEvent),
    Navigate(NavigationInput),
    SlideChanged(usize),
    Shutdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub events: usize,
    pub tasks_fired: usize,
}

/// Drive `session` from `events` until the channel closes or a shutdown
/// arrives, firing deferred tasks as their deadlines pass on the tokio clock.
/// The session is torn down on exit.
pub async fn run_session<S, W>(
    session: &mut Session<S, W>,
    mut events: mpsc::UnboundedReceiver<SessionEvent>,
) -> RunStats
where
    S: ViewSurface,
    W: CarouselWidget,
{
    let mut stats = RunStats::default();
    let mut last_tick = Instant::now();

    loop {
        let deadline = session
            .time_until_next_task()
            .map(|wait| last_tick + wait);

        tokio::select! {
            event = events.recv() => {
                // Catch the session clock up before the event lands, so any
                // delay it schedules starts now.
                stats.tasks_fired += catch_up(session, &mut last_tick);
                match event {
                    None | Some(SessionEvent::Shutdown) => break,
                    Some(event) => {
                        stats.events += 1;
                        dispatch(session, event);
                    }
                }
            }
            _ = sleep_until(deadline) => {
                stats.tasks_fired += catch_up(session, &mut last_tick);
            }
        }
    }

    session.teardown();
    tracing::debug!(
        "Session loop finished: {} events, {} tasks",
        stats.events,
        stats.tasks_fired
    );
    stats
}

/// Advance the session by the wall time since `last_tick`.
fn catch_up<S, W>(session: &mut Session<S, W>, last_tick: &mut Instant) -> usize
where
    S: ViewSurface,
    W: CarouselWidget,
{
    let now = Instant::now();
    let fired = session.advance(now.duration_since(*last_tick));
    *last_tick = now;
    fired
}

fn dispatch<S: ViewSurface, W: CarouselWidget>(session: &mut Session<S, W>, event: SessionEvent) {
    match event {
        SessionEvent::Click(click) => {
            let outcome = session.handle_click(&click);
            tracing::trace!("Click handled: {:?}", outcome);
        }
        SessionEvent::Navigate(input) => {
            session.navigate(input);
        }
        SessionEvent::SlideChanged(index) => session.on_slide_change(index),
        SessionEvent::Shutdown => {}
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

