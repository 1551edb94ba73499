use std::future;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::event::DomainEvent;

use super::actors::UiActor;
use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    ui_actor: UiActor,
    session: TerminalSession,
    redraw_tick: time::Interval,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Deadline,
    RedrawTick,
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        info!("Event loop started");

        let result = self.drive_loop(&mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        info!("Event loop stopped");
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let ui_actor = UiActor::new(Duration::from_millis(self.config.render.redraw_interval_ms));
        let session = TerminalSession::enter()?;
        let (loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();
        let mut redraw_tick = time::interval(ui_actor.redraw_interval());
        redraw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            ui_actor,
            session,
            redraw_tick,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    async fn drive_loop(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if self.tick(Instant::now()) {
                runtime.ui_actor.mark_redraw();
            }
            if runtime.ui_actor.needs_redraw() {
                self.render_frame(&mut runtime.session)?;
                runtime.ui_actor.clear_redraw();
            }

            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.redraw_tick,
                self.deadline(),
                self.scroll.is_animating(),
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, runtime)?,
                LoopControl::Break
            ) {
                return Ok(());
            }
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                if matches!(event, Event::Resize(_, _)) {
                    runtime.session.clear()?;
                }
                let outcome = self.handle_input_event(event, Instant::now());
                if outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if outcome.redraw {
                    runtime.ui_actor.mark_redraw();
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                warn!(%message, "Terminal input error");
                self.status.message = format!("input error: {message}");
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Deadline | WaitEvent::RedrawTick => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    redraw_tick: &mut time::Interval,
    deadline: Option<Instant>,
    animating: bool,
) -> WaitEvent {
    let deadline_wait = async {
        match deadline {
            Some(at) => time::sleep_until(at.into()).await,
            None => future::pending::<()>().await,
        }
    };
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = deadline_wait => WaitEvent::Deadline,
        _ = redraw_tick.tick(), if animating => WaitEvent::RedrawTick,
    }
}
