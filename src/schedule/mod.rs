// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Debounced pass scheduling.
//!
//! Obstacle drags fire change notifications far faster than a pass needs to run. The scheduler
//! owns a task that drains a channel of [`Trigger`]s: the first `ObstacleChanged` opens a fixed
//! window, everything arriving inside that window is folded into it, and exactly one pass runs
//! when it closes. Triggers that queue up while a pass is pending or running are coalesced into
//! the next pass, so at most one pass is ever waiting. Passes never overlap because the task
//! awaits each one before receiving again. The pass itself runs on tokio's blocking pool so a
//! slow pass does not stall other tasks on the runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace, warn};

use crate::model::ObstacleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// An obstacle moved or was resized.
    ObstacleChanged(ObstacleId),
    /// Explicit invalidation, e.g. after obstacles were added or removed.
    Recompute,
}

/// Why a pass ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassCause {
    /// A debounce window closed after folding `notifications` change notifications.
    Debounced { notifications: usize },
    Explicit,
}

/// Handle to the scheduler task.
#[derive(Debug)]
pub struct RouteScheduler {
    tx: mpsc::UnboundedSender<Trigger>,
    task: JoinHandle<u64>,
}

impl RouteScheduler {
    /// Spawns the scheduler on the current tokio runtime. `run_pass` is called once per pass, on a
    /// blocking-pool thread.
    pub fn spawn<F>(window: Duration, run_pass: F) -> Self
    where
        F: FnMut(PassCause) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(rx, window, run_pass));
        Self { tx, task }
    }

    /// Returns `false` once the scheduler task is gone.
    pub fn notify_obstacle_changed(&self, id: ObstacleId) -> bool {
        self.tx.send(Trigger::ObstacleChanged(id)).is_ok()
    }

    pub fn trigger_recompute(&self) -> bool {
        self.tx.send(Trigger::Recompute).is_ok()
    }

    /// Closes the channel and waits for the task. A window that is still open runs its pass
    /// first. Returns the number of passes the task ran.
    pub async fn shutdown(self) -> u64 {
        let Self { tx, task } = self;
        drop(tx);
        match task.await {
            Ok(passes) => passes,
            Err(err) => {
                debug!(error = %err, "route scheduler task ended abnormally");
                0
            }
        }
    }
}

async fn drive<F>(
    mut rx: mpsc::UnboundedReceiver<Trigger>,
    window: Duration,
    mut run_pass: F,
) -> u64
where
    F: FnMut(PassCause) + Send + 'static,
{
    let mut passes = 0u64;

    while let Some(trigger) = rx.recv().await {
        let cause = match trigger {
            Trigger::Recompute => PassCause::Explicit,
            Trigger::ObstacleChanged(id) => {
                trace!(%id, window_ms = window.as_millis() as u64, "debounce window opened");
                collect_window(&mut rx, Instant::now() + window).await
            }
        };
        let cause = coalesce_queued(&mut rx, cause);

        passes += 1;
        debug!(pass = passes, ?cause, "running route pass");
        let pass = tokio::task::spawn_blocking(move || {
            run_pass(cause);
            run_pass
        });
        run_pass = match pass.await {
            Ok(run_pass) => run_pass,
            Err(err) => {
                warn!(pass = passes, error = %err, "route pass failed; scheduler stopping");
                return passes;
            }
        };
    }

    debug!(passes, "route scheduler stopped");
    passes
}

/// Folds every trigger already waiting in the channel into `cause`.
///
/// The pass reads live host state when it runs, so anything queued before it starts is covered
/// by it. A queued recompute makes the pass explicit.
fn coalesce_queued(rx: &mut mpsc::UnboundedReceiver<Trigger>, mut cause: PassCause) -> PassCause {
    let mut folded = 0usize;
    while let Ok(trigger) = rx.try_recv() {
        folded += 1;
        cause = match trigger {
            Trigger::Recompute => PassCause::Explicit,
            Trigger::ObstacleChanged(_) => match cause {
                PassCause::Debounced { notifications } => PassCause::Debounced {
                    notifications: notifications + 1,
                },
                PassCause::Explicit => PassCause::Explicit,
            },
        };
    }
    if folded > 0 {
        trace!(folded, "coalesced queued triggers");
    }
    cause
}

/// Folds triggers into the window ending at `deadline`.
///
/// An explicit recompute or a closed channel ends the window early.
async fn collect_window(
    rx: &mut mpsc::UnboundedReceiver<Trigger>,
    deadline: Instant,
) -> PassCause {
    let mut notifications = 1usize;
    let sleep = sleep_until(deadline);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            () = &mut sleep => return PassCause::Debounced { notifications },
            next = rx.recv() => match next {
                Some(Trigger::ObstacleChanged(_)) => notifications += 1,
                Some(Trigger::Recompute) => return PassCause::Explicit,
                None => return PassCause::Debounced { notifications },
            },
        }
    }
}
