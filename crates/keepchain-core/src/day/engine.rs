//! Day-status engine.
//!
//! Decides whether today may be closed with the requested status and
//! applies the streak transition.
//!
//! ## Transitions
//!
//! ```text
//! kept   (all promises done)  -> current += 1, longest = max(longest, current)
//! kept   (otherwise)          -> rejected, nothing changes
//! broken                      -> current = 0, longest untouched
//! ```
//!
//! Closing the same date twice overwrites that date's entry and runs the
//! counter logic again, so two "kept" closes on one day count twice.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::state::{Chain, DayRecord, DayStatus, PersistedState, Promise};

impl Chain {
    /// One more kept day.
    pub fn extend(&mut self) {
        self.current = self.current.saturating_add(1);
        if self.current > self.longest {
            self.longest = self.current;
        }
    }

    /// Hard reset of the running streak. The record survives.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Result of a successful [`close_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClosed {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub chain_before: Chain,
    pub chain_after: Chain,
    /// Status this date already had, if it was closed before.
    pub replaced: Option<DayStatus>,
}

/// True iff there is at least one promise and every promise is done.
///
/// An empty list is *not* all-kept.
pub fn all_promises_kept(promises: &[Promise]) -> bool {
    !promises.is_empty() && promises.iter().all(|p| p.done)
}

/// `(done, total)` over the active promise list.
pub fn promise_progress(promises: &[Promise]) -> (usize, usize) {
    (promises.iter().filter(|p| p.done).count(), promises.len())
}

/// Checks the precondition for closing as kept.
pub fn ensure_all_kept(promises: &[Promise]) -> Result<(), ValidationError> {
    if promises.is_empty() {
        return Err(ValidationError::NoPromises);
    }
    let (done, total) = promise_progress(promises);
    if done < total {
        return Err(ValidationError::PromisesIncomplete { done, total });
    }
    Ok(())
}

/// Close `today` with `requested`.
///
/// On error nothing in `state` has been touched.
pub fn close_day(
    state: &mut PersistedState,
    requested: DayStatus,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<DayClosed, ValidationError> {
    if requested == DayStatus::Kept {
        ensure_all_kept(&state.promises)?;
    }

    let chain_before = state.chain;
    let replaced = state
        .history
        .insert(
            today,
            DayRecord {
                status: requested,
                closed_at: now,
            },
        )
        .map(|r| r.status);

    match requested {
        DayStatus::Kept => state.chain.extend(),
        DayStatus::Broken => state.chain.reset(),
    }

    tracing::debug!(
        %today,
        status = %requested,
        current = state.chain.current,
        longest = state.chain.longest,
        ?replaced,
        "day closed"
    );

    Ok(DayClosed {
        date: today,
        status: requested,
        chain_before,
        chain_after: state.chain,
        replaced,
    })
}
