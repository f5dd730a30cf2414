//! Telemetry snapshot
//!
//! Holds the latest completed roster and readings collections and decides which
//! fetch results are allowed to replace them. Every fetch takes a ticket when it
//! is issued; a result is applied only if its ticket is newer than the last one
//! applied for that resource (last-request-wins). Each collection is replaced
//! wholesale, so a merge never sees a half-updated input.
//!
//! A failed fetch that wins keeps the previously held collection in place.
//! Held collections belong to one signed-in user: `reset` drops them on logout
//! and `scope_to` drops them when a different identity starts using the snapshot.

use crate::constants::vitals::HISTORY_DISPLAY_LIMIT;
use crate::domain::services::{history, merge, summarize};
use crate::domain::{
    DashboardResponse, DomainError, FetchOutcome, PatientRecord, PatientView, VitalHistoryQuery,
    VitalHistoryResponse, VitalReading,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingsTicket(u64);

/// Which collections the snapshot currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Empty,
    RosterOnly,
    ReadingsOnly,
    Both,
}

struct Slot<T> {
    issued: u64,
    applied: u64,
    data: Option<Arc<Vec<T>>>,
    last_error: Option<DomainError>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            applied: 0,
            data: None,
            last_error: None,
        }
    }
}

impl<T> Slot<T> {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn complete(&mut self, sequence: u64, outcome: FetchOutcome<T>) -> bool {
        if sequence <= self.applied {
            return false;
        }
        self.applied = sequence;
        match outcome {
            FetchOutcome::Fetched(items) => {
                self.data = Some(Arc::new(items));
                self.last_error = None;
            }
            FetchOutcome::Unavailable(e) => {
                self.last_error = Some(e);
            }
        }
        true
    }

    /// Drop held data; tickets issued before this point can no longer land
    fn reset(&mut self) {
        self.applied = self.issued;
        self.data = None;
        self.last_error = None;
    }
}

#[derive(Default)]
struct State {
    owner: Option<String>,
    roster: Slot<PatientRecord>,
    readings: Slot<VitalReading>,
}

impl State {
    fn reset(&mut self) {
        self.owner = None;
        self.roster.reset();
        self.readings.reset();
    }
}

#[derive(Default)]
pub struct TelemetrySnapshot {
    state: Mutex<State>,
}

impl TelemetrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget everything held, including results still in flight
    pub fn reset(&self) {
        self.lock().reset();
        debug!("Telemetry snapshot reset");
    }

    /// Bind the snapshot to `owner`, resetting it when another identity held it.
    /// An unowned snapshot is adopted as is.
    pub fn scope_to(&self, owner: &str) {
        let mut state = self.lock();
        match state.owner.as_deref() {
            Some(current) if current == owner => return,
            Some(_) => {
                debug!(owner, "Telemetry snapshot changed owner");
                state.reset();
            }
            None => {}
        }
        state.owner = Some(owner.to_string());
    }

    pub fn begin_roster(&self) -> RosterTicket {
        RosterTicket(self.lock().roster.issue())
    }

    pub fn begin_readings(&self) -> ReadingsTicket {
        ReadingsTicket(self.lock().readings.issue())
    }

    /// Apply a roster result; returns false when a newer result already landed
    pub fn complete_roster(
        &self,
        ticket: RosterTicket,
        outcome: FetchOutcome<PatientRecord>,
    ) -> bool {
        let applied = self.lock().roster.complete(ticket.0, outcome);
        if !applied {
            debug!(sequence = ticket.0, "Discarding stale roster result");
        }
        applied
    }

    /// Apply a readings result; returns false when a newer result already landed
    pub fn complete_readings(
        &self,
        ticket: ReadingsTicket,
        outcome: FetchOutcome<VitalReading>,
    ) -> bool {
        let applied = self.lock().readings.complete(ticket.0, outcome);
        if !applied {
            debug!(sequence = ticket.0, "Discarding stale readings result");
        }
        applied
    }

    pub fn roster(&self) -> Option<Arc<Vec<PatientRecord>>> {
        self.lock().roster.data.clone()
    }

    pub fn readings(&self) -> Option<Arc<Vec<VitalReading>>> {
        self.lock().readings.data.clone()
    }

    pub fn roster_error(&self) -> Option<DomainError> {
        self.lock().roster.last_error.clone()
    }

    pub fn readings_error(&self) -> Option<DomainError> {
        self.lock().readings.last_error.clone()
    }

    pub fn input_state(&self) -> InputState {
        let state = self.lock();
        match (state.roster.data.is_some(), state.readings.data.is_some()) {
            (false, false) => InputState::Empty,
            (true, false) => InputState::RosterOnly,
            (false, true) => InputState::ReadingsOnly,
            (true, true) => InputState::Both,
        }
    }

    /// Merge whatever collections are held; a missing one counts as empty
    pub fn views(&self) -> Vec<PatientView> {
        let (roster, readings) = {
            let state = self.lock();
            (state.roster.data.clone(), state.readings.data.clone())
        };
        merge(
            roster.as_deref().map(Vec::as_slice).unwrap_or_default(),
            readings.as_deref().map(Vec::as_slice).unwrap_or_default(),
        )
    }

    pub fn dashboard(&self) -> DashboardResponse {
        let (roster, readings) = {
            let state = self.lock();
            (state.roster.data.clone(), state.readings.data.clone())
        };
        let patients = merge(
            roster.as_deref().map(Vec::as_slice).unwrap_or_default(),
            readings.as_deref().map(Vec::as_slice).unwrap_or_default(),
        );
        let summary = summarize(&patients);
        DashboardResponse {
            patients,
            summary,
            roster_available: roster.is_some(),
            readings_available: readings.is_some(),
        }
    }

    /// History of one roster patient from the held readings
    pub fn history(&self, query: &VitalHistoryQuery) -> Result<VitalHistoryResponse, DomainError> {
        let (roster, readings) = {
            let state = self.lock();
            (state.roster.data.clone(), state.readings.data.clone())
        };

        let known = roster
            .as_deref()
            .is_some_and(|r| r.iter().any(|p| p.id == query.patient_id));
        if !known {
            return Err(DomainError::PatientNotFound(query.patient_id.clone()));
        }

        Ok(history(
            &query.patient_id,
            readings.as_deref().map(Vec::as_slice).unwrap_or_default(),
            HISTORY_DISPLAY_LIMIT,
        ))
    }
}
