//! In-flight guard for user-triggered actions.
//!
//! A trigger is only started when [`InFlight::start`] accepts it; the control
//! that fires it renders disabled until its [`Ticket`] is settled. This keeps
//! a double click from submitting the same form twice.
//!
//! Clearing the guard (on logout) starts a new generation. Tickets from an
//! older generation no longer settle anything, so a response arriving after
//! logout neither applies its result nor releases an action registered after
//! the next login.

use std::collections::HashSet;

use store::Role;

/// Identity of an async action. Two triggers with equal values are the
/// "same" action for the purpose of the guard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PendingAction {
    Login,
    InitialLoad(Role),
    CreateTeacher,
    DeleteTeacher(i64),
    CreateStudent,
    DeleteStudent(i64),
    ImportStudents,
    CreateClass,
    CreateCourse,
    CreateTerm,
    CreateSession,
    FetchReport,
    SaveFlags,
    MarkRead(i64),
    SelectClass(i64),
    SelectSession(i64),
    SubmitAttendance(i64),
}

/// Receipt for a started action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    action: PendingAction,
    generation: u64,
}

impl Ticket {
    pub fn action(&self) -> &PendingAction {
        &self.action
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight {
    actions: HashSet<PendingAction>,
    generation: u64,
}

impl InFlight {
    /// Register `action`. Returns `false` when it is already running.
    pub fn begin(&mut self, action: PendingAction) -> bool {
        self.actions.insert(action)
    }

    /// Register `action` and hand out its ticket, or `None` when it is
    /// already running.
    pub fn start(&mut self, action: PendingAction) -> Option<Ticket> {
        self.begin(action.clone()).then(|| Ticket {
            action,
            generation: self.generation,
        })
    }

    /// Release the action behind `ticket`. Returns `false` and changes
    /// nothing when the guard was cleared after the ticket was issued.
    pub fn settle(&mut self, ticket: &Ticket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.finish(&ticket.action);
        true
    }

    pub fn finish(&mut self, action: &PendingAction) {
        self.actions.remove(action);
    }

    pub fn is_pending(&self, action: &PendingAction) -> bool {
        self.actions.contains(action)
    }

    pub fn is_idle(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.generation += 1;
    }
}
