//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler is pure over UI state: it never writes to the store
//! or touches the terminal itself. Instead it returns [`Action`]s for the
//! runtime loop to execute, which keeps every state transition testable
//! without a live store or terminal.

/// Commands produced by the event handler for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write a new current season into the store.
    ///
    /// This is the only store field consumers set after load; the store
    /// ignores years outside the season list.
    SetYear(u16),

    /// Leave the event loop and restore the terminal.
    Quit,
}
