//! Calendar event data model.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A calendar event extracted from natural-language text.
///
/// All three fields are guaranteed present after a successful extraction; a
/// non-conforming model reply fails the extraction instead of producing a
/// partially populated event. The `date` field is free text as returned by
/// the model, not a normalized calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CalendarEvent {
    /// Short label for the event.
    pub name: String,
    /// When the event occurs, as free text (e.g., "Friday").
    pub date: String,
    /// Named attendees, in the order the model listed them.
    pub participants: Vec<String>,
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} with {}",
            self.name,
            self.date,
            self.participants.join(", ")
        )
    }
}
