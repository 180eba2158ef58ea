use anyhow::anyhow;
use chrono::{
  NaiveDate,
  NaiveDateTime,
  NaiveTime
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

use crate::datetime::parse_clock_time;

/// Classification derived from the
/// event title when an event is
/// created or edited. Renders only
/// read the stored enumerant.
#[derive(
  Clone,
  Copy,
  Debug,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
  Assignment,
  Exam,
  Other
}

impl EventKind {
  /// "assignment" wins over "exam"
  /// when a title mentions both.
  pub fn classify(title: &str) -> Self {
    let lowered = title.to_lowercase();
    if lowered.contains("assignment") {
      Self::Assignment
    } else if lowered.contains("exam") {
      Self::Exam
    } else {
      Self::Other
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Assignment => {
        "Assignment"
      }
      | Self::Exam => "Exam",
      | Self::Other => "Event"
    }
  }
}

#[derive(
  Clone,
  Copy,
  Debug,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High
}

impl Priority {
  pub fn all() -> [Self; 3] {
    [Self::Low, Self::Medium, Self::High]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    match raw {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  pub fn badge_class(
    self
  ) -> &'static str {
    match self {
      | Self::Low => "priority-low",
      | Self::Medium => {
        "priority-medium"
      }
      | Self::High => "priority-high"
    }
  }
}

#[derive(
  Clone,
  Debug,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct Event {
  pub id:          Uuid,
  pub title:       String,
  pub start:       NaiveDateTime,
  pub end:         NaiveDateTime,
  pub category:    String,
  pub kind:        EventKind,
  pub priority:    Priority,
  pub description: Option<String>,
  pub color:       Option<String>
}

/// Raw modal fields exactly as typed.
/// Nothing here is trusted until
/// `validate` turns it into a
/// `ValidEvent`.
#[derive(
  Clone, Debug, Default, PartialEq,
)]
pub struct EventDraft {
  pub title:        String,
  pub date:         String,
  pub start_time:   String,
  pub end_time:     String,
  pub category:     String,
  pub priority_key: String,
  pub description:  String,
  pub color:        String
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidEvent {
  pub title:       String,
  pub date:        NaiveDate,
  pub start:       NaiveTime,
  pub end:         NaiveTime,
  pub category:    String,
  pub priority:    Priority,
  pub description: Option<String>,
  pub color:       Option<String>
}

impl ValidEvent {
  pub fn start_at(
    &self
  ) -> NaiveDateTime {
    NaiveDateTime::new(
      self.date, self.start
    )
  }

  pub fn end_at(&self) -> NaiveDateTime {
    NaiveDateTime::new(
      self.date, self.end
    )
  }
}

impl EventDraft {
  /// First failing rule wins; the
  /// message is shown verbatim as the
  /// modal's inline error.
  pub fn validate(
    &self
  ) -> anyhow::Result<ValidEvent> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(anyhow!(
        "Title is required."
      ));
    }

    let category = self.category.trim();
    if category.is_empty() {
      return Err(anyhow!(
        "Course category is required."
      ));
    }

    let date =
      NaiveDate::parse_from_str(
        self.date.trim(),
        "%Y-%m-%d"
      )
      .map_err(|_| {
        anyhow!(
          "Date must look like \
           2024-03-15."
        )
      })?;

    let Some(start) =
      parse_clock_time(&self.start_time)
    else {
      return Err(anyhow!(
        "Start time must look like \
         9:00 or 2:30pm."
      ));
    };

    let Some(end) =
      parse_clock_time(&self.end_time)
    else {
      return Err(anyhow!(
        "End time must look like \
         10:30 or 4:00pm."
      ));
    };

    if end < start {
      return Err(anyhow!(
        "End time must not be before \
         start time."
      ));
    }

    let color =
      normalize_optional(&self.color);
    if let Some(value) = color.as_deref()
      && !is_hex_color(value)
    {
      return Err(anyhow!(
        "Color must be a hex value \
         like #4f46e5."
      ));
    }

    let Some(priority) =
      Priority::from_key(
        self.priority_key.trim()
      )
    else {
      return Err(anyhow!(
        "Unknown priority."
      ));
    };

    Ok(ValidEvent {
      title: title.to_string(),
      date,
      start,
      end,
      category: category.to_string(),
      priority,
      description: normalize_optional(
        &self.description
      ),
      color
    })
  }
}

fn normalize_optional(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

fn is_hex_color(value: &str) -> bool {
  value.len() == 7
    && value.starts_with('#')
    && value[1..]
      .chars()
      .all(|c| c.is_ascii_hexdigit())
}
