use anyhow::{
  Context,
  anyhow
};
use chrono::{
  NaiveDate,
  NaiveDateTime
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  datetime::{
    add_days,
    parse_clock_time
  },
  event::{
    Event,
    EventKind,
    Priority,
    ValidEvent
  }
};

/// The single in-memory event list.
/// Mutated only from user-interaction
/// handlers on the UI thread.
#[derive(
  Clone, Debug, Default, PartialEq,
)]
pub struct EventBook {
  events: Vec<Event>
}

#[derive(Debug, Deserialize)]
struct SeedFile {
  #[serde(default)]
  events: Vec<SeedEvent>
}

/// One seed entry. Dates are day
/// offsets from "today" so the demo
/// data always lands on screen.
#[derive(Debug, Deserialize)]
struct SeedEvent {
  title:       String,
  day_offset:  i64,
  start:       String,
  end:         String,
  category:    String,
  priority:    String,
  #[serde(default)]
  description: Option<String>,
  #[serde(default)]
  color:       Option<String>
}

impl EventBook {
  pub fn from_seed_toml(
    raw: &str,
    today: NaiveDate
  ) -> anyhow::Result<Self> {
    let seed: SeedFile =
      toml::from_str(raw).context(
        "seed events are not valid \
         TOML"
      )?;
    let mut book = Self::default();
    for entry in seed.events {
      let day = add_days(
        today,
        entry.day_offset
      );
      let start = parse_clock_time(
        &entry.start
      )
      .ok_or_else(|| {
        anyhow!(
          "seed event {:?} has a bad \
           start time",
          entry.title
        )
      })?;
      let end = parse_clock_time(
        &entry.end
      )
      .ok_or_else(|| {
        anyhow!(
          "seed event {:?} has a bad \
           end time",
          entry.title
        )
      })?;
      let priority =
        Priority::from_key(
          &entry.priority
        )
        .ok_or_else(|| {
          anyhow!(
            "seed event {:?} has an \
             unknown priority",
            entry.title
          )
        })?;
      book.insert(ValidEvent {
        title: entry.title,
        date: day,
        start,
        end,
        category: entry.category,
        priority,
        description: entry
          .description,
        color: entry.color
      });
    }
    tracing::info!(
      events = book.len(),
      "seed events loaded"
    );
    Ok(book)
  }

  pub fn insert(
    &mut self,
    valid: ValidEvent
  ) -> &Event {
    let kind = EventKind::classify(
      &valid.title
    );
    let start = valid.start_at();
    let end = valid.end_at();
    let index = self.events.len();
    self.events.push(Event {
      id: Uuid::new_v4(),
      title: valid.title,
      start,
      end,
      category: valid.category,
      kind,
      priority: valid.priority,
      description: valid.description,
      color: valid.color
    });
    &self.events[index]
  }

  /// In-place edit keeping the id;
  /// the kind follows the new title.
  pub fn update(
    &mut self,
    id: Uuid,
    valid: ValidEvent
  ) -> bool {
    let Some(event) = self
      .events
      .iter_mut()
      .find(|event| event.id == id)
    else {
      return false;
    };
    let kind = EventKind::classify(
      &valid.title
    );
    event.start = valid.start_at();
    event.end = valid.end_at();
    event.title = valid.title;
    event.category = valid.category;
    event.kind = kind;
    event.priority = valid.priority;
    event.description =
      valid.description;
    event.color = valid.color;
    true
  }

  pub fn remove(
    &mut self,
    id: Uuid
  ) -> bool {
    let before = self.events.len();
    self
      .events
      .retain(|event| event.id != id);
    self.events.len() != before
  }

  /// Drag-and-drop day move. Clock
  /// time and duration are kept.
  pub fn move_to_day(
    &mut self,
    id: Uuid,
    day: NaiveDate
  ) -> bool {
    let Some(event) = self
      .events
      .iter_mut()
      .find(|event| event.id == id)
    else {
      return false;
    };
    let duration = event
      .end
      .signed_duration_since(
        event.start
      );
    event.start = NaiveDateTime::new(
      day,
      event.start.time()
    );
    event.end = event
      .start
      .checked_add_signed(duration)
      .unwrap_or(event.start);
    true
  }

  pub fn get(
    &self,
    id: Uuid
  ) -> Option<&Event> {
    self
      .events
      .iter()
      .find(|event| event.id == id)
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}
