use chrono::NaiveDate;

use crate::event::{
  Event,
  EventKind
};

/// Where an event sits relative to
/// "today", by calendar day only.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum DayBucket {
  Past,
  Today,
  Upcoming
}

pub fn bucket_for(
  event: &Event,
  today: NaiveDate
) -> DayBucket {
  let day = event.start.date();
  if day < today {
    DayBucket::Past
  } else if day == today {
    DayBucket::Today
  } else {
    DayBucket::Upcoming
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum DeadlineFilter {
  All,
  Assignments,
  Exams,
  Events
}

impl DeadlineFilter {
  pub fn tabs() -> [Self; 4] {
    [
      Self::All,
      Self::Assignments,
      Self::Exams,
      Self::Events
    ]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Assignments => {
        "Assignments"
      }
      | Self::Exams => "Exams",
      | Self::Events => "Events"
    }
  }

  pub fn matches(
    self,
    kind: EventKind
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Assignments => {
        kind == EventKind::Assignment
      }
      | Self::Exams => {
        kind == EventKind::Exam
      }
      | Self::Events => {
        kind == EventKind::Other
      }
    }
  }
}

pub fn todays_events(
  events: &[Event],
  today: NaiveDate
) -> Vec<Event> {
  let mut hits: Vec<Event> = events
    .iter()
    .filter(|event| {
      bucket_for(event, today)
        == DayBucket::Today
    })
    .cloned()
    .collect();
  hits.sort_by_key(|event| event.start);
  hits
}

/// Strictly-after-today events that
/// pass the kind filter, soonest
/// first. Ties keep insertion order.
pub fn upcoming_deadlines(
  events: &[Event],
  today: NaiveDate,
  filter: DeadlineFilter
) -> Vec<Event> {
  let mut hits: Vec<Event> = events
    .iter()
    .filter(|event| {
      bucket_for(event, today)
        == DayBucket::Upcoming
        && filter.matches(event.kind)
    })
    .cloned()
    .collect();
  hits.sort_by_key(|event| event.start);
  hits
}

#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  PartialEq,
  Eq,
)]
pub struct FilterCounts {
  pub all:         usize,
  pub assignments: usize,
  pub exams:       usize,
  pub events:      usize
}

impl FilterCounts {
  pub fn for_filter(
    self,
    filter: DeadlineFilter
  ) -> usize {
    match filter {
      | DeadlineFilter::All => self.all,
      | DeadlineFilter::Assignments => {
        self.assignments
      }
      | DeadlineFilter::Exams => {
        self.exams
      }
      | DeadlineFilter::Events => {
        self.events
      }
    }
  }
}

/// Tab badge counts over the
/// upcoming bucket only.
pub fn filter_counts(
  events: &[Event],
  today: NaiveDate
) -> FilterCounts {
  let mut counts =
    FilterCounts::default();
  for event in events {
    if bucket_for(event, today)
      != DayBucket::Upcoming
    {
      continue;
    }
    counts.all += 1;
    match event.kind {
      | EventKind::Assignment => {
        counts.assignments += 1;
      }
      | EventKind::Exam => {
        counts.exams += 1;
      }
      | EventKind::Other => {
        counts.events += 1;
      }
    }
  }
  counts
}

pub fn due_label(
  date: NaiveDate,
  today: NaiveDate
) -> String {
  let days = date
    .signed_duration_since(today)
    .num_days();
  match days {
    | 0 => "Today".to_string(),
    | 1 => "Tomorrow".to_string(),
    | d if d > 1 => {
      format!("{d} days")
    }
    | d => {
      format!("{} days ago", -d)
    }
  }
}
