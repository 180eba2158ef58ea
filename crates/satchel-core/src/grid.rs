use chrono::{
  Datelike,
  NaiveDate,
  Timelike,
  Weekday
};

use crate::{
  datetime::{
    add_days,
    end_of_week,
    first_day_of_month,
    last_day_of_month,
    shift_months,
    start_of_week
  },
  event::Event
};

/// Blocks shorter than this stay
/// clickable in the hour grid.
const MIN_BLOCK_PX: f32 = 20.0;

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum ViewMode {
  Day,
  Week,
  Month
}

impl ViewMode {
  pub fn all() -> [Self; 3] {
    [Self::Day, Self::Week, Self::Month]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Week => "week",
      | Self::Month => "month"
    }
  }

  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    match raw {
      | "day" => Some(Self::Day),
      | "week" => Some(Self::Week),
      | "month" => Some(Self::Month),
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Day => "Day",
      | Self::Week => "Week",
      | Self::Month => "Month"
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum StepDirection {
  Prev,
  Next
}

/// Inclusive date span the active
/// view renders.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub struct DateWindow {
  pub start: NaiveDate,
  pub end:   NaiveDate
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub struct GridCell {
  pub date:     NaiveDate,
  pub in_month: bool
}

pub fn visible_window(
  view: ViewMode,
  anchor: NaiveDate,
  week_start: Weekday
) -> DateWindow {
  match view {
    | ViewMode::Day => DateWindow {
      start: anchor,
      end:   anchor
    },
    | ViewMode::Week => DateWindow {
      start: start_of_week(
        anchor, week_start
      ),
      end:   end_of_week(
        anchor, week_start
      )
    },
    | ViewMode::Month => DateWindow {
      start: start_of_week(
        first_day_of_month(anchor),
        week_start
      ),
      end:   end_of_week(
        last_day_of_month(anchor),
        week_start
      )
    }
  }
}

/// Whole weeks covering the anchor
/// month, leading and trailing days
/// included.
pub fn month_grid(
  anchor: NaiveDate,
  week_start: Weekday
) -> Vec<Vec<GridCell>> {
  let window = visible_window(
    ViewMode::Month,
    anchor,
    week_start
  );
  let mut rows = Vec::new();
  let mut row = Vec::with_capacity(7);
  let mut cursor = window.start;
  while cursor <= window.end {
    row.push(GridCell {
      date:     cursor,
      in_month: (
        cursor.year(),
        cursor.month()
      ) == (
        anchor.year(),
        anchor.month()
      )
    });
    if row.len() == 7 {
      rows.push(row);
      row = Vec::with_capacity(7);
    }
    cursor = add_days(cursor, 1);
  }
  rows
}

pub fn step_anchor(
  view: ViewMode,
  anchor: NaiveDate,
  direction: StepDirection
) -> NaiveDate {
  let step: i64 = match direction {
    | StepDirection::Prev => -1,
    | StepDirection::Next => 1
  };
  match view {
    | ViewMode::Day => {
      add_days(anchor, step)
    }
    | ViewMode::Week => {
      add_days(anchor, step * 7)
    }
    | ViewMode::Month => shift_months(
      anchor,
      step as i32
    )
  }
}

pub fn range_label(
  view: ViewMode,
  anchor: NaiveDate,
  week_start: Weekday
) -> String {
  match view {
    | ViewMode::Day => anchor
      .format("%B %-d, %Y")
      .to_string(),
    | ViewMode::Week => {
      let window = visible_window(
        ViewMode::Week,
        anchor,
        week_start
      );
      format!(
        "{} - {}",
        window
          .start
          .format("%B %-d"),
        window
          .end
          .format("%B %-d, %Y")
      )
    }
    | ViewMode::Month => anchor
      .format("%B %Y")
      .to_string()
  }
}

/// Calendar-day match on the start,
/// sorted by start. Ties keep their
/// original order.
pub fn events_on_day(
  events: &[Event],
  date: NaiveDate
) -> Vec<&Event> {
  let mut hits: Vec<&Event> = events
    .iter()
    .filter(|event| {
      event.start.date() == date
    })
    .collect();
  hits.sort_by_key(|event| event.start);
  hits
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub struct SlotMetrics {
  pub hour_start:     u32,
  pub hour_end:       u32,
  pub hour_height_px: u32
}

#[derive(
  Clone, Copy, Debug, PartialEq,
)]
pub struct SlotBlock {
  pub top_px:    f32,
  pub height_px: f32
}

/// Pixel geometry for one event in
/// the day/week hour grid, clamped
/// to the visible hour window.
pub fn slot_block(
  event: &Event,
  metrics: &SlotMetrics
) -> SlotBlock {
  let window_start =
    metrics.hour_start * 60;
  let window_end =
    metrics.hour_end * 60;
  let start = clock_minutes(event
    .start
    .time())
  .clamp(window_start, window_end);
  let end = clock_minutes(event
    .end
    .time())
  .clamp(window_start, window_end)
  .max(start);

  let hour_height =
    metrics.hour_height_px as f32;
  let top = (start - window_start)
    as f32
    / 60.0
    * hour_height;
  let height = ((end - start) as f32
    / 60.0
    * hour_height)
    .max(MIN_BLOCK_PX);
  SlotBlock {
    top_px:    top,
    height_px: height
  }
}

fn clock_minutes(
  time: chrono::NaiveTime
) -> u32 {
  time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDateTime,
    NaiveTime
  };
  use uuid::Uuid;

  use super::*;
  use crate::event::{
    EventKind,
    Priority
  };

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  fn event_at(
    title: &str,
    day: NaiveDate,
    start: (u32, u32),
    end: (u32, u32)
  ) -> Event {
    let clock = |(hour, minute)| {
      NaiveTime::from_hms_opt(
        hour, minute, 0
      )
      .expect("valid time")
    };
    Event {
      id:          Uuid::new_v4(),
      title:       title.to_string(),
      start:       NaiveDateTime::new(
        day,
        clock(start)
      ),
      end:         NaiveDateTime::new(
        day,
        clock(end)
      ),
      category:    "Mathematics"
        .to_string(),
      kind:        EventKind::classify(
        title
      ),
      priority:    Priority::Medium,
      description: None,
      color:       None
    }
  }

  #[test]
  fn view_mode_keys_round_trip() {
    for view in ViewMode::all() {
      assert_eq!(
        ViewMode::from_key(
          view.as_key()
        ),
        Some(view)
      );
    }
    assert_eq!(
      ViewMode::from_key("year"),
      None
    );
  }

  #[test]
  fn windows_cover_each_view() {
    let anchor = date(2024, 3, 15);
    assert_eq!(
      visible_window(
        ViewMode::Day,
        anchor,
        Weekday::Sun
      ),
      DateWindow {
        start: anchor,
        end:   anchor
      }
    );
    assert_eq!(
      visible_window(
        ViewMode::Week,
        anchor,
        Weekday::Sun
      ),
      DateWindow {
        start: date(2024, 3, 10),
        end:   date(2024, 3, 16)
      }
    );
    assert_eq!(
      visible_window(
        ViewMode::Month,
        anchor,
        Weekday::Sun
      ),
      DateWindow {
        start: date(2024, 2, 25),
        end:   date(2024, 4, 6)
      }
    );
  }

  #[test]
  fn month_grid_covers_whole_month() {
    let rows = month_grid(
      date(2024, 3, 15),
      Weekday::Sun
    );
    assert_eq!(rows.len(), 6);
    for row in &rows {
      assert_eq!(row.len(), 7);
    }
    let cells: Vec<&GridCell> = rows
      .iter()
      .flatten()
      .collect();
    assert_eq!(
      cells[0].date,
      date(2024, 2, 25)
    );
    assert!(!cells[0].in_month);
    assert_eq!(
      cells[cells.len() - 1].date,
      date(2024, 4, 6)
    );
    let march_first = cells
      .iter()
      .find(|cell| {
        cell.date == date(2024, 3, 1)
      })
      .expect("first of march");
    assert!(march_first.in_month);
    assert!(cells.iter().any(|cell| {
      cell.date == date(2024, 3, 31)
        && cell.in_month
    }));
  }

  #[test]
  fn steps_anchor_per_view() {
    let anchor = date(2024, 3, 15);
    assert_eq!(
      step_anchor(
        ViewMode::Day,
        anchor,
        StepDirection::Next
      ),
      date(2024, 3, 16)
    );
    assert_eq!(
      step_anchor(
        ViewMode::Week,
        anchor,
        StepDirection::Prev
      ),
      date(2024, 3, 8)
    );
    let clamped = step_anchor(
      ViewMode::Month,
      date(2024, 1, 31),
      StepDirection::Next
    );
    assert_eq!(
      clamped,
      date(2024, 2, 29)
    );
    assert_eq!(
      step_anchor(
        ViewMode::Month,
        clamped,
        StepDirection::Next
      ),
      date(2024, 3, 29)
    );
  }

  #[test]
  fn labels_each_range() {
    let anchor = date(2024, 3, 15);
    assert_eq!(
      range_label(
        ViewMode::Day,
        anchor,
        Weekday::Sun
      ),
      "March 15, 2024"
    );
    assert_eq!(
      range_label(
        ViewMode::Week,
        anchor,
        Weekday::Sun
      ),
      "March 10 - March 16, 2024"
    );
    assert_eq!(
      range_label(
        ViewMode::Month,
        anchor,
        Weekday::Sun
      ),
      "March 2024"
    );
  }

  #[test]
  fn buckets_events_by_day_stably() {
    let day = date(2024, 3, 15);
    let events = vec![
      event_at(
        "Late Lab",
        day,
        (13, 0),
        (15, 0)
      ),
      event_at(
        "First at Nine",
        day,
        (9, 0),
        (10, 0)
      ),
      event_at(
        "Second at Nine",
        day,
        (9, 0),
        (9, 30)
      ),
      event_at(
        "Other Day",
        date(2024, 3, 16),
        (9, 0),
        (10, 0)
      ),
    ];
    let hits =
      events_on_day(&events, day);
    let titles: Vec<&str> = hits
      .iter()
      .map(|event| {
        event.title.as_str()
      })
      .collect();
    assert_eq!(
      titles,
      vec![
        "First at Nine",
        "Second at Nine",
        "Late Lab"
      ]
    );
  }

  #[test]
  fn positions_slot_blocks() {
    let metrics = SlotMetrics {
      hour_start:     0,
      hour_end:       24,
      hour_height_px: 80
    };
    let block = slot_block(
      &event_at(
        "Math Block",
        date(2024, 3, 15),
        (10, 0),
        (11, 30)
      ),
      &metrics
    );
    assert_eq!(block.top_px, 800.0);
    assert_eq!(block.height_px, 120.0);
  }

  #[test]
  fn clamps_blocks_to_hour_window() {
    let metrics = SlotMetrics {
      hour_start:     8,
      hour_end:       20,
      hour_height_px: 80
    };
    let early = slot_block(
      &event_at(
        "Dawn Run",
        date(2024, 3, 15),
        (6, 0),
        (7, 0)
      ),
      &metrics
    );
    assert_eq!(early.top_px, 0.0);
    assert_eq!(early.height_px, 20.0);

    let spills = slot_block(
      &event_at(
        "Evening Review",
        date(2024, 3, 15),
        (19, 0),
        (22, 0)
      ),
      &metrics
    );
    assert_eq!(
      spills.top_px,
      11.0 * 80.0
    );
    assert_eq!(
      spills.height_px,
      80.0
    );
  }

  #[test]
  fn zero_duration_keeps_min_height()
  {
    let metrics = SlotMetrics {
      hour_start:     0,
      hour_end:       24,
      hour_height_px: 80
    };
    let block = slot_block(
      &event_at(
        "Checkpoint",
        date(2024, 3, 15),
        (9, 0),
        (9, 0)
      ),
      &metrics
    );
    assert_eq!(block.height_px, 20.0);
  }
}
