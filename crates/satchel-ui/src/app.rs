use chrono::{
  Datelike,
  NaiveDate,
  NaiveDateTime,
  Weekday
};
use chrono_tz::Tz;
use gloo::console::log;
use satchel_core::{
  agenda::{
    DeadlineFilter,
    due_label,
    filter_counts,
    todays_events,
    upcoming_deadlines
  },
  datetime::{
    add_days,
    format_clock_time,
    hour_label,
    parse_week_start,
    resolve_timezone,
    today_in_timezone
  },
  event::{
    Event,
    EventDraft,
    Priority
  },
  grid::{
    GridCell,
    SlotMetrics,
    StepDirection,
    ViewMode,
    events_on_day,
    month_grid,
    range_label,
    slot_block,
    step_anchor,
    visible_window
  },
  store::EventBook
};
use serde::Deserialize;
use uuid::Uuid;
use web_sys::{
  DragEvent,
  InputEvent,
  MouseEvent,
  PointerEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};

use crate::components::{
  EventCard,
  NavRail
};

include!("app/types.rs");
include!("app/calendar.rs");
include!("app/view_components/topbar.rs");
include!("app/view_components/calendar_nav_actions.rs");
include!("app/view_components/calendar_view_switch.rs");
include!("app/view_components/deadline_panel.rs");
include!("app/view_components/deadline_card.rs");
include!("app/view_components/settings_section.rs");
include!("app/view_components/event_modal.rs");
include!("app/component.rs");

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
