const DASHBOARD_CONFIG_TOML: &str = include_str!(
  "../../assets/dashboard.toml"
);
const SEED_EVENTS_TOML: &str = include_str!(
  "../../assets/seed_events.toml"
);

#[derive(
  Clone, Debug, Deserialize, PartialEq,
)]
struct DashboardConfig {
  #[serde(
    default = "default_timezone"
  )]
  timezone:     String,
  #[serde(
    default = "default_week_start"
  )]
  week_start:   String,
  #[serde(
    default = "default_view_key"
  )]
  default_view: String,
  #[serde(default)]
  hours:        HoursConfig,
  #[serde(default)]
  sidebar:      SidebarConfig,
  #[serde(default)]
  display:      DisplayConfig,
  #[serde(default = "default_legend")]
  legend:       Vec<LegendEntry>
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      timezone:     default_timezone(),
      week_start:
        default_week_start(),
      default_view:
        default_view_key(),
      hours: HoursConfig::default(),
      sidebar:
        SidebarConfig::default(),
      display:
        DisplayConfig::default(),
      legend: default_legend()
    }
  }
}

/// Visible hour window of the day
/// and week grids.
#[derive(
  Clone,
  Copy,
  Debug,
  Deserialize,
  PartialEq,
)]
struct HoursConfig {
  #[serde(
    default = "default_hour_start"
  )]
  start:          u32,
  #[serde(default = "default_hour_end")]
  end:            u32,
  #[serde(
    default = "default_slot_height"
  )]
  slot_height_px: u32
}

impl Default for HoursConfig {
  fn default() -> Self {
    Self {
      start:          default_hour_start(),
      end:            default_hour_end(),
      slot_height_px:
        default_slot_height()
    }
  }
}

#[derive(
  Clone,
  Copy,
  Debug,
  Deserialize,
  PartialEq,
)]
struct SidebarConfig {
  #[serde(
    default = "default_sidebar_width"
  )]
  width_px:     f64,
  #[serde(
    default = "default_sidebar_min"
  )]
  min_width_px: f64,
  #[serde(
    default = "default_sidebar_max"
  )]
  max_width_px: f64
}

impl Default for SidebarConfig {
  fn default() -> Self {
    Self {
      width_px:
        default_sidebar_width(),
      min_width_px:
        default_sidebar_min(),
      max_width_px:
        default_sidebar_max()
    }
  }
}

#[derive(
  Clone,
  Copy,
  Debug,
  Deserialize,
  PartialEq,
)]
struct DisplayConfig {
  #[serde(
    default = "default_show_weekends"
  )]
  show_weekends: bool,
  #[serde(default)]
  use_24h_clock: bool
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self {
      show_weekends:
        default_show_weekends(),
      use_24h_clock: false
    }
  }
}

#[derive(
  Clone, Debug, Deserialize, PartialEq,
)]
struct LegendEntry {
  label: String,
  color: String
}

fn default_timezone() -> String {
  "UTC".to_string()
}

fn default_week_start() -> String {
  "sunday".to_string()
}

fn default_view_key() -> String {
  "month".to_string()
}

fn default_hour_start() -> u32 {
  0
}

fn default_hour_end() -> u32 {
  24
}

fn default_slot_height() -> u32 {
  80
}

fn default_sidebar_width() -> f64 {
  320.0
}

fn default_sidebar_min() -> f64 {
  280.0
}

fn default_sidebar_max() -> f64 {
  500.0
}

fn default_show_weekends() -> bool {
  true
}

fn default_legend() -> Vec<LegendEntry>
{
  vec![
    LegendEntry {
      label: "Mathematics"
        .to_string(),
      color: "#3b82f6".to_string()
    },
    LegendEntry {
      label: "Physics".to_string(),
      color: "#22c55e".to_string()
    },
    LegendEntry {
      label: "English".to_string(),
      color: "#f59e0b".to_string()
    },
    LegendEntry {
      label: "History".to_string(),
      color: "#a855f7".to_string()
    },
  ]
}

#[derive(Clone, PartialEq)]
struct ModalState {
  mode:  ModalMode,
  draft: EventDraft,
  error: Option<String>
}

#[derive(Clone, PartialEq)]
enum ModalMode {
  Add,
  Edit(Uuid)
}

impl ModalState {
  fn add(date: NaiveDate) -> Self {
    Self::add_at(date, 9)
  }

  fn add_at(
    date: NaiveDate,
    hour: u32
  ) -> Self {
    let end_hour = (hour + 1).min(23);
    Self {
      mode:  ModalMode::Add,
      draft: EventDraft {
        date: date
          .format("%Y-%m-%d")
          .to_string(),
        start_time: format!(
          "{hour}:00"
        ),
        end_time: format!(
          "{end_hour}:00"
        ),
        priority_key: "medium"
          .to_string(),
        ..EventDraft::default()
      },
      error: None
    }
  }

  fn edit(event: &Event) -> Self {
    Self {
      mode:  ModalMode::Edit(event.id),
      draft: EventDraft {
        title:        event
          .title
          .clone(),
        date:         event
          .start
          .date()
          .format("%Y-%m-%d")
          .to_string(),
        start_time:   format_clock_time(
          event.start.time(),
          true
        ),
        end_time:     format_clock_time(
          event.end.time(),
          true
        ),
        category:     event
          .category
          .clone(),
        priority_key: event
          .priority
          .as_key()
          .to_string(),
        description:  event
          .description
          .clone()
          .unwrap_or_default(),
        color:        event
          .color
          .clone()
          .unwrap_or_default()
      },
      error: None
    }
  }
}

/// Handler bundle threaded through
/// the calendar views. The drop
/// payload is optional; the app
/// falls back to the drag-in-flight
/// id when the transfer data is
/// unreadable.
#[derive(Clone, PartialEq)]
struct GridCallbacks {
  on_cell_click:    Callback<NaiveDate>,
  on_hour_click:
    Callback<(NaiveDate, u32)>,
  on_event_click:   Callback<Uuid>,
  on_drag_start:    Callback<Uuid>,
  on_drag_end:      Callback<()>,
  on_drag_over_day:
    Callback<Option<NaiveDate>>,
  on_drop_event: Callback<(
    Option<Uuid>,
    NaiveDate
  )>
}

/// Live pointer-capture drag on the
/// sidebar divider.
#[derive(Clone, Copy, PartialEq)]
struct ResizeDrag {
  pointer_id:  i32,
  start_x:     f64,
  start_width: f64
}
