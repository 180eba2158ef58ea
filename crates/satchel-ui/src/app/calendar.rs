fn load_dashboard_config()
-> DashboardConfig {
  match toml::from_str::<DashboardConfig>(
    DASHBOARD_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        timezone = %config.timezone,
        default_view =
          %config.default_view,
        "dashboard config loaded"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "dashboard config is \
         invalid; using defaults"
      );
      DashboardConfig::default()
    }
  }
}

fn load_seed_events(
  today: NaiveDate
) -> EventBook {
  EventBook::from_seed_toml(
    SEED_EVENTS_TOML,
    today
  )
  .unwrap_or_else(|error| {
    tracing::error!(
      %error,
      "seed events are invalid; \
       starting empty"
    );
    EventBook::default()
  })
}

fn dashboard_timezone(
  config: &DashboardConfig
) -> Tz {
  resolve_timezone(&config.timezone)
}

fn sanitize_week_start(
  raw: &str
) -> Weekday {
  parse_week_start(raw)
    .unwrap_or_else(|| {
      tracing::warn!(
        week_start = raw,
        "unknown week start; using \
         sunday"
      );
      Weekday::Sun
    })
}

fn sanitize_default_view(
  raw: &str
) -> ViewMode {
  ViewMode::from_key(raw)
    .unwrap_or_else(|| {
      tracing::warn!(
        view = raw,
        "unknown default view; using \
         month"
      );
      ViewMode::Month
    })
}

fn sanitize_hours(
  hours: &HoursConfig
) -> SlotMetrics {
  if hours.start >= hours.end
    || hours.end > 24
    || hours.slot_height_px == 0
  {
    tracing::warn!(
      start = hours.start,
      end = hours.end,
      slot_height_px =
        hours.slot_height_px,
      "unusable hour window; using \
       defaults"
    );
    return SlotMetrics {
      hour_start:
        default_hour_start(),
      hour_end:       default_hour_end(),
      hour_height_px:
        default_slot_height()
    };
  }
  SlotMetrics {
    hour_start:     hours.start,
    hour_end:       hours.end,
    hour_height_px:
      hours.slot_height_px
  }
}

fn sanitize_sidebar(
  sidebar: &SidebarConfig
) -> SidebarConfig {
  let mut out = *sidebar;
  let usable = out
    .width_px
    .is_finite()
    && out.min_width_px.is_finite()
    && out.max_width_px.is_finite()
    && out.min_width_px > 0.0
    && out.min_width_px
      < out.max_width_px;
  if !usable {
    tracing::warn!(
      min = out.min_width_px,
      max = out.max_width_px,
      width = out.width_px,
      "unusable sidebar widths; \
       using defaults"
    );
    out = SidebarConfig::default();
  }
  out.width_px = out.width_px.clamp(
    out.min_width_px,
    out.max_width_px
  );
  out
}

fn legend_color(
  legend: &[LegendEntry],
  category: &str
) -> Option<String> {
  legend
    .iter()
    .find(|entry| {
      entry
        .label
        .eq_ignore_ascii_case(category)
    })
    .map(|entry| entry.color.clone())
}

/// An explicit event color beats the
/// category legend.
fn event_color(
  event: &Event,
  legend: &[LegendEntry]
) -> Option<String> {
  event.color.clone().or_else(|| {
    legend_color(
      legend,
      &event.category
    )
  })
}

include!("calendar_views/render_calendar_view.rs");
include!("calendar_views/render_month_view.rs");
include!("calendar_views/render_week_view.rs");
include!("calendar_views/render_day_view.rs");
include!("calendar_views/weekday_labels.rs");
include!("calendar_views/format_event_datetime.rs");

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_parses() {
    let config =
      load_dashboard_config();
    assert_eq!(
      config.timezone,
      "America/New_York"
    );
    assert_eq!(
      config.week_start,
      "sunday"
    );
    assert_eq!(config.legend.len(), 4);
  }

  #[test]
  fn embedded_seeds_load() {
    let today =
      NaiveDate::from_ymd_opt(
        2024, 3, 15
      )
      .expect("valid date");
    let book =
      load_seed_events(today);
    assert_eq!(book.len(), 3);
  }

  #[test]
  fn hour_window_falls_back() {
    let good = sanitize_hours(
      &HoursConfig {
        start:          8,
        end:            20,
        slot_height_px: 64
      }
    );
    assert_eq!(good.hour_start, 8);
    assert_eq!(good.hour_end, 20);
    assert_eq!(
      good.hour_height_px,
      64
    );

    for bad in [
      HoursConfig {
        start:          20,
        end:            8,
        slot_height_px: 64
      },
      HoursConfig {
        start:          0,
        end:            25,
        slot_height_px: 64
      },
      HoursConfig {
        start:          0,
        end:            24,
        slot_height_px: 0
      }
    ] {
      let metrics =
        sanitize_hours(&bad);
      assert_eq!(
        metrics.hour_start,
        0
      );
      assert_eq!(
        metrics.hour_end,
        24
      );
      assert_eq!(
        metrics.hour_height_px,
        80
      );
    }
  }

  #[test]
  fn sidebar_widths_fall_back() {
    let clamped = sanitize_sidebar(
      &SidebarConfig {
        width_px:     900.0,
        min_width_px: 280.0,
        max_width_px: 500.0
      }
    );
    assert_eq!(
      clamped.width_px,
      500.0
    );

    let inverted = sanitize_sidebar(
      &SidebarConfig {
        width_px:     320.0,
        min_width_px: 500.0,
        max_width_px: 280.0
      }
    );
    assert_eq!(
      inverted,
      SidebarConfig::default()
    );
  }

  #[test]
  fn week_start_and_view_fall_back()
  {
    assert_eq!(
      sanitize_week_start("monday"),
      Weekday::Mon
    );
    assert_eq!(
      sanitize_week_start("someday"),
      Weekday::Sun
    );
    assert_eq!(
      sanitize_default_view("week"),
      ViewMode::Week
    );
    assert_eq!(
      sanitize_default_view("decade"),
      ViewMode::Month
    );
  }

  #[test]
  fn colors_prefer_event_over_legend()
  {
    let legend = default_legend();
    assert_eq!(
      legend_color(
        &legend,
        "mathematics"
      ),
      Some("#3b82f6".to_string())
    );
    assert_eq!(
      legend_color(&legend, "Band"),
      None
    );

    let today =
      NaiveDate::from_ymd_opt(
        2024, 3, 15
      )
      .expect("valid date");
    let mut book =
      load_seed_events(today);
    let tinted = book
      .events()[0]
      .clone();
    assert_eq!(
      event_color(&tinted, &legend),
      Some("#4f46e5".to_string())
    );

    let plain_id = tinted.id;
    let mut draft =
      ModalState::edit(&tinted).draft;
    draft.color = String::new();
    let valid = draft
      .validate()
      .expect("draft validates");
    assert!(
      book.update(plain_id, valid)
    );
    let plain = book
      .get(plain_id)
      .expect("event kept");
    assert_eq!(
      event_color(plain, &legend),
      Some("#3b82f6".to_string())
    );
  }

  #[test]
  fn edit_prefill_revalidates() {
    let today =
      NaiveDate::from_ymd_opt(
        2024, 3, 15
      )
      .expect("valid date");
    let book =
      load_seed_events(today);
    for event in book.events() {
      let state =
        ModalState::edit(event);
      let valid = state
        .draft
        .validate()
        .expect(
          "edit prefill must \
           revalidate"
        );
      assert_eq!(
        valid.start_at(),
        event.start
      );
      assert_eq!(
        valid.end_at(),
        event.end
      );
    }
  }
}
