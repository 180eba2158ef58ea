fn render_calendar_view(
  view: ViewMode,
  book: &EventBook,
  anchor: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  metrics: &SlotMetrics,
  legend: &[LegendEntry],
  show_weekends: bool,
  use_24h: bool,
  drag_over: Option<NaiveDate>,
  callbacks: &GridCallbacks
) -> Html {
  match view {
    | ViewMode::Month => {
      render_month_view(
        book,
        anchor,
        today,
        week_start,
        legend,
        show_weekends,
        use_24h,
        drag_over,
        callbacks
      )
    }
    | ViewMode::Week => {
      render_week_view(
        book,
        anchor,
        today,
        week_start,
        metrics,
        legend,
        show_weekends,
        use_24h,
        drag_over,
        callbacks
      )
    }
    | ViewMode::Day => {
      render_day_view(
        book,
        anchor,
        metrics,
        legend,
        use_24h,
        drag_over,
        callbacks
      )
    }
  }
}

fn drop_payload(
  event: &DragEvent
) -> Option<Uuid> {
  let payload = event
    .data_transfer()
    .and_then(|transfer| {
      transfer
        .get_data("text/plain")
        .ok()
    })?;
  match Uuid::parse_str(payload.trim())
  {
    | Ok(id) => Some(id),
    | Err(error) => {
      tracing::warn!(
        %error,
        payload,
        "ignoring drop with \
         unreadable payload"
      );
      None
    }
  }
}

/// Dragover, dragleave and drop
/// handlers shared by month cells
/// and day columns.
fn day_drop_handlers(
  day: NaiveDate,
  callbacks: &GridCallbacks
) -> (
  Callback<DragEvent>,
  Callback<DragEvent>,
  Callback<DragEvent>
) {
  let ondragover = {
    let on_drag_over_day = callbacks
      .on_drag_over_day
      .clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over_day
          .emit(Some(day));
      }
    )
  };
  let ondragleave = {
    let on_drag_over_day = callbacks
      .on_drag_over_day
      .clone();
    Callback::from(
      move |_: DragEvent| {
        on_drag_over_day.emit(None);
      }
    )
  };
  let ondrop = {
    let on_drop_event =
      callbacks.on_drop_event.clone();
    let on_drag_end =
      callbacks.on_drag_end.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drop_event.emit((
          drop_payload(&event),
          day
        ));
        on_drag_end.emit(());
      }
    )
  };
  (ondragover, ondragleave, ondrop)
}
