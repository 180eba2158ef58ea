fn render_day_view(
  book: &EventBook,
  anchor: NaiveDate,
  metrics: &SlotMetrics,
  legend: &[LegendEntry],
  use_24h: bool,
  drag_over: Option<NaiveDate>,
  callbacks: &GridCallbacks
) -> Html {
  html! {
      <div class="day-view">
          <h2 class="day-heading">
              { anchor.format("%A, %B %-d, %Y").to_string() }
          </h2>
          <div class="hour-grid">
              { render_hour_gutter(metrics, use_24h) }
              { render_day_column(book, anchor, metrics, legend, use_24h, drag_over, callbacks) }
          </div>
      </div>
  }
}

fn render_hour_gutter(
  metrics: &SlotMetrics,
  use_24h: bool
) -> Html {
  let row_height = format!(
    "height:{}px",
    metrics.hour_height_px
  );
  html! {
      <div class="hour-gutter">
          {
              for (metrics.hour_start..metrics.hour_end).map(|hour| html! {
                  <div class="hour-row-label" style={row_height.clone()}>
                      { hour_label(hour, use_24h) }
                  </div>
              })
          }
      </div>
  }
}

/// One date column: clickable hour
/// cells under absolutely positioned
/// event blocks.
fn render_day_column(
  book: &EventBook,
  day: NaiveDate,
  metrics: &SlotMetrics,
  legend: &[LegendEntry],
  use_24h: bool,
  drag_over: Option<NaiveDate>,
  callbacks: &GridCallbacks
) -> Html {
  let row_height = format!(
    "height:{}px",
    metrics.hour_height_px
  );
  let (
    ondragover,
    ondragleave,
    ondrop
  ) = day_drop_handlers(
    day, callbacks
  );

  html! {
      <div
          class={classes!("day-column", (drag_over == Some(day)).then_some("drop-target"))}
          {ondragover}
          {ondragleave}
          {ondrop}
      >
          {
              for (metrics.hour_start..metrics.hour_end).map(|hour| {
                  let on_hour_click = callbacks.on_hour_click.clone();
                  let onclick = Callback::from(move |_: MouseEvent| {
                      on_hour_click.emit((day, hour));
                  });
                  html! {
                      <div class="hour-cell" style={row_height.clone()} {onclick}></div>
                  }
              })
          }
          {
              for events_on_day(book.events(), day).into_iter().map(|event| {
                  let block = slot_block(event, metrics);
                  let color = event_color(event, legend);
                  html! {
                      <div
                          class="slot-block"
                          style={format!("top:{}px;height:{}px", block.top_px, block.height_px)}
                      >
                          <EventCard
                              event={(*event).clone()}
                              {color}
                              use_24h={use_24h}
                              on_click={callbacks.on_event_click.clone()}
                              on_drag_start={callbacks.on_drag_start.clone()}
                              on_drag_end={callbacks.on_drag_end.clone()}
                          />
                      </div>
                  }
              })
          }
      </div>
  }
}
