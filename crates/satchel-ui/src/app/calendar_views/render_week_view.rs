fn render_week_view(
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
  let window = visible_window(
    ViewMode::Week,
    anchor,
    week_start
  );
  let days: Vec<NaiveDate> = (0..7)
    .map(|offset| {
      add_days(window.start, offset)
    })
    .filter(|day| {
      show_weekends
        || !is_weekend(*day)
    })
    .collect();

  html! {
      <div class="week-view">
          <div class="week-header">
              {
                  for days.iter().map(|day| html! {
                      <div class={classes!("weekday-label", (*day == today).then_some("today"))}>
                          { day.format("%a %-d").to_string() }
                      </div>
                  })
              }
          </div>
          <div class="hour-grid">
              { render_hour_gutter(metrics, use_24h) }
              {
                  for days.iter().map(|day| render_day_column(
                      book, *day, metrics, legend, use_24h, drag_over, callbacks,
                  ))
              }
          </div>
      </div>
  }
}
