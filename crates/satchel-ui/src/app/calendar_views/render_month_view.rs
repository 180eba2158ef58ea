fn render_month_view(
  book: &EventBook,
  anchor: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  legend: &[LegendEntry],
  show_weekends: bool,
  use_24h: bool,
  drag_over: Option<NaiveDate>,
  callbacks: &GridCallbacks
) -> Html {
  let rows =
    month_grid(anchor, week_start);
  html! {
      <div class="month-grid">
          <div class="weekday-row">
              {
                  for weekday_labels(week_start)
                      .iter()
                      .filter(|label| show_weekends || !weekend_label(label))
                      .map(|label| html! {
                          <div class="weekday-label">{ *label }</div>
                      })
              }
          </div>
          {
              for rows.iter().map(|row| html! {
                  <div class="month-row">
                      {
                          for row
                              .iter()
                              .filter(|cell| show_weekends || !is_weekend(cell.date))
                              .map(|cell| render_month_cell(
                                  book, cell, today, legend, use_24h, drag_over, callbacks,
                              ))
                      }
                  </div>
              })
          }
      </div>
  }
}

fn render_month_cell(
  book: &EventBook,
  cell: &GridCell,
  today: NaiveDate,
  legend: &[LegendEntry],
  use_24h: bool,
  drag_over: Option<NaiveDate>,
  callbacks: &GridCallbacks
) -> Html {
  let date = cell.date;
  let onclick = {
    let on_cell_click =
      callbacks.on_cell_click.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cell_click.emit(date);
      }
    )
  };
  let (
    ondragover,
    ondragleave,
    ondrop
  ) = day_drop_handlers(
    date, callbacks
  );

  html! {
      <div
          class={classes!(
              "month-cell",
              (!cell.in_month).then_some("muted"),
              (date == today).then_some("today"),
              (drag_over == Some(date)).then_some("drop-target"),
          )}
          {onclick}
          {ondragover}
          {ondragleave}
          {ondrop}
      >
          <span class="cell-date">{ date.day() }</span>
          {
              for events_on_day(book.events(), date).into_iter().map(|event| {
                  let color = event_color(event, legend);
                  html! {
                      <EventCard
                          event={(*event).clone()}
                          {color}
                          use_24h={use_24h}
                          on_click={callbacks.on_event_click.clone()}
                          on_drag_start={callbacks.on_drag_start.clone()}
                          on_drag_end={callbacks.on_drag_end.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
