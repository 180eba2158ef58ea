#[derive(Properties, PartialEq)]
struct DeadlinePanelProps {
  events:             Vec<Event>,
  today:              NaiveDate,
  filter:             DeadlineFilter,
  active_view:        ViewMode,
  show_weekends:      bool,
  use_24h:            bool,
  legend:             Vec<LegendEntry>,
  on_quick_add:       Callback<MouseEvent>,
  on_event_click:     Callback<Uuid>,
  on_filter_select:   Callback<DeadlineFilter>,
  on_select_view:     Callback<ViewMode>,
  on_toggle_weekends: Callback<web_sys::Event>,
  on_toggle_24h:      Callback<web_sys::Event>
}

#[function_component(DeadlinePanel)]
fn deadline_panel(props: &DeadlinePanelProps) -> Html {
  let todays = todays_events(&props.events, props.today);
  let upcoming =
    upcoming_deadlines(&props.events, props.today, props.filter);
  let counts = filter_counts(&props.events, props.today);

  html! {
      <>
          <button
              class="btn primary quick-add"
              onclick={props.on_quick_add.clone()}
          >
              { "Quick Add Event" }
          </button>

          <section class="panel-section">
              <h3 class="section-title">
                  { "Today's Events" }
                  <span class="count-badge">{ todays.len() }</span>
              </h3>
              {
                  if todays.is_empty() {
                      html! {
                          <p class="empty-note">
                              { "No events scheduled for today" }
                          </p>
                      }
                  } else {
                      html! {
                          { for todays.iter().map(|event| {
                              let event_id = event.id;
                              let on_event_click =
                                props.on_event_click.clone();
                              let onclick =
                                Callback::from(move |_: MouseEvent| {
                                  on_event_click.emit(event_id);
                                });
                              html! {
                                  <div class="today-row" {onclick}>
                                      <span class="event-title">
                                          { &event.title }
                                      </span>
                                      <span class="event-time">
                                          { format!(
                                              "{} - {}",
                                              format_clock_time(
                                                event.start.time(),
                                                props.use_24h
                                              ),
                                              format_clock_time(
                                                event.end.time(),
                                                props.use_24h
                                              )
                                          ) }
                                      </span>
                                  </div>
                              }
                          }) }
                      }
                  }
              }
          </section>

          <section class="panel-section">
              <h3 class="section-title">{ "Upcoming Deadlines" }</h3>
              <div class="filter-tabs">
                  {
                      for DeadlineFilter::tabs().into_iter().map(|tab| {
                          let on_filter_select =
                            props.on_filter_select.clone();
                          let onclick =
                            Callback::from(move |_: MouseEvent| {
                              on_filter_select.emit(tab);
                            });
                          html! {
                              <button
                                  class={classes!(
                                      "filter-tab",
                                      (tab == props.filter)
                                        .then_some("active")
                                  )}
                                  {onclick}
                              >
                                  { tab.label() }
                                  <span class="count-badge">
                                      { counts.for_filter(tab) }
                                  </span>
                              </button>
                          }
                      })
                  }
              </div>
              {
                  if upcoming.is_empty() {
                      html! {
                          <p class="empty-note">
                              { "No upcoming deadlines." }
                          </p>
                      }
                  } else {
                      html! {
                          { for upcoming.iter().map(|event| html! {
                              <DeadlineCard
                                  event={event.clone()}
                                  today={props.today}
                                  use_24h={props.use_24h}
                                  on_click={props.on_event_click.clone()}
                              />
                          }) }
                      }
                  }
              }
          </section>

          <SettingsSection
              active_view={props.active_view}
              show_weekends={props.show_weekends}
              use_24h={props.use_24h}
              legend={props.legend.clone()}
              on_select_view={props.on_select_view.clone()}
              on_toggle_weekends={props.on_toggle_weekends.clone()}
              on_toggle_24h={props.on_toggle_24h.clone()}
          />
      </>
  }
}
