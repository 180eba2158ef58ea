#[derive(Properties, PartialEq)]
struct DeadlineCardProps {
  event:    Event,
  today:    NaiveDate,
  use_24h:  bool,
  on_click: Callback<Uuid>
}

#[function_component(DeadlineCard)]
fn deadline_card(props: &DeadlineCardProps) -> Html {
  let event_id = props.event.id;
  let onclick = {
    let on_click = props.on_click.clone();
    Callback::from(move |_: MouseEvent| on_click.emit(event_id))
  };

  html! {
      <div
          class={classes!(
              "deadline-card",
              props.event.priority.badge_class()
          )}
          {onclick}
      >
          <div class="deadline-title">{ &props.event.title }</div>
          <div class="deadline-meta">
              <span>{ &props.event.category }</span>
              <span class="priority-badge">
                  { props.event.priority.label() }
              </span>
              <span class="kind-badge">{ props.event.kind.label() }</span>
          </div>
          <div class="deadline-meta">
              <span>
                  { format_event_datetime(props.event.start, props.use_24h) }
              </span>
              <span class="due-chip">
                  { due_label(props.event.start.date(), props.today) }
              </span>
          </div>
      </div>
  }
}
