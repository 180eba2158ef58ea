#[derive(Properties, PartialEq)]
struct TopbarProps {
  range_label:    String,
  active_view:    ViewMode,
  on_prev:        Callback<MouseEvent>,
  on_today:       Callback<MouseEvent>,
  on_next:        Callback<MouseEvent>,
  on_select_view: Callback<ViewMode>,
  on_add_event:   Callback<MouseEvent>
}

#[function_component(Topbar)]
fn topbar(props: &TopbarProps) -> Html {
  html! {
      <header class="topbar">
          <span class="topbar-brand">{ "Canvas Calendar" }</span>
          <CalendarNavActions
              label={props.range_label.clone()}
              on_prev={props.on_prev.clone()}
              on_today={props.on_today.clone()}
              on_next={props.on_next.clone()}
          />
          <CalendarViewSwitch
              active={props.active_view}
              on_select={props.on_select_view.clone()}
          />
          <button
              class="btn primary"
              onclick={props.on_add_event.clone()}
          >
              { "+ Event" }
          </button>
      </header>
  }
}
