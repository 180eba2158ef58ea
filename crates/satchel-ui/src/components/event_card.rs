use satchel_core::{
  datetime::format_clock_time,
  event::Event
};
use uuid::Uuid;
use web_sys::{
  DragEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
  pub event:         Event,
  /// Resolved category color; the
  /// card itself never consults the
  /// legend.
  pub color:         Option<String>,
  pub use_24h:       bool,
  pub on_click:      Callback<Uuid>,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>
}

#[function_component(EventCard)]
pub fn event_card(
  props: &EventCardProps
) -> Html {
  let event_id = props.event.id;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer
            .set_data(
              "text/plain",
              &event_id.to_string()
            );
          data_transfer
            .set_drop_effect("move");
        }
        on_drag_start.emit(event_id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let onclick = {
    let on_click =
      props.on_click.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_click.emit(event_id);
      }
    )
  };

  let style =
    props.color.as_ref().map(|color| {
      format!(
        "border-left-color:{color}"
      )
    });
  let time_range = format!(
    "{} - {}",
    format_clock_time(
      props.event.start.time(),
      props.use_24h
    ),
    format_clock_time(
      props.event.end.time(),
      props.use_24h
    )
  );

  html! {
      <div class={classes!("event-card", props.event.priority.badge_class())} draggable="true" {style} {ondragstart} {ondragend} {onclick}>
          <div class="event-title">{ &props.event.title }</div>
          <div class="event-time">{ time_range }</div>
          <span class="priority-badge">{ props.event.priority.label() }</span>
      </div>
  }
}
