#[derive(Properties, PartialEq)]
struct CalendarViewSwitchProps {
  active:    ViewMode,
  on_select: Callback<ViewMode>
}

#[function_component(CalendarViewSwitch)]
fn calendar_view_switch(
  props: &CalendarViewSwitchProps
) -> Html {
  html! {
      <div class="view-switch">
          {
              for ViewMode::all().into_iter().map(|view| {
                  let on_select = props.on_select.clone();
                  let onclick =
                    Callback::from(move |_: MouseEvent| on_select.emit(view));
                  html! {
                      <button
                          class={classes!(
                              "btn",
                              (view == props.active).then_some("active")
                          )}
                          {onclick}
                      >
                          { view.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
