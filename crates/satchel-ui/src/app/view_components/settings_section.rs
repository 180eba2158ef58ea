#[derive(Properties, PartialEq)]
struct SettingsSectionProps {
  active_view:        ViewMode,
  show_weekends:      bool,
  use_24h:            bool,
  legend:             Vec<LegendEntry>,
  on_select_view:     Callback<ViewMode>,
  on_toggle_weekends: Callback<web_sys::Event>,
  on_toggle_24h:      Callback<web_sys::Event>
}

#[function_component(SettingsSection)]
fn settings_section(props: &SettingsSectionProps) -> Html {
  let open = use_state(|| true);
  let toggle_open = {
    let open = open.clone();
    Callback::from(move |_: MouseEvent| open.set(!*open))
  };

  let body = if *open {
    html! {
        <>
            <div class="settings-tabs">
                {
                    for ViewMode::all().into_iter().map(|view| {
                        let on_select_view =
                          props.on_select_view.clone();
                        let onclick =
                          Callback::from(move |_: MouseEvent| {
                            on_select_view.emit(view);
                          });
                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    (view == props.active_view)
                                      .then_some("active")
                                )}
                                {onclick}
                            >
                                { view.label() }
                            </button>
                        }
                    })
                }
            </div>
            {
                for props.legend.iter().map(|entry| html! {
                    <div class="legend-row">
                        <span
                            class="legend-dot"
                            style={format!(
                                "background-color:{}", entry.color
                            )}
                        ></span>
                        { &entry.label }
                    </div>
                })
            }
            <label class="toggle-row">
                { "Show weekends" }
                <input
                    type="checkbox"
                    checked={props.show_weekends}
                    onchange={props.on_toggle_weekends.clone()}
                />
            </label>
            <label class="toggle-row">
                { "24-hour format" }
                <input
                    type="checkbox"
                    checked={props.use_24h}
                    onchange={props.on_toggle_24h.clone()}
                />
            </label>
        </>
    }
  } else {
    html! {}
  };

  html! {
      <section class="panel-section">
          <button class="settings-header" onclick={toggle_open}>
              { "Calendar Settings" }
              <span>{ if *open { "\u{25be}" } else { "\u{25b8}" } }</span>
          </button>
          { body }
      </section>
  }
}
