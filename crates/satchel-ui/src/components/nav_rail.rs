use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

const NAV_ITEMS: [(
  &str,
  &str,
  &str
); 7] = [
  ("calendar", "\u{25a6}", "Calendar"),
  ("tasks", "\u{2611}", "Tasks"),
  ("stats", "\u{2197}", "Statistics"),
  (
    "clock",
    "\u{25f7}",
    "Time Tracking"
  ),
  ("chat", "\u{2709}", "Messages"),
  ("profile", "\u{25c9}", "Profile"),
  ("settings", "\u{2699}", "Settings"),
];

#[derive(Properties, PartialEq)]
pub struct NavRailProps {
  pub active:    String,
  pub on_select: Callback<String>
}

#[function_component(NavRail)]
pub fn nav_rail(
  props: &NavRailProps
) -> Html {
  let make_item = |key: &str,
                   glyph: &str,
                   label: &str| {
    let active = props.active == key;
    let on_select =
      props.on_select.clone();
    let key_string = key.to_string();
    html! {
        <button
            class={classes!("nav-item", active.then_some("active"))}
            title={label.to_string()}
            onclick={move |_| on_select.emit(key_string.clone())}
        >
            { glyph }
        </button>
    }
  };

  html! {
      <nav class="nav-rail">
          <div class="nav-brand">{ "S" }</div>
          {
              for NAV_ITEMS
                  .iter()
                  .map(|(key, glyph, label)| make_item(key, glyph, label))
          }
          <button
              class={classes!("nav-item", "nav-profile", (props.active == "profile").then_some("active"))}
              title="Your Profile"
              onclick={{
                  let on_select = props.on_select.clone();
                  move |_| on_select.emit("profile".to_string())
              }}
          >
              { "\u{25c9}" }
          </button>
      </nav>
  }
}
