#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_dashboard_config);
  let today = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      today_in_timezone(
        dashboard_timezone(
          &config_snapshot
        )
      )
    })
  };
  let view = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      sanitize_default_view(
        &config_snapshot.default_view
      )
    })
  };
  let anchor = {
    let today_snapshot = *today;
    use_state(move || today_snapshot)
  };
  let book = {
    let today_snapshot = *today;
    use_state(move || {
      load_seed_events(today_snapshot)
    })
  };
  let modal = use_state(|| {
    Option::<ModalState>::None
  });
  let deadline_filter =
    use_state(|| DeadlineFilter::All);
  let nav_active = use_state(|| {
    "calendar".to_string()
  });
  let show_weekends = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      config_snapshot
        .display
        .show_weekends
    })
  };
  let use_24h = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      config_snapshot
        .display
        .use_24h_clock
    })
  };
  let sidebar_width = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      sanitize_sidebar(
        &config_snapshot.sidebar
      )
      .width_px
    })
  };
  let resize_drag = use_state(|| {
    Option::<ResizeDrag>::None
  });
  let dragging_event = use_state(|| {
    Option::<Uuid>::None
  });
  let drag_over_day = use_state(|| {
    Option::<NaiveDate>::None
  });

  let week_start = sanitize_week_start(
    &config.week_start
  );
  let metrics =
    sanitize_hours(&config.hours);
  let sidebar_limits =
    sanitize_sidebar(&config.sidebar);

  let on_prev = {
    let view = view.clone();
    let anchor = anchor.clone();
    Callback::from(
      move |_: MouseEvent| {
        anchor.set(step_anchor(
          *view,
          *anchor,
          StepDirection::Prev
        ));
      }
    )
  };
  let on_next = {
    let view = view.clone();
    let anchor = anchor.clone();
    Callback::from(
      move |_: MouseEvent| {
        anchor.set(step_anchor(
          *view,
          *anchor,
          StepDirection::Next
        ));
      }
    )
  };
  let on_today = {
    let anchor = anchor.clone();
    let today = today.clone();
    Callback::from(
      move |_: MouseEvent| {
        anchor.set(*today);
      }
    )
  };
  let on_select_view = {
    let view = view.clone();
    Callback::from(
      move |mode: ViewMode| {
        ui_debug(
          "view-switch",
          mode.as_key()
        );
        view.set(mode);
      }
    )
  };
  let on_select_nav = {
    let nav_active = nav_active.clone();
    Callback::from(
      move |key: String| {
        ui_debug("nav-select", &key);
        nav_active.set(key);
      }
    )
  };

  let on_cell_click = {
    let modal = modal.clone();
    Callback::from(
      move |date: NaiveDate| {
        modal.set(Some(
          ModalState::add(date)
        ));
      }
    )
  };
  let on_hour_click = {
    let modal = modal.clone();
    Callback::from(
      move |(date, hour): (
        NaiveDate,
        u32
      )| {
        modal.set(Some(
          ModalState::add_at(
            date, hour
          )
        ));
      }
    )
  };
  let on_event_click = {
    let modal = modal.clone();
    let book = book.clone();
    Callback::from(move |id: Uuid| {
      if let Some(event) = book.get(id)
      {
        modal.set(Some(
          ModalState::edit(event)
        ));
      }
    })
  };
  let on_add_event = {
    let modal = modal.clone();
    let anchor = anchor.clone();
    Callback::from(
      move |_: MouseEvent| {
        modal.set(Some(
          ModalState::add(*anchor)
        ));
      }
    )
  };

  let on_modal_close = {
    let modal = modal.clone();
    Callback::from(
      move |_: MouseEvent| {
        modal.set(None);
      }
    )
  };
  let on_modal_save = {
    let modal = modal.clone();
    let book = book.clone();
    Callback::from(
      move |_: MouseEvent| {
        let Some(state) =
          (*modal).clone()
        else {
          return;
        };
        match state.draft.validate() {
          | Ok(valid) => {
            let mut next =
              (*book).clone();
            match state.mode {
              | ModalMode::Add => {
                let inserted =
                  next.insert(valid);
                ui_debug(
                  "event-save",
                  &inserted.title
                );
              }
              | ModalMode::Edit(
                id
              ) => {
                if !next
                  .update(id, valid)
                {
                  tracing::warn!(
                    %id,
                    "edited event \
                     vanished before \
                     save"
                  );
                }
                ui_debug(
                  "event-save",
                  &id.to_string()
                );
              }
            }
            book.set(next);
            modal.set(None);
          }
          | Err(error) => {
            modal.set(Some(
              ModalState {
                error: Some(
                  error.to_string()
                ),
                ..state
              }
            ));
          }
        }
      }
    )
  };
  let on_modal_delete = {
    let modal = modal.clone();
    let book = book.clone();
    Callback::from(
      move |_: MouseEvent| {
        let Some(state) =
          (*modal).clone()
        else {
          return;
        };
        if let ModalMode::Edit(id) =
          state.mode
        {
          let mut next =
            (*book).clone();
          if next.remove(id) {
            ui_debug(
              "event-delete",
              &id.to_string()
            );
            book.set(next);
          }
        }
        modal.set(None);
      }
    )
  };

  let on_filter_select = {
    let deadline_filter =
      deadline_filter.clone();
    Callback::from(
      move |filter: DeadlineFilter| {
        deadline_filter.set(filter);
      }
    )
  };
  let on_toggle_weekends = {
    let show_weekends =
      show_weekends.clone();
    Callback::from(
      move |_: web_sys::Event| {
        show_weekends
          .set(!*show_weekends);
      }
    )
  };
  let on_toggle_24h = {
    let use_24h = use_24h.clone();
    Callback::from(
      move |_: web_sys::Event| {
        use_24h.set(!*use_24h);
      }
    )
  };

  let on_drag_start = {
    let dragging_event =
      dragging_event.clone();
    Callback::from(move |id: Uuid| {
      tracing::debug!(
        %id,
        "event drag start"
      );
      dragging_event.set(Some(id));
    })
  };
  let on_drag_end = {
    let dragging_event =
      dragging_event.clone();
    let drag_over_day =
      drag_over_day.clone();
    Callback::from(move |_| {
      tracing::debug!(
        "event drag end"
      );
      dragging_event.set(None);
      drag_over_day.set(None);
    })
  };
  let on_drag_over_day = {
    let drag_over_day =
      drag_over_day.clone();
    Callback::from(
      move |target: Option<
        NaiveDate
      >| {
        if *drag_over_day != target {
          drag_over_day.set(target);
        }
      }
    )
  };
  let on_drop_event = {
    let book = book.clone();
    let dragging_event =
      dragging_event.clone();
    let drag_over_day =
      drag_over_day.clone();
    Callback::from(
      move |(payload, day): (
        Option<Uuid>,
        NaiveDate
      )| {
        let id = payload
          .or(*dragging_event);
        dragging_event.set(None);
        drag_over_day.set(None);

        let Some(id) = id else {
          tracing::warn!(
            %day,
            "drop carried no usable \
             event id"
          );
          return;
        };
        let mut next =
          (*book).clone();
        if next.move_to_day(id, day) {
          ui_debug(
            "event-drop",
            &format!("{id} on {day}")
          );
          book.set(next);
        } else {
          tracing::warn!(
            %id,
            "dropped event is \
             unknown"
          );
        }
      }
    )
  };

  let on_divider_pointer_down = {
    let resize_drag =
      resize_drag.clone();
    let sidebar_width =
      sidebar_width.clone();
    Callback::from(
      move |event: PointerEvent| {
        event.prevent_default();
        if let Some(target) = event
          .target_dyn_into::<web_sys::Element>()
        {
          let _ = target
            .set_pointer_capture(
              event.pointer_id()
            );
        }
        resize_drag.set(Some(
          ResizeDrag {
            pointer_id:  event
              .pointer_id(),
            start_x:     f64::from(
              event.client_x()
            ),
            start_width:
              *sidebar_width
          }
        ));
      }
    )
  };
  let on_divider_pointer_move = {
    let resize_drag =
      resize_drag.clone();
    let sidebar_width =
      sidebar_width.clone();
    Callback::from(
      move |event: PointerEvent| {
        let Some(drag) = *resize_drag
        else {
          return;
        };
        if drag.pointer_id
          != event.pointer_id()
        {
          return;
        }
        // Dragging left widens the
        // sidebar.
        let delta = drag.start_x
          - f64::from(
            event.client_x()
          );
        let width = (drag.start_width
          + delta)
          .clamp(
            sidebar_limits
              .min_width_px,
            sidebar_limits
              .max_width_px
          );
        sidebar_width.set(width);
      }
    )
  };
  let on_divider_pointer_up = {
    let resize_drag =
      resize_drag.clone();
    Callback::from(
      move |event: PointerEvent| {
        let Some(drag) = *resize_drag
        else {
          return;
        };
        if drag.pointer_id
          == event.pointer_id()
        {
          resize_drag.set(None);
        }
      }
    )
  };

  let callbacks = GridCallbacks {
    on_cell_click,
    on_hour_click,
    on_event_click: on_event_click
      .clone(),
    on_drag_start,
    on_drag_end,
    on_drag_over_day,
    on_drop_event
  };

  html! {
      <div class="dashboard">
          <NavRail
              active={(*nav_active).clone()}
              on_select={on_select_nav}
          />
          <div class="dashboard-main">
              <Topbar
                  range_label={range_label(*view, *anchor, week_start)}
                  active_view={*view}
                  on_prev={on_prev}
                  on_today={on_today}
                  on_next={on_next}
                  on_select_view={on_select_view.clone()}
                  on_add_event={on_add_event.clone()}
              />
              <div class="dashboard-body">
                  <main class="calendar-panel">
                      {
                          render_calendar_view(
                              *view,
                              &book,
                              *anchor,
                              *today,
                              week_start,
                              &metrics,
                              &config.legend,
                              *show_weekends,
                              *use_24h,
                              *drag_over_day,
                              &callbacks
                          )
                      }
                  </main>
                  <div
                      class="sidebar-divider"
                      onpointerdown={on_divider_pointer_down}
                      onpointermove={on_divider_pointer_move}
                      onpointerup={on_divider_pointer_up}
                  ></div>
                  <aside
                      class="deadline-sidebar"
                      style={format!("width:{}px", *sidebar_width)}
                  >
                      <DeadlinePanel
                          events={book.events().to_vec()}
                          today={*today}
                          filter={*deadline_filter}
                          active_view={*view}
                          show_weekends={*show_weekends}
                          use_24h={*use_24h}
                          legend={config.legend.clone()}
                          on_quick_add={on_add_event}
                          on_event_click={on_event_click}
                          on_filter_select={on_filter_select}
                          on_select_view={on_select_view}
                          on_toggle_weekends={on_toggle_weekends}
                          on_toggle_24h={on_toggle_24h}
                      />
                  </aside>
              </div>
          </div>
          <EventModal
              modal={modal.clone()}
              on_save={on_modal_save}
              on_delete={on_modal_delete}
              on_close={on_modal_close}
          />
      </div>
  }
}
