#[derive(Properties, PartialEq)]
struct EventModalProps {
  modal:     UseStateHandle<Option<ModalState>>,
  on_save:   Callback<MouseEvent>,
  on_delete: Callback<MouseEvent>,
  on_close:  Callback<MouseEvent>
}

#[function_component(EventModal)]
fn event_modal(props: &EventModalProps) -> Html {
  let Some(state) = (*props.modal).clone() else {
    return html! {};
  };

  // Every field edit clears the previous validation error.
  let edit_field = |apply: fn(&mut EventDraft, String)| {
    let modal = props.modal.clone();
    Callback::from(move |event: InputEvent| {
      let value = event
        .target_unchecked_into::<web_sys::HtmlInputElement>()
        .value();
      let Some(mut state) = (*modal).clone() else {
        return;
      };
      apply(&mut state.draft, value);
      state.error = None;
      modal.set(Some(state));
    })
  };

  let on_priority_change = {
    let modal = props.modal.clone();
    Callback::from(move |event: web_sys::Event| {
      let value = event
        .target_unchecked_into::<web_sys::HtmlSelectElement>()
        .value();
      let Some(mut state) = (*modal).clone() else {
        return;
      };
      state.draft.priority_key = value;
      state.error = None;
      modal.set(Some(state));
    })
  };

  let stop_bubble =
    Callback::from(|event: MouseEvent| event.stop_propagation());

  let heading = match state.mode {
    | ModalMode::Add => "Add Event",
    | ModalMode::Edit(_) => "Edit Event"
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <div class="modal" onclick={stop_bubble}>
              <div class="header">{ heading }</div>
              <label class="field">
                  { "Title" }
                  <input
                      value={state.draft.title.clone()}
                      oninput={edit_field(|draft, value| {
                          draft.title = value;
                      })}
                      placeholder="Math Assignment"
                  />
              </label>
              <label class="field">
                  { "Course category" }
                  <input
                      value={state.draft.category.clone()}
                      oninput={edit_field(|draft, value| {
                          draft.category = value;
                      })}
                      placeholder="Mathematics"
                  />
              </label>
              <label class="field">
                  { "Date" }
                  <input
                      type="date"
                      value={state.draft.date.clone()}
                      oninput={edit_field(|draft, value| {
                          draft.date = value;
                      })}
                  />
              </label>
              <div class="field-inline">
                  <label class="field">
                      { "Start time" }
                      <input
                          value={state.draft.start_time.clone()}
                          oninput={edit_field(|draft, value| {
                              draft.start_time = value;
                          })}
                          placeholder="9:00"
                      />
                  </label>
                  <label class="field">
                      { "End time" }
                      <input
                          value={state.draft.end_time.clone()}
                          oninput={edit_field(|draft, value| {
                              draft.end_time = value;
                          })}
                          placeholder="10:30"
                      />
                  </label>
              </div>
              <label class="field">
                  { "Priority" }
                  <select onchange={on_priority_change}>
                      {
                          for Priority::all().into_iter().map(|priority| {
                              html! {
                                  <option
                                      value={priority.as_key()}
                                      selected={
                                          state.draft.priority_key
                                            == priority.as_key()
                                      }
                                  >
                                      { priority.label() }
                                  </option>
                              }
                          })
                      }
                  </select>
              </label>
              <label class="field">
                  { "Description" }
                  <input
                      value={state.draft.description.clone()}
                      oninput={edit_field(|draft, value| {
                          draft.description = value;
                      })}
                      placeholder="Optional notes"
                  />
              </label>
              <label class="field">
                  { "Color" }
                  <input
                      value={state.draft.color.clone()}
                      oninput={edit_field(|draft, value| {
                          draft.color = value;
                      })}
                      placeholder="#4f46e5"
                  />
              </label>
              {
                  if let Some(error) = &state.error {
                      html! { <p class="form-error">{ error }</p> }
                  } else {
                      html! {}
                  }
              }
              <div class="footer">
                  <button class="btn" onclick={props.on_close.clone()}>
                      { "Cancel" }
                  </button>
                  {
                      if matches!(state.mode, ModalMode::Edit(_)) {
                          html! {
                              <button
                                  class="btn danger"
                                  onclick={props.on_delete.clone()}
                              >
                                  { "Delete" }
                              </button>
                          }
                      } else {
                          html! {}
                      }
                  }
                  <button
                      class="btn primary"
                      onclick={props.on_save.clone()}
                  >
                      { "Save" }
                  </button>
              </div>
          </div>
      </div>
  }
}
