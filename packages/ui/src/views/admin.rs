use api::StepDraft;
use dioxus::prelude::*;
use store::GuideStep;

use crate::context::use_app;

#[component]
fn DraftField(placeholder: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "input",
            placeholder: placeholder,
            value: value,
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

/// Admin page: list backend steps and create new ones.
#[component]
pub fn AdminView() -> Element {
    let ctx = use_app();
    let mut steps = use_signal(Vec::<GuideStep>::new);
    let mut draft = use_signal(StepDraft::default);

    // Load steps from the backend on mount
    let _loader = use_resource(move || async move {
        let backend = ctx.backend();
        steps.set(api::load_steps(&backend).await);
    });

    let handle_create = move |_: MouseEvent| {
        spawn(async move {
            let backend = ctx.backend();
            let existing = steps.peek().len();
            match api::submit_draft(&backend, &draft(), existing).await {
                Ok(Some(created)) => {
                    ctx.ensure_checklist_key(&created.key);
                    draft.set(StepDraft::default());
                    steps.set(api::load_steps(&backend).await);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to create step: {e}"),
            }
        });
    };

    let current = draft();
    let rows: Vec<(String, GuideStep)> = steps()
        .into_iter()
        .map(|step| (step.id.clone().unwrap_or_else(|| step.key.clone()), step))
        .collect();

    rsx! {
        div {
            class: "page page-wide",
            h2 { class: "page-title", "Admin: Manage Guide Steps" }
            div {
                class: "admin-grid",
                div {
                    class: "card admin-form",
                    DraftField {
                        placeholder: "key",
                        value: current.key.clone(),
                        oninput: move |v| draft.write().key = v,
                    }
                    DraftField {
                        placeholder: "title",
                        value: current.title.clone(),
                        oninput: move |v| draft.write().title = v,
                    }
                    DraftField {
                        placeholder: "description",
                        value: current.description.clone(),
                        oninput: move |v| draft.write().description = v,
                    }
                    DraftField {
                        placeholder: "estimate_days",
                        value: current.estimate_days.clone(),
                        oninput: move |v| draft.write().estimate_days = v,
                    }
                    DraftField {
                        placeholder: "cost_estimate",
                        value: current.cost_estimate.clone(),
                        oninput: move |v| draft.write().cost_estimate = v,
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        disabled: !current.is_submittable(),
                        onclick: handle_create,
                        "Add Step"
                    }
                }
                div {
                    class: "admin-list",
                    for (row_key, step) in rows {
                        div {
                            key: "{row_key}",
                            class: "card",
                            div { class: "admin-step-title", "{step.title}" }
                            div { class: "muted", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
