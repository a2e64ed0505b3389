use super::state::{CatalogStatus, SelectionChange};
use super::view_model::ConfiguratorViewModel;
use crate::shared::components::ui::{Button, Input, OptionBadge, Select};
use leptos::prelude::*;

#[component]
pub fn CabinetConfigurator() -> impl IntoView {
    let vm = ConfiguratorViewModel::new();
    vm.load_catalog();

    let status = vm.status();

    move || match status.get() {
        CatalogStatus::Loading => view! {
            <div class="configurator__status">"Loading options..."</div>
        }
        .into_any(),
        CatalogStatus::Failed(message) => view! {
            <div class="configurator__status configurator__status--error">{message}</div>
        }
        .into_any(),
        CatalogStatus::Ready => view! {
            <div class="configurator">
                <SelectionPanel vm=vm />
                <PreviewPanel vm=vm />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SelectionPanel(vm: ConfiguratorViewModel) -> impl IntoView {
    let cabinet_code = vm.field(|s| s.selection.cabinet_code.clone());
    let size_key = vm.field(|s| s.selection.size_key.clone());
    let material = vm.field(|s| s.selection.material.clone());
    let color = vm.field(|s| s.selection.color.clone());
    let customer = vm.field(|s| s.selection.customer.clone());
    let notes = vm.field(|s| s.selection.notes.clone());

    let sizes = vm.size_options();
    let size_options = Signal::derive(move || {
        sizes
            .get()
            .into_iter()
            .map(|o| (o.key, o.label))
            .collect::<Vec<_>>()
    });
    let materials = vm.material_options();
    let colors = vm.color_options();
    let has_module = vm.has_active_module();
    let can_save = vm.can_save();
    let saving = vm.saving();
    let saved_id = vm.saved_id();
    let save_error = vm.save_error();

    let as_pairs = |values: Vec<String>| -> Vec<(String, String)> {
        values.into_iter().map(|v| (v.clone(), v)).collect()
    };
    let dependent_placeholder = move |label: &'static str| {
        Signal::derive(move || {
            if has_module.get() {
                label.to_string()
            } else {
                "Select size first".to_string()
            }
        })
    };

    view! {
        <div class="configurator__panel">
            <h2 class="configurator__title">"Select Options"</h2>

            <Select
                id="cabinet"
                label="Cabinet Type"
                value=cabinet_code
                options=vm.cabinet_options()
                on_change=Callback::new(move |v: String| vm.select(SelectionChange::Cabinet(v)))
            />

            <Select
                id="size"
                label="Size"
                value=size_key
                options=size_options
                placeholder=Signal::derive(|| "Select a size".to_string())
                on_change=Callback::new(move |v: String| vm.select(SelectionChange::Size(v)))
            />

            <Select
                id="material"
                label="Material"
                value=material
                options=Signal::derive(move || as_pairs(materials.get()))
                placeholder=dependent_placeholder("Select material")
                disabled=Signal::derive(move || !has_module.get())
                on_change=Callback::new(move |v: String| vm.select(SelectionChange::Material(v)))
            />

            <Select
                id="color"
                label="Color"
                value=color
                options=Signal::derive(move || as_pairs(colors.get()))
                placeholder=dependent_placeholder("Select color")
                disabled=Signal::derive(move || !has_module.get())
                on_change=Callback::new(move |v: String| vm.select(SelectionChange::Color(v)))
            />

            <div class="configurator__row">
                <Input
                    id="customer"
                    label="Customer (optional)"
                    value=customer
                    placeholder="e.g. ACME Kitchens"
                    on_input=Callback::new(move |v: String| vm.select(SelectionChange::Customer(v)))
                />
                <Input
                    id="notes"
                    label="Notes (optional)"
                    value=notes
                    placeholder="Add any notes"
                    on_input=Callback::new(move |v: String| vm.select(SelectionChange::Notes(v)))
                />
            </div>

            <Button
                class="configurator__save"
                disabled=Signal::derive(move || !can_save.get() || saving.get())
                on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.save_command())
            >
                {move || if saving.get() { "Saving..." } else { "Save Configuration" }}
            </Button>

            {move || saved_id.get().map(|id| view! {
                <p class="configurator__saved">
                    "Saved! ID: "<span class="mono">{id}</span>
                </p>
            })}
            {move || save_error.get().map(|e| view! {
                <p class="configurator__error">{e}</p>
            })}
        </div>
    }
}

#[component]
fn PreviewPanel(vm: ConfiguratorViewModel) -> impl IntoView {
    let cabinet_name = vm.cabinet_name();
    let size_label = vm.size_label();
    let materials = vm.material_options();
    let colors = vm.color_options();
    let summary = vm.selection_summary();

    view! {
        <div class="configurator__panel">
            <h2 class="configurator__title">"Preview"</h2>
            <div class="preview">
                <div>
                    <p class="preview__caption">"Cabinet"</p>
                    <p class="preview__value">{move || cabinet_name.get().unwrap_or_else(|| "-".to_string())}</p>
                </div>
                <div>
                    <p class="preview__caption">"Size"</p>
                    <p class="preview__value">{move || size_label.get().unwrap_or_else(|| "-".to_string())}</p>
                </div>
                <div class="preview__badges">
                    <For
                        each=move || materials.get()
                        key=|m| m.clone()
                        children=|m| view! { <OptionBadge>{m}</OptionBadge> }
                    />
                </div>
                <div class="preview__badges">
                    <For
                        each=move || colors.get()
                        key=|c| c.clone()
                        children=|c| view! { <OptionBadge>{c}</OptionBadge> }
                    />
                </div>
                {move || summary.get().map(|text| view! {
                    <div class="preview__selection">
                        <p class="preview__caption">"Your selection"</p>
                        <p class="preview__value">{text}</p>
                    </div>
                })}
            </div>
        </div>
    }
}
