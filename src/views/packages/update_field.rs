use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::FormField;

#[derive(Properties, PartialEq)]
pub struct UpdateFieldProps {
    pub field: FormField,
    pub value: AttrValue,
    /// Validation message when this input caused the last failure
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_change: Callback<(FormField, String)>,
}

#[function_component(UpdateField)]
pub fn update_field(props: &UpdateFieldProps) -> Html {
    let field = props.field;

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="col-md-6">
            <div class="form-floating">
                <input
                    type={field.input_type()}
                    id={field.key()}
                    name={field.key()}
                    value={props.value.clone()}
                    oninput={on_input}
                    class={classes!("form-control", props.error.is_some().then_some("is-invalid"))}
                    placeholder={field.label()}
                />
                <label for={field.key()}>
                    <i class={format!("{} me-2", field.icon())}></i>
                    {field.label()}
                </label>
                if let Some(error) = &props.error {
                    <div class="invalid-feedback">{error.clone()}</div>
                }
            </div>
        </div>
    }
}
