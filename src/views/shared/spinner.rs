use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="d-flex justify-content-center align-items-center" style="height: 50vh">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{"Loading..."}</span>
            </div>
            if let Some(caption) = &props.caption {
                <span class="ms-3">{caption.clone()}</span>
            }
        </div>
    }
}
