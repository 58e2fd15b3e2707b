use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps {
    pub to: Route,
}

/// Like `Redirect`, but replaces the history entry so "back" skips the guarded page
#[function_component(ReplaceRedirect)]
pub fn replace_redirect(props: &ReplaceRedirectProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        if let Some(nav) = navigator {
            log::info!("🔒 Redirecting to {}", to.to_path());
            nav.replace(to);
        }
        || ()
    });

    html! {}
}
