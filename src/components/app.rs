use yew::prelude::*;
use yew_router::prelude::*;

use super::ReplaceRedirect;
use crate::routes::{guard_redirect, Route};
use crate::services::is_authenticated;
use crate::utils::LocalStorage;
use crate::views::{Header, HomeView, LoginView, PackageListView, PackageUpdateView};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Session guard: the flag is read on every navigation
fn switch(route: Route) -> Html {
    if let Some(target) = guard_redirect(&route, is_authenticated(&LocalStorage)) {
        return html! { <ReplaceRedirect to={target} /> };
    }

    match route {
        Route::Login => html! { <LoginView /> },
        Route::Home => html! { <HomeView /> },
        Route::Packages => html! { <PackageListView /> },
        Route::Update { package_id } => html! { <PackageUpdateView package_id={package_id} /> },
        // guard_redirect always redirects these
        Route::NotFound => html! {},
    }
}
