use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::routes::Route;

/// Top navigation bar with the logout action
#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let is_collapsed = use_state(|| true);

    let on_toggle = {
        let is_collapsed = is_collapsed.clone();
        Callback::from(move |_: MouseEvent| is_collapsed.set(!*is_collapsed))
    };

    let on_logout = auth.logout.reform(|_: MouseEvent| ());

    html! {
        <nav class="navbar navbar-expand-lg bg-black shadow-sm px-4 py-3">
            <div class="container-fluid">
                <Link<Route> to={Route::Home} classes="navbar-brand text-white fw-bold fs-4">
                    {"Admin"}
                </Link<Route>>
                <button
                    class="navbar-toggler border-0"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded={(!*is_collapsed).to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span class="navbar-toggler-icon" style="filter: invert(1)"></span>
                </button>
                <div class={classes!((*is_collapsed).then_some("collapse"), "navbar-collapse")} id="navbarNav">
                    <ul class="navbar-nav ms-auto">
                        <li class="nav-item">
                            <button
                                class="btn btn-primary px-4 py-2"
                                style="border-radius: 5px"
                                onclick={on_logout}
                                aria-label="Logout"
                            >
                                {"Logout"}
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
