use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Landing dashboard
#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <div class="container py-5">
            <h2 class="mb-5 text-center fw-bold">{"Admin Dashboard"}</h2>

            <div class="row justify-content-center">
                <div class="col-md-6 col-lg-4">
                    <div class="card border-0 shadow-sm rounded-4 bg-light h-100">
                        <div class="card-body text-center py-5">
                            <div class="mb-3">
                                <i class="fas fa-box-open fs-1 text-primary"></i>
                            </div>
                            <h5 class="card-title fw-bold mb-3">{"Manage Packages"}</h5>
                            <p class="card-text text-muted mb-4 px-2">
                                {"View and update shipping packages in the system with ease."}
                            </p>
                            <Link<Route> to={Route::Packages} classes="btn btn-primary rounded-pill px-4 py-2 shadow-sm">
                                {"Go to Package Manager"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
