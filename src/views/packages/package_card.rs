use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::models::{latest_status, Package};
use crate::routes::Route;
use crate::utils::datetime::format_display;

#[derive(Properties, PartialEq, Clone)]
pub struct PackageCardProps {
    pub package: Package,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let p = &props.package;
    let latest = latest_status(p);
    let last_update = latest
        .at
        .map(|at| format_display(&at))
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="col-md-6 col-xl-4">
            <div class="card shadow-sm h-100">
                <div class="card-header bg-white d-flex justify-content-between align-items-center">
                    <small class="text-muted">{format!("#{}", p.short_id())}</small>
                    <span class={latest.status.badge_class()}>{latest.status.label()}</span>
                </div>
                <div class="card-body">
                    <div class="d-flex align-items-center mb-3">
                        <div class="flex-grow-1">
                            <h6 class="mb-1">
                                <i class="fas fa-user me-2 text-primary"></i>
                                {p.sender_full_name.clone()}
                            </h6>
                            <small class="text-muted">{"Sender"}</small>
                        </div>
                        <i class="fas fa-arrow-right mx-2 text-muted"></i>
                        <div class="flex-grow-1 text-end">
                            <h6 class="mb-1">
                                <i class="fas fa-user me-2 text-success"></i>
                                {p.receiver_full_name.clone()}
                            </h6>
                            <small class="text-muted">{"Receiver"}</small>
                        </div>
                    </div>

                    <div class="mb-3">
                        <div class="d-flex justify-content-between">
                            <small class="text-muted">{"Type:"}</small>
                            <span class="fw-medium">{p.package_type.clone()}</span>
                        </div>
                        <div class="d-flex justify-content-between">
                            <small class="text-muted">{"Last Update:"}</small>
                            <span class="fw-medium">{last_update}</span>
                        </div>
                    </div>

                    <div class="d-flex justify-content-between align-items-center mt-3">
                        <a href={CONFIG.details_url(&p.id)} class="btn btn-sm btn-outline-secondary">
                            <i class="fas fa-eye me-1"></i>{" Details"}
                        </a>
                        <Link<Route> to={Route::Update { package_id: p.id.clone() }} classes="btn btn-sm btn-primary">
                            <i class="fas fa-edit me-1"></i>{" Update"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
