use yew::prelude::*;

use super::PackageCard;
use crate::hooks::use_packages;
use crate::views::shared::Spinner;

#[function_component(PackageListView)]
pub fn package_list_view() -> Html {
    let handle = use_packages();
    let state = (*handle.state).clone();

    if state.loading {
        return html! { <Spinner /> };
    }

    if let Some(error) = state.error {
        return html! {
            <div class="container py-5 text-center">
                <div class="alert alert-danger">{error}</div>
                <button class="btn btn-primary mt-3" onclick={handle.retry.clone()}>
                    {"Retry"}
                </button>
            </div>
        };
    }

    html! {
        <div class="container py-5">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2 class="mb-0">{"Package Management"}</h2>
            </div>

            if state.packages.is_empty() {
                <div class="text-center py-5">
                    <i class="fas fa-box-open fa-3x text-muted mb-3"></i>
                    <h4>{"No packages found"}</h4>
                </div>
            } else {
                <div class="row g-4">
                    { for state.packages.iter().map(|pkg| html! {
                        <PackageCard key={pkg.id.clone()} package={pkg.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}
