use yew::prelude::*;
use yew_router::prelude::*;

use super::UpdateField;
use crate::config::CONFIG;
use crate::hooks::{use_package_update, UpdatePage};
use crate::models::FormField;
use crate::routes::Route;
use crate::utils::{PACKAGE_NOT_FOUND_MESSAGE, UPDATE_SUCCESS_MESSAGE};
use crate::views::shared::Spinner;

#[derive(Properties, PartialEq)]
pub struct PackageUpdateViewProps {
    pub package_id: AttrValue,
}

#[function_component(PackageUpdateView)]
pub fn package_update_view(props: &PackageUpdateViewProps) -> Html {
    let package_id = props.package_id.to_string();
    let handle = use_package_update(package_id.clone());

    let state = (*handle.state).clone();

    match &state.page {
        UpdatePage::Loading => {
            return html! { <Spinner caption="Loading package details..." /> };
        }
        UpdatePage::NotFound => {
            return html! {
                <div class="container py-5 text-center">
                    <div class="alert alert-danger">{PACKAGE_NOT_FOUND_MESSAGE}</div>
                    <Link<Route> to={Route::Packages} classes="btn btn-primary mt-3">
                        {"Back to Packages"}
                    </Link<Route>>
                </div>
            };
        }
        UpdatePage::Ready(_) => {}
    }

    let on_submit = {
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_dismiss = handle.dismiss_error.reform(|_: MouseEvent| ());
    let error = state.error.clone();
    let field_error = |field: FormField| {
        error
            .as_ref()
            .filter(|e| e.field == Some(field))
            .map(|e| AttrValue::from(e.message.clone()))
    };

    html! {
        <div class="container py-5">
            <div class="row justify-content-center">
                <div class="col-lg-10">
                    <div class="card shadow-sm border-0">
                        <div class="card-header bg-white border-0">
                            <div class="d-flex justify-content-between align-items-center flex-wrap gap-2">
                                <h6 class="mb-0">
                                    <i class="fas fa-box me-2 text-primary"></i>
                                    {format!("Update Package #{}", package_id)}
                                </h6>
                                <div class="btn-group">
                                    <a
                                        href={CONFIG.tracking_url(&package_id)}
                                        class="btn btn-outline-info"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <i class="fas fa-search me-2"></i>
                                        {"Track Package"}
                                    </a>
                                    <a href={CONFIG.details_url(&package_id)} class="btn btn-outline-secondary">
                                        <i class="fas fa-eye me-2"></i>
                                        {"View Details"}
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="card-body">
                            if let Some(err) = &error {
                                <div class="alert alert-danger alert-dismissible fade show" role="alert">
                                    {err.message.clone()}
                                    <button type="button" class="btn-close" onclick={on_dismiss}></button>
                                </div>
                            }

                            if state.success {
                                <div class="alert alert-success alert-dismissible fade show" role="alert">
                                    <i class="fas fa-check-circle me-2"></i>
                                    {UPDATE_SUCCESS_MESSAGE}
                                </div>
                            }

                            <form onsubmit={on_submit}>
                                <div class="row g-4">
                                    { for FormField::ALL.iter().map(|&field| html! {
                                        <UpdateField
                                            key={field.key()}
                                            field={field}
                                            value={AttrValue::from(state.form.get(field).to_string())}
                                            error={field_error(field)}
                                            on_change={handle.on_change.clone()}
                                        />
                                    }) }

                                    <div class="col-12 mt-4">
                                        <div class="d-flex justify-content-between">
                                            <Link<Route> to={Route::Packages} classes="btn btn-outline-secondary">
                                                <i class="fas fa-arrow-left me-2"></i>
                                                {"Cancel"}
                                            </Link<Route>>
                                            <button type="submit" class="btn btn-primary px-4">
                                                <i class="fas fa-save me-2"></i>
                                                {"Update Package"}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
