use std::rc::Rc;

use yew::prelude::*;

use crate::error::{ApiError, ValidationError};
use crate::models::{FormField, Package, PackageUpdateForm};
use crate::services::ApiClient;
use crate::utils::datetime::local_now;

/// Error banner content; `field` marks the offending input
#[derive(Clone, PartialEq, Debug)]
pub struct FormError {
    pub field: Option<FormField>,
    pub message: String,
}

/// What the update page renders
#[derive(Clone, PartialEq, Debug)]
pub enum UpdatePage {
    Loading,
    /// Any fetch failure, 404 or not
    NotFound,
    Ready(Package),
}

#[derive(Clone, PartialEq, Debug)]
pub struct UpdateState {
    pub package_id: String,
    pub page: UpdatePage,
    pub form: PackageUpdateForm,
    pub error: Option<FormError>,
    pub success: bool,
}

impl UpdateState {
    pub fn new(package_id: &str) -> Self {
        Self {
            package_id: package_id.to_string(),
            page: UpdatePage::Loading,
            form: PackageUpdateForm::default(),
            error: None,
            success: false,
        }
    }
}

pub enum UpdateAction {
    /// Start over for another package
    Load(String),
    Fetched { package_id: String, result: Result<Package, ApiError> },
    SetField(FormField, String),
    Rejected(ValidationError),
    Submitting,
    Saved { package_id: String, result: Result<(), ApiError> },
    DismissError,
}

impl Reducible for UpdateState {
    type Action = UpdateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UpdateAction::Load(package_id) => next = UpdateState::new(&package_id),
            // Responses for a package we already left are dropped
            UpdateAction::Fetched { package_id, .. } | UpdateAction::Saved { package_id, .. }
                if package_id != self.package_id =>
            {
                return self;
            }
            UpdateAction::Fetched { result, .. } => match result {
                Ok(package) => {
                    next.form = PackageUpdateForm::from_package(&package);
                    next.page = UpdatePage::Ready(package);
                }
                Err(e) => {
                    next.page = UpdatePage::NotFound;
                    next.error = Some(FormError { field: None, message: e.to_string() });
                }
            },
            UpdateAction::SetField(field, value) => next.form.set(field, value),
            UpdateAction::Rejected(e) => {
                next.success = false;
                next.error = Some(FormError { field: Some(e.field), message: e.message });
            }
            UpdateAction::Submitting => {
                next.success = false;
                next.error = None;
            }
            UpdateAction::Saved { result, .. } => match result {
                Ok(()) => next.success = true,
                Err(e) => next.error = Some(FormError { field: None, message: e.to_string() }),
            },
            UpdateAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}

pub struct UsePackageUpdateHandle {
    pub state: UseReducerHandle<UpdateState>,
    pub on_change: Callback<(FormField, String)>,
    pub submit: Callback<()>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_package_update(package_id: String) -> UsePackageUpdateHandle {
    let state = {
        let package_id = package_id.clone();
        use_reducer(move || UpdateState::new(&package_id))
    };

    // Fetch + pre-fill whenever the id changes
    {
        let state = state.clone();
        use_effect_with(package_id, move |id| {
            let id = id.clone();
            state.dispatch(UpdateAction::Load(id.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_package(&id).await;
                if let Err(e) = &result {
                    log::error!("❌ Error fetching package {}: {}", id, e);
                }
                state.dispatch(UpdateAction::Fetched { package_id: id, result });
            });
            || ()
        });
    }

    let on_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            state.dispatch(UpdateAction::SetField(field, value));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let payload = state.form.clone();
            if let Err(e) = payload.validate(local_now()) {
                log::warn!("⚠️ Validation failed: {}", e);
                state.dispatch(UpdateAction::Rejected(e));
                return;
            }

            state.dispatch(UpdateAction::Submitting);
            let id = state.package_id.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().update_package(&id, &payload).await;
                if let Err(e) = &result {
                    log::error!("❌ Update error: {}", e);
                }
                state.dispatch(UpdateAction::Saved { package_id: id, result });
            });
        })
    };

    let dismiss_error = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(UpdateAction::DismissError))
    };

    UsePackageUpdateHandle {
        state,
        on_change,
        submit,
        dismiss_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str) -> Package {
        Package {
            id: id.into(),
            last_known_location: Some("Hub".into()),
            ..Default::default()
        }
    }

    fn start(id: &str) -> Rc<UpdateState> {
        Rc::new(UpdateState::new(id))
    }

    #[test]
    fn starts_loading() {
        assert_eq!(start("p1").page, UpdatePage::Loading);
    }

    #[test]
    fn not_found_renders_fallback() {
        let state = start("p1").reduce(UpdateAction::Fetched {
            package_id: "p1".into(),
            result: Err(ApiError::NotFound),
        });
        assert_eq!(state.page, UpdatePage::NotFound);
        assert_eq!(state.error.as_ref().unwrap().field, None);
    }

    #[test]
    fn network_failure_renders_fallback() {
        let state = start("p1").reduce(UpdateAction::Fetched {
            package_id: "p1".into(),
            result: Err(ApiError::Network("Failed to fetch".into())),
        });
        assert_eq!(state.page, UpdatePage::NotFound);
        assert_eq!(state.error.as_ref().unwrap().message, "Failed to fetch");
    }

    #[test]
    fn fetched_package_prefills_form() {
        let state = start("p1").reduce(UpdateAction::Fetched {
            package_id: "p1".into(),
            result: Ok(package("p1")),
        });
        assert_eq!(state.page, UpdatePage::Ready(package("p1")));
        assert_eq!(state.form.last_known_location, "Hub");
    }

    #[test]
    fn stale_fetch_is_ignored() {
        let state = start("p1")
            .reduce(UpdateAction::Load("p2".into()))
            .reduce(UpdateAction::Fetched { package_id: "p1".into(), result: Ok(package("p1")) });
        assert_eq!(state.page, UpdatePage::Loading);
        assert_eq!(state.package_id, "p2");
    }

    #[test]
    fn switching_package_clears_banners() {
        let state = start("p1")
            .reduce(UpdateAction::Fetched { package_id: "p1".into(), result: Ok(package("p1")) })
            .reduce(UpdateAction::Saved { package_id: "p1".into(), result: Ok(()) });
        assert!(state.success);

        let state = state.reduce(UpdateAction::Load("p2".into()));
        assert!(!state.success);
        assert_eq!(state.error, None);
        assert_eq!(state.form, PackageUpdateForm::default());
    }

    #[test]
    fn consecutive_edits_are_all_kept() {
        let state = start("p1")
            .reduce(UpdateAction::SetField(FormField::LastKnownLocation, "Depot".into()))
            .reduce(UpdateAction::SetField(FormField::DepartedDateTime, "2025-05-31T07:00".into()));
        assert_eq!(state.form.last_known_location, "Depot");
        assert_eq!(state.form.departed_date_time, "2025-05-31T07:00");
    }

    #[test]
    fn rejected_submit_marks_field() {
        let state = start("p1").reduce(UpdateAction::Rejected(ValidationError::invalid(
            FormField::CancelledDateTime,
        )));
        let error = state.error.clone().unwrap();
        assert_eq!(error.field, Some(FormField::CancelledDateTime));
        assert_eq!(error.message, "Cancelled Date Time is invalid");
        assert!(!state.success);
    }

    #[test]
    fn failed_save_shows_server_message() {
        let state = start("p1")
            .reduce(UpdateAction::Submitting)
            .reduce(UpdateAction::Saved {
                package_id: "p1".into(),
                result: Err(ApiError::Status { status: 400, message: "Bad date".into() }),
            });
        assert!(!state.success);
        assert_eq!(state.error.as_ref().unwrap().message, "Bad date");

        let state = state.reduce(UpdateAction::DismissError);
        assert_eq!(state.error, None);
    }
}
