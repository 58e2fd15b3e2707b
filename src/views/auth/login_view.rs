use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let security_key = use_state(String::new);

    let on_input = {
        let security_key = security_key.clone();
        let clear_error = auth.clear_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            security_key.set(input.value());
            clear_error.emit(());
        })
    };

    let on_submit = {
        let security_key = security_key.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit((*security_key).clone());
        })
    };

    html! {
        <div class="container py-5" style="max-width: 400px">
            <h2 class="mb-4 text-center">{"Login"}</h2>
            <form onsubmit={on_submit}>
                <div class="mb-3 position-relative">
                    <label for="securityKey" class="form-label">{"Security Key"}</label>
                    <input
                        type="password"
                        id="securityKey"
                        class="form-control"
                        value={(*security_key).clone()}
                        oninput={on_input}
                        placeholder="Enter security key"
                        required=true
                    />
                    if *auth.is_valid {
                        <strong
                            style="position: absolute; top: 38px; right: 12px; color: green; font-weight: bold; user-select: none"
                        >
                            {"valid_admin"}
                        </strong>
                    }
                </div>
                if let Some(error) = (*auth.error).clone() {
                    <div class="alert alert-danger">{error}</div>
                }
                <button type="submit" class="btn btn-primary w-100">{"Login"}</button>
            </form>
        </div>
    }
}
