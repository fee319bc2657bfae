use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off before the meeting started."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to the homepage"}
            </Link<Route>>
        </div>
    }
}
