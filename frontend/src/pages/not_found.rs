use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <PageHero
            compact=true
            eyebrow="404"
            title="This circuit is open"
            subtitle="The page you were looking for has moved or never existed."
        >
            <Link<Route> to={Route::Home} classes="btn-primary">{"Back to the homepage"}</Link<Route>>
        </PageHero>
    }
}
