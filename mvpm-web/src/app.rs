use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::router::{Route, switch};
use crate::services::{WebServices, build_services};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    // One service bundle per application root; every page reads it from
    // context instead of reaching for module globals.
    let services = (*use_memo((), |_| build_services())).clone();
    let route = use_route::<Route>();

    {
        let services = services.clone();
        use_effect_with(route.clone(), move |route| {
            if let Some(route) = route {
                let path = route.to_path();
                services.app.analytics().page_view(&path, route.title());
            }
            || ()
        });
    }

    html! {
        <ContextProvider<WebServices> context={services}>
            <Switch<Route> render={switch} />
            <Footer />
        </ContextProvider<WebServices>>
    }
}
