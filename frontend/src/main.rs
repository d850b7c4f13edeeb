use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod demo {
    pub mod validator;
    pub mod message;
    pub mod form_state;
    pub mod lifecycle;
    pub mod controller;
}
mod components {
    pub mod demo_dialog;
}
mod pages {
    pub mod landing;
}

use components::demo_dialog::DemoDialog;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, on_request_demo: Callback<()>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {on_request_demo} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing {on_request_demo} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_request_demo: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let request_demo = {
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_request_demo.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#".top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(10, 14, 39, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                }
                .nav-logo-mark {
                    width: 3rem;
                    height: 3rem;
                    padding: 0.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.2), rgba(96, 165, 250, 0.2));
                }
                .nav-logo-mark img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .nav-wordmark {
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #d1d5db;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .nav-demo-button {
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 2rem;
                    background: linear-gradient(to right, #3b82f6, #2563eb);
                    color: #fff;
                    font-weight: 300;
                    cursor: pointer;
                }"#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <div class="nav-logo-mark">
                        <img src="/assets/LOGO.jpeg" alt="" />
                    </div>
                    <span class="nav-wordmark">{config::PRODUCT_NAME}</span>
                </Link<Route>>
                <button class="nav-demo-button" onclick={request_demo}>
                    {"Request Demo"}
                </button>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let demo_open = use_state(|| false);

    let open_demo = {
        let demo_open = demo_open.clone();
        Callback::from(move |_: ()| demo_open.set(true))
    };
    let close_demo = {
        let demo_open = demo_open.clone();
        Callback::from(move |_: ()| demo_open.set(false))
    };

    let render = {
        let open_demo = open_demo.clone();
        move |route: Route| switch(route, open_demo.clone())
    };

    html! {
        <BrowserRouter>
            <Nav on_request_demo={open_demo} />
            <Switch<Route> {render} />
            <DemoDialog open={*demo_open} on_close={close_demo} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
