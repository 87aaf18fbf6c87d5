pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::wheel::SpinningWheel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <SpinningWheel />
            </div>
        </div>
    }
}
