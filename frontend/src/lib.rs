pub mod components;
pub mod config;
pub mod hooks;
pub mod styles;

use yew::prelude::*;
use crate::components::SpinningWheel;

#[function_component(App)]
pub fn app() -> Html {
    // Validate once, before anything is drawn
    let catalog = use_memo((), |_| {
        config::prize_catalog().map_err(|err| {
            log::error!("Refusing to render the wheel: {}", err);
            err
        })
    });

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-8")}>
                    {"Spin the Weighted Prize Wheel!"}
                </h1>
                {
                    match &*catalog {
                        Ok(catalog) => html! { <SpinningWheel catalog={catalog.clone()} /> },
                        Err(err) => html! {
                            <div class={styles::CARD_ERROR}>
                                {format!("The prize list could not be loaded: {}", err)}
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}
