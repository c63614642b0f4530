mod wheel_svg;
mod wheel_utils;

use web_sys::window;
use wheel_shared::PrizeCatalog;
use yew::prelude::*;

use crate::hooks::use_wheel;
use crate::styles;
use wheel_svg::WheelSvg;
use wheel_utils::{OddsLegend, ResultDisplay, SpinButton};

// Pointer and wheel wrapper styles
const CUSTOM_CSS: &str = r#"
.wheel-container {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.wheel-pointer {
    position: absolute;
    top: -12px;
    left: 50%;
    transform: translateX(-50%);
    width: 0;
    height: 0;
    border-left: 16px solid transparent;
    border-right: 16px solid transparent;
    border-top: 32px solid #f59e0b;
    filter: drop-shadow(0 2px 4px rgba(0, 0, 0, 0.35));
    z-index: 10;
}

.wheel-svg-wrapper {
    border-radius: 9999px;
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
    will-change: transform;
}
"#;

#[derive(Properties, PartialEq)]
pub struct SpinningWheelProps {
    pub catalog: PrizeCatalog,
}

#[function_component(SpinningWheel)]
pub fn spinning_wheel(props: &SpinningWheelProps) -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    let _ = head.append_child(&style);
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let wheel = use_wheel(&props.catalog);

    html! {
        <div class={styles::CARD}>
            <div class="wheel-container mx-auto mb-8">
                <div class="wheel-pointer"></div>
                <WheelSvg wheel={wheel.wheel.clone()} rotation={wheel.rotation} />
            </div>

            <div class="flex justify-center mt-4">
                <div class="w-full max-w-[300px]">
                    <SpinButton spinning={wheel.spinning} onclick={wheel.spin.clone()} />
                </div>
            </div>

            <ResultDisplay winner={wheel.winner.clone()} spinning={wheel.spinning} />

            <OddsLegend wheel={wheel.wheel.clone()} />
        </div>
    }
}
