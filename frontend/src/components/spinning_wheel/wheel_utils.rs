use std::rc::Rc;

use wheel_shared::Wheel;
use yew::prelude::*;

use crate::styles;

/// Formats a probability in `[0, 1]` as a percentage with at most one decimal.
pub fn format_chance(probability: f64) -> String {
    let formatted = format!("{:.1}", probability * 100.0);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}%", trimmed)
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.spinning {
        "Spinning..."
    } else {
        "Spin the Wheel!"
    };

    let state_class = if props.spinning {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    let spin_icon_class = if props.spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.spinning}
            class={classes!(styles::SPIN_BUTTON, state_class)}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </div>
        </button>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<String>,
    pub spinning: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.spinning {
        return html! {};
    }

    match &props.winner {
        Some(name) => html! {
            <div class="mt-8 mb-4 flex justify-center winning-message">
                <div class={styles::RESULT_BANNER}>
                    <span>{format!("Congratulations! You won: {}", name)}</span>
                </div>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct OddsLegendProps {
    pub wheel: Rc<Wheel>,
}

#[function_component(OddsLegend)]
pub fn odds_legend(props: &OddsLegendProps) -> Html {
    html! {
        <div class="mt-8 text-center bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
            <h3 class={classes!(styles::TEXT_H3, "mb-3")}>{"Prizes"}</h3>
            <div class={styles::LEGEND_GRID}>
                { for props.wheel.segments().iter().enumerate().map(|(index, segment)| html! {
                    <div key={index} class={styles::LEGEND_ITEM}>
                        <div
                            class={styles::LEGEND_SWATCH}
                            style={format!("background-color: {};", segment.fill)}
                        ></div>
                        <div class="text-left">
                            <div class="font-medium text-gray-900 dark:text-white">{segment.name.clone()}</div>
                            <div class={styles::TEXT_SMALL}>
                                {format!("{} chance", format_chance(segment.probability))}
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
