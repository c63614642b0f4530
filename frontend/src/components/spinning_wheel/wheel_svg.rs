use std::rc::Rc;

use wheel_shared::constants::{
    POINTER_FRAME_OFFSET_DEG, SPIN_DURATION_MS, WHEEL_CENTER, WHEEL_RADIUS,
};
use wheel_shared::Wheel;
use yew::prelude::*;

// CSS equivalent of an ease-out cubic
const SPIN_EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub wheel: Rc<Wheel>,
    pub rotation: f64,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let size = WHEEL_RADIUS * 2.0;
    let view_box = format!("0 0 {} {}", size, size);

    // Segment angles start at +x; turning the group back a quarter puts
    // wheel angle 0 under the pointer at the top.
    let frame_offset = format!(
        "rotate({} {} {})",
        POINTER_FRAME_OFFSET_DEG, WHEEL_CENTER.0, WHEEL_CENTER.1
    );

    let wrapper_style = format!(
        "width: {size}px; height: {size}px; transform: rotate({}deg); transition: transform {}ms {};",
        props.rotation, SPIN_DURATION_MS, SPIN_EASING,
    );

    html! {
        <div class="wheel-svg-wrapper" style={wrapper_style}>
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width={size.to_string()}
                height={size.to_string()}
                viewBox={view_box}
            >
                <g transform={frame_offset}>
                    { for props.wheel.segments().iter().enumerate().map(|(index, segment)| {
                        let label_transform = format!(
                            "rotate({} {} {})",
                            segment.text_rotation, segment.text_x, segment.text_y
                        );
                        html! {
                            <g key={index}>
                                <path
                                    d={segment.path.clone()}
                                    fill={segment.fill.clone()}
                                    stroke="#333"
                                    stroke-width="1"
                                />
                                <text
                                    x={segment.text_x.to_string()}
                                    y={segment.text_y.to_string()}
                                    transform={label_transform}
                                    text-anchor="middle"
                                    dominant-baseline="middle"
                                    fill="white"
                                    font-size="16"
                                    font-weight="bold"
                                >
                                    { segment.name.clone() }
                                </text>
                            </g>
                        }
                    }) }
                </g>
            </svg>
        </div>
    }
}
