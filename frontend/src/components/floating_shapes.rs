use yew::prelude::*;

use crate::motion::controller::MotionSpec;
use crate::motion::dom;
use crate::motion::hooks::use_section_motion;
use crate::motion::presets;

/// Decorative gear and bolt shapes that bob behind hero copy for as long
/// as the hero is mounted.
#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    let node = use_node_ref();
    use_section_motion("decor", node.clone(), (), |root| {
        vec![
            MotionSpec::looping(presets::float("shapes", dom::select(root, ".shape"))),
            MotionSpec::looping(
                presets::float("sparks", dom::select(root, ".spark"))
                    .period(1.8)
                    .stagger(0.3),
            ),
        ]
    });

    html! {
        <div class="floating-shapes" aria-hidden="true" ref={node}>
            <style>
                {r#"
                    .floating-shapes {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .floating-shapes .shape {
                        position: absolute;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 166, 0, 0.25);
                        will-change: transform;
                    }
                    .floating-shapes .shape.gear {
                        border-style: dashed;
                    }
                    .floating-shapes .spark {
                        position: absolute;
                        width: 10px;
                        height: 10px;
                        background: #ffa600;
                        border-radius: 2px;
                        box-shadow: 0 0 12px rgba(255, 166, 0, 0.8);
                        will-change: transform;
                    }
                "#}
            </style>
            <div class="shape gear" style="width: 220px; height: 220px; top: 12%; left: 6%;"></div>
            <div class="shape" style="width: 120px; height: 120px; top: 62%; left: 18%;"></div>
            <div class="shape gear" style="width: 300px; height: 300px; top: 8%; right: 4%;"></div>
            <div class="shape" style="width: 80px; height: 80px; bottom: 10%; right: 22%;"></div>
            <div class="spark" style="top: 30%; left: 40%;"></div>
            <div class="spark" style="top: 70%; right: 35%;"></div>
            <div class="spark" style="top: 20%; right: 28%;"></div>
        </div>
    }
}
