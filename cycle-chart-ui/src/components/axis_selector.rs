//! X or Y axis selector.

use crate::state::AppState;
use cycle_core::AxisKind;
use dioxus::prelude::*;

/// Which axis a selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSlot {
    X,
    Y,
}

#[derive(Props, Clone, PartialEq)]
pub struct AxisSelectorProps {
    pub slot: AxisSlot,
}

/// Date, Distance, Time or Speed for one axis. Only rebuilds the chart.
#[component]
pub fn AxisSelector(props: AxisSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut signal = match props.slot {
        AxisSlot::X => state.x_axis,
        AxisSlot::Y => state.y_axis,
    };
    let current = signal();
    let caption = match props.slot {
        AxisSlot::X => "X axis: ",
        AxisSlot::Y => "Y axis: ",
    };

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<AxisKind>() {
        Ok(axis) => signal.set(axis),
        Err(e) => state.error_msg.set(Some(e.to_string())),
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "{caption}"
            select {
                onchange: on_change,
                for axis in AxisKind::ALL {
                    option {
                        value: "{axis}",
                        selected: axis == current,
                        "{axis}"
                    }
                }
            }
        }
    }
}
