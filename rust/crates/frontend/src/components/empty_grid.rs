//! Placeholder shown when no apps are available.

use yew::prelude::*;

/// Properties for EmptyGrid component.
#[derive(Properties, PartialEq)]
pub struct EmptyGridProps {
    pub message: AttrValue,
}

#[function_component(EmptyGrid)]
pub fn empty_grid(props: &EmptyGridProps) -> Html {
    html! {
        <div>{ props.message.clone() }</div>
    }
}
