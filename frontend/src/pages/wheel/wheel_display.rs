use std::rc::Rc;

use shared::catalog::Catalog;
use shared::constants::SPIN_DURATION_MS;
use yew::prelude::*;

use crate::config::get_asset_url;

const ITEM_RADIUS_PX: u32 = 120;

/// Angle of segment `index` when the wheel is at rest.
pub fn segment_angle(index: usize, item_count: usize) -> f64 {
    360.0 / item_count as f64 * index as f64
}

pub fn wheel_style(rotation: u64) -> String {
    format!(
        "transform: rotate({}deg); transition: transform {}ms ease-out;",
        rotation, SPIN_DURATION_MS
    )
}

pub fn item_style(index: usize, item_count: usize) -> String {
    format!(
        "transform: translate(-50%, -50%) rotate({}deg) translateY(-{}px);",
        segment_angle(index, item_count),
        ITEM_RADIUS_PX
    )
}

#[derive(Properties, PartialEq)]
pub struct WheelDisplayProps {
    pub catalog: Rc<Catalog>,
    pub rotation: u64,
}

#[function_component(WheelDisplay)]
pub fn wheel_display(props: &WheelDisplayProps) -> Html {
    let item_count = props.catalog.segment_count().get();

    html! {
        <div class="relative aspect-square mb-6">
            <div class="absolute inset-0" style={wheel_style(props.rotation)}>
                { for props.catalog.items().iter().enumerate().map(|(index, item)| html! {
                    <div
                        key={item.id}
                        class="absolute top-1/2 left-1/2"
                        style={item_style(index, item_count)}
                    >
                        <div class="w-20 h-20 rounded-lg overflow-hidden transform -rotate-45 border-2 border-rose-400 shadow-md">
                            <img
                                src={get_asset_url(&item.image)}
                                alt={item.name.clone()}
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                }) }
                <div class="absolute inset-0 border-4 border-rose-400 rounded-full shadow-lg" />
            </div>
            // Pointer
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-4 h-6">
                <div class="w-4 h-4 bg-rose-500 rotate-45 transform origin-bottom"></div>
            </div>
        </div>
    }
}
