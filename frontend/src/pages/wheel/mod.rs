mod wheel_display;
mod wheel_utils;

use shared::constants::{COPYRIGHT, TITLE};
use yew::prelude::*;

use crate::config::load_catalog;
use crate::hooks::{use_spin_sound, use_wheel};
use crate::styles;

use wheel_display::WheelDisplay;
use wheel_utils::{ResultCard, SoundToggle, SpinButton};

#[function_component(SpinningWheel)]
pub fn spinning_wheel() -> Html {
    let catalog = use_memo((), |_| load_catalog());
    let wheel = use_wheel(catalog.clone());
    let sound = use_spin_sound();

    let start_spin = {
        let spin = wheel.spin.clone();
        let play = sound.play.clone();
        Callback::from(move |_: MouseEvent| {
            // Sound only for accepted spins; a failed cue never touches the wheel state
            if spin.emit(()) {
                play.emit(());
            }
        })
    };

    let result = if wheel.state.show_result() {
        wheel.selected_item().cloned()
    } else {
        None
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CARD}>
                <div class="p-6">
                    <div class="flex justify-between items-center mb-4">
                        <h1 class={styles::TEXT_H1}>{TITLE}</h1>
                        <SoundToggle sound_on={sound.sound_on} onclick={sound.toggle.clone()} />
                    </div>

                    <p class={styles::TEXT_COPYRIGHT}>{COPYRIGHT}</p>

                    <WheelDisplay catalog={catalog} rotation={wheel.state.rotation} />

                    <SpinButton is_spinning={wheel.state.is_spinning()} onclick={start_spin} />

                    if let Some(item) = result {
                        <ResultCard {item} />
                    }
                </div>
            </div>
        </div>
    }
}
