use shared::catalog::Item;
use shared::constants::{RATING_UNIT, SPINNING_LABEL, SPIN_BUTTON_LABEL};
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={styles::SPIN_BUTTON}
        >
            if props.is_spinning {
                <span class="flex items-center justify-center">
                    <svg class="animate-spin mr-2 h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                        <path d="M21 12a9 9 0 1 1-6.219-8.56" stroke="currentColor" stroke-width="2" stroke-linecap="round"></path>
                    </svg>
                    {SPINNING_LABEL}
                </span>
            } else {
                {SPIN_BUTTON_LABEL}
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    pub sound_on: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    let label = if props.sound_on { "Mute" } else { "Unmute" };

    html! {
        <button onclick={props.onclick.clone()} class={styles::BUTTON_ICON} title={label} aria-label={label}>
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon>
                if props.sound_on {
                    <>
                        <path d="M15.54 8.46a5 5 0 0 1 0 7.07"></path>
                        <path d="M19.07 4.93a10 10 0 0 1 0 14.14"></path>
                    </>
                } else {
                    <>
                        <line x1="22" y1="9" x2="16" y2="15"></line>
                        <line x1="16" y1="9" x2="22" y2="15"></line>
                    </>
                }
            </svg>
        </button>
    }
}

pub fn rating_text(rating: f64) -> String {
    format!("Rating: {} {}", rating, RATING_UNIT)
}

pub fn sips_text(sips: u32) -> String {
    format!("Drink {} sips! 🍺", sips)
}

// Result card component
#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub item: Item,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let item = &props.item;

    html! {
        <div class="space-y-4 animate-fade-in">
            <div class={styles::RESULT_CARD}>
                <div class="flex items-center gap-4">
                    <div class="w-32 h-32 rounded-lg overflow-hidden border-2 border-rose-300 shadow-md">
                        <img
                            src={get_asset_url(&item.image)}
                            alt={item.name.clone()}
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <div class="flex-1">
                        <h2 class="text-xl font-bold text-gray-800 mb-2">{&item.name}</h2>
                        <p class="text-gray-600 text-sm mb-2">{&item.description}</p>
                        <div class="flex flex-col gap-1">
                            <span class="text-rose-600 font-medium">{rating_text(item.rating)}</span>
                            <span class="text-gray-800 text-lg font-bold">{sips_text(item.sips())}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_copy() {
        assert_eq!(rating_text(8.7), "Rating: 8.7 lintta-aste");
        assert_eq!(rating_text(9.0), "Rating: 9 lintta-aste");
        assert_eq!(sips_text(3), "Drink 3 sips! 🍺");
    }
}
