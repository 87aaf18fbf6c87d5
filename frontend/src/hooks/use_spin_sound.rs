use std::rc::Rc;

use shared::constants::SPIN_SOUND_PATH;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::config::get_asset_url;

pub enum SoundAction {
    Toggle,
}

/// Mute flag. Sound starts enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundSetting {
    pub sound_on: bool,
}

impl Default for SoundSetting {
    fn default() -> Self {
        Self { sound_on: true }
    }
}

impl Reducible for SoundSetting {
    type Action = SoundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SoundAction::Toggle => Rc::new(Self {
                sound_on: !self.sound_on,
            }),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SpinSound {
    pub sound_on: bool,
    pub toggle: Callback<MouseEvent>,
    pub play: Callback<()>,
}

/// Spin sound cue and the mute flag. Playback is best-effort.
#[hook]
pub fn use_spin_sound() -> SpinSound {
    let setting = use_reducer(SoundSetting::default);
    let audio = use_memo((), |_| {
        HtmlAudioElement::new_with_src(&get_asset_url(SPIN_SOUND_PATH)).ok()
    });

    // Reducer toggles apply to the latest value, so quick double clicks don't collapse
    let toggle = {
        let setting = setting.clone();
        Callback::from(move |_: MouseEvent| setting.dispatch(SoundAction::Toggle))
    };

    let play = {
        let enabled = setting.sound_on;
        Callback::from(move |_: ()| {
            if let (true, Some(audio)) = (enabled, (*audio).as_ref()) {
                play_from_start(audio);
            }
        })
    };

    SpinSound {
        sound_on: setting.sound_on,
        toggle,
        play,
    }
}

fn play_from_start(audio: &HtmlAudioElement) {
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("Spin sound rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("Spin sound failed to start: {:?}", e),
    }
}
