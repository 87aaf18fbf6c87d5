use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shared::catalog::{Catalog, Item};
use shared::constants::SPIN_DURATION_MS;
use shared::shared_wheel_game::SpinState;
use yew::prelude::*;

/// Delay between an accepted spin and its reveal.
pub const REVEAL_DELAY_MS: u32 = SPIN_DURATION_MS;

#[derive(Clone)]
pub struct WheelHandle {
    pub state: SpinState,
    pub catalog: Rc<Catalog>,
    /// Requests a spin. Emits `true` if the wheel started, `false` if it was already spinning.
    pub spin: Callback<(), bool>,
}

impl WheelHandle {
    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected_index.and_then(|index| self.catalog.get(index))
    }
}

/// Applies a spin request to the session. `Some` means the wheel started and
/// exactly one reveal timer must be armed; `None` leaves session and timers alone.
pub fn begin_spin<R: Rng + ?Sized>(
    session: &RefCell<SpinState>,
    item_count: NonZeroUsize,
    rng: &mut R,
) -> Option<SpinState> {
    let next = session.borrow().request_spin(item_count, rng)?;
    *session.borrow_mut() = next;
    Some(next)
}

/// Reveals the pending result once the reveal timer fires.
pub fn settle_spin(session: &RefCell<SpinState>) -> Option<SpinState> {
    let settled = session.borrow().complete_spin()?;
    *session.borrow_mut() = settled;
    Some(settled)
}

/// Owns the session's spin state and the reveal timer.
///
/// The authoritative snapshot lives in a ref cell so the spinning guard sees
/// the latest state even if two clicks land before a re-render. The
/// `use_state` copy only drives rendering.
#[hook]
pub fn use_wheel(catalog: Rc<Catalog>) -> WheelHandle {
    let session = use_mut_ref(SpinState::new);
    let snapshot = use_state(SpinState::new);
    let reveal_timer = use_mut_ref(|| None::<Timeout>);
    let rng = use_mut_ref(SmallRng::from_entropy);

    // Cancel a pending reveal on unmount
    {
        let reveal_timer = reveal_timer.clone();
        use_effect_with((), move |_| {
            move || {
                reveal_timer.borrow_mut().take();
            }
        });
    }

    let spin = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let reveal_timer = reveal_timer.clone();
        let item_count = catalog.segment_count();

        Callback::from(move |_: ()| {
            let Some(next) = begin_spin(&session, item_count, &mut *rng.borrow_mut()) else {
                log::debug!("Spin request ignored, wheel is still spinning");
                return false;
            };
            snapshot.set(next);

            let reveal = {
                let session = session.clone();
                let snapshot = snapshot.clone();
                Timeout::new(REVEAL_DELAY_MS, move || {
                    if let Some(settled) = settle_spin(&session) {
                        snapshot.set(settled);
                    }
                })
            };

            // The previous timeout (if any) has already fired, begin_spin ensures it
            *reveal_timer.borrow_mut() = Some(reveal);
            true
        })
    };

    WheelHandle {
        state: *snapshot,
        catalog,
        spin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> NonZeroUsize {
        NonZeroUsize::new(5).unwrap()
    }

    #[test]
    fn test_reveal_delay_matches_animation() {
        assert_eq!(REVEAL_DELAY_MS, 3000);
    }

    #[test]
    fn test_repeat_request_arms_no_second_timer() {
        let session = RefCell::new(SpinState::new());
        let mut rng = SmallRng::seed_from_u64(3);

        let mut timers_armed = 0;
        for _ in 0..3 {
            if begin_spin(&session, five(), &mut rng).is_some() {
                timers_armed += 1;
            }
        }
        assert_eq!(timers_armed, 1);

        let spinning = *session.borrow();
        assert!(spinning.is_spinning());
        assert_eq!(begin_spin(&session, five(), &mut rng), None);
        assert_eq!(*session.borrow(), spinning);
    }

    #[test]
    fn test_settle_reveals_result_from_spin_start() {
        let session = RefCell::new(SpinState::new());
        let mut rng = SmallRng::seed_from_u64(11);

        assert_eq!(settle_spin(&session), None);

        let started = begin_spin(&session, five(), &mut rng).unwrap();
        assert!(!started.show_result());
        let pending = started.pending_index();

        let settled = settle_spin(&session).unwrap();
        assert!(settled.show_result());
        assert!(!settled.is_spinning());
        assert_eq!(settled.selected_index, pending);
        assert_eq!(settled.rotation, started.rotation);
        assert_eq!(*session.borrow(), settled);

        // Accepts a new spin once the result is shown
        assert!(begin_spin(&session, five(), &mut rng).is_some());
    }
}
