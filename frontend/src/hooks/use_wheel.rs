use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wheel_shared::constants::SPIN_DURATION_MS;
use wheel_shared::{PrizeCatalog, SpinState, ThreadRandom, Wheel};
use yew::prelude::*;

#[derive(Clone)]
pub struct UseWheelHandle {
    pub wheel: Rc<Wheel>,
    pub spinning: bool,
    pub rotation: f64,
    pub winner: Option<String>,
    pub spin: Callback<MouseEvent>,
}

/// Spin state for one wheel widget.
///
/// The layout is rebuilt only when the catalog changes. The state lives in a
/// `RefCell` rather than `use_state` so the in-flight check and the flag flip
/// happen in the same borrow; a second click queued before the next render
/// still sees `spinning == true`.
#[hook]
pub fn use_wheel(catalog: &PrizeCatalog) -> UseWheelHandle {
    let wheel = use_memo(catalog.clone(), |catalog| Wheel::new(catalog.clone()));
    let state = use_mut_ref(SpinState::new);
    let rng = use_mut_ref(ThreadRandom::new);
    let reveal = use_mut_ref(|| None::<Timeout>);
    let force_update = use_force_update();

    // Dropping the timeout cancels a reveal that has not fired yet
    {
        let reveal = reveal.clone();
        use_effect_with((), move |_| {
            move || {
                if reveal.borrow_mut().take().is_some() {
                    log::debug!("Wheel unmounted, pending reveal cancelled");
                }
            }
        });
    }

    let spin = {
        let wheel = wheel.clone();
        let state = state.clone();
        let rng = rng.clone();
        let reveal = reveal.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: MouseEvent| {
            let outcome = {
                let mut rng = rng.borrow_mut();
                state.borrow_mut().start_spin(&wheel, &mut *rng)
            };
            let Some(outcome) = outcome else {
                return;
            };

            log::info!(
                "Spinning to {:.1}° for {:?}",
                outcome.target_rotation,
                outcome.winner_name
            );

            let timeout = {
                let state = state.clone();
                let force_update = force_update.clone();
                Timeout::new(SPIN_DURATION_MS, move || {
                    state.borrow_mut().complete_spin();
                    force_update.force_update();
                })
            };
            // Replaces the spent timeout of the previous spin, if any
            *reveal.borrow_mut() = Some(timeout);

            force_update.force_update();
        })
    };

    let snapshot = state.borrow();
    UseWheelHandle {
        wheel,
        spinning: snapshot.spinning,
        rotation: snapshot.rotation_degrees,
        winner: snapshot.winning_option_name.clone(),
        spin,
    }
}
