//! Discrete 1-5 slider bound to one check-in field.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `FormState`, and claims the page-wide
//! `DragState` slot on `pointerdown`. Window-level move/up listeners keep the
//! drag alive when the pointer leaves the track; they act only while the slot
//! names this slider's field.

use leptos::prelude::*;

use crate::state::drag::DragState;
use crate::state::form::{FormState, SliderField};
use crate::util::emoji::{EmojiMap, next_label};
#[cfg(feature = "hydrate")]
use crate::util::slider_math::level_from_pointer;
use crate::util::slider_math::{LEVEL_MAX, LEVEL_MIN, SliderVisual, slider_key};

/// Pointer- and keyboard-driven slider with emoji label and numbered thumb.
#[component]
pub fn DiscreteSlider(field: SliderField) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let drag = expect_context::<RwSignal<DragState>>();
    let emojis = expect_context::<RwSignal<EmojiMap>>();

    let track = NodeRef::<leptos::html::Div>::new();
    let label = RwSignal::new(field.display_name().to_owned());
    let level = Memo::new(move |_| form.with(|f| f.level(field)));
    let visual = Memo::new(move |_| SliderVisual::new(level.get(), field.polarity()));

    // A level with no glyph keeps whatever label was showing.
    Effect::new(move || {
        let current = level.get();
        let next = emojis.with(|map| label.with_untracked(|prev| next_label(prev, map, field, current)));
        label.set(next);
    });

    let apply_pointer = move |client_x: i32| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = track.get_untracked() {
                let rect = el.get_bounding_client_rect();
                let next = level_from_pointer(f64::from(client_x), rect.left(), rect.width());
                if next != level.get_untracked() {
                    form.update(|f| {
                        f.set_level(field, f64::from(next));
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client_x;
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        drag.update(|d| d.begin(field));
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = track.get_untracked() {
                let _ = el.focus();
            }
        }
        apply_pointer(ev.client_x());
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(key) = slider_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        form.update(|f| {
            f.apply_key(field, key);
        });
    };

    #[cfg(feature = "hydrate")]
    {
        let move_handle = window_event_listener(leptos::ev::pointermove, move |ev| {
            if drag.get_untracked().tracks(field) {
                ev.prevent_default();
                apply_pointer(ev.client_x());
            }
        });
        let up_handle = window_event_listener(leptos::ev::pointerup, move |_| {
            if drag.get_untracked().tracks(field) {
                drag.update(DragState::end);
            }
        });
        let cancel_handle = window_event_listener(leptos::ev::pointercancel, move |_| {
            if drag.get_untracked().tracks(field) {
                drag.update(DragState::end);
            }
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
            cancel_handle.remove();
        });
    }

    let key = field.key();
    let label_id = field.label_id();

    view! {
        <div class="slider-container">
            <label id=label_id.clone() class="slider-label">
                {move || label.get()}
            </label>
            <div
                class="custom-slider"
                class:custom-slider--dragging=move || drag.get().tracks(field)
                data-slider=key
                node_ref=track
                tabindex="0"
                role="slider"
                style="touch-action: none;"
                aria-labelledby=label_id
                aria-valuemin=LEVEL_MIN.to_string()
                aria-valuemax=LEVEL_MAX.to_string()
                aria-valuenow=move || visual.get().level.to_string()
                aria-valuetext=move || format!("{} of {LEVEL_MAX}", visual.get().level)
                on:pointerdown=on_pointer_down
                on:keydown=on_key_down
            >
                <div class="slider-track">
                    <div class=move || visual.get().fill_class() style=move || visual.get().fill_style()></div>
                    <div class=move || visual.get().thumb_class() style=move || visual.get().thumb_style()>
                        <span class="thumb-value">{move || visual.get().level.to_string()}</span>
                    </div>
                </div>
            </div>
            <small class="slider-help">{field.help_text()}</small>
            <input type="hidden" id=key name=key prop:value=move || visual.get().level.to_string() />
        </div>
    }
}
