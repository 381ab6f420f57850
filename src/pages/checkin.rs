//! Daily check-in page: slider form, journal, submission, and results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the emoji table once on mount, then drives each submission through
//! `SubmissionState::begin` / `finish`. Page-wide shortcuts are handled here
//! rather than in the sliders so they work regardless of focus.

#[cfg(test)]
#[path = "checkin_test.rs"]
mod checkin_test;

use leptos::prelude::*;

use crate::components::notice_toast::NoticeToast;
use crate::components::results_panel::ResultsPanel;
use crate::components::slider::DiscreteSlider;
use crate::config::ClientConfig;
use crate::state::form::{FormState, SliderField};
use crate::state::submission::SubmissionState;
#[cfg(feature = "hydrate")]
use crate::util::emoji::EmojiMap;

/// Fields shown in the left and right form columns.
pub const LEFT_COLUMN: [SliderField; 4] =
    [SliderField::Mood, SliderField::Stress, SliderField::Focus, SliderField::Sleep];
pub const RIGHT_COLUMN: [SliderField; 4] =
    [SliderField::Motivation, SliderField::Anxiety, SliderField::Appetite, SliderField::FoodSecurity];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageShortcut {
    Reset,
    Submit,
}

/// Map a window keydown to a page shortcut. `ctrl` is Ctrl or Cmd.
pub fn page_shortcut(key: &str, ctrl: bool) -> Option<PageShortcut> {
    if !ctrl {
        return None;
    }
    match key {
        "r" | "R" => Some(PageShortcut::Reset),
        "Enter" => Some(PageShortcut::Submit),
        _ => None,
    }
}

/// Return every slider to 3, empty the journal, and hide results. A
/// submission still in flight is abandoned.
pub fn reset_checkin(form: &mut FormState, submission: &mut SubmissionState) {
    form.reset();
    submission.invalidate();
    submission.clear_result();
    submission.dismiss_notice();
}

/// Live average readout, e.g. `"Average: 3.25 / 5"`.
pub fn average_label(form: &FormState) -> String {
    format!("Average: {:.2} / 5", form.summary().average)
}

#[component]
pub fn CheckInPage() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    #[cfg(feature = "hydrate")]
    {
        let emojis = expect_context::<RwSignal<EmojiMap>>();
        let endpoint = config.with_value(|c| c.emoji_endpoint.clone());
        leptos::task::spawn_local(async move {
            let map = crate::net::api::load_emoji_map(&endpoint).await;
            emojis.set(map);
        });
    }

    let busy = Memo::new(move |_| submission.with(|s| s.busy));

    let submit = Callback::new(move |()| {
        let mut ticket = None;
        submission.update(|s| ticket = s.begin());
        let Some(ticket) = ticket else {
            return;
        };
        let data = form.with_untracked(FormState::form_data);

        #[cfg(feature = "hydrate")]
        {
            let (endpoint, timeout) = config.with_value(|c| (c.submit_endpoint.clone(), c.timers.submit_timeout));
            leptos::task::spawn_local(async move {
                let outcome = crate::state::submission::run_submission(data, |data| async move {
                    crate::net::api::submit_checkin(&endpoint, &data, timeout).await
                })
                .await;
                submission.update(|s| s.finish(ticket, outcome));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, data, config);
        }
    });

    let reset = move || {
        form.update(|f| submission.update(|s| reset_checkin(f, s)));
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let Some(shortcut) = page_shortcut(&ev.key(), ev.ctrl_key() || ev.meta_key()) else {
                return;
            };
            ev.prevent_default();
            match shortcut {
                PageShortcut::Reset => reset(),
                PageShortcut::Submit => submit.run(()),
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(());
    };

    view! {
        <div class="checkin-page">
            <header class="checkin-page__header">
                <h1>"MindGuard"</h1>
                <p class="checkin-page__subtitle">"How are you doing today?"</p>
            </header>

            <form id="wellness-form" class="checkin-form" on:submit=on_submit>
                <div class="checkin-form__columns">
                    <div class="checkin-form__column">
                        {LEFT_COLUMN.into_iter().map(|field| view! { <DiscreteSlider field=field/> }).collect_view()}
                    </div>
                    <div class="checkin-form__column">
                        {RIGHT_COLUMN.into_iter().map(|field| view! { <DiscreteSlider field=field/> }).collect_view()}
                    </div>
                </div>

                <p class="checkin-form__summary">{move || form.with(average_label)}</p>

                <label class="checkin-form__label" for="journal">
                    "Anything on your mind? (optional)"
                </label>
                <textarea
                    id="journal"
                    name="journal"
                    class="checkin-form__journal"
                    rows="4"
                    placeholder="Write a few words about your day..."
                    prop:value=move || form.with(|f| f.journal.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.journal = text);
                    }
                ></textarea>

                <div class="checkin-form__actions">
                    <button
                        id="submit-btn"
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || busy.get()
                        aria-busy=move || busy.get().to_string()
                    >
                        <span class="btn-text" style:display=move || if busy.get() { "none" } else { "inline" }>
                            "Submit Check-In"
                        </span>
                        <span class="btn-loading" style:display=move || if busy.get() { "inline" } else { "none" }>
                            "Analyzing..."
                        </span>
                    </button>
                    <button class="btn" type="button" title="Reset (Ctrl+R)" on:click=move |_| reset()>
                        "Reset"
                    </button>
                </div>
            </form>

            <NoticeToast/>
            <ResultsPanel/>
        </div>
    }
}
