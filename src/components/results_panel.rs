//! Burnout-risk result panel.
//!
//! Renders the latest `SubmissionResult` through `ResultView`. Sections fade
//! in one after another after each new result; the panel is hidden while no
//! result is held.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
use crate::state::submission::SubmissionState;
use crate::util::result_view::{ALL_SECTIONS_REVEALED, ResourceHeading, ResourceView, ResultSection, ResultView};

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let view_model = Memo::new(move |_| submission.with(|s| s.result.as_ref().map(ResultView::from_result)));
    let revealed = RwSignal::new(ALL_SECTIONS_REVEALED);

    #[cfg(feature = "hydrate")]
    {
        let stagger = expect_context::<ClientConfig>().timers.reveal_stagger;
        let result_seq = Memo::new(move |_| submission.with(|s| s.result_seq));
        Effect::new(move || {
            let seq = result_seq.get();
            if seq == 0 {
                return;
            }
            revealed.set(1);
            scroll_results_into_view();
            leptos::task::spawn_local(async move {
                for step in 2..=ALL_SECTIONS_REVEALED {
                    gloo_timers::future::sleep(stagger).await;
                    // A newer result restarted the sequence.
                    if result_seq.get_untracked() != seq {
                        return;
                    }
                    revealed.set(step);
                }
            });
        });
    }

    let display = move || if view_model.with(Option::is_some) { "block" } else { "none" };

    view! {
        <section id="results" class="results" style:display=display>
            <h2 class="results__title">"Your Check-In Results"</h2>
            {move || view_model.get().map(|vm| render_result(vm, revealed))}
        </section>
    }
}

fn render_result(vm: ResultView, revealed: RwSignal<u8>) -> impl IntoView {
    let pending = move |section: ResultSection| !section.is_revealed(revealed.get());
    let banner = vm.banner;

    let emotion = match vm.emotion {
        Some(emotion) => view! {
            <div
                id="emotion-analysis"
                class="emotion-result results__section"
                class:results__section--pending=move || pending(ResultSection::Emotion)
            >
                <p>
                    <strong>"Detected Emotion: "</strong>
                    {emotion.summary()}
                </p>
                <div class="emotion-bar">
                    <div class="emotion-bar__fill" style=emotion.bar_style()></div>
                </div>
            </div>
        }
        .into_any(),
        None => view! { <div id="emotion-analysis" style="display: none;"></div> }.into_any(),
    };

    view! {
        <div
            id="burnout-result"
            class=format!("{} results__section", banner.css_class)
            class:results__section--pending=move || pending(ResultSection::Banner)
        >
            <h3>
                {banner.glyph.map(|glyph| view! { <span class="burnout-result__glyph">{glyph}</span> })}
                "Burnout Risk Level: "
                <strong>{banner.label}</strong>
            </h3>
            <p class="burnout-result__score">"Wellness score: " {banner.score}</p>
            {banner.message.map(|message| view! { <p class="burnout-result__message">{message}</p> })}
        </div>
        <div
            id="feedback"
            class="feedback stAlert-content results__section"
            class:results__section--pending=move || pending(ResultSection::Feedback)
            inner_html=vm.feedback_html
        ></div>
        <div
            id="resources"
            class="resources results__section"
            class:results__section--pending=move || pending(ResultSection::Resources)
        >
            {vm.resources_title.map(|title| view! { <h4 class="resources__title">{title}</h4> })}
            <ul class="resources__list">
                {vm.resources.into_iter().map(render_resource).collect_view()}
            </ul>
        </div>
        {emotion}
    }
}

fn render_resource(resource: ResourceView) -> impl IntoView {
    let heading = match resource.heading {
        ResourceHeading::Link { href, text } => view! {
            <strong>
                <a href=href target="_blank" rel="noopener noreferrer">
                    {text}
                </a>
            </strong>
        }
        .into_any(),
        ResourceHeading::Plain(text) => view! { <strong>{text}</strong> }.into_any(),
    };

    view! {
        <li class="resource">
            {heading}
            {resource.description.map(|d| view! { <p class="resource__description">{d}</p> })}
        </li>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_results_into_view() {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("results"))
    else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
