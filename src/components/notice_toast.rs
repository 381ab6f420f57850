//! Dismissable warning/error notification.
//!
//! Each notice auto-dismisses after the configured delay unless a newer one
//! replaced it first.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
use crate::error::Severity;
use crate::state::submission::SubmissionState;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let notice = Memo::new(move |_| submission.with(|s| s.notice.clone()));

    #[cfg(feature = "hydrate")]
    {
        let dismiss_after = expect_context::<ClientConfig>().timers.notice_dismiss;
        let notice_seq = Memo::new(move |_| notice.with(|n| n.as_ref().map(|n| n.seq)));
        Effect::new(move || {
            let Some(seq) = notice_seq.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(dismiss_after).await;
                submission.update(|s| s.expire_notice(seq));
            });
        });
    }

    let on_dismiss = move |_| submission.update(SubmissionState::dismiss_notice);

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = match n.severity {
                        Severity::Warning => "notice notice--warning",
                        Severity::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="notice__message">{n.message}</span>
                            <button class="notice__close" type="button" aria-label="Dismiss" on:click=on_dismiss>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
