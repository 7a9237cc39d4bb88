//! 리뷰 작성 모달

use crate::app::{now_ms, AppDashboard};
use gloo::console;
use gourmet_common::Error;
use leptos::prelude::*;

#[component]
pub fn ReviewModal(
    dashboard: RwSignal<AppDashboard>,
    review_target: RwSignal<Option<String>>,
) -> impl IntoView {
    let rating = RwSignal::new(5u8);
    let comment = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    let close = move || {
        review_target.set(None);
        rating.set(5);
        comment.set(String::new());
        notice.set(None);
    };

    let submit = move || {
        let Some(name) = review_target.get_untracked() else {
            return;
        };
        let text = comment.get_untracked();
        let stars = rating.get_untracked();

        match dashboard.try_update(|d| d.submit_review(&name, stars, &text, now_ms())) {
            Some(Ok(_)) => close(),
            Some(Err(Error::EmptyComment)) => notice.set(Some("한줄평을 입력해주세요.".to_string())),
            Some(Err(e)) => {
                console::error!(format!("리뷰 저장 실패: {}", e));
                notice.set(Some("리뷰를 저장하지 못했습니다.".to_string()));
            }
            None => {}
        }
    };

    view! {
        <Show when=move || review_target.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>{move || review_target.get().unwrap_or_default()} " 리뷰 작성"</h3>
                    <div class="star-picker">
                        {(1..=5u8)
                            .map(|n| {
                                view! {
                                    <button
                                        class="star"
                                        class:active={move || rating.get() >= n}
                                        on:click=move |_| rating.set(n)
                                    >
                                        "★"
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <textarea
                        placeholder="맛, 분위기, 서비스에 대한 솔직한 후기를 남겨주세요."
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                    {move || notice.get().map(|n| view! { <p class="form-error">{n}</p> })}
                    <div class="modal-actions">
                        <button class="btn btn-tertiary" on:click=move |_| close()>"취소"</button>
                        <button
                            class="btn btn-primary"
                            disabled=move || comment.with(|c| c.trim().is_empty())
                            on:click=move |_| submit()
                        >
                            "등록하기"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
