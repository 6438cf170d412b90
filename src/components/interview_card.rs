//! Dashboard card for a single interview.

use leptos::prelude::*;

use crate::components::interview_card_menu::InterviewCardMenu;
use crate::net::types::InterviewSummary;

/// A clickable card linking to the interview, with its context menu in the
/// header.
#[component]
pub fn InterviewCard(interview: InterviewSummary) -> impl IntoView {
    let href = format!("/interview/{}", interview.id.path_segment());
    let techstack = interview.techstack.join(", ");

    view! {
        <a class="interview-card" href=href>
            <div class="interview-card__header">
                <span class="interview-card__role">{interview.role}</span>
                <span class="interview-card__type">{interview.interview_type}</span>
                <InterviewCardMenu interview_id=interview.id/>
            </div>
            <span class="interview-card__stack">{techstack}</span>
            {interview
                .created_at
                .map(|created| view! { <span class="interview-card__date">{created}</span> })}
        </a>
    }
}
