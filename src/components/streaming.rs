use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;

const LIVE_COMMENTS: [(&str, &str); 3] = [
    ("J", "Amazing coffee technique! ☕"),
    ("M", "What beans are you using today?"),
    ("S", "That latte art is perfect 🔥"),
];

#[function_component(StreamingSection)]
pub fn streaming_section() -> Html {
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);

    html! {
        <section ref={node} class="section streaming">
            <style>
                {r#"
                    .streaming {
                        background: linear-gradient(135deg, #fffbeb, #ffffff, #fffbeb);
                    }
                    .streaming-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .streaming-badge {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 600;
                        font-size: 0.875rem;
                    }
                    .streaming-player {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        background: linear-gradient(135deg, #92400e, #78350f);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .streaming-play {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.9);
                        color: #92400e;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .streaming-play:hover {
                        transform: scale(1.1);
                    }
                    .streaming-live {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        color: white;
                        font-weight: 600;
                        font-size: 0.875rem;
                    }
                    .streaming-live::before {
                        content: "";
                        display: inline-block;
                        width: 0.75rem;
                        height: 0.75rem;
                        margin-right: 0.5rem;
                        border-radius: 9999px;
                        background: #ef4444;
                        animation: pulse 2s infinite;
                    }
                    .streaming-viewers {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.5);
                        color: white;
                        font-size: 0.875rem;
                    }
                    .streaming-chat {
                        padding: 1.5rem;
                    }
                    .streaming-comment {
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                        margin-top: 0.75rem;
                        font-size: 0.875rem;
                        color: #374151;
                    }
                    .streaming-avatar {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #fde68a;
                        color: #92400e;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="container streaming-grid">
                <div class={reveal_class(visible)}>
                    <span class="streaming-badge">{"Live coffee making process."}</span>
                    <h2 class="section-title" style="text-align: left;">
                        {"We Stream Our "}<br/>
                        <span class="accent">{"Coffee Making Live"}</span>
                    </h2>
                    <p class="section-subtitle" style="text-align: left; margin-left: 0;">
                        {"We are here to listen from you deliver excellence"}
                    </p>
                    <p class="body-text">
                        {"Every morning our roasters brew, pour and taste on camera. Watch the \
                          dial-in, ask questions in the chat and pick up a trick or two for your \
                          own kitchen."}
                    </p>
                    <button class="btn btn-primary">{"Watch Live Stream"}</button>
                </div>
                <div class={reveal_class(visible)} style="transition-delay: 300ms;">
                    <div class="card">
                        <div class="streaming-player">
                            <div class="streaming-play">{"▶"}</div>
                            <span class="streaming-live">{"LIVE"}</span>
                            <span class="streaming-viewers">{"👁 1,234 watching"}</span>
                        </div>
                        <div class="streaming-chat">
                            <h4>{"Live Comments"}</h4>
                            {
                                LIVE_COMMENTS.iter().map(|(initial, text)| html! {
                                    <div class="streaming-comment">
                                        <span class="streaming-avatar">{*initial}</span>
                                        <p>{*text}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
