use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::easing::{use_counter_ticks, CounterAnimation};
use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::format::stat_display;
use crate::data::use_catalog;

const ORBIT_RADIUS_PX: f64 = 120.0;

fn orbit_offset(index: usize) -> (f64, f64) {
    let angle = (index as f64 * 90.0 - 45.0).to_radians();
    (angle.cos() * ORBIT_RADIUS_PX, angle.sin() * ORBIT_RADIUS_PX)
}

#[function_component(BrewingExperienceSection)]
pub fn brewing_experience_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);
    let active = use_state(|| 0usize);
    let tick = use_counter_ticks(config::BREWING_COUNTERS, visible);
    let animation = CounterAnimation::new(config::BREWING_COUNTERS.duration_ms);

    let steps = &catalog.coffee.brewing_steps;
    let step_count = steps.len();

    {
        let active = active.clone();
        use_interval(
            move || {
                if step_count > 0 {
                    active.set((*active + 1) % step_count);
                }
            },
            config::BREWING_STEP_INTERVAL_MS,
        );
    }

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(index))
    };

    let orbit = steps.iter().enumerate().map(|(index, step)| {
        let (x, y) = orbit_offset(index);
        html! {
            <div
                key={step.id}
                class={classes!("brew-orbit-step", (*active == index).then(|| "brew-orbit-active"))}
                style={format!("left: calc(50% + {:.1}px); top: calc(50% + {:.1}px);", x, y)}
                onclick={select(index)}
            >
                {&step.icon}
            </div>
        }
    }).collect::<Html>();

    let detail = match steps.get(*active) {
        Some(step) => html! {
            <div class="brew-detail-card">
                <div class="brew-detail-head">
                    <span class="brew-detail-icon">{&step.icon}</span>
                    <div>
                        <h3 class="brew-detail-title">{&step.title}</h3>
                        <p class="brew-detail-subtitle">{&step.description}</p>
                    </div>
                </div>
                <p class="brew-detail-text">{&step.detail}</p>
            </div>
        },
        None => html! {},
    };

    let dots = (0..step_count).map(|index| html! {
        <button
            key={index}
            class={classes!("dot", (*active == index).then(|| "dot-active"))}
            onclick={select(index)}
        />
    }).collect::<Html>();

    let counters = catalog.coffee.brewing_counters.iter().map(|stat| html! {
        <div class="brew-stat">
            <div class="brew-stat-number">
                {stat_display(animation.value_at(tick, stat.value), stat.format, &stat.suffix)}
            </div>
            <p class="brew-stat-label">{&stat.label}</p>
        </div>
    }).collect::<Html>();

    html! {
        <section ref={node} class="section brewing">
            <style>
                {r#"
                    .brewing {
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(135deg, #111827, #78350f, #111827);
                    }
                    .brewing .section-title {
                        color: white;
                    }
                    .brewing .section-subtitle {
                        color: #fde68a;
                    }
                    .brew-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                        margin-bottom: 5rem;
                    }
                    .brew-orbit {
                        position: relative;
                        height: 20rem;
                    }
                    .brew-cup {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #fbbf24, #d97706);
                        font-size: 1.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brew-orbit-step {
                        position: absolute;
                        transform: translate(-50%, -50%);
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        background: rgba(146, 64, 14, 0.5);
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        transition: all 0.5s ease;
                    }
                    .brew-orbit-active {
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        transform: translate(-50%, -50%) scale(1.25);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .brew-detail-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(180, 83, 9, 0.5);
                        background: rgba(146, 64, 14, 0.3);
                    }
                    .brew-detail-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .brew-detail-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #d97706;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .brew-detail-title {
                        color: #fde68a;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .brew-detail-subtitle {
                        color: #fcd34d;
                    }
                    .brew-detail-text {
                        color: #fef3c7;
                        font-size: 1.125rem;
                        line-height: 1.7;
                    }
                    .brew-stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .brew-stat-number {
                        color: #fbbf24;
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .brew-stat-label {
                        color: #fde68a;
                    }
                    .brew-green {
                        margin-top: 5rem;
                        padding: 3rem;
                        text-align: center;
                        border-radius: 1rem;
                        border: 1px solid rgba(21, 128, 61, 0.3);
                        background: linear-gradient(90deg, rgba(22, 101, 52, 0.3), rgba(146, 64, 14, 0.3));
                    }
                    .brew-green h3 {
                        color: white;
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .brew-green p {
                        color: #bbf7d0;
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">
                        {"From Bean to Cup:"}<br/>
                        <span class="accent-light">{"Our Coffee Journey"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Every cup tells a story of dedication, sustainability, and craftsmanship. \
                          Discover how we transform the finest coffee beans into extraordinary experiences."}
                    </p>
                </div>
                <div class="brew-grid">
                    <div class={classes!("brew-orbit", reveal_class(visible))} style="transition-delay: 300ms;">
                        <div class="brew-cup">{"☕"}</div>
                        { orbit }
                    </div>
                    <div class={reveal_class(visible)} style="transition-delay: 500ms;">
                        { detail }
                        <div class="dot-row">{ dots }</div>
                    </div>
                </div>
                <div class={classes!("brew-stats", reveal_class(visible))} style="transition-delay: 700ms;">
                    { counters }
                </div>
                <div class={classes!("brew-green", reveal_class(visible))} style="transition-delay: 1000ms;">
                    <div style="font-size: 2rem; margin-bottom: 1rem;">{"🌍"}</div>
                    <h3>{"Committed to Sustainability"}</h3>
                    <p>
                        {"Every purchase supports regenerative farming practices, fair trade partnerships \
                          and community programs in the regions our coffee comes from."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_sit_on_the_diagonals() {
        let (x, y) = orbit_offset(0);
        assert!((x - 84.85).abs() < 0.01);
        assert!((y + 84.85).abs() < 0.01);
        let (x, y) = orbit_offset(2);
        assert!((x + 84.85).abs() < 0.01);
        assert!((y - 84.85).abs() < 0.01);
    }
}
