use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seconds: u32,
    /// At or below this remaining time the circle flips to its warning
    /// style.
    #[prop_or(10)]
    pub warning_at: u32,
    #[prop_or(AttrValue::Static("seconds remaining"))]
    pub label: AttrValue,
}

#[function_component(TimerDisplay)]
pub fn timer_display(p: &Props) -> Html {
    let warning = p.seconds <= p.warning_at;
    html! {
        <div class="timer-display" role="timer" aria-live="polite">
            <div class={classes!("timer-circle", warning.then_some("warning"))}>
                { p.seconds }
            </div>
            <p class="timer-text">{ p.label.clone() }</p>
        </div>
    }
}
