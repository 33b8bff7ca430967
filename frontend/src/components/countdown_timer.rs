use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::{store, LanguageContext};
use crate::utils::countdown::{CountdownState, TICK_INTERVAL_MS};

pub enum CountdownAction {
    Tick,
}

impl Reducible for CountdownState {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                let next = self.tick();
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let clock = use_reducer(CountdownState::default);
    let language = use_context::<LanguageContext>().map(|ctx| ctx.active()).unwrap_or_default();
    let expired = clock.is_zero();

    // One tick per second while mounted; the interval is dropped on unmount
    // and once the clock has run out.
    {
        let dispatcher = clock.dispatcher();
        use_effect_with_deps(
            move |expired| {
                let interval = if *expired {
                    None
                } else {
                    Some(Interval::new(TICK_INTERVAL_MS, move || {
                        dispatcher.dispatch(CountdownAction::Tick);
                    }))
                };
                move || drop(interval)
            },
            expired,
        );
    }

    let content = match store().get_tree(language) {
        Ok(tree) => &tree.countdown,
        Err(err) => {
            log::error!("{}", err);
            return html! {};
        }
    };

    if expired {
        return html! {
            <section ref={props.node_ref.clone()} class="countdown-banner scroll-animation">
                <p class="countdown-expired">{content.expired}</p>
            </section>
        };
    }

    let [days, hours, minutes, seconds] = clock.padded();
    let units = [
        (days, content.days),
        (hours, content.hours),
        (minutes, content.minutes),
        (seconds, content.seconds),
    ];

    html! {
        <section ref={props.node_ref.clone()} class="countdown-banner scroll-animation">
            <p class="countdown-heading">{content.heading}</p>
            <div class="countdown-units">
                { for units.into_iter().map(|(value, label)| html! {
                    <div class="countdown-unit">
                        <span class="countdown-value">{value}</span>
                        <span class="countdown-label">{label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
