use yew::prelude::*;

use crate::config;
use crate::content::schema::SchedulerContent;
use crate::utils::embed::{load_embed_script, EmbedLoad};

#[derive(Properties, PartialEq)]
pub struct SchedulerEmbedProps {
    pub content: &'static SchedulerContent,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Booking widget. Failing to load it only leaves the iframe empty.
#[function_component(SchedulerEmbed)]
pub fn scheduler_embed(props: &SchedulerEmbedProps) -> Html {
    use_effect_with_deps(
        move |_| {
            match load_embed_script(config::SCHEDULER_SCRIPT_SRC, config::SCHEDULER_GLOBAL) {
                Ok(EmbedLoad::Injected) => log::debug!("Scheduler widget script injected"),
                Ok(EmbedLoad::AlreadyPresent) => {}
                Err(err) => log::warn!("Scheduler widget unavailable: {:?}", err),
            }
            || ()
        },
        (),
    );

    let content = props.content;
    html! {
        <section ref={props.node_ref.clone()} class="scheduler-section scroll-animation">
            <h2>{content.title}</h2>
            <p class="section-subtitle">{content.subtitle}</p>
            <iframe
                data-tally-src={config::get_scheduler_embed_url()}
                loading="lazy"
                width="100%"
                height="520"
                frameborder="0"
                title={content.frame_title}
            ></iframe>
        </section>
    }
}
