use web_sys::Element;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::countdown_timer::CountdownTimer;
use crate::components::language_toggle::LanguageToggle;
use crate::components::scheduler_embed::SchedulerEmbed;
use crate::config;
use crate::content::schema::{BenefitsContent, HeroContent, StoriesContent, WhyMeContent};
use crate::content::{store, LanguageContext, PageContent};
use crate::utils::document::{current_year, scroll_to_id};
use crate::utils::reveal::RevealScheduler;

// Outline icons for the four benefit cards, in card order
const BENEFIT_ICONS: [&str; 4] = [
    "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
    "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
    "M17 8h2a2 2 0 012 2v6a2 2 0 01-2 2h-2v4l-4-4H9a1.994 1.994 0 01-1.414-.586m0 0L11 14h4a2 2 0 002-2V6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2v4l.586-.586z",
];
const HERO_IMAGE: &str = "/images/photo-1.svg";
const STORY_IMAGES: [&str; 2] = ["/images/photo-2.svg", "/images/photo-3.svg"];
const WHY_ME_IMAGE: &str = "/images/photo-1.svg";

/// Elements that animate in on first scroll into view.
struct RevealTargets {
    countdown: NodeRef,
    benefits: Vec<NodeRef>,
    stories: Vec<NodeRef>,
    why_me: NodeRef,
    scheduler: NodeRef,
}

impl RevealTargets {
    // Both languages carry the same list lengths, so any tree sizes the refs
    fn for_tree(tree: &PageContent) -> Self {
        let refs = |n: usize| (0..n).map(|_| NodeRef::default()).collect();
        Self {
            countdown: NodeRef::default(),
            benefits: refs(tree.benefits.items.len()),
            stories: refs(tree.stories.items.len()),
            why_me: NodeRef::default(),
            scheduler: NodeRef::default(),
        }
    }

    fn all(&self) -> impl Iterator<Item = &NodeRef> {
        std::iter::once(&self.countdown)
            .chain(self.benefits.iter())
            .chain(self.stories.iter())
            .chain(std::iter::once(&self.why_me))
            .chain(std::iter::once(&self.scheduler))
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_context::<LanguageContext>()
        .map(|ctx| *ctx)
        .unwrap_or_default();
    let active = language.active();
    let tree = store().get_tree(active);

    let targets = use_memo(
        |_| match store().get_tree(active) {
            Ok(tree) => RevealTargets::for_tree(tree),
            Err(_) => RevealTargets::for_tree(&EMPTY_LISTS),
        },
        (),
    );

    // One observer for the page's lifetime, disconnected on unmount
    {
        let targets = targets.clone();
        use_effect_with_deps(
            move |_| {
                let scheduler = RevealScheduler::mount();
                for node in targets.all() {
                    if let Some(element) = node.cast::<Element>() {
                        scheduler.register(&element);
                    }
                }
                move || drop(scheduler)
            },
            (),
        );
    }

    let tree = match tree {
        Ok(tree) => tree,
        Err(err) => {
            log::error!("{}", err);
            return html! {};
        }
    };

    let scroll_to_contact = Callback::from(|_: MouseEvent| scroll_to_id(config::CONTACT_SECTION_ID));

    html! {
        <div class="landing-page" lang={active.code()} dir={language.direction().as_str()}>
            <style>{LANDING_CSS}</style>
            <header class="site-header">
                <a href="/" class="brand">{tree.nav.brand}</a>
                <nav class="site-nav">
                    <LanguageToggle />
                    <button class="outline-button" onclick={scroll_to_contact.clone()}>
                        {tree.nav.contact_button}
                    </button>
                </nav>
            </header>
            <main>
                { hero(&tree.hero, scroll_to_contact) }
                <CountdownTimer node_ref={targets.countdown.clone()} />
                { benefits(&tree.benefits, &targets.benefits) }
                { stories(&tree.stories, &targets.stories) }
                { why_me(&tree.why_me, &targets.why_me) }
                <SchedulerEmbed content={&tree.scheduler} node_ref={targets.scheduler.clone()} />
                <ContactForm content={&tree.contact} direction={language.direction()} />
            </main>
            <footer class="site-footer">
                <p>{format!("© {} {}", current_year(), tree.footer.tagline)}</p>
            </footer>
        </div>
    }
}

fn hero(content: &HeroContent, on_cta: Callback<MouseEvent>) -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-veil"></div>
                <img src={HERO_IMAGE} alt={content.background_alt} />
            </div>
            <div class="hero-content">
                <h1 class="fade-in">
                    {content.title_lead}<br />
                    <span class="highlight">{content.title_highlight}</span><br />
                    {content.title_tail}
                </h1>
                <div class="hero-questions fade-in delay-1">
                    { for content.questions.iter().map(|q| html! { <p>{*q}</p> }) }
                </div>
                <div class="proof-box fade-in delay-2">
                    <p class="proof-lead">
                        {content.proof_lead}<br />
                        <span class="highlight">{content.proof_highlight}</span>
                    </p>
                    <p>{content.proof_body}</p>
                </div>
                <button class="primary-button fade-in delay-3" onclick={on_cta}>{content.cta}</button>
            </div>
        </section>
    }
}

fn benefits(content: &BenefitsContent, refs: &[NodeRef]) -> Html {
    html! {
        <section class="benefits-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>
                <div class="card-grid">
                    { for content.items.iter().zip(refs).enumerate().map(|(i, (card, node_ref))| html! {
                        <div ref={node_ref.clone()} class={classes!("benefit-card", "scroll-animation", scroll_delay(i))}>
                            <div class="benefit-icon">
                                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={BENEFIT_ICONS[i % BENEFIT_ICONS.len()]} />
                                </svg>
                            </div>
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn stories(content: &StoriesContent, refs: &[NodeRef]) -> Html {
    html! {
        <section class="stories-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>
                <div class="card-grid">
                    { for content.items.iter().zip(refs).enumerate().map(|(i, (story, node_ref))| html! {
                        <div ref={node_ref.clone()} class={classes!("story-card", "scroll-animation", scroll_delay(i))}>
                            <div class="story-image">
                                <img src={STORY_IMAGES[i % STORY_IMAGES.len()]} alt={story.image_alt} loading="lazy" />
                            </div>
                            <h3>{story.quote}</h3>
                            <p>{story.body}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn why_me(content: &WhyMeContent, node_ref: &NodeRef) -> Html {
    html! {
        <section class="why-me-section">
            <div ref={node_ref.clone()} class="section-inner why-me-grid scroll-animation">
                <div class="why-me-image">
                    <img src={WHY_ME_IMAGE} alt={content.image_alt} loading="lazy" />
                </div>
                <div>
                    <h2>{content.title}</h2>
                    <div class="reason-list">
                        { for content.reasons.iter().map(|reason| html! {
                            <div class="reason">
                                <h3>{reason.title}</h3>
                                <p>{reason.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn scroll_delay(index: usize) -> String {
    format!("scroll-delay-{}", index % 4 + 1)
}

// Sizes the reveal refs when no tree is registered at all
static EMPTY_LISTS: PageContent = {
    use crate::content::schema::*;
    PageContent {
        meta: MetaContent { title: "", description: "" },
        nav: NavContent { brand: "", contact_button: "", language_toggle: "" },
        hero: HeroContent {
            title_lead: "",
            title_highlight: "",
            title_tail: "",
            questions: &[],
            proof_lead: "",
            proof_highlight: "",
            proof_body: "",
            cta: "",
            background_alt: "",
        },
        countdown: CountdownContent { heading: "", days: "", hours: "", minutes: "", seconds: "", expired: "" },
        benefits: BenefitsContent { title: "", subtitle: "", items: &[] },
        stories: StoriesContent { title: "", subtitle: "", items: &[] },
        why_me: WhyMeContent { title: "", image_alt: "", reasons: &[] },
        scheduler: SchedulerContent { title: "", subtitle: "", frame_title: "" },
        contact: ContactContent {
            title: "",
            subtitle: "",
            name_label: "",
            name_placeholder: "",
            phone_label: "",
            phone_placeholder: "",
            email_label: "",
            email_placeholder: "",
            message_label: "",
            message_placeholder: "",
            submit: "",
        },
        footer: FooterContent { tagline: "" },
    }
};

const LANDING_CSS: &str = r#"
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .landing-page {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        font-family: 'Heebo', 'Rubik', sans-serif;
        color: #111827;
        background: linear-gradient(to bottom, rgba(255, 241, 242, 0.5), #fff);
    }
    .fade-in {
        animation: fadeIn 0.8s ease-out forwards;
        opacity: 0;
    }
    .delay-1 { animation-delay: 0.2s; }
    .delay-2 { animation-delay: 0.4s; }
    .delay-3 { animation-delay: 0.6s; }
    .scroll-animation {
        opacity: 0;
        transform: translateY(20px);
        transition: all 0.8s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .scroll-animation.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
    .scroll-delay-1 { transition-delay: 0.1s; }
    .scroll-delay-2 { transition-delay: 0.2s; }
    .scroll-delay-3 { transition-delay: 0.3s; }
    .scroll-delay-4 { transition-delay: 0.4s; }
    .site-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1.25rem 1.5rem;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(4px);
        border-bottom: 1px solid #ffe4e6;
        position: sticky;
        top: 0;
        z-index: 50;
    }
    .brand {
        font-family: 'Rubik', sans-serif;
        font-size: 1.75rem;
        font-weight: 700;
        color: #9f1239;
        text-decoration: none;
    }
    .site-nav { display: flex; align-items: center; gap: 1rem; }
    .outline-button, .language-toggle {
        border: 1px solid #fecdd3;
        color: #9f1239;
        background: transparent;
        border-radius: 9999px;
        padding: 0.6rem 2rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .language-toggle { padding: 0.6rem 1.2rem; }
    .primary-button {
        border: none;
        border-radius: 9999px;
        background: #e11d48;
        color: #fff;
        font-size: 1.25rem;
        padding: 1.25rem 3rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(254, 205, 211, 0.5);
        transition: all 0.2s;
    }
    .primary-button:hover { background: #be123c; }
    .highlight { color: #e11d48; }
    .hero {
        position: relative;
        padding: 8rem 1.5rem 5rem;
        overflow: hidden;
    }
    .hero-background { position: absolute; inset: 0; }
    .hero-background img { width: 100%; height: 100%; object-fit: cover; }
    .hero-veil {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.95), rgba(255, 255, 255, 0.8));
        z-index: 1;
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 1000px;
        margin: 0 auto;
        text-align: center;
    }
    .hero-content h1 { font-size: 3.5rem; line-height: 1.2; margin-bottom: 2rem; }
    .hero-questions p { font-size: 1.4rem; color: #4b5563; margin: 1.5rem 0; }
    .proof-box {
        background: rgba(255, 255, 255, 0.8);
        border-radius: 1.5rem;
        padding: 2.5rem;
        margin: 3rem 0;
    }
    .proof-lead { font-size: 1.75rem; font-weight: 500; }
    .countdown-banner {
        max-width: 800px;
        margin: 0 auto;
        padding: 2rem 1.5rem;
        text-align: center;
    }
    .countdown-heading { font-size: 1.3rem; color: #4b5563; }
    .countdown-units { display: flex; justify-content: center; gap: 1rem; }
    .countdown-unit {
        display: flex;
        flex-direction: column;
        min-width: 5rem;
        padding: 1rem;
        border-radius: 1rem;
        background: #fff1f2;
    }
    .countdown-value { font-size: 2.25rem; font-weight: 700; color: #e11d48; font-variant-numeric: tabular-nums; }
    .countdown-label { color: #6b7280; }
    .section-inner { max-width: 1000px; margin: 0 auto; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2, .why-me-grid h2, .scheduler-section h2, .contact-section h2 {
        font-family: 'Rubik', sans-serif;
        font-size: 2.75rem;
    }
    .section-subtitle { font-size: 1.25rem; color: #4b5563; }
    .benefits-section, .stories-section, .why-me-section, .scheduler-section, .contact-section {
        padding: 6rem 1.5rem;
    }
    .card-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
    .benefit-card {
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid #ffe4e6;
        background: linear-gradient(to bottom right, #fff1f2, #fff);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05);
    }
    .benefit-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 1rem;
        background: #ffe4e6;
        color: #e11d48;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
    }
    .benefit-icon svg { width: 1.75rem; height: 1.75rem; }
    .story-image { height: 300px; border-radius: 1.5rem; overflow: hidden; margin-bottom: 1.5rem; }
    .story-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
    .story-image img:hover { transform: scale(1.05); }
    .why-me-section { background: linear-gradient(to bottom, #fff, #fff1f2); }
    .why-me-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; align-items: center; }
    .why-me-image { height: 500px; border-radius: 1.5rem; overflow: hidden; }
    .why-me-image img { width: 100%; height: 100%; object-fit: cover; }
    .reason { background: #fff; padding: 1.5rem; border-radius: 1rem; margin-bottom: 1.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05); }
    .scheduler-section { max-width: 800px; margin: 0 auto; text-align: center; }
    .contact-inner { max-width: 600px; margin: 0 auto; text-align: center; }
    .contact-card {
        border-radius: 1.5rem;
        padding: 2rem;
        background: linear-gradient(to bottom right, #fff1f2, #fff);
        box-shadow: 0 20px 25px rgba(255, 228, 230, 0.2);
    }
    .contact-form.text-right { text-align: right; }
    .contact-form.text-left { text-align: left; }
    .form-field { margin-bottom: 1.5rem; }
    .form-field label { display: block; font-size: 1.1rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
    .form-field input, .form-field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid #ffe4e6;
        font-size: 1rem;
    }
    .form-submit { text-align: center; padding-top: 1rem; }
    .site-footer { padding: 2.5rem 1.5rem; border-top: 1px solid #ffe4e6; background: #fff; text-align: center; color: #4b5563; }
    @media (max-width: 768px) {
        .hero-content h1 { font-size: 2.5rem; }
        .card-grid, .why-me-grid { grid-template-columns: 1fr; }
        .why-me-image { height: 320px; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn referenced_images_ship_with_the_page() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let index = std::fs::read_to_string(root.join("index.html")).unwrap();
        assert!(index.contains(r#"data-trunk rel="copy-dir" href="images""#));

        let mut paths = vec![HERO_IMAGE, WHY_ME_IMAGE];
        paths.extend(STORY_IMAGES);
        paths.push("/images/logo.svg");
        for path in paths {
            let file = root.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "{} is missing", file.display());
        }
    }
}
