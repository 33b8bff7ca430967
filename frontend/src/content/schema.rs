use serde::Serialize;

/// Every piece of copy on the page. One instance exists per language, so a
/// section that is added here has to be translated before anything compiles.
#[derive(Debug, PartialEq, Serialize)]
pub struct PageContent {
    pub meta: MetaContent,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub countdown: CountdownContent,
    pub benefits: BenefitsContent,
    pub stories: StoriesContent,
    pub why_me: WhyMeContent,
    pub scheduler: SchedulerContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MetaContent {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NavContent {
    pub brand: &'static str,
    pub contact_button: &'static str,
    /// Label of the switch, written in the language it switches to.
    pub language_toggle: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroContent {
    pub title_lead: &'static str,
    pub title_highlight: &'static str,
    pub title_tail: &'static str,
    pub questions: &'static [&'static str],
    pub proof_lead: &'static str,
    pub proof_highlight: &'static str,
    pub proof_body: &'static str,
    pub cta: &'static str,
    pub background_alt: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CountdownContent {
    pub heading: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub expired: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BenefitsContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Card],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Story {
    pub quote: &'static str,
    pub body: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct StoriesContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Story],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct WhyMeContent {
    pub title: &'static str,
    pub image_alt: &'static str,
    pub reasons: &'static [Card],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SchedulerContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub frame_title: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FooterContent {
    pub tagline: &'static str,
}
