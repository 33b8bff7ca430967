// Build-time overrides: FORM_ENDPOINT=... SCHEDULER_EMBED_URL=... trunk build --release

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";
const DEFAULT_SCHEDULER_EMBED_URL: &str =
    "https://tally.so/embed/YOUR_FORM_ID?alignLeft=1&hideTitle=1&transparentBackground=1";

pub const SCHEDULER_SCRIPT_SRC: &str = "https://tally.so/widgets/embed.js";
/// Global the widget script installs on `window`.
pub const SCHEDULER_GLOBAL: &str = "Tally";

pub const CONTACT_SECTION_ID: &str = "contact-form";

pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

pub fn get_scheduler_embed_url() -> &'static str {
    option_env!("SCHEDULER_EMBED_URL").unwrap_or(DEFAULT_SCHEDULER_EMBED_URL)
}
