use yew::prelude::*;

use crate::config;
use crate::content::schema::ContactContent;
use crate::content::TextDirection;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub content: &'static ContactContent,
    pub direction: TextDirection,
}

/// Lead form. Submission is a plain POST to the external form service, with
/// only browser-native validation.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let content = props.content;
    let dir = props.direction.as_str();
    let align = match props.direction {
        TextDirection::Rtl => "text-right",
        TextDirection::Ltr => "text-left",
    };

    html! {
        <section id={config::CONTACT_SECTION_ID} class="contact-section">
            <div class="contact-inner">
                <h2>{content.title}</h2>
                <p class="section-subtitle">{content.subtitle}</p>
                <div class="contact-card">
                    <form action={config::get_form_endpoint()} method="POST" class={classes!("contact-form", align)}>
                        <div class="form-field">
                            <label for="name">{content.name_label}</label>
                            <input type="text" name="name" id="name" required=true placeholder={content.name_placeholder} />
                        </div>
                        <div class="form-field">
                            <label for="phone">{content.phone_label}</label>
                            <input type="tel" name="phone" id="phone" required=true placeholder={content.phone_placeholder} dir={dir} />
                        </div>
                        <div class="form-field">
                            <label for="email">{content.email_label}</label>
                            <input type="email" name="email" id="email" required=true placeholder={content.email_placeholder} dir={dir} />
                        </div>
                        <div class="form-field">
                            <label for="message">{content.message_label}</label>
                            <textarea name="message" id="message" rows="4" placeholder={content.message_placeholder} />
                        </div>
                        <div class="form-submit">
                            <button type="submit" class="primary-button">{content.submit}</button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
