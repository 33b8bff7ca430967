use super::schema::*;

pub static CONTENT: PageContent = PageContent {
    meta: MetaContent {
        title: "Oshri Shalem - Financial Consulting for Young Couples",
        description: "Professional financial consulting for young couples - financial planning, budgeting and long-term investing",
    },
    nav: NavContent {
        brand: "Oshri Shalem",
        contact_button: "Contact me",
        language_toggle: "עברית",
    },
    hero: HeroContent {
        title_lead: "What if we told you",
        title_highlight: "you can save and earn more",
        title_tail: "without working too hard?",
        questions: &[
            "An organized budget without giving up the good life?",
            "Buying an apartment without waiting ten years?",
            "Building a secure financial future for you and your kids?",
        ],
        proof_lead: "This year I helped more than 50 young couples",
        proof_highlight: "build a winning financial plan",
        proof_body: "With personal guidance, precise planning and professional direction - you can reach financial stability too",
        cta: "Book a free first consultation",
        background_alt: "Financial background",
    },
    countdown: CountdownContent {
        heading: "The free consultation offer ends in",
        days: "Days",
        hours: "Hours",
        minutes: "Minutes",
        seconds: "Seconds",
        expired: "The offer has ended - you can still book a meeting",
    },
    benefits: BenefitsContent {
        title: "What do you get in the consultation?",
        subtitle: "Your first step towards a secure financial future",
        items: &[
            Card {
                title: "Current state analysis",
                body: "Together we review your current finances, spot spending patterns and map your challenges and goals",
            },
            Card {
                title: "Initial action plan",
                body: "Practical recommendations and first steps you can start on tomorrow morning",
            },
            Card {
                title: "Opportunity mapping",
                body: "We find the saving, investing and growth opportunities that fit your exact situation",
            },
            Card {
                title: "Answers to your questions",
                body: "Professional answers to every household finance question that keeps you up at night",
            },
        ],
    },
    stories: StoriesContent {
        title: "Success stories",
        subtitle: "Couples already on their way to financial success",
        items: &[
            Story {
                quote: "\"Within a year we saved for an apartment down payment\"",
                body: "Dan and Michal, a young couple from Haifa, saved 200,000 ILS in just one year",
                image_alt: "Success story 1",
            },
            Story {
                quote: "\"Finally we have an organized budget\"",
                body: "Roy and Shira learned to manage their monthly budget and save without penny-pinching",
                image_alt: "Success story 2",
            },
        ],
    },
    why_me: WhyMeContent {
        title: "Why choose me?",
        image_alt: "Financial consulting",
        reasons: &[
            Card {
                title: "Proven experience",
                body: "I helped more than 50 young couples reach financial stability",
            },
            Card {
                title: "Personal approach",
                body: "Every plan is tailored to your needs and goals",
            },
            Card {
                title: "Fast results",
                body: "You will see a real improvement within the first months",
            },
        ],
    },
    scheduler: SchedulerContent {
        title: "Book a meeting",
        subtitle: "Pick the time that suits you best",
        frame_title: "Meeting booking form",
    },
    contact: ContactContent {
        title: "Let's start the journey",
        subtitle: "Leave your details and I will get back to you within 24 hours to set up a free first consultation",
        name_label: "Full name",
        name_placeholder: "Enter your full name",
        phone_label: "Phone",
        phone_placeholder: "Enter your phone number",
        email_label: "Email",
        email_placeholder: "Enter your email address",
        message_label: "How can I help you?",
        message_placeholder: "Tell me about your financial situation and your goals",
        submit: "Book a free consultation",
    },
    footer: FooterContent {
        tagline: "Oshri Shalem - Financial Consulting for Young Couples",
    },
};
