use super::schema::*;

pub static CONTENT: PageContent = PageContent {
    meta: MetaContent {
        title: "אושרי שלם - ייעוץ כלכלי לזוגות צעירים",
        description: "ייעוץ כלכלי מקצועי לזוגות צעירים - תכנון פיננסי, ניהול תקציב והשקעות לטווח ארוך",
    },
    nav: NavContent {
        brand: "אושרי שלם",
        contact_button: "צרי קשר",
        language_toggle: "English",
    },
    hero: HeroContent {
        title_lead: "מה אם נגיד לך",
        title_highlight: "שאפשר לחסוך ולהרוויח",
        title_tail: "בלי להתאמץ יותר מדי?",
        questions: &[
            "שיהיה לך תקציב מסודר בלי לוותר על החיים הטובים?",
            "שתוכלו לקנות דירה בלי לחכות עשר שנים?",
            "שתוכלו לבנות עתיד כלכלי בטוח לכם ולילדים שלכם?",
        ],
        proof_lead: "השנה, עזרתי ליותר מ-50 זוגות צעירים",
        proof_highlight: "לבנות תכנית כלכלית מנצחת",
        proof_body: "עם ליווי אישי, תכנון מדויק והכוונה מקצועית - גם אתם יכולים להגיע ליציבות כלכלית",
        cta: "לפגישת ייעוץ ראשונה חינם",
        background_alt: "רקע כלכלי",
    },
    countdown: CountdownContent {
        heading: "ההטבה לפגישת הייעוץ החינמית מסתיימת בעוד",
        days: "ימים",
        hours: "שעות",
        minutes: "דקות",
        seconds: "שניות",
        expired: "ההטבה הסתיימה - עדיין אפשר לקבוע פגישה",
    },
    benefits: BenefitsContent {
        title: "מה תקבלו בפגישת הייעוץ?",
        subtitle: "הצעד הראשון שלכם לעתיד כלכלי בטוח",
        items: &[
            Card {
                title: "ניתוח מצב קיים",
                body: "נבחן יחד את המצב הכלכלי הנוכחי שלכם, נזהה דפוסי התנהלות ונמפה את האתגרים והיעדים שלכם",
            },
            Card {
                title: "תכנית פעולה ראשונית",
                body: "תקבלו המלצות מעשיות וצעדים ראשונים שאפשר ליישם כבר מחר בבוקר לשיפור המצב הכלכלי",
            },
            Card {
                title: "מיפוי הזדמנויות",
                body: "נזהה יחד הזדמנויות לחיסכון, השקעה וצמיחה כלכלית שמתאימות בדיוק למצב שלכם",
            },
            Card {
                title: "מענה לשאלות",
                body: "תקבלו מענה מקצועי לכל השאלות שמטרידות אתכם בנושאי כלכלת המשפחה",
            },
        ],
    },
    stories: StoriesContent {
        title: "סיפורי הצלחה",
        subtitle: "זוגות שכבר בדרך להצלחה כלכלית",
        items: &[
            Story {
                quote: "״תוך שנה הצלחנו לחסוך למקדמה לדירה״",
                body: "דן ומיכל, זוג צעיר מחיפה, הצליחו לחסוך 200,000 ₪ בשנה אחת בלבד",
                image_alt: "סיפור הצלחה 1",
            },
            Story {
                quote: "״סוף סוף יש לנו תקציב מסודר״",
                body: "רועי ושירה למדו לנהל נכון את התקציב החודשי ולחסוך מבלי להתקמצן",
                image_alt: "סיפור הצלחה 2",
            },
        ],
    },
    why_me: WhyMeContent {
        title: "למה לבחור בי?",
        image_alt: "ייעוץ כלכלי",
        reasons: &[
            Card {
                title: "ניסיון מוכח",
                body: "עזרתי ליותר מ-50 זוגות צעירים להגיע ליציבות כלכלית",
            },
            Card {
                title: "גישה אישית",
                body: "כל תכנית מותאמת במיוחד לצרכים ולמטרות שלכם",
            },
            Card {
                title: "תוצאות מהירות",
                body: "תראו שיפור משמעותי כבר בחודשים הראשונים",
            },
        ],
    },
    scheduler: SchedulerContent {
        title: "קבעו פגישה ביומן",
        subtitle: "בחרו את המועד שהכי נוח לכם",
        frame_title: "טופס קביעת פגישה",
    },
    contact: ContactContent {
        title: "בואו נתחיל במסע",
        subtitle: "השאירו פרטים ואחזור אליכם תוך 24 שעות לקביעת פגישת ייעוץ ראשונה חינם",
        name_label: "שם מלא",
        name_placeholder: "הכניסו את שמכם המלא",
        phone_label: "טלפון",
        phone_placeholder: "הכניסו את מספר הטלפון שלכם",
        email_label: "אימייל",
        email_placeholder: "הכניסו את כתובת האימייל שלכם",
        message_label: "איך אוכל לעזור לכם?",
        message_placeholder: "ספרו לי על המצב הכלכלי שלכם והיעדים שלכם",
        submit: "קביעת פגישת ייעוץ חינם",
    },
    footer: FooterContent {
        tagline: "אושרי שלם - ייעוץ כלכלי לזוגות צעירים",
    },
};
