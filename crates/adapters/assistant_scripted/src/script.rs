//! The dialogue script — recognized intents and their fixed responses.
//!
//! Matching is case-insensitive keyword search, checked in declaration order;
//! the first hit wins. Quick-reply buttons in the UI send these exact phrases,
//! so free typing is a fallback path, not the primary one.

/// System message the UI sends when the user taps the humidity alert.
pub const HUMIDITY_TRIGGER: &str = "[SYSTEM_TRIGGER]: humidity alert";

/// A recognized user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    HumidityAlert,
    CleanFilter,
    UserManual,
    BookService,
    ConfirmBooking,
    GuideMe,
    ProductInfo,
    Consultant,
    Skip,
    Unknown,
}

/// Map a user message to an intent.
pub(crate) fn recognize(message: &str) -> Intent {
    if message.starts_with("[SYSTEM_TRIGGER]") {
        return Intent::HumidityAlert;
    }

    let text = message.to_lowercase();
    let rules: &[(&[&str], Intent)] = &[
        (&["clean"], Intent::CleanFilter),
        (&["manual"], Intent::UserManual),
        (&["book", "service"], Intent::BookService),
        (&["confirm", "yes"], Intent::ConfirmBooking),
        (&["guide"], Intent::GuideMe),
        (&["price", "information"], Intent::ProductInfo),
        (&["consultant"], Intent::Consultant),
        (&["skip"], Intent::Skip),
    ];

    for (keywords, intent) in rules {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *intent;
        }
    }
    Intent::Unknown
}

/// The scripted response for an intent.
pub(crate) fn respond(intent: Intent) -> &'static str {
    match intent {
        Intent::HumidityAlert => {
            "Hello! In this humid season, clothes take longer to dry and pick up \
             odors easily. Your washer-dryer has a hot-water wash mode that removes \
             99.9% of bacteria and allergens. Have you tried it yet?"
        }
        Intent::CleanFilter => {
            "Great! This only takes 5 minutes. I'll send you a video tutorial on \
             removing and re-installing the filter for your model.\n\
             [Video Tutorial: Filter Cleaning]\n\
             If you need more details, you can view the full User Manual here."
        }
        Intent::UserManual => {
            "Here's the complete User Manual for your appliance: [PDF Link: User \
             Manual]. The filter cleaning section is on pages 15-17 — worth \
             bookmarking for later. Anything else I can help with?"
        }
        Intent::BookService => {
            "Of course! To keep the machine running at its best you can schedule a \
             standard cleaning service. As a loyal customer you get a 20% discount \
             voucher for this appointment.\n\
             Service detail:\n\
             - Price: 400,000 VND (20% off)\n\
             - Time: 14:00 tomorrow"
        }
        Intent::ConfirmBooking => {
            "Perfect! Your appointment has been confirmed for tomorrow at 2:00 PM. \
             The technician will contact you 30 minutes before arrival. Thank you!"
        }
        Intent::GuideMe => {
            "It's very simple — here's where the button sits on the control panel.\n\
             [Image: Control panel with hot-water mode highlighted]\n\
             Select 60°C to sterilize clothes and eliminate odors.\n\
             [DELAY]\n\
             One more thing: in this season indoor air matters too. High humidity is \
             ideal for mold and viruses. Many customers pair the washer with an air \
             purifier that captures both. Want to see how effective it is?"
        }
        Intent::ProductInfo => {
            "[Product Card: Air Purifier]\n\
             - Fine-particle (PM2.5) filtration\n\
             - Coverage: 40m²\n\
             - Special price: 7,641,500 VND (15% off)\n\
             Shall I connect you with a consultant to arrange delivery?"
        }
        Intent::Consultant => {
            "Perfect! I'm connecting you with our consultant team right now.\n\
             [Transferring conversation...]\n\
             A consultant will be with you within 2 minutes. Thank you!"
        }
        Intent::Skip => "Wonderful! I'm glad your device is working perfectly.",
        Intent::Unknown => {
            "I'm not sure I caught that. You can ask me to clean a filter, view the \
             user manual, or book a service appointment."
        }
    }
}
