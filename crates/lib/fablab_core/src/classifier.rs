//! Keyword classifier: decides whether a message gets a canned reply or goes
//! to the completion provider.
//!
//! Rules are checked top to bottom and the first rule with a trigger contained
//! in the normalized message wins. The order is part of the behaviour: a message
//! mentioning both the address and VK is answered with the address.

use crate::facts;

/// Canned-reply category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Address,
    Phone,
    Socials,
    Vk,
    Telegram,
    YouTube,
}

impl Category {
    /// Stable name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Address => "address",
            Category::Phone => "phone",
            Category::Socials => "socials",
            Category::Vk => "vk",
            Category::Telegram => "telegram",
            Category::YouTube => "youtube",
        }
    }
}

/// One entry of the rule table.
#[derive(Debug)]
pub struct KeywordRule {
    pub category: Category,
    /// Lower-case phrases; any one of them fires the rule.
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Outcome of classifying a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Answer with a fixed reply, no provider call.
    Canned {
        category: Category,
        reply: &'static str,
    },
    /// No rule matched; forward to the provider.
    Delegate,
}

const ADDRESS_TRIGGERS: &[&str] = &[
    "адрес",
    "какой у вас адрес",
    "ваш адрес",
    "адрес фаблаб",
    "адрес флаб",
    "где вы находитесь",
    "где находится",
    "где вы находитесь?",
    "где вы",
    "где фаблаб",
    "где находится фаблаб",
    "где находится флаб",
    "как добраться",
    "как к вам добраться",
    "как доехать",
    "как доехать до вас",
    "как доехать до фаблаб",
    "как доехать до флаб",
    "как к вам приехать",
    "как к вам пройти",
    "куда приходить",
    "куда приехать",
    "локация",
    "местоположение",
    "место нахождения",
];

const PHONE_TRIGGERS: &[&str] = &[
    "телефон",
    "тел.",
    "номер телефона",
    "номер тел",
    "какой у вас телефон",
    "ваш телефон",
    "телефон фаблаб",
    "телефон флаб",
    "телефон для связи",
    "контактный телефон",
    "номер для связи",
    "как позвонить",
    "как с вами связаться",
    "как связаться",
    "как записаться по телефону",
    "по какому номеру позвонить",
    "по какому телефону",
];

const SOCIALS_TRIGGERS: &[&str] = &[
    "соцсети",
    "соц сети",
    "социальные сети",
    "ваши соц",
    "ваши социальные сети",
    "ссылки на соц",
    "ссылки на социальные сети",
];

const VK_TRIGGERS: &[&str] = &[
    "вк",
    "vk",
    "вконтакт",
    "вконтакте",
    "ссылка на вк",
    "группа вк",
    "группа во вк",
    "группа вконтакте",
];

const TELEGRAM_TRIGGERS: &[&str] = &[
    "телеграм",
    "telegram",
    "тг",
    "ссылка на телеграм",
    "канал в телеграм",
    "канал в тг",
];

const YOUTUBE_TRIGGERS: &[&str] = &[
    "ютуб",
    "youtube",
    "you tube",
    "канал на ютубе",
    "канал на youtube",
    "ссылка на ютуб",
    "ссылка на youtube",
];

/// Rule table in evaluation order.
pub static RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Address,
        triggers: ADDRESS_TRIGGERS,
        reply: facts::ADDRESS,
    },
    KeywordRule {
        category: Category::Phone,
        triggers: PHONE_TRIGGERS,
        reply: facts::PHONE,
    },
    KeywordRule {
        category: Category::Socials,
        triggers: SOCIALS_TRIGGERS,
        reply: facts::SOCIALS_REPLY,
    },
    KeywordRule {
        category: Category::Vk,
        triggers: VK_TRIGGERS,
        reply: facts::VK_REPLY,
    },
    KeywordRule {
        category: Category::Telegram,
        triggers: TELEGRAM_TRIGGERS,
        reply: facts::TELEGRAM_REPLY,
    },
    KeywordRule {
        category: Category::YouTube,
        triggers: YOUTUBE_TRIGGERS,
        reply: facts::YOUTUBE_REPLY,
    },
];

/// Trims and lower-cases a message for matching.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Classifies a raw message against [`RULES`].
pub fn classify(message: &str) -> Classification {
    let normalized = normalize(message);

    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map_or(Classification::Delegate, |rule| Classification::Canned {
            category: rule.category,
            reply: rule.reply,
        })
}
