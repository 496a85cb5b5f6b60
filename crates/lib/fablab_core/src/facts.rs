//! Fixed texts shown to visitors.
//!
//! The address and phone sentences are used both as canned replies and inside
//! the provider system prompt, so they live here and nowhere else.

/// Address of the lab, returned verbatim for address questions.
pub const ADDRESS: &str = "Адрес ФабЛаб ТюмГУ: г. Тюмень, ул. Ленина 25, 5 этаж.";

/// Contact phone, returned verbatim for phone questions.
pub const PHONE: &str = "Телефон ФабЛаб ТюмГУ: +7 (3452) 57-48-42.";

pub const VK_REPLY: &str = "Наша группа ВКонтакте: https://vk.com/futureprof.academy";
pub const TELEGRAM_REPLY: &str = "Наш Telegram-канал: https://t.me/futureprof_academy";
pub const YOUTUBE_REPLY: &str =
    "Наш YouTube-канал: https://www.youtube.com/channel/UCIv_kRijBFWg-gcA439c1EA";

pub const SOCIALS_REPLY: &str = "Наши социальные сети:\n\
    VK: https://vk.com/futureprof.academy\n\
    Telegram: https://t.me/futureprof_academy\n\
    YouTube: https://www.youtube.com/channel/UCIv_kRijBFWg-gcA439c1EA";

/// Reply for a request without a usable message.
pub const EMPTY_MESSAGE_REPLY: &str = "Пустое сообщение.";

/// Reply for a request body that is not the expected JSON.
pub const INVALID_REQUEST_REPLY: &str = "Некорректный формат запроса.";

/// Reply for every provider-side failure.
pub const FALLBACK_REPLY: &str = "Сейчас я временно недоступен. Попробуйте ещё раз чуть позже.";

/// Builds the system instruction sent with every provider request.
pub fn system_prompt() -> String {
    format!(
        "Ты дружелюбный помощник ФабЛаб ТюмГУ. \
         Всегда отвечай на том же языке, на котором задаёт вопросы пользователь \
         (поддерживаешь русский, английский и другие распространённые языки). \
         {ADDRESS} \
         {PHONE} \
         Если тебя спрашивают адрес, местоположение или как добраться до ФабЛаб ТюмГУ, \
         всегда используй именно этот адрес без изменений. \
         Если тебя спрашивают телефон или как позвонить, \
         всегда используй именно этот номер телефона без изменений."
    )
}
