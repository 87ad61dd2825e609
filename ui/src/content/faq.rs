#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Как зайти на сервер?",
        answer: "Открой Minecraft, нажми \"Мультиплеер\" и добавь IP сервера. Свяжись с нами в Telegram для получения IP.",
    },
    FaqEntry {
        question: "Какие режимы есть?",
        answer: "У нас есть выживание, PvP арена, мини-игры и строительный режим. Постоянно добавляем новые!",
    },
    FaqEntry {
        question: "Сервер бесплатный?",
        answer: "Да! Играть можно совершенно бесплатно. Привилегии дают дополнительные возможности.",
    },
    FaqEntry {
        question: "Как купить привилегию?",
        answer: "Нажми на кнопку \"Купить\" в разделе Донат. Ты перейдешь в Telegram для оформления покупки.",
    },
];
