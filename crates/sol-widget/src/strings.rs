//! Localized widget text.

use sol_common::Language;

/// User-facing labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStrings {
    pub title: &'static str,
    pub launcher_label: &'static str,
    pub welcome_message: &'static str,
    pub input_placeholder: &'static str,
    pub close_label: &'static str,
    pub send_label: &'static str,
    pub waiting_label: &'static str,
}

const EN: WidgetStrings = WidgetStrings {
    title: "Sol",
    launcher_label: "Chat with Sol",
    welcome_message: "Hi! I'm Sol, your virtual assistant. How can I help you find your next car today?",
    input_placeholder: "Ask about cars...",
    close_label: "Close chat",
    send_label: "Send message",
    waiting_label: "Sol is typing...",
};

const ES: WidgetStrings = WidgetStrings {
    title: "Sol",
    launcher_label: "Hablar con Sol",
    welcome_message: "¡Hola! Soy Sol, tu asistente virtual. ¿Cómo puedo ayudarte a encontrar tu próximo auto hoy?",
    input_placeholder: "Pregunta sobre autos...",
    close_label: "Cerrar chat",
    send_label: "Enviar mensaje",
    waiting_label: "Sol está escribiendo...",
};

pub fn strings_for(language: Language) -> &'static WidgetStrings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}
