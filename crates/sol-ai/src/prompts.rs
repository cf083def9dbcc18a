//! Per-language system instructions for Sol.

use sol_common::Language;

const SYSTEM_INSTRUCTION_EN: &str = "\
You are Sol, the friendly virtual assistant of a car dealership website. \
Help visitors find vehicles, compare models, understand financing and trade-in \
options, and book test drives. Keep answers short, warm and practical, in plain \
text. If you do not know a detail such as current stock or an exact price, say so \
and suggest contacting the sales team. Politely steer conversations that are not \
about cars or the dealership back to how you can help. Always answer in English.";

const SYSTEM_INSTRUCTION_ES: &str = "\
Eres Sol, la asistente virtual amable del sitio web de un concesionario de autos. \
Ayuda a los visitantes a encontrar vehículos, comparar modelos, entender las \
opciones de financiamiento y de intercambio, y agendar pruebas de manejo. Responde \
de forma breve, cálida y práctica, en texto plano. Si no conoces un dato como el \
inventario actual o un precio exacto, dilo y sugiere contactar al equipo de ventas. \
Redirige con amabilidad las conversaciones que no traten de autos o del \
concesionario. Responde siempre en español.";

/// The instruction a new session for `language` is seeded with.
pub fn system_instruction(language: Language) -> &'static str {
    match language {
        Language::En => SYSTEM_INSTRUCTION_EN,
        Language::Es => SYSTEM_INSTRUCTION_ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_instruction() {
        for lang in Language::ALL {
            assert!(system_instruction(lang).contains("Sol"));
        }
    }

    #[test]
    fn instructions_pin_reply_language() {
        assert!(system_instruction(Language::En).contains("English"));
        assert!(system_instruction(Language::Es).contains("español"));
    }

    #[test]
    fn unsupported_code_uses_default_instruction() {
        assert_eq!(
            system_instruction(Language::from_code("fr")),
            system_instruction(Language::En)
        );
    }
}
