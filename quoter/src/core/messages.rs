//! Localized text used outside of the numeric core

use shared::Locale;

/// Shown while the tip request is in flight
pub fn tip_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Consultando especialista...",
        Locale::En => "Consulting specialist...",
    }
}

/// Substituted whenever the tip service fails
pub fn fallback_tip(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Mantenha as juntas preenchidas com areia fina para garantir o travamento.",
        Locale::En => "Keep the joints filled with fine sand to lock the pavers in place.",
    }
}

/// Prompt sent to the text-completion service
pub fn tip_prompt(locale: Locale, area: f64, total_pavers: u64, model_name: &str) -> String {
    match locale {
        Locale::PtBr => format!(
            "O usuário está calculando o paver modelo \"{model_name}\" para uma área de {area}m² \
             (total de {total_pavers} peças). Dê uma dica curta e profissional de obra ou \
             instalação especificamente para esse tipo de paver em português. Máximo de 15 palavras."
        ),
        Locale::En => format!(
            "The user is estimating the \"{model_name}\" paver for an area of {area}m² \
             ({total_pavers} pieces in total). Give one short, professional installation or \
             job-site tip specific to this paver type, in English. Maximum of 15 words."
        ),
    }
}

/// Label for the suggested margins
pub fn margin_label(locale: Locale, margin: u32) -> String {
    let reason = match (locale, margin) {
        (Locale::PtBr, 0) => "Exato",
        (Locale::PtBr, 5) => "Padrão",
        (Locale::PtBr, 10) => "Recortes",
        (Locale::PtBr, 15) => "Curvas",
        (Locale::En, 0) => "Exact",
        (Locale::En, 5) => "Standard",
        (Locale::En, 10) => "Cuts",
        (Locale::En, 15) => "Curves",
        _ => return format!("{margin}%"),
    };
    format!("{margin}% ({reason})")
}
