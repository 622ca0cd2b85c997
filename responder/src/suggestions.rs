//! Quick-reply suggestions for the chat widget.
//!
//! The bucket is a pure function of the last three messages and the context; priority is
//! schedule > duration > emergency > interested service > pricing > fear > appointment > initial.
//! Only user messages inside that window are scanned; bot copy never selects a bucket.

use chatbot_core::{ConversationContext, Message};
use serde::Serialize;

use crate::matching::{contains_any, contains_any_word};

/// Number of trailing messages inspected.
pub const RECENT_WINDOW: usize = 3;

/// One quick-reply chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionBucket {
    Initial,
    Schedule,
    Duration,
    Emergency,
    Aesthetic,
    Implant,
    Orthodontics,
    Treatment,
    Pricing,
    Fear,
    Appointment,
}

impl SuggestionBucket {
    pub fn name(&self) -> &'static str {
        match self {
            SuggestionBucket::Initial => "initial",
            SuggestionBucket::Schedule => "schedule",
            SuggestionBucket::Duration => "duration",
            SuggestionBucket::Emergency => "emergency",
            SuggestionBucket::Aesthetic => "aesthetic",
            SuggestionBucket::Implant => "implant",
            SuggestionBucket::Orthodontics => "orthodontics",
            SuggestionBucket::Treatment => "treatment",
            SuggestionBucket::Pricing => "pricing",
            SuggestionBucket::Fear => "fear",
            SuggestionBucket::Appointment => "appointment",
        }
    }

    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            SuggestionBucket::Initial => &[
                "Quais serviços vocês oferecem?",
                "Quanto custa uma avaliação?",
                "Quero agendar uma consulta",
                "Onde fica a clínica?",
            ],
            SuggestionBucket::Schedule => &[
                "Tem horário amanhã?",
                "Vocês atendem aos sábados?",
                "Qual o horário de funcionamento?",
                "Quero marcar uma avaliação",
            ],
            SuggestionBucket::Duration => &[
                "Quantas sessões são necessárias?",
                "Quanto tempo dura o resultado?",
                "Preciso de repouso depois?",
            ],
            SuggestionBucket::Emergency => &[
                "Vocês atendem urgência hoje?",
                "O que faço até a consulta?",
                "Quanto custa o atendimento de urgência?",
            ],
            SuggestionBucket::Aesthetic => &[
                "Quanto custa o clareamento?",
                "Lentes de contato dental são para mim?",
                "Quanto tempo dura o clareamento?",
            ],
            SuggestionBucket::Implant => &[
                "Quanto tempo leva o implante?",
                "Implante dói?",
                "Vocês parcelam o implante?",
            ],
            SuggestionBucket::Orthodontics => &[
                "Aparelho fixo ou alinhador invisível?",
                "Quanto tempo vou usar aparelho?",
                "Quanto custa a manutenção?",
            ],
            SuggestionBucket::Treatment => &[
                "O procedimento dói?",
                "Quantas consultas vou precisar?",
                "Quero agendar uma avaliação",
            ],
            SuggestionBucket::Pricing => &[
                "Quais as formas de pagamento?",
                "Vocês parcelam?",
                "Tem desconto à vista?",
                "Aceitam PIX?",
            ],
            SuggestionBucket::Fear => &[
                "Tenho medo de dentista",
                "Vocês usam anestesia?",
                "Posso levar um acompanhante?",
            ],
            SuggestionBucket::Appointment => &[
                "Quanto custa a avaliação?",
                "Quanto tempo dura a consulta?",
                "Preciso levar algum exame?",
            ],
        }
    }
}

const SCHEDULE_PHRASES: &[&str] = &[
    "horário",
    "horario",
    "agendar",
    "agenda",
    "marcar",
    "segunda",
    "terça",
    "terca",
    "quarta",
    "quinta",
    "sexta",
    "sábado",
    "sabado",
    "domingo",
    "amanhã",
    "amanha",
    "disponív",
    "disponiv",
];
const DURATION_PHRASES: &[&str] = &["quanto tempo", "demora", "duração", "duracao", "sessões", "sessoes"];
const DURATION_WORDS: &[&str] = &["dura", "duram"];
const EMERGENCY_PHRASES: &[&str] = &[
    "urgência",
    "urgencia",
    "emergência",
    "emergencia",
    "doendo",
    "quebrou",
    "sangrando",
    "inchad",
];
const EMERGENCY_WORDS: &[&str] = &["dor", "dores"];
const PRICING_PHRASES: &[&str] = &[
    "preço",
    "preco",
    "valor",
    "quanto custa",
    "desconto",
    "pagamento",
    "parcel",
    "pix",
    "orçamento",
    "orcamento",
];
const PRICING_WORDS: &[&str] = &["caro", "cara"];
const FEAR_PHRASES: &[&str] = &["medo", "anestesia", "nervos", "ansios", "trauma", "pavor"];
const FEAR_WORDS: &[&str] = &["dói", "doi"];
const APPOINTMENT_PHRASES: &[&str] = &["consulta", "avaliação", "avaliacao", "atendimento", "dentista"];

/// Topic-specific chip appended after the bucket's prompts.
const CONTEXT_EXTRAS: &[(&str, &str, SuggestionBucket)] = &[
    ("clareamento", "Quanto tempo dura o clareamento?", SuggestionBucket::Aesthetic),
    ("payment", "Posso parcelar no cartão?", SuggestionBucket::Pricing),
];

/// Bucket for an interested service, if the service belongs to one.
pub fn service_bucket(service: &str) -> Option<SuggestionBucket> {
    match service {
        "clareamento" | "lentes" | "harmonização" => Some(SuggestionBucket::Aesthetic),
        "implante" | "prótese" => Some(SuggestionBucket::Implant),
        "ortodontia" => Some(SuggestionBucket::Orthodontics),
        "siso" | "extração" | "canal" | "limpeza" | "restauração" | "periodontia" | "bruxismo"
        | "halitose" | "odontopediatria" | "sensibilidade" | "urgência" => {
            Some(SuggestionBucket::Treatment)
        }
        _ => None,
    }
}

fn recent_text(history: &[Message]) -> String {
    let start = history.len().saturating_sub(RECENT_WINDOW);
    history[start..]
        .iter()
        .filter(|m| m.is_from_user())
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn select_bucket(history: &[Message], context: &ConversationContext) -> SuggestionBucket {
    let text = recent_text(history);

    if contains_any(&text, SCHEDULE_PHRASES) {
        return SuggestionBucket::Schedule;
    }
    if contains_any(&text, DURATION_PHRASES) || contains_any_word(&text, DURATION_WORDS) {
        return SuggestionBucket::Duration;
    }
    if contains_any(&text, EMERGENCY_PHRASES) || contains_any_word(&text, EMERGENCY_WORDS) {
        return SuggestionBucket::Emergency;
    }
    if let Some(bucket) = context.interested_service().and_then(service_bucket) {
        return bucket;
    }
    if contains_any(&text, PRICING_PHRASES) || contains_any_word(&text, PRICING_WORDS) {
        return SuggestionBucket::Pricing;
    }
    if contains_any(&text, FEAR_PHRASES) || contains_any_word(&text, FEAR_WORDS) {
        return SuggestionBucket::Fear;
    }
    if contains_any(&text, APPOINTMENT_PHRASES) {
        return SuggestionBucket::Appointment;
    }
    SuggestionBucket::Initial
}

/// Suggestions for the current state: the selected bucket's prompts, plus at most one chip tied to
/// the most recent topic that has one, when its text is not already listed.
pub fn suggestions(history: &[Message], context: &ConversationContext) -> Vec<Suggestion> {
    let bucket = select_bucket(history, context);
    let mut out: Vec<Suggestion> = bucket
        .prompts()
        .iter()
        .enumerate()
        .map(|(i, text)| Suggestion {
            id: format!("{}-{}", bucket.name(), i + 1),
            text: (*text).to_string(),
            category: bucket.name().to_string(),
        })
        .collect();

    let extra = context.recent_topics().iter().rev().find_map(|topic| {
        CONTEXT_EXTRAS
            .iter()
            .find(|(t, _, _)| t == topic)
    });
    if let Some((topic, text, category)) = extra {
        if !out.iter().any(|s| s.text == *text) {
            out.push(Suggestion {
                id: format!("context-{}", topic),
                text: (*text).to_string(),
                category: category.name().to_string(),
            });
        }
    }
    out
}
