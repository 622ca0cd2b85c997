//! Canned replies and lookup tables.
//!
//! Everything here is static text. Discount percentages are baked into the copy and must agree
//! with the floors the rules grant (10, 15 and 20).

use crate::matching::Pattern;

/// One entry of the fallback keyword table. Earlier entries win when several match.
#[derive(Debug, Clone, Copy)]
pub struct KeywordEntry {
    pub pattern: Pattern,
    pub reply: &'static str,
    /// Clinical service this keyword names; recorded as the interested service.
    pub service: Option<&'static str>,
    /// Topic tag appended to the context when this entry replies.
    pub topic: &'static str,
}

/// A full sentence that maps straight to a service and a paired reply.
#[derive(Debug, Clone, Copy)]
pub struct IntentPhrase {
    pub phrase: &'static str,
    pub service: &'static str,
    pub reply: &'static str,
}

/// Reply variants per payment method; one is picked at random.
#[derive(Debug, Clone, Copy)]
pub struct PaymentScripts {
    pub pix: &'static [&'static str],
    pub debit: &'static [&'static str],
    pub credit: &'static [&'static str],
    pub cash: &'static [&'static str],
    pub general: &'static [&'static str],
}

/// All text the responder can say, grouped by the rule that says it.
#[derive(Debug, Clone, Copy)]
pub struct ScriptBook {
    pub welcome: &'static str,
    pub default_reply: &'static str,
    pub idle_warning: &'static str,
    pub goodbye: &'static str,
    pub bereavement: &'static str,
    pub distress: &'static str,
    pub price_primary: &'static str,
    pub price_alternates: &'static [&'static str],
    pub comparison_primary: &'static str,
    pub comparison_alternates: &'static [&'static str],
    pub payment: PaymentScripts,
    pub negative_escalation: &'static str,
    pub negative_escalation_cap: &'static str,
    pub intents: &'static [IntentPhrase],
    pub sentiment_positive: &'static str,
    pub sentiment_negative_discount: &'static str,
    pub sentiment_negative: &'static str,
    pub hard_sell: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub keywords: &'static [KeywordEntry],
}

impl ScriptBook {
    /// Built-in Brazilian Portuguese marketing copy.
    pub const fn portuguese() -> Self {
        Self {
            welcome: WELCOME,
            default_reply: DEFAULT_REPLY,
            idle_warning: IDLE_WARNING,
            goodbye: GOODBYE,
            bereavement: BEREAVEMENT,
            distress: DISTRESS,
            price_primary: PRICE_PRIMARY,
            price_alternates: PRICE_ALTERNATES,
            comparison_primary: COMPARISON_PRIMARY,
            comparison_alternates: COMPARISON_ALTERNATES,
            payment: PaymentScripts {
                pix: PIX,
                debit: DEBIT,
                credit: CREDIT,
                cash: CASH,
                general: PAYMENT_GENERAL,
            },
            negative_escalation: NEGATIVE_ESCALATION,
            negative_escalation_cap: NEGATIVE_ESCALATION_CAP,
            intents: INTENTS,
            sentiment_positive: SENTIMENT_POSITIVE,
            sentiment_negative_discount: SENTIMENT_NEGATIVE_DISCOUNT,
            sentiment_negative: SENTIMENT_NEGATIVE,
            hard_sell: HARD_SELL,
            advantages: ADVANTAGES,
            keywords: KEYWORDS,
        }
    }
}

impl Default for ScriptBook {
    fn default() -> Self {
        Self::portuguese()
    }
}

const WELCOME: &str = "Olá! 😊 Seja bem-vindo(a) à nossa clínica de odontologia e estética.\n\
Estou aqui para tirar suas dúvidas sobre nossos tratamentos.\n\
Como posso te ajudar hoje?";

const DEFAULT_REPLY: &str = "Entendi! 😊 Para te ajudar melhor, você pode me contar um pouco mais?\n\
Posso falar sobre clareamento, implantes, aparelhos, lentes de contato dental, harmonização facial, \
valores e agendamento de avaliação.";

const IDLE_WARNING: &str = "Oi, você ainda está por aí? 😊\n\
Se tiver qualquer dúvida sobre nossos tratamentos ou quiser agendar sua avaliação, é só me chamar!";

const GOODBYE: &str = "Como não tivemos resposta, vou encerrar nosso atendimento por aqui. 💙\n\
Quando quiser, é só voltar a falar com a gente. Até breve!";

const BEREAVEMENT: &str = "Sinto muito pela sua perda. 💙 Sabemos o quanto um momento como esse é difícil.\n\
Queremos cuidar de você com todo o carinho: liberamos um desconto especial de 15% no seu tratamento.\n\
Sem pressa nenhuma. Quando se sentir pronto(a), estaremos aqui para te receber.";

const DISTRESS: &str = "Sinto muito que você esteja passando por isso. 💙 Você não está sozinho(a).\n\
Se precisar conversar com alguém agora, o CVV atende 24h pelo telefone 188 ou pelo site cvv.org.br, de graça e com sigilo.\n\
Cuidar do sorriso também é cuidar da autoestima, e queremos te ajudar nisso: liberamos 20% de desconto no seu tratamento, \
no seu tempo e do seu jeito.";

const PRICE_PRIMARY: &str = "Entendo perfeitamente, o valor é uma parte importante da decisão! 😊\n\
Por isso consegui liberar um desconto de 10% para você fechar o tratamento.\n\
Além disso, parcelamos em até 12x no cartão e a avaliação inicial é gratuita.\n\
Quer que eu reserve um horário para você?";

const PRICE_ALTERNATES: &[&str] = &[
    "Eu te entendo! Mas pense assim: um tratamento bem feito dura anos e evita gastos muito maiores no futuro.\n\
Seu desconto já está garantido e você ainda pode parcelar sem juros. Vamos marcar sua avaliação?",
    "Sei que investir no sorriso pede planejamento. 💙\n\
Com o desconto que já liberamos e o parcelamento no cartão, a parcela fica bem leve.\n\
Posso simular os valores para você na avaliação gratuita?",
];

const COMPARISON_PRIMARY: &str = "Faz todo sentido pesquisar! 😊\n\
Para você comparar com tranquilidade, liberei um desconto especial no seu tratamento aqui com a gente.\n\
E lembre-se: aqui você tem especialistas em cada área, materiais de primeira linha e garantia no tratamento.";

const COMPARISON_ALTERNATES: &[&str] = &[
    "Preço baixo nem sempre significa economia. 🦷\n\
Aqui cada caso é planejado por especialistas, com materiais certificados e acompanhamento depois do tratamento.\n\
Vale a pena conhecer a clínica antes de decidir!",
    "Nossos pacientes escolhem a gente pelo cuidado do começo ao fim: avaliação gratuita, plano de tratamento claro \
e garantia por escrito.\n\
Que tal vir conhecer pessoalmente e tirar todas as dúvidas?",
];

const PIX: &[&str] = &[
    "Aceitamos PIX, sim! ⚡ É rápido e você ainda garante condições especiais para pagamento à vista.",
    "Pode pagar com PIX! 😊 Na recepção geramos o QR Code na hora, sem complicação.",
    "PIX é com a gente! Pagamento instantâneo e você já sai com tudo confirmado. 💙",
];

const DEBIT: &[&str] = &[
    "Aceitamos cartão de débito de todas as bandeiras! 💳",
    "Pode pagar no débito, sim! 😊 É prático e o pagamento já fica confirmado na hora.",
];

const CREDIT: &[&str] = &[
    "Aceitamos cartão de crédito e parcelamos em até 12x! 💳",
    "No crédito você pode parcelar o tratamento em até 12 vezes. 😊 Assim cabe no seu orçamento.",
    "Trabalhamos com as principais bandeiras de crédito e parcelamento facilitado. Quer que eu te explique as condições?",
];

const CASH: &[&str] = &[
    "Pode pagar em dinheiro, sim! 💵 Pagamento à vista tem condições especiais.",
    "Aceitamos dinheiro na recepção. 😊 E à vista você ainda garante uma condição diferenciada.",
];

const PAYMENT_GENERAL: &[&str] = &[
    "Temos várias formas de pagamento: PIX, débito, crédito em até 12x e dinheiro. 😊 Qual fica melhor para você?",
    "Você escolhe como pagar: PIX, cartão de débito, crédito parcelado ou dinheiro. 💙",
];

const NEGATIVE_ESCALATION: &str = "Poxa, sinto que você não está num dia bom. 💙\n\
Quero muito te ajudar a ter um motivo para sorrir: aumentei seu desconto para 15%.\n\
Que tal agendarmos um horário com calma, do jeito que for melhor para você?";

const NEGATIVE_ESCALATION_CAP: &str = "Estou aqui com você. 💙\n\
Para mostrar que queremos mesmo cuidar de você, liberei nosso desconto máximo: 20% no tratamento.\n\
Quando quiser, é só me dizer o melhor dia para a sua avaliação.";

const INTENTS: &[IntentPhrase] = &[
    IntentPhrase {
        phrase: "preciso tirar o dente do juízo",
        service: "siso",
        reply: "Extração de siso é com a gente! 🦷\n\
Nossos cirurgiões avaliam sua radiografia e planejam tudo para um procedimento tranquilo, com anestesia e \
orientações completas de pós-operatório.\nQuer agendar sua avaliação?",
    },
    IntentPhrase {
        phrase: "preciso tirar o dente do juizo",
        service: "siso",
        reply: "Extração de siso é com a gente! 🦷\n\
Nossos cirurgiões avaliam sua radiografia e planejam tudo para um procedimento tranquilo, com anestesia e \
orientações completas de pós-operatório.\nQuer agendar sua avaliação?",
    },
    IntentPhrase {
        phrase: "quero clarear meus dentes",
        service: "clareamento",
        reply: "Ótima escolha! ✨ Temos clareamento de consultório e caseiro com moldeira.\n\
Na avaliação vemos qual técnica combina com você para um resultado bonito e sem sensibilidade.",
    },
    IntentPhrase {
        phrase: "quero colocar aparelho",
        service: "ortodontia",
        reply: "Que legal! 😊 Trabalhamos com aparelho fixo, estético e alinhadores invisíveis.\n\
Na avaliação ortodôntica montamos seu plano e te mostramos o tempo estimado de tratamento.",
    },
    IntentPhrase {
        phrase: "tenho vergonha do meu sorriso",
        service: "lentes",
        reply: "Você merece sorrir sem medo! 💙\n\
Com lentes de contato dental, facetas em resina ou clareamento, transformamos o sorriso de forma natural.\n\
Que tal uma avaliação para vermos juntos o que combina com você?",
    },
    IntentPhrase {
        phrase: "perdi um dente",
        service: "implante",
        reply: "Podemos devolver seu sorriso completo! 🦷\n\
O implante dentário substitui a raiz e a coroa do dente perdido, com aparência e função naturais.\n\
Vamos agendar uma avaliação com nosso implantodontista?",
    },
    IntentPhrase {
        phrase: "estou com dor de dente",
        service: "urgência",
        reply: "Sinto muito pela dor! 😣 Temos atendimento de urgência.\n\
Me diga o melhor horário que tentamos te encaixar ainda hoje. Enquanto isso, evite alimentos muito quentes ou gelados.",
    },
    IntentPhrase {
        phrase: "quero fazer harmonização facial",
        service: "harmonização",
        reply: "Harmonização facial realça sua beleza natural! ✨\n\
Trabalhamos com toxina botulínica, preenchimento com ácido hialurônico e bioestimuladores, sempre com planejamento \
individual. Quer agendar uma avaliação?",
    },
];

const SENTIMENT_POSITIVE: &str = "Que bom saber disso! 😊\n\
Já que o dia está bom, que tal aproveitar para cuidar do seu sorriso? Posso te ajudar com valores ou agendamento.";

const SENTIMENT_NEGATIVE_DISCOUNT: &str = "Sinto muito que você não esteja bem. 💙\n\
Para deixar seu dia um pouco melhor, liberei um desconto de 15% no seu tratamento.\n\
Se quiser conversar sobre qualquer dúvida, estou aqui.";

const SENTIMENT_NEGATIVE: &str = "Sinto muito que você não esteja bem. 💙\n\
Estou aqui para o que precisar, sem pressa nenhuma.";

const HARD_SELL: &[&str] = &[
    "Porque aqui você não é só mais um paciente! 💙\n\
Temos especialistas em cada área, tecnologia de ponta como escaneamento digital e planejamento 3D, \
materiais certificados e garantia por escrito.\n\
Mais de 5 mil sorrisos transformados e avaliação gratuita para você conhecer tudo sem compromisso.",
    "Vou ser direto: você vai ser atendido por especialistas, com horário marcado e sem espera.\n\
Planejamos cada etapa do seu tratamento, explicamos todos os valores antes de começar e acompanhamos você depois.\n\
Segurança, transparência e resultado: é isso que entregamos. Vamos agendar?",
    "Contratar a gente é investir em tranquilidade. 😊\n\
Ambiente acolhedor, protocolos rigorosos de biossegurança, parcelamento em até 12x e suporte pelo WhatsApp no pós-tratamento.\n\
Nossos pacientes voltam e indicam. Quer ser o próximo?",
    "Você merece um tratamento feito com cuidado de verdade. 🦷\n\
Nossa equipe se atualiza constantemente, usamos materiais das melhores marcas e cada plano é feito sob medida.\n\
E se algo não estiver como combinado, resolvemos. Esse é o nosso compromisso.",
    "Porque o seu sorriso é para a vida toda! ✨\n\
Aqui você tem diagnóstico preciso, tecnologia digital, equipe multidisciplinar e condições de pagamento que cabem no bolso.\n\
A primeira avaliação é por nossa conta: venha comprovar.",
];

const ADVANTAGES: &[&str] = &[
    "Nosso diferencial é o atendimento humanizado com especialistas em cada área. 😊",
    "Temos tecnologia digital, materiais certificados e garantia no tratamento. 🦷",
    "Aqui a avaliação é gratuita e você sai com um plano de tratamento claro e sem surpresas. 💙",
    "Horário marcado sem espera, ambiente acolhedor e parcelamento em até 12x. ✨",
    "Milhares de pacientes satisfeitos e acompanhamento completo depois do tratamento. 😊",
];

const GREETING: &str = "Olá! 😊 Que bom ter você por aqui. Como posso te ajudar hoje?";

const THANKS: &str = "Imagina, foi um prazer te ajudar! 💙 Se surgir qualquer dúvida, estou por aqui.";

const FAREWELL: &str = "Até mais! 😊 Quando quiser agendar ou tirar dúvidas, é só chamar.";

const WHITENING: &str = "O clareamento deixa seus dentes até vários tons mais brancos! ✨\n\
Temos clareamento de consultório, com resultado rápido, e caseiro com moldeira personalizada.\n\
Na avaliação indicamos a melhor opção para você.";

const IMPLANT: &str = "O implante dentário é a solução mais moderna para repor dentes perdidos. 🦷\n\
Ele devolve a função de mastigação e a estética do sorriso, com aparência totalmente natural.\n\
Quer agendar uma avaliação com nosso implantodontista?";

const PROSTHESIS: &str = "Trabalhamos com próteses fixas, removíveis e protocolo sobre implantes. 😊\n\
Cada prótese é planejada para ficar confortável e natural. Vamos marcar uma avaliação?";

const ORTHODONTICS: &str = "Temos aparelho fixo metálico, estético e alinhadores invisíveis! 😁\n\
Na avaliação ortodôntica fazemos a documentação e te mostramos o plano completo.";

const WISDOM_TOOTH: &str = "A extração do siso é feita com anestesia e muito cuidado. 🦷\n\
Avaliamos sua radiografia antes para planejar um procedimento rápido e tranquilo.";

const EXTRACTION: &str = "Fazemos extrações simples e cirúrgicas com toda segurança e anestesia. 😊\n\
Sempre que possível, também te apresentamos opções para preservar ou repor o dente.";

const ROOT_CANAL: &str = "O tratamento de canal hoje é rápido e sem dor, feito com anestesia e instrumentos modernos. 🦷\n\
Ele salva o dente e acaba com a dor. Quer agendar?";

const CLEANING: &str = "A limpeza profissional remove tártaro e placa e previne cáries e problemas na gengiva. ✨\n\
O ideal é fazer a cada 6 meses. Posso verificar um horário para você?";

const VENEERS: &str = "As lentes de contato dental e facetas transformam o sorriso de forma natural e duradoura! ✨\n\
Fazemos um planejamento digital para você ver o resultado antes de começar.";

const HARMONIZATION: &str = "Na harmonização facial trabalhamos com toxina botulínica, preenchimento com ácido hialurônico, \
bioestimuladores e bichectomia. ✨\nTudo com planejamento individual para um resultado natural.";

const RESTORATION: &str = "Tratamos cáries com restaurações em resina da cor do dente, resistentes e imperceptíveis. 🦷\n\
Quanto antes tratar, mais simples e rápido fica!";

const GUMS: &str = "Gengiva sangrando ou sensível pode ser sinal de gengivite ou periodontite. 💙\n\
Nosso periodontista avalia e trata para proteger seus dentes. Vamos agendar?";

const BRUXISM: &str = "Para bruxismo fazemos placa miorrelaxante sob medida e, se indicado, aplicação de toxina botulínica. 😊\n\
Isso protege os dentes e alivia a tensão na mandíbula.";

const HALITOSIS: &str = "O mau hálito tem tratamento! 😊 Na avaliação investigamos a causa e indicamos o tratamento certo, \
com limpeza profissional e orientações de higiene.";

const PEDIATRIC: &str = "Temos odontopediatria com atendimento lúdico e acolhedor para os pequenos! 🧸\n\
A primeira consulta é ideal assim que nascem os primeiros dentinhos.";

const SENSITIVITY: &str = "Sensibilidade nos dentes tem tratamento! 💙 Avaliamos a causa e aplicamos dessensibilizantes \
ou restaurações quando necessário.";

const SCHEDULING: &str = "Vamos agendar! 📅 Atendemos de segunda a sexta das 8h às 20h e aos sábados das 8h às 13h.\n\
Qual dia e período ficam melhores para você?";

const LOCATION: &str = "Estamos no centro da cidade, com fácil acesso e estacionamento conveniado. 📍\n\
Quer que eu envie a localização?";

const CONTACT: &str = "Você pode falar com a gente por aqui mesmo ou pelo nosso WhatsApp da recepção. 📱\n\
Respondemos rapidinho!";

const INSURANCE: &str = "Atendemos alguns convênios odontológicos e também oferecemos condições particulares especiais. 😊\n\
Me diga qual é o seu plano que verifico para você.";

const WARRANTY: &str = "Todos os nossos tratamentos têm garantia por escrito e acompanhamento depois de concluídos. 💙";

const PRICING: &str = "Os valores dependem do seu caso, por isso a avaliação inicial é gratuita! 😊\n\
Nela montamos seu plano de tratamento com todos os valores e condições de pagamento, sem surpresas.";

const PROMOTION: &str = "Temos condições especiais para quem agenda pelo chat! ✨\n\
Vamos marcar sua avaliação gratuita para você conhecer as ofertas?";

const FEAR: &str = "Muita gente sente isso, e está tudo bem! 💙\n\
Nossa equipe é especializada em pacientes ansiosos: explicamos cada passo, usamos anestesia moderna \
e você pode pedir pausa a qualquer momento.";

const PAIN: &str = "Os procedimentos são feitos com anestesia e técnicas modernas para você não sentir dor. 😊\n\
Se estiver com dor agora, temos atendimento de urgência.";

const THINK_IT_OVER: &str = "Claro, pense com calma! 😊\n\
Se quiser, já deixo sua avaliação gratuita pré-agendada, e você pode remarcar quando quiser.";

const NO_TIME: &str = "Entendo a correria! ⏰ Temos horários cedo, à noite e aos sábados, e a maioria das consultas é rápida.\n\
Qual horário encaixa melhor na sua rotina?";

const EMERGENCY: &str = "Temos atendimento de urgência! 🚨 Me conte o que aconteceu e o melhor horário \
que tentamos te encaixar ainda hoje.";

const DURATION: &str = "A duração depende do tratamento: uma limpeza leva cerca de 40 minutos, um clareamento \
de consultório cerca de 1 hora. ⏱️\nNa avaliação te passamos o cronograma completo.";

const EVALUATION: &str = "A avaliação inicial é gratuita! 😊 Nela fazemos o exame clínico, tiramos dúvidas e montamos \
seu plano de tratamento. Vamos agendar?";

const TEAM: &str = "Nossa equipe tem especialistas em implantes, ortodontia, estética, endodontia e harmonização facial. 🦷\n\
Cada paciente é atendido pelo profissional certo para o seu caso.";

const KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry { pattern: Pattern::Word("oi"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Word("olá"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Word("ola"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Contains("bom dia"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Contains("boa tarde"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Contains("boa noite"), reply: GREETING, service: None, topic: "greeting" },
    KeywordEntry { pattern: Pattern::Contains("obrigad"), reply: THANKS, service: None, topic: "thanks" },
    KeywordEntry { pattern: Pattern::Word("valeu"), reply: THANKS, service: None, topic: "thanks" },
    KeywordEntry { pattern: Pattern::Word("tchau"), reply: FAREWELL, service: None, topic: "farewell" },
    KeywordEntry { pattern: Pattern::Contains("até mais"), reply: FAREWELL, service: None, topic: "farewell" },
    KeywordEntry { pattern: Pattern::Contains("clareamento"), reply: WHITENING, service: Some("clareamento"), topic: "clareamento" },
    KeywordEntry { pattern: Pattern::Contains("clarear"), reply: WHITENING, service: Some("clareamento"), topic: "clareamento" },
    KeywordEntry { pattern: Pattern::Contains("dentes brancos"), reply: WHITENING, service: Some("clareamento"), topic: "clareamento" },
    KeywordEntry { pattern: Pattern::Contains("amarelad"), reply: WHITENING, service: Some("clareamento"), topic: "clareamento" },
    KeywordEntry { pattern: Pattern::Contains("implante"), reply: IMPLANT, service: Some("implante"), topic: "implante" },
    KeywordEntry { pattern: Pattern::Contains("dente faltando"), reply: IMPLANT, service: Some("implante"), topic: "implante" },
    KeywordEntry { pattern: Pattern::Contains("prótese"), reply: PROSTHESIS, service: Some("prótese"), topic: "prótese" },
    KeywordEntry { pattern: Pattern::Contains("protese"), reply: PROSTHESIS, service: Some("prótese"), topic: "prótese" },
    KeywordEntry { pattern: Pattern::Contains("dentadura"), reply: PROSTHESIS, service: Some("prótese"), topic: "prótese" },
    KeywordEntry { pattern: Pattern::Contains("aparelho"), reply: ORTHODONTICS, service: Some("ortodontia"), topic: "ortodontia" },
    KeywordEntry { pattern: Pattern::Contains("ortodont"), reply: ORTHODONTICS, service: Some("ortodontia"), topic: "ortodontia" },
    KeywordEntry { pattern: Pattern::Contains("alinhador"), reply: ORTHODONTICS, service: Some("ortodontia"), topic: "ortodontia" },
    KeywordEntry { pattern: Pattern::Contains("dentes tortos"), reply: ORTHODONTICS, service: Some("ortodontia"), topic: "ortodontia" },
    KeywordEntry { pattern: Pattern::Contains("siso"), reply: WISDOM_TOOTH, service: Some("siso"), topic: "siso" },
    KeywordEntry { pattern: Pattern::Contains("juízo"), reply: WISDOM_TOOTH, service: Some("siso"), topic: "siso" },
    KeywordEntry { pattern: Pattern::Contains("juizo"), reply: WISDOM_TOOTH, service: Some("siso"), topic: "siso" },
    KeywordEntry { pattern: Pattern::Contains("extração"), reply: EXTRACTION, service: Some("extração"), topic: "extração" },
    KeywordEntry { pattern: Pattern::Contains("extracao"), reply: EXTRACTION, service: Some("extração"), topic: "extração" },
    KeywordEntry { pattern: Pattern::Contains("arrancar"), reply: EXTRACTION, service: Some("extração"), topic: "extração" },
    KeywordEntry { pattern: Pattern::Word("canal"), reply: ROOT_CANAL, service: Some("canal"), topic: "canal" },
    KeywordEntry { pattern: Pattern::Contains("endodont"), reply: ROOT_CANAL, service: Some("canal"), topic: "canal" },
    KeywordEntry { pattern: Pattern::Contains("limpeza"), reply: CLEANING, service: Some("limpeza"), topic: "limpeza" },
    KeywordEntry { pattern: Pattern::Contains("tártaro"), reply: CLEANING, service: Some("limpeza"), topic: "limpeza" },
    KeywordEntry { pattern: Pattern::Contains("tartaro"), reply: CLEANING, service: Some("limpeza"), topic: "limpeza" },
    KeywordEntry { pattern: Pattern::Contains("lente de contato"), reply: VENEERS, service: Some("lentes"), topic: "lentes" },
    KeywordEntry { pattern: Pattern::Contains("lentes de contato"), reply: VENEERS, service: Some("lentes"), topic: "lentes" },
    KeywordEntry { pattern: Pattern::Contains("faceta"), reply: VENEERS, service: Some("lentes"), topic: "lentes" },
    KeywordEntry { pattern: Pattern::Contains("harmonização"), reply: HARMONIZATION, service: Some("harmonização"), topic: "harmonização" },
    KeywordEntry { pattern: Pattern::Contains("harmonizacao"), reply: HARMONIZATION, service: Some("harmonização"), topic: "harmonização" },
    KeywordEntry { pattern: Pattern::Contains("botox"), reply: HARMONIZATION, service: Some("harmonização"), topic: "harmonização" },
    KeywordEntry { pattern: Pattern::Contains("preenchimento"), reply: HARMONIZATION, service: Some("harmonização"), topic: "harmonização" },
    KeywordEntry { pattern: Pattern::Contains("bichectomia"), reply: HARMONIZATION, service: Some("harmonização"), topic: "harmonização" },
    KeywordEntry { pattern: Pattern::Contains("cárie"), reply: RESTORATION, service: Some("restauração"), topic: "restauração" },
    KeywordEntry { pattern: Pattern::Contains("carie"), reply: RESTORATION, service: Some("restauração"), topic: "restauração" },
    KeywordEntry { pattern: Pattern::Contains("restauração"), reply: RESTORATION, service: Some("restauração"), topic: "restauração" },
    KeywordEntry { pattern: Pattern::Contains("obturação"), reply: RESTORATION, service: Some("restauração"), topic: "restauração" },
    KeywordEntry { pattern: Pattern::Contains("gengiva"), reply: GUMS, service: Some("periodontia"), topic: "periodontia" },
    KeywordEntry { pattern: Pattern::Contains("periodont"), reply: GUMS, service: Some("periodontia"), topic: "periodontia" },
    KeywordEntry { pattern: Pattern::Contains("bruxismo"), reply: BRUXISM, service: Some("bruxismo"), topic: "bruxismo" },
    KeywordEntry { pattern: Pattern::Contains("ranger os dentes"), reply: BRUXISM, service: Some("bruxismo"), topic: "bruxismo" },
    KeywordEntry { pattern: Pattern::Contains("mau hálito"), reply: HALITOSIS, service: Some("halitose"), topic: "halitose" },
    KeywordEntry { pattern: Pattern::Contains("mau halito"), reply: HALITOSIS, service: Some("halitose"), topic: "halitose" },
    KeywordEntry { pattern: Pattern::Contains("odontopediatr"), reply: PEDIATRIC, service: Some("odontopediatria"), topic: "odontopediatria" },
    KeywordEntry { pattern: Pattern::Contains("criança"), reply: PEDIATRIC, service: Some("odontopediatria"), topic: "odontopediatria" },
    KeywordEntry { pattern: Pattern::Contains("crianca"), reply: PEDIATRIC, service: Some("odontopediatria"), topic: "odontopediatria" },
    KeywordEntry { pattern: Pattern::Contains("sensibilidade"), reply: SENSITIVITY, service: Some("sensibilidade"), topic: "sensibilidade" },
    KeywordEntry { pattern: Pattern::Contains("agendar"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("agendamento"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("marcar"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("horário"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("horario"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("sábado"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("sabado"), reply: SCHEDULING, service: None, topic: "schedule" },
    KeywordEntry { pattern: Pattern::Contains("endereço"), reply: LOCATION, service: None, topic: "location" },
    KeywordEntry { pattern: Pattern::Contains("endereco"), reply: LOCATION, service: None, topic: "location" },
    KeywordEntry { pattern: Pattern::Contains("onde fica"), reply: LOCATION, service: None, topic: "location" },
    KeywordEntry { pattern: Pattern::Contains("estacionamento"), reply: LOCATION, service: None, topic: "location" },
    KeywordEntry { pattern: Pattern::Contains("whatsapp"), reply: CONTACT, service: None, topic: "contact" },
    KeywordEntry { pattern: Pattern::Contains("telefone"), reply: CONTACT, service: None, topic: "contact" },
    KeywordEntry { pattern: Pattern::Contains("convênio"), reply: INSURANCE, service: None, topic: "insurance" },
    KeywordEntry { pattern: Pattern::Contains("convenio"), reply: INSURANCE, service: None, topic: "insurance" },
    KeywordEntry { pattern: Pattern::Contains("plano odontológico"), reply: INSURANCE, service: None, topic: "insurance" },
    KeywordEntry { pattern: Pattern::Contains("garantia"), reply: WARRANTY, service: None, topic: "warranty" },
    KeywordEntry { pattern: Pattern::Contains("quanto custa"), reply: PRICING, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("preço"), reply: PRICING, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("preco"), reply: PRICING, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("valor"), reply: PRICING, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("orçamento"), reply: PRICING, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("desconto"), reply: PROMOTION, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("promoção"), reply: PROMOTION, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Contains("promocao"), reply: PROMOTION, service: None, topic: "pricing" },
    KeywordEntry { pattern: Pattern::Word("medo"), reply: FEAR, service: None, topic: "fear" },
    KeywordEntry { pattern: Pattern::Contains("pavor"), reply: FEAR, service: None, topic: "fear" },
    KeywordEntry { pattern: Pattern::Contains("anestesia"), reply: PAIN, service: None, topic: "fear" },
    KeywordEntry { pattern: Pattern::Word("dói"), reply: PAIN, service: None, topic: "fear" },
    KeywordEntry { pattern: Pattern::Word("doi"), reply: PAIN, service: None, topic: "fear" },
    KeywordEntry { pattern: Pattern::Contains("vou pensar"), reply: THINK_IT_OVER, service: None, topic: "objection" },
    KeywordEntry { pattern: Pattern::Contains("depois eu vejo"), reply: THINK_IT_OVER, service: None, topic: "objection" },
    KeywordEntry { pattern: Pattern::Contains("sem tempo"), reply: NO_TIME, service: None, topic: "objection" },
    KeywordEntry { pattern: Pattern::Contains("não tenho tempo"), reply: NO_TIME, service: None, topic: "objection" },
    KeywordEntry { pattern: Pattern::Contains("nao tenho tempo"), reply: NO_TIME, service: None, topic: "objection" },
    KeywordEntry { pattern: Pattern::Contains("urgência"), reply: EMERGENCY, service: Some("urgência"), topic: "emergency" },
    KeywordEntry { pattern: Pattern::Contains("urgencia"), reply: EMERGENCY, service: Some("urgência"), topic: "emergency" },
    KeywordEntry { pattern: Pattern::Contains("emergência"), reply: EMERGENCY, service: Some("urgência"), topic: "emergency" },
    KeywordEntry { pattern: Pattern::Contains("quebrou"), reply: EMERGENCY, service: Some("urgência"), topic: "emergency" },
    KeywordEntry { pattern: Pattern::Word("dor"), reply: EMERGENCY, service: Some("urgência"), topic: "emergency" },
    KeywordEntry { pattern: Pattern::Contains("quanto tempo"), reply: DURATION, service: None, topic: "duration" },
    KeywordEntry { pattern: Pattern::Contains("demora"), reply: DURATION, service: None, topic: "duration" },
    KeywordEntry { pattern: Pattern::Contains("avaliação"), reply: EVALUATION, service: None, topic: "appointment" },
    KeywordEntry { pattern: Pattern::Contains("avaliacao"), reply: EVALUATION, service: None, topic: "appointment" },
    KeywordEntry { pattern: Pattern::Contains("consulta"), reply: EVALUATION, service: None, topic: "appointment" },
    KeywordEntry { pattern: Pattern::Contains("dentista"), reply: TEAM, service: None, topic: "team" },
    KeywordEntry { pattern: Pattern::Contains("especialista"), reply: TEAM, service: None, topic: "team" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_has_three_variants() {
        assert_eq!(ScriptBook::portuguese().payment.pix.len(), 3);
    }

    #[test]
    fn test_why_us_scripts_have_five_each() {
        let book = ScriptBook::portuguese();
        assert_eq!(book.hard_sell.len(), 5);
        assert_eq!(book.advantages.len(), 5);
    }

    #[test]
    fn test_alternates_are_two_and_distinct_from_primary() {
        let book = ScriptBook::portuguese();
        assert_eq!(book.price_alternates.len(), 2);
        assert!(!book.price_alternates.contains(&book.price_primary));
        assert_eq!(book.comparison_alternates.len(), 2);
        assert!(!book.comparison_alternates.contains(&book.comparison_primary));
    }

    #[test]
    fn test_discount_copy_matches_granted_floors() {
        let book = ScriptBook::portuguese();
        assert!(book.price_primary.contains("10%"));
        assert!(!book.comparison_primary.contains('%'));
        assert!(book.bereavement.contains("15%"));
        assert!(book.negative_escalation.contains("15%"));
        assert!(book.sentiment_negative_discount.contains("15%"));
        assert!(book.distress.contains("20%"));
        assert!(book.negative_escalation_cap.contains("20%"));
    }

    #[test]
    fn test_keyword_patterns_are_lowercase() {
        for entry in ScriptBook::portuguese().keywords {
            let p = entry.pattern.as_str();
            assert_eq!(p, p.to_lowercase(), "pattern {p:?} must be lowercase");
        }
        for intent in ScriptBook::portuguese().intents {
            assert_eq!(intent.phrase, intent.phrase.to_lowercase());
        }
    }

    #[test]
    fn test_keyword_table_size() {
        assert!(ScriptBook::portuguese().keywords.len() >= 80);
    }
}
