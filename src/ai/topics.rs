/// Conversation topics the local stylist knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Colors,
    Work,
    Accessories,
    DateNight,
    Makeup,
    General,
}

/// Keywords, canned replies and follow-up chips for one topic
pub struct TopicProfile {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub replies: &'static [&'static str],
    pub suggestions: [&'static str; 3],
}

impl TopicProfile {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|&word| normalized.contains(word))
    }
}

impl Topic {
    /// Picks the first topic (in table order) with a keyword inside `input`.
    pub fn classify(input: &str) -> Topic {
        let normalized = input.to_lowercase();
        TOPICS
            .iter()
            .find(|profile| profile.matches(&normalized))
            .map(|profile| profile.topic)
            .unwrap_or(Topic::General)
    }

    pub fn profile(self) -> &'static TopicProfile {
        match self {
            Topic::Colors => &TOPICS[0],
            Topic::Work => &TOPICS[1],
            Topic::Accessories => &TOPICS[2],
            Topic::DateNight => &TOPICS[3],
            Topic::Makeup => &TOPICS[4],
            Topic::General => &GENERAL,
        }
    }
}

// Порядок важен: первая совпавшая тема побеждает
pub static TOPICS: [TopicProfile; 5] = [
    TopicProfile {
        topic: Topic::Colors,
        keywords: &["cor", "tons", "paleta"],
        replies: &[
            "Analisando seu tom de pele, tons rosé e lilás são absolutamente perfeitos para você! ✨ Essas cores realçam sua luminosidade natural e criam uma harmonia incrível com suas características faciais.",
            "Cores douradas e creme são suas aliadas para looks elegantes! Elas trazem sofisticação e complementam perfeitamente seu tom de pele, criando um visual luminoso.",
            "Para ocasiões especiais, a combinação rosé + dourado é sua assinatura! É uma paleta que transmite elegância e confiança - perfeita para destacar sua personalidade única.",
            "Com base na sua análise, cores neutras como branco e creme são sua base ideal. Adicione toques de rosé ou lilás para criar interesse visual sem exagerar!",
        ],
        suggestions: [
            "Como combinar essas cores?",
            "Maquiagem que combina",
            "Looks para cada estação",
        ],
    },
    TopicProfile {
        topic: Topic::Work,
        keywords: &["trabalho", "profissional", "escritório"],
        replies: &[
            "Para o ambiente profissional, sua estratégia é sofisticação sutil! 👔 Comece com peças neutras em creme ou branco e adicione um toque de cor com um blazer rosé suave.",
            "Seu look de trabalho ideal: blazer estruturado + camisa branca + acessórios dourados discretos. Essa combinação transmite autoridade e elegância simultaneamente.",
            "Dica profissional: invista em peças de qualidade em tons neutros. Você pode variar com lenços ou acessórios em suas cores ideais para manter a sofisticação.",
            "Para reuniões importantes, aposte no poder do minimalismo elegante: cores neutras + um acessório dourado statement. Simplicidade é sinônimo de confiança!",
        ],
        suggestions: [
            "Looks para apresentações",
            "Sapatos confortáveis",
            "Como variar no dia a dia",
        ],
    },
    TopicProfile {
        topic: Topic::Accessories,
        keywords: &["acessório", "joia", "bolsa"],
        replies: &[
            "Seus acessórios de assinatura são dourados! ✨ Eles harmonizam perfeitamente com sua paleta e elevam qualquer look básico para algo especial.",
            "Para o dia a dia: brincos delicados, um colar sutil e relógio dourado. Para eventos: você pode ousar com peças statement que mantêm a elegância!",
            "Bolsas em tons neutros ou rosé combinam perfeitamente com você. Evite cores muito vibrantes que podem competir com sua beleza natural.",
            "Dica especial: óculos de sol com armação dourada ou rosé são perfeitos para você! Eles complementam sua paleta e protegem com estilo.",
        ],
        suggestions: [
            "Bolsas para cada ocasião",
            "Óculos de sol ideais",
            "Joias statement",
        ],
    },
    TopicProfile {
        topic: Topic::DateNight,
        keywords: &["encontro", "date", "romântico", "jantar"],
        replies: &[
            "Para um encontro especial, vamos criar magia! 💕 Um vestido ou conjunto em lilás suave com acessórios dourados é a receita perfeita para você brilhar.",
            "Seu look de encontro ideal: algo que transmita feminilidade e confiança. Tons rosé ou lilás + maquiagem que realce seus olhos + um perfume marcante!",
            "Para um jantar romântico: vestido midi em tom rosé + saltos nude + joias douradas delicadas. Elegante, feminino e totalmente você!",
            "Primeira impressão conta! Aposte em peças que valorizam sua silhueta em suas cores ideais. A confiança que você irá transmitir será irresistível! ✨",
        ],
        suggestions: [
            "Maquiagem para encontro",
            "Sapatos para impressionar",
            "Perfumes marcantes",
        ],
    },
    TopicProfile {
        topic: Topic::Makeup,
        keywords: &["maquiagem", "makeup", "batom", "sombra"],
        replies: &[
            "Sua maquiagem ideal realça seus olhos e complementa seu tom de pele! Base com undertone quente + blush rosé + batom em tons nude ou rosé.",
            "Para o dia: base natural + máscara + batom hidratante rosé. Para a noite: adicione sombra dourada ou rosé para criar profundidade!",
            "Com seu tom de pele, sombras em tons dourados, rosé e lilás são perfeitas! Elas harmonizam com sua paleta natural e destacam seus olhos.",
            "Dica da Luna: um gloss transparente com reflexos dourados é perfeito para você! Mantém a naturalidade mas adiciona um toque especial.",
        ],
        suggestions: [
            "Base ideal para mim",
            "Cores de batom",
            "Maquiagem para o dia",
        ],
    },
];

pub static GENERAL: TopicProfile = TopicProfile {
    topic: Topic::General,
    keywords: &[],
    replies: &[
        "Baseando-me na sua análise completa, você tem um estilo naturalmente elegante e sofisticado! ✨ Sua personalidade brilha com looks que misturam clássico e moderno.",
        "Você tem um perfil de estilo que valoriza qualidade sobre quantidade. Invista em peças atemporais em suas cores ideais - elas nunca saem de moda!",
        "Sua essência é feminina e confiante! Looks que destacam essa combinação são perfeitos: linhas limpas, cores harmoniosas e acessórios bem escolhidos.",
        "Lembre-se sempre: seu maior acessório é sua confiança! Com as dicas certas e suas cores ideais, você tem tudo para criar looks incríveis. 💫",
    ],
    suggestions: [
        "Dicas de combinações",
        "Cuidados com as roupas",
        "Tendências que combinam",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Topic; 6] = [
        Topic::Colors,
        Topic::Work,
        Topic::Accessories,
        Topic::DateNight,
        Topic::Makeup,
        Topic::General,
    ];

    #[test]
    fn test_profile_lookup_is_consistent() {
        for topic in ALL {
            assert_eq!(topic.profile().topic, topic);
        }
    }

    #[test]
    fn test_every_topic_has_replies() {
        for topic in ALL {
            let profile = topic.profile();
            assert!(!profile.replies.is_empty(), "{:?} has no replies", topic);
            assert!(profile.replies.iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for profile in TOPICS.iter() {
            for keyword in profile.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(Topic::classify("quais cores ficam bem em mim"), Topic::Colors);
        assert_eq!(Topic::classify("looks para o trabalho"), Topic::Work);
        assert_eq!(Topic::classify("qual bolsa usar?"), Topic::Accessories);
        assert_eq!(Topic::classify("vou a um jantar"), Topic::DateNight);
        assert_eq!(Topic::classify("dicas de batom"), Topic::Makeup);
        assert_eq!(Topic::classify("xyz123"), Topic::General);
        assert_eq!(Topic::classify(""), Topic::General);
    }

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(Topic::classify("CORES"), Topic::classify("cores"));
        assert_eq!(Topic::classify("ACESSÓRIOS DOURADOS"), Topic::Accessories);
        assert_eq!(Topic::classify("Escritório"), Topic::Work);
    }

    #[test]
    fn test_first_topic_in_order_wins() {
        // "cores" и "batom": цвета проверяются раньше макияжа
        assert_eq!(Topic::classify("Cores de batom"), Topic::Colors);
        assert_eq!(Topic::classify("Maquiagem para encontro"), Topic::DateNight);
        assert_eq!(Topic::classify("joias para o trabalho"), Topic::Work);
    }
}
