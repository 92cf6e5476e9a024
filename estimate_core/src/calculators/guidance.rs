//! Professional tips and frequently asked questions shown next to a
//! calculator. Calculators without entries return an empty [`Guidance`].

use serde::Serialize;

use super::CalculatorId;

/// A question and its short answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Tips and FAQs for one calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Guidance {
    pub tips: Vec<&'static str>,
    pub faqs: Vec<Faq>,
}

impl Guidance {
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty() && self.faqs.is_empty()
    }
}

fn faq(question: &'static str, answer: &'static str) -> Faq {
    Faq { question, answer }
}

pub(super) fn for_calculator(id: CalculatorId) -> Guidance {
    match id {
        CalculatorId::DrywallWall => Guidance {
            tips: vec![
                "Medir o ambiente corretamente (Largura x Altura).",
                "Montagem de perfis alinhada e nivelada (espaçamento 40 ou 60cm).",
                "Use placas ST (Standard) para áreas secas e RU (Resistente à Umidade) para banheiros.",
                "Acabamento de juntas com fita e massa específica é crucial.",
            ],
            faqs: vec![
                faq(
                    "Qual a diferença entre parede divisória e estrutural?",
                    "Divisória é leve e modular; estrutural (Steel Frame) suporta peso da laje/telhado.",
                ),
                faq(
                    "Qual a altura máxima segura?",
                    "Geralmente até 3m com montantes simples de 48mm. Acima disso, use montantes duplos ou de 70/90mm.",
                ),
            ],
        },
        CalculatorId::DrywallCeiling => Guidance {
            tips: vec![
                "Verifique o nivelamento do teto com nível a laser ou mangueira.",
                "Mantenha pé-direito mínimo de 2,50m sempre que possível.",
                "Defina posição de luminárias antes de fechar as placas.",
            ],
            faqs: vec![
                faq(
                    "Quanto tempo leva a instalação?",
                    "É rápido, cerca de 2-3 dias para um apartamento pequeno, incluindo tratamento de juntas.",
                ),
                faq(
                    "Posso instalar lustre pesado?",
                    "Sim, mas deve ser fixado na laje ou em reforço de madeira acima do gesso, nunca só na placa.",
                ),
            ],
        },
        CalculatorId::ConventionalCeiling => Guidance {
            tips: vec![
                "Umedeça as placas antes de chumbar para melhor aderência.",
                "Use sisal com gesso cola para fixação robusta.",
                "O acabamento é artesanal, capriche na junção das placas 60x60.",
            ],
            faqs: vec![faq(
                "Diferença pro Drywall?",
                "O convencional é mais barato em material, mas faz mais sujeira e demora mais para secar.",
            )],
        },
        CalculatorId::Stairs => Guidance {
            tips: vec![
                "Fórmula de Blondel: 2E + P = 63 a 64cm (E=Espelho, P=Piso).",
                "Altura ideal do degrau (espelho) é entre 16 e 18cm.",
                "Profundidade do piso ideal é entre 25 e 30cm.",
            ],
            faqs: vec![faq(
                "Posso fazer degrau com 20cm de altura?",
                "Não é recomendado, fica cansativo e perigoso para idosos e crianças.",
            )],
        },
        CalculatorId::Flooring => Guidance {
            tips: vec![
                "Sempre compre 10% a mais para recortes e perdas (ou 15% se for colocação diagonal).",
                "Verifique o nível do contrapiso antes de começar.",
                "Siga a seta no verso do piso para manter o desenho/tom.",
            ],
            faqs: vec![faq(
                "Qual argamassa usar?",
                "AC-I (Interno), AC-II (Externo/Interno), AC-III (Porcelanatos grandes e Fachadas).",
            )],
        },
        _ => Guidance::default(),
    }
}
