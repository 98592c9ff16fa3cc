//! Prompt templates for the two tiers

use crate::core::locale::Locale;
use crate::core::query::Query;
use crate::orchestration::value_objects::PromptPair;

/// Templates for the fast acknowledgment and the deep answer
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build both prompts for a query. Pure and deterministic.
    pub fn build(query: &Query, locale: Locale) -> PromptPair {
        PromptPair::new(
            Self::fast_prompt(query.text(), locale),
            Self::deep_prompt(query.text(), locale),
        )
    }

    /// Prompt asking for one short sentence confirming the question was understood.
    pub fn fast_prompt(query: &str, locale: Locale) -> String {
        match locale {
            Locale::Korean => format!(
                r#"사용자가 다음 질문을 했습니다: "{}"

당신은 친절한 AI 어시스턴트입니다. 질문을 이해했으며, 상세한 답변을 준비하고 있다는 내용의 짧고 격려하는 한 문장으로 응답해주세요. 한국어로 답변하세요."#,
                query
            ),
            Locale::English => format!(
                r#"The user asked the following question: "{}"

You are a friendly AI assistant. Reply with one short, encouraging sentence saying that you understood the question and are preparing a detailed answer. Answer in English."#,
                query
            ),
        }
    }

    /// Prompt asking for an expert-level, structured answer.
    pub fn deep_prompt(query: &str, locale: Locale) -> String {
        match locale {
            Locale::Korean => format!(
                r#"다음 질문에 대해 전문가 수준의 상세하고 구조화된 답변을 제공해주세요.
복잡한 주제는 이해하기 쉽게 나누어 설명하고, 필요한 경우 마크다운을 사용하여 서식을 지정해주세요.
한국어로 답변하세요.

질문: "{}""#,
                query
            ),
            Locale::English => format!(
                r#"Provide an expert-level, detailed and well-structured answer to the following question.
Break complex topics into parts that are easy to follow, and use markdown formatting where helpful.
Answer in English.

Question: "{}""#,
                query
            ),
        }
    }
}
